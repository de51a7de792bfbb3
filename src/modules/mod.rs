use actix_web::web;

pub mod agreements;
pub mod apartments;
pub mod deposits;

/// Mount every resource handler under the /api scope.
///
/// Shared between the server binary and the test applications so both wire
/// the same routing table.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(apartments::configure)
            .configure(deposits::configure)
            .configure(agreements::configure),
    );
}
