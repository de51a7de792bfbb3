//! Alert headers attached to mutating success responses.
//!
//! The SPA surfaces these as toast notifications: the alert header names
//! the entity and action, the params header carries the identifier.

pub const ALERT_HEADER: &str = "X-PropmgmntApp-Alert";
pub const PARAMS_HEADER: &str = "X-PropmgmntApp-Params";

/// Header pair announcing an action on an entity, e.g.
/// `propmgmntApp.apartment.created`.
pub fn alert(entity_name: &str, action: &str) -> (&'static str, String) {
    (
        ALERT_HEADER,
        format!("propmgmntApp.{}.{}", entity_name, action),
    )
}

/// Header pair carrying the affected identifier.
pub fn params(id: i64) -> (&'static str, String) {
    (PARAMS_HEADER, id.to_string())
}
