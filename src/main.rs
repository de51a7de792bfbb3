use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use propmgmnt::config::Config;
use propmgmnt::core::memory::InMemoryRepository;
use propmgmnt::core::traits::EntityRepository;
use propmgmnt::middleware::{ErrorLogger, RequestId};
use propmgmnt::modules;
use propmgmnt::modules::agreements::{Agreement, MySqlAgreementRepository};
use propmgmnt::modules::apartments::{Apartment, MySqlApartmentRepository};
use propmgmnt::modules::deposits::{Deposit, MySqlDepositRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "propmgmnt=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting propmgmnt property management backend");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Explicit repository wiring; handlers receive these through web::Data.
    // DATABASE_URL=memory keeps everything in process for local development.
    let (apartment_repo, deposit_repo, agreement_repo): (
        Arc<dyn EntityRepository<Apartment>>,
        Arc<dyn EntityRepository<Deposit>>,
        Arc<dyn EntityRepository<Agreement>>,
    ) = if config.database.url == "memory" {
        tracing::info!("Using in-memory entity stores (no database)");
        (
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
        )
    } else {
        let db_pool = config
            .database
            .create_pool()
            .await
            .context("Failed to create database pool")?;

        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!(
            "Database pool initialized ({} connections)",
            config.database.pool_size
        );

        (
            Arc::new(MySqlApartmentRepository::new(db_pool.clone())),
            Arc::new(MySqlDepositRepository::new(db_pool.clone())),
            Arc::new(MySqlAgreementRepository::new(db_pool)),
        )
    };

    let allowed_origin = config.cors.allowed_origin.clone();
    let bind_address = config.server.bind_address();

    let server = HttpServer::new(move || {
        let cors = match allowed_origin.as_deref() {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(ErrorLogger)
            .wrap(RequestId)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(apartment_repo.clone()))
            .app_data(web::Data::new(deposit_repo.clone()))
            .app_data(web::Data::new(agreement_repo.clone()))
            .configure(modules::configure_api)
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "propmgmnt"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Property Management Backend",
        "version": "0.1.0",
        "status": "running"
    }))
}
