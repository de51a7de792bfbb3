use std::sync::Arc;

use actix_web::{http::header, web, HttpResponse};
use serde::Deserialize;

use crate::core::alerts;
use crate::core::error::AppError;
use crate::core::traits::EntityRepository;
use crate::modules::deposits::models::Deposit;

const ENTITY_NAME: &str = "deposit";

type DepositRepo = web::Data<Arc<dyn EntityRepository<Deposit>>>;

/// Query parameters for listing deposits
#[derive(Debug, Deserialize)]
pub struct ListDepositsQuery {
    pub filter: Option<String>,
}

/// Create a new deposit
/// POST /api/deposits
pub async fn create_deposit(
    repo: DepositRepo,
    payload: web::Json<Deposit>,
) -> Result<HttpResponse, AppError> {
    let deposit = payload.into_inner();
    tracing::debug!(amount = %deposit.amount, "REST request to save deposit");

    if deposit.id.is_some() {
        return Err(AppError::id_exists(ENTITY_NAME));
    }
    deposit.validate()?;

    let saved = repo.save(deposit).await?;
    let id = saved
        .id
        .ok_or_else(|| AppError::internal("store returned a deposit without an id"))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/deposits/{}", id)))
        .insert_header(alerts::alert(ENTITY_NAME, "created"))
        .insert_header(alerts::params(id))
        .json(saved))
}

/// Update an existing deposit (whole-record replace)
/// PUT /api/deposits
pub async fn update_deposit(
    repo: DepositRepo,
    payload: web::Json<Deposit>,
) -> Result<HttpResponse, AppError> {
    let deposit = payload.into_inner();
    tracing::debug!(id = ?deposit.id, "REST request to update deposit");

    let Some(id) = deposit.id else {
        return Err(AppError::id_null(ENTITY_NAME));
    };
    deposit.validate()?;

    let saved = repo.save(deposit).await?;

    Ok(HttpResponse::Ok()
        .insert_header(alerts::alert(ENTITY_NAME, "updated"))
        .insert_header(alerts::params(id))
        .json(saved))
}

/// List deposits, optionally restricted to ones not tied to an agreement
/// GET /api/deposits?filter=agreement-is-null
pub async fn get_all_deposits(
    repo: DepositRepo,
    query: web::Query<ListDepositsQuery>,
) -> Result<HttpResponse, AppError> {
    let deposits = match query.filter.as_deref() {
        Some("agreement-is-null") => {
            tracing::debug!("REST request to get all deposits where agreement is null");
            repo.find_all()
                .await?
                .into_iter()
                .filter(|deposit| deposit.agreement_id.is_none())
                .collect()
        }
        _ => {
            tracing::debug!("REST request to get all deposits");
            repo.find_all().await?
        }
    };

    Ok(HttpResponse::Ok().json(deposits))
}

/// Get one deposit
/// GET /api/deposits/{id}
pub async fn get_deposit(
    repo: DepositRepo,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    tracing::debug!(id, "REST request to get deposit");

    match repo.find_by_id(id).await? {
        Some(deposit) => Ok(HttpResponse::Ok().json(deposit)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Delete one deposit; deleting an unknown id is a success
/// DELETE /api/deposits/{id}
pub async fn delete_deposit(
    repo: DepositRepo,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    tracing::debug!(id, "REST request to delete deposit");

    repo.delete_by_id(id).await?;

    Ok(HttpResponse::Ok()
        .insert_header(alerts::alert(ENTITY_NAME, "deleted"))
        .insert_header(alerts::params(id))
        .finish())
}

/// Configure deposit routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/deposits")
            .route("", web::post().to(create_deposit))
            .route("", web::put().to(update_deposit))
            .route("", web::get().to(get_all_deposits))
            .route("/{id}", web::get().to(get_deposit))
            .route("/{id}", web::delete().to(delete_deposit)),
    );
}
