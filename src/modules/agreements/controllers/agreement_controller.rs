use std::sync::Arc;

use actix_web::{http::header, web, HttpResponse};

use crate::core::alerts;
use crate::core::error::AppError;
use crate::core::traits::EntityRepository;
use crate::modules::agreements::models::Agreement;

const ENTITY_NAME: &str = "agreement";

type AgreementRepo = web::Data<Arc<dyn EntityRepository<Agreement>>>;

/// Create a new agreement
/// POST /api/agreements
pub async fn create_agreement(
    repo: AgreementRepo,
    payload: web::Json<Agreement>,
) -> Result<HttpResponse, AppError> {
    let agreement = payload.into_inner();
    tracing::debug!(number = %agreement.number, "REST request to save agreement");

    if agreement.id.is_some() {
        return Err(AppError::id_exists(ENTITY_NAME));
    }
    agreement.validate()?;

    let saved = repo.save(agreement).await?;
    let id = saved
        .id
        .ok_or_else(|| AppError::internal("store returned an agreement without an id"))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/agreements/{}", id)))
        .insert_header(alerts::alert(ENTITY_NAME, "created"))
        .insert_header(alerts::params(id))
        .json(saved))
}

/// Update an existing agreement (whole-record replace)
/// PUT /api/agreements
pub async fn update_agreement(
    repo: AgreementRepo,
    payload: web::Json<Agreement>,
) -> Result<HttpResponse, AppError> {
    let agreement = payload.into_inner();
    tracing::debug!(id = ?agreement.id, "REST request to update agreement");

    let Some(id) = agreement.id else {
        return Err(AppError::id_null(ENTITY_NAME));
    };
    agreement.validate()?;

    let saved = repo.save(agreement).await?;

    Ok(HttpResponse::Ok()
        .insert_header(alerts::alert(ENTITY_NAME, "updated"))
        .insert_header(alerts::params(id))
        .json(saved))
}

/// List all agreements
/// GET /api/agreements
pub async fn get_all_agreements(repo: AgreementRepo) -> Result<HttpResponse, AppError> {
    tracing::debug!("REST request to get all agreements");
    let agreements = repo.find_all().await?;
    Ok(HttpResponse::Ok().json(agreements))
}

/// Get one agreement
/// GET /api/agreements/{id}
pub async fn get_agreement(
    repo: AgreementRepo,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    tracing::debug!(id, "REST request to get agreement");

    match repo.find_by_id(id).await? {
        Some(agreement) => Ok(HttpResponse::Ok().json(agreement)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Delete one agreement; deleting an unknown id is a success
/// DELETE /api/agreements/{id}
pub async fn delete_agreement(
    repo: AgreementRepo,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    tracing::debug!(id, "REST request to delete agreement");

    repo.delete_by_id(id).await?;

    Ok(HttpResponse::Ok()
        .insert_header(alerts::alert(ENTITY_NAME, "deleted"))
        .insert_header(alerts::params(id))
        .finish())
}

/// Configure agreement routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/agreements")
            .route("", web::post().to(create_agreement))
            .route("", web::put().to(update_agreement))
            .route("", web::get().to(get_all_agreements))
            .route("/{id}", web::get().to(get_agreement))
            .route("/{id}", web::delete().to(delete_agreement)),
    );
}
