use std::sync::Arc;

use actix_web::{http::header, web, HttpResponse};
use serde::Deserialize;

use crate::core::alerts;
use crate::core::error::AppError;
use crate::core::traits::EntityRepository;
use crate::modules::apartments::models::Apartment;

const ENTITY_NAME: &str = "apartment";

type ApartmentRepo = web::Data<Arc<dyn EntityRepository<Apartment>>>;

/// Query parameters for listing apartments
#[derive(Debug, Deserialize)]
pub struct ListApartmentsQuery {
    pub filter: Option<String>,
}

/// Create a new apartment
/// POST /api/apartments
pub async fn create_apartment(
    repo: ApartmentRepo,
    payload: web::Json<Apartment>,
) -> Result<HttpResponse, AppError> {
    let apartment = payload.into_inner();
    tracing::debug!(name = %apartment.name, "REST request to save apartment");

    if apartment.id.is_some() {
        return Err(AppError::id_exists(ENTITY_NAME));
    }
    apartment.validate()?;

    let saved = repo.save(apartment).await?;
    let id = saved
        .id
        .ok_or_else(|| AppError::internal("store returned an apartment without an id"))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/apartments/{}", id)))
        .insert_header(alerts::alert(ENTITY_NAME, "created"))
        .insert_header(alerts::params(id))
        .json(saved))
}

/// Update an existing apartment (whole-record replace)
/// PUT /api/apartments
pub async fn update_apartment(
    repo: ApartmentRepo,
    payload: web::Json<Apartment>,
) -> Result<HttpResponse, AppError> {
    let apartment = payload.into_inner();
    tracing::debug!(id = ?apartment.id, "REST request to update apartment");

    let Some(id) = apartment.id else {
        return Err(AppError::id_null(ENTITY_NAME));
    };
    apartment.validate()?;

    let saved = repo.save(apartment).await?;

    Ok(HttpResponse::Ok()
        .insert_header(alerts::alert(ENTITY_NAME, "updated"))
        .insert_header(alerts::params(id))
        .json(saved))
}

/// List apartments, optionally restricted to units without an agreement
/// GET /api/apartments?filter=agreement-is-null
pub async fn get_all_apartments(
    repo: ApartmentRepo,
    query: web::Query<ListApartmentsQuery>,
) -> Result<HttpResponse, AppError> {
    let apartments = match query.filter.as_deref() {
        Some("agreement-is-null") => {
            tracing::debug!("REST request to get all apartments where agreement is null");
            repo.find_all()
                .await?
                .into_iter()
                .filter(|apartment| apartment.agreement_id.is_none())
                .collect()
        }
        _ => {
            tracing::debug!("REST request to get all apartments");
            repo.find_all().await?
        }
    };

    Ok(HttpResponse::Ok().json(apartments))
}

/// Get one apartment
/// GET /api/apartments/{id}
pub async fn get_apartment(
    repo: ApartmentRepo,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    tracing::debug!(id, "REST request to get apartment");

    match repo.find_by_id(id).await? {
        Some(apartment) => Ok(HttpResponse::Ok().json(apartment)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Delete one apartment; deleting an unknown id is a success
/// DELETE /api/apartments/{id}
pub async fn delete_apartment(
    repo: ApartmentRepo,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    tracing::debug!(id, "REST request to delete apartment");

    repo.delete_by_id(id).await?;

    Ok(HttpResponse::Ok()
        .insert_header(alerts::alert(ENTITY_NAME, "deleted"))
        .insert_header(alerts::params(id))
        .finish())
}

/// Configure apartment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/apartments")
            .route("", web::post().to(create_apartment))
            .route("", web::put().to(update_apartment))
            .route("", web::get().to(get_all_apartments))
            .route("/{id}", web::get().to(get_apartment))
            .route("/{id}", web::delete().to(delete_apartment)),
    );
}
