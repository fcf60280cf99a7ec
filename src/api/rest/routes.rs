//! Route registration for the ward profile REST API

use super::{dto::*, handlers};
use crate::domain::Service;
use axum::{
    routing::{delete, get, post, put},
    Extension, Router,
};
use std::sync::Arc;

/// Build the router with all endpoints
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        // Ward endpoints
        .route("/wards", get(list_wards_handler))
        // Survey record endpoints
        .route("/records", get(list_records_handler))
        .route("/records", post(create_record_handler))
        .route("/records/{id}", get(get_record_handler))
        .route("/records/{id}", put(update_record_handler))
        .route("/records/{id}", delete(delete_record_handler))
        // Aggregation endpoints
        .route("/summary", get(summary_handler))
        // Facility endpoints
        .route("/facilities", get(list_facilities_handler))
        .route("/facilities", post(create_facility_handler))
        .route("/facilities/{id}", get(get_facility_handler))
        .route("/facilities/{id}", put(update_facility_handler))
        .route("/facilities/{id}", delete(delete_facility_handler))
        // Media endpoints
        .route("/facilities/{id}/media", post(add_media_handler))
        .route("/media/{id}", delete(delete_media_handler))
        .route("/media/{id}/primary", put(set_primary_media_handler))
        // Add service as extension for handlers
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_wards_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<axum::Json<WardsListResponse>, super::error::Problem> {
    handlers::list_wards(service).await
}

async fn list_records_handler(
    Extension(service): Extension<Arc<Service>>,
    query: axum::extract::Query<handlers::ListRecordsQuery>,
) -> Result<axum::Json<RecordsListResponse>, super::error::Problem> {
    handlers::list_records(service, query).await
}

async fn get_record_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<uuid::Uuid>,
) -> Result<axum::Json<SurveyRecordDto>, super::error::Problem> {
    handlers::get_record(service, path).await
}

async fn create_record_handler(
    Extension(service): Extension<Arc<Service>>,
    json: axum::Json<SurveyRecordRequest>,
) -> Result<(axum::http::StatusCode, axum::Json<SurveyRecordDto>), super::error::Problem> {
    handlers::create_record(service, json).await
}

async fn update_record_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<uuid::Uuid>,
    json: axum::Json<SurveyRecordRequest>,
) -> Result<axum::Json<SurveyRecordDto>, super::error::Problem> {
    handlers::update_record(service, path, json).await
}

async fn delete_record_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<uuid::Uuid>,
) -> Result<axum::http::StatusCode, super::error::Problem> {
    handlers::delete_record(service, path).await
}

async fn summary_handler(
    Extension(service): Extension<Arc<Service>>,
    query: axum::extract::Query<handlers::SummaryQuery>,
) -> Result<axum::Json<SummaryResponse>, super::error::Problem> {
    handlers::summary(service, query).await
}

async fn list_facilities_handler(
    Extension(service): Extension<Arc<Service>>,
    query: axum::extract::Query<handlers::ListFacilitiesQuery>,
) -> Result<axum::Json<FacilitiesListResponse>, super::error::Problem> {
    handlers::list_facilities(service, query).await
}

async fn get_facility_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<uuid::Uuid>,
) -> Result<axum::Json<FacilityDetailResponse>, super::error::Problem> {
    handlers::get_facility(service, path).await
}

async fn create_facility_handler(
    Extension(service): Extension<Arc<Service>>,
    json: axum::Json<FacilityRequest>,
) -> Result<(axum::http::StatusCode, axum::Json<FacilityDto>), super::error::Problem> {
    handlers::create_facility(service, json).await
}

async fn update_facility_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<uuid::Uuid>,
    json: axum::Json<FacilityRequest>,
) -> Result<axum::Json<FacilityDto>, super::error::Problem> {
    handlers::update_facility(service, path, json).await
}

async fn delete_facility_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<uuid::Uuid>,
) -> Result<axum::http::StatusCode, super::error::Problem> {
    handlers::delete_facility(service, path).await
}

async fn add_media_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<uuid::Uuid>,
    json: axum::Json<MediaRequest>,
) -> Result<(axum::http::StatusCode, axum::Json<MediaItemDto>), super::error::Problem> {
    handlers::add_media(service, path, json).await
}

async fn delete_media_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<uuid::Uuid>,
) -> Result<axum::http::StatusCode, super::error::Problem> {
    handlers::delete_media(service, path).await
}

async fn set_primary_media_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<uuid::Uuid>,
) -> Result<axum::Json<MediaItemDto>, super::error::Problem> {
    handlers::set_primary_media(service, path).await
}
