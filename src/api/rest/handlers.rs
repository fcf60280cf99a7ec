//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::{PopulationBreakdown, ProfileError, SurveyDomain};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

fn parse_domain(code: &str) -> Result<SurveyDomain, Problem> {
    SurveyDomain::from_code(code).ok_or_else(|| {
        map_domain_error(ProfileError::UnknownDomain {
            code: code.to_string(),
        })
    })
}

// ===== Survey record handlers =====

/// Query parameters for listing survey records
#[derive(Debug, Deserialize)]
pub struct ListRecordsQuery {
    /// Survey domain code (required)
    pub domain: String,
    /// Narrow to one ward
    pub ward: Option<u16>,
}

/// List survey records of a domain
pub async fn list_records(
    service: Arc<Service>,
    Query(query): Query<ListRecordsQuery>,
) -> Result<Json<RecordsListResponse>, Problem> {
    let domain = parse_domain(&query.domain)?;
    let records = service
        .list_records(domain, query.ward)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<SurveyRecordDto> = records.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(RecordsListResponse { items, total }))
}

/// Get a single survey record
pub async fn get_record(
    service: Arc<Service>,
    Path(id): Path<Uuid>,
) -> Result<Json<SurveyRecordDto>, Problem> {
    let record = service.get_record(id).await.map_err(map_domain_error)?;

    Ok(Json(record.into()))
}

/// Create a survey record
pub async fn create_record(
    service: Arc<Service>,
    Json(req): Json<SurveyRecordRequest>,
) -> Result<(StatusCode, Json<SurveyRecordDto>), Problem> {
    let draft = req.try_into().map_err(map_domain_error)?;
    let record = service
        .create_record(draft)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Replace a survey record
pub async fn update_record(
    service: Arc<Service>,
    Path(id): Path<Uuid>,
    Json(req): Json<SurveyRecordRequest>,
) -> Result<Json<SurveyRecordDto>, Problem> {
    let draft = req.try_into().map_err(map_domain_error)?;
    let record = service
        .update_record(id, draft)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(record.into()))
}

/// Delete a survey record
pub async fn delete_record(
    service: Arc<Service>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    service.delete_record(id).await.map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Aggregation handlers =====

/// Query parameters for a domain summary
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Survey domain code (required)
    pub domain: String,
    /// Population pivot dimension: GENDER (default) or AGE_GROUP
    pub by: Option<String>,
    /// Top-N size for the collapsed view
    pub top: Option<usize>,
}

/// Aggregate a domain into category/ward/pivot/top-N totals
pub async fn summary(
    service: Arc<Service>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<SummaryResponse>, Problem> {
    let domain = parse_domain(&query.domain)?;
    let breakdown = match query.by.as_deref() {
        Some(code) => Some(PopulationBreakdown::from_code(code).ok_or_else(|| {
            map_domain_error(ProfileError::Validation {
                message: format!("unknown breakdown '{}', expected GENDER or AGE_GROUP", code),
            })
        })?),
        None => None,
    };
    let summary = service
        .summary(domain, breakdown, query.top)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(summary.into()))
}

/// List all wards (configured range plus observed)
pub async fn list_wards(service: Arc<Service>) -> Result<Json<WardsListResponse>, Problem> {
    let wards = service.wards().await.map_err(map_domain_error)?;

    let items: Vec<WardDto> = wards.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(WardsListResponse { items, total }))
}

// ===== Facility handlers =====

/// Query parameters for listing facilities
#[derive(Debug, Deserialize)]
pub struct ListFacilitiesQuery {
    /// Narrow to one ward
    pub ward: Option<u16>,
}

/// List facilities
pub async fn list_facilities(
    service: Arc<Service>,
    Query(query): Query<ListFacilitiesQuery>,
) -> Result<Json<FacilitiesListResponse>, Problem> {
    let facilities = service
        .list_facilities(query.ward)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<FacilityDto> = facilities.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(FacilitiesListResponse { items, total }))
}

/// Get a facility with its media gallery
pub async fn get_facility(
    service: Arc<Service>,
    Path(id): Path<Uuid>,
) -> Result<Json<FacilityDetailResponse>, Problem> {
    let (facility, media) = service.get_facility(id).await.map_err(map_domain_error)?;

    Ok(Json(FacilityDetailResponse {
        facility: facility.into(),
        media: media.into_iter().map(Into::into).collect(),
    }))
}

/// Create a facility
pub async fn create_facility(
    service: Arc<Service>,
    Json(req): Json<FacilityRequest>,
) -> Result<(StatusCode, Json<FacilityDto>), Problem> {
    let draft = req.try_into().map_err(map_domain_error)?;
    let facility = service
        .create_facility(draft)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(facility.into())))
}

/// Replace a facility
pub async fn update_facility(
    service: Arc<Service>,
    Path(id): Path<Uuid>,
    Json(req): Json<FacilityRequest>,
) -> Result<Json<FacilityDto>, Problem> {
    let draft = req.try_into().map_err(map_domain_error)?;
    let facility = service
        .update_facility(id, draft)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(facility.into()))
}

/// Delete a facility and its media
pub async fn delete_facility(
    service: Arc<Service>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    service
        .delete_facility(id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Media handlers =====

/// Attach a media item to a facility
pub async fn add_media(
    service: Arc<Service>,
    Path(facility_id): Path<Uuid>,
    Json(req): Json<MediaRequest>,
) -> Result<(StatusCode, Json<MediaItemDto>), Problem> {
    let item = service
        .add_media(facility_id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(item.into())))
}

/// Remove a media item
pub async fn delete_media(
    service: Arc<Service>,
    Path(media_id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    service
        .delete_media(media_id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Designate a media item as its facility's primary
pub async fn set_primary_media(
    service: Arc<Service>,
    Path(media_id): Path<Uuid>,
) -> Result<Json<MediaItemDto>, Problem> {
    let item = service
        .set_primary_media(media_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(item.into()))
}
