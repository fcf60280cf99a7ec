//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ===== Survey record DTOs =====

/// Survey record response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SurveyRecordDto {
    pub id: Uuid,

    /// Survey domain code
    #[schema(example = "RELIGION")]
    pub domain: String,

    /// Ward number
    #[schema(example = 3)]
    pub ward_number: u16,

    /// Gender code, where the table carries one
    #[schema(example = "FEMALE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Age band code, where the table carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,

    /// Domain category code
    #[schema(example = "HINDU")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Primary measure
    pub population: i64,

    /// Household count, where the table carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub households: Option<i64>,

    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Create/update request for a survey record
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SurveyRecordRequest {
    /// Survey domain code
    #[schema(example = "RELIGION")]
    pub domain: String,

    /// Ward number
    pub ward_number: u16,

    pub gender: Option<String>,
    pub age_group: Option<String>,
    pub category: Option<String>,

    /// Primary measure; a missing field counts as 0
    #[serde(default)]
    pub population: i64,

    pub households: Option<i64>,
}

/// List of survey records
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecordsListResponse {
    pub items: Vec<SurveyRecordDto>,
    pub total: usize,
}

// ===== Summary DTOs =====

/// One category bucket of a summary
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryTotalDto {
    /// Category code (enum code, not display label)
    #[schema(example = "HINDU")]
    pub code: String,

    /// Localized display label
    pub label: String,

    /// Chart color (hex)
    pub color: String,

    pub total: i64,

    /// Share of the grand total; 0.0 for an empty domain
    pub percent: f64,
}

/// One ward row of a summary
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WardSummaryDto {
    pub ward_number: u16,
    pub total: i64,
    pub percent: f64,

    /// Zero-filled cells in fixed category order
    pub cells: Vec<CategoryTotalDto>,
}

/// One entry of the collapsed top-N view
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TopCategoryDto {
    pub code: String,
    pub label: String,
    pub total: i64,
}

/// Aggregated summary of one survey domain
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub domain: String,
    pub grand_total: i64,
    pub categories: Vec<CategoryTotalDto>,
    pub wards: Vec<WardSummaryDto>,
    pub top: Vec<TopCategoryDto>,
}

// ===== Ward DTOs =====

/// An administrative ward
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WardDto {
    pub number: u16,
    pub has_records: bool,
}

/// Ward list
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WardsListResponse {
    pub items: Vec<WardDto>,
    pub total: usize,
}

// ===== Facility DTOs =====

/// Point geometry DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeoPointDto {
    pub latitude: f64,
    pub longitude: f64,
}

/// Facility response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FacilityDto {
    pub id: Uuid,

    /// Facility kind code
    #[schema(example = "GRASSLAND")]
    pub kind: String,

    pub name: String,
    pub ward_number: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_sq_km: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_m: Option<f64>,

    /// Ownership code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership: Option<String>,

    pub is_fenced: bool,
    pub has_water_source: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPointDto>,

    /// Boundary polygon as GeoJSON
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<serde_json::Value>,

    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Create/update request for a facility
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FacilityRequest {
    #[schema(example = "GRASSLAND")]
    pub kind: String,

    pub name: String,
    pub ward_number: u16,
    pub area_sq_km: Option<f64>,
    pub elevation_m: Option<f64>,
    pub ownership: Option<String>,

    #[serde(default)]
    pub is_fenced: bool,

    #[serde(default)]
    pub has_water_source: bool,

    pub notes: Option<String>,
    pub location: Option<GeoPointDto>,
    pub boundary: Option<serde_json::Value>,
}

/// Facility with its media gallery
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FacilityDetailResponse {
    #[serde(flatten)]
    pub facility: FacilityDto,
    pub media: Vec<MediaItemDto>,
}

/// Facility list
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FacilitiesListResponse {
    pub items: Vec<FacilityDto>,
    pub total: usize,
}

// ===== Media DTOs =====

/// Media item response DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MediaItemDto {
    pub id: Uuid,
    pub facility_id: Uuid,
    pub url: String,

    #[schema(example = "image/jpeg")]
    pub mime_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub is_primary: bool,
    pub position: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Attach-media request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MediaRequest {
    pub url: String,

    #[schema(example = "image/jpeg")]
    pub mime_type: String,

    pub title: Option<String>,
    pub description: Option<String>,
}
