//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Facility, MediaItem, SurveyDomain, SurveyRecord};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Error kind surfaced when a write trips the storage-level unique index on
/// (domain, ward, dimensions). The service maps it to a user-facing
/// Conflict; the in-memory duplicate scan is only an advisory pre-check.
#[derive(Debug, thiserror::Error)]
#[error("unique key violation: {key}")]
pub struct UniqueViolation {
    pub key: String,
}

/// Repository for survey records
#[async_trait]
pub trait SurveyRepository: Send + Sync {
    /// Insert a new record
    async fn insert(&self, record: &SurveyRecord) -> Result<SurveyRecord>;

    /// Replace an existing record
    async fn update(&self, record: &SurveyRecord) -> Result<SurveyRecord>;

    /// Find a record by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SurveyRecord>>;

    /// All records of a domain, ordered by ward then dimensions
    async fn list_by_domain(&self, domain: SurveyDomain) -> Result<Vec<SurveyRecord>>;

    /// Distinct ward numbers appearing in any record
    async fn observed_wards(&self) -> Result<Vec<u16>>;

    /// Delete a record; Ok(false) when nothing matched
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// Repository for facilities and their media galleries
#[async_trait]
pub trait FacilityRepository: Send + Sync {
    /// Insert a new facility
    async fn insert(&self, facility: &Facility) -> Result<Facility>;

    /// Replace an existing facility
    async fn update(&self, facility: &Facility) -> Result<Facility>;

    /// Find a facility by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Facility>>;

    /// All facilities, optionally filtered by ward
    async fn list(&self, ward_number: Option<u16>) -> Result<Vec<Facility>>;

    /// Delete a facility and its media; Ok(false) when nothing matched
    async fn delete(&self, id: Uuid) -> Result<bool>;

    // ===== Media =====

    /// Attach a media item
    async fn add_media(&self, item: &MediaItem) -> Result<MediaItem>;

    /// Find a media item by id
    async fn find_media(&self, media_id: Uuid) -> Result<Option<MediaItem>>;

    /// A facility's gallery, ordered by position then creation time
    async fn list_media(&self, facility_id: Uuid) -> Result<Vec<MediaItem>>;

    /// Remove a media item; Ok(false) when nothing matched
    async fn delete_media(&self, media_id: Uuid) -> Result<bool>;

    /// Atomically make `media_id` the facility's only primary item
    async fn set_primary(&self, facility_id: Uuid, media_id: Uuid) -> Result<MediaItem>;
}
