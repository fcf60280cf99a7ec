//! Native client trait for in-process callers
//!
//! This trait defines the API other components use to talk to the ward
//! profile service. NO HTTP - direct function calls.

use super::error::ProfileError;
use super::model::{
    DomainSummary, Facility, FacilityDraft, MediaDraft, MediaItem, PopulationBreakdown,
    SurveyDomain, SurveyRecord, SurveyRecordDraft, Ward,
};
use async_trait::async_trait;
use uuid::Uuid;

/// Ward profile API for in-process communication
#[async_trait]
pub trait ProfileApi: Send + Sync {
    // ===== Survey record operations =====

    /// List all records of a domain, optionally filtered to one ward
    async fn list_records(
        &self,
        domain: SurveyDomain,
        ward_number: Option<u16>,
    ) -> Result<Vec<SurveyRecord>, ProfileError>;

    /// Get a single record
    async fn get_record(&self, id: Uuid) -> Result<SurveyRecord, ProfileError>;

    /// Create a record; fails with Conflict on a duplicate key
    async fn create_record(&self, draft: SurveyRecordDraft)
        -> Result<SurveyRecord, ProfileError>;

    /// Replace a record's fields (full-record update)
    async fn update_record(
        &self,
        id: Uuid,
        draft: SurveyRecordDraft,
    ) -> Result<SurveyRecord, ProfileError>;

    /// Delete a record
    async fn delete_record(&self, id: Uuid) -> Result<(), ProfileError>;

    /// Aggregate a domain into category/ward/pivot/top-N totals. The
    /// breakdown selects the population table's dimension (gender by
    /// default, or age band); other domains ignore it.
    async fn summary(
        &self,
        domain: SurveyDomain,
        breakdown: Option<PopulationBreakdown>,
        top_n: Option<usize>,
    ) -> Result<DomainSummary, ProfileError>;

    /// The synthesized ward list (configured range plus observed wards)
    async fn wards(&self) -> Result<Vec<Ward>, ProfileError>;

    // ===== Facility operations =====

    /// List facilities, optionally filtered by ward
    async fn list_facilities(
        &self,
        ward_number: Option<u16>,
    ) -> Result<Vec<Facility>, ProfileError>;

    /// Get a facility with its media gallery
    async fn get_facility(&self, id: Uuid) -> Result<(Facility, Vec<MediaItem>), ProfileError>;

    /// Create a facility
    async fn create_facility(&self, draft: FacilityDraft) -> Result<Facility, ProfileError>;

    /// Replace a facility's fields
    async fn update_facility(
        &self,
        id: Uuid,
        draft: FacilityDraft,
    ) -> Result<Facility, ProfileError>;

    /// Delete a facility and its media
    async fn delete_facility(&self, id: Uuid) -> Result<(), ProfileError>;

    // ===== Media operations =====

    /// Attach a media item; the first item becomes primary
    async fn add_media(
        &self,
        facility_id: Uuid,
        draft: MediaDraft,
    ) -> Result<MediaItem, ProfileError>;

    /// Remove a media item; a deleted primary promotes the oldest remaining
    async fn delete_media(&self, media_id: Uuid) -> Result<(), ProfileError>;

    /// Designate a media item as primary, unsetting any previous primary
    async fn set_primary_media(&self, media_id: Uuid) -> Result<MediaItem, ProfileError>;
}
