//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    DomainSummary, Facility, FacilityDraft, MediaDraft, MediaItem, PopulationBreakdown,
    ProfileApi, ProfileError, SurveyDomain, SurveyRecord, SurveyRecordDraft, Ward,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ProfileApi for NativeClient {
    async fn list_records(
        &self,
        domain: SurveyDomain,
        ward_number: Option<u16>,
    ) -> Result<Vec<SurveyRecord>, ProfileError> {
        self.service.list_records(domain, ward_number).await
    }

    async fn get_record(&self, id: Uuid) -> Result<SurveyRecord, ProfileError> {
        self.service.get_record(id).await
    }

    async fn create_record(
        &self,
        draft: SurveyRecordDraft,
    ) -> Result<SurveyRecord, ProfileError> {
        self.service.create_record(draft).await
    }

    async fn update_record(
        &self,
        id: Uuid,
        draft: SurveyRecordDraft,
    ) -> Result<SurveyRecord, ProfileError> {
        self.service.update_record(id, draft).await
    }

    async fn delete_record(&self, id: Uuid) -> Result<(), ProfileError> {
        self.service.delete_record(id).await
    }

    async fn summary(
        &self,
        domain: SurveyDomain,
        breakdown: Option<PopulationBreakdown>,
        top_n: Option<usize>,
    ) -> Result<DomainSummary, ProfileError> {
        self.service.summary(domain, breakdown, top_n).await
    }

    async fn wards(&self) -> Result<Vec<Ward>, ProfileError> {
        self.service.wards().await
    }

    async fn list_facilities(
        &self,
        ward_number: Option<u16>,
    ) -> Result<Vec<Facility>, ProfileError> {
        self.service.list_facilities(ward_number).await
    }

    async fn get_facility(&self, id: Uuid) -> Result<(Facility, Vec<MediaItem>), ProfileError> {
        self.service.get_facility(id).await
    }

    async fn create_facility(&self, draft: FacilityDraft) -> Result<Facility, ProfileError> {
        self.service.create_facility(draft).await
    }

    async fn update_facility(
        &self,
        id: Uuid,
        draft: FacilityDraft,
    ) -> Result<Facility, ProfileError> {
        self.service.update_facility(id, draft).await
    }

    async fn delete_facility(&self, id: Uuid) -> Result<(), ProfileError> {
        self.service.delete_facility(id).await
    }

    async fn add_media(
        &self,
        facility_id: Uuid,
        draft: MediaDraft,
    ) -> Result<MediaItem, ProfileError> {
        self.service.add_media(facility_id, draft).await
    }

    async fn delete_media(&self, media_id: Uuid) -> Result<(), ProfileError> {
        self.service.delete_media(media_id).await
    }

    async fn set_primary_media(&self, media_id: Uuid) -> Result<MediaItem, ProfileError> {
        self.service.set_primary_media(media_id).await
    }
}
