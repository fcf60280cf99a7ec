//! Common test utilities: mock repositories and record builders

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;
use ward_profile::contract::{
    Category, Facility, FacilityDraft, FacilityKind, MediaDraft, MediaItem, SurveyDomain,
    SurveyRecord, SurveyRecordDraft,
};
use ward_profile::domain::repository::{FacilityRepository, SurveyRepository, UniqueViolation};
use ward_profile::domain::Service;

pub const WARD_COUNT: u16 = 9;
pub const DEFAULT_TOP_N: usize = 5;

/// In-memory survey repository. The key check mimics the storage-level
/// unique index so conflict paths can be exercised without a database.
#[derive(Clone, Default)]
pub struct MockSurveyRepo {
    data: Arc<RwLock<HashMap<Uuid, SurveyRecord>>>,
}

impl MockSurveyRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }
}

#[async_trait]
impl SurveyRepository for MockSurveyRepo {
    async fn insert(&self, record: &SurveyRecord) -> anyhow::Result<SurveyRecord> {
        let mut data = self.data.write();
        if data.values().any(|r| r.key() == record.key()) {
            return Err(UniqueViolation {
                key: record.key().describe(),
            }
            .into());
        }
        data.insert(record.id, record.clone());
        Ok(record.clone())
    }

    async fn update(&self, record: &SurveyRecord) -> anyhow::Result<SurveyRecord> {
        let mut data = self.data.write();
        if data
            .values()
            .any(|r| r.id != record.id && r.key() == record.key())
        {
            return Err(UniqueViolation {
                key: record.key().describe(),
            }
            .into());
        }
        data.insert(record.id, record.clone());
        Ok(record.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<SurveyRecord>> {
        Ok(self.data.read().get(&id).cloned())
    }

    async fn list_by_domain(&self, domain: SurveyDomain) -> anyhow::Result<Vec<SurveyRecord>> {
        let mut records: Vec<SurveyRecord> = self
            .data
            .read()
            .values()
            .filter(|r| r.domain == domain)
            .cloned()
            .collect();
        records.sort_by_key(|r| (r.ward_number, r.category, r.gender, r.age_group));
        Ok(records)
    }

    async fn observed_wards(&self) -> anyhow::Result<Vec<u16>> {
        let mut wards: Vec<u16> = self.data.read().values().map(|r| r.ward_number).collect();
        wards.sort_unstable();
        wards.dedup();
        Ok(wards)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.data.write().remove(&id).is_some())
    }
}

/// In-memory facility + media repository
#[derive(Clone, Default)]
pub struct MockFacilityRepo {
    facilities: Arc<RwLock<HashMap<Uuid, Facility>>>,
    media: Arc<RwLock<HashMap<Uuid, MediaItem>>>,
}

impl MockFacilityRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of primary items in one facility's gallery.
    pub fn primary_count(&self, facility_id: Uuid) -> usize {
        self.media
            .read()
            .values()
            .filter(|m| m.facility_id == facility_id && m.is_primary)
            .count()
    }
}

#[async_trait]
impl FacilityRepository for MockFacilityRepo {
    async fn insert(&self, facility: &Facility) -> anyhow::Result<Facility> {
        self.facilities
            .write()
            .insert(facility.id, facility.clone());
        Ok(facility.clone())
    }

    async fn update(&self, facility: &Facility) -> anyhow::Result<Facility> {
        self.facilities
            .write()
            .insert(facility.id, facility.clone());
        Ok(facility.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Facility>> {
        Ok(self.facilities.read().get(&id).cloned())
    }

    async fn list(&self, ward_number: Option<u16>) -> anyhow::Result<Vec<Facility>> {
        let mut facilities: Vec<Facility> = self
            .facilities
            .read()
            .values()
            .filter(|f| ward_number.map_or(true, |w| f.ward_number == w))
            .cloned()
            .collect();
        facilities.sort_by(|a, b| (a.ward_number, &a.name).cmp(&(b.ward_number, &b.name)));
        Ok(facilities)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        self.media.write().retain(|_, m| m.facility_id != id);
        Ok(self.facilities.write().remove(&id).is_some())
    }

    async fn add_media(&self, item: &MediaItem) -> anyhow::Result<MediaItem> {
        self.media.write().insert(item.id, item.clone());
        Ok(item.clone())
    }

    async fn find_media(&self, media_id: Uuid) -> anyhow::Result<Option<MediaItem>> {
        Ok(self.media.read().get(&media_id).cloned())
    }

    async fn list_media(&self, facility_id: Uuid) -> anyhow::Result<Vec<MediaItem>> {
        let mut items: Vec<MediaItem> = self
            .media
            .read()
            .values()
            .filter(|m| m.facility_id == facility_id)
            .cloned()
            .collect();
        items.sort_by_key(|m| (m.position, m.created_at));
        Ok(items)
    }

    async fn delete_media(&self, media_id: Uuid) -> anyhow::Result<bool> {
        Ok(self.media.write().remove(&media_id).is_some())
    }

    async fn set_primary(&self, facility_id: Uuid, media_id: Uuid) -> anyhow::Result<MediaItem> {
        let mut media = self.media.write();
        if !media
            .get(&media_id)
            .is_some_and(|m| m.facility_id == facility_id)
        {
            anyhow::bail!("media {} does not belong to facility {}", media_id, facility_id);
        }
        for item in media.values_mut() {
            if item.facility_id == facility_id {
                item.is_primary = item.id == media_id;
            }
        }
        media
            .get(&media_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("media vanished during update"))
    }
}

/// A service wired to fresh mock repositories
pub struct TestHarness {
    pub service: Service,
    pub survey_repo: MockSurveyRepo,
    pub facility_repo: MockFacilityRepo,
}

impl TestHarness {
    pub fn new() -> Self {
        let survey_repo = MockSurveyRepo::new();
        let facility_repo = MockFacilityRepo::new();
        let service = Service::new(
            Arc::new(survey_repo.clone()),
            Arc::new(facility_repo.clone()),
            WARD_COUNT,
            DEFAULT_TOP_N,
        );
        Self {
            service,
            survey_repo,
            facility_repo,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Draft builders =====

pub fn category_draft(
    domain: SurveyDomain,
    ward: u16,
    category: Category,
    population: i64,
) -> SurveyRecordDraft {
    SurveyRecordDraft {
        domain,
        ward_number: ward,
        gender: None,
        age_group: None,
        category: Some(category),
        population,
        households: None,
    }
}

pub fn population_draft(
    ward: u16,
    gender: ward_profile::contract::Gender,
    age_group: ward_profile::contract::AgeGroup,
    population: i64,
) -> SurveyRecordDraft {
    SurveyRecordDraft {
        domain: SurveyDomain::Population,
        ward_number: ward,
        gender: Some(gender),
        age_group: Some(age_group),
        category: None,
        population,
        households: None,
    }
}

pub fn facility_draft(kind: FacilityKind, name: &str, ward: u16) -> FacilityDraft {
    FacilityDraft {
        kind,
        name: name.to_string(),
        ward_number: ward,
        area_sq_km: Some(1.2),
        elevation_m: None,
        ownership: None,
        is_fenced: false,
        has_water_source: true,
        notes: None,
        location: None,
        boundary: None,
    }
}

pub fn media_draft(url: &str) -> MediaDraft {
    MediaDraft {
        url: url.to_string(),
        mime_type: "image/jpeg".to_string(),
        title: None,
        description: None,
    }
}
