//! Domain service - business logic orchestration
//!
//! Writes are last-write-wins: there are no optimistic-concurrency tokens,
//! and a record edited from two sessions keeps whichever update lands last.
//! The in-memory duplicate scan runs before every insert/update as a fast,
//! non-authoritative hint; the storage unique index has the final word.

use super::aggregate::{self, TopEntry};
use super::cache::SnapshotCache;
use super::repository::{FacilityRepository, SurveyRepository, UniqueViolation};
use super::validation;
use crate::contract::{
    AgeGroup, CasteGroup, Category, CategoryTotal, CropType, Dimension, DomainSummary,
    EducationLevel, Facility, FacilityDraft, Gender, MediaDraft, MediaItem, Occupation,
    PopulationBreakdown, ProfileError, Religion, SurveyDomain, SurveyRecord, SurveyRecordDraft,
    TopCategory, Ward, WardSummary,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

/// Label used for the synthetic top-N remainder bucket
const REMAINDER_LABEL: &str = "अन्य";

/// Domain service for the ward profile
pub struct Service {
    survey_repo: Arc<dyn SurveyRepository>,
    facility_repo: Arc<dyn FacilityRepository>,
    cache: SnapshotCache,
    /// Number of wards in the municipality (1..=ward_count are valid)
    ward_count: u16,
    /// Top-N size used when a summary request does not specify one
    default_top_n: usize,
}

impl Service {
    pub fn new(
        survey_repo: Arc<dyn SurveyRepository>,
        facility_repo: Arc<dyn FacilityRepository>,
        ward_count: u16,
        default_top_n: usize,
    ) -> Self {
        Self {
            survey_repo,
            facility_repo,
            cache: SnapshotCache::new(),
            ward_count,
            default_top_n,
        }
    }

    pub fn ward_count(&self) -> u16 {
        self.ward_count
    }

    // ===== Survey record operations =====

    /// The full record set of a domain, served from the snapshot cache.
    pub async fn records(
        &self,
        domain: SurveyDomain,
    ) -> Result<Arc<Vec<SurveyRecord>>, ProfileError> {
        if let Some(snapshot) = self.cache.get(domain) {
            return Ok(snapshot);
        }
        let records = self
            .survey_repo
            .list_by_domain(domain)
            .await
            .map_err(internal)?;
        Ok(self.cache.put(domain, records))
    }

    /// List records, optionally narrowed to one ward.
    pub async fn list_records(
        &self,
        domain: SurveyDomain,
        ward_number: Option<u16>,
    ) -> Result<Vec<SurveyRecord>, ProfileError> {
        let snapshot = self.records(domain).await?;
        Ok(match ward_number {
            Some(ward) => snapshot
                .iter()
                .filter(|r| r.ward_number == ward)
                .cloned()
                .collect(),
            None => snapshot.as_ref().clone(),
        })
    }

    pub async fn get_record(&self, id: Uuid) -> Result<SurveyRecord, ProfileError> {
        self.survey_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| ProfileError::NotFound {
                resource: "record".to_string(),
                id: id.to_string(),
            })
    }

    pub async fn create_record(
        &self,
        draft: SurveyRecordDraft,
    ) -> Result<SurveyRecord, ProfileError> {
        validation::validate_record(&draft, self.ward_count)?;

        let key = draft.key();
        let snapshot = self.records(draft.domain).await?;
        if let Some(existing) = aggregate::find_conflict(&snapshot, &key, None) {
            tracing::debug!(record_id = %existing.id, "duplicate candidate rejected before insert");
            return Err(ProfileError::duplicate(&key));
        }

        let now = chrono::Utc::now();
        let record = SurveyRecord {
            id: Uuid::new_v4(),
            domain: draft.domain,
            ward_number: draft.ward_number,
            gender: draft.gender,
            age_group: draft.age_group,
            category: draft.category,
            population: draft.population,
            households: draft.households,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .survey_repo
            .insert(&record)
            .await
            .map_err(|e| map_write_error(e, &key))?;
        self.cache.invalidate(created.domain);
        tracing::info!(record_id = %created.id, domain = created.domain.code(), "survey record created");
        Ok(created)
    }

    /// Full-record update; partial patching is not supported.
    pub async fn update_record(
        &self,
        id: Uuid,
        draft: SurveyRecordDraft,
    ) -> Result<SurveyRecord, ProfileError> {
        let existing = self.get_record(id).await?;
        validation::validate_record(&draft, self.ward_count)?;

        let key = draft.key();
        let snapshot = self.records(draft.domain).await?;
        if aggregate::find_conflict(&snapshot, &key, Some(id)).is_some() {
            return Err(ProfileError::duplicate(&key));
        }

        let record = SurveyRecord {
            id,
            domain: draft.domain,
            ward_number: draft.ward_number,
            gender: draft.gender,
            age_group: draft.age_group,
            category: draft.category,
            population: draft.population,
            households: draft.households,
            created_at: existing.created_at,
            updated_at: chrono::Utc::now(),
        };

        let updated = self
            .survey_repo
            .update(&record)
            .await
            .map_err(|e| map_write_error(e, &key))?;
        self.cache.invalidate(existing.domain);
        if updated.domain != existing.domain {
            self.cache.invalidate(updated.domain);
        }
        Ok(updated)
    }

    pub async fn delete_record(&self, id: Uuid) -> Result<(), ProfileError> {
        let existing = self.get_record(id).await?;
        let deleted = self.survey_repo.delete(id).await.map_err(internal)?;
        if !deleted {
            return Err(ProfileError::NotFound {
                resource: "record".to_string(),
                id: id.to_string(),
            });
        }
        self.cache.invalidate(existing.domain);
        tracing::info!(record_id = %id, "survey record deleted");
        Ok(())
    }

    // ===== Aggregation =====

    /// Aggregate one domain into the summary consumed by tables and charts.
    /// For the population table the breakdown picks the pivot dimension
    /// (gender by default, or age band); other domains group by their own
    /// category and ignore it.
    pub async fn summary(
        &self,
        domain: SurveyDomain,
        breakdown: Option<PopulationBreakdown>,
        top_n: Option<usize>,
    ) -> Result<DomainSummary, ProfileError> {
        let snapshot = self.records(domain).await?;
        let wards: Vec<u16> = (1..=self.ward_count).collect();
        let n = top_n.unwrap_or(self.default_top_n);

        let summary = match domain {
            SurveyDomain::Population => {
                match breakdown.unwrap_or(PopulationBreakdown::Gender) {
                    PopulationBreakdown::Gender => summarize(domain, &snapshot, &wards, n, |r| {
                        r.gender.unwrap_or(Gender::Other)
                    }),
                    // rows without an age band land in the oldest bucket,
                    // the same fallback from_code applies to unknown codes
                    PopulationBreakdown::AgeGroup => {
                        summarize(domain, &snapshot, &wards, n, |r| {
                            r.age_group.unwrap_or(AgeGroup::Age70Plus)
                        })
                    }
                }
            }
            SurveyDomain::Religion => summarize(domain, &snapshot, &wards, n, |r| match r.category {
                Some(Category::Religion(v)) => v,
                _ => Religion::Other,
            }),
            SurveyDomain::Caste => summarize(domain, &snapshot, &wards, n, |r| match r.category {
                Some(Category::Caste(v)) => v,
                _ => CasteGroup::Other,
            }),
            SurveyDomain::Occupation => {
                summarize(domain, &snapshot, &wards, n, |r| match r.category {
                    Some(Category::Occupation(v)) => v,
                    _ => Occupation::Other,
                })
            }
            SurveyDomain::Crop => summarize(domain, &snapshot, &wards, n, |r| match r.category {
                Some(Category::Crop(v)) => v,
                _ => CropType::Other,
            }),
            SurveyDomain::Education => {
                summarize(domain, &snapshot, &wards, n, |r| match r.category {
                    Some(Category::Education(v)) => v,
                    _ => EducationLevel::Other,
                })
            }
        };
        Ok(summary)
    }

    /// Ward list synthesized from the configured range plus observed wards,
    /// so clients can offer "new ward" options for numbers not yet present.
    pub async fn wards(&self) -> Result<Vec<Ward>, ProfileError> {
        let observed = self
            .survey_repo
            .observed_wards()
            .await
            .map_err(internal)?;
        let observed: std::collections::BTreeSet<u16> = observed.into_iter().collect();

        let mut wards: Vec<Ward> = (1..=self.ward_count)
            .map(|number| Ward {
                number,
                has_records: observed.contains(&number),
            })
            .collect();
        // legacy rows above the configured range stay visible
        for number in observed.into_iter().filter(|w| *w > self.ward_count) {
            wards.push(Ward {
                number,
                has_records: true,
            });
        }
        Ok(wards)
    }

    // ===== Facility operations =====

    pub async fn list_facilities(
        &self,
        ward_number: Option<u16>,
    ) -> Result<Vec<Facility>, ProfileError> {
        self.facility_repo.list(ward_number).await.map_err(internal)
    }

    pub async fn get_facility(
        &self,
        id: Uuid,
    ) -> Result<(Facility, Vec<MediaItem>), ProfileError> {
        let facility = self
            .facility_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| ProfileError::NotFound {
                resource: "facility".to_string(),
                id: id.to_string(),
            })?;
        let media = self.facility_repo.list_media(id).await.map_err(internal)?;
        Ok((facility, media))
    }

    pub async fn create_facility(&self, draft: FacilityDraft) -> Result<Facility, ProfileError> {
        validation::validate_facility(&draft, self.ward_count)?;

        let now = chrono::Utc::now();
        let facility = Facility {
            id: Uuid::new_v4(),
            kind: draft.kind,
            name: draft.name,
            ward_number: draft.ward_number,
            area_sq_km: draft.area_sq_km,
            elevation_m: draft.elevation_m,
            ownership: draft.ownership,
            is_fenced: draft.is_fenced,
            has_water_source: draft.has_water_source,
            notes: draft.notes,
            location: draft.location,
            boundary: draft.boundary,
            created_at: now,
            updated_at: now,
        };
        let created = self
            .facility_repo
            .insert(&facility)
            .await
            .map_err(internal)?;
        tracing::info!(facility_id = %created.id, kind = created.kind.code(), "facility created");
        Ok(created)
    }

    pub async fn update_facility(
        &self,
        id: Uuid,
        draft: FacilityDraft,
    ) -> Result<Facility, ProfileError> {
        let (existing, _) = self.get_facility(id).await?;
        validation::validate_facility(&draft, self.ward_count)?;

        let facility = Facility {
            id,
            kind: draft.kind,
            name: draft.name,
            ward_number: draft.ward_number,
            area_sq_km: draft.area_sq_km,
            elevation_m: draft.elevation_m,
            ownership: draft.ownership,
            is_fenced: draft.is_fenced,
            has_water_source: draft.has_water_source,
            notes: draft.notes,
            location: draft.location,
            boundary: draft.boundary,
            created_at: existing.created_at,
            updated_at: chrono::Utc::now(),
        };
        self.facility_repo.update(&facility).await.map_err(internal)
    }

    pub async fn delete_facility(&self, id: Uuid) -> Result<(), ProfileError> {
        let deleted = self.facility_repo.delete(id).await.map_err(internal)?;
        if !deleted {
            return Err(ProfileError::NotFound {
                resource: "facility".to_string(),
                id: id.to_string(),
            });
        }
        tracing::info!(facility_id = %id, "facility deleted");
        Ok(())
    }

    // ===== Media operations =====

    /// Attach a media item. The facility's first item becomes primary.
    pub async fn add_media(
        &self,
        facility_id: Uuid,
        draft: MediaDraft,
    ) -> Result<MediaItem, ProfileError> {
        validation::validate_media(&draft)?;
        // existence check doubles as the gallery fetch
        let (_, gallery) = self.get_facility(facility_id).await?;

        let item = MediaItem {
            id: Uuid::new_v4(),
            facility_id,
            url: draft.url,
            mime_type: draft.mime_type,
            title: draft.title,
            description: draft.description,
            is_primary: gallery.is_empty(),
            position: gallery.iter().map(|m| m.position).max().unwrap_or(-1) + 1,
            created_at: chrono::Utc::now(),
        };
        self.facility_repo.add_media(&item).await.map_err(internal)
    }

    /// Remove a media item. Deleting the primary promotes the oldest
    /// remaining item so the one-primary invariant holds without a second
    /// client call.
    pub async fn delete_media(&self, media_id: Uuid) -> Result<(), ProfileError> {
        let item = self.find_media(media_id).await?;
        let deleted = self
            .facility_repo
            .delete_media(media_id)
            .await
            .map_err(internal)?;
        if !deleted {
            return Err(ProfileError::NotFound {
                resource: "media".to_string(),
                id: media_id.to_string(),
            });
        }

        if item.is_primary {
            let remaining = self
                .facility_repo
                .list_media(item.facility_id)
                .await
                .map_err(internal)?;
            if let Some(next) = remaining.first() {
                self.facility_repo
                    .set_primary(item.facility_id, next.id)
                    .await
                    .map_err(internal)?;
            }
        }
        Ok(())
    }

    /// Designate a media item as the facility's primary; the previous
    /// primary is unset in the same transaction.
    pub async fn set_primary_media(&self, media_id: Uuid) -> Result<MediaItem, ProfileError> {
        let item = self.find_media(media_id).await?;
        self.facility_repo
            .set_primary(item.facility_id, media_id)
            .await
            .map_err(internal)
    }

    async fn find_media(&self, media_id: Uuid) -> Result<MediaItem, ProfileError> {
        self.facility_repo
            .find_media(media_id)
            .await
            .map_err(internal)?
            .ok_or_else(|| ProfileError::NotFound {
                resource: "media".to_string(),
                id: media_id.to_string(),
            })
    }
}

/// Build the full summary of one domain over a typed dimension.
fn summarize<D, K>(
    domain: SurveyDomain,
    records: &[SurveyRecord],
    wards: &[u16],
    top_n: usize,
    key: K,
) -> DomainSummary
where
    D: Dimension,
    K: Fn(&SurveyRecord) -> D,
{
    let measure = |r: &SurveyRecord| r.population;

    let totals = aggregate::dimension_totals(records, &key, measure);
    let grand_total: i64 = totals.values().sum();
    let by_ward = aggregate::ward_totals(records, wards, |r| r.ward_number, measure);
    let pivot = aggregate::ward_pivot(records, wards, |r| r.ward_number, &key, measure);
    let top = aggregate::collapse_top_n(&totals, top_n);

    DomainSummary {
        domain,
        grand_total,
        categories: category_totals(&totals, grand_total),
        wards: pivot
            .iter()
            .map(|(ward, row)| {
                let ward_total = by_ward.get(ward).copied().unwrap_or(0);
                WardSummary {
                    ward_number: *ward,
                    total: ward_total,
                    percent: aggregate::percentage(ward_total, grand_total),
                    cells: category_totals(row, grand_total),
                }
            })
            .collect(),
        top: top
            .into_iter()
            .map(|entry| top_category(entry))
            .collect(),
    }
}

fn category_totals<D: Dimension>(totals: &BTreeMap<D, i64>, grand_total: i64) -> Vec<CategoryTotal> {
    // D::ALL order, not map order, so the remainder variant stays last even
    // if Ord and display order ever diverge
    D::ALL
        .iter()
        .map(|d| {
            let total = totals.get(d).copied().unwrap_or(0);
            CategoryTotal {
                code: d.code().to_string(),
                label: d.label().to_string(),
                color: d.color().to_string(),
                total,
                percent: aggregate::percentage(total, grand_total),
            }
        })
        .collect()
}

fn top_category<D: Dimension>(entry: TopEntry<D>) -> TopCategory {
    match entry.category {
        Some(d) => TopCategory {
            code: d.code().to_string(),
            label: d.label().to_string(),
            total: entry.total,
        },
        None => TopCategory {
            code: "OTHER".to_string(),
            label: REMAINDER_LABEL.to_string(),
            total: entry.total,
        },
    }
}

/// Map a repository error, surfacing unique-index violations as Conflict.
fn map_write_error(error: anyhow::Error, key: &crate::contract::RecordKey) -> ProfileError {
    if error.downcast_ref::<UniqueViolation>().is_some() {
        return ProfileError::duplicate(key);
    }
    internal(error)
}

fn internal(error: anyhow::Error) -> ProfileError {
    tracing::error!("repository error: {:?}", error);
    ProfileError::Internal
}
