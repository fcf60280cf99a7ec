//! Conversions between REST DTOs and contract models

use super::dto::{
    CategoryTotalDto, FacilityDto, FacilityRequest, GeoPointDto, MediaItemDto, MediaRequest,
    SummaryResponse, SurveyRecordDto, SurveyRecordRequest, TopCategoryDto, WardDto,
    WardSummaryDto,
};
use crate::contract::{
    Category, CategoryTotal, Dimension, DomainSummary, Facility, FacilityDraft, FacilityKind,
    GeoPoint, MediaDraft, MediaItem, Ownership, ProfileError, SurveyDomain, SurveyRecord,
    SurveyRecordDraft, TopCategory, Ward, WardSummary,
};

// ===== Survey records =====

impl From<SurveyRecord> for SurveyRecordDto {
    fn from(record: SurveyRecord) -> Self {
        Self {
            id: record.id,
            domain: record.domain.code().to_string(),
            ward_number: record.ward_number,
            gender: record.gender.map(|g| g.code().to_string()),
            age_group: record.age_group.map(|a| a.code().to_string()),
            category: record.category.map(|c| c.code().to_string()),
            population: record.population,
            households: record.households,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl TryFrom<SurveyRecordRequest> for SurveyRecordDraft {
    type Error = ProfileError;

    fn try_from(request: SurveyRecordRequest) -> Result<Self, Self::Error> {
        let domain = SurveyDomain::from_code(&request.domain).ok_or_else(|| {
            ProfileError::UnknownDomain {
                code: request.domain.clone(),
            }
        })?;

        // unknown dimension codes bucket into the catch-all variant; an
        // out-of-place category (population rows carry none) is rejected
        let category = match request.category.as_deref() {
            Some(code) => match Category::from_code(domain, code) {
                Some(category) => Some(category),
                None => {
                    return Err(ProfileError::Validation {
                        message: format!("{} records do not take a category", domain.code()),
                    })
                }
            },
            None => None,
        };

        Ok(Self {
            domain,
            ward_number: request.ward_number,
            gender: request.gender.as_deref().map(Dimension::from_code),
            age_group: request.age_group.as_deref().map(Dimension::from_code),
            category,
            population: request.population,
            households: request.households,
        })
    }
}

// ===== Summary =====

impl From<CategoryTotal> for CategoryTotalDto {
    fn from(total: CategoryTotal) -> Self {
        Self {
            code: total.code,
            label: total.label,
            color: total.color,
            total: total.total,
            percent: total.percent,
        }
    }
}

impl From<WardSummary> for WardSummaryDto {
    fn from(ward: WardSummary) -> Self {
        Self {
            ward_number: ward.ward_number,
            total: ward.total,
            percent: ward.percent,
            cells: ward.cells.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<TopCategory> for TopCategoryDto {
    fn from(top: TopCategory) -> Self {
        Self {
            code: top.code,
            label: top.label,
            total: top.total,
        }
    }
}

impl From<DomainSummary> for SummaryResponse {
    fn from(summary: DomainSummary) -> Self {
        Self {
            domain: summary.domain.code().to_string(),
            grand_total: summary.grand_total,
            categories: summary.categories.into_iter().map(Into::into).collect(),
            wards: summary.wards.into_iter().map(Into::into).collect(),
            top: summary.top.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Ward> for WardDto {
    fn from(ward: Ward) -> Self {
        Self {
            number: ward.number,
            has_records: ward.has_records,
        }
    }
}

// ===== Facilities =====

impl From<GeoPoint> for GeoPointDto {
    fn from(point: GeoPoint) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

impl From<GeoPointDto> for GeoPoint {
    fn from(dto: GeoPointDto) -> Self {
        Self {
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

impl From<Facility> for FacilityDto {
    fn from(facility: Facility) -> Self {
        Self {
            id: facility.id,
            kind: facility.kind.code().to_string(),
            name: facility.name,
            ward_number: facility.ward_number,
            area_sq_km: facility.area_sq_km,
            elevation_m: facility.elevation_m,
            ownership: facility.ownership.map(|o| o.code().to_string()),
            is_fenced: facility.is_fenced,
            has_water_source: facility.has_water_source,
            notes: facility.notes,
            location: facility.location.map(Into::into),
            boundary: facility.boundary,
            created_at: facility.created_at,
            updated_at: facility.updated_at,
        }
    }
}

impl TryFrom<FacilityRequest> for FacilityDraft {
    type Error = ProfileError;

    fn try_from(request: FacilityRequest) -> Result<Self, Self::Error> {
        let kind = FacilityKind::from_code(&request.kind).ok_or_else(|| {
            ProfileError::Validation {
                message: format!("unknown facility kind: {}", request.kind),
            }
        })?;

        Ok(Self {
            kind,
            name: request.name,
            ward_number: request.ward_number,
            area_sq_km: request.area_sq_km,
            elevation_m: request.elevation_m,
            ownership: request.ownership.as_deref().map(Ownership::from_code),
            is_fenced: request.is_fenced,
            has_water_source: request.has_water_source,
            notes: request.notes,
            location: request.location.map(Into::into),
            boundary: request.boundary,
        })
    }
}

// ===== Media =====

impl From<MediaItem> for MediaItemDto {
    fn from(item: MediaItem) -> Self {
        Self {
            id: item.id,
            facility_id: item.facility_id,
            url: item.url,
            mime_type: item.mime_type,
            title: item.title,
            description: item.description,
            is_primary: item.is_primary,
            position: item.position,
            created_at: item.created_at,
        }
    }
}

impl From<MediaRequest> for MediaDraft {
    fn from(request: MediaRequest) -> Self {
        Self {
            url: request.url,
            mime_type: request.mime_type,
            title: request.title,
            description: request.description,
        }
    }
}
