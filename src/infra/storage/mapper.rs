//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Codes are
//! parsed through the contract enums, so unrecognized dimension codes land
//! in the catch-all variants instead of failing the read.

use super::entity;
use crate::contract::{
    AgeGroup, Category, Dimension, Facility, FacilityKind, Gender, GeoPoint, MediaItem,
    Ownership, SurveyDomain, SurveyRecord,
};
use anyhow::anyhow;

// ===== Survey record conversions =====

impl TryFrom<entity::Model> for SurveyRecord {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        // the domain column is a routing key, not a dimension; an unknown
        // value here is corrupt data
        let domain = SurveyDomain::from_code(&entity.domain)
            .ok_or_else(|| anyhow!("unknown survey domain code: {}", entity.domain))?;

        Ok(Self {
            id: entity.id,
            domain,
            ward_number: u16::try_from(entity.ward_number)
                .map_err(|_| anyhow!("ward number out of range: {}", entity.ward_number))?,
            gender: entity.gender.as_deref().map(Gender::from_code),
            age_group: entity.age_group.as_deref().map(AgeGroup::from_code),
            category: entity
                .category
                .as_deref()
                .and_then(|code| Category::from_code(domain, code)),
            population: entity.population,
            households: entity.households,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl From<&SurveyRecord> for entity::ActiveModel {
    fn from(model: &SurveyRecord) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            domain: Set(model.domain.code().to_string()),
            ward_number: Set(i32::from(model.ward_number)),
            gender: Set(model.gender.map(|g| g.code().to_string())),
            age_group: Set(model.age_group.map(|a| a.code().to_string())),
            category: Set(model.category.map(|c| c.code().to_string())),
            population: Set(model.population),
            households: Set(model.households),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Facility conversions =====

impl TryFrom<entity::facility::Model> for Facility {
    type Error = anyhow::Error;

    fn try_from(entity: entity::facility::Model) -> Result<Self, Self::Error> {
        let kind = FacilityKind::from_code(&entity.kind)
            .ok_or_else(|| anyhow!("unknown facility kind code: {}", entity.kind))?;

        let location = match (entity.latitude, entity.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            _ => None,
        };

        Ok(Self {
            id: entity.id,
            kind,
            name: entity.name,
            ward_number: u16::try_from(entity.ward_number)
                .map_err(|_| anyhow!("ward number out of range: {}", entity.ward_number))?,
            area_sq_km: entity.area_sq_km,
            elevation_m: entity.elevation_m,
            ownership: entity.ownership.as_deref().map(Ownership::from_code),
            is_fenced: entity.is_fenced,
            has_water_source: entity.has_water_source,
            notes: entity.notes,
            location,
            boundary: entity.boundary,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl From<&Facility> for entity::facility::ActiveModel {
    fn from(model: &Facility) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            kind: Set(model.kind.code().to_string()),
            name: Set(model.name.clone()),
            ward_number: Set(i32::from(model.ward_number)),
            area_sq_km: Set(model.area_sq_km),
            elevation_m: Set(model.elevation_m),
            ownership: Set(model.ownership.map(|o| o.code().to_string())),
            is_fenced: Set(model.is_fenced),
            has_water_source: Set(model.has_water_source),
            notes: Set(model.notes.clone()),
            latitude: Set(model.location.map(|p| p.latitude)),
            longitude: Set(model.location.map(|p| p.longitude)),
            boundary: Set(model.boundary.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Media conversions =====

impl From<entity::media::Model> for MediaItem {
    fn from(entity: entity::media::Model) -> Self {
        Self {
            id: entity.id,
            facility_id: entity.facility_id,
            url: entity.url,
            mime_type: entity.mime_type,
            title: entity.title,
            description: entity.description,
            is_primary: entity.is_primary,
            position: entity.position,
            created_at: entity.created_at,
        }
    }
}

impl From<&MediaItem> for entity::media::ActiveModel {
    fn from(model: &MediaItem) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(model.id),
            facility_id: Set(model.facility_id),
            url: Set(model.url.clone()),
            mime_type: Set(model.mime_type.clone()),
            title: Set(model.title.clone()),
            description: Set(model.description.clone()),
            is_primary: Set(model.is_primary),
            position: Set(model.position),
            created_at: Set(model.created_at),
        }
    }
}
