//! Field validation for survey records, facilities and media

use crate::contract::{FacilityDraft, MediaDraft, ProfileError, SurveyDomain, SurveyRecordDraft};

/// Validate a ward number against the municipality's configured ward count.
pub fn validate_ward_number(ward_number: u16, ward_count: u16) -> Result<(), ProfileError> {
    if ward_number == 0 || ward_number > ward_count {
        return Err(ProfileError::Validation {
            message: format!(
                "ward number {} is outside the municipality's range 1..={}",
                ward_number, ward_count
            ),
        });
    }
    Ok(())
}

/// Validate a survey record draft: ward range, non-negative measures, and
/// the dimension shape its domain requires.
pub fn validate_record(draft: &SurveyRecordDraft, ward_count: u16) -> Result<(), ProfileError> {
    validate_ward_number(draft.ward_number, ward_count)?;

    if draft.population < 0 {
        return Err(ProfileError::Validation {
            message: format!("population must not be negative (got {})", draft.population),
        });
    }
    if let Some(households) = draft.households {
        if households < 0 {
            return Err(ProfileError::Validation {
                message: format!("households must not be negative (got {})", households),
            });
        }
    }

    match draft.domain {
        SurveyDomain::Population => {
            if draft.category.is_some() {
                return Err(ProfileError::Validation {
                    message: "population records carry no domain category".to_string(),
                });
            }
            if draft.gender.is_none() && draft.age_group.is_none() {
                return Err(ProfileError::Validation {
                    message: "population records need a gender or an age band".to_string(),
                });
            }
        }
        _ => {
            let category = draft.category.ok_or_else(|| ProfileError::Validation {
                message: format!("{} records need a category", draft.domain.code()),
            })?;
            if category.domain() != draft.domain {
                return Err(ProfileError::Validation {
                    message: format!(
                        "category {} does not belong to domain {}",
                        category.code(),
                        draft.domain.code()
                    ),
                });
            }
        }
    }

    Ok(())
}

/// Validate a facility draft.
pub fn validate_facility(draft: &FacilityDraft, ward_count: u16) -> Result<(), ProfileError> {
    validate_ward_number(draft.ward_number, ward_count)?;

    if draft.name.trim().is_empty() {
        return Err(ProfileError::Validation {
            message: "facility name cannot be empty".to_string(),
        });
    }
    if let Some(area) = draft.area_sq_km {
        if !area.is_finite() || area < 0.0 {
            return Err(ProfileError::Validation {
                message: format!("area must be a non-negative number (got {})", area),
            });
        }
    }
    if let Some(location) = &draft.location {
        if !(-90.0..=90.0).contains(&location.latitude)
            || !(-180.0..=180.0).contains(&location.longitude)
        {
            return Err(ProfileError::Validation {
                message: format!(
                    "location ({}, {}) is outside valid WGS84 bounds",
                    location.latitude, location.longitude
                ),
            });
        }
    }

    Ok(())
}

/// Validate a media draft. Items are URL references; uploads are handled
/// elsewhere.
pub fn validate_media(draft: &MediaDraft) -> Result<(), ProfileError> {
    if draft.url.trim().is_empty() {
        return Err(ProfileError::Validation {
            message: "media url cannot be empty".to_string(),
        });
    }
    if !draft.url.starts_with("http://") && !draft.url.starts_with("https://") {
        return Err(ProfileError::Validation {
            message: format!("media url '{}' must be http(s)", draft.url),
        });
    }
    if draft.mime_type.trim().is_empty() || !draft.mime_type.contains('/') {
        return Err(ProfileError::Validation {
            message: format!("'{}' is not a valid MIME type", draft.mime_type),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{Category, FacilityKind, Gender, GeoPoint, Religion};

    fn religion_draft(ward: u16, population: i64) -> SurveyRecordDraft {
        SurveyRecordDraft {
            domain: SurveyDomain::Religion,
            ward_number: ward,
            gender: None,
            age_group: None,
            category: Some(Category::Religion(Religion::Hindu)),
            population,
            households: None,
        }
    }

    #[test]
    fn ward_number_must_be_in_range() {
        assert!(validate_ward_number(1, 9).is_ok());
        assert!(validate_ward_number(9, 9).is_ok());
        assert!(validate_ward_number(0, 9).is_err());
        assert!(validate_ward_number(10, 9).is_err());
    }

    #[test]
    fn measures_must_be_non_negative() {
        assert!(validate_record(&religion_draft(2, 100), 9).is_ok());
        assert!(validate_record(&religion_draft(2, -1), 9).is_err());

        let mut draft = religion_draft(2, 100);
        draft.households = Some(-5);
        assert!(validate_record(&draft, 9).is_err());
    }

    #[test]
    fn categorical_shape_follows_the_domain() {
        // category from the wrong domain
        let mut draft = religion_draft(1, 10);
        draft.domain = SurveyDomain::Caste;
        assert!(validate_record(&draft, 9).is_err());

        // missing category outside POPULATION
        let mut draft = religion_draft(1, 10);
        draft.category = None;
        assert!(validate_record(&draft, 9).is_err());

        // POPULATION rejects categories and needs at least one dimension
        let mut draft = religion_draft(1, 10);
        draft.domain = SurveyDomain::Population;
        assert!(validate_record(&draft, 9).is_err());
        draft.category = None;
        assert!(validate_record(&draft, 9).is_err());
        draft.gender = Some(Gender::Female);
        assert!(validate_record(&draft, 9).is_ok());
    }

    fn grassland_draft(name: &str) -> FacilityDraft {
        FacilityDraft {
            kind: FacilityKind::Grassland,
            name: name.to_string(),
            ward_number: 3,
            area_sq_km: Some(1.2),
            elevation_m: Some(2200.0),
            ownership: None,
            is_fenced: false,
            has_water_source: true,
            notes: None,
            location: None,
            boundary: None,
        }
    }

    #[test]
    fn facility_name_and_geometry_checks() {
        assert!(validate_facility(&grassland_draft("खर्क"), 9).is_ok());
        assert!(validate_facility(&grassland_draft("  "), 9).is_err());

        let mut draft = grassland_draft("खर्क");
        draft.area_sq_km = Some(-0.5);
        assert!(validate_facility(&draft, 9).is_err());

        let mut draft = grassland_draft("खर्क");
        draft.location = Some(GeoPoint {
            latitude: 95.0,
            longitude: 86.0,
        });
        assert!(validate_facility(&draft, 9).is_err());
    }

    #[test]
    fn media_url_and_mime_checks() {
        let valid = MediaDraft {
            url: "https://cdn.example.org/ward3/grassland.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            title: None,
            description: None,
        };
        assert!(validate_media(&valid).is_ok());

        let mut draft = valid.clone();
        draft.url = "ftp://files.example.org/a.jpg".to_string();
        assert!(validate_media(&draft).is_err());

        let mut draft = valid.clone();
        draft.mime_type = "jpeg".to_string();
        assert!(validate_media(&draft).is_err());

        let mut draft = valid;
        draft.url = "".to_string();
        assert!(validate_media(&draft).is_err());
    }
}
