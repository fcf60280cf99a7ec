//! Integration tests for survey record CRUD, facilities and media galleries

use ward_profile::contract::{
    Category, FacilityKind, ProfileError, Religion, SurveyDomain, SurveyRecordDraft,
};

mod common;
use common::{
    category_draft, facility_draft, media_draft, population_draft, TestHarness, WARD_COUNT,
};

// ===== Survey record CRUD =====

#[tokio::test]
async fn create_and_get_record() {
    let harness = TestHarness::new();

    let created = harness
        .service
        .create_record(category_draft(
            SurveyDomain::Religion,
            3,
            Category::Religion(Religion::Hindu),
            250,
        ))
        .await
        .unwrap();

    let fetched = harness.service.get_record(created.id).await.unwrap();
    assert_eq!(fetched.population, 250);
    assert_eq!(fetched.ward_number, 3);
    assert_eq!(fetched.category, Some(Category::Religion(Religion::Hindu)));
}

#[tokio::test]
async fn duplicate_key_is_rejected() {
    let harness = TestHarness::new();
    let draft = category_draft(
        SurveyDomain::Religion,
        1,
        Category::Religion(Religion::Buddhist),
        40,
    );

    harness.service.create_record(draft.clone()).await.unwrap();
    let err = harness.service.create_record(draft).await.unwrap_err();

    assert!(matches!(err, ProfileError::Conflict { .. }));
    assert_eq!(harness.survey_repo.len(), 1);
}

#[tokio::test]
async fn same_key_in_different_wards_is_allowed() {
    let harness = TestHarness::new();
    let category = Category::Religion(Religion::Hindu);

    for ward in 1..=3 {
        harness
            .service
            .create_record(category_draft(SurveyDomain::Religion, ward, category, 100))
            .await
            .unwrap();
    }
    assert_eq!(harness.survey_repo.len(), 3);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_created_at() {
    let harness = TestHarness::new();
    let created = harness
        .service
        .create_record(category_draft(
            SurveyDomain::Religion,
            2,
            Category::Religion(Religion::Kirant),
            75,
        ))
        .await
        .unwrap();

    let updated = harness
        .service
        .update_record(
            created.id,
            category_draft(
                SurveyDomain::Religion,
                2,
                Category::Religion(Religion::Kirant),
                90,
            ),
        )
        .await
        .unwrap();

    assert_eq!(updated.population, 90);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_onto_another_records_key_conflicts() {
    let harness = TestHarness::new();
    harness
        .service
        .create_record(category_draft(
            SurveyDomain::Religion,
            1,
            Category::Religion(Religion::Hindu),
            10,
        ))
        .await
        .unwrap();
    let second = harness
        .service
        .create_record(category_draft(
            SurveyDomain::Religion,
            1,
            Category::Religion(Religion::Buddhist),
            20,
        ))
        .await
        .unwrap();

    let err = harness
        .service
        .update_record(
            second.id,
            category_draft(
                SurveyDomain::Religion,
                1,
                Category::Religion(Religion::Hindu),
                20,
            ),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ProfileError::Conflict { .. }));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let harness = TestHarness::new();
    let created = harness
        .service
        .create_record(category_draft(
            SurveyDomain::Religion,
            5,
            Category::Religion(Religion::Christian),
            12,
        ))
        .await
        .unwrap();

    harness.service.delete_record(created.id).await.unwrap();
    let err = harness.service.get_record(created.id).await.unwrap_err();
    assert!(matches!(err, ProfileError::NotFound { .. }));
}

#[tokio::test]
async fn list_records_filters_by_ward() {
    let harness = TestHarness::new();
    harness
        .service
        .create_record(category_draft(
            SurveyDomain::Religion,
            1,
            Category::Religion(Religion::Hindu),
            10,
        ))
        .await
        .unwrap();
    harness
        .service
        .create_record(category_draft(
            SurveyDomain::Religion,
            2,
            Category::Religion(Religion::Hindu),
            20,
        ))
        .await
        .unwrap();

    let all = harness
        .service
        .list_records(SurveyDomain::Religion, None)
        .await
        .unwrap();
    let ward_two = harness
        .service
        .list_records(SurveyDomain::Religion, Some(2))
        .await
        .unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(ward_two.len(), 1);
    assert_eq!(ward_two[0].population, 20);
}

// ===== Validation =====

#[tokio::test]
async fn ward_out_of_range_is_rejected() {
    let harness = TestHarness::new();
    let err = harness
        .service
        .create_record(category_draft(
            SurveyDomain::Religion,
            WARD_COUNT + 1,
            Category::Religion(Religion::Hindu),
            5,
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, ProfileError::Validation { .. }));
}

#[tokio::test]
async fn negative_population_is_rejected() {
    let harness = TestHarness::new();
    let err = harness
        .service
        .create_record(category_draft(
            SurveyDomain::Religion,
            1,
            Category::Religion(Religion::Hindu),
            -1,
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, ProfileError::Validation { .. }));
}

#[tokio::test]
async fn population_record_without_dimensions_is_rejected() {
    let harness = TestHarness::new();
    let draft = SurveyRecordDraft {
        domain: SurveyDomain::Population,
        ward_number: 1,
        gender: None,
        age_group: None,
        category: None,
        population: 50,
        households: None,
    };

    let err = harness.service.create_record(draft).await.unwrap_err();
    assert!(matches!(err, ProfileError::Validation { .. }));
}

#[tokio::test]
async fn category_from_wrong_domain_is_rejected() {
    let harness = TestHarness::new();
    let err = harness
        .service
        .create_record(category_draft(
            SurveyDomain::Caste,
            1,
            Category::Religion(Religion::Hindu),
            5,
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, ProfileError::Validation { .. }));
}

// ===== Wards =====

#[tokio::test]
async fn wards_cover_configured_range_and_flag_observed() {
    let harness = TestHarness::new();
    harness
        .service
        .create_record(population_draft(
            4,
            ward_profile::contract::Gender::Female,
            ward_profile::contract::AgeGroup::Age20To29,
            120,
        ))
        .await
        .unwrap();

    let wards = harness.service.wards().await.unwrap();
    assert_eq!(wards.len(), usize::from(WARD_COUNT));
    assert!(wards.iter().find(|w| w.number == 4).unwrap().has_records);
    assert!(!wards.iter().find(|w| w.number == 1).unwrap().has_records);
}

// ===== Facilities and media =====

#[tokio::test]
async fn facility_crud_roundtrip() {
    let harness = TestHarness::new();
    let created = harness
        .service
        .create_facility(facility_draft(FacilityKind::Grassland, "खर्क", 2))
        .await
        .unwrap();

    let (fetched, media) = harness.service.get_facility(created.id).await.unwrap();
    assert_eq!(fetched.name, "खर्क");
    assert!(media.is_empty());

    let mut draft = facility_draft(FacilityKind::Grassland, "ठूलो खर्क", 2);
    draft.is_fenced = true;
    let updated = harness
        .service
        .update_facility(created.id, draft)
        .await
        .unwrap();
    assert_eq!(updated.name, "ठूलो खर्क");
    assert!(updated.is_fenced);

    harness.service.delete_facility(created.id).await.unwrap();
    let err = harness.service.get_facility(created.id).await.unwrap_err();
    assert!(matches!(err, ProfileError::NotFound { .. }));
}

#[tokio::test]
async fn empty_facility_name_is_rejected() {
    let harness = TestHarness::new();
    let err = harness
        .service
        .create_facility(facility_draft(FacilityKind::CommunityBuilding, "  ", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, ProfileError::Validation { .. }));
}

#[tokio::test]
async fn first_media_item_becomes_primary() {
    let harness = TestHarness::new();
    let facility = harness
        .service
        .create_facility(facility_draft(FacilityKind::HistoricalSite, "गढी", 1))
        .await
        .unwrap();

    let first = harness
        .service
        .add_media(facility.id, media_draft("https://example.org/a.jpg"))
        .await
        .unwrap();
    let second = harness
        .service
        .add_media(facility.id, media_draft("https://example.org/b.jpg"))
        .await
        .unwrap();

    assert!(first.is_primary);
    assert!(!second.is_primary);
    assert_eq!(second.position, first.position + 1);
    assert_eq!(harness.facility_repo.primary_count(facility.id), 1);
}

#[tokio::test]
async fn set_primary_unsets_previous() {
    let harness = TestHarness::new();
    let facility = harness
        .service
        .create_facility(facility_draft(FacilityKind::ParkingFacility, "पार्किङ", 3))
        .await
        .unwrap();
    harness
        .service
        .add_media(facility.id, media_draft("https://example.org/a.jpg"))
        .await
        .unwrap();
    let second = harness
        .service
        .add_media(facility.id, media_draft("https://example.org/b.jpg"))
        .await
        .unwrap();

    let promoted = harness
        .service
        .set_primary_media(second.id)
        .await
        .unwrap();

    assert!(promoted.is_primary);
    assert_eq!(harness.facility_repo.primary_count(facility.id), 1);
}

#[tokio::test]
async fn deleting_primary_promotes_oldest_remaining() {
    let harness = TestHarness::new();
    let facility = harness
        .service
        .create_facility(facility_draft(FacilityKind::GrazingArea, "चरन", 2))
        .await
        .unwrap();
    let first = harness
        .service
        .add_media(facility.id, media_draft("https://example.org/a.jpg"))
        .await
        .unwrap();
    let second = harness
        .service
        .add_media(facility.id, media_draft("https://example.org/b.jpg"))
        .await
        .unwrap();

    harness.service.delete_media(first.id).await.unwrap();

    let (_, gallery) = harness.service.get_facility(facility.id).await.unwrap();
    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery[0].id, second.id);
    assert!(gallery[0].is_primary);
}

#[tokio::test]
async fn invalid_media_url_is_rejected() {
    let harness = TestHarness::new();
    let facility = harness
        .service
        .create_facility(facility_draft(FacilityKind::Grassland, "खर्क", 1))
        .await
        .unwrap();

    let err = harness
        .service
        .add_media(facility.id, media_draft("ftp://example.org/a.jpg"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProfileError::Validation { .. }));
}

#[tokio::test]
async fn media_on_missing_facility_is_not_found() {
    let harness = TestHarness::new();
    let err = harness
        .service
        .add_media(uuid::Uuid::new_v4(), media_draft("https://example.org/a.jpg"))
        .await
        .unwrap_err();
    assert!(matches!(err, ProfileError::NotFound { .. }));
}
