//! Contract layer - public API for in-process communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::ProfileApi;
pub use error::ProfileError;
pub use model::{
    AgeGroup, CasteGroup, Category, CategoryTotal, CropType, Dimension, DomainSummary,
    EducationLevel, Facility, FacilityDraft, FacilityKind, Gender, GeoPoint, MediaDraft,
    MediaItem, Occupation, Ownership, PopulationBreakdown, RecordKey, Religion, SurveyDomain,
    SurveyRecord, SurveyRecordDraft, TopCategory, Ward, WardSummary,
};
