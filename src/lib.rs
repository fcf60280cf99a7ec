//! Ward Profile Service
//!
//! Ward-level municipal survey data entry, listing and aggregation.
//! Survey records (population, religion, caste, occupation, crops,
//! education) are stored per ward, aggregated into category totals,
//! ward pivots and collapsed top-N views, and exposed over a REST API
//! alongside facility records with media galleries.

// Public exports
pub mod contract;
pub use contract::{
    DomainSummary, Facility, FacilityDraft, FacilityKind, MediaDraft, MediaItem, ProfileApi,
    ProfileError, SurveyDomain, SurveyRecord, SurveyRecordDraft, Ward,
};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
