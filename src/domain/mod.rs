//! Domain layer - business logic and services

pub mod aggregate;
pub mod cache;
pub mod repository;
pub mod service;
pub mod validation;

pub use cache::SnapshotCache;
pub use repository::{FacilityRepository, SurveyRepository, UniqueViolation};
pub use service::Service;
