//! API layer - native (in-process) and REST surfaces

pub mod native;
pub mod rest;
