//! Runtime configuration for the ward profile service

use anyhow::Context;
use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// Database connection URL (sqlite or postgres)
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Number of wards in the municipality
    #[serde(default = "default_ward_count")]
    pub ward_count: u16,

    /// Top-N size used when a summary request does not specify one
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            database_url: default_database_url(),
            ward_count: default_ward_count(),
            default_top_n: default_top_n(),
        }
    }
}

impl Config {
    /// Load configuration from an optional YAML file with a
    /// `WARD_PROFILE_`-prefixed environment overlay on top.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed("WARD_PROFILE_"))
            .extract()
            .context("invalid configuration")
    }
}

fn default_bind_addr() -> SocketAddr {
    ([127, 0, 0, 1], 8080).into()
}

fn default_database_url() -> String {
    "sqlite://ward_profile.db?mode=rwc".to_string()
}

fn default_ward_count() -> u16 {
    9
}

fn default_top_n() -> usize {
    5
}
