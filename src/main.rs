//! Ward profile service entry point

use anyhow::Context;
use clap::Parser;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ward_profile::api::rest::routes;
use ward_profile::config::Config;
use ward_profile::domain::service::Service;
use ward_profile::infra::storage::migrations::Migrator;
use ward_profile::infra::storage::repositories::{
    SeaOrmFacilityRepository, SeaOrmSurveyRepository,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Ward-level municipal profile service")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let db = Arc::new(
        Database::connect(&config.database_url)
            .await
            .context("database connection failed")?,
    );
    Migrator::up(db.as_ref(), None)
        .await
        .context("migration failed")?;

    let survey_repo = Arc::new(SeaOrmSurveyRepository::new(db.clone()));
    let facility_repo = Arc::new(SeaOrmFacilityRepository::new(db.clone()));
    let service = Arc::new(Service::new(
        survey_repo,
        facility_repo,
        config.ward_count,
        config.default_top_n,
    ));

    let router = routes::router(service);
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, wards = config.ward_count, "ward profile service listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
