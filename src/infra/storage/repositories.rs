//! SeaORM repository implementations

use crate::contract::{Facility, MediaItem, SurveyDomain, SurveyRecord};
use crate::domain::repository::{FacilityRepository, SurveyRepository, UniqueViolation};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::entity;

/// Translate a unique-index breach into the typed violation the service
/// maps to a user-facing Conflict.
fn map_unique_violation(error: DbErr, key: String) -> anyhow::Error {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = error.sql_err() {
        UniqueViolation { key }.into()
    } else {
        error.into()
    }
}

// ===== Survey repository =====

pub struct SeaOrmSurveyRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSurveyRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SurveyRepository for SeaOrmSurveyRepository {
    async fn insert(&self, record: &SurveyRecord) -> Result<SurveyRecord> {
        let active: entity::ActiveModel = record.into();
        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| map_unique_violation(e, record.key().describe()))?;

        result.try_into()
    }

    async fn update(&self, record: &SurveyRecord) -> Result<SurveyRecord> {
        let active: entity::ActiveModel = record.into();
        let result = entity::Entity::update(active)
            .exec(&*self.db)
            .await
            .map_err(|e| map_unique_violation(e, record.key().describe()))?;

        result.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SurveyRecord>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        match result {
            Some(model) => Ok(Some(model.try_into()?)),
            None => Ok(None),
        }
    }

    async fn list_by_domain(&self, domain: SurveyDomain) -> Result<Vec<SurveyRecord>> {
        let results = entity::Entity::find()
            .filter(entity::Column::Domain.eq(domain.code()))
            .order_by_asc(entity::Column::WardNumber)
            .order_by_asc(entity::Column::Category)
            .order_by_asc(entity::Column::Gender)
            .order_by_asc(entity::Column::AgeGroup)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|model| model.try_into())
            .collect::<Result<Vec<_>>>()
    }

    async fn observed_wards(&self) -> Result<Vec<u16>> {
        let wards: Vec<i32> = entity::Entity::find()
            .select_only()
            .column(entity::Column::WardNumber)
            .distinct()
            .order_by_asc(entity::Column::WardNumber)
            .into_tuple()
            .all(&*self.db)
            .await?;

        wards
            .into_iter()
            .map(|w| u16::try_from(w).map_err(|_| anyhow!("ward number out of range: {}", w)))
            .collect()
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

// ===== Facility repository =====

pub struct SeaOrmFacilityRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmFacilityRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FacilityRepository for SeaOrmFacilityRepository {
    async fn insert(&self, facility: &Facility) -> Result<Facility> {
        let active: entity::facility::ActiveModel = facility.into();
        let result = entity::facility::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        result.try_into()
    }

    async fn update(&self, facility: &Facility) -> Result<Facility> {
        let active: entity::facility::ActiveModel = facility.into();
        let result = entity::facility::Entity::update(active).exec(&*self.db).await?;

        result.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Facility>> {
        let result = entity::facility::Entity::find_by_id(id).one(&*self.db).await?;

        match result {
            Some(model) => Ok(Some(model.try_into()?)),
            None => Ok(None),
        }
    }

    async fn list(&self, ward_number: Option<u16>) -> Result<Vec<Facility>> {
        let mut query = entity::facility::Entity::find();

        if let Some(ward) = ward_number {
            query = query.filter(entity::facility::Column::WardNumber.eq(i32::from(ward)));
        }

        let results = query
            .order_by_asc(entity::facility::Column::WardNumber)
            .order_by_asc(entity::facility::Column::Name)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|model| model.try_into())
            .collect::<Result<Vec<_>>>()
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        // media rows go with the facility; explicit so the invariant does
        // not depend on the backend honoring the cascade
        let txn = self.db.begin().await?;

        entity::media::Entity::delete_many()
            .filter(entity::media::Column::FacilityId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::facility::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    // ===== Media =====

    async fn add_media(&self, item: &MediaItem) -> Result<MediaItem> {
        let active: entity::media::ActiveModel = item.into();
        let result = entity::media::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_media(&self, media_id: Uuid) -> Result<Option<MediaItem>> {
        let result = entity::media::Entity::find_by_id(media_id).one(&*self.db).await?;

        Ok(result.map(|model| model.into()))
    }

    async fn list_media(&self, facility_id: Uuid) -> Result<Vec<MediaItem>> {
        let results = entity::media::Entity::find()
            .filter(entity::media::Column::FacilityId.eq(facility_id))
            .order_by_asc(entity::media::Column::Position)
            .order_by_asc(entity::media::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|model| model.into()).collect())
    }

    async fn delete_media(&self, media_id: Uuid) -> Result<bool> {
        let result = entity::media::Entity::delete_by_id(media_id)
            .exec(&*self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn set_primary(&self, facility_id: Uuid, media_id: Uuid) -> Result<MediaItem> {
        use sea_orm::ActiveValue::Set;

        let txn = self.db.begin().await?;

        let target = entity::media::Entity::find_by_id(media_id)
            .filter(entity::media::Column::FacilityId.eq(facility_id))
            .one(&txn)
            .await?
            .ok_or_else(|| {
                anyhow!("media {} does not belong to facility {}", media_id, facility_id)
            })?;

        entity::media::Entity::update_many()
            .col_expr(entity::media::Column::IsPrimary, Expr::value(false))
            .filter(entity::media::Column::FacilityId.eq(facility_id))
            .filter(entity::media::Column::IsPrimary.eq(true))
            .exec(&txn)
            .await?;

        let mut active: entity::media::ActiveModel = target.into();
        active.is_primary = Set(true);
        let updated = entity::media::Entity::update(active).exec(&txn).await?;

        txn.commit().await?;
        Ok(updated.into())
    }
}
