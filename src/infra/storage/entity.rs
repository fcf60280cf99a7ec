//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Survey records table entity
///
/// One row per (domain, ward, dimensions) key; dimension values are stored
/// as their stable codes and parsed back through the contract enums.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "survey_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Survey domain code (RELIGION, CASTE, ...)
    pub domain: String,

    /// Ward number
    pub ward_number: i32,

    /// Gender code, where the table carries one
    pub gender: Option<String>,

    /// Age band code, where the table carries one
    pub age_group: Option<String>,

    /// Domain category code, absent for POPULATION rows
    pub category: Option<String>,

    /// Primary measure
    pub population: i64,

    /// Household count, where the table carries one
    pub households: Option<i64>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Facilities module
pub mod facility {
    use sea_orm::entity::prelude::*;

    /// Facilities table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "facilities")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        /// Facility kind code (GRASSLAND, COMMUNITY_BUILDING, ...)
        pub kind: String,

        pub name: String,
        pub ward_number: i32,
        pub area_sq_km: Option<f64>,
        pub elevation_m: Option<f64>,

        /// Ownership code
        pub ownership: Option<String>,

        pub is_fenced: bool,
        pub has_water_source: bool,
        pub notes: Option<String>,

        /// Point geometry, both columns present or both absent
        pub latitude: Option<f64>,
        pub longitude: Option<f64>,

        /// Boundary polygon as GeoJSON
        pub boundary: Option<Json>,

        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::media::Entity")]
        Media,
    }

    impl Related<super::media::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Media.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Media items module
pub mod media {
    use sea_orm::entity::prelude::*;

    /// Media items table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "media_items")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        /// Owning facility
        pub facility_id: Uuid,

        pub url: String,
        pub mime_type: String,
        pub title: Option<String>,
        pub description: Option<String>,

        /// At most one true per facility, maintained transactionally
        pub is_primary: bool,

        /// Gallery ordering
        pub position: i32,

        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::facility::Entity",
            from = "Column::FacilityId",
            to = "super::facility::Column::Id"
        )]
        Facility,
    }

    impl Related<super::facility::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Facility.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
