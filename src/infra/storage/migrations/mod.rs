//! Database migrations for the ward profile service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250115_000001_create_survey_records::Migration),
            Box::new(m20250115_000002_create_facilities::Migration),
            Box::new(m20250115_000003_create_media_items::Migration),
        ]
    }
}

mod m20250115_000001_create_survey_records {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SurveyRecords::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SurveyRecords::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(SurveyRecords::Domain).string().not_null())
                        .col(
                            ColumnDef::new(SurveyRecords::WardNumber)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SurveyRecords::Gender).string())
                        .col(ColumnDef::new(SurveyRecords::AgeGroup).string())
                        .col(ColumnDef::new(SurveyRecords::Category).string())
                        .col(
                            ColumnDef::new(SurveyRecords::Population)
                                .big_integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SurveyRecords::Households).big_integer())
                        .col(
                            ColumnDef::new(SurveyRecords::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(SurveyRecords::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            // the authoritative uniqueness constraint on (domain, ward,
            // dimensions); the in-memory duplicate scan is only a hint
            manager
                .create_index(
                    Index::create()
                        .name("uq_survey_records_key")
                        .table(SurveyRecords::Table)
                        .col(SurveyRecords::Domain)
                        .col(SurveyRecords::WardNumber)
                        .col(SurveyRecords::Gender)
                        .col(SurveyRecords::AgeGroup)
                        .col(SurveyRecords::Category)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_survey_records_domain")
                        .table(SurveyRecords::Table)
                        .col(SurveyRecords::Domain)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_survey_records_ward")
                        .table(SurveyRecords::Table)
                        .col(SurveyRecords::WardNumber)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SurveyRecords::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SurveyRecords {
        Table,
        Id,
        Domain,
        WardNumber,
        Gender,
        AgeGroup,
        Category,
        Population,
        Households,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250115_000002_create_facilities {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Facilities::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Facilities::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Facilities::Kind).string().not_null())
                        .col(ColumnDef::new(Facilities::Name).string().not_null())
                        .col(
                            ColumnDef::new(Facilities::WardNumber)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Facilities::AreaSqKm).double())
                        .col(ColumnDef::new(Facilities::ElevationM).double())
                        .col(ColumnDef::new(Facilities::Ownership).string())
                        .col(
                            ColumnDef::new(Facilities::IsFenced)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Facilities::HasWaterSource)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Facilities::Notes).text())
                        .col(ColumnDef::new(Facilities::Latitude).double())
                        .col(ColumnDef::new(Facilities::Longitude).double())
                        .col(ColumnDef::new(Facilities::Boundary).json())
                        .col(
                            ColumnDef::new(Facilities::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Facilities::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_facilities_kind")
                        .table(Facilities::Table)
                        .col(Facilities::Kind)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_facilities_ward")
                        .table(Facilities::Table)
                        .col(Facilities::WardNumber)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Facilities::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Facilities {
        Table,
        Id,
        Kind,
        Name,
        WardNumber,
        AreaSqKm,
        ElevationM,
        Ownership,
        IsFenced,
        HasWaterSource,
        Notes,
        Latitude,
        Longitude,
        Boundary,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250115_000003_create_media_items {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(MediaItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MediaItems::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(MediaItems::FacilityId).uuid().not_null())
                        .col(ColumnDef::new(MediaItems::Url).string().not_null())
                        .col(ColumnDef::new(MediaItems::MimeType).string().not_null())
                        .col(ColumnDef::new(MediaItems::Title).string())
                        .col(ColumnDef::new(MediaItems::Description).text())
                        .col(
                            ColumnDef::new(MediaItems::IsPrimary)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(MediaItems::Position)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(MediaItems::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_media_items_facility")
                                .from(MediaItems::Table, MediaItems::FacilityId)
                                .to(Facilities::Table, Facilities::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_media_items_facility")
                        .table(MediaItems::Table)
                        .col(MediaItems::FacilityId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MediaItems::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum MediaItems {
        Table,
        Id,
        FacilityId,
        Url,
        MimeType,
        Title,
        Description,
        IsPrimary,
        Position,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum Facilities {
        Table,
        Id,
    }
}
