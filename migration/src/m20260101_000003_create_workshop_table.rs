use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workshop::Table)
                    .if_not_exists()
                    .col(pk_auto(Workshop::Id))
                    .col(string(Workshop::Title))
                    .col(text(Workshop::Description))
                    .col(string(Workshop::Image))
                    .col(string(Workshop::Duration))
                    .col(string(Workshop::Schedule))
                    .col(string(Workshop::Location))
                    .col(string(Workshop::Price))
                    .col(integer(Workshop::Capacity))
                    .col(string(Workshop::Level).default("Beginner"))
                    .col(json(Workshop::Curriculum))
                    .col(boolean(Workshop::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Workshop::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Workshop::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workshop::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Workshop {
    Table,
    Id,
    Title,
    Description,
    Image,
    Duration,
    Schedule,
    Location,
    Price,
    Capacity,
    Level,
    Curriculum,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
