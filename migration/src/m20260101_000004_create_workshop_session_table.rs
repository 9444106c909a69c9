use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000003_create_workshop_table::Workshop;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkshopSession::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkshopSession::Id))
                    .col(integer(WorkshopSession::WorkshopId))
                    .col(date(WorkshopSession::Date))
                    .col(integer(WorkshopSession::Spots))
                    .col(integer(WorkshopSession::Allocation))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workshop_session_workshop_id")
                            .from(WorkshopSession::Table, WorkshopSession::WorkshopId)
                            .to(Workshop::Table, Workshop::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_workshop_session_workshop_date")
                    .table(WorkshopSession::Table)
                    .col(WorkshopSession::WorkshopId)
                    .col(WorkshopSession::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkshopSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkshopSession {
    Table,
    Id,
    WorkshopId,
    Date,
    Spots,
    Allocation,
}
