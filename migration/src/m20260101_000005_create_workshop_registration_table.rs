use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_user_table::User, m20260101_000003_create_workshop_table::Workshop,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkshopRegistration::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkshopRegistration::Id))
                    .col(integer(WorkshopRegistration::WorkshopId))
                    .col(integer(WorkshopRegistration::UserId))
                    .col(date(WorkshopRegistration::SessionDate))
                    .col(string(WorkshopRegistration::ParticipantName))
                    .col(string(WorkshopRegistration::ParticipantEmail))
                    .col(string(WorkshopRegistration::ParticipantPhone))
                    .col(string(WorkshopRegistration::ParticipantExperience))
                    .col(text_null(WorkshopRegistration::ParticipantAdditionalInfo))
                    .col(string(WorkshopRegistration::PaymentAmount))
                    .col(string(WorkshopRegistration::PaymentStatus).default("pending"))
                    .col(string_null(WorkshopRegistration::PaymentMethod))
                    .col(string_null(WorkshopRegistration::PaymentId))
                    .col(string_null(WorkshopRegistration::GatewayOrderId))
                    .col(string_null(WorkshopRegistration::GatewaySignature))
                    .col(string(WorkshopRegistration::Status).default("registered"))
                    .col(timestamp_with_time_zone(WorkshopRegistration::RegisteredAt))
                    .col(timestamp_with_time_zone_null(
                        WorkshopRegistration::ConfirmedAt,
                    ))
                    .col(timestamp_with_time_zone_null(
                        WorkshopRegistration::CancelledAt,
                    ))
                    .col(string_null(WorkshopRegistration::CancellationReason))
                    .col(double(WorkshopRegistration::RefundAmount).default(0.0))
                    .col(text_null(WorkshopRegistration::Notes))
                    .col(
                        timestamp_with_time_zone(WorkshopRegistration::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(WorkshopRegistration::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workshop_registration_workshop_id")
                            .from(WorkshopRegistration::Table, WorkshopRegistration::WorkshopId)
                            .to(Workshop::Table, Workshop::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workshop_registration_user_id")
                            .from(WorkshopRegistration::Table, WorkshopRegistration::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Duplicate check and admin filtering both look registrations up by these columns
        manager
            .create_index(
                Index::create()
                    .name("idx_workshop_registration_lookup")
                    .table(WorkshopRegistration::Table)
                    .col(WorkshopRegistration::WorkshopId)
                    .col(WorkshopRegistration::UserId)
                    .col(WorkshopRegistration::SessionDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkshopRegistration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkshopRegistration {
    Table,
    Id,
    WorkshopId,
    UserId,
    SessionDate,
    ParticipantName,
    ParticipantEmail,
    ParticipantPhone,
    ParticipantExperience,
    ParticipantAdditionalInfo,
    PaymentAmount,
    PaymentStatus,
    PaymentMethod,
    PaymentId,
    GatewayOrderId,
    GatewaySignature,
    Status,
    RegisteredAt,
    ConfirmedAt,
    CancelledAt,
    CancellationReason,
    RefundAmount,
    Notes,
    CreatedAt,
    UpdatedAt,
}
