//! Workshop registration repository
//!
//! Provides the `RegistrationRepository` for creating, querying and updating registrations.
//! Listing queries attach the workshop (and for admin listings the user) so controllers
//! can render summaries without further lookups.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::RegistrationStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    registration::{
        CancelRegistrationParam, NewRegistrationParam, Registration, RegistrationFilter,
        RegistrationUser, UpdateRegistrationStatusParam,
    },
    workshop::WorkshopSummary,
};

/// Statuses that hold a seat.
const LIVE_STATUSES: [RegistrationStatus; 2] =
    [RegistrationStatus::Registered, RegistrationStatus::Confirmed];

pub struct RegistrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegistrationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a registration in `registered` status.
    ///
    /// # Arguments
    /// - `param` - Registration data; the seat must already have been taken
    /// - `now` - Registration timestamp
    pub async fn create(
        &self,
        param: NewRegistrationParam,
        now: DateTime<Utc>,
    ) -> Result<Registration, DbErr> {
        let entity = entity::workshop_registration::ActiveModel {
            workshop_id: ActiveValue::Set(param.workshop_id),
            user_id: ActiveValue::Set(param.user_id),
            session_date: ActiveValue::Set(param.session_date),
            participant_name: ActiveValue::Set(param.participant.name),
            participant_email: ActiveValue::Set(param.participant.email),
            participant_phone: ActiveValue::Set(param.participant.phone),
            participant_experience: ActiveValue::Set(param.participant.experience),
            participant_additional_info: ActiveValue::Set(param.participant.additional_info),
            payment_amount: ActiveValue::Set(param.payment.amount),
            payment_status: ActiveValue::Set(param.payment.status),
            payment_method: ActiveValue::Set(param.payment.method),
            payment_id: ActiveValue::Set(param.payment.payment_id),
            gateway_order_id: ActiveValue::Set(param.payment.gateway_order_id),
            gateway_signature: ActiveValue::Set(param.payment.gateway_signature),
            status: ActiveValue::Set(RegistrationStatus::Registered),
            registered_at: ActiveValue::Set(now),
            confirmed_at: ActiveValue::Set(None),
            cancelled_at: ActiveValue::Set(None),
            cancellation_reason: ActiveValue::Set(None),
            refund_amount: ActiveValue::Set(0.0),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Registration::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Registration>, DbErr> {
        let entity = entity::prelude::WorkshopRegistration::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Registration::from_entity))
    }

    /// Finds a registration only if it belongs to `user_id`.
    pub async fn find_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Registration>, DbErr> {
        let entity = entity::prelude::WorkshopRegistration::find_by_id(id)
            .filter(entity::workshop_registration::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Registration::from_entity))
    }

    /// Whether the user already holds a registered or confirmed seat for this session.
    pub async fn exists_active(
        &self,
        workshop_id: i32,
        user_id: i32,
        session_date: NaiveDate,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::WorkshopRegistration::find()
            .filter(entity::workshop_registration::Column::WorkshopId.eq(workshop_id))
            .filter(entity::workshop_registration::Column::UserId.eq(user_id))
            .filter(entity::workshop_registration::Column::SessionDate.eq(session_date))
            .filter(entity::workshop_registration::Column::Status.is_in(LIVE_STATUSES))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the registered and confirmed registrations of a workshop per session date.
    pub async fn count_live_by_date(
        &self,
        workshop_id: i32,
    ) -> Result<HashMap<NaiveDate, i32>, DbErr> {
        let rows = entity::prelude::WorkshopRegistration::find()
            .filter(entity::workshop_registration::Column::WorkshopId.eq(workshop_id))
            .filter(entity::workshop_registration::Column::Status.is_in(LIVE_STATUSES))
            .all(self.db)
            .await?;

        let mut held = HashMap::new();
        for row in rows {
            *held.entry(row.session_date).or_insert(0) += 1;
        }

        Ok(held)
    }

    /// Whether any registration already records this gateway order.
    pub async fn exists_gateway_order(&self, gateway_order_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::WorkshopRegistration::find()
            .filter(
                entity::workshop_registration::Column::GatewayOrderId.eq(gateway_order_id),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a user's registrations newest first, with workshop summaries.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Registration>, DbErr> {
        let rows = entity::prelude::WorkshopRegistration::find()
            .filter(entity::workshop_registration::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Workshop)
            .order_by_desc(entity::workshop_registration::Column::RegisteredAt)
            .order_by_desc(entity::workshop_registration::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(registration, workshop)| {
                let mut registration = Registration::from_entity(registration);
                registration.workshop = workshop.map(WorkshopSummary::from_entity);
                registration
            })
            .collect())
    }

    /// Gets a page of registrations matching the filter, newest first, with workshop and
    /// user summaries.
    ///
    /// # Returns
    /// - `Ok((registrations, total))` - Page of registrations and total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &RegistrationFilter,
    ) -> Result<(Vec<Registration>, u64), DbErr> {
        let mut query = entity::prelude::WorkshopRegistration::find();

        if let Some(workshop_id) = filter.workshop_id {
            query =
                query.filter(entity::workshop_registration::Column::WorkshopId.eq(workshop_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::workshop_registration::Column::Status.eq(status));
        }

        let paginator = query
            .find_also_related(entity::prelude::Workshop)
            .order_by_desc(entity::workshop_registration::Column::RegisteredAt)
            .order_by_desc(entity::workshop_registration::Column::Id)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(filter.page).await?;

        let user_ids: Vec<i32> = rows.iter().map(|(r, _)| r.user_id).collect();
        let users = if user_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(user_ids))
                .all(self.db)
                .await?
        };

        let registrations = rows
            .into_iter()
            .map(|(registration, workshop)| {
                let user = users
                    .iter()
                    .find(|u| u.id == registration.user_id)
                    .cloned()
                    .map(RegistrationUser::from_entity);

                let mut registration = Registration::from_entity(registration);
                registration.workshop = workshop.map(WorkshopSummary::from_entity);
                registration.user = user;
                registration
            })
            .collect();

        Ok((registrations, total))
    }

    /// Marks a registration cancelled and records the refund.
    ///
    /// # Returns
    /// - `Ok(Some(Registration))` - Updated registration
    /// - `Ok(None)` - No registration with that ID
    pub async fn cancel(
        &self,
        id: i32,
        param: CancelRegistrationParam,
    ) -> Result<Option<Registration>, DbErr> {
        let Some(existing) = entity::prelude::WorkshopRegistration::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::workshop_registration::ActiveModel = existing.into();
        active.status = ActiveValue::Set(RegistrationStatus::Cancelled);
        active.cancelled_at = ActiveValue::Set(Some(param.cancelled_at));
        active.cancellation_reason = ActiveValue::Set(Some(param.reason));
        active.refund_amount = ActiveValue::Set(param.refund_amount);
        active.updated_at = ActiveValue::Set(param.cancelled_at);

        let entity = active.update(self.db).await?;

        Ok(Some(Registration::from_entity(entity)))
    }

    /// Writes an admin status change.
    ///
    /// Notes are replaced only when provided. `confirmed_at` is stamped when moving into
    /// `confirmed` from another status. Cancellation goes through `cancel` instead.
    ///
    /// # Returns
    /// - `Ok(Some(Registration))` - Updated registration
    /// - `Ok(None)` - No registration with that ID
    pub async fn update_status(
        &self,
        id: i32,
        param: UpdateRegistrationStatusParam,
        now: DateTime<Utc>,
    ) -> Result<Option<Registration>, DbErr> {
        let Some(existing) = entity::prelude::WorkshopRegistration::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let newly_confirmed = param.status == RegistrationStatus::Confirmed
            && existing.status != RegistrationStatus::Confirmed;

        let mut active: entity::workshop_registration::ActiveModel = existing.into();
        active.status = ActiveValue::Set(param.status);
        if newly_confirmed {
            active.confirmed_at = ActiveValue::Set(Some(now));
        }
        if let Some(notes) = param.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        active.updated_at = ActiveValue::Set(now);

        let entity = active.update(self.db).await?;

        Ok(Some(Registration::from_entity(entity)))
    }

    /// Moves every live registration whose session is before `today` to `completed`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of registrations completed
    pub async fn complete_before(
        &self,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::WorkshopRegistration::update_many()
            .col_expr(
                entity::workshop_registration::Column::Status,
                Expr::value(RegistrationStatus::Completed),
            )
            .col_expr(
                entity::workshop_registration::Column::UpdatedAt,
                Expr::value(now),
            )
            .filter(entity::workshop_registration::Column::Status.is_in(LIVE_STATUSES))
            .filter(entity::workshop_registration::Column::SessionDate.lt(today))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every registration of a workshop.
    pub async fn delete_by_workshop(&self, workshop_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::WorkshopRegistration::delete_many()
            .filter(entity::workshop_registration::Column::WorkshopId.eq(workshop_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
