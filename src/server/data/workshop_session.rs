//! Workshop session repository
//!
//! Owns persistence of the per-session seat counter. Counter changes are single
//! conditional updates evaluated by the database, so two concurrent admissions can never
//! both take the last seat.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::registration::RegistrationRepository, error::AppError,
    model::workshop::WorkshopSession,
};

/// Outcome of a seat counter change.
#[derive(Debug, Clone, PartialEq)]
pub enum SpotUpdate {
    /// Counter changed; holds the session as persisted.
    Updated(WorkshopSession),
    /// Change not allowed: too few seats, or restoring would exceed the allocation.
    Rejected,
    /// No session on that date.
    SessionNotFound,
}

pub struct WorkshopSessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WorkshopSessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the session of a workshop held on exactly `date`.
    pub async fn find(
        &self,
        workshop_id: i32,
        date: NaiveDate,
    ) -> Result<Option<WorkshopSession>, DbErr> {
        let entity = entity::prelude::WorkshopSession::find()
            .filter(entity::workshop_session::Column::WorkshopId.eq(workshop_id))
            .filter(entity::workshop_session::Column::Date.eq(date))
            .one(self.db)
            .await?;

        Ok(entity.map(WorkshopSession::from_entity))
    }

    /// Gets the session rows of several workshops, grouped by workshop ID.
    pub async fn get_by_workshop_ids(
        &self,
        workshop_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::workshop_session::Model>>, DbErr> {
        let mut grouped: HashMap<i32, Vec<entity::workshop_session::Model>> = HashMap::new();

        if workshop_ids.is_empty() {
            return Ok(grouped);
        }

        let sessions = entity::prelude::WorkshopSession::find()
            .filter(entity::workshop_session::Column::WorkshopId.is_in(workshop_ids.to_vec()))
            .order_by_asc(entity::workshop_session::Column::Date)
            .all(self.db)
            .await?;

        for session in sessions {
            grouped.entry(session.workshop_id).or_default().push(session);
        }

        Ok(grouped)
    }

    /// Takes `count` seats from the session on `date`.
    ///
    /// Issued as one conditional statement (`SET spots = spots - count WHERE spots >= count`)
    /// so it is the transaction's first write and a concurrent admission cannot take the
    /// same seat.
    ///
    /// # Returns
    /// - `Ok(SpotUpdate::Updated(_))` - Seats taken
    /// - `Ok(SpotUpdate::Rejected)` - Not enough seats left
    /// - `Ok(SpotUpdate::SessionNotFound)` - No session on that date
    pub async fn reduce_spots(
        &self,
        workshop_id: i32,
        date: NaiveDate,
        count: i32,
    ) -> Result<SpotUpdate, DbErr> {
        let result = entity::prelude::WorkshopSession::update_many()
            .col_expr(
                entity::workshop_session::Column::Spots,
                Expr::cust_with_values("spots - ?", [count]),
            )
            .filter(entity::workshop_session::Column::WorkshopId.eq(workshop_id))
            .filter(entity::workshop_session::Column::Date.eq(date))
            .filter(entity::workshop_session::Column::Spots.gte(count))
            .exec(self.db)
            .await?;

        self.spot_update(workshop_id, date, result.rows_affected)
            .await
    }

    /// Restores `count` seats to the session on `date`, never above its allocation.
    ///
    /// # Returns
    /// - `Ok(SpotUpdate::Updated(_))` - Seats restored
    /// - `Ok(SpotUpdate::Rejected)` - Allocation would be exceeded
    /// - `Ok(SpotUpdate::SessionNotFound)` - No session on that date
    pub async fn increase_spots(
        &self,
        workshop_id: i32,
        date: NaiveDate,
        count: i32,
    ) -> Result<SpotUpdate, DbErr> {
        let result = entity::prelude::WorkshopSession::update_many()
            .col_expr(
                entity::workshop_session::Column::Spots,
                Expr::cust_with_values("spots + ?", [count]),
            )
            .filter(entity::workshop_session::Column::WorkshopId.eq(workshop_id))
            .filter(entity::workshop_session::Column::Date.eq(date))
            .filter(Expr::cust_with_values("spots + ? <= allocation", [count]))
            .exec(self.db)
            .await?;

        self.spot_update(workshop_id, date, result.rows_affected)
            .await
    }

    /// Reads the session back after a conditional counter update.
    async fn spot_update(
        &self,
        workshop_id: i32,
        date: NaiveDate,
        rows_affected: u64,
    ) -> Result<SpotUpdate, DbErr> {
        Ok(match self.find(workshop_id, date).await? {
            None => SpotUpdate::SessionNotFound,
            Some(session) if rows_affected > 0 => SpotUpdate::Updated(session),
            Some(_) => SpotUpdate::Rejected,
        })
    }

    /// Makes the sessions of a workshop match `allocations`.
    ///
    /// Seats held by registered or confirmed registrations stay taken: a kept date gets
    /// `spots = allocation - held`. New dates are inserted and dates no longer listed are
    /// removed.
    ///
    /// # Returns
    /// - `Ok(())` - Sessions reconciled
    /// - `Err(AppError::BadRequest)` - An allocation is below the seats already held, or a
    ///   removed date still has registrations
    pub async fn reconcile(
        &self,
        workshop_id: i32,
        allocations: &[(NaiveDate, i32)],
    ) -> Result<(), AppError> {
        let existing = entity::prelude::WorkshopSession::find()
            .filter(entity::workshop_session::Column::WorkshopId.eq(workshop_id))
            .all(self.db)
            .await?;
        let held = RegistrationRepository::new(self.db)
            .count_live_by_date(workshop_id)
            .await?;
        let held_on = |date: &NaiveDate| held.get(date).copied().unwrap_or(0);

        for (date, allocation) in allocations {
            if *allocation < held_on(date) {
                return Err(AppError::BadRequest(format!(
                    "Session on {} has {} registrations, more than its new allocation of {}",
                    date,
                    held_on(date),
                    allocation
                )));
            }
        }

        let removed: Vec<&entity::workshop_session::Model> = existing
            .iter()
            .filter(|session| !allocations.iter().any(|(date, _)| *date == session.date))
            .collect();

        if let Some(session) = removed.iter().find(|session| held_on(&session.date) > 0) {
            return Err(AppError::BadRequest(format!(
                "Session on {} still has {} registrations and cannot be removed",
                session.date,
                held_on(&session.date)
            )));
        }

        if !removed.is_empty() {
            entity::prelude::WorkshopSession::delete_many()
                .filter(
                    entity::workshop_session::Column::Id
                        .is_in(removed.iter().map(|session| session.id)),
                )
                .exec(self.db)
                .await?;
        }

        for (date, allocation) in allocations {
            let spots = allocation - held_on(date);

            match existing.iter().find(|session| session.date == *date) {
                Some(session) => {
                    let mut active: entity::workshop_session::ActiveModel = session.clone().into();
                    active.spots = ActiveValue::Set(spots);
                    active.allocation = ActiveValue::Set(*allocation);
                    active.update(self.db).await?;
                }
                None => {
                    entity::workshop_session::ActiveModel {
                        workshop_id: ActiveValue::Set(workshop_id),
                        date: ActiveValue::Set(*date),
                        spots: ActiveValue::Set(spots),
                        allocation: ActiveValue::Set(*allocation),
                        ..Default::default()
                    }
                    .insert(self.db)
                    .await?;
                }
            }
        }

        Ok(())
    }

    /// Deletes every session of a workshop.
    pub async fn delete_by_workshop(&self, workshop_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::WorkshopSession::delete_many()
            .filter(entity::workshop_session::Column::WorkshopId.eq(workshop_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
