//! Workshop session factory.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating sessions belonging to a workshop.
pub struct WorkshopSessionFactory<'a> {
    db: &'a DatabaseConnection,
    workshop_id: i32,
    date: NaiveDate,
    spots: i32,
    allocation: Option<i32>,
}

impl<'a> WorkshopSessionFactory<'a> {
    /// Creates a new factory for the given workshop.
    ///
    /// Defaults:
    /// - date: 30 days from today
    /// - spots: `10`
    /// - allocation: same as spots
    pub fn new(db: &'a DatabaseConnection, workshop_id: i32) -> Self {
        Self {
            db,
            workshop_id,
            date: Utc::now().date_naive() + Duration::days(30),
            spots: 10,
            allocation: None,
        }
    }

    /// Sets the session date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the remaining spots.
    pub fn spots(mut self, spots: i32) -> Self {
        self.spots = spots;
        self
    }

    /// Sets the original allocation when it should differ from the remaining spots.
    pub fn allocation(mut self, allocation: i32) -> Self {
        self.allocation = Some(allocation);
        self
    }

    /// Builds and inserts the session.
    pub async fn build(self) -> Result<entity::workshop_session::Model, DbErr> {
        entity::workshop_session::ActiveModel {
            workshop_id: ActiveValue::Set(self.workshop_id),
            date: ActiveValue::Set(self.date),
            spots: ActiveValue::Set(self.spots),
            allocation: ActiveValue::Set(self.allocation.unwrap_or(self.spots)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a session on `date` with `spots` remaining out of `spots` allocated.
pub async fn create_session(
    db: &DatabaseConnection,
    workshop_id: i32,
    date: NaiveDate,
    spots: i32,
) -> Result<entity::workshop_session::Model, DbErr> {
    WorkshopSessionFactory::new(db, workshop_id)
        .date(date)
        .spots(spots)
        .build()
        .await
}
