//! Workshop catalog service.
//!
//! Public reads only ever see active workshops. Admin writes validate their input and
//! stamp `updated_at` explicitly; multi-table writes run in a transaction.

use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        registration::RegistrationRepository, workshop::WorkshopRepository,
        workshop_session::WorkshopSessionRepository,
    },
    error::AppError,
    model::workshop::{SaveWorkshopParam, Workshop, WorkshopSession},
};

pub struct WorkshopService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkshopService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active workshops, newest first.
    pub async fn get_active(&self) -> Result<Vec<Workshop>, AppError> {
        WorkshopRepository::new(self.db).get_all(true).await
    }

    /// Every workshop regardless of status, newest first.
    pub async fn get_all(&self) -> Result<Vec<Workshop>, AppError> {
        WorkshopRepository::new(self.db).get_all(false).await
    }

    /// Gets one active workshop.
    ///
    /// # Returns
    /// - `Ok(Workshop)` - Active workshop with sessions
    /// - `Err(AppError::NotFound)` - Missing or inactive
    pub async fn get_active_by_id(&self, id: i32) -> Result<Workshop, AppError> {
        WorkshopRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|workshop| workshop.is_active)
            .ok_or_else(workshop_not_found)
    }

    /// Looks up the session of an active workshop on `date`.
    ///
    /// # Returns
    /// - `Ok(Some(WorkshopSession))` - Session held that day
    /// - `Ok(None)` - Workshop has no session that day
    /// - `Err(AppError::NotFound)` - Workshop missing or inactive
    pub async fn get_session(
        &self,
        id: i32,
        date: NaiveDate,
    ) -> Result<Option<WorkshopSession>, AppError> {
        let workshop = self.get_active_by_id(id).await?;

        Ok(workshop.session(date).cloned())
    }

    /// Creates a workshop and its sessions.
    ///
    /// # Returns
    /// - `Ok(Workshop)` - Created workshop
    /// - `Err(AppError::BadRequest)` - Validation failed
    pub async fn create(&self, param: SaveWorkshopParam) -> Result<Workshop, AppError> {
        param.validate()?;

        let txn = self.db.begin().await?;
        let workshop = WorkshopRepository::new(&txn)
            .create(param, Utc::now())
            .await?;
        txn.commit().await?;

        tracing::info!("Created workshop {} ({})", workshop.id, workshop.title);

        Ok(workshop)
    }

    /// Replaces a workshop's fields and reconciles its sessions by date.
    ///
    /// # Returns
    /// - `Ok(Workshop)` - Updated workshop
    /// - `Err(AppError::BadRequest)` - Validation failed
    /// - `Err(AppError::NotFound)` - No workshop with that ID
    pub async fn update(&self, id: i32, param: SaveWorkshopParam) -> Result<Workshop, AppError> {
        param.validate()?;

        let txn = self.db.begin().await?;
        let workshop = WorkshopRepository::new(&txn)
            .update(id, param, Utc::now())
            .await?
            .ok_or_else(workshop_not_found)?;
        txn.commit().await?;

        tracing::info!("Updated workshop {}", workshop.id);

        Ok(workshop)
    }

    /// Deletes a workshop together with its sessions and registrations.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let registrations = RegistrationRepository::new(&txn)
            .delete_by_workshop(id)
            .await?;
        WorkshopSessionRepository::new(&txn)
            .delete_by_workshop(id)
            .await?;

        if !WorkshopRepository::new(&txn).delete(id).await? {
            return Err(workshop_not_found());
        }

        txn.commit().await?;

        tracing::info!(
            "Deleted workshop {} and {} registration(s)",
            id,
            registrations
        );

        Ok(())
    }

    /// Flips the active flag.
    ///
    /// # Returns
    /// - `Ok(Workshop)` - Workshop with its new status
    /// - `Err(AppError::NotFound)` - No workshop with that ID
    pub async fn toggle_status(&self, id: i32) -> Result<Workshop, AppError> {
        let repo = WorkshopRepository::new(self.db);

        let workshop = repo.find_by_id(id).await?.ok_or_else(workshop_not_found)?;

        let updated = repo
            .set_active(id, !workshop.is_active, Utc::now())
            .await?
            .ok_or_else(workshop_not_found)?;

        tracing::info!(
            "Workshop {} is now {}",
            updated.id,
            if updated.is_active { "active" } else { "inactive" }
        );

        Ok(updated)
    }
}

fn workshop_not_found() -> AppError {
    AppError::NotFound("Workshop not found".to_string())
}
