//! Workshop data repository for database operations
//!
//! Provides the `WorkshopRepository` for the workshop catalog. Workshops are always
//! returned with their sessions attached; the seat counters themselves are changed
//! through `WorkshopSessionRepository`.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::workshop_session::WorkshopSessionRepository,
    error::AppError,
    model::workshop::{SaveWorkshopParam, Workshop},
};

/// Repository providing database operations for workshop management.
pub struct WorkshopRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WorkshopRepository<'a, C> {
    /// Creates a new WorkshopRepository instance
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a workshop by ID, active or not
    ///
    /// # Returns
    /// - `Ok(Some(Workshop))` - Workshop with its sessions
    /// - `Ok(None)` - No workshop with that ID
    /// - `Err(AppError)` - Database error or malformed stored curriculum
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Workshop>, AppError> {
        let Some(entity) = entity::prelude::Workshop::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let sessions = entity::prelude::WorkshopSession::find()
            .filter(entity::workshop_session::Column::WorkshopId.eq(id))
            .all(self.db)
            .await?;

        Ok(Some(Workshop::from_entity(entity, sessions)?))
    }

    /// Gets workshops newest first
    ///
    /// # Arguments
    /// - `active_only` - Whether to leave out inactive workshops
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<Workshop>, AppError> {
        let mut query = entity::prelude::Workshop::find();

        if active_only {
            query = query.filter(entity::workshop::Column::IsActive.eq(true));
        }

        let entities = query
            .order_by_desc(entity::workshop::Column::CreatedAt)
            .order_by_desc(entity::workshop::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = entities.iter().map(|w| w.id).collect();
        let mut sessions = WorkshopSessionRepository::new(self.db)
            .get_by_workshop_ids(&ids)
            .await?;

        let mut workshops = Vec::with_capacity(entities.len());
        for entity in entities {
            let workshop_sessions = sessions.remove(&entity.id).unwrap_or_default();
            workshops.push(Workshop::from_entity(entity, workshop_sessions)?);
        }

        Ok(workshops)
    }

    /// Creates a workshop and its sessions
    ///
    /// Each session starts with all of its allocation free.
    ///
    /// # Arguments
    /// - `param` - Validated workshop fields and sessions
    /// - `now` - Timestamp used for `created_at` and `updated_at`
    pub async fn create(
        &self,
        param: SaveWorkshopParam,
        now: DateTime<Utc>,
    ) -> Result<Workshop, AppError> {
        let allocations = param.session_allocations();

        let entity = entity::workshop::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            image: ActiveValue::Set(param.image),
            duration: ActiveValue::Set(param.duration),
            schedule: ActiveValue::Set(param.schedule),
            location: ActiveValue::Set(param.location),
            price: ActiveValue::Set(param.price),
            capacity: ActiveValue::Set(param.capacity),
            level: ActiveValue::Set(param.level),
            curriculum: ActiveValue::Set(serde_json::json!(param.curriculum)),
            is_active: ActiveValue::Set(param.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        WorkshopSessionRepository::new(self.db)
            .reconcile(entity.id, &allocations)
            .await?;

        self.find_by_id(entity.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Workshop not found".to_string()))
    }

    /// Replaces the fields of a workshop and reconciles its sessions by date
    ///
    /// # Returns
    /// - `Ok(Some(Workshop))` - Updated workshop
    /// - `Ok(None)` - No workshop with that ID
    pub async fn update(
        &self,
        id: i32,
        param: SaveWorkshopParam,
        now: DateTime<Utc>,
    ) -> Result<Option<Workshop>, AppError> {
        let Some(existing) = entity::prelude::Workshop::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let allocations = param.session_allocations();

        let mut active: entity::workshop::ActiveModel = existing.into();
        active.title = ActiveValue::Set(param.title);
        active.description = ActiveValue::Set(param.description);
        active.image = ActiveValue::Set(param.image);
        active.duration = ActiveValue::Set(param.duration);
        active.schedule = ActiveValue::Set(param.schedule);
        active.location = ActiveValue::Set(param.location);
        active.price = ActiveValue::Set(param.price);
        active.capacity = ActiveValue::Set(param.capacity);
        active.level = ActiveValue::Set(param.level);
        active.curriculum = ActiveValue::Set(serde_json::json!(param.curriculum));
        active.is_active = ActiveValue::Set(param.is_active);
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        WorkshopSessionRepository::new(self.db)
            .reconcile(id, &allocations)
            .await?;

        self.find_by_id(id).await
    }

    /// Sets the active flag
    ///
    /// # Returns
    /// - `Ok(Some(Workshop))` - Updated workshop
    /// - `Ok(None)` - No workshop with that ID
    pub async fn set_active(
        &self,
        id: i32,
        is_active: bool,
        now: DateTime<Utc>,
    ) -> Result<Option<Workshop>, AppError> {
        let Some(existing) = entity::prelude::Workshop::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::workshop::ActiveModel = existing.into();
        active.is_active = ActiveValue::Set(is_active);
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    /// Deletes the workshop row
    ///
    /// Sessions and registrations must be removed first; see `WorkshopService::delete`.
    ///
    /// # Returns
    /// - `Ok(true)` - Workshop deleted
    /// - `Ok(false)` - No workshop with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Workshop::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
