//! Domain & parameter models for workshops and their sessions
//!
//! The `Workshop` model carries its sessions and owns the seat arithmetic: availability
//! checks, reducing spots on admission and restoring them on cancellation. These methods
//! only change the in-memory model; persisting a change is a separate repository call.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::WorkshopLevel;

use crate::{
    model::workshop::{
        SaveWorkshopDto, WorkshopDto, WorkshopLevelDto, WorkshopSessionDto, WorkshopSummaryDto,
    },
    server::error::{internal::InternalError, AppError},
};

/// A dated occurrence of a workshop with its own seat counter.
///
/// Invariant: `0 <= spots <= allocation`.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkshopSession {
    pub id: i32,
    pub workshop_id: i32,
    pub date: NaiveDate,
    /// Seats still available.
    pub spots: i32,
    /// Seats the session was created with; upper bound for `spots`.
    pub allocation: i32,
}

impl WorkshopSession {
    pub fn from_entity(entity: entity::workshop_session::Model) -> Self {
        Self {
            id: entity.id,
            workshop_id: entity.workshop_id,
            date: entity.date,
            spots: entity.spots,
            allocation: entity.allocation,
        }
    }

    pub fn has_available_spots(&self) -> bool {
        self.spots > 0
    }

    /// Takes `count` seats if that many remain.
    ///
    /// # Returns
    /// - `true` - Seats taken
    /// - `false` - Not enough seats; nothing changed
    pub fn reduce_spots(&mut self, count: i32) -> bool {
        if count < 0 || self.spots < count {
            return false;
        }

        self.spots -= count;
        true
    }

    /// Gives back `count` seats unless that would exceed the allocation.
    ///
    /// # Returns
    /// - `true` - Seats restored
    /// - `false` - Restoring would exceed the allocation; nothing changed
    pub fn increase_spots(&mut self, count: i32) -> bool {
        if count < 0 || self.spots + count > self.allocation {
            return false;
        }

        self.spots += count;
        true
    }

    pub fn into_dto(self) -> WorkshopSessionDto {
        WorkshopSessionDto {
            date: self.date,
            spots: self.spots,
            allocation: self.allocation,
        }
    }
}

/// The workshop domain model with its sessions ordered by date.
#[derive(Debug, Clone, PartialEq)]
pub struct Workshop {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub duration: String,
    pub schedule: String,
    pub location: String,
    /// Currency formatted price, e.g. `"₹1,000"`.
    pub price: String,
    pub capacity: i32,
    pub level: WorkshopLevel,
    pub curriculum: Vec<String>,
    pub is_active: bool,
    pub sessions: Vec<WorkshopSession>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workshop {
    /// Converts a workshop row and its session rows to the domain model.
    ///
    /// # Returns
    /// - `Ok(Workshop)` - Converted model with sessions sorted by date
    /// - `Err(InternalError::InvalidCurriculum)` - Stored curriculum is not a list of strings
    pub fn from_entity(
        entity: entity::workshop::Model,
        sessions: Vec<entity::workshop_session::Model>,
    ) -> Result<Self, InternalError> {
        let curriculum = serde_json::from_value(entity.curriculum).map_err(|source| {
            InternalError::InvalidCurriculum {
                workshop_id: entity.id,
                source,
            }
        })?;

        let mut sessions: Vec<WorkshopSession> = sessions
            .into_iter()
            .map(WorkshopSession::from_entity)
            .collect();
        sessions.sort_by_key(|s| s.date);

        Ok(Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            image: entity.image,
            duration: entity.duration,
            schedule: entity.schedule,
            location: entity.location,
            price: entity.price,
            capacity: entity.capacity,
            level: entity.level,
            curriculum,
            is_active: entity.is_active,
            sessions,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Finds the session held on exactly `date`.
    pub fn session(&self, date: NaiveDate) -> Option<&WorkshopSession> {
        self.sessions.iter().find(|s| s.date == date)
    }

    fn session_mut(&mut self, date: NaiveDate) -> Option<&mut WorkshopSession> {
        self.sessions.iter_mut().find(|s| s.date == date)
    }

    /// Whether a session exists on `date` with at least one seat left.
    pub fn has_available_spots(&self, date: NaiveDate) -> bool {
        self.session(date)
            .is_some_and(WorkshopSession::has_available_spots)
    }

    /// Takes `count` seats from the session on `date`.
    ///
    /// Fails without partial change when the session is missing or short of seats.
    pub fn reduce_spots(&mut self, date: NaiveDate, count: i32) -> bool {
        self.session_mut(date)
            .is_some_and(|session| session.reduce_spots(count))
    }

    /// Restores `count` seats to the session on `date`, capped at its allocation.
    pub fn increase_spots(&mut self, date: NaiveDate, count: i32) -> bool {
        self.session_mut(date)
            .is_some_and(|session| session.increase_spots(count))
    }

    pub fn into_dto(self) -> WorkshopDto {
        WorkshopDto {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.image,
            duration: self.duration,
            schedule: self.schedule,
            location: self.location,
            price: self.price,
            capacity: self.capacity,
            level: self.level.into(),
            curriculum: self.curriculum,
            is_active: self.is_active,
            sessions: self.sessions.into_iter().map(|s| s.into_dto()).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Workshop fields shown alongside registrations.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkshopSummary {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub duration: String,
    pub schedule: String,
    pub location: String,
    pub price: String,
}

impl WorkshopSummary {
    pub fn from_entity(entity: entity::workshop::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            image: entity.image,
            duration: entity.duration,
            schedule: entity.schedule,
            location: entity.location,
            price: entity.price,
        }
    }

    pub fn into_dto(self) -> WorkshopSummaryDto {
        WorkshopSummaryDto {
            id: self.id,
            title: self.title,
            image: self.image,
            duration: self.duration,
            schedule: self.schedule,
            location: self.location,
            price: self.price,
        }
    }
}

/// Requested session of a workshop being created or updated.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionParam {
    pub date: NaiveDate,
    /// Seats to allocate; the workshop capacity when `None`.
    pub spots: Option<i32>,
}

/// Parameters for creating or updating a workshop
#[derive(Debug, Clone, PartialEq)]
pub struct SaveWorkshopParam {
    pub title: String,
    pub description: String,
    pub image: String,
    pub duration: String,
    pub schedule: String,
    pub location: String,
    pub price: String,
    pub capacity: i32,
    pub level: WorkshopLevel,
    pub curriculum: Vec<String>,
    pub is_active: bool,
    pub sessions: Vec<SessionParam>,
}

impl SaveWorkshopParam {
    /// Checks required fields and seat numbers.
    ///
    /// # Returns
    /// - `Ok(())` - Parameters are valid
    /// - `Err(AppError::BadRequest)` - First violation found, as a client-facing message
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("duration", &self.duration),
            ("schedule", &self.schedule),
            ("price", &self.price),
        ];

        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AppError::BadRequest(format!("Workshop {} is required", name)));
        }

        if self.capacity < 1 {
            return Err(AppError::BadRequest(
                "Workshop capacity must be at least 1".to_string(),
            ));
        }

        for (index, session) in self.sessions.iter().enumerate() {
            if session.spots.is_some_and(|spots| spots < 0) {
                return Err(AppError::BadRequest(format!(
                    "Spots for session {} cannot be negative",
                    session.date
                )));
            }

            if self.sessions[..index].iter().any(|s| s.date == session.date) {
                return Err(AppError::BadRequest(format!(
                    "Duplicate session date {}",
                    session.date
                )));
            }
        }

        Ok(())
    }

    /// Resolves every session to `(date, allocation)`, defaulting to the capacity.
    pub fn session_allocations(&self) -> Vec<(NaiveDate, i32)> {
        self.sessions
            .iter()
            .map(|s| (s.date, s.spots.unwrap_or(self.capacity)))
            .collect()
    }
}

impl From<SaveWorkshopDto> for SaveWorkshopParam {
    fn from(dto: SaveWorkshopDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            image: dto.image,
            duration: dto.duration,
            schedule: dto.schedule,
            location: dto.location,
            price: dto.price,
            capacity: dto.capacity,
            level: dto.level.into(),
            curriculum: dto.curriculum,
            is_active: dto.is_active,
            sessions: dto
                .sessions
                .into_iter()
                .map(|s| SessionParam {
                    date: s.date,
                    spots: s.spots,
                })
                .collect(),
        }
    }
}

impl From<WorkshopLevelDto> for WorkshopLevel {
    fn from(level: WorkshopLevelDto) -> Self {
        match level {
            WorkshopLevelDto::Beginner => Self::Beginner,
            WorkshopLevelDto::Intermediate => Self::Intermediate,
            WorkshopLevelDto::Advanced => Self::Advanced,
            WorkshopLevelDto::AllLevels => Self::AllLevels,
        }
    }
}

impl From<WorkshopLevel> for WorkshopLevelDto {
    fn from(level: WorkshopLevel) -> Self {
        match level {
            WorkshopLevel::Beginner => Self::Beginner,
            WorkshopLevel::Intermediate => Self::Intermediate,
            WorkshopLevel::Advanced => Self::Advanced,
            WorkshopLevel::AllLevels => Self::AllLevels,
        }
    }
}
