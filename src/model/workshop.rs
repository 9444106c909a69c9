use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ToSchema)]
pub enum WorkshopLevelDto {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    #[serde(rename = "All Levels")]
    AllLevels,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopSessionDto {
    /// Calendar date of the session, `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Seats still available.
    pub spots: i32,
    /// Seats originally allocated.
    pub allocation: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub duration: String,
    pub schedule: String,
    pub location: String,
    /// Currency formatted, e.g. `"₹1,000"`.
    pub price: String,
    pub capacity: i32,
    pub level: WorkshopLevelDto,
    pub curriculum: Vec<String>,
    pub is_active: bool,
    pub sessions: Vec<WorkshopSessionDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Workshop fields embedded in registration listings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopSummaryDto {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub duration: String,
    pub schedule: String,
    pub location: String,
    pub price: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionInputDto {
    pub date: NaiveDate,
    /// Defaults to the workshop capacity when omitted.
    pub spots: Option<i32>,
}

/// Request body for creating or updating a workshop.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveWorkshopDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub duration: String,
    pub schedule: String,
    #[serde(default)]
    pub location: String,
    pub price: String,
    pub capacity: i32,
    #[serde(default)]
    pub level: WorkshopLevelDto,
    #[serde(default)]
    pub curriculum: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub sessions: Vec<SessionInputDto>,
}

fn default_active() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AvailabilityDto {
    pub available: bool,
    pub spots: i32,
}
