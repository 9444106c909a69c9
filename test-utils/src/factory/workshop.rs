//! Workshop factory for creating test workshop entities.

use chrono::Utc;
use entity::sea_orm_active_enums::WorkshopLevel;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test workshops with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let workshop = WorkshopFactory::new(&db)
///     .price("₹2,500")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct WorkshopFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    price: String,
    capacity: i32,
    is_active: bool,
}

impl<'a> WorkshopFactory<'a> {
    /// Creates a new WorkshopFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Workshop {n}"`
    /// - price: `"₹1000"`
    /// - capacity: `10`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Workshop {}", next_id()),
            price: "₹1000".to_string(),
            capacity: 10,
            is_active: true,
        }
    }

    /// Sets the workshop title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the currency-formatted price.
    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    /// Sets the nominal capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets whether the workshop is publicly listed and open for registration.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the workshop entity into the database.
    pub async fn build(self) -> Result<entity::workshop::Model, DbErr> {
        let now = Utc::now();
        entity::workshop::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("Hands-on drone assembly and flight".to_string()),
            image: ActiveValue::Set("https://example.com/workshop.jpg".to_string()),
            duration: ActiveValue::Set("2 days".to_string()),
            schedule: ActiveValue::Set("10:00 - 17:00".to_string()),
            location: ActiveValue::Set("Training Center".to_string()),
            price: ActiveValue::Set(self.price),
            capacity: ActiveValue::Set(self.capacity),
            level: ActiveValue::Set(WorkshopLevel::Beginner),
            curriculum: ActiveValue::Set(serde_json::json!(["Safety", "Assembly", "Flight"])),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active workshop with default values and no sessions.
pub async fn create_workshop(db: &DatabaseConnection) -> Result<entity::workshop::Model, DbErr> {
    WorkshopFactory::new(db).build().await
}
