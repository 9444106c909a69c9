//! Shared helper utilities for factory methods.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an active workshop with exactly one session.
///
/// The session's allocation and remaining spots both equal `spots`.
///
/// # Arguments
/// - `db` - Database connection
/// - `date` - Date of the session
/// - `spots` - Seats allocated to the session
///
/// # Returns
/// - `Ok((workshop, session))` - Created workshop and its session
/// - `Err(DbErr)` - Database error during creation
pub async fn create_workshop_with_session(
    db: &DatabaseConnection,
    date: NaiveDate,
    spots: i32,
) -> Result<(entity::workshop::Model, entity::workshop_session::Model), DbErr> {
    let workshop = crate::factory::workshop::create_workshop(db).await?;
    let session = crate::factory::workshop_session::WorkshopSessionFactory::new(db, workshop.id)
        .date(date)
        .spots(spots)
        .build()
        .await?;

    Ok((workshop, session))
}

/// Creates a user, a workshop with one session and a registration of that user.
///
/// The session keeps `spots` remaining; the registration does not consume one, so
/// callers choose whether the counter should reflect it.
///
/// # Returns
/// - `Ok((user, workshop, session, registration))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_registration_with_dependencies(
    db: &DatabaseConnection,
    date: NaiveDate,
    spots: i32,
) -> Result<
    (
        entity::user::Model,
        entity::workshop::Model,
        entity::workshop_session::Model,
        entity::workshop_registration::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (workshop, session) = create_workshop_with_session(db, date, spots).await?;
    let registration =
        crate::factory::registration::create_registration(db, workshop.id, user.id, date).await?;

    Ok((user, workshop, session, registration))
}
