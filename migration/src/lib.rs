pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_access_token_table;
mod m20260101_000003_create_workshop_table;
mod m20260101_000004_create_workshop_session_table;
mod m20260101_000005_create_workshop_registration_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_access_token_table::Migration),
            Box::new(m20260101_000003_create_workshop_table::Migration),
            Box::new(m20260101_000004_create_workshop_session_table::Migration),
            Box::new(m20260101_000005_create_workshop_registration_table::Migration),
        ]
    }
}
