use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, AccessToken};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(AccessToken)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Tables should
    /// be added in dependency order (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut stmt = schema.create_table_from_entity(entity);
        // Convenience groups overlap (e.g. `User`), so repeated tables are skipped.
        stmt.if_not_exists();
        self.tables.push(stmt);
        self
    }

    /// Adds the tables required for bearer token authentication.
    ///
    /// Adds `User` and `AccessToken` in dependency order.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(AccessToken)
    }

    /// Adds the workshop catalog tables.
    ///
    /// Adds `Workshop` and `WorkshopSession` in dependency order.
    pub fn with_workshop_tables(self) -> Self {
        self.with_table(Workshop).with_table(WorkshopSession)
    }

    /// Adds every table the registration flow touches.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Workshop
    /// - WorkshopSession
    /// - WorkshopRegistration
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_registration_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_registration_tables(self) -> Self {
        self.with_table(User)
            .with_workshop_tables()
            .with_table(WorkshopRegistration)
    }

    /// Adds every table of the schema.
    ///
    /// Used by service tests that authenticate a user and register them for a workshop.
    pub fn with_all_tables(self) -> Self {
        self.with_auth_tables().with_registration_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
