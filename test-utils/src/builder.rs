use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

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
/// use entity::prelude::{User, ReferralCode};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(ReferralCode)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the unique index on `pilots(stage_id, number)`.
    ///
    /// Requires the `Pilot` table to be part of the schema.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_pilot_number_index(mut self) -> Self {
        self.indexes.push(
            Index::create()
                .unique()
                .name("idx_pilot_stage_number_unique")
                .table(Pilot)
                .col(entity::pilot::Column::StageId)
                .col(entity::pilot::Column::Number)
                .to_owned(),
        );
        self
    }

    /// Adds every table of the registry schema in dependency order.
    ///
    /// This convenience method adds:
    /// - User
    /// - Championship
    /// - Stage
    /// - Judge
    /// - Pilot (with the per-stage number index)
    /// - FileRef
    /// - ReferralCode
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_registry_tables(self) -> Self {
        self.with_table(User)
            .with_table(Championship)
            .with_table(Stage)
            .with_table(Judge)
            .with_table(Pilot)
            .with_table(FileRef)
            .with_table(ReferralCode)
            .with_pilot_number_index()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements followed by all CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
