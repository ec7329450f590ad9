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
/// use entity::prelude::{User, Module};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Module)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements, executed after every table exists.
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
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
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

    /// Adds a raw index statement to the test database schema.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the tables needed by event store operations.
    ///
    /// Adds in dependency order:
    /// - User
    /// - Module
    /// - CalendarEvent
    /// - EventModule
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_event_tables(self) -> Self {
        self.with_table(User)
            .with_table(Module)
            .with_table(CalendarEvent)
            .with_table(EventModule)
    }

    /// Adds every roster table together with the uniqueness indexes.
    ///
    /// This extends `with_event_tables()` with votes, choices, flights and slots, and
    /// registers the same unique indexes the migrations create:
    /// - `event_vote (event_id, user_id)`
    /// - `event_choice (event_id, user_id, module_id)`
    /// - `slot (event_id, user_id)`
    /// - `slot (flight_id, position)`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_roster_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_roster_tables(self) -> Self {
        self.with_event_tables()
            .with_table(EventVote)
            .with_table(EventChoice)
            .with_table(Flight)
            .with_table(Slot)
            .with_index(
                Index::create()
                    .name("idx_event_vote_event_user")
                    .table(EventVote)
                    .col(entity::event_vote::Column::EventId)
                    .col(entity::event_vote::Column::UserId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_event_choice_event_user_module")
                    .table(EventChoice)
                    .col(entity::event_choice::Column::EventId)
                    .col(entity::event_choice::Column::UserId)
                    .col(entity::event_choice::Column::ModuleId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_slot_event_user")
                    .table(Slot)
                    .col(entity::slot::Column::EventId)
                    .col(entity::slot::Column::UserId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_slot_flight_position")
                    .table(Slot)
                    .col(entity::slot::Column::FlightId)
                    .col(entity::slot::Column::Position)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements in the order they were added, then the CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_schema(self.tables, self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
