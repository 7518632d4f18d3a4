use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()`, then call `build()` to create the
/// in-memory database and its tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Lesson, Unit};
///
/// let test = TestBuilder::new()
///     .with_table(Unit)
///     .with_table(Lesson)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the content tables: units, sutras, lessons and everything that hangs off lessons.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_content_tables(self) -> Self {
        self.with_table(Unit)
            .with_table(VedicSutra)
            .with_table(Lesson)
            .with_table(LessonSutra)
            .with_table(Exercise)
            .with_table(Quiz)
            .with_table(QuizQuestion)
            .with_table(DailyChallenge)
    }

    /// Adds every table of the learning platform in dependency order.
    ///
    /// Use this for service and controller tests that touch users, content, progress
    /// and achievements together.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_learning_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_learning_tables(self) -> Self {
        self.with_table(User)
            .with_content_tables()
            .with_table(QuizAttempt)
            .with_table(UserProgress)
            .with_table(Achievement)
            .with_table(UserAchievement)
            .with_table(Leaderboard)
            .with_table(ChallengeAttempt)
    }

    /// Builds the test context and creates all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
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
