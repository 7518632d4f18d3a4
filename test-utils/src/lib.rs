//! Test support for the vedic-learn server.
//!
//! Tests build an in-memory SQLite database with only the tables they touch and seed
//! rows through factories:
//!
//! - `builder::TestBuilder` picks tables (`with_table`, `with_content_tables`,
//!   `with_learning_tables`) and builds a `context::TestContext`
//! - `factory` holds one builder per entity plus `create_*` shorthands
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn completes_a_lesson() -> Result<(), AppError> {
//!     let test = TestBuilder::new().with_learning_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let learner = factory::create_user(db).await?;
//!     let (_unit, lessons) = factory::create_unit_with_lessons(db, 3).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
