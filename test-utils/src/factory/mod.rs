//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` function for
//! quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(db).await?;
//! let unit = factory::unit::UnitFactory::new(db).order_index(2).build().await?;
//! let lesson = factory::lesson::LessonFactory::new(db).unit_id(unit.id).build().await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Learner and admin accounts
//! - `unit` - Curriculum units
//! - `lesson` - Lessons, optionally attached to a unit
//! - `exercise` - Practice questions
//! - `quiz` - Quizzes and their questions
//! - `achievement` - Achievement catalogue entries
//! - `daily_challenge` - Daily challenges
//! - `vedic_sutra` - Sutra reference entries
//! - `helpers` - ID generation and multi-entity shortcuts

pub mod achievement;
pub mod daily_challenge;
pub mod exercise;
pub mod helpers;
pub mod lesson;
pub mod quiz;
pub mod unit;
pub mod user;
pub mod vedic_sutra;

pub use achievement::create_achievement;
pub use daily_challenge::create_daily_challenge;
pub use exercise::create_exercise;
pub use helpers::create_unit_with_lessons;
pub use lesson::create_lesson;
pub use quiz::{create_quiz, create_quiz_question};
pub use unit::create_unit;
pub use user::{create_admin, create_user};
pub use vedic_sutra::create_sutra;
