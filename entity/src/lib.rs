//! SeaORM entity models for the learning platform schema.
//!
//! One module per table. Enumerated column types shared between tables live in
//! [`sea_orm_active_enums`].

pub mod prelude;

pub mod achievement;
pub mod challenge_attempt;
pub mod daily_challenge;
pub mod exercise;
pub mod leaderboard;
pub mod lesson;
pub mod lesson_sutra;
pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_question;
pub mod sea_orm_active_enums;
pub mod unit;
pub mod user;
pub mod user_achievement;
pub mod user_progress;
pub mod vedic_sutra;
