//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic.

pub mod achievement;
pub mod challenge;
pub mod exercise;
pub mod leaderboard;
pub mod lesson;
pub mod progress;
pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_question;
pub mod sutra;
pub mod unit;
pub mod user;

#[cfg(test)]
mod test;
