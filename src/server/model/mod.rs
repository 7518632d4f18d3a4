//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data boundary and
//! controllers convert them into DTOs at the API boundary.

pub mod achievement;
pub mod challenge;
pub mod exercise;
pub mod leaderboard;
pub mod lesson;
pub mod progress;
pub mod quiz;
pub mod stats;
pub mod sutra;
pub mod unit;
pub mod user;
