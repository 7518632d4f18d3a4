//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! validate requests against stored state, award XP and achievements, and work with
//! domain models rather than DTOs or entity models.

pub mod account;
pub mod achievement;
pub mod admin;
pub mod auth;
pub mod challenge;
pub mod exercise;
pub mod gamification;
pub mod leaderboard;
pub mod lesson;
pub mod progress;
pub mod quiz;
pub mod sutra;
pub mod unit;
