//! Request and response shapes exchanged over the HTTP API.

pub mod achievement;
pub mod admin;
pub mod api;
pub mod auth;
pub mod challenge;
pub mod exercise;
pub mod leaderboard;
pub mod lesson;
pub mod progress;
pub mod quiz;
pub mod sutra;
pub mod unit;
pub mod user;
