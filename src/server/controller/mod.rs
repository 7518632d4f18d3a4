//! HTTP handlers.
//!
//! Each handler checks access through `AuthGuard`, converts the request DTO into
//! operation parameters, calls a service and converts the domain result back into a DTO.

pub mod achievement;
pub mod admin;
pub mod auth;
pub mod challenge;
pub mod exercise;
pub mod leaderboard;
pub mod lesson;
pub mod quiz;
pub mod sutra;
pub mod unit;
pub mod user;
