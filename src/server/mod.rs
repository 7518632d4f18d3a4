//! HTTP backend of the learning platform.
//!
//! Handles accounts, the curriculum (units, lessons, exercises, quizzes, daily
//! challenges), learner progress and gamification on top of Axum and SeaORM.
//!
//! # Layers
//!
//! - `controller/` - Axum handlers; authenticate with `AuthGuard`, turn DTOs into params,
//!   call a service and turn the result back into a DTO
//! - `service/` - Validation and rules: XP, streaks, achievements, scoring, unlocks
//! - `data/` - Repositories over SeaORM entities, returning domain models
//! - `model/` - Domain models and per-operation parameter types
//! - `middleware/` - Bearer token authentication guard
//! - `error/` - `AppError` and its mapping to `{"error": ...}` responses
//!
//! `config`, `state`, `startup` and `router` wire these together at launch; `util/`
//! holds input parsing and answer comparison.
//!
//! A request enters through `router`, reaches a controller, and from there only flows
//! downwards: controllers call services, services call repositories. Repositories never
//! return `AppError`; services map `DbErr` and missing rows into it.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
