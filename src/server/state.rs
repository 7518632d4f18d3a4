//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::TokenService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// Lowercased usernames that register as admins.
    pub admin_usernames: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService, admin_usernames: Vec<String>) -> Self {
        Self {
            db,
            tokens,
            admin_usernames: Arc::new(admin_usernames),
        }
    }
}
