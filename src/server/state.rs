//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's
//! state extraction. Both fields are cheap to clone: the database connection is a
//! pool handle and the token service keeps its secret behind an `Arc`.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::TokenService;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
