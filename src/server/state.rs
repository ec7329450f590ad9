//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool and clones
/// share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Whether cloning an event copies its flights when the request does not say.
    pub clone_copies_flights: bool,

    /// Upper bound applied to the `per_page` listing parameter.
    pub max_page_size: u64,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `clone_copies_flights` - Default flight copy behaviour of the clone endpoint
    /// - `max_page_size` - Largest accepted page size
    pub fn new(db: DatabaseConnection, clone_copies_flights: bool, max_page_size: u64) -> Self {
        Self {
            db,
            clone_copies_flights,
            max_page_size,
        }
    }
}
