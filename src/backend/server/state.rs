/**
 * Application State
 *
 * `AppState` is the router state. Handlers extract only the piece they need
 * through the `FromRef` implementations below, so most of them take
 * `State<Database>` directly.
 */

use axum::extract::FromRef;

use crate::backend::database::Database;

/// Central state container shared by every request
#[derive(Debug, Clone)]
pub struct AppState {
    /// Persistence client; the pool inside is the only shared resource
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
