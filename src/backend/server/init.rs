/**
 * Server Initialization
 *
 * Builds the application router from a configuration or from an already
 * open database.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and apply migrations
 * 2. Seed the demo board when requested and the database is empty
 * 3. Create the router with all routes and middleware
 */

use axum::Router;

use crate::backend::database::Database;
use crate::backend::error::BackendResult;
use crate::backend::routes::router::create_router;
use crate::backend::seed::seed_if_empty;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create the application for `config`
pub async fn create_app(config: &ServerConfig) -> BackendResult<Router<()>> {
    tracing::info!("Initializing kanban backend");

    let db = load_database(config).await?;

    if config.seed_demo_data {
        if let Some(board_id) = seed_if_empty(&db).await? {
            tracing::info!("Demo board {} created", board_id);
        }
    }

    Ok(create_app_with_database(db))
}

/// Create the application around an existing database handle
///
/// Integration tests use this with [`Database::in_memory`].
pub fn create_app_with_database(db: Database) -> Router<()> {
    let app = create_router(AppState::new(db));
    tracing::debug!("Router configured");
    app
}
