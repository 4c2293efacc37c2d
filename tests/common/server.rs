//! Test server construction

use axum_test::TestServer;
use kanboard::backend::database::Database;
use kanboard::backend::server::create_app_with_database;

/// A router over a fresh in-memory database, plus a handle to that database
pub async fn create_test_server() -> (TestServer, Database) {
    let db = Database::in_memory()
        .await
        .expect("in-memory database should open");
    let server = TestServer::new(create_app_with_database(db.clone()))
        .expect("test server should start");
    (server, db)
}
