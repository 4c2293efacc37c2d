//! Demo Data
//!
//! Populates an empty database with one board so a fresh install has
//! something to drag around.

use uuid::Uuid;

use crate::backend::boards::db::{count_boards, create_board};
use crate::backend::card_details::db::{attach_label, attach_member};
use crate::backend::cards::db::{create_card, update_card};
use crate::backend::database::Database;
use crate::backend::error::BackendResult;
use crate::backend::labels::db::create_label;
use crate::backend::lists::db::create_list;
use crate::backend::members::db::create_member;
use crate::shared::requests::UpdateCardRequest;

/// Insert the demo board and return its id
pub async fn seed_demo_board(db: &Database) -> BackendResult<Uuid> {
    let pool = db.pool();

    let harshit = create_member(pool, "Harshit", "harshit@example.com").await?;
    let rahul = create_member(pool, "Rahul", "rahul@example.com").await?;

    let board = create_board(pool, "Project Alpha").await?;
    let urgent = create_label(pool, board.id, "Urgent", "red").await?;
    let feature = create_label(pool, board.id, "Feature", "blue").await?;

    let todo = create_list(pool, board.id, "Todo").await?;
    create_list(pool, board.id, "Doing").await?;
    create_list(pool, board.id, "Done").await?;

    let setup = create_card(pool, todo.id, "Setup project").await?;
    update_card(
        pool,
        setup.id,
        &UpdateCardRequest {
            description: Some(Some("Initialize the repository and CI".to_string())),
            ..UpdateCardRequest::default()
        },
    )
    .await?;
    attach_label(pool, setup.id, urgent.id).await?;
    attach_member(pool, setup.id, harshit.id).await?;

    let schema = create_card(pool, todo.id, "Design database schema").await?;
    attach_label(pool, schema.id, feature.id).await?;
    attach_member(pool, schema.id, rahul.id).await?;

    tracing::info!("Seeded demo board {}", board.id);
    Ok(board.id)
}

/// Seed only when no board exists yet; returns the new board id if one was created
pub async fn seed_if_empty(db: &Database) -> BackendResult<Option<Uuid>> {
    if count_boards(db.pool()).await? > 0 {
        tracing::debug!("Boards already present, skipping demo data");
        return Ok(None);
    }
    seed_demo_board(db).await.map(Some)
}
