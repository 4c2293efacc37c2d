//! Reorder Writes
//!
//! Every move is one `UPDATE ... RETURNING` on the moved row. Siblings keep
//! their stored `order`, so two entities may share a value after a move and
//! concurrent moves resolve as last write wins.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::shared::models::{Card, List};

/// Set a list's `order` to the 1-based target position
pub async fn move_list(pool: &SqlitePool, list_id: Uuid, new_order: i32) -> BackendResult<List> {
    sqlx::query_as::<_, List>(
        r#"
        UPDATE lists
        SET "order" = ?
        WHERE id = ?
        RETURNING id, title, "order", board_id
        "#,
    )
    .bind(new_order)
    .bind(list_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| BackendError::not_found("List", list_id))
}

/// Re-parent a card and set its 1-based position in the destination list
///
/// Same-list and cross-list moves are the same write. A destination list
/// that does not exist fails with `ForeignKeyViolation`.
pub async fn move_card(
    pool: &SqlitePool,
    card_id: Uuid,
    dest_list_id: Uuid,
    dest_order: i32,
) -> BackendResult<Card> {
    sqlx::query_as::<_, Card>(
        r#"
        UPDATE cards
        SET list_id = ?, "order" = ?
        WHERE id = ?
        RETURNING id, title, description, due_date, "order", list_id
        "#,
    )
    .bind(dest_list_id)
    .bind(dest_order)
    .bind(card_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| BackendError::not_found("Card", card_id))
}
