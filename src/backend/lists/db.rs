//! Database operations for lists

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::shared::models::List;
use crate::shared::ordering::next_order;

/// Number of lists currently on a board
pub async fn count_lists(pool: &SqlitePool, board_id: Uuid) -> BackendResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lists WHERE board_id = ?")
        .bind(board_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Append a list to a board with `order = count + 1`
///
/// A missing board surfaces as a foreign key violation.
pub async fn create_list(pool: &SqlitePool, board_id: Uuid, title: &str) -> BackendResult<List> {
    let count = count_lists(pool, board_id).await?;
    let list = List::new(board_id, title, next_order(count));

    sqlx::query(
        r#"
        INSERT INTO lists (id, title, "order", board_id)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(list.id)
    .bind(&list.title)
    .bind(list.order)
    .bind(list.board_id)
    .execute(pool)
    .await?;

    Ok(list)
}

pub async fn get_list(pool: &SqlitePool, list_id: Uuid) -> BackendResult<Option<List>> {
    let list = sqlx::query_as::<_, List>(
        r#"
        SELECT id, title, "order", board_id
        FROM lists
        WHERE id = ?
        "#,
    )
    .bind(list_id)
    .fetch_optional(pool)
    .await?;

    Ok(list)
}

pub async fn rename_list(pool: &SqlitePool, list_id: Uuid, title: &str) -> BackendResult<List> {
    sqlx::query_as::<_, List>(
        r#"
        UPDATE lists
        SET title = ?
        WHERE id = ?
        RETURNING id, title, "order", board_id
        "#,
    )
    .bind(title)
    .bind(list_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| BackendError::not_found("List", list_id))
}

/// Delete a list; its cards and their details cascade
pub async fn delete_list(pool: &SqlitePool, list_id: Uuid) -> BackendResult<()> {
    let result = sqlx::query("DELETE FROM lists WHERE id = ?")
        .bind(list_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(BackendError::not_found("List", list_id));
    }
    Ok(())
}
