//! Database operations for boards

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::shared::models::Board;

/// All boards, newest first
pub async fn list_boards(pool: &SqlitePool) -> BackendResult<Vec<Board>> {
    let boards = sqlx::query_as::<_, Board>(
        r#"
        SELECT id, title, created_at
        FROM boards
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(boards)
}

/// Insert a board; the title must already be validated
pub async fn create_board(pool: &SqlitePool, title: &str) -> BackendResult<Board> {
    let board = Board::new(title);

    sqlx::query(
        r#"
        INSERT INTO boards (id, title, created_at)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(board.id)
    .bind(&board.title)
    .bind(board.created_at)
    .execute(pool)
    .await?;

    Ok(board)
}

pub async fn get_board(pool: &SqlitePool, board_id: Uuid) -> BackendResult<Option<Board>> {
    let board = sqlx::query_as::<_, Board>(
        r#"
        SELECT id, title, created_at
        FROM boards
        WHERE id = ?
        "#,
    )
    .bind(board_id)
    .fetch_optional(pool)
    .await?;

    Ok(board)
}

/// Delete a board; lists, cards, labels and associations cascade
pub async fn delete_board(pool: &SqlitePool, board_id: Uuid) -> BackendResult<()> {
    let result = sqlx::query("DELETE FROM boards WHERE id = ?")
        .bind(board_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(BackendError::not_found("Board", board_id));
    }
    Ok(())
}

pub async fn count_boards(pool: &SqlitePool) -> BackendResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM boards")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
