//! Database operations for labels

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::shared::models::Label;

/// Create a label on a board
pub async fn create_label(
    pool: &SqlitePool,
    board_id: Uuid,
    name: &str,
    color: &str,
) -> BackendResult<Label> {
    let label = Label::new(board_id, name, color);

    sqlx::query(
        r#"
        INSERT INTO labels (id, name, color, board_id)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(label.id)
    .bind(&label.name)
    .bind(&label.color)
    .bind(label.board_id)
    .execute(pool)
    .await
    .map_err(|e| match BackendError::from(e) {
        BackendError::ForeignKeyViolation(_) => BackendError::not_found("Board", board_id),
        other => other,
    })?;

    Ok(label)
}
