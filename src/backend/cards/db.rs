//! Database operations for cards

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::shared::models::Card;
use crate::shared::ordering::next_order;
use crate::shared::requests::UpdateCardRequest;

const CARD_COLUMNS: &str = r#"id, title, description, due_date, "order", list_id"#;

/// Number of cards currently in a list
pub async fn count_cards(pool: &SqlitePool, list_id: Uuid) -> BackendResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cards WHERE list_id = ?")
        .bind(list_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Append a card to a list with `order = count + 1`
pub async fn create_card(pool: &SqlitePool, list_id: Uuid, title: &str) -> BackendResult<Card> {
    let count = count_cards(pool, list_id).await?;
    let card = Card::new(list_id, title, next_order(count));

    sqlx::query(
        r#"
        INSERT INTO cards (id, title, description, due_date, "order", list_id)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(card.id)
    .bind(&card.title)
    .bind(&card.description)
    .bind(card.due_date)
    .bind(card.order)
    .bind(card.list_id)
    .execute(pool)
    .await?;

    Ok(card)
}

pub async fn get_card(pool: &SqlitePool, card_id: Uuid) -> BackendResult<Option<Card>> {
    let card = sqlx::query_as::<_, Card>(&format!("SELECT {CARD_COLUMNS} FROM cards WHERE id = ?"))
        .bind(card_id)
        .fetch_optional(pool)
        .await?;
    Ok(card)
}

/// Cards of one list in display order
pub async fn list_cards(pool: &SqlitePool, list_id: Uuid) -> BackendResult<Vec<Card>> {
    let cards = sqlx::query_as::<_, Card>(&format!(
        r#"SELECT {CARD_COLUMNS} FROM cards WHERE list_id = ? ORDER BY "order" ASC"#
    ))
    .bind(list_id)
    .fetch_all(pool)
    .await?;
    Ok(cards)
}

/// Apply a partial update; only the fields present in `update` are written
pub async fn update_card(
    pool: &SqlitePool,
    card_id: Uuid,
    update: &UpdateCardRequest,
) -> BackendResult<Card> {
    if update.is_empty() {
        return get_card(pool, card_id)
            .await?
            .ok_or_else(|| BackendError::not_found("Card", card_id));
    }

    let mut builder = QueryBuilder::<Sqlite>::new("UPDATE cards SET ");
    let mut assignments = builder.separated(", ");
    if let Some(title) = &update.title {
        assignments.push("title = ");
        assignments.push_bind_unseparated(title.clone());
    }
    if let Some(description) = &update.description {
        assignments.push("description = ");
        assignments.push_bind_unseparated(description.clone());
    }
    if let Some(due_date) = update.due_date {
        assignments.push("due_date = ");
        assignments.push_bind_unseparated(due_date);
    }
    builder.push(" WHERE id = ");
    builder.push_bind(card_id);
    builder.push(" RETURNING ");
    builder.push(CARD_COLUMNS);

    builder
        .build_query_as::<Card>()
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| BackendError::not_found("Card", card_id))
}

/// Delete a card; labels, members and checklist items cascade
pub async fn delete_card(pool: &SqlitePool, card_id: Uuid) -> BackendResult<()> {
    let result = sqlx::query("DELETE FROM cards WHERE id = ?")
        .bind(card_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(BackendError::not_found("Card", card_id));
    }
    Ok(())
}
