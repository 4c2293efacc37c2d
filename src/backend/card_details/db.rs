//! Database operations for card labels, members and checklist items

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::shared::models::{CardLabel, CardMember, ChecklistItem};
use crate::shared::ordering::next_order;

/// Link a label to a card
///
/// Linking the same pair twice fails with `UniqueViolation`.
pub async fn attach_label(
    pool: &SqlitePool,
    card_id: Uuid,
    label_id: Uuid,
) -> BackendResult<CardLabel> {
    sqlx::query("INSERT INTO card_labels (card_id, label_id) VALUES (?, ?)")
        .bind(card_id)
        .bind(label_id)
        .execute(pool)
        .await?;

    Ok(CardLabel { card_id, label_id })
}

pub async fn detach_label(pool: &SqlitePool, card_id: Uuid, label_id: Uuid) -> BackendResult<()> {
    let result = sqlx::query("DELETE FROM card_labels WHERE card_id = ? AND label_id = ?")
        .bind(card_id)
        .bind(label_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(BackendError::not_found("Label", label_id));
    }
    Ok(())
}

/// Labels linked to a card
pub async fn card_labels(pool: &SqlitePool, card_id: Uuid) -> BackendResult<Vec<CardLabel>> {
    let links = sqlx::query_as::<_, CardLabel>(
        "SELECT card_id, label_id FROM card_labels WHERE card_id = ?",
    )
    .bind(card_id)
    .fetch_all(pool)
    .await?;
    Ok(links)
}

pub async fn attach_member(
    pool: &SqlitePool,
    card_id: Uuid,
    member_id: Uuid,
) -> BackendResult<CardMember> {
    sqlx::query("INSERT INTO card_members (card_id, member_id) VALUES (?, ?)")
        .bind(card_id)
        .bind(member_id)
        .execute(pool)
        .await?;

    Ok(CardMember { card_id, member_id })
}

pub async fn detach_member(
    pool: &SqlitePool,
    card_id: Uuid,
    member_id: Uuid,
) -> BackendResult<()> {
    let result = sqlx::query("DELETE FROM card_members WHERE card_id = ? AND member_id = ?")
        .bind(card_id)
        .bind(member_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(BackendError::not_found("Member", member_id));
    }
    Ok(())
}

pub async fn count_checklist_items(pool: &SqlitePool, card_id: Uuid) -> BackendResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM checklist_items WHERE card_id = ?")
        .bind(card_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Append an unchecked item with `order = count + 1`
pub async fn add_checklist_item(
    pool: &SqlitePool,
    card_id: Uuid,
    text: &str,
) -> BackendResult<ChecklistItem> {
    let count = count_checklist_items(pool, card_id).await?;
    let item = ChecklistItem::new(card_id, text, next_order(count));

    sqlx::query(
        r#"
        INSERT INTO checklist_items (id, text, done, "order", card_id)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(item.id)
    .bind(&item.text)
    .bind(item.done)
    .bind(item.order)
    .bind(item.card_id)
    .execute(pool)
    .await?;

    Ok(item)
}

pub async fn set_checklist_item_done(
    pool: &SqlitePool,
    item_id: Uuid,
    done: bool,
) -> BackendResult<ChecklistItem> {
    sqlx::query_as::<_, ChecklistItem>(
        r#"
        UPDATE checklist_items
        SET done = ?
        WHERE id = ?
        RETURNING id, text, done, "order", card_id
        "#,
    )
    .bind(done)
    .bind(item_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| BackendError::not_found("Checklist item", item_id))
}

pub async fn delete_checklist_item(pool: &SqlitePool, item_id: Uuid) -> BackendResult<()> {
    let result = sqlx::query("DELETE FROM checklist_items WHERE id = ?")
        .bind(item_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(BackendError::not_found("Checklist item", item_id));
    }
    Ok(())
}
