//! Board Aggregate Loader
//!
//! Reads a board with every descendant in one transaction and nests the rows
//! into a [`BoardDetail`]. Each container is read with `ORDER BY "order" ASC`
//! and sorted again after nesting with a stable sort, so lists, cards and
//! checklist items come back in display order even when rows arrive
//! interleaved.

use std::collections::HashMap;

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::shared::models::{
    Board, BoardDetail, Card, CardDetail, CardLabelDetail, CardMemberDetail, ChecklistItem, Label,
    List, ListDetail, Member,
};
use crate::shared::ordering::sort_by_order;

#[derive(Debug, sqlx::FromRow)]
struct CardLabelRow {
    card_id: Uuid,
    label_id: Uuid,
    name: String,
    color: String,
    board_id: Uuid,
}

impl From<CardLabelRow> for CardLabelDetail {
    fn from(row: CardLabelRow) -> Self {
        Self {
            card_id: row.card_id,
            label_id: row.label_id,
            label: Label {
                id: row.label_id,
                name: row.name,
                color: row.color,
                board_id: row.board_id,
            },
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CardMemberRow {
    card_id: Uuid,
    member_id: Uuid,
    name: String,
    email: String,
}

impl From<CardMemberRow> for CardMemberDetail {
    fn from(row: CardMemberRow) -> Self {
        Self {
            card_id: row.card_id,
            member_id: row.member_id,
            member: Member {
                id: row.member_id,
                name: row.name,
                email: row.email,
            },
        }
    }
}

/// Flat rows of one board, each collection already in display order
#[derive(Debug, Default)]
pub struct AggregateRows {
    pub labels: Vec<Label>,
    pub lists: Vec<List>,
    pub cards: Vec<Card>,
    pub card_labels: Vec<CardLabelDetail>,
    pub card_members: Vec<CardMemberDetail>,
    pub checklist: Vec<ChecklistItem>,
}

/// Load the full aggregate of a board
///
/// Fails with `NotFound` when the board does not exist.
pub async fn load_board(pool: &SqlitePool, board_id: Uuid) -> BackendResult<BoardDetail> {
    let mut tx = pool.begin().await?;

    let board = sqlx::query_as::<_, Board>(
        r#"
        SELECT id, title, created_at
        FROM boards
        WHERE id = ?
        "#,
    )
    .bind(board_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| BackendError::not_found("Board", board_id))?;

    let labels = sqlx::query_as::<_, Label>(
        r#"
        SELECT id, name, color, board_id
        FROM labels
        WHERE board_id = ?
        ORDER BY name ASC
        "#,
    )
    .bind(board_id)
    .fetch_all(&mut *tx)
    .await?;

    let lists = sqlx::query_as::<_, List>(
        r#"
        SELECT id, title, "order", board_id
        FROM lists
        WHERE board_id = ?
        ORDER BY "order" ASC
        "#,
    )
    .bind(board_id)
    .fetch_all(&mut *tx)
    .await?;

    let cards = sqlx::query_as::<_, Card>(
        r#"
        SELECT c.id, c.title, c.description, c.due_date, c."order", c.list_id
        FROM cards c
        JOIN lists l ON l.id = c.list_id
        WHERE l.board_id = ?
        ORDER BY c."order" ASC
        "#,
    )
    .bind(board_id)
    .fetch_all(&mut *tx)
    .await?;

    let card_labels = sqlx::query_as::<_, CardLabelRow>(
        r#"
        SELECT cl.card_id, cl.label_id, lb.name, lb.color, lb.board_id
        FROM card_labels cl
        JOIN labels lb ON lb.id = cl.label_id
        JOIN cards c ON c.id = cl.card_id
        JOIN lists l ON l.id = c.list_id
        WHERE l.board_id = ?
        ORDER BY lb.name ASC
        "#,
    )
    .bind(board_id)
    .fetch_all(&mut *tx)
    .await?;

    let card_members = sqlx::query_as::<_, CardMemberRow>(
        r#"
        SELECT cm.card_id, cm.member_id, m.name, m.email
        FROM card_members cm
        JOIN members m ON m.id = cm.member_id
        JOIN cards c ON c.id = cm.card_id
        JOIN lists l ON l.id = c.list_id
        WHERE l.board_id = ?
        ORDER BY m.name ASC
        "#,
    )
    .bind(board_id)
    .fetch_all(&mut *tx)
    .await?;

    let checklist = sqlx::query_as::<_, ChecklistItem>(
        r#"
        SELECT ci.id, ci.text, ci.done, ci."order", ci.card_id
        FROM checklist_items ci
        JOIN cards c ON c.id = ci.card_id
        JOIN lists l ON l.id = c.list_id
        WHERE l.board_id = ?
        ORDER BY ci."order" ASC
        "#,
    )
    .bind(board_id)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!(
        "Loaded board {} with {} lists and {} cards",
        board_id,
        lists.len(),
        cards.len()
    );

    Ok(assemble(
        board,
        AggregateRows {
            labels,
            lists,
            cards,
            card_labels: card_labels.into_iter().map(Into::into).collect(),
            card_members: card_members.into_iter().map(Into::into).collect(),
            checklist,
        },
    ))
}

/// Nest flat rows under their parents and sort every container by `order`
///
/// Ties keep row order. Rows whose parent is not part of the board are dropped.
pub fn assemble(board: Board, mut rows: AggregateRows) -> BoardDetail {
    let mut labels_by_card: HashMap<Uuid, Vec<CardLabelDetail>> = HashMap::new();
    for link in rows.card_labels {
        labels_by_card.entry(link.card_id).or_default().push(link);
    }

    let mut members_by_card: HashMap<Uuid, Vec<CardMemberDetail>> = HashMap::new();
    for link in rows.card_members {
        members_by_card.entry(link.card_id).or_default().push(link);
    }

    let mut checklist_by_card: HashMap<Uuid, Vec<ChecklistItem>> = HashMap::new();
    for item in rows.checklist {
        checklist_by_card.entry(item.card_id).or_default().push(item);
    }

    let mut cards_by_list: HashMap<Uuid, Vec<CardDetail>> = HashMap::new();
    for card in rows.cards {
        let mut detail = CardDetail::from_card(card);
        detail.labels = labels_by_card.remove(&detail.id).unwrap_or_default();
        detail.members = members_by_card.remove(&detail.id).unwrap_or_default();
        detail.checklist = checklist_by_card.remove(&detail.id).unwrap_or_default();
        sort_by_order(&mut detail.checklist);
        cards_by_list.entry(detail.list_id).or_default().push(detail);
    }

    sort_by_order(&mut rows.lists);
    let mut aggregate = BoardDetail::from_board(board, rows.labels);
    for list in rows.lists {
        let mut cards = cards_by_list.remove(&list.id).unwrap_or_default();
        sort_by_order(&mut cards);
        aggregate.push_list(ListDetail::from_list(list, cards));
    }
    aggregate
}
