//! Board Aggregate
//!
//! The fully joined, nested read of a board: labels, then lists sorted by
//! `order`, each with its cards sorted by `order`, each card carrying its
//! label and member associations (joined to their details) and its checklist.
//!
//! The same shape is produced by the backend loader and held in memory by the
//! client drag controller. Lists and the label set sit behind `Arc` so a new
//! snapshot can share every list a move does not touch.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Board, Card, ChecklistItem, Label, List, Member};

/// A board with every descendant entity attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDetail {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub labels: Arc<Vec<Label>>,
    pub lists: Vec<Arc<ListDetail>>,
}

/// A list with its cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDetail {
    pub id: Uuid,
    pub title: String,
    pub order: i32,
    pub board_id: Uuid,
    pub cards: Vec<CardDetail>,
}

/// A card with its associations and checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetail {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub order: i32,
    pub list_id: Uuid,
    pub labels: Vec<CardLabelDetail>,
    pub members: Vec<CardMemberDetail>,
    pub checklist: Vec<ChecklistItem>,
}

/// Card/label association joined to the label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardLabelDetail {
    pub card_id: Uuid,
    pub label_id: Uuid,
    pub label: Label,
}

/// Card/member association joined to the member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMemberDetail {
    pub card_id: Uuid,
    pub member_id: Uuid,
    pub member: Member,
}

impl BoardDetail {
    /// Start an aggregate from a board row with no children
    pub fn from_board(board: Board, labels: Vec<Label>) -> Self {
        Self {
            id: board.id,
            title: board.title,
            created_at: board.created_at,
            labels: Arc::new(labels),
            lists: Vec::new(),
        }
    }

    /// Position of a list in display order
    pub fn list_index(&self, list_id: Uuid) -> Option<usize> {
        self.lists.iter().position(|list| list.id == list_id)
    }

    pub fn list(&self, list_id: Uuid) -> Option<&ListDetail> {
        self.lists
            .iter()
            .find(|list| list.id == list_id)
            .map(AsRef::as_ref)
    }

    /// Append a list in display order
    pub fn push_list(&mut self, list: ListDetail) {
        self.lists.push(Arc::new(list));
    }

    /// Locate a card as `(list index, card index)`
    pub fn card_position(&self, card_id: Uuid) -> Option<(usize, usize)> {
        self.lists.iter().enumerate().find_map(|(list_index, list)| {
            list.cards
                .iter()
                .position(|card| card.id == card_id)
                .map(|card_index| (list_index, card_index))
        })
    }

    pub fn card(&self, card_id: Uuid) -> Option<&CardDetail> {
        self.card_position(card_id)
            .map(|(list_index, card_index)| &self.lists[list_index].cards[card_index])
    }

    /// Card ids per list, in display order
    pub fn layout(&self) -> Vec<(Uuid, Vec<Uuid>)> {
        self.lists
            .iter()
            .map(|list| (list.id, list.cards.iter().map(|card| card.id).collect()))
            .collect()
    }
}

impl ListDetail {
    pub fn from_list(list: List, cards: Vec<CardDetail>) -> Self {
        Self {
            id: list.id,
            title: list.title,
            order: list.order,
            board_id: list.board_id,
            cards,
        }
    }
}

impl CardDetail {
    /// A card with no associations yet
    pub fn from_card(card: Card) -> Self {
        Self {
            id: card.id,
            title: card.title,
            description: card.description,
            due_date: card.due_date,
            order: card.order,
            list_id: card.list_id,
            labels: Vec::new(),
            members: Vec::new(),
            checklist: Vec::new(),
        }
    }
}
