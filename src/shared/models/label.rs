//! Label Data Structures

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A colored tag scoped to a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub board_id: Uuid,
}

impl Label {
    pub fn new(board_id: Uuid, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            board_id,
        }
    }
}

/// Association between a card and a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CardLabel {
    pub card_id: Uuid,
    pub label_id: Uuid,
}
