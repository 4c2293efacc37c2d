//! List Data Structure

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ordered column of cards within a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct List {
    /// Unique list ID
    pub id: Uuid,
    /// List title
    pub title: String,
    /// 1-based display rank among the board's lists
    pub order: i32,
    /// Owning board
    pub board_id: Uuid,
}

impl List {
    pub fn new(board_id: Uuid, title: impl Into<String>, order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            order,
            board_id,
        }
    }
}
