//! Checklist Item Data Structure

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A checkable line item on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: Uuid,
    pub text: String,
    pub done: bool,
    /// 1-based display rank within the owning card
    pub order: i32,
    pub card_id: Uuid,
}

impl ChecklistItem {
    pub fn new(card_id: Uuid, text: impl Into<String>, order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            done: false,
            order,
            card_id,
        }
    }
}
