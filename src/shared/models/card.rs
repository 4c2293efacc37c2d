//! Card Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work within a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique card ID
    pub id: Uuid,
    /// Card title
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,
    /// 1-based display rank within the owning list
    pub order: i32,
    /// Owning list
    pub list_id: Uuid,
}

impl Card {
    pub fn new(list_id: Uuid, title: impl Into<String>, order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            due_date: None,
            order,
            list_id,
        }
    }
}
