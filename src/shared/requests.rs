//! Request and Response Bodies
//!
//! JSON payloads exchanged over the board API. Field names are camelCase on
//! the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Distinguish an absent field (`None`) from an explicit `null` (`Some(None)`)
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Board creation body
///
/// `title` is kept as raw JSON so a missing, blank or non-string title is a
/// validation failure rather than a body that fails to parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBoardRequest {
    #[serde(default)]
    pub title: serde_json::Value,
}

impl CreateBoardRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: serde_json::Value::String(title.into()),
        }
    }

    /// The trimmed title, or a validation error if it is missing, blank or not a string
    pub fn validated_title(&self) -> Result<String, SharedError> {
        match self.title.as_str().map(str::trim) {
            Some(title) if !title.is_empty() => Ok(title.to_string()),
            _ => Err(SharedError::validation("title", "Board title is required")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLabelRequest {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    pub board_id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameListRequest {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub list_id: Uuid,
    pub title: String,
}

/// Partial card update
///
/// An absent field leaves the column untouched. An explicit `null` clears
/// `description` or `dueDate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl UpdateCardRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.due_date.is_none()
    }
}

/// Drag result for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardRequest {
    pub card_id: Uuid,
    pub source_list_id: Uuid,
    pub dest_list_id: Uuid,
    /// 1-based rank in the destination list after the move
    pub dest_order: i32,
}

/// Drag result for a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveListRequest {
    pub list_id: Uuid,
    /// 1-based rank among the board's lists after the move
    pub new_order: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachLabelRequest {
    pub label_id: Uuid,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachMemberRequest {
    pub member_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddChecklistItemRequest {
    pub text: String,
}

/// Toggle body; `done` accepts any JSON value and is coerced by truthiness
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleChecklistItemRequest {
    #[serde(default)]
    pub done: serde_json::Value,
}

impl ToggleChecklistItemRequest {
    pub fn new(done: bool) -> Self {
        Self {
            done: serde_json::Value::Bool(done),
        }
    }

    /// `false`, `null`, `0`, `""` and a missing field are false; anything else is true
    pub fn is_done(&self) -> bool {
        match &self.done {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(value) => *value,
            serde_json::Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
            serde_json::Value::String(text) => !text.is_empty(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
        }
    }
}

/// Confirmation body for deletes and the health check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
