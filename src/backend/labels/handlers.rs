//! Label HTTP Handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::db;
use crate::backend::database::Database;
use crate::backend::error::BackendResult;
use crate::backend::extract::{ApiJson, ApiPath};
use crate::shared::models::Label;
use crate::shared::requests::CreateLabelRequest;

/// `POST /api/boards/{board_id}/labels`
pub async fn create_label(
    State(db): State<Database>,
    ApiPath(board_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<CreateLabelRequest>,
) -> BackendResult<(StatusCode, Json<Label>)> {
    let label = db::create_label(db.pool(), board_id, &request.name, &request.color).await?;
    tracing::debug!("Created label {} on board {}", label.name, board_id);
    Ok((StatusCode::CREATED, Json(label)))
}
