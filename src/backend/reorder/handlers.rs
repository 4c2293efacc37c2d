//! Drag-and-drop HTTP Handlers

use axum::{extract::State, Json};

use super::db;
use crate::backend::database::Database;
use crate::backend::error::BackendResult;
use crate::backend::extract::ApiJson;
use crate::shared::models::{Card, List};
use crate::shared::requests::{MoveCardRequest, MoveListRequest};

/// `POST /api/dnd/card`
pub async fn move_card(
    State(db): State<Database>,
    ApiJson(request): ApiJson<MoveCardRequest>,
) -> BackendResult<Json<Card>> {
    tracing::debug!(
        "Moving card {} from list {} to list {} at {}",
        request.card_id,
        request.source_list_id,
        request.dest_list_id,
        request.dest_order
    );
    let card = db::move_card(db.pool(), request.card_id, request.dest_list_id, request.dest_order)
        .await?;
    Ok(Json(card))
}

/// `POST /api/dnd/list`
pub async fn move_list(
    State(db): State<Database>,
    ApiJson(request): ApiJson<MoveListRequest>,
) -> BackendResult<Json<List>> {
    tracing::debug!("Moving list {} to {}", request.list_id, request.new_order);
    let list = db::move_list(db.pool(), request.list_id, request.new_order).await?;
    Ok(Json(list))
}
