//! List HTTP Handlers

use axum::{
    extract::State,
    Json,
};
use uuid::Uuid;

use super::db;
use crate::backend::database::Database;
use crate::backend::error::BackendResult;
use crate::backend::extract::{ApiJson, ApiPath};
use crate::shared::models::List;
use crate::shared::requests::{CreateListRequest, MessageResponse, RenameListRequest};

/// `POST /api/lists`
pub async fn create_list(
    State(db): State<Database>,
    ApiJson(request): ApiJson<CreateListRequest>,
) -> BackendResult<Json<List>> {
    let list = db::create_list(db.pool(), request.board_id, &request.title).await?;
    tracing::debug!("Created list {} at order {}", list.id, list.order);
    Ok(Json(list))
}

/// `PATCH /api/lists/{list_id}`
pub async fn rename_list(
    State(db): State<Database>,
    ApiPath(list_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<RenameListRequest>,
) -> BackendResult<Json<List>> {
    let list = db::rename_list(db.pool(), list_id, &request.title).await?;
    Ok(Json(list))
}

/// `DELETE /api/lists/{list_id}`
pub async fn delete_list(
    State(db): State<Database>,
    ApiPath(list_id): ApiPath<Uuid>,
) -> BackendResult<Json<MessageResponse>> {
    db::delete_list(db.pool(), list_id).await?;
    Ok(Json(MessageResponse::new("List deleted")))
}
