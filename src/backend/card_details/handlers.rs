//! Card Detail HTTP Handlers
//!
//! Label and member links plus checklist items, all addressed through
//! `/api/card-details`.

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
use crate::shared::models::{CardLabel, CardMember, ChecklistItem};
use crate::shared::requests::{
    AddChecklistItemRequest, AttachLabelRequest, AttachMemberRequest, MessageResponse,
    ToggleChecklistItemRequest,
};

/// `POST /api/card-details/{card_id}/labels`
pub async fn attach_label(
    State(db): State<Database>,
    ApiPath(card_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<AttachLabelRequest>,
) -> BackendResult<(StatusCode, Json<CardLabel>)> {
    let link = db::attach_label(db.pool(), card_id, request.label_id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// `DELETE /api/card-details/{card_id}/labels/{label_id}`
pub async fn detach_label(
    State(db): State<Database>,
    ApiPath((card_id, label_id)): ApiPath<(Uuid, Uuid)>,
) -> BackendResult<Json<MessageResponse>> {
    db::detach_label(db.pool(), card_id, label_id).await?;
    Ok(Json(MessageResponse::new("Label removed")))
}

/// `POST /api/card-details/{card_id}/members`
pub async fn attach_member(
    State(db): State<Database>,
    ApiPath(card_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<AttachMemberRequest>,
) -> BackendResult<(StatusCode, Json<CardMember>)> {
    let link = db::attach_member(db.pool(), card_id, request.member_id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// `DELETE /api/card-details/{card_id}/members/{member_id}`
pub async fn detach_member(
    State(db): State<Database>,
    ApiPath((card_id, member_id)): ApiPath<(Uuid, Uuid)>,
) -> BackendResult<Json<MessageResponse>> {
    db::detach_member(db.pool(), card_id, member_id).await?;
    Ok(Json(MessageResponse::new("Member removed")))
}

/// `POST /api/card-details/{card_id}/checklist`
pub async fn add_checklist_item(
    State(db): State<Database>,
    ApiPath(card_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<AddChecklistItemRequest>,
) -> BackendResult<(StatusCode, Json<ChecklistItem>)> {
    let item = db::add_checklist_item(db.pool(), card_id, &request.text).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// `PATCH /api/card-details/checklist/{item_id}`
pub async fn toggle_checklist_item(
    State(db): State<Database>,
    ApiPath(item_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<ToggleChecklistItemRequest>,
) -> BackendResult<Json<ChecklistItem>> {
    let item = db::set_checklist_item_done(db.pool(), item_id, request.is_done()).await?;
    Ok(Json(item))
}

/// `DELETE /api/card-details/checklist/{item_id}`
pub async fn delete_checklist_item(
    State(db): State<Database>,
    ApiPath(item_id): ApiPath<Uuid>,
) -> BackendResult<Json<MessageResponse>> {
    db::delete_checklist_item(db.pool(), item_id).await?;
    Ok(Json(MessageResponse::new("Checklist item deleted")))
}
