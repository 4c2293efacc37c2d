//! Card HTTP Handlers

use axum::{
    extract::State,
    Json,
};
use uuid::Uuid;

use super::db;
use crate::backend::database::Database;
use crate::backend::error::BackendResult;
use crate::backend::extract::{ApiJson, ApiPath};
use crate::shared::models::Card;
use crate::shared::requests::{CreateCardRequest, MessageResponse, UpdateCardRequest};

/// `POST /api/cards`
pub async fn create_card(
    State(db): State<Database>,
    ApiJson(request): ApiJson<CreateCardRequest>,
) -> BackendResult<Json<Card>> {
    let card = db::create_card(db.pool(), request.list_id, &request.title).await?;
    tracing::debug!("Created card {} at order {}", card.id, card.order);
    Ok(Json(card))
}

/// `PATCH /api/cards/{card_id}`
pub async fn update_card(
    State(db): State<Database>,
    ApiPath(card_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UpdateCardRequest>,
) -> BackendResult<Json<Card>> {
    let card = db::update_card(db.pool(), card_id, &request).await?;
    Ok(Json(card))
}

/// `DELETE /api/cards/{card_id}`
pub async fn delete_card(
    State(db): State<Database>,
    ApiPath(card_id): ApiPath<Uuid>,
) -> BackendResult<Json<MessageResponse>> {
    db::delete_card(db.pool(), card_id).await?;
    Ok(Json(MessageResponse::new("Card deleted")))
}
