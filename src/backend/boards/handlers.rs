//! Board HTTP Handlers
//!
//! Board listing, creation, deletion and the full aggregate read.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::{aggregate, db};
use crate::backend::database::Database;
use crate::backend::error::BackendResult;
use crate::backend::extract::{ApiJson, ApiPath};
use crate::shared::models::{Board, BoardDetail};
use crate::shared::requests::{CreateBoardRequest, MessageResponse};

/// `GET /api/boards`
pub async fn list_boards(State(db): State<Database>) -> BackendResult<Json<Vec<Board>>> {
    let boards = db::list_boards(db.pool()).await?;
    Ok(Json(boards))
}

/// `POST /api/boards`
pub async fn create_board(
    State(db): State<Database>,
    ApiJson(request): ApiJson<CreateBoardRequest>,
) -> BackendResult<(StatusCode, Json<Board>)> {
    let title = request.validated_title()?;
    let board = db::create_board(db.pool(), &title).await?;
    tracing::info!("Created board {} ({})", board.id, board.title);
    Ok((StatusCode::CREATED, Json(board)))
}

/// `GET /api/boards/{board_id}`
pub async fn get_board(
    State(db): State<Database>,
    ApiPath(board_id): ApiPath<Uuid>,
) -> BackendResult<Json<BoardDetail>> {
    let board = aggregate::load_board(db.pool(), board_id).await?;
    Ok(Json(board))
}

/// `DELETE /api/boards/{board_id}`
pub async fn delete_board(
    State(db): State<Database>,
    ApiPath(board_id): ApiPath<Uuid>,
) -> BackendResult<Json<MessageResponse>> {
    db::delete_board(db.pool(), board_id).await?;
    tracing::info!("Deleted board {}", board_id);
    Ok(Json(MessageResponse::new("Board deleted")))
}
