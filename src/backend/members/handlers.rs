//! Member HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};

use super::db;
use crate::backend::database::Database;
use crate::backend::error::BackendResult;
use crate::backend::extract::ApiJson;
use crate::shared::models::Member;
use crate::shared::requests::CreateMemberRequest;

/// `GET /api/members`
pub async fn list_members(State(db): State<Database>) -> BackendResult<Json<Vec<Member>>> {
    Ok(Json(db::list_members(db.pool()).await?))
}

/// `POST /api/members`
pub async fn create_member(
    State(db): State<Database>,
    ApiJson(request): ApiJson<CreateMemberRequest>,
) -> BackendResult<(StatusCode, Json<Member>)> {
    let member = db::create_member(db.pool(), &request.name, &request.email).await?;
    tracing::info!("Created member {} ({})", member.name, member.id);
    Ok((StatusCode::CREATED, Json(member)))
}
