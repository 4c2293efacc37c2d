//! Request Extractors
//!
//! `Path` and `Json` wrappers whose rejections are `BackendError`, so a bad
//! id or body produces the same `{message, status}` body as every other
//! failure instead of axum's plain-text rejection.
//!
//! - A path segment that is not a UUID reads as a missing entity (404).
//! - A body that is not valid JSON for the route is a server error (500).

use axum::{
    extract::{
        path::ErrorKind,
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// `Path` extractor rejecting with `BackendError`
#[derive(Debug, Clone, Copy)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ApiPath(value))
    }
}

/// `Json` extractor rejecting with `BackendError`
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

/// Entity named by a route parameter
fn entity_for_param(key: &str) -> &'static str {
    match key {
        "board_id" => "Board",
        "list_id" => "List",
        "card_id" => "Card",
        "label_id" => "Label",
        "member_id" => "Member",
        "item_id" => "Checklist item",
        _ => "Resource",
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        let malformed = match &rejection {
            PathRejection::FailedToDeserializePathParams(err) => match err.kind() {
                ErrorKind::ParseErrorAtKey { key, value, .. }
                | ErrorKind::DeserializeError { key, value, .. } => {
                    Some((entity_for_param(key), value.clone()))
                }
                _ => None,
            },
            _ => None,
        };
        match malformed {
            Some((entity, value)) => BackendError::MalformedId { entity, value },
            None => BackendError::InvalidPath(rejection),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        BackendError::InvalidBody(rejection)
    }
}
