//! Board API Client
//!
//! [`BoardApi`] is the seam between the drag controller and the network.
//! [`HttpBoardApi`] implements it over `reqwest`; tests drive the controller
//! with in-memory doubles.

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::client::config::Config;
use crate::client::error::ClientError;
use crate::shared::models::{
    Board, BoardDetail, Card, CardLabel, CardMember, ChecklistItem, Label, List, Member,
};
use crate::shared::requests::{
    AddChecklistItemRequest, AttachLabelRequest, AttachMemberRequest, CreateBoardRequest,
    CreateCardRequest, CreateLabelRequest, CreateListRequest, CreateMemberRequest,
    MessageResponse, MoveCardRequest, MoveListRequest, RenameListRequest,
    ToggleChecklistItemRequest, UpdateCardRequest,
};

pub type ClientResult<T> = Result<T, ClientError>;

/// Operations the drag controller needs from the server
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Fetch the full board aggregate
    async fn fetch_board(&self, board_id: Uuid) -> ClientResult<BoardDetail>;

    /// Persist a list move
    async fn move_list(&self, request: MoveListRequest) -> ClientResult<List>;

    /// Persist a card move
    async fn move_card(&self, request: MoveCardRequest) -> ClientResult<Card>;
}

/// HTTP implementation of the board API
#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    config: Config,
    client: Client,
}

impl HttpBoardApi {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn with_client(config: Config, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.config.api_url(path);
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        decode(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send::<(), T>(Method::GET, path, None).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn patch<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> ClientResult<MessageResponse> {
        self.send::<(), MessageResponse>(Method::DELETE, path, None).await
    }

    pub async fn list_boards(&self) -> ClientResult<Vec<Board>> {
        self.get("/boards").await
    }

    pub async fn create_board(&self, title: &str) -> ClientResult<Board> {
        self.post("/boards", &CreateBoardRequest::new(title)).await
    }

    pub async fn delete_board(&self, board_id: Uuid) -> ClientResult<MessageResponse> {
        self.delete(&format!("/boards/{board_id}")).await
    }

    pub async fn create_label(&self, board_id: Uuid, name: &str, color: &str) -> ClientResult<Label> {
        let request = CreateLabelRequest {
            name: name.to_string(),
            color: color.to_string(),
        };
        self.post(&format!("/boards/{board_id}/labels"), &request).await
    }

    pub async fn list_members(&self) -> ClientResult<Vec<Member>> {
        self.get("/members").await
    }

    pub async fn create_member(&self, name: &str, email: &str) -> ClientResult<Member> {
        let request = CreateMemberRequest {
            name: name.to_string(),
            email: email.to_string(),
        };
        self.post("/members", &request).await
    }

    pub async fn create_list(&self, board_id: Uuid, title: &str) -> ClientResult<List> {
        let request = CreateListRequest {
            board_id,
            title: title.to_string(),
        };
        self.post("/lists", &request).await
    }

    pub async fn rename_list(&self, list_id: Uuid, title: &str) -> ClientResult<List> {
        let request = RenameListRequest {
            title: title.to_string(),
        };
        self.patch(&format!("/lists/{list_id}"), &request).await
    }

    pub async fn delete_list(&self, list_id: Uuid) -> ClientResult<MessageResponse> {
        self.delete(&format!("/lists/{list_id}")).await
    }

    pub async fn create_card(&self, list_id: Uuid, title: &str) -> ClientResult<Card> {
        let request = CreateCardRequest {
            list_id,
            title: title.to_string(),
        };
        self.post("/cards", &request).await
    }

    pub async fn update_card(&self, card_id: Uuid, update: &UpdateCardRequest) -> ClientResult<Card> {
        self.patch(&format!("/cards/{card_id}"), update).await
    }

    pub async fn delete_card(&self, card_id: Uuid) -> ClientResult<MessageResponse> {
        self.delete(&format!("/cards/{card_id}")).await
    }

    pub async fn attach_label(&self, card_id: Uuid, label_id: Uuid) -> ClientResult<CardLabel> {
        self.post(
            &format!("/card-details/{card_id}/labels"),
            &AttachLabelRequest { label_id },
        )
        .await
    }

    pub async fn detach_label(&self, card_id: Uuid, label_id: Uuid) -> ClientResult<MessageResponse> {
        self.delete(&format!("/card-details/{card_id}/labels/{label_id}"))
            .await
    }

    pub async fn attach_member(&self, card_id: Uuid, member_id: Uuid) -> ClientResult<CardMember> {
        self.post(
            &format!("/card-details/{card_id}/members"),
            &AttachMemberRequest { member_id },
        )
        .await
    }

    pub async fn detach_member(
        &self,
        card_id: Uuid,
        member_id: Uuid,
    ) -> ClientResult<MessageResponse> {
        self.delete(&format!("/card-details/{card_id}/members/{member_id}"))
            .await
    }

    pub async fn add_checklist_item(&self, card_id: Uuid, text: &str) -> ClientResult<ChecklistItem> {
        let request = AddChecklistItemRequest {
            text: text.to_string(),
        };
        self.post(&format!("/card-details/{card_id}/checklist"), &request)
            .await
    }

    pub async fn toggle_checklist_item(&self, item_id: Uuid, done: bool) -> ClientResult<ChecklistItem> {
        self.patch(
            &format!("/card-details/checklist/{item_id}"),
            &ToggleChecklistItemRequest::new(done),
        )
        .await
    }

    pub async fn delete_checklist_item(&self, item_id: Uuid) -> ClientResult<MessageResponse> {
        self.delete(&format!("/card-details/checklist/{item_id}")).await
    }
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn fetch_board(&self, board_id: Uuid) -> ClientResult<BoardDetail> {
        self.get(&format!("/boards/{board_id}")).await
    }

    async fn move_list(&self, request: MoveListRequest) -> ClientResult<List> {
        self.post("/dnd/list", &request).await
    }

    async fn move_card(&self, request: MoveCardRequest) -> ClientResult<Card> {
        self.post("/dnd/card", &request).await
    }
}

/// Turn a response into `T`, or into `ClientError::Status` carrying the
/// server's `message` when the status is not a success
async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<MessageResponse>(&bytes)
            .map(|body| body.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned());
        tracing::warn!("Request failed with {}: {}", status, message);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}
