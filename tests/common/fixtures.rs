//! Board fixtures created through the public API

use axum::http::StatusCode;
use axum_test::TestServer;
use kanboard::shared::models::{Board, Card, Label, List, Member};
use serde_json::json;
use uuid::Uuid;

pub async fn create_board(server: &TestServer, title: &str) -> Board {
    let response = server.post("/api/boards").json(&json!({ "title": title })).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

pub async fn create_list(server: &TestServer, board_id: Uuid, title: &str) -> List {
    let response = server
        .post("/api/lists")
        .json(&json!({ "boardId": board_id, "title": title }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

pub async fn create_card(server: &TestServer, list_id: Uuid, title: &str) -> Card {
    let response = server
        .post("/api/cards")
        .json(&json!({ "listId": list_id, "title": title }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

pub async fn create_label(server: &TestServer, board_id: Uuid, name: &str, color: &str) -> Label {
    let response = server
        .post(&format!("/api/boards/{board_id}/labels"))
        .json(&json!({ "name": name, "color": color }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

pub async fn create_member(server: &TestServer, name: &str, email: &str) -> Member {
    let response = server
        .post("/api/members")
        .json(&json!({ "name": name, "email": email }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

/// Board "X" with list Todo holding cards A and B, and an empty list Doing
pub struct TodoDoing {
    pub board: Board,
    pub todo: List,
    pub doing: List,
    pub a: Card,
    pub b: Card,
}

pub async fn todo_doing(server: &TestServer) -> TodoDoing {
    let board = create_board(server, "X").await;
    let todo = create_list(server, board.id, "Todo").await;
    let doing = create_list(server, board.id, "Doing").await;
    let a = create_card(server, todo.id, "A").await;
    let b = create_card(server, todo.id, "B").await;
    TodoDoing {
        board,
        todo,
        doing,
        a,
        b,
    }
}
