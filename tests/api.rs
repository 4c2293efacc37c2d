//! Board API integration tests
//!
//! Drives the full router over an in-memory database.

#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use common::*;
use kanboard::shared::models::{
    Board, BoardDetail, Card, CardLabel, CardMember, ChecklistItem, List, Member,
};
use kanboard::shared::requests::MessageResponse;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_health_check() {
    let (server, _db) = create_test_server().await;
    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: MessageResponse = response.json();
    assert!(!body.message.is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (server, _db) = create_test_server().await;
    let response = server.get("/api/nope").await;
    assert_error(&response, StatusCode::NOT_FOUND, "Route not found");
}

#[tokio::test]
async fn test_create_board_trims_and_validates_title() {
    let (server, _db) = create_test_server().await;

    let blank = server.post("/api/boards").json(&json!({ "title": "  " })).await;
    assert_error(&blank, StatusCode::BAD_REQUEST, "Board title is required");

    let missing = server.post("/api/boards").json(&json!({})).await;
    assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);

    let created = server.post("/api/boards").json(&json!({ "title": " Ops " })).await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let board: Board = created.json();
    assert_eq!(board.title, "Ops");
}

#[tokio::test]
async fn test_list_boards_newest_first() {
    let (server, _db) = create_test_server().await;
    let first = create_board(&server, "First").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = create_board(&server, "Second").await;

    let boards: Vec<Board> = server.get("/api/boards").await.json();
    let ids: Vec<Uuid> = boards.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_get_missing_board_is_404() {
    let (server, _db) = create_test_server().await;
    let response = server.get(&format!("/api/boards/{}", Uuid::new_v4())).await;
    assert_error(&response, StatusCode::NOT_FOUND, "Board not found");
}

#[tokio::test]
async fn test_board_aggregate_is_sorted_and_nested() {
    let (server, _db) = create_test_server().await;
    let f = todo_doing(&server).await;
    let label = create_label(&server, f.board.id, "Urgent", "red").await;
    let member = create_member(&server, "Harshit", "harshit@example.com").await;

    server
        .post(&format!("/api/card-details/{}/labels", f.a.id))
        .json(&json!({ "labelId": label.id }))
        .await;
    server
        .post(&format!("/api/card-details/{}/members", f.a.id))
        .json(&json!({ "memberId": member.id }))
        .await;
    for text in ["one", "two"] {
        server
            .post(&format!("/api/card-details/{}/checklist", f.a.id))
            .json(&json!({ "text": text }))
            .await;
    }

    server
        .post("/api/dnd/list")
        .json(&json!({ "listId": f.doing.id, "newOrder": 0 }))
        .await;

    let board: BoardDetail = server.get(&format!("/api/boards/{}", f.board.id)).await.json();
    assert_eq!(board.labels.len(), 1);
    assert_eq!(
        board.layout(),
        vec![(f.doing.id, vec![]), (f.todo.id, vec![f.a.id, f.b.id])]
    );

    let card = board.card(f.a.id).unwrap();
    assert_eq!(card.labels[0].label.name, "Urgent");
    assert_eq!(card.members[0].member.email, "harshit@example.com");
    let texts: Vec<&str> = card.checklist.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two"]);
}

#[tokio::test]
async fn test_aggregate_json_uses_camel_case() {
    let (server, _db) = create_test_server().await;
    let f = todo_doing(&server).await;

    let body: serde_json::Value = server.get(&format!("/api/boards/{}", f.board.id)).await.json();
    assert!(body.get("createdAt").is_some());
    assert_eq!(body["lists"][0]["boardId"], json!(f.board.id));
    assert_eq!(body["lists"][0]["cards"][0]["listId"], json!(f.todo.id));
    assert!(body["lists"][0]["cards"][0]["dueDate"].is_null());
}

#[tokio::test]
async fn test_delete_board_cascades() {
    let (server, db) = create_test_server().await;
    let f = todo_doing(&server).await;
    let label = create_label(&server, f.board.id, "Urgent", "red").await;
    server
        .post(&format!("/api/card-details/{}/labels", f.a.id))
        .json(&json!({ "labelId": label.id }))
        .await;

    let response = server.delete(&format!("/api/boards/{}", f.board.id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<MessageResponse>().message, "Board deleted");

    let gone = server.get(&format!("/api/boards/{}", f.board.id)).await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);

    for table in ["lists", "cards", "labels", "card_labels"] {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 0, "{table} should be empty");
    }

    let again = server.delete(&format!("/api/boards/{}", f.board.id)).await;
    assert_error(&again, StatusCode::NOT_FOUND, "Board not found");
}

#[tokio::test]
async fn test_list_crud() {
    let (server, _db) = create_test_server().await;
    let board = create_board(&server, "X").await;
    let first = create_list(&server, board.id, "Todo").await;
    let second = create_list(&server, board.id, "Doing").await;
    assert_eq!((first.order, second.order), (1, 2));

    let renamed: List = server
        .patch(&format!("/api/lists/{}", first.id))
        .json(&json!({ "title": "Backlog" }))
        .await
        .json();
    assert_eq!(renamed.title, "Backlog");
    assert_eq!(renamed.order, 1);

    let deleted = server.delete(&format!("/api/lists/{}", second.id)).await;
    assert_eq!(deleted.json::<MessageResponse>().message, "List deleted");

    let missing = server
        .patch(&format!("/api/lists/{}", second.id))
        .json(&json!({ "title": "x" }))
        .await;
    assert_error(&missing, StatusCode::NOT_FOUND, "List not found");
}

#[tokio::test]
async fn test_create_list_on_missing_board_is_server_error() {
    let (server, _db) = create_test_server().await;
    let response = server
        .post("/api/lists")
        .json(&json!({ "boardId": Uuid::new_v4(), "title": "Todo" }))
        .await;
    assert_error(&response, StatusCode::INTERNAL_SERVER_ERROR, "Server error");
}

#[tokio::test]
async fn test_card_order_is_count_plus_one() {
    let (server, _db) = create_test_server().await;
    let board = create_board(&server, "X").await;
    let list = create_list(&server, board.id, "Todo").await;

    for expected in 1..=3 {
        let card = create_card(&server, list.id, "card").await;
        assert_eq!(card.order, expected);
    }
}

#[tokio::test]
async fn test_update_card_partial_fields() {
    let (server, _db) = create_test_server().await;
    let f = todo_doing(&server).await;
    let path = format!("/api/cards/{}", f.a.id);

    let updated: Card = server
        .patch(&path)
        .json(&json!({ "description": "details", "dueDate": "2025-03-01T12:00:00Z" }))
        .await
        .json();
    assert_eq!(updated.title, "A");
    assert_eq!(updated.description.as_deref(), Some("details"));
    assert!(updated.due_date.is_some());

    let cleared: Card = server
        .patch(&path)
        .json(&json!({ "title": "A2", "dueDate": null }))
        .await
        .json();
    assert_eq!(cleared.title, "A2");
    assert_eq!(cleared.description.as_deref(), Some("details"));
    assert_eq!(cleared.due_date, None);

    let deleted = server.delete(&path).await;
    assert_eq!(deleted.json::<MessageResponse>().message, "Card deleted");

    let missing = server.patch(&path).json(&json!({ "title": "x" })).await;
    assert_error(&missing, StatusCode::NOT_FOUND, "Card not found");
}

#[tokio::test]
async fn test_members_are_sorted_by_name() {
    let (server, _db) = create_test_server().await;
    create_member(&server, "Rahul", "rahul@example.com").await;
    create_member(&server, "Harshit", "harshit@example.com").await;

    let members: Vec<Member> = server.get("/api/members").await.json();
    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Harshit", "Rahul"]);
}

#[tokio::test]
async fn test_attach_same_label_twice_fails() {
    let (server, db) = create_test_server().await;
    let f = todo_doing(&server).await;
    let label = create_label(&server, f.board.id, "Urgent", "red").await;
    let path = format!("/api/card-details/{}/labels", f.a.id);

    let first = server.post(&path).json(&json!({ "labelId": label.id })).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);
    let link: CardLabel = first.json();
    assert_eq!(link, CardLabel { card_id: f.a.id, label_id: label.id });

    let second = server.post(&path).json(&json!({ "labelId": label.id })).await;
    assert_error(&second, StatusCode::INTERNAL_SERVER_ERROR, "Server error");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM card_labels")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);

    let removed = server.delete(&format!("{path}/{}", label.id)).await;
    assert_eq!(removed.json::<MessageResponse>().message, "Label removed");
}

#[tokio::test]
async fn test_member_links() {
    let (server, _db) = create_test_server().await;
    let f = todo_doing(&server).await;
    let member = create_member(&server, "Rahul", "rahul@example.com").await;
    let path = format!("/api/card-details/{}/members", f.b.id);

    let created = server.post(&path).json(&json!({ "memberId": member.id })).await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    assert_eq!(created.json::<CardMember>().member_id, member.id);

    let removed = server.delete(&format!("{path}/{}", member.id)).await;
    assert_eq!(removed.json::<MessageResponse>().message, "Member removed");

    let again = server.delete(&format!("{path}/{}", member.id)).await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_checklist_item_twice_restores_done() {
    let (server, _db) = create_test_server().await;
    let f = todo_doing(&server).await;

    let created = server
        .post(&format!("/api/card-details/{}/checklist", f.a.id))
        .json(&json!({ "text": "write tests" }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let item: ChecklistItem = created.json();
    assert_eq!(item.order, 1);
    let path = format!("/api/card-details/checklist/{}", item.id);

    let on: ChecklistItem = server.patch(&path).json(&json!({ "done": !item.done })).await.json();
    let off: ChecklistItem = server.patch(&path).json(&json!({ "done": !on.done })).await.json();
    assert_eq!(off.done, item.done);

    let truthy: ChecklistItem = server.patch(&path).json(&json!({ "done": "yes" })).await.json();
    assert!(truthy.done);
    let falsy: ChecklistItem = server.patch(&path).json(&json!({ "done": 0 })).await.json();
    assert!(!falsy.done);

    let deleted = server.delete(&path).await;
    assert_eq!(deleted.json::<MessageResponse>().message, "Checklist item deleted");

    let missing = server.patch(&path).json(&json!({ "done": true })).await;
    assert_error(&missing, StatusCode::NOT_FOUND, "Checklist item not found");
}

#[tokio::test]
async fn test_malformed_id_is_missing_entity() {
    let (server, _db) = create_test_server().await;

    let board = server.get("/api/boards/not-a-uuid").await;
    assert_error(&board, StatusCode::NOT_FOUND, "Board not found");

    let list = server
        .patch("/api/lists/abc")
        .json(&json!({ "title": "x" }))
        .await;
    assert_error(&list, StatusCode::NOT_FOUND, "List not found");

    let label = server
        .delete(&format!("/api/card-details/{}/labels/nope", Uuid::new_v4()))
        .await;
    assert_error(&label, StatusCode::NOT_FOUND, "Label not found");

    let item = server.delete("/api/card-details/checklist/nope").await;
    assert_error(&item, StatusCode::NOT_FOUND, "Checklist item not found");
}

#[tokio::test]
async fn test_unreadable_body_is_server_error() {
    let (server, _db) = create_test_server().await;

    let bad_id = server
        .post("/api/dnd/card")
        .json(&json!({ "cardId": "x" }))
        .await;
    assert_error(&bad_id, StatusCode::INTERNAL_SERVER_ERROR, "Server error");

    let missing_field = server.post("/api/cards").json(&json!({})).await;
    assert_error(&missing_field, StatusCode::INTERNAL_SERVER_ERROR, "Server error");

    let not_json = server.post("/api/lists").text("title=Todo").await;
    assert_error(&not_json, StatusCode::INTERNAL_SERVER_ERROR, "Server error");
}

#[tokio::test]
async fn test_non_string_board_title_is_validation_error() {
    let (server, _db) = create_test_server().await;
    let response = server.post("/api/boards").json(&json!({ "title": 5 })).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "Board title is required");
}

#[tokio::test]
async fn test_wrong_method_is_json_404() {
    let (server, _db) = create_test_server().await;
    let response = server.get("/api/cards").await;
    assert_error(&response, StatusCode::NOT_FOUND, "Route not found");

    let response = server.put("/api/boards").await;
    assert_error(&response, StatusCode::NOT_FOUND, "Route not found");
}
