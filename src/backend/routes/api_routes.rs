/**
 * API Routes
 *
 * Every board endpoint lives under `/api`.
 *
 * ## Boards
 * - `GET/POST /api/boards`
 * - `GET/DELETE /api/boards/{board_id}`
 * - `POST /api/boards/{board_id}/labels`
 *
 * ## Members
 * - `GET/POST /api/members`
 *
 * ## Lists and cards
 * - `POST /api/lists`, `PATCH/DELETE /api/lists/{list_id}`
 * - `POST /api/cards`, `PATCH/DELETE /api/cards/{card_id}`
 *
 * ## Drag and drop
 * - `POST /api/dnd/card`, `POST /api/dnd/list`
 *
 * ## Card details
 * - `POST /api/card-details/{card_id}/labels|members|checklist`
 * - `DELETE /api/card-details/{card_id}/labels/{label_id}`
 * - `DELETE /api/card-details/{card_id}/members/{member_id}`
 * - `PATCH/DELETE /api/card-details/checklist/{item_id}`
 */

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::backend::server::state::AppState;
use crate::backend::{boards, card_details, cards, labels, lists, members, reorder};

/// Add every `/api` route to `router`
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/boards",
            get(boards::list_boards).post(boards::create_board),
        )
        .route(
            "/api/boards/{board_id}",
            get(boards::get_board).delete(boards::delete_board),
        )
        .route("/api/boards/{board_id}/labels", post(labels::create_label))
        .route(
            "/api/members",
            get(members::list_members).post(members::create_member),
        )
        .route("/api/lists", post(lists::create_list))
        .route(
            "/api/lists/{list_id}",
            patch(lists::rename_list).delete(lists::delete_list),
        )
        .route("/api/cards", post(cards::create_card))
        .route(
            "/api/cards/{card_id}",
            patch(cards::update_card).delete(cards::delete_card),
        )
        .route("/api/dnd/card", post(reorder::move_card))
        .route("/api/dnd/list", post(reorder::move_list))
        .route(
            "/api/card-details/checklist/{item_id}",
            patch(card_details::toggle_checklist_item).delete(card_details::delete_checklist_item),
        )
        .route(
            "/api/card-details/{card_id}/labels",
            post(card_details::attach_label),
        )
        .route(
            "/api/card-details/{card_id}/labels/{label_id}",
            axum::routing::delete(card_details::detach_label),
        )
        .route(
            "/api/card-details/{card_id}/members",
            post(card_details::attach_member),
        )
        .route(
            "/api/card-details/{card_id}/members/{member_id}",
            axum::routing::delete(card_details::detach_member),
        )
        .route(
            "/api/card-details/{card_id}/checklist",
            post(card_details::add_checklist_item),
        )
}
