//! Optimistic Drag Controller
//!
//! Owns the client's board snapshot and turns drag gestures into persisted
//! moves. A gesture is applied locally first, then sent to the server. On
//! success the optimistic snapshot stays; on failure the board is fetched
//! again and replaces it. If that fetch fails too, the snapshot from before
//! the drag comes back.
//!
//! Only one move is in flight at a time. While persisting, further
//! drag-ends and reloads are rejected with [`ClientError::Busy`] and the
//! snapshot is left alone.

use std::sync::Arc;

use uuid::Uuid;

use crate::client::api::{BoardApi, ClientResult};
use crate::client::error::ClientError;
use crate::client::optimistic::{apply_gesture, DragGesture, PendingMove};
use crate::shared::models::BoardDetail;

/// Controller state between gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Persisting(PendingMove),
}

/// How a drag-end was resolved
#[derive(Debug)]
pub enum DragOutcome {
    /// Nothing moved and nothing was sent
    Ignored,
    /// The server accepted the move; the optimistic snapshot is kept
    Persisted(PendingMove),
    /// The server rejected the move; the snapshot now holds server state
    RolledBack {
        pending: PendingMove,
        error: ClientError,
    },
}

/// Send `pending` to the server
pub async fn persist_move<A: BoardApi + ?Sized>(api: &A, pending: PendingMove) -> ClientResult<()> {
    match pending {
        PendingMove::List(request) => api.move_list(request).await.map(|_| ()),
        PendingMove::Card(request) => api.move_card(request).await.map(|_| ()),
    }
}

pub struct DragController<A> {
    api: A,
    board_id: Uuid,
    snapshot: Arc<BoardDetail>,
    pre_drag: Option<Arc<BoardDetail>>,
    phase: Phase,
}

impl<A: BoardApi> DragController<A> {
    /// Fetch `board_id` and start idle on it
    pub async fn load(api: A, board_id: Uuid) -> ClientResult<Self> {
        let board = api.fetch_board(board_id).await?;
        Ok(Self::with_snapshot(api, board))
    }

    /// Start idle on an already fetched board
    pub fn with_snapshot(api: A, board: BoardDetail) -> Self {
        Self {
            api,
            board_id: board.id,
            snapshot: Arc::new(board),
            pre_drag: None,
            phase: Phase::Idle,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn board_id(&self) -> Uuid {
        self.board_id
    }

    /// The current snapshot; cheap to clone and never mutated in place
    pub fn snapshot(&self) -> Arc<BoardDetail> {
        Arc::clone(&self.snapshot)
    }

    pub fn board(&self) -> &BoardDetail {
        &self.snapshot
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Persisting(_))
    }

    /// Apply a gesture locally and return the move to persist
    ///
    /// Returns `Ok(None)` when the gesture changes nothing. The caller must
    /// pass the persist result to [`settle`](Self::settle).
    pub fn begin(&mut self, gesture: &DragGesture) -> ClientResult<Option<PendingMove>> {
        if self.is_busy() {
            tracing::debug!("Rejecting drag of {} while a move is in flight", gesture.item_id);
            return Err(ClientError::Busy);
        }

        let Some((next, pending)) = apply_gesture(&self.snapshot, gesture)? else {
            return Ok(None);
        };

        self.pre_drag = Some(std::mem::replace(&mut self.snapshot, next));
        self.phase = Phase::Persisting(pending);
        Ok(Some(pending))
    }

    /// Finish the in-flight move with the result of persisting it
    pub async fn settle(&mut self, result: ClientResult<()>) -> ClientResult<DragOutcome> {
        let Phase::Persisting(pending) = self.phase else {
            return Err(ClientError::InvalidGesture("no move in flight".to_string()));
        };
        self.phase = Phase::Idle;
        let pre_drag = self.pre_drag.take();

        let error = match result {
            Ok(()) => {
                tracing::debug!("Persisted move of {}", pending.item_id());
                return Ok(DragOutcome::Persisted(pending));
            }
            Err(error) => error,
        };

        tracing::warn!("Move of {} failed, reloading board: {}", pending.item_id(), error);
        match self.api.fetch_board(self.board_id).await {
            Ok(board) => {
                self.snapshot = Arc::new(board);
                Ok(DragOutcome::RolledBack { pending, error })
            }
            Err(reload) => {
                tracing::warn!("Reload after failed move also failed: {}", reload);
                if let Some(previous) = pre_drag {
                    self.snapshot = previous;
                }
                Err(ClientError::Reload {
                    source: Box::new(error),
                    reload: Box::new(reload),
                })
            }
        }
    }

    /// Apply, persist and settle one gesture
    pub async fn handle_drag_end(&mut self, gesture: &DragGesture) -> ClientResult<DragOutcome> {
        let Some(pending) = self.begin(gesture)? else {
            return Ok(DragOutcome::Ignored);
        };
        let result = persist_move(&self.api, pending).await;
        self.settle(result).await
    }

    /// Replace the snapshot with a fresh copy of the board
    pub async fn reload(&mut self) -> ClientResult<Arc<BoardDetail>> {
        if self.is_busy() {
            return Err(ClientError::Busy);
        }
        let board = self.api.fetch_board(self.board_id).await?;
        self.snapshot = Arc::new(board);
        Ok(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::optimistic::DragGesture;
    use crate::shared::models::{Board, Card, CardDetail, List, ListDetail};
    use crate::shared::requests::{MoveCardRequest, MoveListRequest};
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory stand-in for the server
    struct FakeApi {
        server_board: Mutex<BoardDetail>,
        fail_moves: AtomicBool,
        fail_fetch: AtomicBool,
        fetches: AtomicUsize,
        moves: Mutex<Vec<PendingMove>>,
    }

    impl FakeApi {
        fn new(board: BoardDetail) -> Self {
            Self {
                server_board: Mutex::new(board),
                fail_moves: AtomicBool::new(false),
                fail_fetch: AtomicBool::new(false),
                fetches: AtomicUsize::new(0),
                moves: Mutex::new(Vec::new()),
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }

        fn sent(&self) -> Vec<PendingMove> {
            self.moves.lock().unwrap().clone()
        }

        fn rejection() -> ClientError {
            ClientError::Status {
                status: 500,
                message: "Server error".to_string(),
            }
        }
    }

    #[async_trait]
    impl BoardApi for FakeApi {
        async fn fetch_board(&self, _board_id: Uuid) -> ClientResult<BoardDetail> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail_fetch.load(Ordering::SeqCst) {
                return Err(Self::rejection());
            }
            Ok(self.server_board.lock().unwrap().clone())
        }

        async fn move_list(&self, request: MoveListRequest) -> ClientResult<List> {
            self.moves.lock().unwrap().push(PendingMove::List(request));
            if self.fail_moves.load(Ordering::SeqCst) {
                return Err(Self::rejection());
            }
            let board = self.server_board.lock().unwrap();
            let list = board.list(request.list_id).unwrap();
            Ok(List {
                id: list.id,
                title: list.title.clone(),
                order: request.new_order,
                board_id: list.board_id,
            })
        }

        async fn move_card(&self, request: MoveCardRequest) -> ClientResult<Card> {
            self.moves.lock().unwrap().push(PendingMove::Card(request));
            if self.fail_moves.load(Ordering::SeqCst) {
                return Err(Self::rejection());
            }
            let mut card = Card::new(request.dest_list_id, "moved", request.dest_order);
            card.id = request.card_id;
            Ok(card)
        }
    }

    struct Fixture {
        controller: DragController<FakeApi>,
        todo: Uuid,
        doing: Uuid,
        a: Uuid,
        b: Uuid,
    }

    fn fixture() -> Fixture {
        let board = Board::new("X");
        let todo = List::new(board.id, "Todo", 1);
        let doing = List::new(board.id, "Doing", 2);
        let a = Card::new(todo.id, "A", 1);
        let b = Card::new(todo.id, "B", 2);
        let (todo_id, doing_id, a_id, b_id) = (todo.id, doing.id, a.id, b.id);

        let mut detail = BoardDetail::from_board(board, Vec::new());
        detail.push_list(ListDetail::from_list(
            todo,
            vec![CardDetail::from_card(a), CardDetail::from_card(b)],
        ));
        detail.push_list(ListDetail::from_list(doing, Vec::new()));

        Fixture {
            controller: DragController::with_snapshot(FakeApi::new(detail.clone()), detail),
            todo: todo_id,
            doing: doing_id,
            a: a_id,
            b: b_id,
        }
    }

    #[tokio::test]
    async fn test_identical_drop_sends_nothing() {
        let mut f = fixture();
        let gesture = DragGesture::card(f.a, (f.todo, 0), (f.todo, 0));

        let outcome = f.controller.handle_drag_end(&gesture).await.unwrap();
        assert_matches!(outcome, DragOutcome::Ignored);
        assert!(f.controller.api().sent().is_empty());
        assert_eq!(f.controller.api().fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_success_keeps_optimistic_snapshot() {
        let mut f = fixture();
        let gesture = DragGesture::card(f.b, (f.todo, 1), (f.doing, 0));

        let outcome = f.controller.handle_drag_end(&gesture).await.unwrap();
        assert_matches!(outcome, DragOutcome::Persisted(PendingMove::Card(request)) => {
            assert_eq!(request.dest_order, 1);
            assert_eq!(request.dest_list_id, f.doing);
        });
        assert_eq!(
            f.controller.board().layout(),
            vec![(f.todo, vec![f.a]), (f.doing, vec![f.b])]
        );
        assert_eq!(f.controller.api().fetch_count(), 0);
        assert_eq!(f.controller.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_failure_reloads_server_state() {
        let mut f = fixture();
        f.controller.api().fail_moves.store(true, Ordering::SeqCst);
        let before = f.controller.board().layout();

        let gesture = DragGesture::card(f.a, (f.todo, 0), (f.doing, 0));
        let outcome = f.controller.handle_drag_end(&gesture).await.unwrap();

        assert_matches!(outcome, DragOutcome::RolledBack { error, .. } => {
            assert_eq!(error.status_code(), Some(500));
        });
        assert_eq!(f.controller.api().fetch_count(), 1);
        assert_eq!(f.controller.board().layout(), before);
        assert!(!f.controller.is_busy());
    }

    #[tokio::test]
    async fn test_failed_reload_restores_pre_drag_snapshot() {
        let mut f = fixture();
        f.controller.api().fail_moves.store(true, Ordering::SeqCst);
        f.controller.api().fail_fetch.store(true, Ordering::SeqCst);
        let before = f.controller.snapshot();

        let gesture = DragGesture::list(f.doing, 1, 0);
        let err = f.controller.handle_drag_end(&gesture).await.unwrap_err();

        assert_matches!(err, ClientError::Reload { .. });
        assert!(Arc::ptr_eq(&before, &f.controller.snapshot()));
    }

    #[tokio::test]
    async fn test_overlapping_gesture_is_busy() {
        let mut f = fixture();
        let first = DragGesture::card(f.b, (f.todo, 1), (f.doing, 0));
        let pending = f.controller.begin(&first).unwrap().unwrap();
        let optimistic = f.controller.snapshot();

        let second = DragGesture::list(f.doing, 1, 0);
        assert_matches!(f.controller.begin(&second), Err(ClientError::Busy));
        assert_matches!(f.controller.reload().await, Err(ClientError::Busy));
        assert!(Arc::ptr_eq(&optimistic, &f.controller.snapshot()));

        let result = persist_move(f.controller.api(), pending).await;
        let outcome = f.controller.settle(result).await.unwrap();
        assert_matches!(outcome, DragOutcome::Persisted(_));
        assert!(f.controller.begin(&second).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_persisted_target_is_destination_plus_one() {
        let mut f = fixture();
        let gesture = DragGesture::card(f.a, (f.todo, 0), (f.todo, 1));
        f.controller.handle_drag_end(&gesture).await.unwrap();

        assert_eq!(
            f.controller.api().sent(),
            vec![PendingMove::Card(MoveCardRequest {
                card_id: f.a,
                source_list_id: f.todo,
                dest_list_id: f.todo,
                dest_order: 2,
            })]
        );
    }

    #[tokio::test]
    async fn test_gestures_use_latest_snapshot() {
        let mut f = fixture();
        let first = DragGesture::card(f.b, (f.todo, 1), (f.doing, 0));
        f.controller.handle_drag_end(&first).await.unwrap();

        let stale = DragGesture::card(f.b, (f.todo, 1), (f.todo, 0));
        assert_matches!(
            f.controller.handle_drag_end(&stale).await,
            Err(ClientError::InvalidGesture(_))
        );

        let follow_up = DragGesture::card(f.b, (f.doing, 0), (f.todo, 0));
        f.controller.handle_drag_end(&follow_up).await.unwrap();
        assert_eq!(
            f.controller.board().layout(),
            vec![(f.todo, vec![f.b, f.a]), (f.doing, vec![])]
        );
    }

    #[tokio::test]
    async fn test_settle_without_move_in_flight() {
        let mut f = fixture();
        assert_matches!(
            f.controller.settle(Ok(())).await,
            Err(ClientError::InvalidGesture(_))
        );
    }

    #[tokio::test]
    async fn test_load_and_reload() {
        let f = fixture();
        let board = f.controller.board().clone();
        let mut controller = DragController::load(FakeApi::new(board.clone()), board.id)
            .await
            .unwrap();
        assert_eq!(controller.board_id(), board.id);

        let reloaded = controller.reload().await.unwrap();
        assert_eq!(*reloaded, board);
        assert_eq!(controller.api().fetch_count(), 2);
    }
}
