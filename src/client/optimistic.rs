//! Optimistic Board Mutations
//!
//! Converts a drag gesture into a new board snapshot plus the reorder request
//! that persists it. The input snapshot is never modified; a successful apply
//! returns a fresh `Arc<BoardDetail>` with the moved entity spliced out of its
//! source and into its destination.
//!
//! The new snapshot shares every list the move does not touch with the old
//! one. Only the source and destination lists are copied, on first write.

use std::sync::Arc;

use uuid::Uuid;

use crate::client::error::ClientError;
use crate::shared::models::BoardDetail;
use crate::shared::ordering::{move_within, target_order, transfer, Ordered};
use crate::shared::requests::{MoveCardRequest, MoveListRequest};

/// What is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    List,
    Card,
}

/// A drop target: the board's list row, or one list's card column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Board,
    List(Uuid),
}

/// A container plus a 0-based index inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropLocation {
    pub container: Container,
    pub index: usize,
}

impl DropLocation {
    pub fn new(container: Container, index: usize) -> Self {
        Self { container, index }
    }
}

/// The result of one drag, as reported when the pointer is released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    pub kind: DragKind,
    pub item_id: Uuid,
    pub source: DropLocation,
    /// `None` when the item was dropped outside any container
    pub destination: Option<DropLocation>,
}

impl DragGesture {
    /// A list dragged from `from` to `to` on the board
    pub fn list(list_id: Uuid, from: usize, to: usize) -> Self {
        Self {
            kind: DragKind::List,
            item_id: list_id,
            source: DropLocation::new(Container::Board, from),
            destination: Some(DropLocation::new(Container::Board, to)),
        }
    }

    /// A card dragged from `source` to `destination`, both `(list id, index)`
    pub fn card(card_id: Uuid, source: (Uuid, usize), destination: (Uuid, usize)) -> Self {
        Self {
            kind: DragKind::Card,
            item_id: card_id,
            source: DropLocation::new(Container::List(source.0), source.1),
            destination: Some(DropLocation::new(Container::List(destination.0), destination.1)),
        }
    }

    /// Whether the gesture leaves everything where it was
    pub fn is_noop(&self) -> bool {
        self.destination
            .map_or(true, |destination| destination == self.source)
    }
}

/// The request that persists an optimistic move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingMove {
    List(MoveListRequest),
    Card(MoveCardRequest),
}

impl PendingMove {
    pub fn item_id(&self) -> Uuid {
        match self {
            PendingMove::List(request) => request.list_id,
            PendingMove::Card(request) => request.card_id,
        }
    }

    /// The 1-based position sent to the server
    pub fn target_order(&self) -> i32 {
        match self {
            PendingMove::List(request) => request.new_order,
            PendingMove::Card(request) => request.dest_order,
        }
    }
}

/// Apply `gesture` to `board`
///
/// Returns `Ok(None)` for gestures that change nothing.
pub fn apply_gesture(
    board: &Arc<BoardDetail>,
    gesture: &DragGesture,
) -> Result<Option<(Arc<BoardDetail>, PendingMove)>, ClientError> {
    let Some(destination) = gesture.destination.filter(|_| !gesture.is_noop()) else {
        return Ok(None);
    };

    // Copies the list pointers only; lists are cloned when first mutated.
    let mut next = BoardDetail::clone(board);
    let pending = match (gesture.kind, gesture.source.container, destination.container) {
        (DragKind::List, Container::Board, Container::Board) => PendingMove::List(apply_list_move(
            &mut next,
            gesture.item_id,
            gesture.source.index,
            destination.index,
        )?),
        (DragKind::Card, Container::List(source_list), Container::List(dest_list)) => {
            PendingMove::Card(apply_card_move(
                &mut next,
                gesture.item_id,
                (source_list, gesture.source.index),
                (dest_list, destination.index),
            )?)
        }
        (kind, source, dest) => {
            return Err(ClientError::InvalidGesture(format!(
                "{kind:?} cannot move from {source:?} to {dest:?}"
            )));
        }
    };

    Ok(Some((Arc::new(next), pending)))
}

/// Move a list inside `board` and set its local order to the persisted target
pub fn apply_list_move(
    board: &mut BoardDetail,
    list_id: Uuid,
    from: usize,
    to: usize,
) -> Result<MoveListRequest, ClientError> {
    if board.lists.get(from).map(|list| list.id) != Some(list_id) {
        return Err(ClientError::InvalidGesture(format!(
            "list {list_id} is not at position {from}"
        )));
    }

    let landed = move_within(&mut board.lists, from, to)?;
    let new_order = target_order(to);
    board.lists[landed].set_order(new_order);

    Ok(MoveListRequest { list_id, new_order })
}

/// Move a card between (or within) lists of `board`
///
/// The card's local `order` and `list_id` are set to what the server will
/// store. Destination indices past the end append, within a list or across.
pub fn apply_card_move(
    board: &mut BoardDetail,
    card_id: Uuid,
    source: (Uuid, usize),
    destination: (Uuid, usize),
) -> Result<MoveCardRequest, ClientError> {
    let (source_list_id, from) = source;
    let (dest_list_id, to) = destination;

    let source_index = board
        .list_index(source_list_id)
        .ok_or(ClientError::UnknownContainer(source_list_id))?;
    let dest_index = board
        .list_index(dest_list_id)
        .ok_or(ClientError::UnknownContainer(dest_list_id))?;

    if board.lists[source_index].cards.get(from).map(|card| card.id) != Some(card_id) {
        return Err(ClientError::InvalidGesture(format!(
            "card {card_id} is not at position {from} of list {source_list_id}"
        )));
    }

    let dest_order = target_order(to);

    if source_index == dest_index {
        let cards = &mut Arc::make_mut(&mut board.lists[source_index]).cards;
        let landed = move_within(cards, from, to)?;
        cards[landed].order = dest_order;
    } else {
        let mut source_cards =
            std::mem::take(&mut Arc::make_mut(&mut board.lists[source_index]).cards);
        let dest_cards = &mut Arc::make_mut(&mut board.lists[dest_index]).cards;
        let moved = transfer(&mut source_cards, from, dest_cards, to).map(|card| {
            card.order = dest_order;
            card.list_id = dest_list_id;
        });
        Arc::make_mut(&mut board.lists[source_index]).cards = source_cards;
        moved?;
    }

    Ok(MoveCardRequest {
        card_id,
        source_list_id,
        dest_list_id,
        dest_order,
    })
}
