//! Ordering Model
//!
//! Lists within a board, cards within a list and checklist items within a
//! card all carry an integer `order`. The value is a display preference only:
//! containers are read with `ORDER BY "order" ASC` and nothing else depends on
//! it. Values are 1-based but need not be contiguous or unique, and ties fall
//! back to whatever order the store returns.
//!
//! A move writes exactly one row, the moved entity, and never renumbers its
//! siblings. Relative order stays correct as long as the target rank is
//! computed from a freshly loaded sibling ordering.
//!
//! The splice helpers here operate on in-memory vectors and are what the
//! client uses to mirror a drag gesture before the server confirms it.

use std::sync::Arc;

use crate::shared::error::SharedError;
use crate::shared::models::{Card, CardDetail, ChecklistItem, List, ListDetail};

/// An entity ranked inside a container by its `order` field
pub trait Ordered {
    fn order(&self) -> i32;
    fn set_order(&mut self, order: i32);
}

macro_rules! impl_ordered {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Ordered for $ty {
                fn order(&self) -> i32 {
                    self.order
                }

                fn set_order(&mut self, order: i32) {
                    self.order = order;
                }
            }
        )*
    };
}

impl_ordered!(List, ListDetail, Card, CardDetail, ChecklistItem);

/// Shared snapshots; writing the order clones the entity if it is still shared
impl<T: Ordered + Clone> Ordered for Arc<T> {
    fn order(&self) -> i32 {
        self.as_ref().order()
    }

    fn set_order(&mut self, order: i32) {
        Arc::make_mut(self).set_order(order);
    }
}

/// Order for an entity appended to a container that holds `existing` entities
pub fn next_order(existing: i64) -> i32 {
    i32::try_from(existing).map_or(i32::MAX, |count| count.saturating_add(1))
}

/// Persisted 1-based rank for a 0-based destination index
pub fn target_order(destination_index: usize) -> i32 {
    i32::try_from(destination_index).map_or(i32::MAX, |index| index.saturating_add(1))
}

/// Stable ascending sort by `order`; ties keep their incoming order
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(Ordered::order);
}

/// Whether `items` is already in display order
pub fn is_sorted_by_order<T: Ordered>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0].order() <= pair[1].order())
}

/// Move the element at `from` so that it ends up at index `to`
///
/// `to` is interpreted after removal, which is how drag-and-drop libraries
/// report destination indices. Like [`transfer`], a destination past the end
/// moves the element last. Returns the index the element landed at.
pub fn move_within<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<usize, SharedError> {
    if from >= items.len() {
        return Err(SharedError::out_of_range(from, items.len()));
    }
    let moved = items.remove(from);
    let index = to.min(items.len());
    items.insert(index, moved);
    Ok(index)
}

/// Splice the element at `from` out of `source` and into `destination` at `to`
///
/// `to` is clamped to the destination length so that dropping past the last
/// card appends. Returns a mutable reference to the moved element.
pub fn transfer<'a, T>(
    source: &mut Vec<T>,
    from: usize,
    destination: &'a mut Vec<T>,
    to: usize,
) -> Result<&'a mut T, SharedError> {
    if from >= source.len() {
        return Err(SharedError::out_of_range(from, source.len()));
    }
    let moved = source.remove(from);
    let index = to.min(destination.len());
    destination.insert(index, moved);
    Ok(&mut destination[index])
}
