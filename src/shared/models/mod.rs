//! Board Domain Types
//!
//! Row-level entities (one struct per table) and the nested board aggregate.
//! Every type serializes with camelCase field names, which is the wire format
//! of the HTTP API.

pub mod board;
pub mod list;
pub mod card;
pub mod label;
pub mod member;
pub mod checklist;
pub mod aggregate;

pub use board::Board;
pub use list::List;
pub use card::Card;
pub use label::{CardLabel, Label};
pub use member::{CardMember, Member};
pub use checklist::ChecklistItem;
pub use aggregate::{BoardDetail, CardDetail, CardLabelDetail, CardMemberDetail, ListDetail};
