//! Stable row identifiers.
//!
//! Rows are tracked by id rather than by position so that selection and drag
//! state stay valid when the backing list is refreshed, re-sorted or trimmed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a row in a list or table.
///
/// Backend resources are keyed by integers (volumes, issues, queue entries)
/// while some client-side lists (import proposals, folders) are keyed by
/// strings. Both serialise untagged, so `1` and `"1"` stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl ItemId {
    /// The numeric value, if this is a numeric id.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            ItemId::Number(n) => Some(*n),
            ItemId::Text(_) => None,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Number(value)
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        ItemId::Number(value.into())
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        ItemId::Number(value.into())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId::Text(value)
    }
}

/// Trait for rows that carry a stable identifier.
pub trait Identified {
    /// Unique identifier for this row.
    fn id(&self) -> ItemId;
}

impl Identified for ItemId {
    fn id(&self) -> ItemId {
        self.clone()
    }
}

/// Collect the ids of `items` in display order.
pub fn ids_of<T: Identified>(items: &[T]) -> Vec<ItemId> {
    items.iter().map(Identified::id).collect()
}

/// Find the display position of `id` in `ids`.
pub fn position_of(ids: &[ItemId], id: &ItemId) -> Option<usize> {
    ids.iter().position(|candidate| candidate == id)
}
