//! Committed reorders.

/// A move of one item from `from` to `to`, committed on drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

impl Reorder {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Apply to `items`. Returns false (and leaves `items` untouched) when
    /// the move is empty or out of range.
    pub fn apply<T>(&self, items: &mut Vec<T>) -> bool {
        move_item(items, self.from, self.to)
    }
}

/// Remove the item at `from` and reinsert it at `to`.
///
/// Every other item shifts to close the gap, so the result is always a
/// permutation of the input.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}
