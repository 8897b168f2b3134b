//! The midpoint-crossing rule.

use crate::geometry::Rect;

/// What a pointer move over a candidate row means for the hover index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverUpdate {
    /// Keep the current hover index; the pointer has not crossed the
    /// candidate's midpoint yet.
    Hold,
    /// The pointer is back over the dragged row itself.
    Origin,
    /// Move the hover index to this row.
    Over(usize),
}

/// Decide the hover index for a pointer at `pointer_y` over `candidate`.
///
/// Dragging downwards (`origin < candidate_index`) only counts once the
/// pointer is in the lower half of the candidate; dragging upwards only once
/// it is in the upper half. Exactly on the midpoint counts in both
/// directions. This hysteresis keeps the index from flickering between two
/// adjacent rows.
pub fn hover_update(
    pointer_y: f32,
    candidate: Rect,
    origin: usize,
    candidate_index: usize,
) -> HoverUpdate {
    if origin == candidate_index {
        return HoverUpdate::Origin;
    }

    let middle = candidate.mid_height();
    let offset = pointer_y - candidate.top();

    if origin < candidate_index && offset < middle {
        return HoverUpdate::Hold;
    }
    if origin > candidate_index && offset > middle {
        return HoverUpdate::Hold;
    }

    HoverUpdate::Over(candidate_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: Rect = Rect::new(0.0, 30.0, 100.0, 10.0);

    #[test]
    fn test_downwards_waits_for_lower_half() {
        assert_eq!(hover_update(31.0, ROW, 2, 3), HoverUpdate::Hold);
        assert_eq!(hover_update(34.9, ROW, 2, 3), HoverUpdate::Hold);
        assert_eq!(hover_update(35.0, ROW, 2, 3), HoverUpdate::Over(3));
        assert_eq!(hover_update(39.0, ROW, 2, 3), HoverUpdate::Over(3));
    }

    #[test]
    fn test_upwards_waits_for_upper_half() {
        assert_eq!(hover_update(39.0, ROW, 5, 3), HoverUpdate::Hold);
        assert_eq!(hover_update(35.0, ROW, 5, 3), HoverUpdate::Over(3));
        assert_eq!(hover_update(30.5, ROW, 5, 3), HoverUpdate::Over(3));
    }

    #[test]
    fn test_origin_row() {
        assert_eq!(hover_update(35.0, ROW, 3, 3), HoverUpdate::Origin);
    }
}
