use panels::drag::{
    DragGesture, DragReorder, GestureResult, HoverUpdate, Placeholder, Reorder, RowBox, RowLayout,
    hover_update, move_item,
};
use panels::events::PointerEvent;
use panels::geometry::Rect;
use proptest::prelude::*;

const ROW_HEIGHT: f32 = 20.0;

fn row(index: usize) -> Rect {
    Rect::new(0.0, index as f32 * ROW_HEIGHT, 200.0, ROW_HEIGHT)
}

fn upper_half(index: usize) -> f32 {
    row(index).top() + 2.0
}

fn lower_half(index: usize) -> f32 {
    row(index).bottom() - 2.0
}

#[test]
fn test_hold_until_midpoint_crossed_downwards() {
    let mut drag = DragReorder::new();
    drag.begin(2);

    assert!(!drag.hover(3, row(3), upper_half(3)));
    assert_eq!(drag.hover_index(), None);

    assert!(drag.hover(3, row(3), lower_half(3)));
    assert_eq!(drag.hover_index(), Some(3));
    assert!(drag.is_dragging_down());
    assert!(!drag.is_dragging_up());
}

#[test]
fn test_hold_until_midpoint_crossed_upwards() {
    let mut drag = DragReorder::new();
    drag.begin(2);

    assert!(!drag.hover(1, row(1), lower_half(1)));
    assert!(drag.hover(1, row(1), upper_half(1)));
    assert_eq!(drag.drop_index(), Some(1));
    assert!(drag.is_dragging_up());
}

#[test]
fn test_hover_origin_clears_candidate() {
    let mut drag = DragReorder::new();
    drag.begin(2);
    drag.hover(4, row(4), lower_half(4));
    assert_eq!(
        hover_update(upper_half(2), row(2), 2, 2),
        HoverUpdate::Origin
    );
    assert!(drag.hover(2, row(2), upper_half(2)));
    assert_eq!(drag.hover_index(), None);
    assert!(drag.is_dragging());
    assert!(!drag.is_dragging_up() && !drag.is_dragging_down());
    assert_eq!(drag.end(true), None);
}

#[test]
fn test_hover_while_idle_is_ignored() {
    let mut drag = DragReorder::new();
    assert!(!drag.hover(1, row(1), lower_half(1)));
    assert_eq!(drag, DragReorder::new());
}

#[test]
fn test_end_without_drop_is_untouched() {
    let mut items = vec!['A', 'B', 'C', 'D', 'E'];
    let mut drag = DragReorder::new();
    drag.begin(0);
    drag.hover(3, row(3), lower_half(3));
    if let Some(reorder) = drag.end(false) {
        reorder.apply(&mut items);
    }
    assert_eq!(items, vec!['A', 'B', 'C', 'D', 'E']);
    assert_eq!(drag.drag_index(), None);
    assert_eq!(drag.hover_index(), None);
}

#[test]
fn test_drop_commits_move() {
    let mut items = vec!['A', 'B', 'C', 'D', 'E'];
    let mut drag = DragReorder::new();
    drag.begin(0);
    drag.hover(3, row(3), lower_half(3));
    let reorder = drag.end(true);
    assert_eq!(reorder, Some(Reorder::new(0, 3)));
    assert!(reorder.is_some_and(|r| r.apply(&mut items)));
    assert_eq!(items, vec!['B', 'C', 'D', 'A', 'E']);
}

#[test]
fn test_placeholders() {
    let mut drag = DragReorder::new();
    drag.begin(3);
    drag.hover(1, row(1), upper_half(1));
    assert_eq!(drag.placeholder(1), Some(Placeholder::Before));
    assert_eq!(drag.placeholder(3), None);
    assert_eq!(drag.placeholder(2), None);

    drag.begin(0);
    drag.hover(2, row(2), lower_half(2));
    assert_eq!(drag.placeholder(2), Some(Placeholder::After));
    assert_eq!(drag.placeholder(0), None);
}

#[test]
fn test_gesture_skips_fixed_rows() {
    let bounds = Rect::new(0.0, 0.0, 200.0, 80.0);
    let mut layout = RowLayout::uniform(bounds, ROW_HEIGHT, 4);
    layout.rows[3] = RowBox::new(row(3)).fixed();

    let mut gesture = DragGesture::new();
    assert_eq!(
        gesture.handle(PointerEvent::down(5.0, lower_half(3)), &layout),
        GestureResult::Ignored
    );

    gesture.handle(PointerEvent::down(5.0, upper_half(1)), &layout);
    gesture.handle(PointerEvent::moved(5.0, lower_half(2)), &layout);
    assert_eq!(gesture.state().hover_index(), Some(2));
    gesture.handle(PointerEvent::moved(5.0, lower_half(3)), &layout);
    assert_eq!(gesture.state().hover_index(), Some(2));
    assert_eq!(
        gesture.handle(PointerEvent::up(5.0, lower_half(3)), &layout),
        GestureResult::Committed(Reorder::new(1, 2))
    );
}

#[test]
fn test_gesture_handle_only() {
    let rows = (0..3)
        .map(|i| RowBox::new(row(i)).with_handle(Rect::new(0.0, row(i).top(), 16.0, ROW_HEIGHT)))
        .collect();
    let layout = RowLayout::new(Rect::new(0.0, 0.0, 200.0, 60.0), rows);

    let mut gesture = DragGesture::new();
    assert!(!gesture.handle(PointerEvent::down(100.0, 5.0), &layout).is_handled());
    assert!(gesture.handle(PointerEvent::down(8.0, 5.0), &layout).is_handled());
}

#[test]
fn test_gesture_drop_inside_bounds_commits() {
    let rows = (0..3).map(|i| RowBox::new(row(i))).collect();
    let layout = RowLayout::new(Rect::new(0.0, 0.0, 200.0, 60.0), rows);

    let mut gesture = DragGesture::new();
    gesture.handle(PointerEvent::down(5.0, upper_half(0)), &layout);
    assert_eq!(
        gesture.handle(PointerEvent::moved(5.0, lower_half(2)), &layout),
        GestureResult::Started
    );
    assert_eq!(
        gesture.handle(PointerEvent::up(5.0, lower_half(2)), &layout),
        GestureResult::Committed(Reorder::new(0, 2))
    );

    // Same gesture released below the list.
    gesture.handle(PointerEvent::down(5.0, upper_half(0)), &layout);
    gesture.handle(PointerEvent::moved(5.0, lower_half(2)), &layout);
    assert_eq!(
        gesture.handle(PointerEvent::up(5.0, 90.0), &layout),
        GestureResult::Cancelled
    );
}

proptest! {
    #[test]
    fn prop_move_item_is_permutation(
        (len, from, to) in (1usize..30).prop_flat_map(|len| (Just(len), 0..len, 0..len))
    ) {
        let original: Vec<usize> = (0..len).collect();
        let mut items = original.clone();
        let moved = move_item(&mut items, from, to);

        prop_assert_eq!(moved, from != to);
        prop_assert_eq!(items[to], original[from]);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, original);
    }

    #[test]
    fn prop_hover_never_equals_origin(
        origin in 0usize..10,
        hovers in prop::collection::vec((0usize..10, 0.0f32..20.0), 0..40)
    ) {
        let mut drag = DragReorder::new();
        drag.begin(origin);
        for (candidate, offset) in hovers {
            let rect = row(candidate);
            drag.hover(candidate, rect, rect.top() + offset);
            prop_assert_ne!(drag.hover_index(), Some(origin));
        }
    }
}
