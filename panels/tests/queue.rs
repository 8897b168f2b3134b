use panels::events::{CheckEvent, Modifiers};
use panels::geometry::Rect;
use panels::queue::{DownloadState, MoveQueueItem, QueueItem, QueueTable};
use panels::selection::SelectAction;
use panels::socket::SocketEvent;
use panels::table::{SortDirection, TableName};
use serde_json::{Value, json};

fn raw_item(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "volume_id": 100 + id,
        "issue_id": null,
        "web_link": null,
        "web_title": null,
        "web_sub_title": null,
        "source_type": "GetComics",
        "source_name": "GetComics",
        "title": title,
        "size": 1000,
        "status": "queued",
        "progress": 0.0,
        "speed": 0.0
    })
}

fn item(id: i64, title: &str) -> QueueItem {
    serde_json::from_value(raw_item(id, title)).unwrap()
}

fn table() -> QueueTable {
    QueueTable::new(vec![
        item(1, "Saga #1"),
        item(2, "Saga #2"),
        item(3, "Monstress #1"),
        item(4, "Paper Girls #1"),
    ])
}

fn order(table: &QueueTable) -> Vec<i64> {
    table.items().iter().map(|i| i.id).collect()
}

fn row(index: usize) -> Rect {
    Rect::new(0.0, index as f32 * 40.0, 800.0, 40.0)
}

fn check(id: i64, value: bool, shift: bool) -> CheckEvent<i64> {
    CheckEvent {
        id,
        value,
        modifiers: if shift { Modifiers::SHIFT } else { Modifiers::NONE },
    }
}

#[test]
fn test_drag_commits_optimistically() {
    let mut table = table();
    assert!(table.begin_drag(1));
    table.hover(3, row(2), row(2).bottom() - 1.0);
    assert!(table.drag().is_dragging_down());

    let request = table.end_drag(true);
    assert_eq!(request, Some(MoveQueueItem { id: 1, index: 2 }));
    assert_eq!(order(&table), vec![2, 3, 1, 4]);
    assert!(!table.drag().is_dragging());
}

#[test]
fn test_cancelled_drag_sends_nothing() {
    let mut table = table();
    table.begin_drag(4);
    table.hover(1, row(0), 1.0);
    assert_eq!(table.end_drag(false), None);
    assert_eq!(order(&table), vec![1, 2, 3, 4]);
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut table = table();
    assert!(!table.begin_drag(99));
    assert!(!table.hover(99, row(0), 1.0));
    assert_eq!(table.end_drag(true), None);
}

#[test]
fn test_move_buttons() {
    let mut table = table();
    assert_eq!(table.move_up(1), None);
    assert_eq!(table.move_down(4), None);
    assert_eq!(table.move_down(1), Some(MoveQueueItem { id: 1, index: 1 }));
    assert_eq!(table.move_up(4), Some(MoveQueueItem { id: 4, index: 2 }));
    assert_eq!(order(&table), vec![2, 1, 4, 3]);
}

#[test]
fn test_move_request_body() {
    let body = serde_json::to_value(MoveQueueItem { id: 7, index: 0 }).unwrap();
    assert_eq!(body, json!({ "id": 7, "index": 0 }));
}

#[test]
fn test_shift_check_and_bulk_ids() {
    let mut table = table();
    table.on_check(check(2, true, false));
    table.on_check(check(4, true, true));
    assert_eq!(table.selected_ids(), vec![2, 3, 4]);
}

#[test]
fn test_queue_ended_prunes_selection() {
    let mut table = table();
    table.select(SelectAction::SelectAll);
    assert!(table.selection().all_selected());

    let event = SocketEvent::decode("queue_ended", json!({ "id": 3 })).unwrap();
    assert!(table.apply_socket_event(&event));
    assert_eq!(order(&table), vec![1, 2, 4]);
    assert_eq!(table.selected_ids(), vec![1, 2, 4]);
    assert!(table.selection().all_selected());

    assert!(!table.apply_socket_event(&event));
}

#[test]
fn test_queue_added_appends_or_replaces() {
    let mut table = table();
    table.select(SelectAction::SelectAll);

    let added = SocketEvent::decode("queue_added", raw_item(5, "Saga #3")).unwrap();
    assert!(table.apply_socket_event(&added));
    assert_eq!(order(&table), vec![1, 2, 3, 4, 5]);
    assert!(!table.selection().all_selected());
    assert!(!table.selection().all_unselected());

    let replaced = SocketEvent::decode("queue_added", raw_item(2, "Saga #2 (fixed)")).unwrap();
    assert!(table.apply_socket_event(&replaced));
    assert_eq!(table.len(), 5);
    assert_eq!(table.get(2).map(|i| i.title.as_str()), Some("Saga #2 (fixed)"));
}

#[test]
fn test_queue_status_updates_progress() {
    let mut table = table();
    let status = SocketEvent::decode(
        "queue_status",
        json!({ "id": 1, "status": "downloading", "size": 2000, "speed": 500.0, "progress": 50.0 }),
    )
    .unwrap();
    assert!(table.apply_socket_event(&status));

    let item = table.get(1).unwrap();
    assert_eq!(item.status, DownloadState::Downloading);
    assert_eq!(item.size, 2000);
    assert_eq!(item.time_left().map(|d| d.as_secs()), Some(2));
}

#[test]
fn test_refresh_keeps_surviving_selection() {
    let mut table = table();
    table.on_check(check(1, true, false));
    table.on_check(check(3, true, false));

    table.refresh_items(vec![item(3, "Monstress #1"), item(4, "Paper Girls #1")]);
    assert_eq!(table.selected_ids(), vec![3]);
    assert_eq!(table.selection().last_selected().and_then(|id| id.as_number()), Some(3));

    table.replace_items(vec![item(3, "Monstress #1")]);
    assert!(table.selected_ids().is_empty());
    assert_eq!(table.selection().last_selected(), None);
}

#[test]
fn test_structural_change_cancels_drag() {
    let mut table = table();
    table.begin_drag(2);
    table.hover(4, row(3), row(3).bottom() - 1.0);
    table.remove(1);
    assert!(!table.drag().is_dragging());
    assert_eq!(table.end_drag(true), None);
}

#[test]
fn test_rows_sorted_by_title_keep_priority() {
    let mut table = table();
    table.set_sort("title", Some(SortDirection::Ascending));

    let rows = table.rows();
    let view: Vec<(usize, i64)> = rows.iter().map(|r| (r.priority, r.item.id)).collect();
    assert_eq!(view, vec![(2, 3), (3, 4), (0, 1), (1, 2)]);
}

#[test]
fn test_shift_range_follows_display_order() {
    let mut table = table();
    table.set_sort("title", Some(SortDirection::Ascending));

    // Displayed as 3, 4, 1, 2: the range from 4 to 1 skips 2 and 3.
    table.on_check(check(4, true, false));
    table.on_check(check(1, true, true));
    assert_eq!(table.selected_ids(), vec![1, 4]);

    table.on_check(check(2, true, true));
    assert_eq!(table.selected_ids(), vec![1, 2, 4]);
}

#[test]
fn test_drag_needs_priority_order() {
    let mut table = table();
    table.set_sort("title", Some(SortDirection::Ascending));
    assert!(!table.is_reorderable());
    assert!(!table.begin_drag(1));
    assert!(!table.hover(3, row(0), 1.0));
    assert_eq!(table.end_drag(true), None);
    assert_eq!(order(&table), vec![1, 2, 3, 4]);

    table.set_options(TableName::QueueTable.defaults());
    assert!(table.is_reorderable());
    assert!(table.begin_drag(1));
}

#[test]
fn test_sorting_cancels_drag() {
    let mut table = table();
    table.begin_drag(2);
    table.hover(4, row(3), row(3).bottom() - 1.0);
    table.set_sort("priority", None);
    assert!(!table.drag().is_dragging());
    assert_eq!(table.end_drag(true), None);
}

#[test]
fn test_sort_by_time_left_with_stalled_speed() {
    let mut slow = raw_item(1, "Saga #1");
    slow["size"] = json!(5_000_000_000_i64);
    slow["speed"] = json!(1e-12);
    let mut table = QueueTable::new(vec![serde_json::from_value(slow).unwrap(), item(2, "Saga #2")]);
    table.set_sort("timeLeft", Some(SortDirection::Descending));

    let ids: Vec<i64> = table.rows().iter().map(|r| r.item.id).collect();
    assert_eq!(ids, vec![1, 2]);
}
