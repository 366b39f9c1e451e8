//! End-to-end flow across list view, board view, and persistence.

use taskflow_app::{TaskDraft, TaskService};
use taskflow_core::{BoardColumn, ListFilter};
use taskflow_store_kv::{KvTaskStore, MemoryKv};

fn draft(text: &str) -> TaskDraft {
    TaskDraft {
        text: text.into(),
        ..TaskDraft::default()
    }
}

#[test]
fn completing_a_task_moves_it_across_views_and_back() {
    let kv = MemoryKv::new();
    let mut service = TaskService::load(KvTaskStore::new(kv.clone())).unwrap();

    let first = service.create(draft("write the report")).unwrap();
    let second = service.create(draft("review the numbers")).unwrap();
    let third = service.create(draft("send the invoice")).unwrap();

    service.toggle_complete(second.id).unwrap();

    // List views partition around the completed task.
    let active: Vec<_> = service.list(ListFilter::Active).iter().map(|t| t.id).collect();
    let completed: Vec<_> = service.list(ListFilter::Completed).iter().map(|t| t.id).collect();
    assert_eq!(active, vec![first.id, third.id]);
    assert_eq!(completed, vec![second.id]);

    // On the board the completed task appears only in `done`.
    let board = service.board();
    assert_eq!(board.done.iter().map(|t| t.id).collect::<Vec<_>>(), vec![second.id]);
    assert!(board.todo.iter().all(|t| t.id != second.id));
    assert!(board.in_progress.is_empty());

    // Reopening returns it to `todo`, not `inprogress`.
    service.toggle_complete(second.id).unwrap();
    let board = service.board();
    assert!(board.done.is_empty());
    assert_eq!(
        board.todo.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![first.id, second.id, third.id]
    );

    // A fresh engine over the same backend sees the same state.
    let reloaded = TaskService::load(KvTaskStore::new(kv)).unwrap();
    assert_eq!(reloaded.tasks(), service.tasks());
}

#[test]
fn board_drag_and_filtered_list_drag_compose() {
    let kv = MemoryKv::new();
    let mut service = TaskService::load(KvTaskStore::new(kv)).unwrap();

    let a = service.create(draft("a")).unwrap();
    let b = service.create(draft("b")).unwrap();
    let c = service.create(draft("c")).unwrap();
    let d = service.create(draft("d")).unwrap();

    // Drag two cards into other columns.
    service.set_status(a.id, BoardColumn::Done).unwrap();
    service.set_status(c.id, BoardColumn::Done).unwrap();

    // Active list shows [b, d]; drag d above b.
    service.reorder_view(ListFilter::Active, &[d.id, b.id]).unwrap();
    assert_eq!(
        service.tasks().iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![a.id, d.id, c.id, b.id]
    );

    // The board keeps column membership and canonical relative order.
    let board = service.board();
    assert_eq!(board.done.iter().map(|t| t.id).collect::<Vec<_>>(), vec![a.id, c.id]);
    assert_eq!(board.todo.iter().map(|t| t.id).collect::<Vec<_>>(), vec![d.id, b.id]);

    // Dropping a done card back into `todo` clears its completed flag.
    let moved = service.set_status(c.id, BoardColumn::Todo).unwrap();
    assert!(!moved.completed);
    let stats = service.stats();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.completed, 1);
}
