use pretty_assertions::assert_eq;
use tasklist_core::remote::decode_todos;
use tasklist_core::seed::seed_tasks;
use tasklist_core::{
    AppConfig, FETCH_FAILED_NOTICE, FetchError, FullListState, SyncStatus, Task, TaskList,
    ViewState,
};

fn task(id: u64, title: &str, completed: bool) -> Task {
    Task {
        id,
        title: title.to_string(),
        completed,
    }
}

#[test]
fn full_list_sync_merges_remote_payload() {
    let local = TaskList::new(vec![task(1, "A", false)]);
    let body = r#"{"todos": [
        {"id": 1, "todo": "B", "completed": true, "userId": 3},
        {"id": 2, "todo": "C", "completed": false, "userId": 4}
    ], "total": 2, "skip": 0, "limit": 30}"#;

    let state = FullListState::seeded(local).begin_sync();
    assert!(state.is_loading());

    let state = state.finish_sync(decode_todos(body));

    assert!(!state.is_loading());
    assert!(state.error_notice().is_none());
    assert_eq!(
        state.tasks().as_slice(),
        &[task(1, "A", true), task(2, "C", false)]
    );
    assert!(matches!(state.sync, SyncStatus::Synced(s) if s.matched == 1 && s.appended == 1));

    // local ids keep counting from the merged maximum
    let state = state.add("D");
    assert_eq!(state.tasks().as_slice()[2], task(3, "D", false));
}

#[test]
fn record_with_title_and_todo_still_merges() {
    let local = TaskList::new(vec![task(5, "mine", false)]);
    let body = r#"{"todos": [{"id": 1, "title": "t", "todo": "x", "completed": true}]}"#;

    let state = FullListState::seeded(local)
        .begin_sync()
        .finish_sync(decode_todos(body));

    assert!(state.error_notice().is_none());
    assert_eq!(
        state.tasks().as_slice(),
        &[task(5, "mine", false), task(1, "t", true)]
    );
}

#[test]
fn failed_sync_keeps_seed_and_shows_notice() {
    let seed = seed_tasks();
    let state = FullListState::seeded(seed.clone())
        .begin_sync()
        .finish_sync(Err(FetchError::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }));

    assert_eq!(state.tasks(), &seed);
    assert_eq!(state.error_notice(), Some(FETCH_FAILED_NOTICE));
    assert!(!state.is_loading());

    // local data stays usable after a failure
    let first = seed.as_slice()[0].id;
    let toggled = state.toggle(first);
    assert_ne!(
        toggled.tasks().as_slice()[0].completed,
        seed.as_slice()[0].completed
    );
    assert_eq!(toggled.error_notice(), Some(FETCH_FAILED_NOTICE));
}

#[test]
fn home_view_round_trip() {
    let cfg = AppConfig::default();
    let state = ViewState::seeded(seed_tasks());
    let original = state.tasks.clone();

    assert!(state.tasks.preview(cfg.home_preview_limit).len() <= 4);

    let id = original.as_slice()[0].id;
    let state = state.toggle(id).toggle(id);
    assert_eq!(state.tasks, original);

    let state = state.open_modal().add("");
    assert!(!state.modal_open);
    assert_eq!(state.tasks.len(), original.len() + 1);
    assert_eq!(
        state.tasks.as_slice().last().map(|t| t.id),
        Some(original.next_id())
    );
}
