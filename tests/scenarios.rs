//! End-to-end scenarios of the calendar widget, with a local store that mocks the server

use std::sync::{Arc, Mutex};

use calendar_tasks::mock_behaviour::MockBehaviour;
use calendar_tasks::panel::ListState;
use calendar_tasks::store::{LocalStore, StoreRequest};
use calendar_tasks::view::{self, ListRow, Placeholder};
use calendar_tasks::{CalendarApp, CalendarDate, Task};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

/// A widget loaded on 2024-03-15, with 2024-03-20 selected
async fn app_on_march_20th(store: LocalStore) -> CalendarApp<LocalStore> {
    let mut app = CalendarApp::new(store, date("2024-03-15")).unwrap();
    app.start().await;
    app.click_day(&date("2024-03-20")).await.unwrap();
    app.panel_mut().store_mut().clear_requests();
    app
}

#[tokio::test]
async fn declined_deletion_sends_nothing() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = LocalStore::new();
    let task = store.insert_task(&date("2024-03-20"), "X".to_string());
    let mut app = app_on_march_20th(store).await;
    let rows_before = app.panel().rows();

    app.panel_mut().delete_task(&date("2024-03-20"), task.id(), |_| false).await;

    assert!(app.panel().store().requests().iter().all(|req| matches!(req, StoreRequest::DeleteTask(..)) == false));
    assert!(app.panel().store().requests().is_empty());
    assert_eq!(app.panel().rows(), rows_before);
}

#[tokio::test]
async fn empty_day() {
    let _ = env_logger::builder().is_test(true).try_init();

    let app = app_on_march_20th(LocalStore::new()).await;
    assert_eq!(app.panel().rows(), vec![ListRow::Placeholder(Placeholder::NoTasks)]);
}

#[tokio::test]
async fn one_task() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = LocalStore::new();
    store.insert_task(&date("2024-03-20"), "X".to_string());
    let app = app_on_march_20th(store).await;

    let rows = app.panel().rows();
    assert_eq!(rows.len(), 1);
    match &rows[0] {
        ListRow::Task { description, completed, .. } => {
            assert_eq!(description, "X");
            assert_eq!(*completed, false);
        },
        other => panic!("unexpected row {:?}", other),
    }
    let html = view::render_list_html(app.selected_date(), &rows).into_string();
    assert!(html.contains("Delete</button>"));
}

#[tokio::test]
async fn add_sends_one_post_then_one_get() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut app = app_on_march_20th(LocalStore::new()).await;
    app.panel_mut().add_task("").await;
    app.panel_mut().add_task("   ").await;
    assert!(app.panel().store().requests().is_empty());

    app.panel_mut().add_task("Buy milk").await;
    assert_eq!(app.panel().store().requests(), vec![
        StoreRequest::AddTask(date("2024-03-20"), "Buy milk".to_string()),
        StoreRequest::GetTasks(date("2024-03-20")),
    ]);
}

#[tokio::test]
async fn toggle_and_delete() {
    let _ = env_logger::builder().is_test(true).try_init();
    let day = date("2024-03-20");

    let mut app = app_on_march_20th(LocalStore::new()).await;
    app.panel_mut().add_task("Buy milk").await;
    app.panel_mut().add_task("Call mom").await;

    let id = match app.panel().list() {
        ListState::Loaded(tasks) => tasks[0].id(),
        other => panic!("unexpected list {:?}", other),
    };

    app.panel_mut().update_task_status(&day, id, true).await;
    match app.panel().list() {
        ListState::Loaded(tasks) => {
            assert_eq!(tasks[0], Task::new(id, "Buy milk".to_string(), true));
            assert_eq!(tasks[1].completed(), false);
        },
        other => panic!("unexpected list {:?}", other),
    }

    app.panel_mut().delete_task(&day, id, |_| true).await;
    match app.panel().list() {
        ListState::Loaded(tasks) => {
            assert_eq!(tasks.len(), 1);
            assert_eq!(tasks[0].description(), "Call mom");
        },
        other => panic!("unexpected list {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_server() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = LocalStore::new();
    store.set_mock_behaviour(Some(Arc::new(Mutex::new(MockBehaviour::fail_now(10)))));
    let mut app = CalendarApp::new(store, date("2024-03-15")).unwrap();
    app.start().await;
    assert_eq!(app.panel().rows(), vec![ListRow::Placeholder(Placeholder::Error)]);

    // The widget stays usable
    app.panel_mut().add_task("X").await;
    app.next_month().unwrap();
    assert_eq!(app.grid().title(), "April 2024");
    app.click_day(&date("2024-04-01")).await.unwrap();
    assert_eq!(app.panel().rows(), vec![ListRow::Placeholder(Placeholder::Error)]);
}

#[tokio::test]
async fn tasks_stay_on_their_day() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut app = app_on_march_20th(LocalStore::new()).await;
    app.panel_mut().add_task("On the 20th").await;

    app.click_day(&date("2024-03-21")).await.unwrap();
    assert_eq!(app.panel().rows(), vec![ListRow::Placeholder(Placeholder::NoTasks)]);

    app.click_day(&date("2024-03-20")).await.unwrap();
    assert_eq!(app.panel().rows().len(), 1);
}
