// SPDX-License-Identifier: Apache-2.0

//! Full round trip: the sync view driving a real in-process server.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use taskdeck_client::{ConfirmPort, NotifyPort, SyncView, TaskApi};
use taskdeck_server::{AppState, TaskStore, build_router};

#[derive(Clone, Default)]
struct RecordingNotify(Arc<Mutex<Vec<String>>>);

impl NotifyPort for RecordingNotify {
    fn notify(&self, message: &str) {
        self.0.lock().expect("notify lock").push(message.to_string());
    }
}

impl RecordingNotify {
    fn messages(&self) -> Vec<String> {
        self.0.lock().expect("notify lock").clone()
    }
}

#[derive(Clone)]
struct SwitchableConfirm(Arc<AtomicBool>);

impl ConfirmPort for SwitchableConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

async fn spawn_server() -> std::net::SocketAddr {
    let app = build_router(AppState::new(Arc::new(TaskStore::seeded())));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

fn view_for(
    addr: std::net::SocketAddr,
) -> (
    SyncView<SwitchableConfirm, RecordingNotify>,
    Arc<AtomicBool>,
    RecordingNotify,
) {
    let api = TaskApi::new(format!("http://{addr}")).expect("client");
    let decision = Arc::new(AtomicBool::new(true));
    let notify = RecordingNotify::default();
    let view = SyncView::new(api, SwitchableConfirm(decision.clone()), notify.clone());
    (view, decision, notify)
}

#[tokio::test]
async fn initial_load_renders_the_seeded_list_and_count() {
    let addr = spawn_server().await;
    let (mut view, _, notify) = view_for(addr);

    view.initial_load().await;

    assert_eq!(view.count_label(), "3 tasks");
    assert!(view.document().contains("Learn REST API basics"));
    assert!(view.document().contains("Apply for jobs"));
    // The seed's first task is completed, so its toggle offers Undo.
    assert!(view.document().contains(">Undo<"));
    assert!(notify.messages().is_empty());
}

#[tokio::test]
async fn submitting_a_task_trims_inputs_clears_them_and_reloads() {
    let addr = spawn_server().await;
    let (mut view, _, _) = view_for(addr);
    view.initial_load().await;

    view.set_title_input("  Write tests  ");
    view.set_description_input("  cover the CRUD paths  ");
    view.submit_new_task().await;

    assert_eq!(view.title_input(), "");
    assert_eq!(view.description_input(), "");
    assert_eq!(view.count_label(), "4 tasks");
    assert!(view.document().contains("Write tests"));
    assert!(view.document().contains("cover the CRUD paths"));
}

#[tokio::test]
async fn rejected_create_leaves_inputs_untouched_and_raises_no_alert() {
    let addr = spawn_server().await;
    let (mut view, _, notify) = view_for(addr);
    view.initial_load().await;

    // Whitespace trims down to an empty title, which the server rejects
    // with 400; the view swallows the HTTP failure silently.
    view.set_title_input("   ");
    view.set_description_input("left alone");
    view.submit_new_task().await;

    assert_eq!(view.title_input(), "   ");
    assert_eq!(view.description_input(), "left alone");
    assert_eq!(view.count_label(), "3 tasks");
    assert!(notify.messages().is_empty());
}

#[tokio::test]
async fn toggling_flips_the_button_label_after_reload() {
    let addr = spawn_server().await;
    let (mut view, _, _) = view_for(addr);
    view.initial_load().await;

    view.toggle_task(2, false).await;

    let undo_buttons = view.document().matches(">Undo<").count();
    assert_eq!(undo_buttons, 2, "tasks 1 and 2 are now completed");

    view.toggle_task(2, true).await;
    assert_eq!(view.document().matches(">Undo<").count(), 1);
}

#[tokio::test]
async fn delete_requires_confirmation_before_any_request() {
    let addr = spawn_server().await;
    let (mut view, decision, notify) = view_for(addr);
    view.initial_load().await;

    decision.store(false, Ordering::Relaxed);
    view.delete_task(2).await;
    assert_eq!(view.count_label(), "3 tasks", "declined prompt sends nothing");

    decision.store(true, Ordering::Relaxed);
    view.delete_task(2).await;
    assert_eq!(view.count_label(), "2 tasks");
    assert!(!view.document().contains("Build a portfolio project"));
    assert!(notify.messages().is_empty());
}

#[tokio::test]
async fn deleting_a_missing_id_is_a_silent_no_op() {
    let addr = spawn_server().await;
    let (mut view, _, notify) = view_for(addr);
    view.initial_load().await;

    view.delete_task(99).await;

    assert_eq!(view.count_label(), "3 tasks");
    assert!(notify.messages().is_empty(), "404 bodies are swallowed");
}

#[tokio::test]
async fn transport_failures_alert_and_render_the_failure_placeholder() {
    // Nothing is listening on this address.
    let unreachable = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind probe listener");
        listener.local_addr().expect("local addr")
    };
    let api = TaskApi::new(format!("http://{unreachable}")).expect("client");
    let notify = RecordingNotify::default();
    let decision = Arc::new(AtomicBool::new(true));
    let mut view = SyncView::new(api, SwitchableConfirm(decision), notify.clone());

    view.initial_load().await;
    assert!(view.document().contains("Failed to load tasks"));
    assert!(notify.messages().is_empty(), "load failures render, not alert");

    view.set_title_input("unreachable");
    view.submit_new_task().await;
    assert_eq!(view.title_input(), "unreachable", "inputs survive the failure");

    view.toggle_task(1, false).await;
    view.delete_task(1).await;

    assert_eq!(
        notify.messages(),
        vec![
            "Failed to add task. Please try again.".to_string(),
            "Failed to update task. Please try again.".to_string(),
            "Failed to delete task. Please try again.".to_string(),
        ]
    );
}

#[tokio::test]
async fn client_get_distinguishes_found_from_missing() {
    let addr = spawn_server().await;
    let api = TaskApi::new(format!("http://{addr}")).expect("client");

    let task = api.get(1).await.expect("transport ok").expect("task 1 exists");
    assert_eq!(task.title, "Learn REST API basics");
    assert!(api.get(99).await.expect("transport ok").is_none());
}
