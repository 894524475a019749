#![forbid(unsafe_code)]

//! Task store and REST controller.
//!
//! The store is injected into [`AppState`] at construction time, so tests
//! can run against isolated collections instead of a process-wide global.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::cors::CorsLayer;

mod config;
mod http;
mod store;

pub use config::{ServerConfig, validate_startup_config};
pub use store::TaskStore;

pub const CRATE_NAME: &str = "taskdeck-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TaskStore>,
    pub config: ServerConfig,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self::with_config(store, ServerConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<TaskStore>, config: ServerConfig) -> Self {
        Self { store, config }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::assets::index_handler))
        .route("/app.js", get(http::assets::app_js_handler))
        .route("/styles.css", get(http::assets::styles_handler))
        .route(
            "/api/tasks",
            get(http::handlers::list_tasks_handler).post(http::handlers::create_task_handler),
        )
        .route(
            "/api/tasks/{id}",
            get(http::handlers::get_task_handler)
                .put(http::handlers::update_task_handler)
                .delete(http::handlers::delete_task_handler),
        )
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .with_state(state)
}
