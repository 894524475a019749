// SPDX-License-Identifier: Apache-2.0

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use taskdeck_api::{
    ApiErrorCode, CreateTaskRequest, ErrorResponse, MessageResponse, TaskIdParam, TaskListResponse,
    TaskPatch, TaskResponse,
};
use tracing::info;

use crate::AppState;

#[must_use]
pub(crate) const fn api_error_status(code: ApiErrorCode) -> StatusCode {
    match code {
        ApiErrorCode::TitleRequired => StatusCode::BAD_REQUEST,
        ApiErrorCode::TaskNotFound => StatusCode::NOT_FOUND,
    }
}

#[must_use]
pub(crate) fn api_error_response(code: ApiErrorCode) -> Response {
    (api_error_status(code), Json(ErrorResponse::from_code(code))).into_response()
}

pub(crate) async fn list_tasks_handler(State(state): State<AppState>) -> impl IntoResponse {
    let data = state.store.list().await;
    info!(route = "/api/tasks", count = data.len(), "list tasks");
    Json(TaskListResponse {
        success: true,
        count: data.len(),
        data,
    })
}

pub(crate) async fn get_task_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = TaskIdParam::parse(&raw_id).as_valid() else {
        return api_error_response(ApiErrorCode::TaskNotFound);
    };
    match state.store.get(id).await {
        Some(task) => Json(TaskResponse::ok(task)).into_response(),
        None => api_error_response(ApiErrorCode::TaskNotFound),
    }
}

pub(crate) async fn create_task_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> Response {
    // JS-truthiness rule: absent and empty titles are rejected, a
    // whitespace-only title is not.
    let title = request.title.unwrap_or_default();
    if title.is_empty() {
        return api_error_response(ApiErrorCode::TitleRequired);
    }
    let task = state
        .store
        .create(title, request.description.unwrap_or_default())
        .await;
    info!(route = "/api/tasks", id = task.id, "task created");
    (StatusCode::CREATED, Json(TaskResponse::ok(task))).into_response()
}

pub(crate) async fn update_task_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Response {
    let Some(id) = TaskIdParam::parse(&raw_id).as_valid() else {
        return api_error_response(ApiErrorCode::TaskNotFound);
    };
    match state.store.update(id, &patch).await {
        Some(task) => {
            info!(route = "/api/tasks/{id}", id, "task updated");
            Json(TaskResponse::ok(task)).into_response()
        }
        None => api_error_response(ApiErrorCode::TaskNotFound),
    }
}

pub(crate) async fn delete_task_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = TaskIdParam::parse(&raw_id).as_valid() else {
        return api_error_response(ApiErrorCode::TaskNotFound);
    };
    if state.store.remove(id).await {
        info!(route = "/api/tasks/{id}", id, "task deleted");
        Json(MessageResponse::deleted()).into_response()
    } else {
        api_error_response(ApiErrorCode::TaskNotFound)
    }
}
