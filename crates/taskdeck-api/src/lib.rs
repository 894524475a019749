#![forbid(unsafe_code)]

pub mod dto;
pub mod errors;
pub mod params;
pub mod responses;

pub use dto::{CreateTaskRequest, TaskDto, TaskPatch};
pub use errors::{ApiErrorCode, ErrorResponse};
pub use params::TaskIdParam;
pub use responses::{MessageResponse, TaskListResponse, TaskResponse};

pub const CRATE_NAME: &str = "taskdeck-api";

/// Base path of the task resource; item routes append `/{id}`.
pub const TASKS_BASE_PATH: &str = "/api/tasks";
