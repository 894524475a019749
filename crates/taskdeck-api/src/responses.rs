// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::dto::TaskDto;

/// `GET /api/tasks` envelope. `count` is authoritative: the client shows it
/// verbatim instead of recounting `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<TaskDto>,
}

/// Single-task envelope used by get-one, create, and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskResponse {
    pub success: bool,
    pub data: TaskDto,
}

impl TaskResponse {
    #[must_use]
    pub const fn ok(data: TaskDto) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Delete acknowledgement: `{"success":true,"message":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn deleted() -> Self {
        Self {
            success: true,
            message: "Task deleted successfully".to_string(),
        }
    }
}
