// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// The two failure cases the controller reports through the envelope.
/// Everything else (malformed JSON, oversized bodies) is handled by the
/// framework layer before a handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    TitleRequired,
    TaskNotFound,
}

impl ApiErrorCode {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TitleRequired => "Title is required",
            Self::TaskNotFound => "Task not found",
        }
    }
}

/// Error half of the uniform envelope: `{"success":false,"error":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn from_code(code: ApiErrorCode) -> Self {
        Self {
            success: false,
            error: code.message().to_string(),
        }
    }
}
