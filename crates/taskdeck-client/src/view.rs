// SPDX-License-Identifier: Apache-2.0

use taskdeck_api::{CreateTaskRequest, TaskPatch};
use tracing::warn;

use crate::api::TaskApi;
use crate::ports::{ConfirmPort, NotifyPort};
use crate::render;

/// Fetch-then-rerender view over the task API.
///
/// Every mutation round-trips to the server and then reloads the full
/// list; the rendered document is only considered consistent after that
/// reload. Failure handling mirrors the reference client: transport
/// failures raise a notification, while non-2xx responses are silently
/// swallowed (their JSON error bodies are never surfaced in these flows).
pub struct SyncView<C, N> {
    api: TaskApi,
    confirm: C,
    notify: N,
    title_input: String,
    description_input: String,
    document: String,
    count_label: String,
}

impl<C: ConfirmPort, N: NotifyPort> SyncView<C, N> {
    #[must_use]
    pub fn new(api: TaskApi, confirm: C, notify: N) -> Self {
        Self {
            api,
            confirm,
            notify,
            title_input: String::new(),
            description_input: String::new(),
            document: String::new(),
            count_label: String::new(),
        }
    }

    pub fn set_title_input(&mut self, value: &str) {
        self.title_input = value.to_string();
    }

    pub fn set_description_input(&mut self, value: &str) {
        self.description_input = value.to_string();
    }

    #[must_use]
    pub fn title_input(&self) -> &str {
        &self.title_input
    }

    #[must_use]
    pub fn description_input(&self) -> &str {
        &self.description_input
    }

    /// Rendered task list markup.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Count text from the last successful list response.
    #[must_use]
    pub fn count_label(&self) -> &str {
        &self.count_label
    }

    /// First paint: one fetch, no automatic retry on failure.
    pub async fn initial_load(&mut self) {
        self.load_tasks().await;
    }

    /// Submits the trimmed inputs. On HTTP success the inputs are cleared
    /// and the list reloaded; on any failure they stay untouched.
    pub async fn submit_new_task(&mut self) {
        let request = CreateTaskRequest {
            title: Some(self.title_input.trim().to_string()),
            description: Some(self.description_input.trim().to_string()),
        };
        match self.api.create(&request).await {
            Ok(status) if status.is_success() => {
                self.title_input.clear();
                self.description_input.clear();
                self.load_tasks().await;
            }
            Ok(_) => {}
            Err(error) => {
                warn!("create failed: {error}");
                self.notify.notify("Failed to add task. Please try again.");
            }
        }
    }

    /// Sends the inverse of the current completion flag for one task.
    pub async fn toggle_task(&mut self, id: u64, currently_completed: bool) {
        let patch = TaskPatch::set_completed(!currently_completed);
        match self.api.update(id, &patch).await {
            Ok(status) if status.is_success() => self.load_tasks().await,
            Ok(_) => {}
            Err(error) => {
                warn!("update failed: {error}");
                self.notify
                    .notify("Failed to update task. Please try again.");
            }
        }
    }

    /// Asks for confirmation first; a declined prompt sends nothing.
    pub async fn delete_task(&mut self, id: u64) {
        if !self
            .confirm
            .confirm("Are you sure you want to delete this task?")
        {
            return;
        }
        match self.api.delete(id).await {
            Ok(status) if status.is_success() => self.load_tasks().await,
            Ok(_) => {}
            Err(error) => {
                warn!("delete failed: {error}");
                self.notify
                    .notify("Failed to delete task. Please try again.");
            }
        }
    }

    async fn load_tasks(&mut self) {
        match self.api.list().await {
            Ok(list) if list.success => {
                self.document = render::render_tasks(&list.data);
                self.count_label = render::count_label(list.count);
            }
            Ok(_) => {}
            Err(error) => {
                warn!("load failed: {error}");
                self.document = render::LOAD_FAILED_HTML.to_string();
            }
        }
    }
}
