// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use reqwest::{Client, StatusCode};
use taskdeck_api::{
    CreateTaskRequest, TASKS_BASE_PATH, TaskDto, TaskListResponse, TaskPatch, TaskResponse,
};
use thiserror::Error;

/// Network or decode failure: the request never produced a usable HTTP
/// response. Non-2xx responses are not transport errors; callers decide
/// what to do with their status.
#[derive(Debug, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(#[from] reqwest::Error);

/// Thin wrapper over the five task endpoints.
pub struct TaskApi {
    http: Client,
    base_url: String,
}

impl TaskApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, TASKS_BASE_PATH)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{id}", self.collection_url())
    }

    pub async fn list(&self) -> Result<TaskListResponse, TransportError> {
        Ok(self
            .http
            .get(self.collection_url())
            .send()
            .await?
            .json()
            .await?)
    }

    pub async fn get(&self, id: u64) -> Result<Option<TaskDto>, TransportError> {
        let response = self.http.get(self.item_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: TaskResponse = response.json().await?;
        Ok(Some(body.data))
    }

    pub async fn create(&self, request: &CreateTaskRequest) -> Result<StatusCode, TransportError> {
        Ok(self
            .http
            .post(self.collection_url())
            .json(request)
            .send()
            .await?
            .status())
    }

    pub async fn update(&self, id: u64, patch: &TaskPatch) -> Result<StatusCode, TransportError> {
        Ok(self
            .http
            .put(self.item_url(id))
            .json(patch)
            .send()
            .await?
            .status())
    }

    pub async fn delete(&self, id: u64) -> Result<StatusCode, TransportError> {
        Ok(self.http.delete(self.item_url(id)).send().await?.status())
    }
}
