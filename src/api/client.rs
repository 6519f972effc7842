//! Read-only client for the employee and todo endpoints.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{Employee, Task};
use crate::{AppError, Result};

/// Thin wrapper around [`reqwest::Client`] bound to one service base URL.
///
/// Issues exactly the two reads the reporter needs, sequentially, with
/// no retries and no client-side timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the employee record keyed by `employee_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Http`] on transport failure or a non-success
    /// status, [`AppError::Decode`] if the payload lacks the expected
    /// fields.
    pub async fn fetch_employee(&self, employee_id: u64) -> Result<Employee> {
        let url = format!("{}/users/{employee_id}", self.base_url);
        self.get_json(&url).await
    }

    /// Fetch all tasks belonging to `employee_id`, in service order.
    ///
    /// The collection is filtered server-side via the `userId` query
    /// parameter; no client-side reordering or deduplication happens.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Http`] on transport failure or a non-success
    /// status, [`AppError::Decode`] if any element lacks the expected
    /// fields.
    pub async fn fetch_tasks(&self, employee_id: u64) -> Result<Vec<Task>> {
        let url = format!("{}/todos?userId={employee_id}", self.base_url);
        self.get_json(&url).await
    }

    /// Issue a GET and decode the JSON body into `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| AppError::Http(format!("request to {url} failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Http(format!("{url} returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|err| AppError::Http(format!("reading body from {url} failed: {err}")))?;
        Ok(serde_json::from_str(&body)?)
    }
}
