//! HTTP client core
//!
//! Owns the `reqwest` client (with a cookie store, so the session cookie from
//! login is sent on every later request) and the injected session state.

use std::sync::Arc;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use super::error::{ApiError, ApiResult};
use super::notice::{LogNotifier, Notice, Notifier};
use crate::build_info::BuildInfo;
use crate::config::ClientConfig;
use crate::session::SessionState;

/// Client for the mass tracking API
///
/// Each operation issues exactly one request and never retries. Clones share
/// the cookie jar and session state.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    base: String,
    pub(crate) lenient_status: bool,
    session: SessionState,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Build a client for `config`, reporting into `session`
    pub fn new(config: &ClientConfig, session: SessionState) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(BuildInfo::current().user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base: config.base_url.as_str().trim_end_matches('/').to_string(),
            lenient_status: config.lenient_status,
            session,
            notifier: Arc::new(LogNotifier),
        })
    }

    /// Replace the notifier used for import announcements
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Absolute URL for an endpoint path such as `/masses`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub(crate) fn notify(&self, notice: Notice) {
        self.notifier.notify(&notice);
    }

    /// Fail with [`ApiError::Status`] unless the response is 2xx or the
    /// client runs in lenient mode
    pub(crate) fn check_status(&self, response: &Response, operation: &'static str) -> ApiResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if self.lenient_status {
            warn!(operation, %status, "Ignoring non-success status");
            return Ok(());
        }
        warn!(operation, %status, "Request rejected");
        Err(ApiError::Status { operation, status })
    }
}

/// Read the body and decode it as JSON
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(ApiError::Decode)
}

/// Body text of a failed response, for messages surfaced to the user
pub(crate) async fn error_text(response: Response) -> ApiResult<(StatusCode, String)> {
    let status = response.status();
    let text = response.text().await?;
    Ok((status, text))
}
