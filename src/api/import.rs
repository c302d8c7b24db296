//! User data import

use tracing::debug;

use super::client::{error_text, ApiClient};
use super::error::{ApiError, ApiResult};
use super::notice::Notice;
use crate::models::{ImportDocument, ImportOutcome};

impl ApiClient {
    /// Parse `json_text` and send it to `/import`
    ///
    /// Malformed JSON fails with [`ApiError::InvalidImport`] before any
    /// request is made. Otherwise the outcome is both announced through the
    /// notifier and returned.
    pub async fn import_user_data(&self, json_text: &str) -> ApiResult<ImportOutcome> {
        let document = ImportDocument::parse(json_text).map_err(ApiError::InvalidImport)?;
        self.import_document(&document).await
    }

    /// Send an already parsed document to `/import`
    pub async fn import_document(&self, document: &ImportDocument) -> ApiResult<ImportOutcome> {
        let url = self.url("/import");
        debug!(%url, "POST import");

        let response = self.http.post(&url).json(document.as_value()).send().await?;
        if response.status().is_success() {
            self.notify(Notice::ImportSucceeded);
            return Ok(ImportOutcome::Imported);
        }

        let (status, message) = error_text(response).await?;
        self.notify(Notice::ImportFailed(message.clone()));
        Ok(ImportOutcome::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
