//! Mass record operations

use tracing::{debug, warn};

use super::client::{decode_json, ApiClient};
use super::error::{ApiError, ApiResult};
use crate::models::{ImportDocument, Mass, NewMass};

impl ApiClient {
    /// List the user's masses in the order the server returns them
    pub async fn list_masses(&self) -> ApiResult<Vec<Mass>> {
        let url = self.url("/masses");
        debug!(%url, "GET masses");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Failed to fetch masses");
            return Err(ApiError::FetchMasses { status });
        }

        decode_json(response).await
    }

    /// Create a mass; timestamps in `payload` are sent as UTC instants
    pub async fn create_mass(&self, payload: &NewMass) -> ApiResult<Mass> {
        let body = payload.normalized()?;
        let url = self.url("/masses");
        debug!(%url, mass_kg = body.mass_kg, "POST mass");

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Failed to create mass");
            return Err(ApiError::CreateMass { status });
        }

        decode_json(response).await
    }

    /// Fetch one mass by id
    ///
    /// In lenient mode the status is not checked and an error body surfaces
    /// as [`ApiError::Decode`].
    pub async fn get_mass(&self, id: i64) -> ApiResult<Mass> {
        let url = self.url(&format!("/masses/{}", id));
        debug!(%url, "GET mass");

        let response = self.http.get(&url).send().await?;
        self.check_status(&response, "get mass")?;
        decode_json(response).await
    }

    /// Replace a mass's value and measurement time
    pub async fn update_mass(&self, id: i64, payload: &NewMass) -> ApiResult<()> {
        let body = payload.normalized()?;
        let url = self.url(&format!("/masses/{}", id));
        debug!(%url, mass_kg = body.mass_kg, "PUT mass");

        let response = self.http.put(&url).json(&body).send().await?;
        self.check_status(&response, "update mass")
    }

    pub async fn delete_mass(&self, id: i64) -> ApiResult<()> {
        let url = self.url(&format!("/masses/{}", id));
        debug!(%url, "DELETE mass");

        let response = self.http.delete(&url).send().await?;
        self.check_status(&response, "delete mass")
    }

    /// Export every mass as a document `/import` accepts
    pub async fn export_user_data(&self) -> ApiResult<ImportDocument> {
        let masses = self.list_masses().await?;
        debug!(count = masses.len(), "Exporting masses");
        Ok(ImportDocument::from_masses(&masses))
    }
}
