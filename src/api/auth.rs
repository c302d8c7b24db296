//! Session operations
//!
//! Login, signup, logout and session checks. These are the only operations
//! that change the session flag.

use tracing::{debug, info, warn};

use super::client::{decode_json, error_text, ApiClient};
use super::error::{ApiError, ApiResult};
use crate::models::{Credentials, LoadedUser};

impl ApiClient {
    /// Log in; on success the session flag is set
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        let url = self.url("/login");
        debug!(%url, username = %credentials.username, "POST login");

        let response = self.http.post(&url).json(credentials).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, username = %credentials.username, "Login rejected");
            return Err(ApiError::InvalidCredentials);
        }

        info!(username = %credentials.username, "Logged in");
        self.session().start();
        Ok(())
    }

    /// Create an account; on success the session flag is set
    ///
    /// A refusal carries the server's response text.
    pub async fn signup(&self, credentials: &Credentials) -> ApiResult<()> {
        let url = self.url("/signup");
        debug!(%url, username = %credentials.username, "POST signup");

        let response = self.http.post(&url).json(credentials).send().await?;
        if !response.status().is_success() {
            let (status, text) = error_text(response).await?;
            warn!(%status, username = %credentials.username, "Signup rejected");
            return Err(ApiError::Signup(text));
        }

        info!(username = %credentials.username, "Signed up");
        self.session().start();
        Ok(())
    }

    /// Log out and publish [`crate::session::SessionEvent::Ended`]
    ///
    /// The response status is ignored. A transport failure is returned and
    /// leaves the session flag as it was.
    pub async fn logout(&self) -> ApiResult<()> {
        let url = self.url("/logout");
        debug!(%url, "POST logout");

        let response = self.http.post(&url).send().await?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "Ignoring logout status");
        }

        info!("Logged out");
        self.session().end();
        Ok(())
    }

    /// Refresh the session flag from the server and return it
    ///
    /// Never fails; a transport error counts as logged out.
    pub async fn check_login(&self) -> bool {
        let url = self.url("/me");
        debug!(%url, "GET me");

        let logged_in = match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(error = %e, "Session check failed");
                false
            }
        };

        self.session().set_logged_in(logged_in);
        logged_in
    }

    /// Load the current user; `user` is `None` when there is no session
    pub async fn load_user(&self) -> ApiResult<LoadedUser> {
        let url = self.url("/me");
        debug!(%url, "GET me");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "No active session");
            return Ok(LoadedUser { user: None });
        }

        Ok(LoadedUser {
            user: Some(decode_json(response).await?),
        })
    }
}
