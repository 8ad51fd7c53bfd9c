/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/

//! Authentication module for the Globus Transfer API
//!
//! This module exchanges the configured refresh token for bearer access
//! tokens at the Globus Auth token endpoint and keeps the active session
//! fresh:
//! - Initial token acquisition on first use
//! - Proactive refresh before the token reaches its expiry margin
//! - Re-authentication when the Transfer API rejects a token

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::auth::TokenResponse;
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Session information for authenticated requests
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer access token for the Transfer API
    pub access_token: String,
    /// Resource server the token is valid for
    pub resource_server: String,
    /// Scopes granted to the token
    pub scope: String,
    /// Token type (typically "Bearer")
    pub token_type: String,
    /// Unix timestamp when the session expires (seconds since epoch)
    pub expires_at: u64,
}

impl Session {
    /// Checks if the session is expired or will expire soon
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds (default: 60 = 1 minute)
    ///
    /// # Returns
    /// * `true` if the session is expired or will expire within the margin
    /// * `false` if the session is still valid
    #[must_use]
    pub fn is_expired(&self, margin_seconds: Option<u64>) -> bool {
        let margin = margin_seconds.unwrap_or(60);
        let now = Utc::now().timestamp() as u64;
        now >= self.expires_at.saturating_sub(margin)
    }

    /// Gets the number of seconds until the session expires
    ///
    /// # Returns
    /// * Zero if the session is already expired
    #[must_use]
    pub fn seconds_until_expiry(&self) -> u64 {
        self.expires_at
            .saturating_sub(Utc::now().timestamp() as u64)
    }

    /// Checks if the access token needs refresh (alias for is_expired)
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds (default: 60 = 1 minute)
    #[must_use]
    pub fn needs_token_refresh(&self, margin_seconds: Option<u64>) -> bool {
        self.is_expired(margin_seconds)
    }

    /// Value for the `Authorization` header
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl From<TokenResponse> for Session {
    fn from(token: TokenResponse) -> Self {
        Session {
            expires_at: token.expire_at(1),
            access_token: token.access_token,
            resource_server: token.resource_server,
            scope: token.scope,
            token_type: token.token_type,
        }
    }
}

/// Authentication manager for the Globus Transfer API
///
/// Handles the bearer token lifecycle:
/// - Token grants against the Globus Auth token endpoint
/// - Proactive refresh inside `get_session`
/// - Session invalidation
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Arc<Config>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.auth_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            client,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the current session, ensuring the token is valid
    ///
    /// Refreshes the token when no session is held yet or when the held one
    /// is within the configured expiry margin.
    ///
    /// # Returns
    /// * `Ok(Session)` - Valid session with a fresh token
    /// * `Err(AppError)` - If the token grant fails
    pub async fn get_session(&self) -> Result<Session, AppError> {
        let margin = self.config.token_refresh_margin_secs;
        let session = self.session.read().await;

        if let Some(sess) = session.as_ref() {
            if sess.needs_token_refresh(Some(margin)) {
                drop(session); // Release read lock
                debug!("Access token needs refresh");
                return self.refresh_token().await;
            }
            return Ok(sess.clone());
        }

        drop(session);

        info!("No active session, requesting access token");
        self.refresh_token().await
    }

    /// Exchanges the configured refresh token for a new access token
    ///
    /// # Returns
    /// * `Ok(Session)` - New session with a fresh token
    /// * `Err(AppError)` - If Globus Auth rejects the grant
    pub async fn refresh_token(&self) -> Result<Session, AppError> {
        let url = &self.config.auth_api.token_url;

        debug!("Token grant request to: {}", url);

        let params = [
            ("grant_type", "refresh_token"),
            (
                "refresh_token",
                self.config.credentials.refresh_token.as_str(),
            ),
        ];

        let response = self
            .client
            .post(url)
            .basic_auth(
                &self.config.credentials.client_id,
                Some(&self.config.credentials.client_secret),
            )
            .header("Accept", "application/json")
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        debug!("Token grant response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Token grant failed with status {}: {}", status, body);
            return if status == reqwest::StatusCode::UNAUTHORIZED {
                Err(AppError::Unauthorized)
            } else {
                Err(AppError::Unexpected(status))
            };
        }

        let token: TokenResponse = response.json().await?;
        let session = Session::from(token);

        let mut sess = self.session.write().await;
        *sess = Some(session.clone());

        info!(
            "✓ Access token obtained for {}, expires in {}s",
            session.resource_server,
            session.seconds_until_expiry()
        );
        Ok(session)
    }

    /// Drops the held session so the next call re-authenticates
    pub async fn invalidate(&self) {
        let mut session = self.session.write().await;
        *session = None;

        info!("✓ Session invalidated");
    }
}
