/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token grant response from the Globus Auth token endpoint.
///
/// Returned by both the initial `refresh_token` grant and subsequent
/// refreshes. `created_at` is stamped locally when the response is
/// deserialized and drives all expiry calculations.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Bearer access token for the resource server
    pub access_token: String,
    /// Resource server this token is valid for (e.g. `transfer.api.globus.org`)
    pub resource_server: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
    /// Token type (typically "Bearer")
    pub token_type: String,
    /// Space-separated scopes granted to the token
    pub scope: String,
    /// Rotated refresh token, when Globus Auth issues one
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Timestamp when this token was received (for expiry calculation)
    #[serde(skip, default = "chrono::Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl TokenResponse {
    /// Checks if the access token is expired or will expire soon
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds before actual expiry
    ///
    /// # Returns
    /// `true` if the token is expired or will expire within the margin, `false` otherwise
    pub fn is_expired(&self, margin_seconds: u64) -> bool {
        let expiry_time = self.created_at + chrono::Duration::seconds(self.expires_in as i64);
        let now = Utc::now();
        let margin = chrono::Duration::seconds(margin_seconds as i64);

        expiry_time - margin <= now
    }

    /// Returns the Unix timestamp when the token expires (considering the margin)
    ///
    /// # Arguments
    /// * `margin_seconds` - Safety margin in seconds before actual expiry
    ///
    /// # Returns
    /// Unix timestamp (seconds since epoch) when the token should be considered expired
    pub fn expire_at(&self, margin_seconds: i64) -> u64 {
        let expiry_time = self.created_at + chrono::Duration::seconds(self.expires_in as i64);
        let margin = chrono::Duration::seconds(margin_seconds);

        let effective_expiry = expiry_time - margin;

        effective_expiry.timestamp() as u64
    }
}
