use crate::constants::{
    DEFAULT_AUTH_TOKEN_URL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_TOKEN_REFRESH_MARGIN_SECS,
    DEFAULT_TRANSFER_BASE_URL,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for Globus Auth
pub struct Credentials {
    /// Confidential client id registered with Globus Auth
    pub client_id: String,
    /// Client secret for the registered application
    pub client_secret: String,
    /// Long-lived refresh token with the transfer scope
    pub refresh_token: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Globus Transfer API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// Transfer REST API configuration
    pub transfer_api: TransferApiConfig,
    /// Globus Auth token endpoint configuration
    pub auth_api: AuthApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Identifier of the endpoint directories are provisioned on
    pub endpoint_id: String,
    /// Seconds before token expiry at which a refresh is triggered
    pub token_refresh_margin_secs: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the Transfer REST API
pub struct TransferApiConfig {
    /// Base URL for the Globus Transfer REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the Globus Auth token endpoint
pub struct AuthApiConfig {
    /// Token endpoint URL
    pub token_url: String,
    /// Timeout in seconds for token requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from the environment
    ///
    /// Loads a `.env` file when present and reads the `GLOBUS_*` variables,
    /// falling back to documented defaults. Missing credentials are logged
    /// as errors so misconfiguration shows up before the first request
    /// fails.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_or_default("GLOBUS_CLIENT_ID", String::from("default_client_id"));
        let client_secret =
            get_env_or_default("GLOBUS_CLIENT_SECRET", String::from("default_client_secret"));
        let refresh_token =
            get_env_or_default("GLOBUS_REFRESH_TOKEN", String::from("default_refresh_token"));
        let endpoint_id =
            get_env_or_default("GLOBUS_ENDPOINT_ID", String::from("default_endpoint_id"));

        // Check if we are using default values
        if client_id == "default_client_id" {
            error!("GLOBUS_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret == "default_client_secret" {
            error!("GLOBUS_CLIENT_SECRET not found in environment variables or .env file");
        }
        if refresh_token == "default_refresh_token" {
            error!("GLOBUS_REFRESH_TOKEN not found in environment variables or .env file");
        }
        if endpoint_id == "default_endpoint_id" {
            error!("GLOBUS_ENDPOINT_ID not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
                refresh_token,
            },
            transfer_api: TransferApiConfig {
                base_url: get_env_or_default(
                    "GLOBUS_TRANSFER_BASE_URL",
                    String::from(DEFAULT_TRANSFER_BASE_URL),
                ),
                timeout: get_env_or_default("GLOBUS_TRANSFER_TIMEOUT", DEFAULT_REQUEST_TIMEOUT),
            },
            auth_api: AuthApiConfig {
                token_url: get_env_or_default(
                    "GLOBUS_AUTH_TOKEN_URL",
                    String::from(DEFAULT_AUTH_TOKEN_URL),
                ),
                timeout: get_env_or_default("GLOBUS_AUTH_TIMEOUT", DEFAULT_REQUEST_TIMEOUT),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default("GLOBUS_RATE_LIMIT_MAX_REQUESTS", 50),
                period_seconds: get_env_or_default("GLOBUS_RATE_LIMIT_PERIOD_SECONDS", 60),
                burst_size: get_env_or_default("GLOBUS_RATE_LIMIT_BURST_SIZE", 20),
            },
            endpoint_id,
            token_refresh_margin_secs: get_env_or_default(
                "GLOBUS_TOKEN_REFRESH_MARGIN_SECS",
                DEFAULT_TOKEN_REFRESH_MARGIN_SECS,
            ),
        }
    }
}
