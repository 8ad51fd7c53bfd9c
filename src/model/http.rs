/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::responses::TransferApiMessage;
use reqwest::Client as HttpInternalClient;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

/// Simplified client for the Globus Transfer API with automatic authentication
///
/// This client handles all authentication complexity internally, including:
/// - Initial token acquisition from Globus Auth
/// - Token refresh before expiry
/// - Re-authentication when the Transfer API rejects an expired token
/// - Rate limiting for all API requests
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: HttpInternalClient,
    config: Arc<Config>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl HttpClient {
    /// Creates a new client and performs the initial token acquisition
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the token grant fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config);
        client.auth.refresh_token().await?;
        Ok(client)
    }

    /// Creates a new client without acquiring a token up front.
    ///
    /// The first request triggers the token grant.
    pub fn new_lazy(config: Config) -> Self {
        let config = Arc::new(config);

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.transfer_api.timeout))
            .build()
            .expect("Failed to create HTTP client");
        let rate_limiter = Arc::new(RwLock::new(RateLimiter::new(&config.rate_limiter)));

        let auth = Arc::new(Auth::new(config.clone()));

        Self {
            auth,
            http_client,
            config,
            rate_limiter,
        }
    }

    /// Makes a GET request and deserializes the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<()>).await
    }

    /// Makes a GET request and returns the raw response body
    pub async fn get_raw(&self, path: &str) -> Result<String, AppError> {
        let response = self
            .request_response(Method::GET, path, &None::<()>)
            .await?;
        Ok(response.text().await?)
    }

    /// Makes a POST request and deserializes the JSON response
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a request and deserializes the JSON response
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, AppError> {
        let response = self.request_response(method, path, &body).await?;
        self.parse_response(response).await
    }

    /// Makes a request, refreshing the access token and replaying once if
    /// the Transfer API rejects it as expired
    pub async fn request_response<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &Option<B>,
    ) -> Result<Response, AppError> {
        match self.request_internal(method.clone(), path, body).await {
            Ok(response) => Ok(response),
            Err(AppError::OAuthTokenExpired) => {
                warn!("Access token expired, refreshing and retrying");
                self.auth.refresh_token().await?;
                self.request_internal(method, path, body).await
            }
            Err(e) => Err(e),
        }
    }

    /// Internal method to make HTTP requests
    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &Option<B>,
    ) -> Result<Response, AppError> {
        let session = self.auth.get_session().await?;

        let url = if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!(
                "{}/{}",
                self.config.transfer_api.base_url.trim_end_matches('/'),
                path
            )
        };

        let auth_header_value = session.bearer();

        let headers = vec![
            ("Authorization", auth_header_value.as_str()),
            ("Accept", "application/json"),
            ("Content-Type", "application/json"),
        ];

        make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            method,
            &url,
            headers,
            body,
        )
        .await
    }

    /// Parses response
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        Ok(response.json().await?)
    }

    /// Gets the current session
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.auth.get_session().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration this client was built with
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        let config = Config::default();
        Self::new_lazy(config)
    }
}

/// Makes an HTTP request with rate limiting and maps Transfer API statuses.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared rate limiter to control request rate
/// * `method` - HTTP method (GET, POST, PUT, DELETE, etc.)
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional request body (will be serialized to JSON)
///
/// # Returns
///
/// * `Ok(Response)` - Successful (2xx) HTTP response
/// * `Err(AppError)` - Mapped error for any other status:
///   401 with an `AuthenticationFailed` body becomes
///   [`AppError::OAuthTokenExpired`] so the caller can refresh and replay,
///   404 becomes [`AppError::NotFound`], 429 becomes
///   [`AppError::RateLimitExceeded`], everything else
///   [`AppError::Unexpected`]
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: &Option<B>,
) -> Result<Response, AppError> {
    // Wait for rate limiter before making request
    {
        let limiter = rate_limiter.read().await;
        limiter.wait().await;
    }

    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => {
            let body_text = response.text().await.unwrap_or_default();
            if body_text.contains("AuthenticationFailed") {
                return Err(AppError::OAuthTokenExpired);
            }
            error!("Unauthorized: {}", body_text);
            Err(AppError::Unauthorized)
        }
        StatusCode::NOT_FOUND => {
            let body_text = response.text().await.unwrap_or_default();
            debug!("Not found: {}", body_text);
            Err(AppError::NotFound)
        }
        StatusCode::TOO_MANY_REQUESTS => {
            let body_text = response.text().await.unwrap_or_default();
            error!("Rate limit exceeded: {}", body_text);
            Err(AppError::RateLimitExceeded)
        }
        _ => {
            let body_text = response.text().await.unwrap_or_default();
            match serde_json::from_str::<TransferApiMessage>(&body_text) {
                Ok(msg) => error!(
                    "Request failed with status {}: {} ({})",
                    status, msg.message, msg.code
                ),
                Err(_) => error!("Request failed with status {}: {}", status, body_text),
            }
            Err(AppError::Unexpected(status))
        }
    }
}
