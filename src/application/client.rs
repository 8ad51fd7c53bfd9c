/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::transfer::TransferService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::MkdirRequest;
use crate::model::responses::{FileListResponse, MkdirResponse};
use crate::utils::path::{absolute, cumulative_prefixes};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, error, info};

/// High-level client for provisioning submission directories on a Globus
/// endpoint
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from the environment configuration.
    ///
    /// Authentication happens on the first request.
    pub fn new() -> Self {
        Self {
            http_client: Arc::new(HttpClient::default()),
        }
    }

    /// Creates a client from an explicit configuration, deferring
    /// authentication to the first request
    pub fn from_config(config: Config) -> Self {
        Self {
            http_client: Arc::new(HttpClient::new_lazy(config)),
        }
    }

    /// Creates a client from an explicit configuration and authenticates
    /// eagerly
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        Ok(Self {
            http_client: Arc::new(HttpClient::new(config).await?),
        })
    }

    /// Path of a Transfer operation on the configured endpoint
    fn endpoint_operation(&self, operation: &str) -> String {
        format!(
            "operation/endpoint/{}/{}",
            self.http_client.config().endpoint_id,
            operation
        )
    }

    /// Path of an `ls` call for the given directory
    fn ls_operation(&self, directory: &str) -> String {
        format!("{}?path={}", self.endpoint_operation("ls"), absolute(directory))
    }

    /// Creates a single directory unless it already exists.
    ///
    /// A `mkdir` the API answers with a non-2xx status (including
    /// "already exists" collisions) is logged and swallowed so the caller
    /// can continue with the rest of the chain.
    async fn create_directory(&self, directory: &str) -> Result<(), AppError> {
        if self.directory_exists(directory).await? {
            debug!("Directory '{}' already exists", directory);
            return Ok(());
        }

        let path = self.endpoint_operation("mkdir");
        let body = MkdirRequest::new(directory);

        match self.http_client.post::<_, MkdirResponse>(&path, body).await {
            Ok(result) => {
                info!("Directory '{}' created successfully: {}", directory, result.code);
                Ok(())
            }
            Err(AppError::Unexpected(status)) => {
                error!("Failed to create directory '{}': {}", directory, status);
                Ok(())
            }
            Err(e @ (AppError::NotFound | AppError::RateLimitExceeded)) => {
                error!("Failed to create directory '{}': {}", directory, e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransferService for Client {
    async fn create_submission_directory(&self, directory: &str) -> Result<(), AppError> {
        let prefixes = cumulative_prefixes(directory);
        if prefixes.is_empty() {
            debug!("No path segments in '{}', nothing to provision", directory);
            return Ok(());
        }

        info!("Provisioning directory chain for '{}'", directory);
        for prefix in &prefixes {
            self.create_directory(prefix).await?;
        }

        Ok(())
    }

    async fn directory_exists(&self, directory: &str) -> Result<bool, AppError> {
        let path = self.ls_operation(directory);

        match self
            .http_client
            .request_response(Method::GET, &path, &None::<()>)
            .await
        {
            Ok(_) => Ok(true),
            Err(AppError::NotFound) => Ok(false),
            Err(AppError::Unexpected(status)) if status.is_client_error() => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn list_submitted_files(&self, directory: &str) -> Result<String, AppError> {
        let path = self.ls_operation(directory);

        match self.http_client.get_raw(&path).await {
            Ok(body) => {
                info!("Directory {} listed successfully", directory);
                Ok(body)
            }
            Err(AppError::Unexpected(status)) => {
                error!("Failed to retrieve directory '{}': {}", directory, status);
                Ok(String::new())
            }
            Err(e @ (AppError::NotFound | AppError::RateLimitExceeded)) => {
                error!("Failed to retrieve directory '{}': {}", directory, e);
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn list_directory(&self, directory: &str) -> Result<FileListResponse, AppError> {
        let path = self.ls_operation(directory);
        let listing: FileListResponse = self.http_client.get(&path).await?;
        debug!(
            "Listed {} entries under {}",
            listing.entries.len(),
            listing.path
        );
        Ok(listing)
    }
}
