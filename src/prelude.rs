/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/

//! # Globus Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the Globus client library.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use globus_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Client::from_config(config);
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Globus Transfer API client
pub use crate::application::config::{
    AuthApiConfig, Config, Credentials, RateLimiterConfig, TransferApiConfig,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, GlobusResult};

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Authentication manager and session type
pub use crate::application::auth::{Auth, Session};

/// Token grant response from Globus Auth
pub use crate::model::auth::TokenResponse;

// ============================================================================
// CORE SERVICES
// ============================================================================

/// Transfer service trait for provisioning and listing operations
pub use crate::application::interfaces::transfer::TransferService;

/// High-level client implementation
pub use crate::application::client::Client;

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP transport with rate limiting and token refresh
pub use crate::model::http::{HttpClient, make_http_request};

// ============================================================================
// WIRE MODELS
// ============================================================================

/// Request models for Transfer API calls
pub use crate::model::requests::MkdirRequest;

/// Response models from Transfer API calls
pub use crate::model::responses::{
    FileEntry, FileListResponse, MkdirResponse, TransferApiMessage,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Rate limiting utilities
pub use crate::application::rate_limiter::RateLimiter;

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Path segmentation utilities
pub use crate::utils::path::{absolute, cumulative_prefixes};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest for HTTP operations (if needed for custom implementations)
pub use reqwest::Method;
