/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/

//! # Globus Client
//!
//! A Rust client for the Globus Transfer API focused on provisioning
//! submission directories on a managed endpoint.
//!
//! The client covers the two Transfer operations a submission pipeline
//! needs, `mkdir` and `ls`, and handles authentication against Globus Auth
//! internally:
//!
//! - [`application::client::Client`] provisions directory chains and lists
//!   submitted files through the [`application::interfaces::transfer::TransferService`]
//!   trait
//! - [`application::auth::Auth`] exchanges the configured refresh token for
//!   bearer access tokens and refreshes them before they expire
//! - [`model::http::HttpClient`] is the rate-limited transport; a request
//!   rejected with an expired token is replayed once after a refresh
//!
//! ## Example
//!
//! ```rust,ignore
//! use globus_client::application::client::Client;
//! use globus_client::application::interfaces::transfer::TransferService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::default();
//!     client.create_submission_directory("submissions/PRJEB00001").await?;
//!     Ok(())
//! }
//! ```

/// Application layer: configuration, authentication, service interfaces and
/// the high-level client
pub mod application;
/// Global constants
pub mod constants;
/// Error types for the library
pub mod error;
/// Wire models and the HTTP transport
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Utility modules
pub mod utils;

/// Library version, taken from the crate metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
