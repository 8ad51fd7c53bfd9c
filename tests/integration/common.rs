// Common utilities for integration tests

use globus_client::prelude::*;

/// Creates a test client from the environment configuration
///
/// Requires `GLOBUS_CLIENT_ID`, `GLOBUS_CLIENT_SECRET`,
/// `GLOBUS_REFRESH_TOKEN` and `GLOBUS_ENDPOINT_ID` to be set; see the
/// README for details.
pub fn create_test_client() -> Client {
    setup_logger();
    Client::default()
}
