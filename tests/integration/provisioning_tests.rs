use crate::common;
use globus_client::application::interfaces::transfer::TransferService;
use tracing::info;

#[tokio::test]
#[ignore]
async fn test_provision_and_list() {
    let client = common::create_test_client();

    client
        .create_submission_directory("integration-tests/demo")
        .await
        .expect("Failed to provision directory chain");

    assert!(
        client
            .directory_exists("integration-tests/demo")
            .await
            .expect("Failed to check directory")
    );

    let listing = client
        .list_submitted_files("integration-tests")
        .await
        .expect("Failed to list directory");

    info!("Listing: {}", listing);
    assert!(!listing.is_empty(), "Listing should not be empty");
}

#[tokio::test]
#[ignore]
async fn test_token_grant() {
    let client = common::create_test_client();

    // Any listing forces a token grant first
    let listing = client.list_submitted_files("/").await;
    assert!(listing.is_ok(), "Token grant or listing failed: {listing:?}");
}
