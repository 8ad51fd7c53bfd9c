use globus_client::application::client::Client;
use globus_client::application::interfaces::transfer::TransferService;
use globus_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    info!("Starting directory provisioning example");

    // Create client - authentication happens on the first request
    let client = Client::default();

    let directory = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "submissions/PRJEB00001/inbox".to_string());

    info!("Provisioning '{}'", directory);
    client.create_submission_directory(&directory).await?;
    info!("✓ Directory chain provisioned");

    Ok(())
}
