use globus_client::application::client::Client;
use globus_client::application::interfaces::transfer::TransferService;
use globus_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    let client = Client::default();

    let directory = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "submissions/PRJEB00001".to_string());

    // Raw listing, exactly as the API answered
    let raw = client.list_submitted_files(&directory).await?;
    if !raw.is_empty() {
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        info!("Raw listing:\n{}", serde_json::to_string_pretty(&value)?);
    }

    // Typed listing
    let listing = client.list_directory(&directory).await?;
    info!("{} entries under {}", listing.entries.len(), listing.path);
    for entry in &listing.entries {
        info!(
            "  {} {} ({} bytes)",
            if entry.is_dir() { "d" } else { "-" },
            entry.name,
            entry.size
        );
    }

    Ok(())
}
