/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/1/26
******************************************************************************/
use crate::utils::config::get_env_or_default;
use once_cell::sync::OnceCell;
use std::str::FromStr;
use tracing::Level;

static LOGGER_INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber.
///
/// The log level is taken from the `LOGLEVEL` environment variable
/// (`trace`, `debug`, `info`, `warn`, `error`), defaulting to `info`.
/// Calling this more than once is a no-op, so tests and binaries can both
/// call it unconditionally.
pub fn setup_logger() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let level = get_env_or_default("LOGLEVEL", String::from("info"));
        let level = Level::from_str(&level).unwrap_or(Level::INFO);

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    });
}
