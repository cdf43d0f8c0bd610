//! Binary entry point: resolve configuration, start file logging, and drive
//! the Ratatui event loop over a fresh, empty title index.
use anyhow::Context;
use movie_rental::{logging, run_app, App, AppConfig, TitleIndex};
use tracing::info;

/// Returning a `Result` surfaces fatal startup problems (for example an
/// unwritable home directory) on the terminal instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to resolve configuration")?;
    logging::init(&config)?;
    info!(log_file = %config.log_file.display(), "starting movie rental");

    let mut app = App::new(TitleIndex::new());
    run_app(&mut app)
}
