//! Aspire UK Advisers - the firm's landing page in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use aspire_app::config::default_config_dir;
use aspire_core::logging;
use aspire_core::prelude::*;
use clap::Parser;

/// Aspire UK Advisers landing page
#[derive(Parser, Debug)]
#[command(name = "aspire")]
#[command(about = "Browse the Aspire UK Advisers landing page in your terminal", long_about = None)]
struct Args {
    /// Directory holding config.toml and saved preferences
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Leave mouse reporting off (keeps terminal text selection working)
    #[arg(long)]
    no_mouse: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let config_dir = match args.config_dir {
        Some(dir) => dir,
        None => default_config_dir()?,
    };

    info!("═══════════════════════════════════════════════════════");
    info!("Aspire landing page starting");
    info!("Config dir: {}", config_dir.display());
    info!("═══════════════════════════════════════════════════════");

    let result = aspire_tui::run(&config_dir, args.no_mouse).await;

    info!("Aspire landing page exiting");
    result
}
