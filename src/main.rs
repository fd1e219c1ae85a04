//! AgriHub - a terminal farming assistant
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use agrihub_core::logging;
use clap::Parser;

/// AgriHub - chat, crop disease detection, weather and advisories for farmers
#[derive(Parser, Debug)]
#[command(name = "agrihub")]
#[command(about = "A terminal farming assistant", long_about = None)]
struct Args {
    /// Directory for config.toml, stored preferences and logs
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Run in headless mode (NDJSON events on stdout, commands on stdin)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(logging::default_data_dir);
    logging::init(&data_dir)?;

    if args.headless {
        agrihub::run_headless(&data_dir).await?;
    } else {
        agrihub::run(&data_dir).await?;
    }

    Ok(())
}
