mod api;
mod core;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use crate::core::config;

#[derive(Parser)]
#[command(name = "stockpile", about = "Terminal inventory catalog manager")]
struct Args {
    /// Base URL of the inventory API (overrides config file and env)
    #[arg(short, long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to stockpile.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("stockpile.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {e}");
        Default::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("Stockpile starting up against {}", resolved.base_url);

    tui::run(resolved)
}
