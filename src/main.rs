use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use cloude::core::config::{self, CliOverrides, CloudeConfig};
use cloude::tui;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "cloude", about = "A mock AI chat assistant for the terminal")]
struct Args {
    /// Config file to use instead of ~/.cloude/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Delay before the assistant replies, in milliseconds
    #[arg(long)]
    reply_delay_ms: Option<u64>,

    /// Seed for reply selection, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Log at debug level instead of info
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to cloude.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = File::create("cloude.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            warn!("Falling back to built-in defaults: {}", e);
            CloudeConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            reply_delay_ms: args.reply_delay_ms,
            seed: args.seed,
        },
    );

    info!(
        "Cloude starting up (assistant: {}, reply delay: {}ms)",
        resolved.assistant_name,
        resolved.reply_delay.as_millis()
    );

    tui::run(resolved)
}
