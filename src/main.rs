use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

mod api;
mod app;
mod audio;
mod config;
mod library;
mod runtime;
mod ui;

/// Terminal browser and player for a remote stethoscope sound library.
#[derive(Parser, Debug)]
#[command(name = "stetho", version, about)]
struct Args {
    /// Origin of the sound library server (overrides `server.url`)
    #[arg(long)]
    server: Option<String>,

    /// Mount path the library is served under (overrides `server.script_name`)
    #[arg(long)]
    script_name: Option<String>,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut settings, fallback) = runtime::load_settings(args.config);
    if let Some(url) = args.server {
        settings.server.url = url;
    }
    if let Some(script_name) = args.script_name {
        settings.server.script_name = script_name;
    }

    let log_guard = runtime::logging::init(&settings.log, args.debug);
    if let Some(reason) = fallback {
        if log_guard.is_none() {
            eprintln!("stetho: {reason}");
        }
        warn!("{reason}");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting stetho");

    runtime::run(&settings)
}
