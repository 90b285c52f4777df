//! CodeCracker - Analyze coding-platform profiles from the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use clap::Parser;
use codecracker::RunOptions;
use codecracker_app::config::{
    default_config_dir, init_config_dir, load_settings, resolve_base_url,
};
use codecracker_core::Platform;
use color_eyre::eyre::{eyre, Result};

/// CodeCracker - Coding Profile Analyzer
#[derive(Parser, Debug)]
#[command(name = "codecracker")]
#[command(about = "Fetch and chart coding-platform profile statistics", long_about = None)]
struct Args {
    /// Platform to query: leetcode, codechef or codeforces
    #[arg(long, value_parser = parse_platform)]
    platform: Option<Platform>,

    /// Username on the selected platform
    #[arg(long)]
    username: Option<String>,

    /// Submit once and print NDJSON events instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Base URL of the statistics API (overrides CODECRACKER_API_URL and config.toml)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Check that the statistics API is reachable, then exit
    #[arg(long)]
    check_health: bool,

    /// Write a default config.toml (if missing), print its path, then exit
    #[arg(long)]
    init_config: bool,
}

fn parse_platform(value: &str) -> std::result::Result<Platform, String> {
    value.parse()
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    codecracker_core::logging::init()?;

    let config_dir = default_config_dir();
    if args.init_config {
        let path = init_config_dir(&config_dir)?;
        println!("{}", path.display());
        return Ok(());
    }

    let settings = load_settings(&config_dir);
    let base_url = resolve_base_url(args.api_url.as_deref(), &settings);

    if args.check_health {
        let health = codecracker::check_health(&base_url, settings.api.timeout()).await?;
        println!("{}: {}", base_url, health.status);
        if !health.is_healthy() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let options = RunOptions {
        settings,
        base_url,
        platform: args.platform,
        username: args.username,
    };

    if args.headless {
        let loaded = codecracker::run_headless(options).await?;
        if !loaded {
            std::process::exit(1);
        }
        return Ok(());
    }

    codecracker::run(options)
        .await
        .map_err(|e| eyre!("{}", e.user_message()))
}
