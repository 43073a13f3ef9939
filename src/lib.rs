pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod storage;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::{Command, ServeArgs};
use crate::config::settings::AppConfig;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn build_config(args: &ServeArgs) -> AppConfig {
    let config = AppConfig::new()
        .with_data_dir(&args.data_dir)
        .with_corruption_policy(args.on_corrupt);

    match &args.api_key {
        Some(api_key) => config.with_api_key(api_key),
        None => config,
    }
}

pub fn handle_serve(args: &ServeArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = build_config(args);
        let service = ServerService::new(args.port, config);
        service.run().await
    })
}
