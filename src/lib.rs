pub mod analysis;
pub mod cli;
pub mod config;
pub mod domain;
pub mod export;
pub mod http;
pub mod services;
pub mod store;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::analysis::AnalysisService;
use crate::services::fetcher::FetchService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_fetch(matches_file: &Path, events_dir: &Path) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let mut service = FetchService::new(config.fetcher, events_dir)?;
        service.run(matches_file).await
    })
}

pub fn handle_analyze(matches_file: &Path, events_dir: &Path, output: &Path) -> Result<()> {
    let config = AppConfig::new();
    let service = AnalysisService::new(config, events_dir)?;
    service.run(matches_file, output)
}
