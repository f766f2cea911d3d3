mod app;
mod cli;
mod commands;
mod config;
mod event;
mod headless;
mod logging;
mod terminal;
mod ui;

use clap::Parser;
use cli::{CliArgs, Command};
use color_eyre::Result;
use config::AppConfig;

fn main() -> Result<()> {
    color_eyre::install()?;

    let (settings, command) = CliArgs::parse().command();
    let results_dir = match &command {
        Command::AddResults(args) => args.results_dir.as_deref(),
        Command::View(_) => None,
    };
    let config = AppConfig::load(settings.results.as_deref(), results_dir, settings.debug);
    logging::init(config.debug);
    tracing::debug!(?config, "resolved configuration");

    match command {
        Command::View(args) => commands::view(&config, &args),
        Command::AddResults(args) => commands::add_results(&config, &args),
    }
}
