//! siteconf - validate and inspect a blog's configuration.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use siteconf::config::{BlogConfig, ConfigStore, init_config};
use siteconf::{debug, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // Init writes a fresh template and never needs a loaded config
    if let Commands::Init { path, dry, force } = &cli.command {
        return cli::init::run(path.as_deref(), *dry, *force);
    }

    let source = cli.config.as_deref();
    match source {
        Some(path) => debug!("config"; "reading {}", path.display()),
        None => debug!("config"; "using built-in definitions"),
    }

    // Invalid configuration is fatal: nothing runs on a partial store
    let store = init_config(ConfigStore::load(&BlogConfig::load(source)?)?)?;

    match &cli.command {
        Commands::Check => cli::check::run(store),
        Commands::Show { format, section } => cli::show::run(store, *format, *section),
        Commands::Socials { all, platform } => cli::socials::run(store, *all, *platform),
        Commands::Init { .. } => Ok(()),
    }
}
