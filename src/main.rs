//! Milkyway Football Academy - marketing site renderer.

mod cli;
mod component;
mod config;
mod embed;
mod logger;
mod page;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config, false).map(|_| ()),
        Commands::Meta { args } => cli::meta::print_meta(args, &config),
        Commands::Validate => cli::validate::validate_site(&config),
    }
}
