//! Starforge: nearby-star catalog pipeline CLI
//!
//! Imports Gliese-Jahreiss fixed-width catalogs, cross-matches them against
//! accurate coordinates and Hipparcos, and writes star CSV.

mod cli;
mod identify;
mod import_gj;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &cli.command {
        Commands::ImportGj(args) => import_gj::run(args, &cli),
        Commands::Identify(args) => identify::run(args, &cli),
    }
}
