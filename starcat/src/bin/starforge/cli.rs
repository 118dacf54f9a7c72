//! CLI argument definitions for starforge

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "starforge")]
#[command(about = "Nearby-star catalog import and cross-matching")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import CNS3 merged with GJ accurate coordinates and write star CSV
    ImportGj(ImportGjArgs),

    /// Parse identifiers and print their catalog and canonical form
    Identify(IdentifyArgs),
}

#[derive(Parser)]
pub struct ImportGjArgs {
    /// CNS3 catalog.dat (plain or .gz)
    #[arg(long)]
    pub cns3: PathBuf,

    /// Accurate Coordinates table1.dat (plain or .gz)
    #[arg(long)]
    pub accurate: PathBuf,

    /// Hipparcos stars in star CSV format
    #[arg(long)]
    pub hipparcos: Option<PathBuf>,

    /// Identifier/name CSV
    #[arg(long)]
    pub names: Option<PathBuf>,

    /// IAU Catalog of Star Names (IAU-CSN.txt)
    #[arg(long)]
    pub iau_names: Option<PathBuf>,

    /// Output star CSV file
    #[arg(long)]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct IdentifyArgs {
    /// Identifier text, e.g. "Gl 551" or "alf CMa"
    #[arg(required = true)]
    pub text: Vec<String>,
}
