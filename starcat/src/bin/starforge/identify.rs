//! Identifier parsing check

use crate::cli::{Cli, IdentifyArgs};
use starcat::Identifier;

pub fn run(args: &IdentifyArgs, cli: &Cli) -> anyhow::Result<()> {
    let mut failed = 0;
    for text in &args.text {
        match Identifier::parse(text) {
            Some(id) if cli.verbose => {
                println!("{text:<20} {:<10} {id:<16} body {}", id.catalog(), id.body())
            }
            Some(id) => println!("{text:<20} {:<10} {id}", id.catalog()),
            None => {
                println!("{text:<20} (not recognized)");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} identifiers not recognized", args.text.len());
    }
    Ok(())
}
