//! Developer utility: harvest reactive-property metadata from an installed
//! UI-component library into a static JSON lookup table.
//!
//! This is a manual, dev-time tool. Any I/O failure is fatal to the
//! invocation (reported to stderr with a nonzero exit) and never affects
//! the interactive application, which does not depend on it at runtime.

mod scan;

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::scan::{HarvestError, Scanner};

#[derive(Parser, Debug)]
#[command(name = "harvest", about = "Harvest component property metadata into a JSON lookup table")]
struct Cli {
    /// Directory holding the installed component library's source.
    library_dir: PathBuf,

    /// Output path for the JSON property table.
    #[arg(long, env = "HARVEST_OUT", default_value = "component-props.json")]
    out: PathBuf,
}

fn main() {
    if let Err(err) = run(&Cli::parse()) {
        eprintln!("harvest: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), HarvestError> {
    let scanner = Scanner::new()?;
    let classes = scanner.scan_library(&cli.library_dir)?;
    let json = serde_json::to_string_pretty(&classes)?;
    fs::write(&cli.out, json)
        .map_err(|source| HarvestError::Write { path: cli.out.clone(), source })?;
    println!("harvested {} classes -> {}", classes.len(), cli.out.display());
    Ok(())
}
