//! mac-latest-merge - latest-mac.yml manifest merger
//!
//! CI helper that combines the electron-builder auto-update manifests of the
//! Intel and ARM macOS builds into a single `latest-mac.yml`.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod error;
mod logging;
mod manifest;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.trace);

    if let Err(e) = commands::merge::run(&cli) {
        tracing::debug!(error = ?e, "merge failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
