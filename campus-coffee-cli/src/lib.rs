//! Command-line interface for the campus coffee OSM tooling.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod osm_node;

pub use error::CliError;

use osm_node::{OsmNodeArgs, run_osm_node};

const ARG_NODE_ID: &str = "id";
const ARG_OSM_BASE_URL: &str = "osm-base-url";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ARG_USER_AGENT: &str = "user-agent";
const ENV_NODE_ID: &str = "CAMPUS_COFFEE_CMDS_OSM_NODE_NODE_ID";

/// Run the campus coffee CLI with the current process arguments and
/// environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration merging, the
/// node lookup or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::OsmNode(args) => run_osm_node(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "campus-coffee",
    about = "Utilities for the campus coffee point-of-sale directory",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up an OpenStreetMap node and print its point-of-sale fields.
    OsmNode(OsmNodeArgs),
}

#[cfg(test)]
mod tests;
