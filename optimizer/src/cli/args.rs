//! Command line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::router::router_types::policy::CostPolicy;

/// Find the shortest or the cheapest route through a road graph
#[derive(Parser, Debug)]
#[command(name = "route-optimizer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON graph definition to use instead of the configured one
    #[arg(long, global = true)]
    pub graph: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the optimal route between two nodes
    Route {
        /// Node to start from
        start: String,

        /// Node to travel to
        end: String,

        /// Weight to minimize: "distance" or "toll"
        #[arg(long, short)]
        policy: Option<CostPolicy>,

        /// Match node labels exactly instead of uppercasing them
        #[arg(long)]
        case_sensitive: bool,
    },

    /// List the nodes and edges of the graph
    Graph,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for people
    Human,
    /// JSON for scripts
    Json,
}
