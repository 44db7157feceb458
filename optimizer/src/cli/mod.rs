//! Command line front end.
//!
//! Loads the graph, normalizes user input and hands the query to the
//! router engine. The engine itself never alters labels, so uppercasing
//! happens here.

#[macro_use]
pub mod macros;
pub mod args;
pub mod output;

use anyhow::{anyhow, Context, Result};

pub use args::{Cli, Commands, OutputFormat};

use crate::config::Config;
use crate::router::router_types::{graph::Graph, router::engine::compute_optimal_path};
use crate::router::router_utils::{loader::load_graph_from_file, predefined::predefined_graph};

/// Runs the parsed command and returns what should be printed.
pub fn run(cli: &Cli, config: &Config) -> Result<String> {
    let graph = load_graph(cli, config)?;

    match &cli.command {
        Commands::Route {
            start,
            end,
            policy,
            case_sensitive,
        } => {
            let policy = policy.unwrap_or(config.default_policy);
            let normalize = config.normalize_case && !*case_sensitive;
            let start = normalize_label(start, normalize);
            let end = normalize_label(end, normalize);

            cli_info!("(run) route from [{}] to [{}] by [{}].", start, end, policy);
            let result = compute_optimal_path(&graph, &start, &end, policy).map_err(|e| {
                cli_warn!("(run) route query failed: {}", e);
                anyhow!("Cannot find route: {}", e)
            })?;

            output::render_route(&graph, &result, policy, cli.format)
        }
        Commands::Graph => output::render_graph(&graph, cli.format),
    }
}

/// Picks the graph given on the command line, then the configured one,
/// then the built-in one.
fn load_graph(cli: &Cli, config: &Config) -> Result<Graph> {
    if let Some(path) = &cli.graph {
        return load_graph_from_file(path)
            .with_context(|| format!("loading graph from {}", path.display()));
    }

    if let Some(path) = &config.graph_file {
        return load_graph_from_file(path).with_context(|| format!("loading graph from {}", path));
    }

    cli_debug!("(load_graph) using the built-in graph.");
    Ok(predefined_graph()?)
}

fn normalize_label(label: &str, normalize: bool) -> String {
    if normalize {
        label.trim().to_uppercase()
    } else {
        label.to_string()
    }
}
