//! Rendering of query results and graphs.

use anyhow::Result;
use serde::Serialize;

use super::args::OutputFormat;
use crate::router::router_types::{
    edge::Edge, graph::Graph, policy::CostPolicy, query_result::QueryResult,
};
use crate::router::router_utils::loader::GraphDefinition;

/// JSON shape of a computed route.
#[derive(Debug, Serialize)]
struct RouteReport<'a> {
    policy: CostPolicy,
    #[serde(flatten)]
    result: &'a QueryResult,
}

/// Renders a computed route.
pub fn render_route(
    graph: &Graph,
    result: &QueryResult,
    policy: CostPolicy,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&RouteReport { policy, result })?);
    }

    let route = result
        .path()
        .iter()
        .map(|node| node.uid())
        .collect::<Vec<_>>()
        .join(" -> ");
    let kind = match policy {
        CostPolicy::ByDistance => "Shortest",
        CostPolicy::ByToll => "Cheapest",
    };

    let mut lines = vec![format!("{} route: {}", kind, route)];
    for (from, to) in result.legs() {
        if let Some(edge) = leg_edge(graph, from.uid(), to.uid(), policy) {
            lines.push(format!(
                "  {} -> {}: {} miles, ${:.2}",
                from,
                to,
                edge.distance,
                edge.toll.into_inner()
            ));
        }
    }
    lines.push(format!("Total distance: {} miles", result.distance()));
    lines.push(format!("Total toll cost: ${:.2}", result.toll()));
    Ok(lines.join("\n"))
}

/// Renders every node and edge of the graph.
pub fn render_graph(graph: &Graph, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&GraphDefinition::from(graph))?);
    }

    let nodes = graph
        .nodes()
        .iter()
        .map(|node| node.uid())
        .collect::<Vec<_>>()
        .join(", ");
    let mut lines = vec![
        format!("Nodes ({}): {}", graph.node_count(), nodes),
        format!("Edges ({}):", graph.edge_count()),
    ];
    for edge in graph.edges() {
        lines.push(format!(
            "  {} - {}: {} miles, ${:.2}",
            edge.from,
            edge.to,
            edge.distance,
            edge.toll.into_inner()
        ));
    }
    Ok(lines.join("\n"))
}

/// The edge the router travels between two consecutive route nodes:
/// among parallel edges, the first one with the lowest active weight.
fn leg_edge<'a>(graph: &'a Graph, from: &str, to: &str, policy: CostPolicy) -> Option<&'a Edge> {
    graph
        .edges_between(from, to)
        .into_iter()
        .fold(None, |chosen: Option<&Edge>, edge| match chosen {
            Some(current) if policy.active_weight(current) <= policy.active_weight(edge) => {
                Some(current)
            }
            _ => Some(edge),
        })
}
