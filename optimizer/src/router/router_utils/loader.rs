//! Reading and writing graph definitions as JSON.
//!
//! The layout follows the built-in data set:
//!
//! ```json
//! {
//!   "nodes": ["A", "B"],
//!   "edges": [["A", "B", 5, 1.5]]
//! }
//! ```
//!
//! Each edge is `[from, to, distance, toll]`.

use std::fmt::{Display, Formatter, Result};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::router::router_types::{
    edge::Edge, graph::Graph, node::Node, router::engine::RouterError,
};

/// Error types for graph loading.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The file could not be read.
    Io(String),
    /// The content is not a valid graph definition.
    Parse(String),
    /// The definition was read but describes an invalid graph.
    Graph(RouterError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            LoadError::Io(e) => write!(f, "Could not read graph file: {}", e),
            LoadError::Parse(e) => write!(f, "Could not parse graph definition: {}", e),
            LoadError::Graph(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<RouterError> for LoadError {
    fn from(e: RouterError) -> Self {
        LoadError::Graph(e)
    }
}

/// Serialized form of a [`Graph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDefinition {
    /// Node labels.
    pub nodes: Vec<String>,
    /// Edges as `(from, to, distance, toll)`.
    pub edges: Vec<(String, String, f64, f64)>,
}

impl GraphDefinition {
    /// Validates the definition and builds the graph.
    pub fn into_graph(self) -> std::result::Result<Graph, RouterError> {
        let nodes = self.nodes.into_iter().map(Node::from).collect();
        let edges = self
            .edges
            .into_iter()
            .map(|(from, to, distance, toll)| Edge::new(from, to, distance, toll))
            .collect();
        Graph::new(nodes, edges)
    }
}

impl From<&Graph> for GraphDefinition {
    fn from(graph: &Graph) -> Self {
        GraphDefinition {
            nodes: graph.nodes().iter().map(|node| node.uid.clone()).collect(),
            edges: graph
                .edges()
                .iter()
                .map(|edge| {
                    (
                        edge.from.uid.clone(),
                        edge.to.uid.clone(),
                        edge.distance.into_inner(),
                        edge.toll.into_inner(),
                    )
                })
                .collect(),
        }
    }
}

/// Parses a JSON graph definition.
pub fn parse_graph(json: &str) -> std::result::Result<Graph, LoadError> {
    let definition: GraphDefinition =
        serde_json::from_str(json).map_err(|e| LoadError::Parse(e.to_string()))?;
    Ok(definition.into_graph()?)
}

/// Reads a JSON graph definition from `path`.
pub fn load_graph_from_file(path: impl AsRef<Path>) -> std::result::Result<Graph, LoadError> {
    let path = path.as_ref();
    router_info!("(load_graph_from_file) loading graph from [{}].", path.display());

    let json = std::fs::read_to_string(path).map_err(|e| {
        router_error!("(load_graph_from_file) could not read [{}]: {}", path.display(), e);
        LoadError::Io(format!("{}: {}", path.display(), e))
    })?;
    parse_graph(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::router_utils::predefined::predefined_graph;

    #[test]
    fn test_parse_graph() {
        let graph = parse_graph(
            r#"{ "nodes": ["X", "Y", "Z"], "edges": [["X", "Y", 2, 0.5], ["Z", "Y", 1.5, 0]] }"#,
        )
        .unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edges()[1], Edge::new("Z", "Y", 1.5, 0.0));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_graph(r#"{ "nodes": ["X"], "edges": [["X"]] }"#);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_parse_malformed_graph() {
        let result = parse_graph(r#"{ "nodes": ["X"], "edges": [["X", "Q", 1, 1]] }"#);
        assert!(matches!(
            result,
            Err(LoadError::Graph(RouterError::MalformedGraph(_)))
        ));
    }

    #[test]
    fn test_definition_preserves_edge_order() {
        let graph = predefined_graph().unwrap();
        let definition = GraphDefinition::from(&graph);

        assert_eq!(definition.nodes.len(), 10);
        assert_eq!(
            definition.edges[5],
            ("C".to_string(), "F".to_string(), 3.0, 0.0)
        );
        assert_eq!(definition.into_graph().unwrap().edges(), graph.edges());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_graph_from_file("does/not/exist.json");
        let Err(LoadError::Io(message)) = result else {
            panic!("expected an io error");
        };
        assert!(message.contains("does/not/exist.json"));
    }

    #[test]
    fn test_load_graph_from_file() {
        let path = std::env::temp_dir().join("route_optimizer_loader_test.json");
        std::fs::write(
            &path,
            r#"{ "nodes": ["P", "Q"], "edges": [["P", "Q", 7, 1]] }"#,
        )
        .unwrap();

        let graph = load_graph_from_file(&path).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edges_between("Q", "P").len(), 1);

        std::fs::remove_file(&path).unwrap();
    }
}
