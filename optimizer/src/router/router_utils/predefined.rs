//! The built-in road graph: ten cities `A` to `J`.
//!
//! Distances are in miles, tolls in dollars. Edge order matters, it is
//! the order in which the router engine examines edges and therefore
//! decides ties.

use crate::router::router_types::{
    edge::Edge, graph::Graph, node::Node, router::engine::RouterError,
};

/// City labels of the built-in graph.
pub const CITIES: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

/// Roads of the built-in graph as `(from, to, distance, toll)`.
pub const ROADS: [(&str, &str, f64, f64); 19] = [
    ("A", "B", 5.0, 1.5),
    ("A", "C", 10.0, 0.5),
    ("A", "D", 15.0, 2.0),
    ("B", "E", 12.0, 2.5),
    ("B", "F", 8.0, 1.0),
    ("C", "F", 3.0, 0.0),
    ("C", "G", 11.0, 1.5),
    ("D", "G", 7.0, 1.0),
    ("D", "H", 9.0, 0.5),
    ("E", "I", 18.0, 3.0),
    ("F", "I", 16.0, 2.5),
    ("F", "J", 14.0, 1.5),
    ("G", "J", 10.0, 2.0),
    ("H", "J", 6.0, 1.0),
    ("I", "J", 4.0, 0.0),
    // cross links
    ("B", "C", 6.0, 1.0),
    ("E", "F", 2.0, 0.5),
    ("G", "H", 4.0, 0.5),
    ("H", "I", 13.0, 2.0),
];

/// Builds the built-in graph.
pub fn predefined_graph() -> Result<Graph, RouterError> {
    let nodes = CITIES.iter().map(|city| Node::from(*city)).collect();
    let edges = ROADS
        .iter()
        .map(|(from, to, distance, toll)| Edge::new(*from, *to, *distance, *toll))
        .collect();
    Graph::new(nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_graph_is_valid() {
        let graph = predefined_graph().unwrap();
        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), 19);
        assert_eq!(graph.edges()[0], Edge::new("A", "B", 5.0, 1.5));
        assert_eq!(graph.edges()[18], Edge::new("H", "I", 13.0, 2.0));
    }

    #[test]
    fn test_every_city_has_a_road() {
        let graph = predefined_graph().unwrap();
        for city in CITIES {
            assert!(!graph.incident_edges(city).is_empty(), "{} is isolated", city);
        }
    }
}
