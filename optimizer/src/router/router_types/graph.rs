//! The immutable graph model queried by the router engine.
//!
//! A [`Graph`] owns its nodes and edges and never changes after
//! [`Graph::new`] returns. Adjacency is kept in a petgraph [`UnGraph`]
//! whose node and edge indices mirror the positions in the `nodes` and
//! `edges` vectors.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::router::router_types::{edge::Edge, node::Node, router::engine::RouterError};

/// A set of named nodes joined by undirected, doubly weighted edges.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    graph: UnGraph<(), ()>,
    node_indices: HashMap<String, NodeIndex>,
}

impl Graph {
    /// Creates a new graph from the given nodes and edges.
    ///
    /// Edges keep their declaration order, which is also the order in
    /// which the router engine examines them. Parallel edges are kept
    /// as distinct options.
    ///
    /// # Errors
    /// [`RouterError::MalformedGraph`] if a node label is repeated, an
    /// edge references a node outside of `nodes`, an edge joins a node
    /// to itself, or a weight is negative or not finite.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Graph, RouterError> {
        router_debug!(
            "(Graph::new) building graph with {} nodes and {} edges.",
            nodes.len(),
            edges.len()
        );

        let mut graph = UnGraph::with_capacity(nodes.len(), edges.len());
        let mut node_indices = HashMap::with_capacity(nodes.len());
        for node in &nodes {
            let index = graph.add_node(());
            if node_indices.insert(node.uid.clone(), index).is_some() {
                router_error!("(Graph::new) duplicate node [{}].", node);
                return Err(RouterError::MalformedGraph(format!(
                    "duplicate node '{}'",
                    node
                )));
            }
        }

        for (position, edge) in edges.iter().enumerate() {
            let Some(from) = node_indices.get(edge.from.uid()) else {
                router_error!("(Graph::new) edge #{} references unknown node [{}].", position, edge.from);
                return Err(RouterError::MalformedGraph(format!(
                    "edge #{} references unknown node '{}'",
                    position, edge.from
                )));
            };
            let Some(to) = node_indices.get(edge.to.uid()) else {
                router_error!("(Graph::new) edge #{} references unknown node [{}].", position, edge.to);
                return Err(RouterError::MalformedGraph(format!(
                    "edge #{} references unknown node '{}'",
                    position, edge.to
                )));
            };
            if from == to {
                return Err(RouterError::MalformedGraph(format!(
                    "edge #{} joins node '{}' to itself",
                    position, edge.from
                )));
            }
            for (name, weight) in [("distance", edge.distance), ("toll", edge.toll)] {
                if !weight.is_finite() || weight.into_inner() < 0.0 {
                    return Err(RouterError::MalformedGraph(format!(
                        "edge #{} ({} - {}) has invalid {} {}",
                        position, edge.from, edge.to, name, weight
                    )));
                }
            }
            graph.add_edge(*from, *to, ());
        }

        // every simple path costs at most the sum over all edges
        let total_distance: f64 = edges.iter().map(|edge| edge.distance.into_inner()).sum();
        let total_toll: f64 = edges.iter().map(|edge| edge.toll.into_inner()).sum();
        for (name, total) in [("distance", total_distance), ("toll", total_toll)] {
            if !total.is_finite() {
                router_error!("(Graph::new) total {} overflows.", name);
                return Err(RouterError::MalformedGraph(format!(
                    "total {} of all edges is not finite",
                    name
                )));
            }
        }

        Ok(Graph {
            nodes,
            edges,
            graph,
            node_indices,
        })
    }

    /// All nodes, in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Return the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Return the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether a node with this exact label exists.
    pub fn contains_node(&self, uid: &str) -> bool {
        self.node_indices.contains_key(uid)
    }

    /// All edges joining `a` and `b`, parallel edges included, in
    /// declaration order.
    pub fn edges_between(&self, a: &str, b: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|edge| edge.connects(a, b)).collect()
    }

    /// All edges touching `uid`, in declaration order. Empty if the node
    /// does not exist.
    pub fn incident_edges(&self, uid: &str) -> Vec<&Edge> {
        match self.node_index(uid) {
            Some(index) => self.neighbors(index).into_iter().map(|(edge, _)| edge).collect(),
            None => Vec::new(),
        }
    }

    /// Get the NodeIndex struct for a given label.
    pub(crate) fn node_index(&self, uid: &str) -> Option<NodeIndex> {
        self.node_indices.get(uid).copied()
    }

    /// Get a node by NodeIndex.
    pub(crate) fn node_at(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.index())
    }

    /// Indices of every node, in declaration order.
    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Every edge touching `index` together with the node on its other
    /// end, sorted by edge declaration order.
    ///
    /// petgraph walks adjacency lists newest-first, so the edges are
    /// sorted back into declaration order here.
    pub(crate) fn neighbors(&self, index: NodeIndex) -> Vec<(&Edge, NodeIndex)> {
        let mut incident: Vec<_> = self
            .graph
            .edges(index)
            .map(|reference| {
                let neighbor = if reference.source() == index {
                    reference.target()
                } else {
                    reference.source()
                };
                (reference.id(), neighbor)
            })
            .collect();
        incident.sort_by_key(|(id, _)| *id);
        incident
            .into_iter()
            .filter_map(|(id, neighbor)| self.edges.get(id.index()).map(|edge| (edge, neighbor)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(labels: &[&str]) -> Vec<Node> {
        labels.iter().map(|label| Node::from(*label)).collect()
    }

    #[test]
    fn test_valid_graph() {
        let graph = Graph::new(
            nodes(&["A", "B", "C"]),
            vec![Edge::new("A", "B", 1.0, 0.5), Edge::new("B", "C", 2.0, 0.0)],
        )
        .unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_node("A"));
        assert!(!graph.contains_node("a"));
        assert_eq!(graph.nodes()[2], Node::from("C"));
        assert_eq!(graph.edges()[1], Edge::new("B", "C", 2.0, 0.0));
    }

    #[test]
    fn test_edge_to_unknown_node_is_malformed() {
        let result = Graph::new(nodes(&["A", "B"]), vec![Edge::new("A", "Z", 1.0, 1.0)]);
        let Err(RouterError::MalformedGraph(reason)) = result else {
            panic!("expected a malformed graph, got {:?}", result);
        };
        assert!(reason.contains("'Z'"));
    }

    #[test]
    fn test_duplicate_node_is_malformed() {
        let result = Graph::new(nodes(&["A", "B", "A"]), vec![]);
        assert!(matches!(result, Err(RouterError::MalformedGraph(_))));
    }

    #[test]
    fn test_self_loop_is_malformed() {
        let result = Graph::new(nodes(&["A"]), vec![Edge::new("A", "A", 1.0, 1.0)]);
        assert!(matches!(result, Err(RouterError::MalformedGraph(_))));
    }

    #[test]
    fn test_invalid_weights_are_malformed() {
        for edge in [
            Edge::new("A", "B", -1.0, 0.0),
            Edge::new("A", "B", 1.0, -0.5),
            Edge::new("A", "B", f64::NAN, 0.0),
            Edge::new("A", "B", 1.0, f64::INFINITY),
        ] {
            let result = Graph::new(nodes(&["A", "B"]), vec![edge]);
            assert!(matches!(result, Err(RouterError::MalformedGraph(_))));
        }
    }

    #[test]
    fn test_overflowing_weight_totals_are_malformed() {
        let result = Graph::new(
            nodes(&["A", "B", "C"]),
            vec![
                Edge::new("A", "B", f64::MAX, 0.0),
                Edge::new("B", "C", f64::MAX, 0.0),
            ],
        );
        let Err(RouterError::MalformedGraph(reason)) = result else {
            panic!("expected a malformed graph, got {:?}", result);
        };
        assert!(reason.contains("distance"));

        let result = Graph::new(
            nodes(&["A", "B", "C"]),
            vec![
                Edge::new("A", "B", 1.0, f64::MAX),
                Edge::new("C", "B", 1.0, f64::MAX),
            ],
        );
        assert!(matches!(result, Err(RouterError::MalformedGraph(_))));

        // a single large edge still fits
        let graph = Graph::new(
            nodes(&["A", "B"]),
            vec![Edge::new("A", "B", f64::MAX, 0.0)],
        )
        .unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let graph = Graph::new(
            nodes(&["A", "B"]),
            vec![Edge::new("A", "B", 1.0, 3.0), Edge::new("B", "A", 4.0, 0.0)],
        )
        .unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges_between("A", "B").len(), 2);
        assert_eq!(graph.edges_between("B", "A").len(), 2);
    }

    #[test]
    fn test_neighbors_follow_declaration_order() {
        let graph = Graph::new(
            nodes(&["A", "B", "C", "D"]),
            vec![
                Edge::new("A", "B", 1.0, 0.0),
                Edge::new("C", "A", 2.0, 0.0),
                Edge::new("B", "C", 3.0, 0.0),
                Edge::new("A", "D", 4.0, 0.0),
            ],
        )
        .unwrap();

        let Some(a) = graph.node_index("A") else {
            panic!("A should be in the graph");
        };
        let neighbors: Vec<&str> = graph
            .neighbors(a)
            .into_iter()
            .filter_map(|(_, index)| graph.node_at(index))
            .map(|node| node.uid())
            .collect();
        assert_eq!(neighbors, vec!["B", "C", "D"]);

        let distances: Vec<f64> = graph
            .incident_edges("A")
            .into_iter()
            .map(|edge| edge.distance.into_inner())
            .collect();
        assert_eq!(distances, vec![1.0, 2.0, 4.0]);
        assert!(graph.incident_edges("Z").is_empty());
    }
}
