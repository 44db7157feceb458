//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::router::router_types::node::Node;

/// An edge is an undirected connection between two nodes.
///
/// Every edge carries two independent weights: the `distance` travelled
/// and the `toll` paid. Both are non-negative; [`Graph::new`] rejects
/// anything else.
///
/// [`Graph::new`]: crate::router::router_types::graph::Graph::new
#[derive(Debug, PartialEq, Hash, Eq, Clone, Serialize)]
pub struct Edge {
    /// One end of the edge.
    pub from: Node,

    /// The other end of the edge.
    pub to: Node,

    /// The distance between both ends.
    pub distance: OrderedFloat<f64>,

    /// The toll charged for using the edge.
    pub toll: OrderedFloat<f64>,
}

impl Edge {
    /// Creates an edge between `from` and `to`.
    pub fn new(from: impl Into<Node>, to: impl Into<Node>, distance: f64, toll: f64) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            distance: OrderedFloat(distance),
            toll: OrderedFloat(toll),
        }
    }

    /// Whether the edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from.uid() == a && self.to.uid() == b) || (self.from.uid() == b && self.to.uid() == a)
    }

    /// Returns the end opposite to `node`, or [`None`] if the edge does
    /// not touch `node`.
    pub fn other_end(&self, node: &str) -> Option<&Node> {
        if self.from.uid() == node {
            Some(&self.to)
        } else if self.to.uid() == node {
            Some(&self.from)
        } else {
            None
        }
    }
}
