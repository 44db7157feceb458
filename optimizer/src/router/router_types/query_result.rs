//! The outcome of a single route query.
use serde::Serialize;

use crate::router::router_types::node::Node;

/// A route from start to end, inclusive, with the distance and toll
/// accumulated along it.
///
/// Built fresh for every query and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    path: Vec<Node>,
    distance: f64,
    toll: f64,
}

impl QueryResult {
    pub(crate) fn new(path: Vec<Node>, distance: f64, toll: f64) -> Self {
        QueryResult {
            path,
            distance,
            toll,
        }
    }

    /// The visited nodes, start and end included.
    pub fn path(&self) -> &[Node] {
        &self.path
    }

    /// Total distance along [`path`](Self::path).
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Total toll along [`path`](Self::path).
    pub fn toll(&self) -> f64 {
        self.toll
    }

    /// Consecutive node pairs of the path. A display layer can match
    /// these against its own edge list to highlight the route.
    pub fn legs(&self) -> impl Iterator<Item = (&Node, &Node)> + '_ {
        self.path.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Whether the route travels directly between `a` and `b`, in either
    /// direction.
    pub fn uses_leg(&self, a: &str, b: &str) -> bool {
        self.legs().any(|(from, to)| {
            (from.uid() == a && to.uid() == b) || (from.uid() == b && to.uid() == a)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legs() {
        let result = QueryResult::new(
            vec![Node::from("A"), Node::from("C"), Node::from("F")],
            13.0,
            0.5,
        );

        let legs: Vec<(&str, &str)> = result.legs().map(|(a, b)| (a.uid(), b.uid())).collect();
        assert_eq!(legs, vec![("A", "C"), ("C", "F")]);
        assert!(result.uses_leg("F", "C"));
        assert!(!result.uses_leg("A", "F"));
    }

    #[test]
    fn test_single_node_has_no_legs() {
        let result = QueryResult::new(vec![Node::from("A")], 0.0, 0.0);
        assert_eq!(result.legs().count(), 0);
    }

    #[test]
    fn test_serialize() {
        let result = QueryResult::new(vec![Node::from("A"), Node::from("B")], 5.0, 1.5);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "path": ["A", "B"], "distance": 5.0, "toll": 1.5 })
        );
    }
}
