//! Struct definitions and implementations for objects that represent
//! vertices in a graph.
//!
//! A [`Node`] is nothing more than a label such as `"A"` or `"Depot"`.
//! Labels are compared case-sensitively; any normalization is up to the
//! caller.
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Represent a vertex in a graph.
#[derive(Debug, PartialEq, Hash, Eq, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node {
    /// The label of the node. Must be unique within a graph.
    pub uid: String,
}

impl Node {
    /// Creates a node with the given label.
    pub fn new(uid: impl Into<String>) -> Self {
        Node { uid: uid.into() }
    }

    /// Returns the label of the node.
    pub fn uid(&self) -> &str {
        &self.uid
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.uid)
    }
}

impl From<&str> for Node {
    fn from(uid: &str) -> Self {
        Node::new(uid)
    }
}

impl From<String> for Node {
    fn from(uid: String) -> Self {
        Node { uid }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_labels_are_case_sensitive() {
        assert_ne!(Node::from("a"), Node::from("A"));
        assert_eq!(Node::from("A"), Node::new(String::from("A")));
    }

    #[test]
    fn test_node_serializes_as_plain_string() {
        let json = serde_json::to_string(&Node::from("Depot")).unwrap();
        assert_eq!(json, "\"Depot\"");
        assert_eq!(Node::from("Depot").to_string(), "Depot");
    }
}
