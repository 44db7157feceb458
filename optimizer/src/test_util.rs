//! test utilities. Provides logging macros and graph fixtures.
use crate::router::router_types::{graph::Graph, query_result::QueryResult};
use crate::router::router_utils::predefined::predefined_graph;

/// Writes a debug! message to the test logger
#[macro_export]
macro_rules! ut_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "test", $($arg)+)
    };
}

/// Writes an info! message to the test logger
#[macro_export]
macro_rules! ut_info {
    ($($arg:tt)+) => {
        log::info!(target: "test", $($arg)+)
    };
}

/// Writes an error! message to the test logger
#[macro_export]
macro_rules! ut_error {
    ($($arg:tt)+) => {
        log::error!(target: "test", $($arg)+)
    };
}

/// The built-in ten city graph.
pub fn predefined() -> Graph {
    match predefined_graph() {
        Ok(graph) => graph,
        Err(e) => {
            ut_error!("(predefined) built-in graph is invalid: {}", e);
            panic!("built-in graph is invalid: {}", e);
        }
    }
}

/// Labels of the nodes along a route.
pub fn labels(result: &QueryResult) -> Vec<&str> {
    result.path().iter().map(|node| node.uid()).collect()
}
