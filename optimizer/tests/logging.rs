//! The router reports rejected queries on the `app::router` target.

use log::Level;
use route_optimizer::{compute_optimal_path, predefined_graph, CostPolicy, RouterError};

#[test]
fn unknown_node_is_logged() {
    let mut logger = logtest::Logger::start();
    let graph = predefined_graph().unwrap();

    let result = compute_optimal_path(&graph, "A", "Q", CostPolicy::ByDistance);
    assert_eq!(result, Err(RouterError::UnknownNode("Q".to_string())));

    let mut warned = false;
    while let Some(record) = logger.pop() {
        if record.level() == Level::Warn && record.target() == "app::router" {
            assert!(record.args().contains("[Q]"));
            warned = true;
        }
    }
    assert!(warned, "expected a warning for the unknown node");
}
