//! Types used by the router engine.
pub mod edge;
pub mod graph;
pub mod node;
pub mod policy;
pub mod query_result;
pub mod router;
