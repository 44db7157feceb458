//! Helpers around the router engine.
pub mod loader;
pub mod predefined;
pub mod queue;
