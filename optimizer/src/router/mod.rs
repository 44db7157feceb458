//! Router module
//!
//! Holds the graph model and the route optimizer engine. Nothing in here
//! touches the network, the file system or any persistent storage apart
//! from [`router_utils::loader`], which only reads graph definitions.

#[macro_use]
pub mod macros;
pub mod router_types;
pub mod router_utils;
