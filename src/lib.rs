//! Directed weighted graphs with least-cost path search and maximum flow.
//!
//! A [`Graph`] is built once with a fixed node space and then handed to one of the algorithm
//! components: a [`shortest_path::LeastCostPathFinder`] (read-only) or a
//! [`maximum_flow::MaxFlowSolver`] (mutates residual capacities in place).

pub mod error;
pub mod graph;
pub mod maximum_flow;
pub mod shortest_path;

pub use error::{InvalidArgument, Result};
pub use graph::{Edge, Graph};
