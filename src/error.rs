use thiserror::Error;

/// Every failure in this crate is a malformed argument detected at the call site.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },

    #[error("edge {from} -> {to} has a negative weight")]
    NegativeWeight { from: usize, to: usize },

    #[error("source and sink are the same node ({0})")]
    SourceIsSink(usize),

    #[error("probability {0} is not in (0, 1]")]
    InvalidProbability(f64),
}

pub type Result<T> = std::result::Result<T, InvalidArgument>;
