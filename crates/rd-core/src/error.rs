use thiserror::Error;

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("graph must have at least one node")]
    EmptyGraph,
    #[error("graph with {node_count} nodes is too large to allocate")]
    GraphTooLarge { node_count: usize },
    #[error("node {node} out of range for graph with {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },
    #[error("edge ({a}, {b}) has a NaN weight")]
    NanWeight { a: NodeId, b: NodeId },
    #[error("duplicate edge between nodes {a} and {b}")]
    DuplicateEdge { a: NodeId, b: NodeId },
    #[error("parse error at token {token_index}: expected {expected}, found '{found}'")]
    Parse {
        token_index: usize,
        expected: &'static str,
        found: String,
    },
    #[error("truncated input: expected {declared} edges, found {found}")]
    TruncatedInput { declared: usize, found: usize },
    #[error("unexpected trailing input starting at token {token_index}")]
    TrailingInput { token_index: usize },
}
