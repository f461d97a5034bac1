//! The error type shared by the tree and its collaborators.

use thiserror::Error;

use crate::node::NodeId;

/// Everything that can go wrong in an ordinary (non-contract-violating) call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The key was not present in the tree.
    #[error("key not found")]
    NotFound,
    /// A rank was outside `0..size`.
    #[error("rank {rank} out of bounds for size {size}")]
    OutOfBounds {
        /// The offending rank.
        rank: usize,
        /// The size of the container at the time of the call.
        size: usize,
    },
    /// The container had no elements.
    #[error("container is empty")]
    Empty,
    /// The id refers to an arena slot that has been freed.
    #[error("node {0} is no longer live")]
    StaleNode(NodeId),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
