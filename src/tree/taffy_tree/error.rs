//! The error type returned by fallible [`TaffyTree`](super::TaffyTree) operations.
use core::fmt;

use crate::tree::NodeId;

/// An error raised by a fallible [`TaffyTree`](super::TaffyTree) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaffyError {
    /// The given [`NodeId`] does not exist in this tree (it may belong to a
    /// different tree, or have already been removed from this one)
    InvalidNode(NodeId),
    /// The given child index is out of bounds for the node's current child count
    ChildIndexOutOfBounds {
        /// The node whose children were being indexed
        parent: NodeId,
        /// The index that was requested
        child_index: usize,
        /// The number of children the node actually has
        child_count: usize,
    },
}

impl fmt::Display for TaffyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaffyError::InvalidNode(node) => write!(f, "node {node:?} is not present in this tree"),
            TaffyError::ChildIndexOutOfBounds { parent, child_index, child_count } => {
                write!(f, "node {parent:?} has {child_count} children, but index {child_index} was requested")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TaffyError {}

/// A `Result` specialized for fallible [`TaffyTree`](super::TaffyTree) operations
pub type TaffyResult<T> = Result<T, TaffyError>;
