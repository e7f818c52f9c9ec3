//! The concrete, owned tree: [`TaffyTree`], its node storage, and the glue
//! that lets the formatting-context algorithms in [`crate::compute`] run
//! against it through [`PartialLayoutTree`](crate::tree::PartialLayoutTree)/
//! [`LayoutTree`](crate::tree::LayoutTree).
pub mod error;
mod tree;

pub use error::{TaffyError, TaffyResult};
pub use tree::{MeasureFunc, TaffyConfig, TaffyTree};
