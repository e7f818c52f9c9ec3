//! A layout engine implementing the block, flexbox and CSS grid formatting
//! contexts, independent of rendering, text shaping and DOM semantics.
//!
//! The entry point is [`TaffyTree`](tree::TaffyTree): build a tree of
//! [`Style`](style::Style)-annotated nodes, then call
//! [`TaffyTree::compute_layout`] with an available space to populate every
//! reachable node's [`Layout`](tree::Layout).
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod compute;
pub mod geometry;
pub mod style;
pub mod style_helpers;
pub mod tree;
pub mod util;

pub use tree::NodeId;
#[cfg(feature = "alloc")]
pub use tree::{MeasureFunc, TaffyConfig, TaffyError, TaffyResult, TaffyTree};

/// Commonly used types, re-exported for `use layout_kernel::prelude::*;`.
pub mod prelude {
    pub use crate::geometry::{Line, Point, Rect, Size};
    pub use crate::style::{
        AlignContent, AlignItems, AlignSelf, AvailableSpace, Dimension, Display, FlexDirection, FlexWrap,
        GridPlacement, JustifyContent, LengthPercentage, LengthPercentageAuto, Overflow, Position, Style,
    };
    pub use crate::style_helpers::*;
    pub use crate::tree::{Layout, NodeId};
    #[cfg(feature = "alloc")]
    pub use crate::tree::{MeasureFunc, TaffyConfig, TaffyError, TaffyResult, TaffyTree};
}
