//! The tree abstraction layout algorithms are written against, and the
//! concrete [`TaffyTree`] that implements it.
use crate::geometry::Size;
use crate::style::{AvailableSpace, Style};

pub mod cache;
#[cfg(feature = "alloc")]
pub mod diagnostics;
pub mod layout;
#[cfg(feature = "alloc")]
pub mod taffy_tree;

pub use cache::Cache;
pub use layout::{CollapsibleMarginSet, Layout};
#[cfg(feature = "alloc")]
pub use taffy_tree::{MeasureFunc, TaffyConfig, TaffyError, TaffyResult, TaffyTree};

/// A stable identity for a node in a [`TaffyTree`], opaque to callers.
/// Internally this wraps a [`slotmap::DefaultKey`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u64);

impl From<slotmap::DefaultKey> for NodeId {
    fn from(key: slotmap::DefaultKey) -> Self {
        use slotmap::Key;
        NodeId(key.data().as_ffi())
    }
}

impl From<NodeId> for slotmap::DefaultKey {
    fn from(node_id: NodeId) -> Self {
        slotmap::KeyData::from_ffi(node_id.0).into()
    }
}

/// Which phase of layout a formatting context is being asked to perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Compute this node's full layout, including its children's positions
    PerformLayout,
    /// Compute only this node's size, without assigning final positions
    ComputeSize,
    /// This node (or an ancestor) is `display: none`; produce a zero-size result
    /// without visiting children's own layout algorithms
    PerformHiddenLayout,
}

/// Whether a node is being sized by its own declared styles, or purely to
/// answer a content-size probe from an ancestor (e.g. intrinsic sizing).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SizingMode {
    /// Size as normal: styles apply, percentages resolve against the containing block
    InherentSize,
    /// This invocation exists only to answer "what size would this node's content want",
    /// so percentage sizes that can't be resolved yet are treated as indefinite
    ContentSize,
}

/// The input to a node's layout algorithm.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutInput {
    /// Dimensions already known for this node (e.g. from a parent's stretch-fit), if any
    pub known_dimensions: Size<Option<f32>>,
    /// The parent's size, for percentage resolution. `None` components mean indefinite.
    pub parent_size: Size<Option<f32>>,
    /// The space available to this node
    pub available_space: Size<AvailableSpace>,
    /// Which axes' sizes the caller actually needs (an optimisation hint; both may still be computed)
    pub sizing_mode: SizingMode,
    /// Which axes this invocation must run the full algorithm for (vs may answer from cache)
    pub axis: RequestedAxis,
    /// Whether a full layout or only a size computation is required
    pub run_mode: RunMode,
    /// Whether this node is the direct child of a formatting context that
    /// vertically collapses margins with its children (relevant to block layout only)
    pub vertical_margins_are_collapsible: crate::geometry::Line<bool>,
}

/// Which axis (or both) a `LayoutInput` is primarily being queried for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RequestedAxis {
    /// Both axes are of interest to the caller
    Both,
    /// Only the horizontal extent is of interest
    Horizontal,
    /// Only the vertical extent is of interest
    Vertical,
}

impl LayoutInput {
    /// The canonical `LayoutInput` for a root `compute_layout` call: no known
    /// dimensions, no parent for percentage resolution, the given available space.
    pub fn root(available_space: Size<AvailableSpace>) -> Self {
        Self {
            known_dimensions: Size::NONE,
            parent_size: Size::NONE,
            available_space,
            sizing_mode: SizingMode::InherentSize,
            axis: RequestedAxis::Both,
            run_mode: RunMode::PerformLayout,
            vertical_margins_are_collapsible: crate::geometry::Line::FALSE,
        }
    }
}

/// The result of a node's layout algorithm: its size, and enough additional
/// information for the parent formatting context to position it.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct LayoutOutput {
    /// The border-box size this node was laid out at
    pub size: Size<f32>,
    /// The size of this node's content, which may overflow `size`
    pub content_size: Size<f32>,
    /// The distance from the top of the border-box to this node's first baseline, if any
    pub first_baselines: Size<Option<f32>>,
    /// The top margin of this node, for propagation to a collapsing parent
    pub top_margin: CollapsibleMarginSet,
    /// The bottom margin of this node, for propagation to a collapsing parent
    pub bottom_margin: CollapsibleMarginSet,
    /// Whether this node's own margins may collapse through it (no border/padding/content
    /// separating its top and bottom margins)
    pub margins_can_collapse_through: bool,
}

impl LayoutOutput {
    /// A `LayoutOutput` representing a hidden (`display: none`) subtree: zero size, no baseline
    pub const HIDDEN: Self = Self {
        size: Size { width: 0.0, height: 0.0 },
        content_size: Size { width: 0.0, height: 0.0 },
        first_baselines: Size { width: None, height: None },
        top_margin: CollapsibleMarginSet::ZERO,
        bottom_margin: CollapsibleMarginSet::ZERO,
        margins_can_collapse_through: false,
    };

    /// Construct a `LayoutOutput` from just a size, with every other field defaulted
    pub fn from_outer_size(size: Size<f32>) -> Self {
        Self { size, content_size: size, ..Default::default() }
    }
}

/// The read-only portion of the tree capability set that every formatting
/// context algorithm is generic over: enough to size and lay out children
/// without being able to write a node's own final `Layout`.
pub trait PartialLayoutTree {
    /// The type yielded by [`PartialLayoutTree::child_ids`]
    type ChildIter<'a>: Iterator<Item = NodeId>
    where
        Self: 'a;

    /// Iterate over `node`'s children, in document order
    fn child_ids(&self, node: NodeId) -> Self::ChildIter<'_>;
    /// The number of children `node` has
    fn child_count(&self, node: NodeId) -> usize;
    /// The child of `node` at position `index`
    fn get_child_id(&self, node: NodeId, index: usize) -> NodeId;

    /// `node`'s style
    fn get_style(&self, node: NodeId) -> &Style;

    /// Mutable access to `node`'s layout cache
    fn get_cache_mut(&mut self, node: NodeId) -> &mut Cache;

    /// Run `node`'s layout algorithm (dispatching on its `Display`) for the given input
    fn compute_child_layout(&mut self, node: NodeId, input: LayoutInput) -> LayoutOutput;

    /// Returns true if `node` has a measure function attached (i.e. is a
    /// measured leaf such as text or an image, rather than a plain box)
    fn needs_measure(&self, node: NodeId) -> bool;

    /// Invoke `node`'s measure function, if it has one, clamping the result
    /// to a valid, finite, non-negative size and recording a diagnostic if
    /// clamping was necessary
    fn measure_child_size(
        &mut self,
        node: NodeId,
        known_dimensions: Size<Option<f32>>,
        parent_size: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
    ) -> Size<f32>;
}

/// The full tree capability set: [`PartialLayoutTree`] plus the ability to
/// write a node's final, positioned [`Layout`].
pub trait LayoutTree: PartialLayoutTree {
    /// Mutable access to `node`'s stored final layout (pre-rounding)
    fn get_unrounded_layout_mut(&mut self, node: NodeId) -> &mut Layout;
    /// Read-only access to `node`'s stored final layout
    fn get_final_layout(&self, node: NodeId) -> &Layout;
    /// Mutable access to `node`'s stored final layout
    fn get_final_layout_mut(&mut self, node: NodeId) -> &mut Layout;
}

