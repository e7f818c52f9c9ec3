//! Style types: the node-level input to every layout algorithm in [`crate::compute`].
use crate::geometry::{Line, Point, Rect, Size};
use crate::style_helpers::{TaffyAuto, TaffyZero};

pub(crate) mod dimension;
#[cfg(feature = "grid")]
pub mod grid;

pub use dimension::{AvailableSpace, Dimension, LengthPercentage, LengthPercentageAuto};
#[cfg(feature = "grid")]
pub use grid::{
    GridAutoFlow, GridLine, GridPlacement, GridTemplateArea, GridTemplateAreas, GridTrackRepetition, MaxTrackSizingFunction,
    MinTrackSizingFunction, NonRepeatedTrackSizingFunction, TrackSizingFunction,
};

/// The top-level display mode of a node, selecting which formatting context lays it out.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Display {
    /// Lay the node and its children out using the block formatting context
    Block,
    /// Lay the node and its children out using the flexbox formatting context
    Flex,
    /// Lay the node and its children out using the CSS grid formatting context
    Grid,
    /// An inline-level box that participates in an inline formatting context (treated as an opaque leaf)
    Inline,
    /// Like `Inline`, but sized as an atomic box with its own `size` and constraints
    InlineBlock,
    /// Remove the node and its subtree from layout entirely
    None,
}

impl Default for Display {
    fn default() -> Self {
        Self::Block
    }
}

impl Display {
    /// Returns true if this node participates in layout (i.e. is not `None`)
    pub fn is_none(&self) -> bool {
        matches!(self, Display::None)
    }
}

/// Whether `size`/`min_size`/`max_size` include padding and border, or not.
/// <https://www.w3.org/TR/css-sizing-3/#box-sizing>
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoxSizing {
    /// `size` refers to the border-box (padding and border included)
    BorderBox,
    /// `size` refers to the content-box (padding and border added on top)
    ContentBox,
}

impl Default for BoxSizing {
    fn default() -> Self {
        Self::BorderBox
    }
}

/// How a node participates in positioning relative to its containing block.
/// <https://www.w3.org/TR/css-position-3/#position-property>
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Laid out in normal flow; `inset` is an offset applied after in-flow placement
    Relative,
    /// Removed from normal flow; positioned via `inset` against the nearest positioned ancestor
    Absolute,
}

impl Default for Position {
    fn default() -> Self {
        Self::Relative
    }
}

/// How a node handles content that overflows its bounds in a given axis.
/// <https://www.w3.org/TR/css-overflow-3/#overflow-properties>
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overflow {
    /// Overflowing content is not clipped and does not affect layout/scrollbar reservation
    Visible,
    /// Overflowing content is clipped; no scrollbar space is reserved
    Clip,
    /// Overflowing content is hidden; no scrollbar space is reserved
    Hidden,
    /// Overflowing content is scrollable; space is reserved for a scrollbar per `scrollbar_width`
    Scroll,
}

impl Default for Overflow {
    fn default() -> Self {
        Self::Visible
    }
}

impl Overflow {
    /// Returns true if content overflowing this axis should be clipped out of the content size computation
    pub fn is_scroll_container(&self) -> bool {
        matches!(self, Overflow::Scroll | Overflow::Hidden)
    }

    /// The amount `self` contributes towards the automatic minimum size of a node (CSS §4.1.1)
    pub fn maybe_into_automatic_min_size(&self) -> bool {
        matches!(self, Overflow::Visible)
    }
}

/// The direction that flex items are laid out along the main axis.
/// <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlexDirection {
    /// Items are placed left-to-right along a horizontal main axis
    Row,
    /// Items are placed top-to-bottom along a vertical main axis
    Column,
    /// Like `Row`, but items are placed right-to-left
    RowReverse,
    /// Like `Column`, but items are placed bottom-to-top
    ColumnReverse,
}

impl Default for FlexDirection {
    fn default() -> Self {
        Self::Row
    }
}

/// Whether flex items are forced onto a single line, or may wrap onto multiple.
/// <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlexWrap {
    /// Items are forced onto a single flex line
    NoWrap,
    /// Items wrap onto multiple lines, in order
    Wrap,
    /// Items wrap onto multiple lines, in reverse cross-axis order
    WrapReverse,
}

impl Default for FlexWrap {
    fn default() -> Self {
        Self::NoWrap
    }
}

/// How content is distributed along the main axis (flex) or in the container's free space (grid).
/// <https://www.w3.org/TR/css-align-3/#propdef-justify-content>
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JustifyContent {
    /// Items packed at the start of the main axis
    Start,
    /// Items packed at the end of the main axis
    End,
    /// Items packed towards the flex-relative start of the main axis
    FlexStart,
    /// Items packed towards the flex-relative end of the main axis
    FlexEnd,
    /// Items centered along the main axis
    Center,
    /// Items evenly distributed; first item at the start, last at the end
    SpaceBetween,
    /// Items evenly distributed with equal space around each item
    SpaceAround,
    /// Items evenly distributed with equal space around, including before the first and after the last
    SpaceEvenly,
    /// Items stretched to fill the main axis (grid only)
    Stretch,
}

/// Alias used for `align-content`, sharing the same value set as `justify-content`.
pub type AlignContent = JustifyContent;

/// How items are aligned along the cross axis within a line.
/// <https://www.w3.org/TR/css-align-3/#propdef-align-items>
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignItems {
    /// Align items to the cross-axis start
    Start,
    /// Align items to the cross-axis end
    End,
    /// Align items to the flex-relative cross-axis start
    FlexStart,
    /// Align items to the flex-relative cross-axis end
    FlexEnd,
    /// Center items on the cross axis
    Center,
    /// Align items' first baselines
    Baseline,
    /// Stretch items to fill the cross axis
    Stretch,
}

impl Default for AlignItems {
    fn default() -> Self {
        Self::Stretch
    }
}

/// Per-item override of the container's `align-items`.
pub type AlignSelf = AlignItems;

/// Per-item override of the container's `justify-items` (grid only).
pub type JustifyItems = AlignItems;

/// Per-item override of `justify-items` (grid only).
pub type JustifySelf = AlignItems;

/// The complete style of a single node: every property consulted by the layout algorithms.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// What layout strategy this node's children (if any) should be laid out with
    pub display: Display,
    /// Whether `size`/`min_size`/`max_size` refer to the border-box or content-box
    pub box_sizing: BoxSizing,

    /// How children overflowing this node's bounds are handled, per axis
    pub overflow: Point<Overflow>,
    /// The width reserved for a scrollbar when an axis is a scroll container
    pub scrollbar_width: f32,

    /// What kind of positioning scheme this node participates in
    pub position: Position,
    /// The offset applied to this node's computed position, for `Position::Relative`,
    /// or the box's position against its containing block for `Position::Absolute`
    pub inset: Rect<LengthPercentageAuto>,

    /// The nominal size of this node
    pub size: Size<Dimension>,
    /// The minimum allowable size of this node
    pub min_size: Size<Dimension>,
    /// The maximum allowable size of this node
    pub max_size: Size<Dimension>,
    /// The preferred aspect ratio (width / height); when set, constrains size resolution
    pub aspect_ratio: Option<f32>,

    /// How much space, in the node's own coordinate space, to surround the content with
    pub margin: Rect<LengthPercentageAuto>,
    /// How much space, internal to the node, to surround the content with
    pub padding: Rect<LengthPercentage>,
    /// How large the border should be on each side
    pub border: Rect<LengthPercentage>,

    /// How this node's children (if any) are aligned along the cross axis (flex) or block axis (grid)
    pub align_items: Option<AlignItems>,
    /// How this node is aligned along its parent's cross/block axis, overriding `align_items`
    pub align_self: Option<AlignSelf>,
    /// How this node's children are aligned along the main axis (flex) or distributed in the block axis (grid)
    pub justify_content: Option<JustifyContent>,
    /// How this node's lines are distributed in the cross axis (flex, multi-line only) or block axis (grid)
    pub align_content: Option<AlignContent>,
    /// How this node's children are aligned along the inline axis (grid only)
    pub justify_items: Option<JustifyItems>,
    /// How this node is aligned along its parent's inline axis (grid only), overriding `justify_items`
    pub justify_self: Option<JustifySelf>,

    /// The gap between this node's rows and columns of children
    pub gap: Size<LengthPercentage>,

    /// The direction of the main axis, for flex containers
    pub flex_direction: FlexDirection,
    /// Whether flex items are forced onto one line or may wrap
    pub flex_wrap: FlexWrap,
    /// The relative rate at which this item grows, should the flex container have positive free space
    pub flex_grow: f32,
    /// The relative rate at which this item shrinks, should the flex container have negative free space
    pub flex_shrink: f32,
    /// Sets the initial main-axis size of a flex item, before free-space distribution
    pub flex_basis: Dimension,

    /// Defines the explicit column track list of a grid container
    #[cfg(feature = "grid")]
    pub grid_template_columns: crate::util::sys::Vec<TrackSizingFunction>,
    /// Defines the explicit row track list of a grid container
    #[cfg(feature = "grid")]
    pub grid_template_rows: crate::util::sys::Vec<TrackSizingFunction>,
    /// Defines named areas within the explicit grid, via `grid-template-areas`
    #[cfg(feature = "grid")]
    pub grid_template_areas: GridTemplateAreas,
    /// The sizing function for implicit columns created past the explicit grid
    #[cfg(feature = "grid")]
    pub grid_auto_columns: crate::util::sys::Vec<NonRepeatedTrackSizingFunction>,
    /// The sizing function for implicit rows created past the explicit grid
    #[cfg(feature = "grid")]
    pub grid_auto_rows: crate::util::sys::Vec<NonRepeatedTrackSizingFunction>,
    /// Controls how auto-placed items flow into the grid
    #[cfg(feature = "grid")]
    pub grid_auto_flow: GridAutoFlow,
    /// This item's column placement
    #[cfg(feature = "grid")]
    pub grid_column: Line<GridPlacement>,
    /// This item's row placement
    #[cfg(feature = "grid")]
    pub grid_row: Line<GridPlacement>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            display: Default::default(),
            box_sizing: Default::default(),
            overflow: Point { x: Overflow::Visible, y: Overflow::Visible },
            scrollbar_width: 0.0,
            position: Default::default(),
            inset: Rect::AUTO,
            size: Size::AUTO,
            min_size: Size::AUTO,
            max_size: Size::AUTO,
            aspect_ratio: None,
            margin: Rect::ZERO,
            padding: Rect::ZERO,
            border: Rect::ZERO,
            align_items: None,
            align_self: None,
            justify_content: None,
            align_content: None,
            justify_items: None,
            justify_self: None,
            gap: Size::ZERO,
            flex_direction: Default::default(),
            flex_wrap: Default::default(),
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: Dimension::Auto,
            #[cfg(feature = "grid")]
            grid_template_columns: Default::default(),
            #[cfg(feature = "grid")]
            grid_template_rows: Default::default(),
            #[cfg(feature = "grid")]
            grid_template_areas: Default::default(),
            #[cfg(feature = "grid")]
            grid_auto_columns: Default::default(),
            #[cfg(feature = "grid")]
            grid_auto_rows: Default::default(),
            #[cfg(feature = "grid")]
            grid_auto_flow: Default::default(),
            #[cfg(feature = "grid")]
            grid_column: Line { start: GridPlacement::Auto, end: GridPlacement::Auto },
            #[cfg(feature = "grid")]
            grid_row: Line { start: GridPlacement::Auto, end: GridPlacement::Auto },
        }
    }
}

impl Style {
    /// Returns the resolved `align_items` for a child that has no `align_self` override
    pub fn resolved_align_items(&self, child_align_self: Option<AlignSelf>) -> AlignItems {
        child_align_self.or(self.align_items).unwrap_or_default()
    }

    /// Returns the resolved `justify_items` for a child that has no `justify_self` override
    #[cfg(feature = "grid")]
    pub fn resolved_justify_items(&self, child_justify_self: Option<JustifySelf>) -> JustifyItems {
        child_justify_self.or(self.justify_items).unwrap_or_default()
    }
}
