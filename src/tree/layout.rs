//! The per-node output of a layout pass, and the margin-collapsing
//! accumulator shared by the block formatting context.
use crate::geometry::{Point, Rect, Size};
use crate::util::sys::abs;

/// The computed layout of a single node, relative to its parent's border-box origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// The index of this node's visual order among its siblings, accounting
    /// for reordering (CSS `order` property is out of scope; this reflects
    /// flex/grid reversal and auto-placement order)
    pub order: u32,
    /// The top-left corner of the node's border-box, relative to its parent's border-box origin
    pub location: Point<f32>,
    /// The border-box size of the node
    pub size: Size<f32>,
    /// The size of the content, which may be larger than `size` if content overflows
    pub content_size: Size<f32>,
    /// The size of the scrollbar in each dimension. Zero for non-scroll-container axes.
    pub scrollbar_size: Size<f32>,
    /// The border-box padding of the node
    pub padding: Rect<f32>,
    /// The computed border width of the node
    pub border: Rect<f32>,
    /// The computed margin of the node, after any auto-margin resolution/collapsing
    pub margin: Rect<f32>,
}

impl Layout {
    /// A `Layout` with every field zeroed, used to populate hidden/unreached nodes
    pub const fn new() -> Self {
        Self {
            order: 0,
            location: Point { x: 0.0, y: 0.0 },
            size: Size { width: 0.0, height: 0.0 },
            content_size: Size { width: 0.0, height: 0.0 },
            scrollbar_size: Size { width: 0.0, height: 0.0 },
            padding: Rect { left: 0.0, right: 0.0, top: 0.0, bottom: 0.0 },
            border: Rect { left: 0.0, right: 0.0, top: 0.0, bottom: 0.0 },
            margin: Rect { left: 0.0, right: 0.0, top: 0.0, bottom: 0.0 },
        }
    }

    /// A zeroed `Layout` with the given visual order
    pub const fn with_order(order: u32) -> Self {
        Self { order, ..Self::new() }
    }
}

/// A single collapsible margin value together with whether it originated
/// from a negative margin, tracked so that the final collapsed value can
/// follow CSS's "max of positives, min of negatives, sum both" rule.
/// <https://www.w3.org/TR/CSS2/box.html#collapsing-margins>
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollapsibleMarginSet {
    /// The largest positive margin in the set seen so far (0.0 if none)
    positive: f32,
    /// The smallest (most negative) margin in the set seen so far (0.0 if none)
    negative: f32,
}

impl CollapsibleMarginSet {
    /// The empty set (collapses to zero)
    pub const ZERO: Self = Self { positive: 0.0, negative: 0.0 };

    /// A set containing a single margin value
    pub fn from_margin(margin: f32) -> Self {
        if margin >= 0.0 {
            Self { positive: margin, negative: 0.0 }
        } else {
            Self { positive: 0.0, negative: margin }
        }
    }

    /// Collapse another margin value into this set
    pub fn collapse_with_margin(self, margin: f32) -> Self {
        Self {
            positive: self.positive.max(margin.max(0.0)),
            negative: if margin < 0.0 { self.negative.min(margin) } else { self.negative },
        }
    }

    /// Collapse another margin set into this one
    pub fn collapse_with_set(self, other: Self) -> Self {
        Self { positive: self.positive.max(other.positive), negative: self.negative.min(other.negative) }
    }

    /// The resolved collapsed margin value, per CSS2 §8.3.1
    pub fn resolve(self) -> f32 {
        self.positive + self.negative
    }
}

impl Default for CollapsibleMarginSet {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Whether two margin sets' resolved values are within `f32::EPSILON`
pub fn margins_roughly_equal(a: CollapsibleMarginSet, b: CollapsibleMarginSet) -> bool {
    abs(a.resolve() - b.resolve()) < f32::EPSILON
}
