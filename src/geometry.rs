//! Geometry primitives shared by style resolution and every layout algorithm.
use core::ops::Add;

use crate::style::{AvailableSpace, FlexDirection};
use crate::style_helpers::{TaffyAuto, TaffyMaxContent, TaffyMinContent, TaffyZero};

/// An axis-aligned 2D size
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size<T> {
    /// The width extent of the rectangle
    pub width: T,
    /// The height extent of the rectangle
    pub height: T,
}

impl<T> Size<T> {
    /// Applies the function `f` to both the width and height
    pub fn map<R>(self, f: impl Fn(T) -> R) -> Size<R> {
        Size { width: f(self.width), height: f(self.height) }
    }

    /// Applies the function `f` to the width only
    pub fn map_width(self, f: impl FnOnce(T) -> T) -> Size<T> {
        Size { width: f(self.width), height: self.height }
    }

    /// Applies the function `f` to the height only
    pub fn map_height(self, f: impl FnOnce(T) -> T) -> Size<T> {
        Size { width: self.width, height: f(self.height) }
    }

    /// Combines the width and height values with those of another [`Size`], via `f`
    pub fn zip_map<R, U>(self, other: Size<U>, f: impl Fn(T, U) -> R) -> Size<R> {
        Size { width: f(self.width, other.width), height: f(self.height, other.height) }
    }

    /// Gets either the width or height depending on the `direction` provided.
    pub fn get(self, direction: AbsoluteAxis) -> T {
        match direction {
            AbsoluteAxis::Horizontal => self.width,
            AbsoluteAxis::Vertical => self.height,
        }
    }

    /// Get a reference to either the width or height depending on the `direction` provided
    pub fn get_abs(&self, direction: AbsoluteAxis) -> &T {
        match direction {
            AbsoluteAxis::Horizontal => &self.width,
            AbsoluteAxis::Vertical => &self.height,
        }
    }
}

impl<T: Copy> Size<T> {
    /// Creates a new [`Size`] with identical width and height
    pub const fn splat(value: T) -> Self {
        Self { width: value, height: value }
    }

    /// Swaps the width and height
    pub fn transpose(self) -> Self {
        Size { width: self.height, height: self.width }
    }

    /// Returns a [`Size`] with the main-axis value taken from `self` for `direction`
    /// and the cross axis taken from the same position in `self`.
    pub fn main(self, direction: FlexDirection) -> T {
        if direction.is_row() {
            self.width
        } else {
            self.height
        }
    }

    /// Returns the cross-axis value for `direction`
    pub fn cross(self, direction: FlexDirection) -> T {
        if direction.is_row() {
            self.height
        } else {
            self.width
        }
    }
}

impl Size<f32> {
    /// A [`Size`] with zero width and height
    pub const ZERO: Size<f32> = Size { width: 0.0, height: 0.0 };

    /// Returns a `Size<f32>` with the same zero value
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Computes the area (width * height)
    pub fn area(self) -> f32 {
        self.width * self.height
    }
}

impl Size<Option<f32>> {
    /// A [`Size`] with both width and height set to `None`
    pub const NONE: Size<Option<f32>> = Size { width: None, height: None };

    /// Performs `Option::unwrap_or` on each component separately
    pub fn unwrap_or(self, alt: Size<f32>) -> Size<f32> {
        Size { width: self.width.unwrap_or(alt.width), height: self.height.unwrap_or(alt.height) }
    }

    /// Returns true if both components are `Some`
    pub fn both_axis_defined(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }

    /// Returns `self` if both components are defined, else `other`
    pub fn or(self, other: Size<Option<f32>>) -> Size<Option<f32>> {
        Size { width: self.width.or(other.width), height: self.height.or(other.height) }
    }
}

impl Size<AvailableSpace> {
    /// A [`Size<AvailableSpace>`] with both width and height set to `AvailableSpace::MaxContent`
    pub const MAX_CONTENT: Size<AvailableSpace> = Size { width: AvailableSpace::MaxContent, height: AvailableSpace::MaxContent };
    /// A [`Size<AvailableSpace>`] with both width and height set to `AvailableSpace::MinContent`
    pub const MIN_CONTENT: Size<AvailableSpace> = Size { width: AvailableSpace::MinContent, height: AvailableSpace::MinContent };
}

impl<T: TaffyZero> TaffyZero for Size<T> {
    const ZERO: Self = Size { width: T::ZERO, height: T::ZERO };
}
impl<T: TaffyAuto> TaffyAuto for Size<T> {
    const AUTO: Self = Size { width: T::AUTO, height: T::AUTO };
}
impl<T: TaffyMaxContent> TaffyMaxContent for Size<T> {
    const MAX_CONTENT: Self = Size { width: T::MAX_CONTENT, height: T::MAX_CONTENT };
}
impl<T: TaffyMinContent> TaffyMinContent for Size<T> {
    const MIN_CONTENT: Self = Size { width: T::MIN_CONTENT, height: T::MIN_CONTENT };
}

impl<T: Add<Output = T>> Add for Size<T> {
    type Output = Size<T>;
    fn add(self, rhs: Size<T>) -> Self::Output {
        Size { width: self.width + rhs.width, height: self.height + rhs.height }
    }
}

impl<T: core::ops::Sub<Output = T>> core::ops::Sub for Size<T> {
    type Output = Size<T>;
    fn sub(self, rhs: Size<T>) -> Self::Output {
        Size { width: self.width - rhs.width, height: self.height - rhs.height }
    }
}

/// A 2D point
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    /// The x-coordinate
    pub x: T,
    /// The y-coordinate
    pub y: T,
}

impl Point<f32> {
    /// A point at the origin
    pub const ZERO: Point<f32> = Point { x: 0.0, y: 0.0 };

    /// Returns a `Point<f32>` at the origin
    pub fn zero() -> Self {
        Self::ZERO
    }
}

impl<T: Add<Output = T>> Add for Point<T> {
    type Output = Point<T>;
    fn add(self, rhs: Point<T>) -> Self::Output {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl<T> Point<T> {
    /// Applies the function `f` to both the x and y
    pub fn map<R>(self, f: impl Fn(T) -> R) -> Point<R> {
        Point { x: f(self.x), y: f(self.y) }
    }
}

/// The edges of a box: a generic container for top/right/bottom/left values,
/// used for margin, padding, border and inset.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T> {
    /// The left edge value
    pub left: T,
    /// The right edge value
    pub right: T,
    /// The top edge value
    pub top: T,
    /// The bottom edge value
    pub bottom: T,
}

impl<T> Rect<T> {
    /// Applies the function `f` to every edge
    pub fn map<R>(self, f: impl Fn(T) -> R) -> Rect<R> {
        Rect { left: f(self.left), right: f(self.right), top: f(self.top), bottom: f(self.bottom) }
    }

    /// Returns a [`Line`] of the edges on the cross axis of `direction`
    pub fn horizontal_components(self) -> Line<T> {
        Line { start: self.left, end: self.right }
    }

    /// Returns a [`Line`] of the top and bottom edges
    pub fn vertical_components(self) -> Line<T> {
        Line { start: self.top, end: self.bottom }
    }
}

impl<T: Copy> Rect<T> {
    /// Creates a new [`Rect`] with the same value for every edge
    pub const fn splat(value: T) -> Self {
        Self { left: value, right: value, top: value, bottom: value }
    }
}

impl<T: Copy + Add<Output = T>> Rect<T> {
    /// The sum of the two edges in a given axis, e.g. `left + right`
    pub fn horizontal_axis_sum(&self) -> T {
        self.left + self.right
    }

    /// The sum of the two edges in a given axis, e.g. `top + bottom`
    pub fn vertical_axis_sum(&self) -> T {
        self.top + self.bottom
    }

    /// Returns `Size { width: left + right, height: top + bottom }`
    pub fn sum_axes(&self) -> Size<T> {
        Size { width: self.horizontal_axis_sum(), height: self.vertical_axis_sum() }
    }
}

impl<T: Add<Output = T>> Add for Rect<T> {
    type Output = Rect<T>;
    fn add(self, rhs: Rect<T>) -> Self::Output {
        Rect { left: self.left + rhs.left, right: self.right + rhs.right, top: self.top + rhs.top, bottom: self.bottom + rhs.bottom }
    }
}

impl<T: TaffyZero> TaffyZero for Rect<T> {
    const ZERO: Self = Rect { left: T::ZERO, right: T::ZERO, top: T::ZERO, bottom: T::ZERO };
}
impl<T: TaffyAuto> TaffyAuto for Rect<T> {
    const AUTO: Self = Rect { left: T::AUTO, right: T::AUTO, top: T::AUTO, bottom: T::AUTO };
}

impl Rect<f32> {
    /// Resolves this rect against a size (for out-of-flow inset resolution in §4.7)
    pub fn zip_size<R>(self, size: Size<f32>, f: impl Fn(f32, f32) -> R) -> Rect<R> {
        Rect { left: f(self.left, size.width), right: f(self.right, size.width), top: f(self.top, size.height), bottom: f(self.bottom, size.height) }
    }
}

/// A pair of values laid out along an axis, used both for grid lines
/// (`start`/`end` track index) and the "main"/"cross" flex axis pair.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line<T> {
    /// The start position of this line
    pub start: T,
    /// The end position of this line
    pub end: T,
}

impl<T: Copy> Line<T> {
    /// Creates a new [`Line`] with the same value for start and end
    pub const fn splat(value: T) -> Self {
        Self { start: value, end: value }
    }
}

impl Line<bool> {
    /// A [`Line<bool>`] with both start and end set to `true`
    pub const TRUE: Line<bool> = Line { start: true, end: true };
    /// A [`Line<bool>`] with both start and end set to `false`
    pub const FALSE: Line<bool> = Line { start: false, end: false };
}

impl<T> Line<T> {
    /// Applies the function `f` to both the start and end
    pub fn map<R>(self, f: impl Fn(T) -> R) -> Line<R> {
        Line { start: f(self.start), end: f(self.end) }
    }
}

/// One of the two absolute (i.e. not main/cross relative) axes of 2D space
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AbsoluteAxis {
    /// The horizontal axis
    Horizontal,
    /// The vertical axis
    Vertical,
}

impl AbsoluteAxis {
    /// Returns the other axis
    pub fn other_axis(&self) -> AbsoluteAxis {
        match self {
            AbsoluteAxis::Horizontal => AbsoluteAxis::Vertical,
            AbsoluteAxis::Vertical => AbsoluteAxis::Horizontal,
        }
    }
}

impl FlexDirection {
    /// Returns true for `Row`/`RowReverse`
    pub fn is_row(self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
    }

    /// Returns true for `Column`/`ColumnReverse`
    pub fn is_column(self) -> bool {
        matches!(self, FlexDirection::Column | FlexDirection::ColumnReverse)
    }

    /// Returns true for `RowReverse`/`ColumnReverse`
    pub fn is_reverse(self) -> bool {
        matches!(self, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
    }

    /// The main-axis [`AbsoluteAxis`] for this direction
    pub fn main_axis(self) -> AbsoluteAxis {
        if self.is_row() {
            AbsoluteAxis::Horizontal
        } else {
            AbsoluteAxis::Vertical
        }
    }
}
