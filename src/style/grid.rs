//! Style types specific to the CSS Grid formatting context: track sizing
//! functions, `repeat()` track lists, and line-based item placement.
//! <https://www.w3.org/TR/css-grid-1/>
use core::ops::Add;

use crate::style::dimension::LengthPercentage;
use crate::style_helpers::{FromFlex, FromLength, FromPercent, TaffyAuto, TaffyMaxContent, TaffyMinContent, TaffyZero};
use crate::util::sys::Vec;

/// The minimum end of a track sizing function's `minmax()` pair.
/// <https://www.w3.org/TR/css-grid-1/#valdef-grid-template-columns-min-content>
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MinTrackSizingFunction {
    /// A fixed length or percentage
    Fixed(LengthPercentage),
    /// The track's min-content contribution
    MinContent,
    /// The track's max-content contribution
    MaxContent,
    /// The largest of the track's items' automatic minimum sizes
    Auto,
}
impl TaffyZero for MinTrackSizingFunction {
    const ZERO: Self = Self::Fixed(LengthPercentage::Length(0.0));
}
impl TaffyAuto for MinTrackSizingFunction {
    const AUTO: Self = Self::Auto;
}
impl TaffyMinContent for MinTrackSizingFunction {
    const MIN_CONTENT: Self = Self::MinContent;
}
impl TaffyMaxContent for MinTrackSizingFunction {
    const MAX_CONTENT: Self = Self::MaxContent;
}
impl FromLength for MinTrackSizingFunction {
    fn from_length<Input: Into<f32> + Copy>(value: Input) -> Self {
        Self::Fixed(LengthPercentage::Length(value.into()))
    }
}
impl FromPercent for MinTrackSizingFunction {
    fn from_percent<Input: Into<f32> + Copy>(percent: Input) -> Self {
        Self::Fixed(LengthPercentage::Percent(percent.into()))
    }
}

impl MinTrackSizingFunction {
    /// The definite pixel value of a `Fixed` sizing function against `available_space`,
    /// or `None` for the intrinsic keywords (which the track-sizing algorithm resolves
    /// from item content instead).
    pub fn definite_value(&self, available_space: Option<f32>) -> Option<f32> {
        match self {
            MinTrackSizingFunction::Fixed(length) => match length {
                LengthPercentage::Length(value) => Some(*value),
                LengthPercentage::Percent(fraction) => available_space.map(|space| space * fraction),
            },
            _ => None,
        }
    }
}

/// The maximum end of a track sizing function's `minmax()` pair, plus the flexible `fr` unit.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaxTrackSizingFunction {
    /// A fixed length or percentage
    Fixed(LengthPercentage),
    /// The track's min-content contribution
    MinContent,
    /// The track's max-content contribution
    MaxContent,
    /// Grows to fit its content, but no further than the container allows (`auto`)
    Auto,
    /// A flexible `fr` share of the remaining free space
    Fraction(f32),
}
impl TaffyZero for MaxTrackSizingFunction {
    const ZERO: Self = Self::Fixed(LengthPercentage::Length(0.0));
}
impl TaffyAuto for MaxTrackSizingFunction {
    const AUTO: Self = Self::Auto;
}
impl TaffyMinContent for MaxTrackSizingFunction {
    const MIN_CONTENT: Self = Self::MinContent;
}
impl TaffyMaxContent for MaxTrackSizingFunction {
    const MAX_CONTENT: Self = Self::MaxContent;
}
impl FromLength for MaxTrackSizingFunction {
    fn from_length<Input: Into<f32> + Copy>(value: Input) -> Self {
        Self::Fixed(LengthPercentage::Length(value.into()))
    }
}
impl FromPercent for MaxTrackSizingFunction {
    fn from_percent<Input: Into<f32> + Copy>(percent: Input) -> Self {
        Self::Fixed(LengthPercentage::Percent(percent.into()))
    }
}
impl FromFlex for MaxTrackSizingFunction {
    fn from_flex<Input: Into<f32> + Copy>(flex: Input) -> Self {
        Self::Fraction(flex.into())
    }
}

impl MaxTrackSizingFunction {
    /// Returns true for the `fr` (flexible) variant
    pub fn is_flexible(&self) -> bool {
        matches!(self, MaxTrackSizingFunction::Fraction(_))
    }

    /// The `fr` factor of a flexible track, or `None`
    pub fn definite_flex_factor(&self) -> Option<f32> {
        match self {
            MaxTrackSizingFunction::Fraction(factor) => Some(*factor),
            _ => None,
        }
    }

    /// The definite pixel value of a `Fixed` sizing function against `available_space`,
    /// or `None` for the intrinsic keywords and `fr`.
    pub fn definite_value(&self, available_space: Option<f32>) -> Option<f32> {
        match self {
            MaxTrackSizingFunction::Fixed(length) => match length {
                LengthPercentage::Length(value) => Some(*value),
                LengthPercentage::Percent(fraction) => available_space.map(|space| space * fraction),
            },
            _ => None,
        }
    }

    /// Returns true for the intrinsic-sizing keywords (`min-content`, `max-content`, `auto`)
    pub fn is_intrinsic(&self) -> bool {
        matches!(self, MaxTrackSizingFunction::MinContent | MaxTrackSizingFunction::MaxContent | MaxTrackSizingFunction::Auto)
    }

    /// Returns true for the `max-content` keyword specifically
    pub fn is_max_content(&self) -> bool {
        matches!(self, MaxTrackSizingFunction::MaxContent)
    }
}

/// A non-repeated `minmax(min, max)` track sizing function pair; the unit that
/// appears once per track in an explicit template, or once per generated
/// track inside a `repeat()`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NonRepeatedTrackSizingFunction {
    /// The minimum track sizing function
    pub min: MinTrackSizingFunction,
    /// The maximum track sizing function
    pub max: MaxTrackSizingFunction,
}

impl NonRepeatedTrackSizingFunction {
    /// Create a `minmax(min, max)` sizing function
    pub fn minmax(min: MinTrackSizingFunction, max: MaxTrackSizingFunction) -> Self {
        Self { min, max }
    }

    /// Create a single-value (non-minmax) sizing function, where min and max coincide
    pub fn from_points(points: f32) -> Self {
        Self { min: MinTrackSizingFunction::Fixed(LengthPercentage::Length(points)), max: MaxTrackSizingFunction::Fixed(LengthPercentage::Length(points)) }
    }

    /// True if either side is an `fr` flexible sizing function
    pub fn has_fixed_component(&self) -> bool {
        matches!(self.min, MinTrackSizingFunction::Fixed(_)) || matches!(self.max, MaxTrackSizingFunction::Fixed(_))
    }
}

/// The kind of repetition used in a `repeat()` track list entry.
/// <https://www.w3.org/TR/css-grid-1/#repeat-notation>
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridTrackRepetition {
    /// `repeat(<positive-integer>, ...)`: a fixed, explicitly specified count
    Count(u16),
    /// `repeat(auto-fill, ...)`: as many tracks as fit without overflowing
    AutoFill,
    /// `repeat(auto-fit, ...)`: like `auto-fill`, but empty tracks collapse to zero size
    AutoFit,
}

impl GridTrackRepetition {
    /// Returns true for `AutoFill`/`AutoFit`
    pub fn is_auto(&self) -> bool {
        matches!(self, GridTrackRepetition::AutoFill | GridTrackRepetition::AutoFit)
    }
}

impl From<u16> for GridTrackRepetition {
    fn from(count: u16) -> Self {
        GridTrackRepetition::Count(count)
    }
}

/// A single entry of a `grid-template-rows`/`grid-template-columns` track list:
/// either a single track, or a `repeat()` group of one or more tracks.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackSizingFunction {
    /// A single, non-repeated track
    Single(NonRepeatedTrackSizingFunction),
    /// A `repeat()` of one or more tracks
    Repeat(GridTrackRepetition, Vec<NonRepeatedTrackSizingFunction>),
}

impl TrackSizingFunction {
    /// Returns `true` if this is a `repeat(auto-fill | auto-fit, ...)` entry
    pub fn is_auto_repetition(&self) -> bool {
        matches!(self, TrackSizingFunction::Repeat(repetition, _) if repetition.is_auto())
    }
}

/// Named line or area identifiers for `grid-template-areas`, stored row-major
/// as a flat list of strings, one per row, each row a space-separated list of
/// area names (`.` meaning "no area").
pub type GridTemplateAreas = Vec<GridTemplateArea>;

/// A single named area spanning a rectangular region of the explicit grid.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridTemplateArea {
    /// The area's name, as it appears in `grid-template-areas`
    pub name: crate::util::sys::String,
    /// 1-indexed, inclusive-exclusive row span
    pub row_start: u16,
    /// 1-indexed, inclusive-exclusive row span
    pub row_end: u16,
    /// 1-indexed, inclusive-exclusive column span
    pub column_start: u16,
    /// 1-indexed, inclusive-exclusive column span
    pub column_end: u16,
}

/// The order in which auto-placed items are assigned to grid cells.
/// <https://www.w3.org/TR/css-grid-1/#auto-placement-algo>
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridAutoFlow {
    /// Place items by filling each row in turn
    #[default]
    Row,
    /// Place items by filling each column in turn
    Column,
    /// Like `Row`, but use a "dense" packing algorithm that backtracks to fill earlier holes
    RowDense,
    /// Like `Column`, but use a "dense" packing algorithm that backtracks to fill earlier holes
    ColumnDense,
}

impl GridAutoFlow {
    /// Returns true for `Column`/`ColumnDense`
    pub fn is_column(self) -> bool {
        matches!(self, GridAutoFlow::Column | GridAutoFlow::ColumnDense)
    }

    /// Returns true for `RowDense`/`ColumnDense`
    pub fn is_dense(self) -> bool {
        matches!(self, GridAutoFlow::RowDense | GridAutoFlow::ColumnDense)
    }
}

/// A 1-indexed grid line coordinate, as it appears in `grid-row`/`grid-column`.
/// Negative values count backwards from the end of the explicit grid.
/// <https://www.w3.org/TR/css-grid-1/#line-placement>
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLine(pub i16);

impl From<i16> for GridLine {
    fn from(index: i16) -> Self {
        Self(index)
    }
}

impl Add<i16> for GridLine {
    type Output = GridLine;
    fn add(self, rhs: i16) -> Self::Output {
        GridLine(self.0 + rhs)
    }
}

/// A single side (start or end) of an item's `grid-row`/`grid-column` placement.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridPlacement {
    /// Place automatically, according to the grid's auto-placement algorithm
    #[default]
    Auto,
    /// Place at an explicit, possibly negative, line index
    Line(GridLine),
    /// Span `n` tracks from whichever line is otherwise determined
    Span(u16),
    /// Place against the named line implied by a `grid-template-areas` entry
    /// of this name (or a custom named line sharing the name)
    Named(crate::util::sys::String),
}

impl GridPlacement {
    /// Returns the explicit line, if this is a `Line` placement
    pub fn as_line(&self) -> Option<GridLine> {
        match self {
            GridPlacement::Line(line) => Some(*line),
            _ => None,
        }
    }

    /// Returns the span count, defaulting to `1` for `Auto`/`Line`
    pub fn span(&self) -> u16 {
        match self {
            GridPlacement::Span(span) => *span,
            _ => 1,
        }
    }
}

impl From<i16> for GridPlacement {
    fn from(index: i16) -> Self {
        GridPlacement::Line(GridLine(index))
    }
}
