//! Ergonomic constructors for the style value types, so that call sites can
//! write `length(10.0)` / `percent(0.5)` / `auto()` instead of spelling out
//! enum variants.
#[cfg(feature = "grid")]
use crate::style::{MaxTrackSizingFunction, MinTrackSizingFunction};

/// Implemented by types that have a zero value, e.g. `LengthPercentage::Length(0.0)`
pub trait TaffyZero {
    /// The zero value for this type
    const ZERO: Self;
}

/// Implemented by types that have an auto value, e.g. `Dimension::Auto`
pub trait TaffyAuto {
    /// The auto value for this type
    const AUTO: Self;
}

/// Implemented by types that have a `max-content` value
pub trait TaffyMaxContent {
    /// The `max-content` value for this type
    const MAX_CONTENT: Self;
}

/// Implemented by types that have a `min-content` value
pub trait TaffyMinContent {
    /// The `min-content` value for this type
    const MIN_CONTENT: Self;
}

/// Implemented by types that can be constructed from an absolute length
pub trait FromLength {
    /// Construct `Self` from a length value
    fn from_length<Input: Into<f32> + Copy>(value: Input) -> Self;
}

/// Implemented by types that can be constructed from a percentage (0.0..=1.0)
pub trait FromPercent {
    /// Construct `Self` from a fraction (where `1.0` == 100%)
    fn from_percent<Input: Into<f32> + Copy>(percent: Input) -> Self;
}

/// Implemented by types that can be constructed from a flex fraction (`fr` unit)
pub trait FromFlex {
    /// Construct `Self` from a flex-fraction value
    fn from_flex<Input: Into<f32> + Copy>(flex: Input) -> Self;
}

/// Creates a `Dimension`/`LengthPercentage`/`LengthPercentageAuto` of an absolute length
pub fn length<T: FromLength>(value: f32) -> T {
    T::from_length(value)
}

/// Creates a `Dimension`/`LengthPercentage`/`LengthPercentageAuto` representing a percentage
pub fn percent<T: FromPercent>(percent: f32) -> T {
    T::from_percent(percent)
}

/// Creates a `Dimension`/`LengthPercentageAuto` representing `auto`
pub fn auto<T: TaffyAuto>() -> T {
    T::AUTO
}

/// Creates a `LengthPercentage`/`Dimension` representing zero
pub fn zero<T: TaffyZero>() -> T {
    T::ZERO
}

/// Creates an `AvailableSpace`/track-sizing-function representing `min-content`
pub fn min_content<T: TaffyMinContent>() -> T {
    T::MIN_CONTENT
}

/// Creates an `AvailableSpace`/track-sizing-function representing `max-content`
pub fn max_content<T: TaffyMaxContent>() -> T {
    T::MAX_CONTENT
}

/// Creates a `fr()` flexible track sizing function
#[cfg(feature = "grid")]
pub fn fr(flex: f32) -> MaxTrackSizingFunction {
    MaxTrackSizingFunction::Fraction(flex)
}

/// Creates a `minmax(min, max)` track sizing function pair
#[cfg(feature = "grid")]
pub fn minmax(min: MinTrackSizingFunction, max: MaxTrackSizingFunction) -> (MinTrackSizingFunction, MaxTrackSizingFunction) {
    (min, max)
}

// `FromLength`/`FromPercent` impls for `Dimension`, `LengthPercentage` and
// `LengthPercentageAuto` live alongside their definitions in `style::dimension`.
