//! Helper traits for resolving style values (which may be definite, a
//! percentage, or absent/auto) against a basis size, without every algorithm
//! needing to repeat the same `match` arms.
use crate::geometry::{Rect, Size};
use crate::style::{Dimension, LengthPercentage, LengthPercentageAuto};
use crate::util::sys::abs;

/// Resolves a style value into a `Option<f32>`, given a context (commonly
/// the size of the containing block) that percentages are resolved against.
pub trait MaybeResolve<In, Out> {
    /// Resolve `self` against `context`
    fn maybe_resolve(self, context: In) -> Out;
}

impl MaybeResolve<Option<f32>, Option<f32>> for Dimension {
    fn maybe_resolve(self, context: Option<f32>) -> Option<f32> {
        match self {
            Dimension::Length(length) => Some(length),
            Dimension::Percent(percent) => context.map(|dim| dim * percent),
            Dimension::Auto => None,
        }
    }
}

impl MaybeResolve<Option<f32>, Option<f32>> for LengthPercentage {
    fn maybe_resolve(self, context: Option<f32>) -> Option<f32> {
        match self {
            LengthPercentage::Length(length) => Some(length),
            LengthPercentage::Percent(percent) => context.map(|dim| dim * percent),
        }
    }
}

impl MaybeResolve<Option<f32>, Option<f32>> for LengthPercentageAuto {
    fn maybe_resolve(self, context: Option<f32>) -> Option<f32> {
        match self {
            LengthPercentageAuto::Length(length) => Some(length),
            LengthPercentageAuto::Percent(percent) => context.map(|dim| dim * percent),
            LengthPercentageAuto::Auto => None,
        }
    }
}

impl<In, Out, T: MaybeResolve<In, Out> + Copy> MaybeResolve<Size<In>, Size<Out>> for Size<T> {
    fn maybe_resolve(self, context: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_resolve(context.width), height: self.height.maybe_resolve(context.height) }
    }
}

impl<T: MaybeResolve<Option<f32>, Option<f32>> + Copy> MaybeResolve<Size<Option<f32>>, Rect<Option<f32>>> for Rect<T> {
    fn maybe_resolve(self, context: Size<Option<f32>>) -> Rect<Option<f32>> {
        Rect {
            left: self.left.maybe_resolve(context.width),
            right: self.right.maybe_resolve(context.width),
            top: self.top.maybe_resolve(context.height),
            bottom: self.bottom.maybe_resolve(context.height),
        }
    }
}

/// Like [`MaybeResolve`], but producing `0.0` instead of `None` for
/// non-definite values (used for margin/padding/border, which contribute
/// `0` to box-size math when unset).
pub trait ResolveOrZero<In> {
    /// Resolve `self` against `context`, substituting `0.0` for indefinite results
    fn resolve_or_zero(self, context: In) -> f32;
}

impl<In, T: MaybeResolve<In, Option<f32>>> ResolveOrZero<In> for T {
    fn resolve_or_zero(self, context: In) -> f32 {
        self.maybe_resolve(context).unwrap_or(0.0)
    }
}

impl<T: ResolveOrZero<Option<f32>> + Copy> Rect<T> {
    /// Resolve every edge against the corresponding axis of `context`, substituting `0.0` for indefinite edges
    pub fn resolve_or_zero_rect(self, context: Size<Option<f32>>) -> Rect<f32> {
        Rect {
            left: self.left.resolve_or_zero(context.width),
            right: self.right.resolve_or_zero(context.width),
            top: self.top.resolve_or_zero(context.height),
            bottom: self.bottom.resolve_or_zero(context.height),
        }
    }
}

/// Arithmetic over `Option<f32>` that treats `None` (auto/indefinite) as an
/// absorbing element rather than panicking, mirroring how CSS box math
/// propagates indefiniteness.
pub trait MaybeMath<In, Out> {
    /// `self + rhs`, `None` if either operand is `None`
    fn maybe_add(self, rhs: In) -> Out;
    /// `self - rhs`, `None` if either operand is `None`
    fn maybe_sub(self, rhs: In) -> Out;
    /// `self * rhs`, `None` if either operand is `None`
    fn maybe_mul(self, rhs: In) -> Out;
    /// `self.min(rhs)`; `None` values are ignored (treated as unbounded)
    fn maybe_min(self, rhs: In) -> Out;
    /// `self.max(rhs)`; `None` values are ignored (treated as unbounded)
    fn maybe_max(self, rhs: In) -> Out;
    /// Clamp `self` to the `[min, max]` range; `None` bounds are unbounded. `max` wins if `min > max`.
    fn maybe_clamp(self, min: In, max: In) -> Out;
    /// Returns `self` if `Some` and >= 0.0, else 0.0 (only meaningful on `f32`)
    fn max(self, rhs: In) -> Out;
    /// Returns `self` if `Some` and <= `rhs`, else `rhs` (only meaningful on `f32`)
    fn min(self, rhs: In) -> Out;
}

impl<In: Copy, Out, T: MaybeMath<In, Out> + Copy> MaybeMath<Size<In>, Size<Out>> for Size<T> {
    fn maybe_add(self, rhs: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_add(rhs.width), height: self.height.maybe_add(rhs.height) }
    }
    fn maybe_sub(self, rhs: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_sub(rhs.width), height: self.height.maybe_sub(rhs.height) }
    }
    fn maybe_mul(self, rhs: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_mul(rhs.width), height: self.height.maybe_mul(rhs.height) }
    }
    fn maybe_min(self, rhs: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_min(rhs.width), height: self.height.maybe_min(rhs.height) }
    }
    fn maybe_max(self, rhs: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_max(rhs.width), height: self.height.maybe_max(rhs.height) }
    }
    fn maybe_clamp(self, min: Size<In>, max: Size<In>) -> Size<Out> {
        Size { width: self.width.maybe_clamp(min.width, max.width), height: self.height.maybe_clamp(min.height, max.height) }
    }
    fn max(self, rhs: Size<In>) -> Size<Out> {
        Size { width: self.width.max(rhs.width), height: self.height.max(rhs.height) }
    }
    fn min(self, rhs: Size<In>) -> Size<Out> {
        Size { width: self.width.min(rhs.width), height: self.height.min(rhs.height) }
    }
}

impl MaybeMath<Option<f32>, Option<f32>> for Option<f32> {
    fn maybe_add(self, rhs: Option<f32>) -> Option<f32> {
        match (self, rhs) {
            (Some(a), Some(b)) => Some(a + b),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }
    fn maybe_sub(self, rhs: Option<f32>) -> Option<f32> {
        match (self, rhs) {
            (Some(a), Some(b)) => Some(a - b),
            (Some(a), None) => Some(a),
            (None, _) => None,
        }
    }
    fn maybe_mul(self, rhs: Option<f32>) -> Option<f32> {
        match (self, rhs) {
            (Some(a), Some(b)) => Some(a * b),
            _ => None,
        }
    }
    fn maybe_min(self, rhs: Option<f32>) -> Option<f32> {
        match (self, rhs) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }
    fn maybe_max(self, rhs: Option<f32>) -> Option<f32> {
        match (self, rhs) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }
    fn maybe_clamp(self, min: Option<f32>, max: Option<f32>) -> Option<f32> {
        // max-over-min precedence: a conflicting max-size wins over min-size
        match self {
            Some(value) => {
                let mut value = value;
                if let Some(min) = min {
                    value = value.max(min);
                }
                if let Some(max) = max {
                    value = value.min(max);
                }
                Some(value)
            }
            None => None,
        }
    }
    fn max(self, rhs: Option<f32>) -> Option<f32> {
        self.maybe_max(rhs)
    }
    fn min(self, rhs: Option<f32>) -> Option<f32> {
        match (self, rhs) {
            (Some(a), Some(b)) => Some(a.min(b)),
            _ => self,
        }
    }
}

impl MaybeMath<Option<f32>, f32> for f32 {
    fn maybe_add(self, rhs: Option<f32>) -> f32 {
        match rhs {
            Some(rhs) => self + rhs,
            None => self,
        }
    }
    fn maybe_sub(self, rhs: Option<f32>) -> f32 {
        match rhs {
            Some(rhs) => self - rhs,
            None => self,
        }
    }
    fn maybe_mul(self, rhs: Option<f32>) -> f32 {
        match rhs {
            Some(rhs) => self * rhs,
            None => self,
        }
    }
    fn maybe_min(self, rhs: Option<f32>) -> f32 {
        match rhs {
            Some(rhs) => self.min(rhs),
            None => self,
        }
    }
    fn maybe_max(self, rhs: Option<f32>) -> f32 {
        match rhs {
            Some(rhs) => self.max(rhs),
            None => self,
        }
    }
    fn maybe_clamp(self, min: Option<f32>, max: Option<f32>) -> f32 {
        let mut value = self;
        if let Some(min) = min {
            value = value.max(min);
        }
        if let Some(max) = max {
            value = value.min(max);
        }
        value
    }
    fn max(self, rhs: Option<f32>) -> f32 {
        self.maybe_max(rhs)
    }
    fn min(self, rhs: Option<f32>) -> f32 {
        self.maybe_min(rhs)
    }
}

/// Returns true if `a` and `b` differ by less than `f32::EPSILON`
pub fn eq_f32(a: f32, b: f32) -> bool {
    abs(a - b) < f32::EPSILON
}

/// Extension trait for filling in a missing width/height from the other
/// axis via a fixed `width / height` aspect ratio.
pub trait MaybeApplyAspectRatio {
    /// Fill in a missing axis using `aspect_ratio`, if one axis is known and the other is not
    fn maybe_apply_aspect_ratio(self, aspect_ratio: Option<f32>) -> Self;
}

impl MaybeApplyAspectRatio for Size<Option<f32>> {
    fn maybe_apply_aspect_ratio(self, aspect_ratio: Option<f32>) -> Self {
        match aspect_ratio {
            None => self,
            Some(ratio) => match (self.width, self.height) {
                (Some(width), None) => Size { width: Some(width), height: Some(width / ratio) },
                (None, Some(height)) => Size { width: Some(height * ratio), height: Some(height) },
                _ => self,
            },
        }
    }
}
