//! Small platform-abstraction helpers so the rest of the crate can stay
//! agnostic to whether `std` is available.
#[cfg(feature = "alloc")]
pub use self::alloc_types::*;

#[cfg(feature = "alloc")]
mod alloc_types {
    extern crate alloc;
    pub use alloc::boxed::Box;
    pub use alloc::string::String;
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

/// `f32::abs` is not available in `core` without the `libm` crate; this
/// bit-twiddling equivalent works in `no_std` builds without extra dependencies.
#[inline(always)]
pub fn abs(value: f32) -> f32 {
    f32::from_bits(value.to_bits() & 0x7fff_ffff)
}

/// Rounds half away from zero, without requiring `std`'s `f32::round`.
#[inline(always)]
pub fn round(value: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        value.round()
    }
    #[cfg(not(feature = "std"))]
    {
        if value >= 0.0 {
            f32_floor(value + 0.5)
        } else {
            f32_floor(value - 0.5) + 1.0
        }
    }
}

#[cfg(not(feature = "std"))]
fn f32_floor(value: f32) -> f32 {
    let truncated = value as i64 as f32;
    if value < truncated {
        truncated - 1.0
    } else {
        truncated
    }
}

/// A new-node-id style monotonic counter, used by the arena's node ids
/// indirectly via `slotmap`; kept here as a single place that would need to
/// change if `slotmap`'s key type were ever swapped out.
pub type NodeKeyStorage = slotmap::DefaultKey;
