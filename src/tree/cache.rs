//! Per-node layout result cache.
use crate::geometry::Size;
use crate::style::AvailableSpace;
use crate::tree::{LayoutOutput, RunMode};

/// Number of intermediate `compute_size`-mode entries cached per node, in
/// addition to the single `perform_layout` entry. A node is typically asked
/// for its size multiple times during a parent's intrinsic-size probing
/// (width-then-height, or one probe per flex line) before a final layout
/// pass is performed, so caching a handful of these avoids recomputation.
const CACHE_SIZE: usize = 7;

#[derive(Debug, PartialEq, Clone, Copy)]
struct CacheEntry {
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    content: LayoutOutput,
}

/// A fixed-capacity store of the `LayoutOutput`s previously computed for a
/// node, so that repeated queries with the same inputs can be served without
/// re-running the formatting context's algorithm.
#[derive(Debug, Clone)]
pub struct Cache {
    final_layout_entry: Option<CacheEntry>,
    measure_entries: [Option<CacheEntry>; CACHE_SIZE],
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl Cache {
    /// Create an empty cache
    pub const fn new() -> Self {
        Self { final_layout_entry: None, measure_entries: [None; CACHE_SIZE] }
    }

    /// Return a cached result for the given inputs, if one is present
    pub fn get(
        &self,
        known_dimensions: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
        run_mode: RunMode,
    ) -> Option<LayoutOutput> {
        if run_mode == RunMode::PerformLayout {
            let entry = self.final_layout_entry.as_ref()?;
            if cache_key_matches(entry, known_dimensions, available_space) {
                return Some(entry.content);
            }
            return None;
        }

        for entry in self.measure_entries.iter().flatten() {
            if cache_key_matches(entry, known_dimensions, available_space) {
                return Some(entry.content);
            }
        }
        None
    }

    /// Store a result for the given inputs, evicting the oldest entry if full
    pub fn store(
        &mut self,
        known_dimensions: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
        run_mode: RunMode,
        content: LayoutOutput,
    ) {
        let entry = CacheEntry { known_dimensions, available_space, content };
        if run_mode == RunMode::PerformLayout {
            self.final_layout_entry = Some(entry);
            return;
        }

        // A definite known dimension makes a slot's result reusable across a
        // wider set of future queries for the other axis; prefer to insert at
        // the first free slot, else overwrite the last slot (roughly a
        // last-insert-replaces-least-recently-used policy at fixed capacity).
        if let Some(empty_slot) = self.measure_entries.iter_mut().find(|slot| slot.is_none()) {
            *empty_slot = Some(entry);
        } else {
            self.measure_entries[CACHE_SIZE - 1] = Some(entry);
        }
    }

    /// Clear every cached entry. Called when a node's style changes, or its
    /// subtree is otherwise invalidated.
    pub fn clear(&mut self) {
        self.final_layout_entry = None;
        self.measure_entries = [None; CACHE_SIZE];
    }

    /// Returns true if this node has never computed a `PerformLayout` result,
    /// i.e. has never had a definitive size assigned
    pub fn is_empty(&self) -> bool {
        self.final_layout_entry.is_none() && self.measure_entries.iter().all(Option::is_none)
    }
}

fn cache_key_matches(entry: &CacheEntry, known_dimensions: Size<Option<f32>>, available_space: Size<AvailableSpace>) -> bool {
    let size_matches = |a: Option<f32>, b: Option<f32>| match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => (a - b).abs() < f32::EPSILON,
        _ => false,
    };

    let space_matches = |a: AvailableSpace, known: Option<f32>, b: AvailableSpace| {
        // A known (definite) dimension takes precedence over available space
        // in determining a node's size in that axis, so a cached entry with a
        // matching known dimension is reusable regardless of available space.
        known.is_some() || a.is_roughly_equal(b)
    };

    size_matches(entry.known_dimensions.width, known_dimensions.width)
        && size_matches(entry.known_dimensions.height, known_dimensions.height)
        && space_matches(entry.available_space.width, known_dimensions.width, available_space.width)
        && space_matches(entry.available_space.height, known_dimensions.height, available_space.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn dummy_output() -> LayoutOutput {
        LayoutOutput::HIDDEN
    }

    #[test]
    fn empty_cache_returns_none() {
        let cache = Cache::new();
        let result = cache.get(Size::NONE, Size::MAX_CONTENT, RunMode::PerformLayout);
        assert!(result.is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn store_and_retrieve_final_layout() {
        let mut cache = Cache::new();
        let known_dimensions = Size { width: Some(100.0), height: None };
        let available_space = Size::MAX_CONTENT;
        cache.store(known_dimensions, available_space, RunMode::PerformLayout, dummy_output());
        let result = cache.get(known_dimensions, available_space, RunMode::PerformLayout);
        assert!(result.is_some());
        assert!(!cache.is_empty());
    }

    #[test]
    fn clear_empties_all_slots() {
        let mut cache = Cache::new();
        cache.store(Size::NONE, Size::MAX_CONTENT, RunMode::PerformLayout, dummy_output());
        cache.store(Size::NONE, Size::MIN_CONTENT, RunMode::ComputeSize, dummy_output());
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn measure_entries_evict_last_slot_when_full() {
        let mut cache = Cache::new();
        for i in 0..(CACHE_SIZE + 2) {
            let known_dimensions = Size { width: Some(i as f32), height: None };
            cache.store(known_dimensions, Size::MAX_CONTENT, RunMode::ComputeSize, dummy_output());
        }
        // Doesn't panic and still finds the most recently stored entry
        let last = Size { width: Some((CACHE_SIZE + 1) as f32), height: None };
        assert!(cache.get(last, Size::MAX_CONTENT, RunMode::ComputeSize).is_some());
        let _ = Point::<f32>::ZERO;
    }
}
