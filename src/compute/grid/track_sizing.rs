//! Track sizing (§4.6.3): initializing each track's `base_size`/`growth_limit`,
//! resolving intrinsic (content-based) contributions, maximising tracks to
//! fill the container, then expanding flexible (`fr`) tracks.
//! <https://www.w3.org/TR/css-grid-1/#algo-track-sizing>
//!
//! A single simplification runs through this module: an item spanning more
//! than one intrinsically-sized track has its content contribution divided
//! evenly across the tracks it crosses, rather than the multi-pass
//! filter-by-flexibility distribution the specification describes. For the
//! overwhelmingly common case of single-track items this makes no
//! difference; multi-track intrinsic items are sized slightly more
//! generously than a browser would.
use crate::geometry::{Line, Size};
use crate::style::AvailableSpace;
use crate::tree::{LayoutInput, LayoutTree, NodeId, RequestedAxis, RunMode, SizingMode};
use crate::util::sys::Vec;

use super::types::{GridAxis, GridItem, GridTrack};

/// Runs the full track-sizing algorithm for one axis (columns, then rows, or
/// vice versa). `other_axis_tracks` should be empty for the axis sized
/// first (its cross size isn't known yet) and the already-sized tracks for
/// the axis sized second.
pub(super) fn size_axis_tracks(
    tree: &mut impl LayoutTree,
    axis: GridAxis,
    axis_tracks: &mut Vec<GridTrack>,
    other_axis_tracks: &[GridTrack],
    items: &[GridItem],
    container_definite_size: Option<f32>,
    axis_available_space: AvailableSpace,
    gap: f32,
    other_gap: f32,
) {
    resolve_intrinsic_sizes(tree, axis, axis_tracks, other_axis_tracks, items, gap, other_gap);

    for track in axis_tracks.iter_mut() {
        if track.growth_limit == f32::INFINITY {
            track.growth_limit = track.base_size;
        }
    }

    maximize_tracks(axis_tracks, axis_available_space, gap);
    expand_flexible_tracks(axis_tracks, container_definite_size, gap);
}

fn measure(tree: &mut impl LayoutTree, node_id: NodeId, known_dimensions: Size<Option<f32>>, available_space: Size<AvailableSpace>) -> Size<f32> {
    tree.compute_child_layout(
        node_id,
        LayoutInput {
            known_dimensions,
            parent_size: Size::NONE,
            available_space,
            sizing_mode: SizingMode::ContentSize,
            axis: RequestedAxis::Both,
            run_mode: RunMode::ComputeSize,
            vertical_margins_are_collapsible: Line::FALSE,
        },
    )
    .size
}

/// §11.5: grows each track's `base_size` to its items' min-content
/// contribution, and `growth_limit` to their max-content contribution, for
/// tracks whose sizing function doesn't already give a fixed size.
fn resolve_intrinsic_sizes(tree: &mut impl LayoutTree, axis: GridAxis, axis_tracks: &mut Vec<GridTrack>, other_axis_tracks: &[GridTrack], items: &[GridItem], gap: f32, other_gap: f32) {
    for item in items {
        let indexes = item.indexes(axis);
        let span = indexes.end.saturating_sub(indexes.start);
        if span == 0 || indexes.end > axis_tracks.len() {
            continue;
        }

        let needs_min = axis_tracks[indexes.start..indexes.end].iter().any(|t| t.min_track_sizing_function.definite_value(None).is_none());
        let needs_max = axis_tracks[indexes.start..indexes.end].iter().any(|t| t.max_track_sizing_function.is_intrinsic());
        if !needs_min && !needs_max {
            continue;
        }

        let other_indexes = item.indexes(axis.other());
        let other_known_size = if other_axis_tracks.is_empty() || other_indexes.end > other_axis_tracks.len() {
            None
        } else {
            let other_span = other_indexes.end.saturating_sub(other_indexes.start);
            Some(other_axis_tracks[other_indexes.start..other_indexes.end].iter().map(|t| t.base_size).sum::<f32>() + other_gap * other_span.saturating_sub(1) as f32)
        };

        let known_dimensions = match axis {
            GridAxis::Inline => Size { width: None, height: other_known_size },
            GridAxis::Block => Size { width: other_known_size, height: None },
        };

        let min_content_size = measure(tree, item.node_id, known_dimensions, Size::MIN_CONTENT);
        let max_content_size = measure(tree, item.node_id, known_dimensions, Size::MAX_CONTENT);
        let (min_contribution, max_contribution) = match axis {
            GridAxis::Inline => (min_content_size.width, max_content_size.width),
            GridAxis::Block => (min_content_size.height, max_content_size.height),
        };

        if span == 1 {
            let track = &mut axis_tracks[indexes.start];
            if needs_min {
                track.base_size = track.base_size.max(min_contribution);
            }
            if needs_max {
                track.growth_limit = track.growth_limit.max(max_contribution);
            }
        } else {
            if needs_min {
                distribute_contribution(axis_tracks, indexes.start, indexes.end, min_contribution, gap, Target::Base);
            }
            if needs_max {
                distribute_contribution(axis_tracks, indexes.start, indexes.end, max_contribution, gap, Target::Growth);
            }
        }

        for track in axis_tracks[indexes.start..indexes.end].iter_mut() {
            if track.growth_limit < track.base_size {
                track.growth_limit = track.base_size;
            }
        }
    }
}

enum Target {
    Base,
    Growth,
}

/// Distributes a single item's content contribution across the tracks it
/// spans: first up to each track's current growth limit, then (if the
/// contribution still isn't met) evenly beyond those limits.
fn distribute_contribution(axis_tracks: &mut Vec<GridTrack>, start: usize, end: usize, contribution: f32, gap: f32, target: Target) {
    let indices: Vec<usize> = (start..end).collect();
    let gap_total = gap * indices.len().saturating_sub(1) as f32;

    match target {
        Target::Base => {
            let existing: f32 = indices.iter().map(|&i| axis_tracks[i].base_size).sum::<f32>() + gap_total;
            let extra = (contribution - existing).max(0.0);
            if extra <= 0.0 {
                return;
            }
            distribute_space_up_to_limits(axis_tracks, &indices, extra);

            let now: f32 = indices.iter().map(|&i| axis_tracks[i].base_size).sum::<f32>() + gap_total;
            let still_short = (contribution - now).max(0.0);
            if still_short > 0.0 {
                let share = still_short / indices.len() as f32;
                for &i in &indices {
                    axis_tracks[i].base_size += share;
                }
            }
        }
        Target::Growth => {
            let existing: f32 = indices.iter().map(|&i| if axis_tracks[i].growth_limit.is_finite() { axis_tracks[i].growth_limit } else { axis_tracks[i].base_size }).sum::<f32>() + gap_total;
            let extra = (contribution - existing).max(0.0);
            if extra <= 0.0 {
                return;
            }
            let share = extra / indices.len() as f32;
            for &i in &indices {
                let track = &mut axis_tracks[i];
                let current = if track.growth_limit.is_finite() { track.growth_limit } else { track.base_size };
                track.growth_limit = current + share;
            }
        }
    }
}

/// §11.5.1: grows the `affected` tracks' base sizes to absorb
/// `space_to_distribute`, preferring tracks furthest from their growth limit
/// and never exceeding it.
fn distribute_space_up_to_limits(axis_tracks: &mut Vec<GridTrack>, affected: &[usize], space_to_distribute: f32) {
    const THRESHOLD: f32 = 0.000001;
    let mut remaining = space_to_distribute;
    while remaining > THRESHOLD {
        let growable: Vec<usize> = affected.iter().copied().filter(|&i| axis_tracks[i].base_size < axis_tracks[i].growth_limit).collect();
        if growable.is_empty() {
            break;
        }
        let min_increase = growable.iter().map(|&i| axis_tracks[i].growth_limit - axis_tracks[i].base_size).fold(f32::INFINITY, f32::min);
        let increase = min_increase.min(remaining / growable.len() as f32);
        for &i in &growable {
            axis_tracks[i].base_size += increase;
        }
        remaining -= increase * growable.len() as f32;
    }
}

/// §11.6: distributes any remaining free space to tracks with a finite
/// growth limit, up to that limit.
fn maximize_tracks(axis_tracks: &mut Vec<GridTrack>, axis_available_space: AvailableSpace, gap: f32) {
    let used: f32 = axis_tracks.iter().map(|t| t.base_size).sum::<f32>() + gap * axis_tracks.len().saturating_sub(1) as f32;
    let free = axis_available_space.compute_free_space(used);

    if free == f32::INFINITY {
        for track in axis_tracks.iter_mut() {
            if track.growth_limit.is_finite() {
                track.base_size = track.growth_limit;
            }
        }
    } else if free > 0.0 {
        let all: Vec<usize> = (0..axis_tracks.len()).collect();
        distribute_space_up_to_limits(axis_tracks, &all, free);
    }
}

/// §12.7: finds the `fr` unit size against the container's definite size
/// (if any; flexible tracks with an indefinite container just keep their
/// intrinsically-resolved base size), then expands every flexible track to
/// its share.
fn expand_flexible_tracks(axis_tracks: &mut Vec<GridTrack>, container_definite_size: Option<f32>, gap: f32) {
    let flexible: Vec<usize> = axis_tracks.iter().enumerate().filter(|(_, t)| t.is_flexible()).map(|(i, _)| i).collect();
    if flexible.is_empty() {
        return;
    }

    let Some(container_size) = container_definite_size else {
        return;
    };

    let non_flex_used: f32 =
        axis_tracks.iter().enumerate().filter(|(i, _)| !flexible.contains(i)).map(|(_, t)| t.base_size).sum::<f32>() + gap * axis_tracks.len().saturating_sub(1) as f32;
    let free = (container_size - non_flex_used).max(0.0);

    let flex_factor_sum: f32 = flexible.iter().map(|&i| axis_tracks[i].max_track_sizing_function.definite_flex_factor().unwrap_or(0.0)).sum();
    if flex_factor_sum <= 0.0 {
        return;
    }

    let mut fr_unit = free / flex_factor_sum;
    for _ in 0..flexible.len() + 1 {
        let mut increased = false;
        for &i in &flexible {
            let factor = axis_tracks[i].max_track_sizing_function.definite_flex_factor().unwrap_or(0.0);
            if factor > 0.0 {
                let needed = axis_tracks[i].base_size / factor;
                if needed > fr_unit {
                    fr_unit = needed;
                    increased = true;
                }
            }
        }
        if !increased {
            break;
        }
    }

    for &i in &flexible {
        let factor = axis_tracks[i].max_track_sizing_function.definite_flex_factor().unwrap_or(0.0);
        let size = (factor * fr_unit).max(axis_tracks[i].base_size);
        axis_tracks[i].base_size = size;
        axis_tracks[i].growth_limit = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{MaxTrackSizingFunction, MinTrackSizingFunction};

    #[test]
    fn maximize_tracks_fills_available_space() {
        let mut tracks = Vec::new();
        tracks.push(GridTrack::new(MinTrackSizingFunction::Fixed(crate::style::LengthPercentage::Length(10.0)), MaxTrackSizingFunction::Auto));
        tracks.push(GridTrack::new(MinTrackSizingFunction::Fixed(crate::style::LengthPercentage::Length(10.0)), MaxTrackSizingFunction::Auto));
        maximize_tracks(&mut tracks, AvailableSpace::Definite(100.0), 0.0);
        assert!((tracks[0].base_size - 50.0).abs() < 0.01);
        assert!((tracks[1].base_size - 50.0).abs() < 0.01);
    }

    #[test]
    fn expand_flexible_tracks_respects_fixed_siblings() {
        let mut tracks = Vec::new();
        tracks.push(GridTrack::new(MinTrackSizingFunction::Auto, MaxTrackSizingFunction::Fixed(crate::style::LengthPercentage::Length(20.0))));
        tracks.push(GridTrack::new(MinTrackSizingFunction::Auto, MaxTrackSizingFunction::Fraction(1.0)));
        tracks[0].base_size = 20.0;
        tracks[0].growth_limit = 20.0;
        expand_flexible_tracks(&mut tracks, Some(100.0), 0.0);
        assert!((tracks[1].base_size - 80.0).abs() < 0.01);
    }
}
