//! Value types shared across the grid placement and track-sizing passes.
use crate::geometry::{Line, Rect};
use crate::style::{AlignSelf, JustifySelf, MaxTrackSizingFunction, MinTrackSizingFunction};
use crate::tree::NodeId;

/// Which of the two grid axes is under consideration. `Inline` is the column
/// axis (`justify-*`), `Block` is the row axis (`align-*`).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(super) enum GridAxis {
    Inline,
    Block,
}

impl GridAxis {
    /// The other axis
    pub(super) fn other(self) -> GridAxis {
        match self {
            GridAxis::Inline => GridAxis::Block,
            GridAxis::Block => GridAxis::Inline,
        }
    }
}

/// A single row or column track, carrying both its sizing function and the
/// `base_size`/`growth_limit` pair the track-sizing algorithm resolves into
/// a definite size.
#[derive(Copy, Clone, Debug)]
pub(super) struct GridTrack {
    pub min_track_sizing_function: MinTrackSizingFunction,
    pub max_track_sizing_function: MaxTrackSizingFunction,
    /// The track's size as resolved so far; starts at the fixed minimum (or
    /// zero) and only grows during the algorithm.
    pub base_size: f32,
    /// The upper bound `base_size` may grow to during intrinsic sizing and
    /// track maximisation; starts at the fixed maximum (or `f32::INFINITY`).
    pub growth_limit: f32,
}

impl GridTrack {
    pub(super) fn new(min: MinTrackSizingFunction, max: MaxTrackSizingFunction) -> Self {
        let base_size = min.definite_value(None).unwrap_or(0.0);
        let growth_limit = max.definite_value(None).unwrap_or(f32::INFINITY);
        GridTrack { min_track_sizing_function: min, max_track_sizing_function: max, base_size, growth_limit: growth_limit.max(base_size) }
    }

    pub(super) fn is_flexible(&self) -> bool {
        self.max_track_sizing_function.is_flexible()
    }
}

/// A grid item with its placement in both axes already resolved to concrete,
/// 0-based, end-exclusive track index ranges.
pub(super) struct GridItem {
    pub node_id: NodeId,
    pub order: u32,
    pub column_indexes: Line<usize>,
    pub row_indexes: Line<usize>,
    pub margin: Rect<f32>,
    pub padding: Rect<f32>,
    pub border: Rect<f32>,
    pub justify_self: Option<JustifySelf>,
    pub align_self: Option<AlignSelf>,
}

impl GridItem {
    /// This item's track index range in `axis`
    pub(super) fn indexes(&self, axis: GridAxis) -> Line<usize> {
        match axis {
            GridAxis::Inline => self.column_indexes,
            GridAxis::Block => self.row_indexes,
        }
    }

    /// The number of tracks this item spans in `axis`
    pub(super) fn span(&self, axis: GridAxis) -> usize {
        let indexes = self.indexes(axis);
        indexes.end.saturating_sub(indexes.start)
    }

    /// Returns true if this item crosses at least one flexible (`fr`) track in `axis`
    pub(super) fn crosses_flexible_track(&self, axis: GridAxis, tracks: &[GridTrack]) -> bool {
        let indexes = self.indexes(axis);
        tracks[indexes.start..indexes.end].iter().any(GridTrack::is_flexible)
    }
}
