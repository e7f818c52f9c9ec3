//! Track list expansion (§4.6.1) and item placement (§4.6.2): resolving each
//! `repeat()` entry to its constituent tracks, then assigning every in-flow
//! child a concrete, 0-based track index range in both axes.
//!
//! Two simplifications, both documented in the design notes: the explicit
//! grid never grows in the negative direction (an out-of-range negative line
//! clamps to line 1, rather than pushing the whole grid outward), and
//! auto-placement never grows the grid's cross axis (a `row`-flow item whose
//! span exceeds the column count is clamped to fit, rather than widening the
//! explicit grid).
use crate::geometry::{Line, Rect, Size};
use crate::style::{
    AlignSelf, Display, GridLine, GridPlacement, GridTemplateArea, GridTrackRepetition, JustifySelf, MaxTrackSizingFunction, MinTrackSizingFunction, NonRepeatedTrackSizingFunction, Position, Style,
    TrackSizingFunction,
};
use crate::tree::{NodeId, PartialLayoutTree};
use crate::util::sys::Vec;

use super::types::{GridItem, GridTrack};

/// Expands a `grid-template-columns`/`grid-template-rows` entry list into a
/// flat sequence of non-repeated track sizing functions. `repeat(<count>,
/// ...)` is expanded by direct repetition; `repeat(auto-fill | auto-fit,
/// ...)` fits as many repetitions as `available_space` allows (falling back
/// to a single repetition when the available space is indefinite).
pub(super) fn expand_track_list(template: &[TrackSizingFunction], available_space: Option<f32>, gap: f32) -> Vec<NonRepeatedTrackSizingFunction> {
    let mut expanded = Vec::new();
    for entry in template {
        match entry {
            TrackSizingFunction::Single(function) => expanded.push(*function),
            TrackSizingFunction::Repeat(GridTrackRepetition::Count(count), functions) => {
                for _ in 0..*count {
                    expanded.extend(functions.iter().copied());
                }
            }
            TrackSizingFunction::Repeat(_, functions) => {
                if functions.is_empty() {
                    continue;
                }
                let repetition_size: f32 = functions
                    .iter()
                    .map(|f| f.min.definite_value(available_space).or_else(|| f.max.definite_value(available_space)).unwrap_or(0.0))
                    .sum::<f32>()
                    + gap * functions.len().saturating_sub(1) as f32;

                let count = match available_space {
                    Some(space) if repetition_size + gap > 0.0 => ((space + gap) / (repetition_size + gap)).floor().max(1.0) as u16,
                    _ => 1,
                };
                for _ in 0..count {
                    expanded.extend(functions.iter().copied());
                }
            }
        }
    }
    expanded
}

/// Builds the final `Vec<GridTrack>` for one axis: the explicit tracks in
/// order, then implicit tracks (sized from `auto_sizing_functions`, cycled)
/// until `final_count` tracks exist.
pub(super) fn build_tracks(explicit: &[NonRepeatedTrackSizingFunction], final_count: usize, auto_sizing_functions: &[NonRepeatedTrackSizingFunction]) -> Vec<GridTrack> {
    let mut tracks = Vec::new();
    for function in explicit {
        tracks.push(GridTrack::new(function.min, function.max));
    }
    let mut auto_index = 0;
    while tracks.len() < final_count {
        let function = if auto_sizing_functions.is_empty() {
            NonRepeatedTrackSizingFunction { min: MinTrackSizingFunction::Auto, max: MaxTrackSizingFunction::Auto }
        } else {
            let f = auto_sizing_functions[auto_index % auto_sizing_functions.len()];
            auto_index += 1;
            f
        };
        tracks.push(GridTrack::new(function.min, function.max));
    }
    tracks
}

/// An item's placement in a single axis, before grid growth has been settled.
enum AxisPlacement {
    /// A fully-resolved, 0-based, end-exclusive track index range
    Definite { start: usize, end: usize },
    /// A span whose start is left to the auto-placement cursor
    Auto { span: usize },
}

/// Resolves one axis (`grid-column` or `grid-row`) of an item's placement
/// against the explicit track count, producing either a definite index range
/// or an auto span. Negative line numbers count back from the last explicit
/// line; out-of-range negative indices clamp to line 1.
fn resolve_axis_placement(line: Line<GridPlacement>, explicit_track_count: usize) -> AxisPlacement {
    let to_line_number = |raw: i16| -> usize {
        if raw > 0 {
            raw as usize
        } else if raw < 0 {
            let explicit_line_count = explicit_track_count as i64 + 1;
            (explicit_line_count + raw as i64 + 1).max(1) as usize
        } else {
            1
        }
    };

    match (line.start, line.end) {
        (GridPlacement::Line(s), GridPlacement::Line(e)) => {
            let start = to_line_number(s.0);
            let end = to_line_number(e.0).max(start + 1);
            AxisPlacement::Definite { start: start - 1, end: end - 1 }
        }
        (GridPlacement::Line(s), GridPlacement::Span(span)) => {
            let start = to_line_number(s.0);
            let span = (span as usize).max(1);
            AxisPlacement::Definite { start: start - 1, end: start - 1 + span }
        }
        (GridPlacement::Span(span), GridPlacement::Line(e)) => {
            let span = (span as usize).max(1);
            let end = to_line_number(e.0);
            let start = end.saturating_sub(span).max(1);
            AxisPlacement::Definite { start: start - 1, end: start - 1 + span }
        }
        (GridPlacement::Line(s), GridPlacement::Auto) => {
            let start = to_line_number(s.0);
            AxisPlacement::Definite { start: start - 1, end: start }
        }
        (GridPlacement::Auto, GridPlacement::Line(e)) => {
            let end = to_line_number(e.0);
            let start = end.saturating_sub(1).max(1);
            AxisPlacement::Definite { start: start - 1, end: start }
        }
        (GridPlacement::Span(span), GridPlacement::Auto) | (GridPlacement::Auto, GridPlacement::Span(span)) => AxisPlacement::Auto { span: (span as usize).max(1) },
        (GridPlacement::Span(_), GridPlacement::Span(_)) | (GridPlacement::Auto, GridPlacement::Auto) => AxisPlacement::Auto { span: 1 },
        // A `Named` placement is resolved against `grid-template-areas` by
        // `resolve_named_placement` before this function ever sees it; any
        // that reach here refer to an area name that doesn't exist, so they
        // fall back to auto-placement.
        _ => AxisPlacement::Auto { span: 1 },
    }
}

/// Resolves a `grid-row`/`grid-column` line pair against `grid-template-areas`:
/// a `Named(name)` placement on either side is replaced with the named area's
/// line range in this axis. Unknown area names fall back to auto-placement.
fn resolve_named_placement(line: Line<GridPlacement>, areas: &[GridTemplateArea], is_column_axis: bool) -> Line<GridPlacement> {
    let name = match (&line.start, &line.end) {
        (GridPlacement::Named(name), _) | (_, GridPlacement::Named(name)) => name,
        _ => return line,
    };

    match areas.iter().find(|area| &area.name == name) {
        Some(area) => {
            let (start, end) = if is_column_axis { (area.column_start, area.column_end) } else { (area.row_start, area.row_end) };
            Line { start: GridPlacement::Line(GridLine(start as i16)), end: GridPlacement::Line(GridLine(end as i16)) }
        }
        None => Line { start: GridPlacement::Auto, end: GridPlacement::Auto },
    }
}

struct DraftItem {
    node_id: NodeId,
    order: u32,
    column: AxisPlacement,
    row: AxisPlacement,
    margin: Rect<f32>,
    padding: Rect<f32>,
    border: Rect<f32>,
    justify_self: Option<JustifySelf>,
    align_self: Option<AlignSelf>,
}

fn ensure_rows(occupied: &mut Vec<Vec<bool>>, row_count: &mut usize, to: usize, col_count: usize) {
    while *row_count < to {
        let mut row = Vec::new();
        for _ in 0..col_count {
            row.push(false);
        }
        occupied.push(row);
        *row_count += 1;
    }
}

fn ensure_cols(occupied: &mut Vec<Vec<bool>>, col_count: &mut usize, to: usize) {
    if to > *col_count {
        for row in occupied.iter_mut() {
            while row.len() < to {
                row.push(false);
            }
        }
        *col_count = to;
    }
}

fn is_free(occupied: &[Vec<bool>], row_start: usize, row_end: usize, col_start: usize, col_end: usize) -> bool {
    occupied[row_start..row_end].iter().all(|row| row[col_start..col_end].iter().all(|cell| !cell))
}

fn occupy(occupied: &mut [Vec<bool>], row_start: usize, row_end: usize, col_start: usize, col_end: usize) {
    for row in &mut occupied[row_start..row_end] {
        for cell in &mut row[col_start..col_end] {
            *cell = true;
        }
    }
}

/// Places every in-flow child of `node` into the grid, growing the implicit
/// grid as needed, and returns the resolved items along with the grid's
/// final track counts in each axis.
pub(super) fn place_items(
    tree: &impl PartialLayoutTree,
    node: NodeId,
    explicit_col_count: usize,
    explicit_row_count: usize,
    node_inner_size: Size<Option<f32>>,
    style: &Style,
) -> (Vec<GridItem>, usize, usize) {
    let child_count = tree.child_count(node);
    let mut drafts = Vec::new();
    let mut order = 0u32;
    for index in 0..child_count {
        let child = tree.get_child_id(node, index);
        let child_style = tree.get_style(child);
        if child_style.display == Display::None || child_style.position == Position::Absolute {
            order += 1;
            continue;
        }
        let column_line = resolve_named_placement(child_style.grid_column.clone(), &style.grid_template_areas, true);
        let row_line = resolve_named_placement(child_style.grid_row.clone(), &style.grid_template_areas, false);
        drafts.push(DraftItem {
            node_id: child,
            order,
            column: resolve_axis_placement(column_line, explicit_col_count),
            row: resolve_axis_placement(row_line, explicit_row_count),
            margin: child_style.margin.resolve_or_zero_rect(node_inner_size),
            padding: child_style.padding.resolve_or_zero_rect(node_inner_size),
            border: child_style.border.resolve_or_zero_rect(node_inner_size),
            justify_self: child_style.justify_self,
            align_self: child_style.align_self,
        });
        order += 1;
    }

    let mut col_count = explicit_col_count.max(1);
    let mut row_count = explicit_row_count.max(1);
    for draft in &drafts {
        if let AxisPlacement::Definite { end, .. } = draft.column {
            col_count = col_count.max(end);
        }
        if let AxisPlacement::Definite { end, .. } = draft.row {
            row_count = row_count.max(end);
        }
    }

    let mut occupied: Vec<Vec<bool>> = Vec::new();
    for _ in 0..row_count {
        let mut row = Vec::new();
        for _ in 0..col_count {
            row.push(false);
        }
        occupied.push(row);
    }

    let mut results = Vec::new();

    // Pass 1: items with a definite placement in both axes never interact
    // with the auto-placement cursor, so they're placed first.
    for draft in &drafts {
        if let (AxisPlacement::Definite { start: cs, end: ce }, AxisPlacement::Definite { start: rs, end: re }) = (&draft.column, &draft.row) {
            let (cs, ce, rs, re) = (*cs, *ce, *rs, *re);
            ensure_cols(&mut occupied, &mut col_count, ce);
            ensure_rows(&mut occupied, &mut row_count, re, col_count);
            occupy(&mut occupied, rs, re, cs, ce);
            results.push((draft.node_id, draft.order, Line { start: cs, end: ce }, Line { start: rs, end: re }, draft.margin, draft.padding, draft.border, draft.justify_self, draft.align_self));
        }
    }

    let dense = style.grid_auto_flow.is_dense();
    let is_column_flow = style.grid_auto_flow.is_column();
    let max_probe = drafts.len() + col_count + row_count + 8;

    let mut cursor_row = 0usize;
    let mut cursor_col = 0usize;

    // Pass 2: remaining items, in document order, via the auto-placement cursor.
    for draft in &drafts {
        if matches!((&draft.column, &draft.row), (AxisPlacement::Definite { .. }, AxisPlacement::Definite { .. })) {
            continue;
        }
        if dense {
            cursor_row = 0;
            cursor_col = 0;
        }

        let (col_range, row_range) = match (&draft.column, &draft.row) {
            (AxisPlacement::Definite { start: cs, end: ce }, AxisPlacement::Auto { span }) => {
                let (cs, ce, span) = (*cs, *ce, *span);
                ensure_cols(&mut occupied, &mut col_count, ce);
                let mut r = cursor_row;
                loop {
                    ensure_rows(&mut occupied, &mut row_count, r + span, col_count);
                    if is_free(&occupied, r, r + span, cs, ce) {
                        break;
                    }
                    r += 1;
                    if r > max_probe {
                        break;
                    }
                }
                cursor_row = r;
                (Line { start: cs, end: ce }, Line { start: r, end: r + span })
            }
            (AxisPlacement::Auto { span }, AxisPlacement::Definite { start: rs, end: re }) => {
                let (rs, re, span) = (*rs, *re, *span);
                ensure_rows(&mut occupied, &mut row_count, re, col_count);
                let mut c = cursor_col;
                loop {
                    ensure_cols(&mut occupied, &mut col_count, c + span);
                    if is_free(&occupied, rs, re, c, c + span) {
                        break;
                    }
                    c += 1;
                    if c > max_probe {
                        break;
                    }
                }
                cursor_col = c;
                (Line { start: c, end: c + span }, Line { start: rs, end: re })
            }
            (AxisPlacement::Auto { span: col_span }, AxisPlacement::Auto { span: row_span }) => {
                let (col_span, row_span) = (*col_span, *row_span);
                if is_column_flow {
                    let col_span = col_span.min(col_count.max(col_span));
                    let mut c = cursor_col;
                    let mut r = cursor_row;
                    loop {
                        ensure_cols(&mut occupied, &mut col_count, c + col_span);
                        if r + row_span <= row_count && is_free(&occupied, r, r + row_span, c, c + col_span) {
                            break;
                        }
                        r += 1;
                        if r + row_span > row_count {
                            r = 0;
                            c += 1;
                        }
                        if c > max_probe {
                            break;
                        }
                    }
                    cursor_col = c;
                    cursor_row = r;
                    (Line { start: c, end: c + col_span }, Line { start: r, end: r + row_span })
                } else {
                    let col_span = col_span.min(col_count.max(1));
                    let mut r = cursor_row;
                    let mut c = cursor_col;
                    loop {
                        ensure_rows(&mut occupied, &mut row_count, r + row_span, col_count);
                        if c + col_span <= col_count && is_free(&occupied, r, r + row_span, c, c + col_span) {
                            break;
                        }
                        c += 1;
                        if c + col_span > col_count {
                            c = 0;
                            r += 1;
                        }
                        if r > max_probe {
                            break;
                        }
                    }
                    cursor_row = r;
                    cursor_col = c;
                    (Line { start: c, end: c + col_span }, Line { start: r, end: r + row_span })
                }
            }
            _ => unreachable!("fully-definite items were placed in pass 1"),
        };

        occupy(&mut occupied, row_range.start, row_range.end, col_range.start, col_range.end);
        results.push((draft.node_id, draft.order, col_range, row_range, draft.margin, draft.padding, draft.border, draft.justify_self, draft.align_self));
    }

    let items = results
        .into_iter()
        .map(|(node_id, order, column_indexes, row_indexes, margin, padding, border, justify_self, align_self)| GridItem {
            node_id,
            order,
            column_indexes,
            row_indexes,
            margin,
            padding,
            border,
            justify_self,
            align_self,
        })
        .collect();

    (items, col_count, row_count)
}
