//! Final item positioning (§4.6.4): distributing any leftover free space
//! across tracks via `justify-content`/`align-content`, then placing each
//! item within its cell according to `justify-self`/`align-self`.
use crate::geometry::{Line, Point, Rect, Size};
use crate::style::{AlignItems, AvailableSpace, Display, JustifyContent, Position, Style};
use crate::tree::{LayoutInput, LayoutTree, NodeId, RequestedAxis, RunMode, SizingMode};
use crate::util::resolve::{MaybeApplyAspectRatio, MaybeResolve};
use crate::util::sys::Vec;

use super::types::GridItem;

/// Distributes `container_size - sum(track_sizes)` according to
/// `justify_content`, returning each track's start offset (content-box
/// relative). `Stretch` grows every track by an equal share instead of
/// leaving gaps; `track_sizes` is updated in place to match.
pub(super) fn compute_track_offsets(track_sizes: &mut [f32], gap: f32, container_size: f32, justify_content: JustifyContent) -> Vec<f32> {
    let n = track_sizes.len();
    let used: f32 = track_sizes.iter().sum::<f32>() + gap * n.saturating_sub(1) as f32;
    let mut free = (container_size - used).max(0.0);

    if justify_content == JustifyContent::Stretch && n > 0 {
        let extra_per_track = free / n as f32;
        for size in track_sizes.iter_mut() {
            *size += extra_per_track;
        }
        free = 0.0;
    }

    let (mut cursor, gap_between) = match justify_content {
        JustifyContent::Start | JustifyContent::FlexStart | JustifyContent::Stretch => (0.0, gap),
        JustifyContent::End | JustifyContent::FlexEnd => (free, gap),
        JustifyContent::Center => (free / 2.0, gap),
        JustifyContent::SpaceBetween => (0.0, if n > 1 { gap + free / (n - 1) as f32 } else { gap }),
        JustifyContent::SpaceAround => {
            let per_track = if n > 0 { free / n as f32 } else { 0.0 };
            (per_track / 2.0, gap + per_track)
        }
        JustifyContent::SpaceEvenly => {
            let per_gap = if n > 0 { free / (n + 1) as f32 } else { 0.0 };
            (per_gap, gap + per_gap)
        }
    };

    let mut offsets = Vec::new();
    for &size in track_sizes.iter() {
        offsets.push(cursor);
        cursor += size + gap_between;
    }
    offsets
}

fn resolve_natural_size(tree: &mut impl LayoutTree, node_id: NodeId, cell_size: Size<f32>) -> Size<f32> {
    let output = tree.compute_child_layout(
        node_id,
        LayoutInput {
            known_dimensions: Size::NONE,
            parent_size: Size { width: Some(cell_size.width), height: Some(cell_size.height) },
            available_space: Size { width: AvailableSpace::Definite(cell_size.width), height: AvailableSpace::Definite(cell_size.height) },
            sizing_mode: SizingMode::ContentSize,
            axis: RequestedAxis::Both,
            run_mode: RunMode::ComputeSize,
            vertical_margins_are_collapsible: Line::FALSE,
        },
    );
    Size { width: output.size.width.min(cell_size.width), height: output.size.height.min(cell_size.height) }
}

/// Lays out every in-flow item within its resolved cell, applying
/// `justify-self`/`align-self` (defaulting to `stretch`) and the item's margin.
pub(super) fn write_item_layouts(
    tree: &mut impl LayoutTree,
    items: &[GridItem],
    column_sizes: &[f32],
    column_offsets: &[f32],
    row_sizes: &[f32],
    row_offsets: &[f32],
    container_style: &Style,
    padding: Rect<f32>,
    border: Rect<f32>,
    run_mode: RunMode,
) {
    if run_mode == RunMode::ComputeSize {
        return;
    }

    for item in items {
        let Line { start: cs, end: ce } = item.column_indexes;
        let Line { start: rs, end: re } = item.row_indexes;
        if ce == 0 || re == 0 || ce > column_sizes.len() || re > row_sizes.len() {
            continue;
        }

        let cell_x0 = column_offsets[cs];
        let cell_x1 = column_offsets[ce - 1] + column_sizes[ce - 1];
        let cell_y0 = row_offsets[rs];
        let cell_y1 = row_offsets[re - 1] + row_sizes[re - 1];

        let margin = item.margin;
        let cell_size = Size {
            width: (cell_x1 - cell_x0 - margin.horizontal_axis_sum()).max(0.0),
            height: (cell_y1 - cell_y0 - margin.vertical_axis_sum()).max(0.0),
        };

        let justify_self = container_style.resolved_justify_items(item.justify_self);
        let align_self = container_style.resolved_align_items(item.align_self);
        let needs_probe = justify_self != AlignItems::Stretch || align_self != AlignItems::Stretch;
        let natural = if needs_probe { Some(resolve_natural_size(tree, item.node_id, cell_size)) } else { None };

        let (width, x_in_cell) = if justify_self == AlignItems::Stretch {
            (cell_size.width, 0.0)
        } else {
            let natural_width = natural.unwrap().width;
            let offset = match justify_self {
                AlignItems::End | AlignItems::FlexEnd => cell_size.width - natural_width,
                AlignItems::Center => (cell_size.width - natural_width) / 2.0,
                _ => 0.0,
            };
            (natural_width, offset.max(0.0))
        };

        let (height, y_in_cell) = if align_self == AlignItems::Stretch {
            (cell_size.height, 0.0)
        } else {
            let natural_height = natural.unwrap().height;
            let offset = match align_self {
                AlignItems::End | AlignItems::FlexEnd => cell_size.height - natural_height,
                AlignItems::Center => (cell_size.height - natural_height) / 2.0,
                _ => 0.0,
            };
            (natural_height, offset.max(0.0))
        };

        let size = Size { width, height };
        tree.compute_child_layout(
            item.node_id,
            LayoutInput {
                known_dimensions: Size { width: Some(size.width), height: Some(size.height) },
                parent_size: Size { width: Some(size.width), height: Some(size.height) },
                available_space: Size { width: AvailableSpace::Definite(size.width), height: AvailableSpace::Definite(size.height) },
                sizing_mode: SizingMode::InherentSize,
                axis: RequestedAxis::Both,
                run_mode: RunMode::PerformLayout,
                vertical_margins_are_collapsible: Line::FALSE,
            },
        );

        let layout = tree.get_unrounded_layout_mut(item.node_id);
        layout.order = item.order;
        layout.size = size;
        layout.margin = margin;
        layout.padding = item.padding;
        layout.border = item.border;
        layout.location = Point {
            x: padding.left + border.left + cell_x0 + margin.left + x_in_cell,
            y: padding.top + border.top + cell_y0 + margin.top + y_in_cell,
        };
    }
}

/// Lays out this grid container's absolutely-positioned children against its
/// padding-box, identically to the flexbox/block formatting contexts.
pub(super) fn perform_absolute_layout(tree: &mut impl LayoutTree, node: NodeId, container_size: Size<f32>, padding: Rect<f32>, border: Rect<f32>) {
    let child_count = tree.child_count(node);
    let content_area = Size {
        width: container_size.width - padding.horizontal_axis_sum() - border.horizontal_axis_sum(),
        height: container_size.height - padding.vertical_axis_sum() - border.vertical_axis_sum(),
    };
    let offset = Point { x: padding.left + border.left, y: padding.top + border.top };

    for index in 0..child_count {
        let child = tree.get_child_id(node, index);
        let child_style = tree.get_style(child).clone();
        if child_style.position != Position::Absolute || child_style.display == Display::None {
            continue;
        }

        let aspect_ratio = child_style.aspect_ratio;
        let area_size_opt = Size { width: Some(content_area.width), height: Some(content_area.height) };
        let left = child_style.inset.left.maybe_resolve(area_size_opt.width);
        let top = child_style.inset.top.maybe_resolve(area_size_opt.height);
        let right = child_style.inset.right.maybe_resolve(area_size_opt.width);
        let bottom = child_style.inset.bottom.maybe_resolve(area_size_opt.height);

        let style_size = child_style.size.maybe_resolve(area_size_opt).maybe_apply_aspect_ratio(aspect_ratio);
        let known_dimensions = Size {
            width: style_size.width.or_else(|| match (left, right) {
                (Some(l), Some(r)) => Some((content_area.width - l - r).max(0.0)),
                _ => None,
            }),
            height: style_size.height.or_else(|| match (top, bottom) {
                (Some(t), Some(b)) => Some((content_area.height - t - b).max(0.0)),
                _ => None,
            }),
        };

        let output = tree.compute_child_layout(
            child,
            LayoutInput {
                known_dimensions,
                parent_size: area_size_opt,
                available_space: Size { width: AvailableSpace::Definite(content_area.width), height: AvailableSpace::Definite(content_area.height) },
                sizing_mode: SizingMode::ContentSize,
                axis: RequestedAxis::Both,
                run_mode: RunMode::PerformLayout,
                vertical_margins_are_collapsible: Line::FALSE,
            },
        );
        let final_size = known_dimensions.unwrap_or(output.size);

        let margin = child_style.margin.map(|m| m.resolve_to_option(content_area.width).unwrap_or(0.0));
        let location = Point {
            x: left.map(|l| l + margin.left).unwrap_or_else(|| right.map(|r| content_area.width - final_size.width - r - margin.right).unwrap_or(margin.left)),
            y: top.map(|t| t + margin.top).unwrap_or_else(|| bottom.map(|b| content_area.height - final_size.height - b - margin.bottom).unwrap_or(margin.top)),
        };

        let layout = tree.get_unrounded_layout_mut(child);
        layout.order = index as u32;
        layout.size = final_size;
        layout.location = offset + location;
        layout.margin = margin;
    }
}
