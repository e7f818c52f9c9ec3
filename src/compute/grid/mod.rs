//! The CSS Grid formatting context.
//! <https://www.w3.org/TR/css-grid-1/>
mod alignment;
mod placement;
mod track_sizing;
mod types;

use crate::geometry::Size;
use crate::style::{AvailableSpace, JustifyContent, Style};
use crate::tree::{LayoutInput, LayoutOutput, LayoutTree, NodeId, RunMode};
use crate::util::resolve::{MaybeApplyAspectRatio, MaybeMath, MaybeResolve, ResolveOrZero};

use self::types::GridAxis;

/// Computes the layout of a grid container and its items.
pub fn compute_grid_layout(tree: &mut impl LayoutTree, node_id: NodeId, input: LayoutInput) -> LayoutOutput {
    let style = tree.get_style(node_id).clone();
    let parent_size = input.parent_size;
    let aspect_ratio = style.aspect_ratio;

    let padding = style.padding.resolve_or_zero_rect(parent_size);
    let border = style.border.resolve_or_zero_rect(parent_size);
    let padding_border_size = (padding + border).sum_axes();

    let min_size = style.min_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);
    let max_size = style.max_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);
    let clamped_style_size = style.size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio).maybe_clamp(min_size, max_size);

    let available_space_based_size = Size { width: input.available_space.width.into_option(), height: input.available_space.height.into_option() };

    let node_size = input.known_dimensions.or(clamped_style_size);
    let styled_based_known_dimensions = node_size.or(available_space_based_size.maybe_max(padding_border_size.map(Some)));

    if input.run_mode == RunMode::ComputeSize {
        if let Size { width: Some(width), height: Some(height) } = styled_based_known_dimensions {
            return LayoutOutput::from_outer_size(Size { width, height });
        }
    }

    let gap = style.gap.map(|g| g.resolve(0.0));
    let node_inner_size = node_size.maybe_sub(padding_border_size.map(Some));

    let col_template_space = node_inner_size.width.or(available_space_based_size.width);
    let row_template_space = node_inner_size.height.or(available_space_based_size.height);

    let explicit_cols = placement::expand_track_list(&style.grid_template_columns, col_template_space, gap.width);
    let explicit_rows = placement::expand_track_list(&style.grid_template_rows, row_template_space, gap.height);

    let (items, col_count, row_count) = placement::place_items(tree, node_id, explicit_cols.len(), explicit_rows.len(), node_inner_size, &style);

    let mut col_tracks = placement::build_tracks(&explicit_cols, col_count, &style.grid_auto_columns);
    let mut row_tracks = placement::build_tracks(&explicit_rows, row_count, &style.grid_auto_rows);

    let col_available_space = match node_inner_size.width {
        Some(width) => AvailableSpace::Definite(width),
        None => input.available_space.width,
    };
    let row_available_space = match node_inner_size.height {
        Some(height) => AvailableSpace::Definite(height),
        None => input.available_space.height,
    };

    // Columns are sized first; rows are sized second so their intrinsic
    // contributions can be measured against the now-known column widths.
    track_sizing::size_axis_tracks(tree, GridAxis::Inline, &mut col_tracks, &[], &items, node_inner_size.width, col_available_space, gap.width, gap.height);
    track_sizing::size_axis_tracks(tree, GridAxis::Block, &mut row_tracks, &col_tracks, &items, node_inner_size.height, row_available_space, gap.height, gap.width);

    let container_size_hint = styled_based_known_dimensions.unwrap_or(Size::ZERO);
    let inner_container_size = Size { width: (container_size_hint.width - padding_border_size.width).max(0.0), height: (container_size_hint.height - padding_border_size.height).max(0.0) };

    let col_content_size: f32 = col_tracks.iter().map(|t| t.base_size).sum::<f32>() + gap.width * col_tracks.len().saturating_sub(1) as f32;
    let row_content_size: f32 = row_tracks.iter().map(|t| t.base_size).sum::<f32>() + gap.height * row_tracks.len().saturating_sub(1) as f32;

    let used_inner_width = node_inner_size.width.unwrap_or_else(|| inner_container_size.width.max(col_content_size));
    let used_inner_height = node_inner_size.height.unwrap_or_else(|| inner_container_size.height.max(row_content_size));

    let mut col_sizes: crate::util::sys::Vec<f32> = col_tracks.iter().map(|t| t.base_size).collect();
    let mut row_sizes: crate::util::sys::Vec<f32> = row_tracks.iter().map(|t| t.base_size).collect();

    let col_offsets = alignment::compute_track_offsets(&mut col_sizes, gap.width, used_inner_width, style.justify_content.unwrap_or(JustifyContent::Start));
    let row_offsets = alignment::compute_track_offsets(&mut row_sizes, gap.height, used_inner_height, style.align_content.unwrap_or(JustifyContent::Start));

    let final_inner_size = Size {
        width: used_inner_width.maybe_clamp(min_size.width.map(|v| (v - padding_border_size.width).max(0.0)), max_size.width.map(|v| (v - padding_border_size.width).max(0.0))),
        height: used_inner_height.maybe_clamp(min_size.height.map(|v| (v - padding_border_size.height).max(0.0)), max_size.height.map(|v| (v - padding_border_size.height).max(0.0))),
    };
    let final_size = final_inner_size + padding_border_size;

    alignment::write_item_layouts(tree, &items, &col_sizes, &col_offsets, &row_sizes, &row_offsets, &style, padding, border, input.run_mode);

    if input.run_mode == RunMode::ComputeSize {
        return LayoutOutput::from_outer_size(final_size);
    }

    alignment::perform_absolute_layout(tree, node_id, final_size, padding, border);

    LayoutOutput { size: final_size, content_size: final_size, ..Default::default() }
}
