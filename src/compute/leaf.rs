//! Sizing for childless nodes: resolves `size`/`min_size`/`max_size` against
//! the available space, consulting a measure callback (if any) for content
//! that this engine doesn't itself know how to size (text, images, ...).
use crate::geometry::Size;
use crate::style::AvailableSpace;
use crate::tree::{LayoutInput, LayoutOutput, LayoutTree, NodeId, RunMode};
use crate::util::resolve::{MaybeApplyAspectRatio, MaybeMath, MaybeResolve, ResolveOrZero};

/// Computes the layout of a leaf node: one with no children, which is either
/// a plain styled box or a measured box (text, image, ...).
pub fn compute_leaf_layout(tree: &mut impl LayoutTree, node: NodeId, input: LayoutInput) -> LayoutOutput {
    let style = tree.get_style(node).clone();
    let parent_size = input.parent_size;

    let padding = style.padding.resolve_or_zero_rect(parent_size);
    let border = style.border.resolve_or_zero_rect(parent_size);
    let padding_border_size = Size { width: padding.left + padding.right + border.left + border.right, height: padding.top + padding.bottom + border.top + border.bottom };

    let box_sizing_adjustment = match style.box_sizing {
        crate::style::BoxSizing::ContentBox => padding_border_size,
        crate::style::BoxSizing::BorderBox => Size::ZERO,
    };

    let node_size = input.known_dimensions.or(style
        .size
        .maybe_resolve(parent_size)
        .maybe_add(box_sizing_adjustment.map(Some))
        .maybe_max(style.min_size.maybe_resolve(parent_size).maybe_add(box_sizing_adjustment.map(Some)))
        .maybe_min(style.max_size.maybe_resolve(parent_size).maybe_add(box_sizing_adjustment.map(Some))));

    let node_min_size = style.min_size.maybe_resolve(parent_size).maybe_add(box_sizing_adjustment.map(Some));
    let node_max_size = style.max_size.maybe_resolve(parent_size).maybe_add(box_sizing_adjustment.map(Some));

    let aspect_ratio = style.aspect_ratio;
    let node_size = node_size.maybe_apply_aspect_ratio(aspect_ratio);

    let measured_size = if tree.needs_measure(node) {
        let measure_available_space = Size {
            width: available_space_for_axis(input.available_space.width, node_size.width, padding_border_size.width),
            height: available_space_for_axis(input.available_space.height, node_size.height, padding_border_size.height),
        };
        Some(tree.measure_child_size(node, node_size, parent_size, measure_available_space))
    } else {
        None
    };

    let size = Size {
        width: node_size
            .width
            .or(measured_size.map(|s| s.width))
            .unwrap_or(padding_border_size.width)
            .maybe_max(node_min_size.width)
            .maybe_min(node_max_size.width)
            .max(0.0),
        height: node_size
            .height
            .or(measured_size.map(|s| s.height))
            .unwrap_or(padding_border_size.height)
            .maybe_max(node_min_size.height)
            .maybe_min(node_max_size.height)
            .max(0.0),
    };

    if input.run_mode == RunMode::ComputeSize {
        return LayoutOutput::from_outer_size(size);
    }

    LayoutOutput { size, content_size: size, ..Default::default() }
}

fn available_space_for_axis(available_space: AvailableSpace, known_dimension: Option<f32>, padding_border: f32) -> AvailableSpace {
    match known_dimension {
        Some(value) => AvailableSpace::Definite(value - padding_border),
        None => available_space.map_definite_value(|value| (value - padding_border).max(0.0)),
    }
}

