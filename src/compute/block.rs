//! The block formatting context: normal in-flow vertical stacking with
//! margin collapsing, plus absolutely positioned children.
//! <https://www.w3.org/TR/CSS2/visuren.html#block-formatting>
use crate::geometry::{Line, Point, Rect, Size};
use crate::style::{AvailableSpace, Display, LengthPercentageAuto, Overflow, Position};
use crate::tree::{CollapsibleMarginSet, Layout, LayoutInput, LayoutOutput, LayoutTree, NodeId, RequestedAxis, RunMode, SizingMode};
use crate::util::resolve::{MaybeApplyAspectRatio, MaybeMath, MaybeResolve, ResolveOrZero};
use crate::util::sys::Vec;

/// A child of a block container, with its style-derived inputs resolved up
/// front and its computed result filled in as the algorithm proceeds.
struct BlockItem {
    node_id: NodeId,
    order: u32,
    size: Size<Option<f32>>,
    min_size: Size<Option<f32>>,
    max_size: Size<Option<f32>>,
    position: Position,
    inset: Rect<LengthPercentageAuto>,
    margin: Rect<LengthPercentageAuto>,
    computed_size: Size<f32>,
    static_position: Point<f32>,
    can_be_collapsed_through: bool,
    baseline: Option<f32>,
}

/// Computes the layout of a block-level container and its children.
pub fn compute_block_layout(tree: &mut impl LayoutTree, node_id: NodeId, input: LayoutInput) -> LayoutOutput {
    let style = tree.get_style(node_id).clone();
    let parent_size = input.parent_size;
    let known_dimensions = input.known_dimensions;
    let available_space = input.available_space;
    let run_mode = input.run_mode;
    let vertical_margins_are_collapsible = input.vertical_margins_are_collapsible;

    let aspect_ratio = style.aspect_ratio;
    let margin = style.margin.resolve_or_zero_rect(parent_size);
    let min_size = style.min_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);
    let max_size = style.max_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);
    let clamped_style_size = style.size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio).maybe_clamp(min_size, max_size);

    let min_max_definite_size = Size {
        width: match (min_size.width, max_size.width) {
            (Some(min), Some(max)) if max <= min => Some(min),
            _ => None,
        },
        height: match (min_size.height, max_size.height) {
            (Some(min), Some(max)) if max <= min => Some(min),
            _ => None,
        },
    };

    let available_space_based_size = Size { width: available_space.width.into_option().maybe_sub(Some(margin.horizontal_axis_sum())), height: None };

    let styled_based_known_dimensions = known_dimensions.or(min_max_definite_size).or(clamped_style_size).or(available_space_based_size);

    if run_mode == RunMode::ComputeSize {
        if let Size { width: Some(width), height: Some(height) } = styled_based_known_dimensions {
            return LayoutOutput::from_outer_size(Size { width, height });
        }
    }

    compute_inner(tree, node_id, styled_based_known_dimensions, parent_size, available_space, run_mode, vertical_margins_are_collapsible)
}

fn compute_inner(
    tree: &mut impl LayoutTree,
    node_id: NodeId,
    known_dimensions: Size<Option<f32>>,
    parent_size: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    run_mode: RunMode,
    vertical_margins_are_collapsible: Line<bool>,
) -> LayoutOutput {
    let style = tree.get_style(node_id).clone();
    let raw_padding = style.padding;
    let raw_border = style.border;
    let raw_margin = style.margin;
    let aspect_ratio = style.aspect_ratio;
    let size = style.size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);
    let min_size = style.min_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);
    let max_size = style.max_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);
    let padding = style.padding.resolve_or_zero_rect(parent_size);
    let border = style.border.resolve_or_zero_rect(parent_size);

    let scrollbar_gutter = {
        let offsets = Point {
            x: match style.overflow.y {
                Overflow::Scroll => style.scrollbar_width,
                _ => 0.0,
            },
            y: match style.overflow.x {
                Overflow::Scroll => style.scrollbar_width,
                _ => 0.0,
            },
        };
        Rect { top: 0.0, left: 0.0, right: offsets.x, bottom: offsets.y }
    };
    let content_box_inset = padding + border + scrollbar_gutter;
    let container_content_box_size = known_dimensions.maybe_sub(content_box_inset.sum_axes().map(Some));

    let own_margins_collapse_with_children = Line {
        start: vertical_margins_are_collapsible.start
            && !style.overflow.y.is_scroll_container()
            && style.position == Position::Relative
            && padding.top == 0.0
            && border.top == 0.0,
        end: vertical_margins_are_collapsible.end
            && !style.overflow.y.is_scroll_container()
            && style.position == Position::Relative
            && padding.bottom == 0.0
            && border.bottom == 0.0
            && size.height.is_none(),
    };
    let has_styles_preventing_being_collapsed_through = style.display != Display::Block
        || style.overflow.y.is_scroll_container()
        || style.position == Position::Absolute
        || padding.top > 0.0
        || padding.bottom > 0.0
        || border.top > 0.0
        || border.bottom > 0.0;

    let mut items = generate_item_list(tree, node_id, container_content_box_size);

    let container_outer_width = known_dimensions.width.unwrap_or_else(|| {
        let available_width = available_space.width.map_definite_value(|w| w - content_box_inset.horizontal_axis_sum());
        let intrinsic_width = determine_content_based_container_width(tree, &items, available_width) + content_box_inset.horizontal_axis_sum();
        intrinsic_width.maybe_clamp(min_size.width, max_size.width)
    });

    if run_mode == RunMode::ComputeSize {
        if let Some(container_outer_height) = known_dimensions.height {
            return LayoutOutput::from_outer_size(Size { width: container_outer_width, height: container_outer_height });
        }
    }

    let resolved_padding = raw_padding.resolve_or_zero_rect(Size { width: Some(container_outer_width), height: None });
    let resolved_border = raw_border.resolve_or_zero_rect(Size { width: Some(container_outer_width), height: None });
    let resolved_content_box_inset = resolved_padding + resolved_border + scrollbar_gutter;
    let (intrinsic_outer_height, first_child_top_margin_set, last_child_bottom_margin_set) = perform_final_layout_on_in_flow_children(
        tree,
        &mut items,
        container_outer_width,
        content_box_inset,
        resolved_content_box_inset,
        own_margins_collapse_with_children,
    );
    let container_outer_height = known_dimensions.height.unwrap_or_else(|| intrinsic_outer_height.maybe_clamp(min_size.height, max_size.height));
    let final_outer_size = Size { width: container_outer_width, height: container_outer_height };

    if run_mode == RunMode::ComputeSize {
        return LayoutOutput::from_outer_size(final_outer_size);
    }

    let absolute_position_inset = resolved_border + scrollbar_gutter;
    let absolute_position_area = final_outer_size - absolute_position_inset.sum_axes();
    let absolute_position_offset = Point { x: absolute_position_inset.left, y: absolute_position_inset.top };
    perform_absolute_layout_on_absolute_children(tree, &mut items, absolute_position_area, absolute_position_offset);

    let child_count = tree.child_count(node_id);
    for order in 0..child_count {
        let child = tree.get_child_id(node_id, order);
        if tree.get_style(child).display == Display::None {
            *tree.get_unrounded_layout_mut(child) = Layout::with_order(order as u32);
            tree.compute_child_layout(
                child,
                LayoutInput {
                    known_dimensions: Size::NONE,
                    parent_size: Size::NONE,
                    available_space: Size::MAX_CONTENT,
                    sizing_mode: SizingMode::InherentSize,
                    axis: RequestedAxis::Both,
                    run_mode: RunMode::PerformHiddenLayout,
                    vertical_margins_are_collapsible: Line::FALSE,
                },
            );
        }
    }

    let first_vertical_baseline = items
        .iter()
        .find(|item| item.position != Position::Absolute)
        .map(|child| child.static_position.y + child.baseline.unwrap_or(child.computed_size.height));

    let all_in_flow_children_can_be_collapsed_through = items.iter().all(|item| item.position == Position::Absolute || item.can_be_collapsed_through);
    let can_be_collapsed_through = !has_styles_preventing_being_collapsed_through && all_in_flow_children_can_be_collapsed_through;

    LayoutOutput {
        size: final_outer_size,
        content_size: final_outer_size,
        first_baselines: Size { width: None, height: first_vertical_baseline },
        top_margin: if own_margins_collapse_with_children.start {
            first_child_top_margin_set
        } else {
            CollapsibleMarginSet::from_margin(raw_margin.top.resolve_or_zero(parent_size.width))
        },
        bottom_margin: if own_margins_collapse_with_children.end {
            last_child_bottom_margin_set
        } else {
            CollapsibleMarginSet::from_margin(raw_margin.bottom.resolve_or_zero(parent_size.width))
        },
        margins_can_collapse_through: can_be_collapsed_through,
    }
}

fn generate_item_list(tree: &impl LayoutTree, node: NodeId, node_inner_size: Size<Option<f32>>) -> Vec<BlockItem> {
    let child_count = tree.child_count(node);
    let mut order = 0u32;
    let mut items = Vec::new();
    for index in 0..child_count {
        let child_node_id = tree.get_child_id(node, index);
        let child_style = tree.get_style(child_node_id);
        if child_style.display == Display::None {
            continue;
        }
        let aspect_ratio = child_style.aspect_ratio;
        items.push(BlockItem {
            node_id: child_node_id,
            order,
            size: child_style.size.maybe_resolve(node_inner_size).maybe_apply_aspect_ratio(aspect_ratio),
            min_size: child_style.min_size.maybe_resolve(node_inner_size).maybe_apply_aspect_ratio(aspect_ratio),
            max_size: child_style.max_size.maybe_resolve(node_inner_size).maybe_apply_aspect_ratio(aspect_ratio),
            position: child_style.position,
            inset: child_style.inset,
            margin: child_style.margin,
            computed_size: Size::ZERO,
            static_position: Point::ZERO,
            can_be_collapsed_through: false,
            baseline: None,
        });
        order += 1;
    }
    items
}

fn determine_content_based_container_width(tree: &mut impl LayoutTree, items: &[BlockItem], available_width: AvailableSpace) -> f32 {
    let available_space = Size { width: available_width, height: AvailableSpace::MinContent };

    let mut max_child_width: f32 = 0.0;
    for item in items.iter().filter(|item| item.position != Position::Absolute) {
        let known_dimensions = item.size.maybe_clamp(item.min_size, item.max_size);
        let item_x_margin_sum = item.margin.resolve_or_zero_rect(Size { width: available_space.width.into_option(), height: None }).horizontal_axis_sum();

        let width = known_dimensions.width.unwrap_or_else(|| {
            let output = tree.compute_child_layout(
                item.node_id,
                LayoutInput {
                    known_dimensions,
                    parent_size: Size::NONE,
                    available_space: available_space.map_width(|w| w.map_definite_value(|v| v - item_x_margin_sum)),
                    sizing_mode: SizingMode::InherentSize,
                    axis: RequestedAxis::Horizontal,
                    run_mode: RunMode::ComputeSize,
                    vertical_margins_are_collapsible: Line::TRUE,
                },
            );
            output.size.width + item_x_margin_sum
        });

        max_child_width = max_child_width.max(width);
    }

    max_child_width
}

fn perform_final_layout_on_in_flow_children(
    tree: &mut impl LayoutTree,
    items: &mut [BlockItem],
    container_outer_width: f32,
    content_box_inset: Rect<f32>,
    resolved_content_box_inset: Rect<f32>,
    own_margins_collapse_with_children: Line<bool>,
) -> (f32, CollapsibleMarginSet, CollapsibleMarginSet) {
    let container_inner_width = container_outer_width - content_box_inset.horizontal_axis_sum();
    let parent_size = Size { width: Some(container_outer_width), height: None };
    let available_space = Size { width: AvailableSpace::Definite(container_inner_width), height: AvailableSpace::MinContent };

    let mut committed_y_offset = resolved_content_box_inset.top;
    let mut first_child_top_margin_set = CollapsibleMarginSet::ZERO;
    let mut active_collapsible_margin_set = CollapsibleMarginSet::ZERO;
    let mut is_collapsing_with_first_margin_set = true;

    for item in items.iter_mut() {
        if item.position == Position::Absolute {
            item.static_position.y = committed_y_offset;
            continue;
        }

        let item_margin = item.margin.map(|margin| margin.resolve_to_option(container_outer_width));
        let item_non_auto_margin = item_margin.map(|m| m.unwrap_or(0.0));
        let item_non_auto_x_margin_sum = item_non_auto_margin.horizontal_axis_sum();
        let known_dimensions = item.size.maybe_clamp(item.min_size, item.max_size).map_width(|width| Some(width.unwrap_or(container_inner_width - item_non_auto_x_margin_sum)));

        let item_layout = tree.compute_child_layout(
            item.node_id,
            LayoutInput {
                known_dimensions,
                parent_size,
                available_space: available_space.map_width(|w| w.map_definite_value(|v| v - item_non_auto_x_margin_sum)),
                sizing_mode: SizingMode::InherentSize,
                axis: RequestedAxis::Both,
                run_mode: RunMode::PerformLayout,
                vertical_margins_are_collapsible: Line::TRUE,
            },
        );
        let final_size = item_layout.size;

        let top_margin_set = item_layout.top_margin.collapse_with_margin(item_margin.top.unwrap_or(0.0));
        let bottom_margin_set = item_layout.bottom_margin.collapse_with_margin(item_margin.bottom.unwrap_or(0.0));

        let free_x_space = (container_inner_width - final_size.width - item_non_auto_x_margin_sum).max(0.0);
        let x_axis_auto_margin_size = {
            let auto_margin_count = item_margin.left.is_none() as u8 + item_margin.right.is_none() as u8;
            if auto_margin_count == 2 && item.size.width.is_none() {
                0.0
            } else if auto_margin_count > 0 {
                free_x_space / auto_margin_count as f32
            } else {
                0.0
            }
        };
        let resolved_margin = Rect {
            left: item_margin.left.unwrap_or(x_axis_auto_margin_size),
            right: item_margin.right.unwrap_or(x_axis_auto_margin_size),
            top: top_margin_set.resolve(),
            bottom: bottom_margin_set.resolve(),
        };

        let inset = Rect {
            left: item.inset.left.maybe_resolve(Some(container_inner_width)),
            right: item.inset.right.maybe_resolve(Some(container_inner_width)),
            top: item.inset.top.maybe_resolve(None),
            bottom: item.inset.bottom.maybe_resolve(None),
        };
        let inset_offset = Point { x: inset.left.or(inset.right.map(|x| -x)).unwrap_or(0.0), y: inset.top.or(inset.bottom.map(|x| -x)).unwrap_or(0.0) };

        let y_margin_offset = if is_collapsing_with_first_margin_set && own_margins_collapse_with_children.start {
            0.0
        } else {
            active_collapsible_margin_set.collapse_with_margin(resolved_margin.top).resolve()
        };

        item.computed_size = item_layout.size;
        item.baseline = item_layout.first_baselines.height;
        item.can_be_collapsed_through = item_layout.margins_can_collapse_through;
        item.static_position = Point { x: resolved_content_box_inset.left, y: committed_y_offset + active_collapsible_margin_set.resolve() };

        let layout = tree.get_unrounded_layout_mut(item.node_id);
        layout.order = item.order;
        layout.size = item_layout.size;
        layout.location = Point { x: resolved_content_box_inset.left + inset_offset.x + resolved_margin.left, y: committed_y_offset + inset_offset.y + y_margin_offset };
        layout.margin = resolved_margin;

        if is_collapsing_with_first_margin_set {
            if item.can_be_collapsed_through {
                first_child_top_margin_set = first_child_top_margin_set.collapse_with_set(top_margin_set).collapse_with_set(bottom_margin_set);
            } else {
                first_child_top_margin_set = first_child_top_margin_set.collapse_with_set(top_margin_set);
                is_collapsing_with_first_margin_set = false;
            }
        }

        if item.can_be_collapsed_through {
            active_collapsible_margin_set = active_collapsible_margin_set.collapse_with_set(top_margin_set).collapse_with_set(bottom_margin_set);
        } else {
            committed_y_offset += item_layout.size.height + y_margin_offset;
            active_collapsible_margin_set = bottom_margin_set;
        }
    }

    let last_child_bottom_margin_set = active_collapsible_margin_set;
    let bottom_y_margin_offset = if own_margins_collapse_with_children.end { 0.0 } else { last_child_bottom_margin_set.resolve() };

    committed_y_offset += resolved_content_box_inset.bottom + bottom_y_margin_offset;
    let content_height = committed_y_offset.max(0.0);
    (content_height, first_child_top_margin_set, last_child_bottom_margin_set)
}

fn perform_absolute_layout_on_absolute_children(tree: &mut impl LayoutTree, items: &mut [BlockItem], area_size: Size<f32>, area_offset: Point<f32>) {
    let area_width = area_size.width;
    let area_height = area_size.height;

    for item in items.iter().filter(|item| item.position == Position::Absolute) {
        let child_style = tree.get_style(item.node_id).clone();
        if child_style.display == Display::None {
            continue;
        }

        let aspect_ratio = child_style.aspect_ratio;
        let margin = child_style.margin.map(|m| m.resolve_to_option(area_width));
        let padding = child_style.padding.resolve_or_zero_rect(Size { width: Some(area_width), height: Some(area_height) });
        let border = child_style.border.resolve_or_zero_rect(Size { width: Some(area_width), height: Some(area_height) });
        let padding_border_sum = (padding + border).sum_axes();

        let left = child_style.inset.left.maybe_resolve(Some(area_width));
        let right = child_style.inset.right.maybe_resolve(Some(area_width));
        let top = child_style.inset.top.maybe_resolve(Some(area_height));
        let bottom = child_style.inset.bottom.maybe_resolve(Some(area_height));

        let area_size_opt = Size { width: Some(area_width), height: Some(area_height) };
        let style_size = child_style.size.maybe_resolve(area_size_opt).maybe_apply_aspect_ratio(aspect_ratio);
        let min_size = child_style
            .min_size
            .maybe_resolve(area_size_opt)
            .maybe_apply_aspect_ratio(aspect_ratio)
            .or(padding_border_sum.map(Some))
            .maybe_max(padding_border_sum.map(Some));
        let max_size = child_style.max_size.maybe_resolve(area_size_opt).maybe_apply_aspect_ratio(aspect_ratio);
        let mut known_dimensions = style_size.maybe_clamp(min_size, max_size);

        if let (None, Some(left), Some(right)) = (known_dimensions.width, left, right) {
            let new_width_raw = area_width - margin.left.unwrap_or(0.0) - margin.right.unwrap_or(0.0) - left - right;
            known_dimensions.width = Some(new_width_raw.max(0.0));
            known_dimensions = known_dimensions.maybe_apply_aspect_ratio(aspect_ratio).maybe_clamp(min_size, max_size);
        }
        if let (None, Some(top), Some(bottom)) = (known_dimensions.height, top, bottom) {
            let new_height_raw = area_height - margin.top.unwrap_or(0.0) - margin.bottom.unwrap_or(0.0) - top - bottom;
            known_dimensions.height = Some(new_height_raw.max(0.0));
            known_dimensions = known_dimensions.maybe_apply_aspect_ratio(aspect_ratio).maybe_clamp(min_size, max_size);
        }

        let output = tree.compute_child_layout(
            item.node_id,
            LayoutInput {
                known_dimensions,
                parent_size: area_size.map(Some),
                available_space: Size {
                    width: AvailableSpace::Definite(area_width.maybe_clamp(min_size.width, max_size.width)),
                    height: AvailableSpace::Definite(area_height.maybe_clamp(min_size.height, max_size.height)),
                },
                sizing_mode: SizingMode::ContentSize,
                axis: RequestedAxis::Both,
                run_mode: RunMode::PerformLayout,
                vertical_margins_are_collapsible: Line::FALSE,
            },
        );
        let measured_size = output.size;
        let final_size = known_dimensions.unwrap_or(measured_size).maybe_clamp(min_size, max_size);

        let non_auto_margin = Rect {
            left: if left.is_some() { margin.left.unwrap_or(0.0) } else { 0.0 },
            right: if right.is_some() { margin.right.unwrap_or(0.0) } else { 0.0 },
            top: if top.is_some() { margin.top.unwrap_or(0.0) } else { 0.0 },
            bottom: if bottom.is_some() { margin.bottom.unwrap_or(0.0) } else { 0.0 },
        };

        let absolute_auto_margin_space = Point {
            x: right.map(|right| area_size.width - right - left.unwrap_or(0.0)).unwrap_or(final_size.width),
            y: bottom.map(|bottom| area_size.height - bottom - top.unwrap_or(0.0)).unwrap_or(final_size.height),
        };
        let free_space = Size {
            width: absolute_auto_margin_space.x - final_size.width - non_auto_margin.horizontal_axis_sum(),
            height: absolute_auto_margin_space.y - final_size.height - non_auto_margin.vertical_axis_sum(),
        };

        let auto_margin_size = Size {
            width: {
                let auto_margin_count = margin.left.is_none() as u8 + margin.right.is_none() as u8;
                if auto_margin_count == 2 && (style_size.width.is_none() || style_size.width.unwrap() >= free_space.width) {
                    0.0
                } else if auto_margin_count > 0 {
                    free_space.width / auto_margin_count as f32
                } else {
                    0.0
                }
            },
            height: {
                let auto_margin_count = margin.top.is_none() as u8 + margin.bottom.is_none() as u8;
                if auto_margin_count == 2 && (style_size.height.is_none() || style_size.height.unwrap() >= free_space.height) {
                    0.0
                } else if auto_margin_count > 0 {
                    free_space.height / auto_margin_count as f32
                } else {
                    0.0
                }
            },
        };

        let auto_margin = Rect {
            left: margin.left.map(|_| 0.0).unwrap_or(auto_margin_size.width),
            right: margin.right.map(|_| 0.0).unwrap_or(auto_margin_size.width),
            top: margin.top.map(|_| 0.0).unwrap_or(auto_margin_size.height),
            bottom: margin.bottom.map(|_| 0.0).unwrap_or(auto_margin_size.height),
        };

        let resolved_margin = Rect {
            left: margin.left.unwrap_or(auto_margin.left),
            right: margin.right.unwrap_or(auto_margin.right),
            top: margin.top.unwrap_or(auto_margin.top),
            bottom: margin.bottom.unwrap_or(auto_margin.bottom),
        };

        let item_offset = Point {
            x: left
                .map(|left| left + resolved_margin.left)
                .or(right.map(|right| area_size.width - final_size.width - right - resolved_margin.right))
                .unwrap_or(resolved_margin.left),
            y: top
                .map(|top| top + resolved_margin.top)
                .or(bottom.map(|bottom| area_size.height - final_size.height - bottom - resolved_margin.bottom))
                .unwrap_or(item.static_position.y + resolved_margin.top),
        };

        let layout = tree.get_unrounded_layout_mut(item.node_id);
        layout.order = item.order;
        layout.size = final_size;
        layout.location = area_offset + item_offset;
        layout.margin = resolved_margin;
        layout.padding = padding;
        layout.border = border;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsible_margin_set_sums_positive_and_negative() {
        let a = CollapsibleMarginSet::from_margin(10.0);
        let b = CollapsibleMarginSet::from_margin(-4.0);
        let collapsed = a.collapse_with_set(b);
        assert_eq!(collapsed.resolve(), 6.0);
    }

    #[test]
    fn collapsible_margin_set_keeps_largest_positive() {
        let a = CollapsibleMarginSet::from_margin(5.0);
        let b = CollapsibleMarginSet::from_margin(12.0);
        assert_eq!(a.collapse_with_set(b).resolve(), 12.0);
    }
}
