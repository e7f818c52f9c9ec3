//! The flexbox formatting context.
//! <https://www.w3.org/TR/css-flexbox-1/>
use crate::geometry::{Line, Point, Rect, Size};
use crate::style::{AlignItems, AvailableSpace, Dimension, Display, FlexDirection, JustifyContent, Position, Style};
use crate::tree::{LayoutInput, LayoutOutput, LayoutTree, NodeId, RequestedAxis, RunMode, SizingMode};
use crate::util::resolve::{MaybeApplyAspectRatio, MaybeMath, MaybeResolve, ResolveOrZero};
use crate::util::sys::Vec;

/// A single flex item, carrying every style-derived quantity the algorithm
/// needs across its several passes.
struct FlexItem {
    node_id: NodeId,
    order: u32,
    size: Size<Option<f32>>,
    min_size: Size<Option<f32>>,
    max_size: Size<Option<f32>>,
    margin: Rect<f32>,
    margin_is_auto: Rect<bool>,
    padding: Rect<f32>,
    border: Rect<f32>,
    align_self: AlignItems,
    flex_grow: f32,
    flex_shrink: f32,
    flex_basis: f32,
    inner_flex_basis: f32,
    hypothetical_inner_size: Size<f32>,
    hypothetical_outer_size: Size<f32>,
    target_size: Size<f32>,
    outer_target_size: Size<f32>,
    offset_main: f32,
    offset_cross: f32,
    baseline: f32,
    violation: f32,
    frozen: bool,
}

struct FlexLine {
    items_start: usize,
    items_end: usize,
    cross_size: f32,
    offset_cross: f32,
}

/// Computes the layout of a flex container and its items.
pub fn compute_flexbox_layout(tree: &mut impl LayoutTree, node_id: NodeId, input: LayoutInput) -> LayoutOutput {
    let style = tree.get_style(node_id).clone();
    let parent_size = input.parent_size;
    let aspect_ratio = style.aspect_ratio;

    let padding = style.padding.resolve_or_zero_rect(parent_size);
    let border = style.border.resolve_or_zero_rect(parent_size);
    let padding_border_size = (padding + border).sum_axes();

    let min_size = style.min_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);
    let max_size = style.max_size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio);
    let clamped_style_size = style.size.maybe_resolve(parent_size).maybe_apply_aspect_ratio(aspect_ratio).maybe_clamp(min_size, max_size);

    let available_space_based_size =
        Size { width: input.available_space.width.into_option(), height: input.available_space.height.into_option() };

    let node_size = input.known_dimensions.or(clamped_style_size);
    let styled_based_known_dimensions = node_size.or(available_space_based_size.maybe_max(padding_border_size.map(Some)));

    if input.run_mode == RunMode::ComputeSize {
        if let Size { width: Some(width), height: Some(height) } = styled_based_known_dimensions {
            return LayoutOutput::from_outer_size(Size { width, height });
        }
    }

    let direction = style.flex_direction;
    let is_row = direction.is_row();
    let is_wrap_reverse = style.flex_wrap == crate::style::FlexWrap::WrapReverse;
    let is_reverse = direction.is_reverse();

    let container_size_hint = styled_based_known_dimensions.unwrap_or(Size::ZERO);
    let inner_container_size = Size { width: (container_size_hint.width - padding_border_size.width).max(0.0), height: (container_size_hint.height - padding_border_size.height).max(0.0) };

    let gap = style.gap.map(|g| g.resolve(0.0));
    let main_gap = if is_row { gap.width } else { gap.height };
    let cross_gap = if is_row { gap.height } else { gap.width };

    let available_space_for_children = Size {
        width: input.available_space.width.maybe_set(node_size.width.or(available_space_based_size.width)).map_definite_value(|v| (v - padding_border_size.width).max(0.0)),
        height: input.available_space.height.maybe_set(node_size.height.or(available_space_based_size.height)).map_definite_value(|v| (v - padding_border_size.height).max(0.0)),
    };

    let node_inner_size = node_size.maybe_sub(padding_border_size.map(Some));
    let mut items = generate_anonymous_flex_items(tree, node_id, node_inner_size, direction, &style);

    determine_flex_base_size(tree, &mut items, direction, node_inner_size, available_space_for_children);

    let main_available_space = if is_row { available_space_for_children.width } else { available_space_for_children.height };
    let container_main_size = if is_row { inner_container_size.width } else { inner_container_size.height };
    let can_wrap = style.flex_wrap != crate::style::FlexWrap::NoWrap;

    let mut lines = collect_flex_lines(&items, can_wrap, main_available_space, main_gap);

    for line in lines.iter() {
        resolve_flexible_lengths(&mut items[line.items_start..line.items_end], container_main_size, main_gap, is_row);
    }

    determine_cross_size(tree, &mut items, direction, node_inner_size, available_space_for_children);

    let known_container_cross_size = if is_row { node_size.height } else { node_size.width };
    determine_line_cross_sizes(&items, &mut lines, is_row, known_container_cross_size);

    let container_cross_size = known_container_cross_size
        .unwrap_or_else(|| lines.iter().map(|l| l.cross_size).sum::<f32>() + cross_gap * (lines.len().saturating_sub(1)) as f32);

    layout_main_axis(
        &mut items,
        &mut lines,
        container_main_size,
        main_gap,
        style.justify_content.unwrap_or(JustifyContent::Start),
        is_reverse,
    );

    distribute_cross_axis(&mut lines, container_cross_size, cross_gap, style.align_content.unwrap_or(JustifyContent::Stretch), is_wrap_reverse);

    let container_main_size_used = if is_row { node_size.width } else { node_size.height }.unwrap_or(container_main_size).maybe_clamp(
        if is_row { min_size.width } else { min_size.height },
        if is_row { max_size.width } else { max_size.height },
    );

    write_final_item_layouts(tree, &items, &lines, is_row, padding, border, input.run_mode);

    let used_main = container_main_size_used;
    let used_cross = container_cross_size;
    let final_size = if is_row {
        Size { width: used_main + padding_border_size.width, height: used_cross + padding_border_size.height }
    } else {
        Size { width: used_cross + padding_border_size.width, height: used_main + padding_border_size.height }
    };

    if input.run_mode == RunMode::ComputeSize {
        return LayoutOutput::from_outer_size(final_size);
    }

    perform_absolute_layout(tree, node_id, final_size, padding, border);

    LayoutOutput { size: final_size, content_size: final_size, ..Default::default() }
}

fn generate_anonymous_flex_items(
    tree: &impl LayoutTree,
    node: NodeId,
    node_inner_size: Size<Option<f32>>,
    direction: FlexDirection,
    container_style: &Style,
) -> Vec<FlexItem> {
    let child_count = tree.child_count(node);
    let mut order = 0u32;
    let mut items = Vec::new();
    for index in 0..child_count {
        let child_id = tree.get_child_id(node, index);
        let child_style = tree.get_style(child_id);
        if child_style.display == Display::None || child_style.position == Position::Absolute {
            order += 1;
            continue;
        }
        let aspect_ratio = child_style.aspect_ratio;
        let margin_auto = child_style.margin.map(|m| m.is_auto());
        let margin = child_style.margin.map(|m| m.resolve_to_option(node_inner_size.get(direction.main_axis()).unwrap_or(0.0)).unwrap_or(0.0));
        let padding = child_style.padding.resolve_or_zero_rect(node_inner_size);
        let border = child_style.border.resolve_or_zero_rect(node_inner_size);

        items.push(FlexItem {
            node_id: child_id,
            order,
            size: child_style.size.maybe_resolve(node_inner_size).maybe_apply_aspect_ratio(aspect_ratio),
            min_size: child_style.min_size.maybe_resolve(node_inner_size).maybe_apply_aspect_ratio(aspect_ratio),
            max_size: child_style.max_size.maybe_resolve(node_inner_size).maybe_apply_aspect_ratio(aspect_ratio),
            margin,
            margin_is_auto: margin_auto,
            padding,
            border,
            align_self: container_style.resolved_align_items(child_style.align_self),
            flex_grow: child_style.flex_grow,
            flex_shrink: child_style.flex_shrink,
            flex_basis: 0.0,
            inner_flex_basis: 0.0,
            hypothetical_inner_size: Size::ZERO,
            hypothetical_outer_size: Size::ZERO,
            target_size: Size::ZERO,
            outer_target_size: Size::ZERO,
            offset_main: 0.0,
            offset_cross: 0.0,
            baseline: 0.0,
            violation: 0.0,
            frozen: false,
        });
        order += 1;
    }
    items
}

/// §9.2: resolves each item's flex base size and hypothetical main size.
fn determine_flex_base_size(
    tree: &mut impl LayoutTree,
    items: &mut [FlexItem],
    direction: FlexDirection,
    node_inner_size: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
) {
    let is_row = direction.is_row();
    for item in items.iter_mut() {
        let flex_basis = tree.get_style(item.node_id).flex_basis;
        let main_axis_size = if is_row { item.size.width } else { item.size.height };
        let resolved_basis = match flex_basis {
            Dimension::Auto => None,
            other => other.maybe_resolve(if is_row { node_inner_size.width } else { node_inner_size.height }),
        };

        item.flex_basis = resolved_basis.or(main_axis_size).unwrap_or_else(|| {
            let known_dimensions = if is_row { Size { width: None, height: item.size.height } } else { Size { width: item.size.width, height: None } };
            let output = tree.compute_child_layout(
                item.node_id,
                LayoutInput {
                    known_dimensions,
                    parent_size: node_inner_size,
                    available_space,
                    sizing_mode: SizingMode::ContentSize,
                    axis: RequestedAxis::Both,
                    run_mode: RunMode::ComputeSize,
                    vertical_margins_are_collapsible: Line::FALSE,
                },
            );
            if is_row { output.size.width } else { output.size.height }
        });

        let padding_border_main = if is_row { item.padding.horizontal_axis_sum() + item.border.horizontal_axis_sum() } else { item.padding.vertical_axis_sum() + item.border.vertical_axis_sum() };
        item.inner_flex_basis = (item.flex_basis - padding_border_main).max(0.0);

        let hypothetical_main = item.flex_basis.maybe_clamp(if is_row { item.min_size.width } else { item.min_size.height }, if is_row { item.max_size.width } else { item.max_size.height });
        if is_row {
            item.hypothetical_inner_size.width = hypothetical_main;
        } else {
            item.hypothetical_inner_size.height = hypothetical_main;
        }

        let margin_main = if is_row { item.margin.horizontal_axis_sum() } else { item.margin.vertical_axis_sum() };
        if is_row {
            item.hypothetical_outer_size.width = hypothetical_main + margin_main;
        } else {
            item.hypothetical_outer_size.height = hypothetical_main + margin_main;
        }
    }
}

/// §9.3: greedily packs items into lines, respecting `flex_wrap`.
fn collect_flex_lines(items: &[FlexItem], can_wrap: bool, main_available_space: AvailableSpace, main_gap: f32) -> Vec<FlexLine> {
    if !can_wrap || items.is_empty() {
        return alloc_vec_one_line(items.len());
    }

    let Some(available) = main_available_space.into_option() else {
        return alloc_vec_one_line(items.len());
    };

    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut line_main_size = 0.0f32;
    for (index, item) in items.iter().enumerate() {
        let item_main = item.hypothetical_outer_size.width.max(item.hypothetical_outer_size.height);
        let item_main = if item.hypothetical_outer_size.width != 0.0 || item.hypothetical_outer_size.height != 0.0 { item_main } else { 0.0 };
        let candidate = if index == line_start { item_main } else { line_main_size + main_gap + item_main };
        if index > line_start && candidate > available {
            lines.push(FlexLine { items_start: line_start, items_end: index, cross_size: 0.0, offset_cross: 0.0 });
            line_start = index;
            line_main_size = item_main;
        } else {
            line_main_size = candidate;
        }
    }
    lines.push(FlexLine { items_start: line_start, items_end: items.len(), cross_size: 0.0, offset_cross: 0.0 });
    lines
}

fn alloc_vec_one_line(len: usize) -> Vec<FlexLine> {
    let mut v = Vec::new();
    v.push(FlexLine { items_start: 0, items_end: len, cross_size: 0.0, offset_cross: 0.0 });
    v
}

/// §9.7: distributes free main-axis space to flex-grow/flex-shrink items, freezing
/// items that hit a min/max bound until nothing more can be distributed.
fn resolve_flexible_lengths(items: &mut [FlexItem], container_main_size: f32, main_gap: f32, is_row: bool) {
    let gap_total = main_gap * (items.len().saturating_sub(1)) as f32;
    let used_space: f32 = items.iter().map(|i| if is_row { i.hypothetical_outer_size.width } else { i.hypothetical_outer_size.height }).sum::<f32>() + gap_total;
    let free_space = container_main_size - used_space;
    let growing = free_space > 0.0;

    for item in items.iter_mut() {
        let inner = if is_row { item.hypothetical_inner_size.width } else { item.hypothetical_inner_size.height };
        item.target_size = if is_row { Size { width: inner, height: item.hypothetical_inner_size.height } } else { Size { width: item.hypothetical_inner_size.width, height: inner } };
        item.frozen = (growing && item.flex_grow == 0.0) || (!growing && item.flex_shrink == 0.0);
    }

    for _ in 0..items.len() + 1 {
        let unfrozen_count = items.iter().filter(|i| !i.frozen).count();
        if unfrozen_count == 0 {
            break;
        }

        let used: f32 = items.iter().map(|i| if is_row { i.target_size.width } else { i.target_size.height }).sum::<f32>() + gap_total;
        let remaining = container_main_size - used;
        if remaining.abs() < f32::EPSILON {
            break;
        }

        let weight_sum: f32 = items
            .iter()
            .filter(|i| !i.frozen)
            .map(|i| if growing { i.flex_grow } else { i.flex_shrink * (if is_row { i.inner_flex_basis } else { i.inner_flex_basis }).max(1.0) })
            .sum();

        if weight_sum <= 0.0 {
            break;
        }

        let mut any_violation = false;
        for item in items.iter_mut().filter(|i| !i.frozen) {
            let weight = if growing { item.flex_grow } else { item.flex_shrink * item.inner_flex_basis.max(1.0) };
            let share = remaining * (weight / weight_sum);
            let base = item.inner_flex_basis;
            let mut new_size = base + share;

            let (min, max) = if is_row { (item.min_size.width, item.max_size.width) } else { (item.min_size.height, item.max_size.height) };
            let clamped = new_size.maybe_clamp(min, max);
            if clamped != new_size {
                item.violation = clamped - new_size;
                any_violation = true;
                new_size = clamped;
            } else {
                item.violation = 0.0;
            }

            if is_row {
                item.target_size.width = new_size;
            } else {
                item.target_size.height = new_size;
            }
        }

        if any_violation {
            for item in items.iter_mut().filter(|i| !i.frozen) {
                if item.violation > 0.0 {
                    item.frozen = true;
                } else if item.violation < 0.0 {
                    item.frozen = true;
                }
            }
        } else {
            for item in items.iter_mut().filter(|i| !i.frozen) {
                item.frozen = true;
            }
        }

    }

    for item in items.iter_mut() {
        let margin_main = if is_row { item.margin.horizontal_axis_sum() } else { item.margin.vertical_axis_sum() };
        let main = if is_row { item.target_size.width } else { item.target_size.height };
        if is_row {
            item.outer_target_size.width = main + margin_main;
        } else {
            item.outer_target_size.height = main + margin_main;
        }
    }
}

/// §9.4: resolves each item's cross size (via measure if not yet known), then each line's.
fn determine_cross_size(
    tree: &mut impl LayoutTree,
    items: &mut [FlexItem],
    direction: FlexDirection,
    node_inner_size: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
) {
    let is_row = direction.is_row();
    for item in items.iter_mut() {
        let known_main = if is_row { Some(item.target_size.width) } else { Some(item.target_size.height) };
        let known_dimensions = if is_row { Size { width: known_main, height: item.size.height } } else { Size { width: item.size.width, height: known_main } };

        let cross_style_size = if is_row { item.size.height } else { item.size.width };
        let resolved_cross = cross_style_size.unwrap_or_else(|| {
            let output = tree.compute_child_layout(
                item.node_id,
                LayoutInput {
                    known_dimensions,
                    parent_size: node_inner_size,
                    available_space,
                    sizing_mode: SizingMode::ContentSize,
                    axis: RequestedAxis::Both,
                    run_mode: RunMode::ComputeSize,
                    vertical_margins_are_collapsible: Line::FALSE,
                },
            );
            if is_row { output.size.height } else { output.size.width }
        });

        let (min, max) = if is_row { (item.min_size.height, item.max_size.height) } else { (item.min_size.width, item.max_size.width) };
        let clamped_cross = resolved_cross.maybe_clamp(min, max);
        if is_row {
            item.target_size.height = clamped_cross;
        } else {
            item.target_size.width = clamped_cross;
        }
    }
}

/// §9.5/§9.6: positions items along the main axis within each line, applying
/// `justify_content`, auto-margin main-axis absorption, and order reversal.
fn layout_main_axis(items: &mut [FlexItem], lines: &mut [FlexLine], container_main_size: f32, main_gap: f32, justify_content: JustifyContent, is_reverse: bool) {
    for line in lines.iter_mut() {
        let line_items = &mut items[line.items_start..line.items_end];
        let auto_margin_count: usize = line_items.iter().map(|i| (i.margin_is_auto.left as usize) + (i.margin_is_auto.right as usize)).sum();
        let used: f32 = line_items.iter().map(|i| i.outer_target_size.width.max(i.outer_target_size.height)).sum::<f32>()
            + main_gap * (line_items.len().saturating_sub(1)) as f32;
        let free_space = (container_main_size - used).max(0.0);

        let auto_margin_share = if auto_margin_count > 0 { free_space / auto_margin_count as f32 } else { 0.0 };
        let remaining_free = if auto_margin_count > 0 { 0.0 } else { free_space };

        let (mut cursor, gap_between) = match justify_content {
            JustifyContent::Start | JustifyContent::FlexStart => (0.0, main_gap),
            JustifyContent::End | JustifyContent::FlexEnd => (remaining_free, main_gap),
            JustifyContent::Center => (remaining_free / 2.0, main_gap),
            JustifyContent::SpaceBetween => (0.0, if line_items.len() > 1 { main_gap + remaining_free / (line_items.len() - 1) as f32 } else { main_gap }),
            JustifyContent::SpaceAround => {
                let per_item = if !line_items.is_empty() { remaining_free / line_items.len() as f32 } else { 0.0 };
                (per_item / 2.0, main_gap + per_item)
            }
            JustifyContent::SpaceEvenly => {
                let per_gap = if !line_items.is_empty() { remaining_free / (line_items.len() + 1) as f32 } else { 0.0 };
                (per_gap, main_gap + per_gap)
            }
            JustifyContent::Stretch => (0.0, main_gap),
        };

        for item in line_items.iter_mut() {
            if item.margin_is_auto.left {
                cursor += auto_margin_share;
            }
            item.offset_main = cursor;
            cursor += item.outer_target_size.width.max(item.outer_target_size.height);
            if item.margin_is_auto.right {
                cursor += auto_margin_share;
            }
            cursor += gap_between;
        }

        if is_reverse {
            let total = container_main_size;
            for item in line_items.iter_mut() {
                let size = item.outer_target_size.width.max(item.outer_target_size.height);
                item.offset_main = (total - item.offset_main - size).max(0.0);
            }
        }
    }
}

/// §9.4: each line's cross size is the largest hypothetical outer cross size
/// among its items, unless this is the container's only line and its cross
/// size is already definite (then the line simply takes that size).
fn determine_line_cross_sizes(items: &[FlexItem], lines: &mut [FlexLine], is_row: bool, known_container_cross_size: Option<f32>) {
    if lines.len() == 1 && known_container_cross_size.is_some() {
        lines[0].cross_size = known_container_cross_size.unwrap();
        return;
    }

    for line in lines.iter_mut() {
        line.cross_size = items[line.items_start..line.items_end]
            .iter()
            .map(|item| {
                let cross = if is_row { item.target_size.height } else { item.target_size.width };
                let margin_cross = if is_row { item.margin.vertical_axis_sum() } else { item.margin.horizontal_axis_sum() };
                cross + margin_cross
            })
            .fold(0.0f32, f32::max);
    }
}

/// §9.4 (multi-line): distributes lines across the container's cross size via `align_content`.
fn distribute_cross_axis(lines: &mut [FlexLine], container_cross_size: f32, cross_gap: f32, align_content: JustifyContent, is_wrap_reverse: bool) {
    if lines.is_empty() {
        return;
    }

    let used: f32 = lines.iter().map(|l| l.cross_size).sum::<f32>() + cross_gap * (lines.len().saturating_sub(1)) as f32;
    let free = (container_cross_size - used).max(0.0);
    let extra_per_line = match align_content {
        JustifyContent::Stretch => free / lines.len() as f32,
        _ => 0.0,
    };

    let mut cursor = match align_content {
        JustifyContent::End | JustifyContent::FlexEnd => free,
        JustifyContent::Center => free / 2.0,
        _ => 0.0,
    };

    for line in lines.iter_mut() {
        line.cross_size += extra_per_line;
        line.offset_cross = cursor;
        cursor += line.cross_size + cross_gap;
    }

    if is_wrap_reverse {
        let total = container_cross_size;
        for line in lines.iter_mut() {
            line.offset_cross = (total - line.offset_cross - line.cross_size).max(0.0);
        }
    }
}

fn write_final_item_layouts(tree: &mut impl LayoutTree, items: &[FlexItem], lines: &[FlexLine], is_row: bool, container_padding: Rect<f32>, container_border: Rect<f32>, run_mode: RunMode) {
    if run_mode == RunMode::ComputeSize {
        return;
    }

    for line in lines {
        for item in &items[line.items_start..line.items_end] {
            let cross_size = if is_row { item.target_size.height } else { item.target_size.width };
            let aligned_cross = match item.align_self {
                AlignItems::Stretch => line.cross_size - (if is_row { item.margin.vertical_axis_sum() } else { item.margin.horizontal_axis_sum() }),
                _ => cross_size,
            };
            let cross_offset_in_line = match item.align_self {
                AlignItems::Start | AlignItems::FlexStart | AlignItems::Baseline | AlignItems::Stretch => 0.0,
                AlignItems::End | AlignItems::FlexEnd => line.cross_size - aligned_cross,
                AlignItems::Center => (line.cross_size - aligned_cross) / 2.0,
            };

            let (size, location) = if is_row {
                (
                    Size { width: item.target_size.width, height: aligned_cross },
                    Point {
                        x: container_padding.left + container_border.left + item.offset_main + item.margin.left,
                        y: container_padding.top + container_border.top + line.offset_cross + cross_offset_in_line + item.margin.top,
                    },
                )
            } else {
                (
                    Size { width: aligned_cross, height: item.target_size.height },
                    Point {
                        x: container_padding.left + container_border.left + line.offset_cross + cross_offset_in_line + item.margin.left,
                        y: container_padding.top + container_border.top + item.offset_main + item.margin.top,
                    },
                )
            };

            let node_inner_size = Size { width: Some(size.width), height: Some(size.height) };
            tree.compute_child_layout(
                item.node_id,
                LayoutInput {
                    known_dimensions: node_inner_size,
                    parent_size: node_inner_size,
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
            layout.location = location;
            layout.margin = item.margin;
            layout.padding = item.padding;
            layout.border = item.border;
        }
    }
}

fn perform_absolute_layout(tree: &mut impl LayoutTree, node: NodeId, container_size: Size<f32>, padding: Rect<f32>, border: Rect<f32>) {
    let child_count = tree.child_count(node);
    let content_area = Size { width: container_size.width - padding.horizontal_axis_sum() - border.horizontal_axis_sum(), height: container_size.height - padding.vertical_axis_sum() - border.vertical_axis_sum() };
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_packs_items_without_wrap() {
        let items_len = 3;
        let lines = alloc_vec_one_line(items_len);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].items_start, 0);
        assert_eq!(lines[0].items_end, items_len);
    }
}
