//! Dispatch between formatting contexts, and the root entry point.
use crate::geometry::{Point, Size};
use crate::style::Display;
use crate::tree::{LayoutInput, LayoutOutput, LayoutTree, NodeId, RunMode, SizingMode};
use crate::util::sys::round;

pub mod hidden;
pub mod leaf;

#[cfg(feature = "block_layout")]
pub mod block;
#[cfg(feature = "flexbox")]
pub mod flexbox;
#[cfg(feature = "grid")]
pub mod grid;

/// Populates `root` and every reachable descendant's [`Layout`](crate::tree::Layout) for the
/// given available space. This is the engine's single public entry point.
pub fn compute_root_layout(tree: &mut impl LayoutTree, root: NodeId, available_space: Size<crate::style::AvailableSpace>) {
    compute_root_layout_with_rounding(tree, root, available_space, true);
}

/// As [`compute_root_layout`], but rounding to whole pixel boundaries can be
/// skipped (used by [`TaffyTree::disable_rounding`](crate::tree::TaffyTree::disable_rounding)).
pub fn compute_root_layout_with_rounding(tree: &mut impl LayoutTree, root: NodeId, available_space: Size<crate::style::AvailableSpace>, use_rounding: bool) {
    let output = compute_cached_layout(tree, root, LayoutInput::root(available_space));

    let layout = tree.get_unrounded_layout_mut(root);
    layout.order = 0;
    layout.location = Point::ZERO;
    layout.size = output.size;
    layout.content_size = output.content_size;

    if use_rounding {
        round_layout(tree, root);
    }
}

/// Computes `node`'s layout for `input`, consulting and populating the node's
/// [`Cache`](crate::tree::Cache) along the way.
pub fn compute_cached_layout(tree: &mut impl LayoutTree, node: NodeId, input: LayoutInput) -> LayoutOutput {
    let cache_run_mode = if input.sizing_mode == SizingMode::ContentSize { RunMode::ComputeSize } else { input.run_mode };

    if let Some(cached) = tree.get_cache_mut(node).get(input.known_dimensions, input.available_space, cache_run_mode) {
        return cached;
    }

    let output = compute_node_layout(tree, node, input);
    tree.get_cache_mut(node).store(input.known_dimensions, input.available_space, cache_run_mode, output);
    output
}

/// Dispatches to the formatting context implied by `node`'s `Display`, or to the
/// leaf/hidden algorithms when the node has no children or is `display: none`.
fn compute_node_layout(tree: &mut impl LayoutTree, node: NodeId, input: LayoutInput) -> LayoutOutput {
    let display = tree.get_style(node).display;
    let has_children = tree.child_count(node) > 0;

    if display.is_none() {
        return hidden::compute_hidden_layout(tree, node);
    }

    if !has_children {
        return leaf::compute_leaf_layout(tree, node, input);
    }

    match display {
        Display::None => unreachable!("handled above"),
        #[cfg(feature = "block_layout")]
        Display::Block => block::compute_block_layout(tree, node, input),
        #[cfg(not(feature = "block_layout"))]
        Display::Block => leaf::compute_leaf_layout(tree, node, input),
        #[cfg(feature = "flexbox")]
        Display::Flex => flexbox::compute_flexbox_layout(tree, node, input),
        #[cfg(not(feature = "flexbox"))]
        Display::Flex => leaf::compute_leaf_layout(tree, node, input),
        #[cfg(feature = "grid")]
        Display::Grid => grid::compute_grid_layout(tree, node, input),
        #[cfg(not(feature = "grid"))]
        Display::Grid => leaf::compute_leaf_layout(tree, node, input),
        Display::Inline | Display::InlineBlock => leaf::compute_leaf_layout(tree, node, input),
    }
}

/// Rounds every reachable node's stored layout to whole pixel boundaries, working
/// from absolute (document-relative) coordinates so that adjacent boxes never
/// drift apart by a rounded pixel. Mirrors the rounding approach used by real
/// browser/UI layout engines (rather than rounding each node's size independently,
/// which can leave 1px gaps between what should be abutting siblings).
fn round_layout(tree: &mut impl LayoutTree, node: NodeId) {
    round_layout_inner(tree, node, 0.0, 0.0);
}

fn round_layout_inner(tree: &mut impl LayoutTree, node: NodeId, cumulative_x: f32, cumulative_y: f32) {
    let layout = tree.get_unrounded_layout_mut(node);
    let unrounded_location = layout.location;
    let unrounded_size = layout.size;

    let abs_x = cumulative_x + unrounded_location.x;
    let abs_y = cumulative_y + unrounded_location.y;
    let rounded_x = round(abs_x);
    let rounded_y = round(abs_y);

    layout.location.x = rounded_x - round(cumulative_x);
    layout.location.y = rounded_y - round(cumulative_y);
    layout.size.width = round(abs_x + unrounded_size.width) - rounded_x;
    layout.size.height = round(abs_y + unrounded_size.height) - rounded_y;
    layout.scrollbar_size.width = round(layout.scrollbar_size.width);
    layout.scrollbar_size.height = round(layout.scrollbar_size.height);
    layout.border = layout.border.map(round);
    layout.padding = layout.padding.map(round);

    let child_count = tree.child_count(node);
    for index in 0..child_count {
        let child = tree.get_child_id(node, index);
        round_layout_inner(tree, child, abs_x, abs_y);
    }
}
