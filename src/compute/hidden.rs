//! The `display: none` formatting context: zero-sizes a node and its whole subtree.
use crate::geometry::Point;
use crate::tree::{LayoutOutput, LayoutTree, NodeId};

/// Recursively assigns a zero-size layout to `node` and every descendant,
/// preserving document order in `Layout::order` so siblings that are later
/// un-hidden don't need their ordering recomputed.
pub fn compute_hidden_layout(tree: &mut impl LayoutTree, node: NodeId) -> LayoutOutput {
    let child_count = tree.child_count(node);
    for order in 0..child_count {
        let child = tree.get_child_id(node, order);
        perform_hidden_layout_inner(tree, child, order as u32);
    }

    LayoutOutput::HIDDEN
}

fn perform_hidden_layout_inner(tree: &mut impl LayoutTree, node: NodeId, order: u32) {
    *tree.get_cache_mut(node) = Default::default();

    let layout = tree.get_unrounded_layout_mut(node);
    *layout = crate::tree::Layout::with_order(order);
    layout.location = Point::ZERO;

    let child_count = tree.child_count(node);
    for child_order in 0..child_count {
        let child = tree.get_child_id(node, child_order);
        perform_hidden_layout_inner(tree, child, child_order as u32);
    }
}

#[cfg(test)]
mod tests {
    // Exercised end-to-end via the `hidden_subtree_is_zero_sized` integration
    // test, which drives this through `TaffyTree::compute_layout`.
}
