//! [`TaffyTree`]'s node arena and its [`PartialLayoutTree`]/[`LayoutTree`] impl.
use slotmap::{DefaultKey, SlotMap};

use crate::geometry::Size;
use crate::style::{AvailableSpace, Style};
use crate::tree::diagnostics::{sanitize_measure_result, Diagnostic, DiagnosticsSink};
use crate::tree::{Cache, Layout, LayoutInput, LayoutOutput, LayoutTree, NodeId, PartialLayoutTree, RunMode};
use crate::util::sys::{Box, Vec};

use super::{TaffyError, TaffyResult};

/// A leaf node's intrinsic-size callback: given the dimensions already known
/// (from the parent) and the space available, returns the content's size.
/// `Raw` is a plain function pointer (no captured state, usable without
/// `alloc`'s `Box`); `Boxed` allows a closure that captures external state
/// (e.g. a handle into a text shaping cache).
pub enum MeasureFunc {
    /// A measure function with no captured state
    Raw(fn(Size<Option<f32>>, Size<AvailableSpace>) -> Size<f32>),
    /// A measure function (closure) that may capture external state
    Boxed(Box<dyn FnMut(Size<Option<f32>>, Size<AvailableSpace>) -> Size<f32>>),
}

impl MeasureFunc {
    fn measure(&mut self, known_dimensions: Size<Option<f32>>, available_space: Size<AvailableSpace>) -> Size<f32> {
        match self {
            MeasureFunc::Raw(f) => f(known_dimensions, available_space),
            MeasureFunc::Boxed(f) => f(known_dimensions, available_space),
        }
    }
}

/// Global configuration for a [`TaffyTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TaffyConfig {
    /// Whether `compute_layout` snaps the computed layout to whole pixel boundaries
    pub use_rounding: bool,
}

impl Default for TaffyConfig {
    fn default() -> Self {
        Self { use_rounding: true }
    }
}

/// Everything stored per node: its style, its cached layout results, its
/// most recently computed layout, and (for measured leaves) a content-size callback.
struct NodeData {
    style: Style,
    cache: Cache,
    layout: Layout,
    measure: Option<MeasureFunc>,
}

impl NodeData {
    fn new(style: Style) -> Self {
        Self { style, cache: Cache::new(), layout: Layout::new(), measure: None }
    }

    fn mark_dirty(&mut self) {
        self.cache.clear();
    }
}

/// An arena of styled nodes, organized into a tree, that can compute its own layout.
///
/// `TaffyTree` owns every node's [`Style`], its last computed [`Layout`], and
/// (for measured leaves such as text or images) a [`MeasureFunc`]. Build a
/// tree with [`new_leaf`](TaffyTree::new_leaf)/[`new_with_children`](TaffyTree::new_with_children),
/// then call [`compute_layout`](TaffyTree::compute_layout) to populate every
/// reachable node's [`layout`](TaffyTree::layout).
pub struct TaffyTree {
    nodes: SlotMap<DefaultKey, NodeData>,
    children: SlotMap<DefaultKey, Vec<NodeId>>,
    parents: SlotMap<DefaultKey, Option<NodeId>>,
    config: TaffyConfig,
    diagnostics: DiagnosticsSink,
}

impl Default for TaffyTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TaffyTree {
    /// Creates a new, empty tree with a default capacity of 16 nodes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    /// Creates a new, empty tree that can store `capacity` nodes before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity(capacity),
            children: SlotMap::with_capacity(capacity),
            parents: SlotMap::with_capacity(capacity),
            config: TaffyConfig::default(),
            diagnostics: DiagnosticsSink::new(),
        }
    }

    /// Creates a tree configured with the given [`TaffyConfig`].
    #[must_use]
    pub fn with_config(config: TaffyConfig) -> Self {
        Self { config, ..Self::with_capacity(16) }
    }

    /// Enables rounding computed layouts to whole pixel boundaries (the default).
    pub fn enable_rounding(&mut self) {
        self.config.use_rounding = true;
    }

    /// Disables rounding, leaving computed layouts at their raw `f32` values.
    pub fn disable_rounding(&mut self) {
        self.config.use_rounding = false;
    }

    fn node_key(&self, node: NodeId) -> TaffyResult<DefaultKey> {
        let key = node.into();
        if self.nodes.contains_key(key) {
            Ok(key)
        } else {
            Err(TaffyError::InvalidNode(node))
        }
    }

    /// Creates and adds a new, childless, unattached node to the tree.
    pub fn new_leaf(&mut self, style: Style) -> TaffyResult<NodeId> {
        let id = self.nodes.insert(NodeData::new(style));
        self.children.insert(Vec::new());
        self.parents.insert(None);
        Ok(id.into())
    }

    /// Creates and adds a new, unattached leaf node with a content-size callback attached.
    pub fn new_leaf_with_measure(&mut self, style: Style, measure: MeasureFunc) -> TaffyResult<NodeId> {
        let mut data = NodeData::new(style);
        data.measure = Some(measure);
        let id = self.nodes.insert(data);
        self.children.insert(Vec::new());
        self.parents.insert(None);
        Ok(id.into())
    }

    /// Creates and adds a new, unattached node with the given `children`.
    pub fn new_with_children(&mut self, style: Style, children: &[NodeId]) -> TaffyResult<NodeId> {
        let id = NodeId::from(self.nodes.insert(NodeData::new(style)));
        for &child in children {
            self.parents[child.into()] = Some(id);
        }
        self.children.insert(children.iter().copied().collect());
        self.parents.insert(None);
        Ok(id)
    }

    /// Drops every node in the tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.children.clear();
        self.parents.clear();
    }

    /// Removes `node` from the tree entirely, detaching it from its parent (if any)
    /// and orphaning its own children.
    pub fn remove(&mut self, node: NodeId) -> TaffyResult<NodeId> {
        let key = self.node_key(node)?;

        if let Some(parent) = self.parents[key] {
            if let Some(siblings) = self.children.get_mut(parent.into()) {
                siblings.retain(|&id| id != node);
            }
        }
        if let Some(children) = self.children.get(key) {
            for &child in children {
                self.parents[child.into()] = None;
            }
        }

        self.children.remove(key);
        self.parents.remove(key);
        self.nodes.remove(key);

        Ok(node)
    }

    /// Sets (or clears) `node`'s content-size callback.
    pub fn set_measure(&mut self, node: NodeId, measure: Option<MeasureFunc>) -> TaffyResult<()> {
        let key = self.node_key(node)?;
        self.nodes[key].measure = measure;
        self.mark_dirty(node)
    }

    /// Appends `child` to the end of `parent`'s child list.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> TaffyResult<()> {
        let parent_key = self.node_key(parent)?;
        self.node_key(child)?;
        self.parents[child.into()] = Some(parent);
        self.children[parent_key].push(child);
        self.mark_dirty(parent)
    }

    /// Inserts `child` at `child_index` in `parent`'s child list, shifting later children right.
    pub fn insert_child_at_index(&mut self, parent: NodeId, child_index: usize, child: NodeId) -> TaffyResult<()> {
        let parent_key = self.node_key(parent)?;
        self.node_key(child)?;

        let child_count = self.children[parent_key].len();
        if child_index > child_count {
            return Err(TaffyError::ChildIndexOutOfBounds { parent, child_index, child_count });
        }

        self.parents[child.into()] = Some(parent);
        self.children[parent_key].insert(child_index, child);
        self.mark_dirty(parent)
    }

    /// Replaces `parent`'s entire child list with `children`.
    pub fn set_children(&mut self, parent: NodeId, children: &[NodeId]) -> TaffyResult<()> {
        let parent_key = self.node_key(parent)?;

        for &child in &self.children[parent_key] {
            self.parents[child.into()] = None;
        }
        for &child in children {
            self.parents[child.into()] = Some(parent);
        }

        let parent_children = &mut self.children[parent_key];
        parent_children.clear();
        parent_children.extend(children.iter().copied());

        self.mark_dirty(parent)
    }

    /// Detaches `child` from `parent` (without removing `child` from the tree).
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> TaffyResult<NodeId> {
        let parent_key = self.node_key(parent)?;
        let index = self.children[parent_key].iter().position(|&id| id == child).ok_or(TaffyError::InvalidNode(child))?;
        self.remove_child_at_index(parent, index)
    }

    /// Detaches the child at `child_index` from `parent` (without removing it from the tree).
    pub fn remove_child_at_index(&mut self, parent: NodeId, child_index: usize) -> TaffyResult<NodeId> {
        let parent_key = self.node_key(parent)?;

        let child_count = self.children[parent_key].len();
        if child_index >= child_count {
            return Err(TaffyError::ChildIndexOutOfBounds { parent, child_index, child_count });
        }

        let child = self.children[parent_key].remove(child_index);
        self.parents[child.into()] = None;
        self.mark_dirty(parent)?;
        Ok(child)
    }

    /// Replaces the child at `child_index` under `parent` with `new_child`, returning the
    /// replaced child (still present in the tree, just detached).
    pub fn replace_child_at_index(&mut self, parent: NodeId, child_index: usize, new_child: NodeId) -> TaffyResult<NodeId> {
        let parent_key = self.node_key(parent)?;

        let child_count = self.children[parent_key].len();
        if child_index >= child_count {
            return Err(TaffyError::ChildIndexOutOfBounds { parent, child_index, child_count });
        }

        self.parents[new_child.into()] = Some(parent);
        let old_child = core::mem::replace(&mut self.children[parent_key][child_index], new_child);
        self.parents[old_child.into()] = None;
        self.mark_dirty(parent)?;
        Ok(old_child)
    }

    /// Returns the child of `parent` at `child_index`.
    pub fn child_at_index(&self, parent: NodeId, child_index: usize) -> TaffyResult<NodeId> {
        let parent_key = self.node_key(parent)?;
        let child_count = self.children[parent_key].len();
        if child_index >= child_count {
            return Err(TaffyError::ChildIndexOutOfBounds { parent, child_index, child_count });
        }
        Ok(self.children[parent_key][child_index])
    }

    /// The total number of nodes currently stored in the tree.
    pub fn total_node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of children `parent` has.
    pub fn child_count(&self, parent: NodeId) -> TaffyResult<usize> {
        let parent_key = self.node_key(parent)?;
        Ok(self.children[parent_key].len())
    }

    /// The children of `parent`, in document order.
    pub fn children(&self, parent: NodeId) -> TaffyResult<Vec<NodeId>> {
        let parent_key = self.node_key(parent)?;
        Ok(self.children[parent_key].iter().copied().collect())
    }

    /// Sets `node`'s style, invalidating its (and its ancestors') cached layout.
    pub fn set_style(&mut self, node: NodeId, style: Style) -> TaffyResult<()> {
        let key = self.node_key(node)?;
        self.nodes[key].style = style;
        self.mark_dirty(node)
    }

    /// `node`'s current style.
    pub fn style(&self, node: NodeId) -> TaffyResult<&Style> {
        let key = self.node_key(node)?;
        Ok(&self.nodes[key].style)
    }

    /// `node`'s layout, relative to its parent's border-box, as of the last
    /// [`compute_layout`](TaffyTree::compute_layout) call.
    pub fn layout(&self, node: NodeId) -> TaffyResult<&Layout> {
        let key = self.node_key(node)?;
        Ok(&self.nodes[key].layout)
    }

    /// Marks `node` and every ancestor's cached layout as stale.
    ///
    /// WARNING: stack-overflows if the tree contains a cycle.
    pub fn mark_dirty(&mut self, node: NodeId) -> TaffyResult<()> {
        fn mark_dirty_recursive(nodes: &mut SlotMap<DefaultKey, NodeData>, parents: &SlotMap<DefaultKey, Option<NodeId>>, key: DefaultKey) {
            nodes[key].mark_dirty();
            if let Some(Some(parent)) = parents.get(key) {
                mark_dirty_recursive(nodes, parents, (*parent).into());
            }
        }

        let key = self.node_key(node)?;
        mark_dirty_recursive(&mut self.nodes, &self.parents, key);
        Ok(())
    }

    /// Returns true if `node`'s layout has never been computed, or has been invalidated since.
    pub fn dirty(&self, node: NodeId) -> TaffyResult<bool> {
        let key = self.node_key(node)?;
        Ok(self.nodes[key].cache.is_empty())
    }

    /// Computes the layout of `node` and every reachable descendant, for the given available space.
    pub fn compute_layout(&mut self, node: NodeId, available_space: Size<AvailableSpace>) -> TaffyResult<()> {
        self.node_key(node)?;
        let use_rounding = self.config.use_rounding;
        crate::compute::compute_root_layout_with_rounding(self, node, available_space, use_rounding);
        Ok(())
    }

    /// Drains and returns every [`Diagnostic`] recorded since the last call.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.drain()
    }
}

impl PartialLayoutTree for TaffyTree {
    type ChildIter<'a> = core::iter::Copied<core::slice::Iter<'a, NodeId>>;

    #[inline]
    fn child_ids(&self, node: NodeId) -> Self::ChildIter<'_> {
        self.children[node.into()].iter().copied()
    }

    #[inline]
    fn child_count(&self, node: NodeId) -> usize {
        self.children[node.into()].len()
    }

    #[inline]
    fn get_child_id(&self, node: NodeId, index: usize) -> NodeId {
        self.children[node.into()][index]
    }

    #[inline]
    fn get_style(&self, node: NodeId) -> &Style {
        &self.nodes[node.into()].style
    }

    #[inline]
    fn get_cache_mut(&mut self, node: NodeId) -> &mut Cache {
        &mut self.nodes[node.into()].cache
    }

    fn compute_child_layout(&mut self, node: NodeId, input: LayoutInput) -> LayoutOutput {
        // An ancestor is `Display::None`; lay this node out as hidden
        // regardless of its own display style.
        if input.run_mode == RunMode::PerformHiddenLayout {
            return crate::compute::hidden::compute_hidden_layout(self, node);
        }
        crate::compute::compute_cached_layout(self, node, input)
    }

    #[inline]
    fn needs_measure(&self, node: NodeId) -> bool {
        self.nodes[node.into()].measure.is_some()
    }

    fn measure_child_size(
        &mut self,
        node: NodeId,
        known_dimensions: Size<Option<f32>>,
        _parent_size: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
    ) -> Size<f32> {
        let key = node.into();
        let measured = match self.nodes[key].measure.as_mut() {
            Some(measure) => measure.measure(known_dimensions, available_space),
            None => Size::ZERO,
        };
        sanitize_measure_result(&mut self.diagnostics, node, measured)
    }
}

impl LayoutTree for TaffyTree {
    #[inline]
    fn get_unrounded_layout_mut(&mut self, node: NodeId) -> &mut Layout {
        &mut self.nodes[node.into()].layout
    }

    #[inline]
    fn get_final_layout(&self, node: NodeId) -> &Layout {
        &self.nodes[node.into()].layout
    }

    #[inline]
    fn get_final_layout_mut(&mut self, node: NodeId) -> &mut Layout {
        &mut self.nodes[node.into()].layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Display;

    #[test]
    fn new_should_allocate_default_capacity() {
        let tree = TaffyTree::new();
        assert_eq!(tree.total_node_count(), 0);
    }

    #[test]
    fn new_leaf_has_no_children() {
        let mut tree = TaffyTree::new();
        let node = tree.new_leaf(Style::default()).unwrap();
        assert_eq!(tree.child_count(node).unwrap(), 0);
    }

    #[test]
    fn new_with_children_tracks_child_order() {
        let mut tree = TaffyTree::new();
        let child0 = tree.new_leaf(Style::default()).unwrap();
        let child1 = tree.new_leaf(Style::default()).unwrap();
        let node = tree.new_with_children(Style::default(), &[child0, child1]).unwrap();

        assert_eq!(tree.child_count(node).unwrap(), 2);
        assert_eq!(tree.children(node).unwrap(), Vec::from([child0, child1]));
    }

    #[test]
    fn remove_detaches_hierarchy() {
        let mut tree = TaffyTree::new();
        let node2 = tree.new_leaf(Style::default()).unwrap();
        let node1 = tree.new_with_children(Style::default(), &[node2]).unwrap();
        let node0 = tree.new_with_children(Style::default(), &[node1]).unwrap();

        tree.remove(node1).unwrap();

        assert!(tree.children(node0).unwrap().is_empty());
        assert!(tree.children(node2).unwrap().is_empty());
    }

    #[test]
    fn remove_child_updates_parent_after_parent_removed() {
        let mut tree = TaffyTree::new();
        let parent = tree.new_leaf(Style::default()).unwrap();
        let child = tree.new_leaf(Style::default()).unwrap();
        tree.add_child(parent, child).unwrap();

        tree.remove(parent).unwrap();

        assert!(tree.set_children(child, &[]).is_ok());
    }

    #[test]
    fn invalid_node_is_reported_not_panicked() {
        let mut tree = TaffyTree::new();
        let node = tree.new_leaf(Style::default()).unwrap();
        tree.remove(node).unwrap();

        assert_eq!(tree.style(node), Err(TaffyError::InvalidNode(node)));
    }

    #[test]
    fn child_index_out_of_bounds_is_reported() {
        let mut tree = TaffyTree::new();
        let node = tree.new_leaf(Style::default()).unwrap();
        assert_eq!(tree.child_at_index(node, 0), Err(TaffyError::ChildIndexOutOfBounds { parent: node, child_index: 0, child_count: 0 }));
    }

    #[test]
    fn set_style_marks_dirty() {
        let mut tree = TaffyTree::new();
        let node = tree.new_leaf(Style::default()).unwrap();
        tree.compute_layout(node, Size::MAX_CONTENT).unwrap();
        assert!(!tree.dirty(node).unwrap());

        tree.set_style(node, Style { display: Display::None, ..Style::default() }).unwrap();
        assert!(tree.dirty(node).unwrap());
    }

    #[test]
    fn mark_dirty_propagates_to_ancestors_only() {
        let mut tree = TaffyTree::new();
        let child0 = tree.new_leaf(Style::default()).unwrap();
        let child1 = tree.new_leaf(Style::default()).unwrap();
        let node = tree.new_with_children(Style::default(), &[child0, child1]).unwrap();
        tree.compute_layout(node, Size::MAX_CONTENT).unwrap();

        tree.mark_dirty(child0).unwrap();
        assert!(tree.dirty(child0).unwrap());
        assert!(!tree.dirty(child1).unwrap());
        assert!(tree.dirty(node).unwrap());
    }
}
