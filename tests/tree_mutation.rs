use layout_kernel::prelude::*;

#[test]
fn removing_a_node_detaches_it_from_its_parent() {
    let mut tree = TaffyTree::new();
    let child = tree.new_leaf(Style::default()).unwrap();
    let parent = tree.new_with_children(Style::default(), &[child]).unwrap();

    assert_eq!(tree.child_count(parent).unwrap(), 1);

    tree.remove(child).unwrap();
    assert_eq!(tree.child_count(parent).unwrap(), 0);
    assert!(tree.style(child).is_err());
}

#[test]
fn replace_child_at_index_swaps_in_place() {
    let mut tree = TaffyTree::new();
    let original = tree.new_leaf(Style::default()).unwrap();
    let replacement = tree.new_leaf(Style::default()).unwrap();
    let parent = tree.new_with_children(Style::default(), &[original]).unwrap();

    let replaced = tree.replace_child_at_index(parent, 0, replacement).unwrap();

    assert_eq!(replaced, original);
    assert_eq!(tree.child_at_index(parent, 0).unwrap(), replacement);
}

#[test]
fn dirty_tracks_cache_invalidation_through_mutation() {
    let mut tree = TaffyTree::new();
    let child = tree.new_leaf(Style::default()).unwrap();
    let parent = tree.new_with_children(Style::default(), &[child]).unwrap();

    tree.compute_layout(parent, Size::MAX_CONTENT).unwrap();
    assert!(!tree.dirty(parent).unwrap());

    let new_child = tree.new_leaf(Style::default()).unwrap();
    tree.add_child(parent, new_child).unwrap();
    assert!(tree.dirty(parent).unwrap());
}

#[test]
fn total_node_count_reflects_additions_and_removals() {
    let mut tree = TaffyTree::new();
    assert_eq!(tree.total_node_count(), 0);

    let a = tree.new_leaf(Style::default()).unwrap();
    let b = tree.new_leaf(Style::default()).unwrap();
    assert_eq!(tree.total_node_count(), 2);

    tree.remove(a).unwrap();
    assert_eq!(tree.total_node_count(), 1);
    let _ = b;
}
