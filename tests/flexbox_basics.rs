use layout_kernel::prelude::*;
use layout_kernel::style::{AlignItems, JustifyContent};

#[test]
fn row_of_three_equal_flex_items_divides_width() {
    let mut tree = TaffyTree::new();

    let child_style = Style { flex_grow: 1.0, ..Default::default() };
    let child0 = tree.new_leaf(child_style.clone()).unwrap();
    let child1 = tree.new_leaf(child_style.clone()).unwrap();
    let child2 = tree.new_leaf(child_style).unwrap();

    let root_style = Style {
        display: Display::Flex,
        size: Size { width: length(300.0), height: length(100.0) },
        ..Default::default()
    };
    let root = tree.new_with_children(root_style, &[child0, child1, child2]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    assert_eq!(tree.layout(root).unwrap().size.width, 300.0);
    assert_eq!(tree.layout(child0).unwrap().size.width, 100.0);
    assert_eq!(tree.layout(child1).unwrap().size.width, 100.0);
    assert_eq!(tree.layout(child2).unwrap().size.width, 100.0);
    assert_eq!(tree.layout(child0).unwrap().location.x, 0.0);
    assert_eq!(tree.layout(child1).unwrap().location.x, 100.0);
    assert_eq!(tree.layout(child2).unwrap().location.x, 200.0);
}

#[test]
fn centered_single_child() {
    let mut tree = TaffyTree::new();

    let child = tree.new_leaf(Style { size: Size { width: length(20.0), height: length(20.0) }, ..Default::default() }).unwrap();

    let root_style = Style {
        display: Display::Flex,
        size: Size { width: length(100.0), height: length(100.0) },
        align_items: Some(AlignItems::Center),
        justify_content: Some(JustifyContent::Center),
        ..Default::default()
    };
    let root = tree.new_with_children(root_style, &[child]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    let layout = tree.layout(child).unwrap();
    assert_eq!(layout.location.x, 40.0);
    assert_eq!(layout.location.y, 40.0);
}

#[test]
fn recompute_after_style_change_reflows() {
    let mut tree = TaffyTree::new();
    let child = tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).unwrap();
    let root_style = Style { display: Display::Flex, size: Size { width: length(200.0), height: length(50.0) }, ..Default::default() };
    let root = tree.new_with_children(root_style.clone(), &[child]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();
    assert_eq!(tree.layout(child).unwrap().size.width, 200.0);

    tree.set_style(root, Style { size: Size { width: length(400.0), height: length(50.0) }, ..root_style }).unwrap();
    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();
    assert_eq!(tree.layout(child).unwrap().size.width, 400.0);
}
