use layout_kernel::prelude::*;

#[test]
fn block_children_stack_vertically_and_fill_width() {
    let mut tree = TaffyTree::new();

    let a = tree.new_leaf(Style { size: Size { width: Dimension::Auto, height: length(30.0) }, ..Default::default() }).unwrap();
    let b = tree.new_leaf(Style { size: Size { width: Dimension::Auto, height: length(20.0) }, ..Default::default() }).unwrap();

    let root_style = Style { display: Display::Block, size: Size { width: length(150.0), height: Dimension::Auto }, ..Default::default() };
    let root = tree.new_with_children(root_style, &[a, b]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    let a_layout = tree.layout(a).unwrap();
    let b_layout = tree.layout(b).unwrap();

    assert_eq!(a_layout.location, Point { x: 0.0, y: 0.0 });
    assert_eq!(a_layout.size.width, 150.0);
    assert_eq!(b_layout.location.y, 30.0);
    assert_eq!(tree.layout(root).unwrap().size.height, 50.0);
}

#[test]
fn margin_collapses_between_adjacent_block_siblings() {
    let mut tree = TaffyTree::new();

    let margin_rect = |bottom: f32, top: f32| Rect {
        left: LengthPercentageAuto::Length(0.0),
        right: LengthPercentageAuto::Length(0.0),
        top: LengthPercentageAuto::Length(top),
        bottom: LengthPercentageAuto::Length(bottom),
    };

    let a = tree.new_leaf(Style { size: Size { width: Dimension::Auto, height: length(10.0) }, margin: margin_rect(20.0, 0.0), ..Default::default() }).unwrap();
    let b = tree.new_leaf(Style { size: Size { width: Dimension::Auto, height: length(10.0) }, margin: margin_rect(0.0, 10.0), ..Default::default() }).unwrap();

    let root_style = Style { display: Display::Block, size: Size { width: length(100.0), height: Dimension::Auto }, ..Default::default() };
    let root = tree.new_with_children(root_style, &[a, b]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    // The 20px bottom margin and 10px top margin collapse to max(20, 10) = 20px,
    // not their sum.
    let b_layout = tree.layout(b).unwrap();
    assert_eq!(b_layout.location.y, 30.0);
}
