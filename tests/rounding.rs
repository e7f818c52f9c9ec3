use layout_kernel::prelude::*;

#[test]
fn rounded_children_do_not_leave_gaps() {
    let mut tree = TaffyTree::new();

    // Three items whose widths don't divide evenly (100.33... each of 301px)
    // so raw flex math produces fractional sizes.
    let a = tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).unwrap();
    let b = tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).unwrap();
    let c = tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).unwrap();

    let root_style = Style { display: Display::Flex, size: Size { width: length(301.0), height: length(10.0) }, ..Default::default() };
    let root = tree.new_with_children(root_style, &[a, b, c]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    let a_layout = tree.layout(a).unwrap();
    let b_layout = tree.layout(b).unwrap();
    let c_layout = tree.layout(c).unwrap();

    assert_eq!(a_layout.location.x + a_layout.size.width, b_layout.location.x);
    assert_eq!(b_layout.location.x + b_layout.size.width, c_layout.location.x);
    assert_eq!(c_layout.location.x + c_layout.size.width, 301.0);

    assert_eq!(a_layout.size.width.fract(), 0.0);
    assert_eq!(b_layout.size.width.fract(), 0.0);
    assert_eq!(c_layout.size.width.fract(), 0.0);
}

#[test]
fn disabled_rounding_preserves_fractional_sizes() {
    let mut tree = TaffyTree::new();
    tree.disable_rounding();

    let a = tree.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).unwrap();
    let b = tree.new_leaf(Style { flex_grow: 2.0, ..Default::default() }).unwrap();

    let root_style = Style { display: Display::Flex, size: Size { width: length(100.0), height: length(10.0) }, ..Default::default() };
    let root = tree.new_with_children(root_style, &[a, b]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    let a_width = tree.layout(a).unwrap().size.width;
    let b_width = tree.layout(b).unwrap().size.width;
    assert!((a_width + b_width - 100.0).abs() < 0.001);
    assert!((b_width - 2.0 * a_width).abs() < 0.001);
    // Unrounded, a 1:2 split of 100px leaves a fractional remainder.
    assert!(a_width.fract() != 0.0);
}
