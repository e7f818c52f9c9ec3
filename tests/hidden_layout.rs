use layout_kernel::prelude::*;

#[test]
fn hidden_subtree_is_zero_sized() {
    let mut tree = TaffyTree::new();

    let grandchild = tree.new_leaf(Style { size: Size { width: length(50.0), height: length(50.0) }, ..Default::default() }).unwrap();
    let child = tree
        .new_with_children(
            Style { display: Display::None, size: Size { width: length(50.0), height: length(50.0) }, ..Default::default() },
            &[grandchild],
        )
        .unwrap();
    let root_style = Style { display: Display::Flex, size: Size { width: length(200.0), height: length(200.0) }, ..Default::default() };
    let root = tree.new_with_children(root_style, &[child]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    assert_eq!(tree.layout(child).unwrap().size, Size { width: 0.0, height: 0.0 });
    assert_eq!(tree.layout(grandchild).unwrap().size, Size { width: 0.0, height: 0.0 });
    assert_eq!(tree.layout(root).unwrap().size, Size { width: 200.0, height: 200.0 });
}
