use layout_kernel::prelude::*;
use layout_kernel::MeasureFunc;

#[test]
fn measured_leaf_reports_callback_size() {
    let mut tree = TaffyTree::new();

    let leaf = tree
        .new_leaf_with_measure(
            Style::default(),
            MeasureFunc::Raw(|known, _available| Size { width: known.width.unwrap_or(80.0), height: 40.0 }),
        )
        .unwrap();

    let root_style = Style { display: Display::Flex, size: Size { width: length(200.0), height: Dimension::Auto }, ..Default::default() };
    let root = tree.new_with_children(root_style, &[leaf]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    assert_eq!(tree.layout(leaf).unwrap().size.height, 40.0);
    assert_eq!(tree.layout(root).unwrap().size.height, 40.0);
}

#[test]
fn negative_measure_result_is_clamped_and_reported() {
    let mut tree = TaffyTree::new();

    let leaf = tree
        .new_leaf_with_measure(Style::default(), MeasureFunc::Raw(|_known, _available| Size { width: -10.0, height: f32::NAN }))
        .unwrap();
    let root = tree.new_with_children(Style::default(), &[leaf]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    assert_eq!(tree.layout(leaf).unwrap().size, Size { width: 0.0, height: 0.0 });

    let diagnostics = tree.take_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert!(tree.take_diagnostics().is_empty());
}

#[test]
fn boxed_measure_can_capture_state() {
    let mut tree = TaffyTree::new();
    let captured_width = 123.0_f32;

    let leaf = tree
        .new_leaf_with_measure(Style::default(), MeasureFunc::Boxed(Box::new(move |_known, _available| Size { width: captured_width, height: 10.0 })))
        .unwrap();
    let root = tree.new_with_children(Style::default(), &[leaf]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    assert_eq!(tree.layout(leaf).unwrap().size.width, 123.0);
}
