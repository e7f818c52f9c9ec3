use layout_kernel::prelude::*;
use layout_kernel::style::grid::{GridTemplateArea, NonRepeatedTrackSizingFunction, TrackSizingFunction};

fn track(points: f32) -> TrackSizingFunction {
    TrackSizingFunction::Single(NonRepeatedTrackSizingFunction::from_points(points))
}

#[test]
fn two_by_two_explicit_grid_places_items_in_document_order() {
    let mut tree = TaffyTree::new();

    let a = tree.new_leaf(Style::default()).unwrap();
    let b = tree.new_leaf(Style::default()).unwrap();
    let c = tree.new_leaf(Style::default()).unwrap();
    let d = tree.new_leaf(Style::default()).unwrap();

    let root_style = Style {
        display: Display::Grid,
        size: Size { width: length(200.0), height: length(200.0) },
        grid_template_columns: Vec::from([track(100.0), track(100.0)]),
        grid_template_rows: Vec::from([track(100.0), track(100.0)]),
        ..Default::default()
    };
    let root = tree.new_with_children(root_style, &[a, b, c, d]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    assert_eq!(tree.layout(a).unwrap().location, Point { x: 0.0, y: 0.0 });
    assert_eq!(tree.layout(b).unwrap().location, Point { x: 100.0, y: 0.0 });
    assert_eq!(tree.layout(c).unwrap().location, Point { x: 0.0, y: 100.0 });
    assert_eq!(tree.layout(d).unwrap().location, Point { x: 100.0, y: 100.0 });
}

#[test]
fn grid_template_areas_places_item_by_name() {
    let mut tree = TaffyTree::new();

    let sidebar_style = Style { grid_column: Line { start: GridPlacement::Named("sidebar".into()), end: GridPlacement::Auto }, ..Default::default() };
    let sidebar = tree.new_leaf(sidebar_style).unwrap();

    let root_style = Style {
        display: Display::Grid,
        size: Size { width: length(200.0), height: length(100.0) },
        grid_template_columns: Vec::from([track(50.0), track(150.0)]),
        grid_template_rows: Vec::from([track(100.0)]),
        grid_template_areas: Vec::from([GridTemplateArea {
            name: "sidebar".into(),
            row_start: 1,
            row_end: 2,
            column_start: 1,
            column_end: 2,
        }]),
        ..Default::default()
    };
    let root = tree.new_with_children(root_style, &[sidebar]).unwrap();

    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

    let layout = tree.layout(sidebar).unwrap();
    assert_eq!(layout.location, Point { x: 0.0, y: 0.0 });
    assert_eq!(layout.size.width, 50.0);
}

#[test]
fn unknown_area_name_falls_back_to_auto_placement() {
    let mut tree = TaffyTree::new();

    let item_style = Style { grid_column: Line { start: GridPlacement::Named("nonexistent".into()), end: GridPlacement::Auto }, ..Default::default() };
    let item = tree.new_leaf(item_style).unwrap();

    let root_style = Style {
        display: Display::Grid,
        size: Size { width: length(100.0), height: length(100.0) },
        grid_template_columns: Vec::from([track(100.0)]),
        grid_template_rows: Vec::from([track(100.0)]),
        ..Default::default()
    };
    let root = tree.new_with_children(root_style, &[item]).unwrap();

    // Must not panic; unresolved named placements degrade to auto-placement.
    tree.compute_layout(root, Size::MAX_CONTENT).unwrap();
    assert_eq!(tree.layout(item).unwrap().size.width, 100.0);
}
