use hstack_demo::{content_view, demo_root, GREETING};
use visuals_ui::legend::{connector_height, LEGEND_INDENT};
use visuals_ui::prelude::*;
use visuals_ui::{AnnotationCollector, GeometryIndex, LayoutEngine, Rect, Size};

const VIEWPORT: Size = Size {
    width: 400.0,
    height: 300.0,
};

fn labels(records: &[visuals_ui::AnnotationRecord]) -> Vec<&str> {
    records.iter().map(|record| record.label()).collect()
}

#[test]
fn merged_annotations_list_children_before_the_row() {
    let tree = LayoutEngine::new().compute_layout(&content_view(), VIEWPORT);
    let records = AnnotationCollector::collect(tree.root());
    assert_eq!(labels(&records), ["Blue Rectangle", "Spacer", "HStack"]);
    let indices: Vec<usize> = records.iter().map(|record| record.stack_index()).collect();
    assert_eq!(indices, [0, 1, 2]);
}

#[test]
fn legend_rows_are_reversed_and_indented_by_stack_index() {
    let mut composition = Composition::new(demo_root());
    let tree = composition.compute_frame(VIEWPORT);

    let items = composition.root().items();
    let rows: Vec<(&str, usize)> = items
        .display_rows()
        .map(|record| (record.label(), record.stack_index()))
        .collect();
    assert_eq!(rows, [("HStack", 2), ("Spacer", 1), ("Blue Rectangle", 0)]);
    assert!(items.duplicate_indices().is_empty());

    let column = tree
        .find_by_key(visuals_ui::legend::LABELS_KEY)
        .expect("label column laid out");
    for index in 0..3 {
        let row = tree
            .find_by_key(&format!("legend-row-{index}"))
            .expect("legend row laid out");
        let indent = row.content_rect().min_x() - column.rect.min_x();
        assert!(
            (indent - index as f32 * LEGEND_INDENT).abs() < 1e-3,
            "row {index} indented by {indent}"
        );
    }
}

#[test]
fn connectors_point_up_from_labels_to_their_regions() {
    let mut composition = Composition::new(demo_root());
    let tree = composition.compute_frame(VIEWPORT);
    let index = GeometryIndex::build(&tree);

    for record in composition.root().items().records() {
        let row = tree
            .find_by_key(&format!("legend-row-{}", record.stack_index()))
            .expect("legend row laid out");
        let anchor = index.resolve(record.anchor()).expect("anchor resolves");
        let height = connector_height(row.rect, anchor);
        assert!(height > 0.0, "{} connector has height {height}", record.label());
    }

    let row = Rect::new(0.0, 90.0, 100.0, 20.0);
    assert_eq!(connector_height(row, Rect::new(0.0, 0.0, 10.0, 40.0)), 60.0);
    assert_eq!(connector_height(row, Rect::new(0.0, 0.0, 10.0, 160.0)), -60.0);
}

#[test]
fn greeting_is_laid_out_between_the_spacers() {
    let tree = LayoutEngine::new().compute_layout(&content_view(), VIEWPORT);
    let root = tree.root();
    let kinds: Vec<Option<&str>> = root.children.iter().map(|child| child.text()).collect();
    assert_eq!(kinds, [None, None, Some(GREETING), None, None]);

    let spacers = [&root.children[1], &root.children[3]];
    for spacer in spacers {
        assert_eq!(spacer.rect.width, 8.0);
        assert_eq!(spacer.rect.height, VIEWPORT.height);
    }
    let blue = root.children[0].rect.width;
    let green = root.children[4].rect.width;
    assert!((blue - green).abs() < 1e-3);
}

#[test]
fn recomposing_a_settled_frame_changes_nothing() {
    let mut composition = Composition::new(demo_root());
    let first = composition.compute_frame(VIEWPORT);
    let items = composition.root().items().clone();
    let second = composition.compute_frame(VIEWPORT);

    assert_eq!(composition.root().items(), &items);
    assert_eq!(first.root().rect, second.root().rect);
    let content = visuals_ui::legend::CONTENT_KEY;
    assert_eq!(
        first.find_by_key(content).map(|layout| layout.rect),
        second.find_by_key(content).map(|layout| layout.rect)
    );
}
