use visuals_ui::legend::{LABELS_KEY, LEGEND_INDENT};
use visuals_ui::prelude::*;
use visuals_ui::{AnnotationRecord, Color, GeometryIndex, LayoutBox, Size};

fn striped_spacer(modifier: Modifier) -> Node {
    Fill(
        modifier
            .width(8.0)
            .border(ShapeStyle::Primary, 1.0),
        DiagonalStripes::default(),
    )
}

fn twice_tagged_spacer() -> Node {
    Row(
        Modifier::empty().legend("HStack", 2),
        RowSpec::default().horizontal_arrangement(visuals_ui::LinearArrangement::Start),
        vec![
            Fill(Modifier::empty().legend("Blue Rectangle", 0), Color::BLUE),
            striped_spacer(Modifier::empty().legend("Spacer", 1)),
            Text(Modifier::empty(), "Hello, world"),
            striped_spacer(Modifier::empty().legend("Spacer", 1)),
            Fill(Modifier::empty(), Color::GREEN),
        ],
    )
}

fn row_label(row: &LayoutBox) -> &str {
    row.children
        .get(1)
        .and_then(LayoutBox::text)
        .unwrap_or_default()
}

#[test]
fn duplicate_stack_indices_keep_every_row() {
    let mut composition = Composition::new(
        LegendHost::new(twice_tagged_spacer).with_modifier(Modifier::empty().padding(16.0)),
    );
    let tree = composition.compute_frame(Size::new(400.0, 300.0));
    let items = composition.root().items();

    let merged: Vec<&str> = items.records().iter().map(AnnotationRecord::label).collect();
    assert_eq!(merged, vec!["Blue Rectangle", "Spacer", "Spacer", "HStack"]);
    assert_eq!(items.duplicate_indices(), vec![1]);

    let column = tree.find_by_key(LABELS_KEY).expect("label column");
    let rows: Vec<(&str, f32)> = column
        .children
        .iter()
        .map(|row| (row_label(row), row.content_rect().x - column.rect.x))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("HStack", 2.0 * LEGEND_INDENT),
            ("Spacer", LEGEND_INDENT),
            ("Spacer", LEGEND_INDENT),
            ("Blue Rectangle", 0.0),
        ]
    );

    // Both spacer rows share an identity; the index keeps the later one.
    let index = GeometryIndex::build(&tree);
    assert_eq!(index.frame(column.children[1].node_id), Some(column.children[2].rect));
}

#[test]
fn anchors_resolve_to_the_tagged_regions() {
    let mut composition = Composition::new(LegendHost::new(twice_tagged_spacer));
    let tree = composition.compute_frame(Size::new(400.0, 300.0));
    let index = GeometryIndex::build(&tree);

    let content = &tree.root().children[0];
    let hstack = composition
        .root()
        .items()
        .records()
        .last()
        .map(|record| index.resolve(record.anchor()))
        .expect("HStack record");
    assert_eq!(hstack, Some(content.rect));

    let spacers: Vec<_> = composition
        .root()
        .items()
        .records()
        .iter()
        .filter(|record| record.label() == "Spacer")
        .filter_map(|record| index.resolve(record.anchor()))
        .collect();
    assert_eq!(spacers.len(), 2);
    assert!(spacers.iter().all(|rect| rect.width == 8.0));
    assert!(spacers[0].x < spacers[1].x);
}
