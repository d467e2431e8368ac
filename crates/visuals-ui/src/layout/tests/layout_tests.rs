use super::*;
use crate::style::ShapeStyle;
use crate::widgets::{Box, BoxSpec, Column, ColumnSpec, Fill, Row, RowSpec, Text};
use visuals_graphics::Color;
use visuals_layout::LinearArrangement;

fn tight_row() -> RowSpec {
    RowSpec::default().horizontal_arrangement(LinearArrangement::Start)
}

#[test]
fn flexible_children_share_leftover_space() {
    let root = Row(
        Modifier::empty(),
        tight_row(),
        vec![
            Fill(Modifier::empty(), Color::BLUE),
            Fill(Modifier::empty().width(8.0), ShapeStyle::Primary),
            Fill(Modifier::empty(), Color::GREEN),
        ],
    );
    let tree = LayoutEngine::new().compute_layout(&root, Size::new(108.0, 20.0));
    let widths: Vec<f32> = tree
        .root()
        .children
        .iter()
        .map(|child| child.rect.width)
        .collect();
    assert_eq!(widths, vec![50.0, 8.0, 50.0]);
    let xs: Vec<f32> = tree.root().children.iter().map(|c| c.rect.x).collect();
    assert_eq!(xs, vec![0.0, 50.0, 58.0]);
}

#[test]
fn text_keeps_its_measured_width() {
    let root = Row(
        Modifier::empty(),
        tight_row(),
        vec![
            Fill(Modifier::empty(), Color::BLUE),
            Text(Modifier::empty(), "Hello"),
        ],
    );
    let tree = LayoutEngine::new().compute_layout(&root, Size::new(100.0, 40.0));
    let text = &tree.root().children[1];
    assert_eq!(text.rect.width, 40.0);
    assert_eq!(text.rect.height, 20.0);
    // Centered on the cross axis.
    assert_eq!(text.rect.y, 10.0);
    assert_eq!(tree.root().children[0].rect.width, 60.0);
}

#[test]
fn padding_records_one_layer_per_element() {
    let root = Fill(Modifier::empty().padding(10.0), Color::BLUE);
    let tree = LayoutEngine::new().compute_layout(&root, Size::new(100.0, 50.0));
    let layout = tree.root();
    assert_eq!(layout.layers.len(), 2);
    assert_eq!(layout.layers[0], Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(layout.layers[1], Rect::new(10.0, 10.0, 80.0, 30.0));
    assert_eq!(layout.content_rect(), Rect::new(10.0, 10.0, 80.0, 30.0));
}

#[test]
fn children_are_placed_inside_parent_content() {
    let root = Column(
        Modifier::empty().padding(16.0),
        ColumnSpec::default(),
        vec![Box(
            Modifier::empty().size(Size::new(3.0, 3.0)),
            BoxSpec::default(),
            vec![],
        )],
    );
    let tree = LayoutEngine::new().compute_layout(&root, Size::new(100.0, 100.0));
    let marker = &tree.root().children[0];
    // Horizontally centered in the 68 pt wide content area.
    assert_eq!(marker.rect, Rect::new(48.5, 16.0, 3.0, 3.0));
}

#[test]
fn offset_moves_content_but_not_bounds() {
    let root = Fill(Modifier::empty().offset(5.0, -7.0), Color::BLUE);
    let tree = LayoutEngine::new().compute_layout(&root, Size::new(20.0, 20.0));
    let layout = tree.root();
    assert_eq!(layout.rect, Rect::new(0.0, 0.0, 20.0, 20.0));
    assert_eq!(layout.content_rect(), Rect::new(5.0, -7.0, 20.0, 20.0));
}

#[test]
fn keyed_nodes_are_found_by_key_and_id() {
    let root = Column(
        Modifier::empty(),
        ColumnSpec::default(),
        vec![
            Text(Modifier::empty(), "a").key("first"),
            Text(Modifier::empty(), "b").key("second"),
        ],
    );
    let tree = LayoutEngine::new().compute_layout(&root, Size::new(100.0, 100.0));
    let second = tree.find_by_key("second").expect("keyed node");
    assert_eq!(second.text(), Some("b"));
    assert_eq!(second.node_id, NodeId::root().child(Some("second"), 1));
    assert!(tree.find(second.node_id).is_some());
    assert!(tree.find_by_key("third").is_none());
}

#[test]
fn identity_is_stable_across_rebuilds() {
    let build = || {
        Row(
            Modifier::empty(),
            RowSpec::default(),
            vec![Fill(Modifier::empty(), Color::GREEN)],
        )
    };
    let engine = LayoutEngine::new();
    let first = engine.compute_layout(&build(), Size::new(50.0, 50.0));
    let second = engine.compute_layout(&build(), Size::new(80.0, 30.0));
    assert_eq!(
        first.root().children[0].node_id,
        second.root().children[0].node_id
    );
}
