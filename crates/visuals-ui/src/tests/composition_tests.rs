use super::*;
use crate::legend::LegendHost;
use crate::modifier::Modifier;
use crate::widgets::{Fill, Row, RowSpec, Text};
use visuals_graphics::Color;

/// Keeps asking for another pass until it has seen `settle_after` layouts.
struct Countdown {
    layouts: usize,
    bodies: std::cell::Cell<usize>,
    settle_after: usize,
}

impl Countdown {
    fn new(settle_after: usize) -> Self {
        Self {
            layouts: 0,
            bodies: std::cell::Cell::new(0),
            settle_after,
        }
    }
}

impl RootView for Countdown {
    fn body(&self) -> Node {
        self.bodies.set(self.bodies.get() + 1);
        Text(Modifier::empty(), format!("{}", self.layouts))
    }

    fn on_layout(&mut self, _tree: &LayoutTree) -> bool {
        self.layouts += 1;
        self.layouts < self.settle_after
    }
}

#[test]
fn stops_once_the_root_is_satisfied() {
    let mut composition = Composition::new(Countdown::new(3));
    let tree = composition.compute_frame(Size::new(100.0, 40.0));
    assert_eq!(composition.root().layouts, 3);
    assert_eq!(composition.root().bodies.get(), 3);
    assert_eq!(tree.root().text(), Some("2"));
}

#[test]
fn gives_up_after_max_passes_with_a_final_layout() {
    let mut composition = Composition::new(Countdown::new(usize::MAX)).with_max_passes(2);
    let tree = composition.compute_frame(Size::new(100.0, 40.0));
    assert_eq!(composition.root().layouts, 2);
    assert_eq!(composition.root().bodies.get(), 3);
    assert_eq!(tree.root().text(), Some("2"));
}

#[test]
fn plain_closures_are_views() {
    let view = || Fill(Modifier::empty(), Color::GREEN);
    assert!(matches!(view.body().kind(), crate::node::NodeKind::Fill(_)));
}

#[test]
fn settled_frame_is_idempotent() {
    let content = || {
        Row(
            Modifier::empty().legend("HStack", 2),
            RowSpec::default(),
            vec![Fill(Modifier::empty().legend("Blue Rectangle", 0), Color::BLUE)],
        )
    };
    let mut composition = Composition::new(LegendHost::new(content));
    let first = composition.compute_frame(Size::new(200.0, 200.0));
    let items = composition.root().items().clone();

    let second = composition.compute_frame(Size::new(200.0, 200.0));
    assert_eq!(composition.root().items(), &items);
    assert_eq!(first.root().children.len(), second.root().children.len());
    let rects = |tree: &LayoutTree| -> Vec<visuals_graphics::Rect> {
        tree.root().children.iter().map(|child| child.rect).collect()
    };
    assert_eq!(rects(&first), rects(&second));
}
