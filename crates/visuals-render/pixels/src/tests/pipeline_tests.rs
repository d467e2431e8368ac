use super::*;
use crate::texture::TextureCache;
use visuals_graphics::{Brush, Color, Size};
use visuals_ui::prelude::*;

fn scene_for(root: Node, environment: &Environment, viewport: Size) -> (Scene, LayoutTree) {
    let tree = visuals_ui::LayoutEngine::new().compute_layout(&root, viewport);
    let mut scene = Scene::new();
    let mut textures = TextureCache::default();
    render_layout_tree(&tree, environment, &mut textures, &mut scene);
    (scene, tree)
}

#[test]
fn background_paints_behind_content_and_border_on_top() {
    let root = Fill(
        Modifier::empty()
            .background(Color::GREEN)
            .padding(2.0)
            .border(ShapeStyle::Primary, 1.0),
        Color::BLUE,
    );
    let (scene, _) = scene_for(root, &Environment::default(), Size::new(20.0, 10.0));
    let kinds: Vec<&ShapeKind> = scene.shapes.iter().map(|shape| &shape.kind).collect();
    assert_eq!(kinds.len(), 6);
    assert_eq!(kinds[0], &ShapeKind::Rect(Rect::new(0.0, 0.0, 20.0, 10.0)));
    assert_eq!(kinds[1], &ShapeKind::Rect(Rect::new(2.0, 2.0, 16.0, 6.0)));
    assert_eq!(kinds[2], &ShapeKind::Rect(Rect::new(2.0, 2.0, 16.0, 1.0)));
    assert_eq!(scene.shapes[2].brush, Brush::Solid(Color::BLACK));
}

#[test]
fn geometry_is_scaled_to_device_pixels() {
    let environment = Environment::default().with_display_scale(2.0);
    let root = Fill(Modifier::empty().padding(5.0), Color::BLUE);
    let (scene, _) = scene_for(root, &environment, Size::new(40.0, 20.0));
    assert_eq!(
        scene.shapes[0].kind,
        ShapeKind::Rect(Rect::new(10.0, 10.0, 60.0, 20.0))
    );
}

#[test]
fn stripes_resolve_to_a_pattern_tile() {
    let root = Fill(Modifier::empty(), DiagonalStripes::default());
    let environment = Environment::default().with_display_scale(2.0);
    let (scene, _) = scene_for(root, &environment, Size::new(8.0, 30.0));
    match &scene.shapes[0].brush {
        Brush::Pattern { tile } => assert_eq!(tile.width(), 32),
        other => panic!("expected a pattern, got {other:?}"),
    }
}

#[test]
fn text_uses_the_foreground_of_the_scheme() {
    let environment = Environment::default().with_color_scheme(ColorScheme::Dark);
    let root = Text(Modifier::empty(), "Spacer");
    let (scene, _) = scene_for(root, &environment, Size::new(100.0, 20.0));
    assert_eq!(scene.texts.len(), 1);
    assert_eq!(scene.texts[0].color, Color::WHITE);
    assert_eq!(scene.background, Color::BLACK);
}

#[test]
fn canvas_draws_in_its_own_space() {
    let root = Column(
        Modifier::empty(),
        ColumnSpec::default(),
        vec![
            Fill(Modifier::empty().height(10.0), Color::BLUE),
            Canvas(
                Modifier::empty().size(Size::new(4.0, 4.0)),
                |proxy, environment, scope| {
                    let frame = proxy.frame_in_local();
                    scope.draw_line(
                        frame.origin(),
                        visuals_ui::Point::new(frame.max_x(), frame.max_y()),
                        1.0,
                        Brush::solid(environment.primary()),
                    );
                },
            ),
        ],
    );
    let (scene, tree) = scene_for(root, &Environment::default(), Size::new(20.0, 40.0));
    let canvas = tree.root().children[1].rect;
    let lines: Vec<_> = scene.lines().collect();
    assert_eq!(lines.len(), 1);
    let (start, end, _) = lines[0];
    assert_eq!(start, canvas.origin());
    assert_eq!(end.x, canvas.max_x());
    assert_eq!(end.y, canvas.max_y());
}

#[test]
fn legend_connector_reaches_the_tagged_region() {
    let content = || {
        Fill(
            Modifier::empty().height(40.0).legend("Blue Rectangle", 0),
            Color::BLUE,
        )
        .key("blue")
    };
    let environment = Environment::default().with_display_scale(2.0);
    let mut composition = Composition::new(LegendHost::new(content));
    let tree = composition.compute_frame(Size::new(200.0, 120.0));

    let mut scene = Scene::new();
    render_layout_tree(&tree, &environment, &mut TextureCache::default(), &mut scene);

    let blue = tree.find_by_key("blue").expect("tagged fill").rect;
    let lines: Vec<_> = scene.lines().collect();
    assert_eq!(lines.len(), 1);
    let (start, end, width) = lines[0];
    assert_eq!(width, 2.0);
    assert_eq!(start.x, end.x);
    assert!((end.y - blue.max_y() * 2.0).abs() < 1e-3);
    assert!(start.y > end.y);
}
