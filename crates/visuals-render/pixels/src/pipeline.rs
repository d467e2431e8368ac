//! Layout tree to scene conversion.

use visuals_graphics::{DrawScope, DrawScopeDefault, Rect};
use visuals_ui::{
    Environment, GeometryIndex, LayoutBox, LayoutTree, ModifierElement, NodeKind, ShapeStyle,
    TextureSource,
};

use crate::scene::{Scene, ShapeKind};

struct Painter<'a> {
    environment: &'a Environment,
    textures: &'a mut dyn TextureSource,
    index: &'a GeometryIndex,
    scene: &'a mut Scene,
}

impl Painter<'_> {
    fn scale(&self) -> f32 {
        self.environment.display_scale
    }

    fn fill(&mut self, rect: Rect, style: &ShapeStyle) {
        let brush = style.resolve(self.environment, self.textures);
        let rect = rect.scale(self.scale());
        self.scene.push_shape(ShapeKind::Rect(rect), brush);
    }

    /// Four edges inset into `rect`.
    fn stroke(&mut self, rect: Rect, style: &ShapeStyle, width: f32) {
        let rect = rect.normalized();
        let width = width.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        if width == 0.0 {
            return;
        }
        let inner_height = rect.height - 2.0 * width;
        let edges = [
            Rect::new(rect.x, rect.y, rect.width, width),
            Rect::new(rect.x, rect.max_y() - width, rect.width, width),
            Rect::new(rect.x, rect.y + width, width, inner_height),
            Rect::new(rect.max_x() - width, rect.y + width, width, inner_height),
        ];
        for edge in edges {
            self.fill(edge, style);
        }
    }

    fn paint(&mut self, layout: &LayoutBox) {
        let elements = layout.modifier.elements();
        for (depth, element) in elements.iter().enumerate() {
            if let ModifierElement::Background(style) = element {
                self.fill(layout.layer_rect(depth), style);
            }
        }

        let content = layout.content_rect();
        match &layout.kind {
            NodeKind::Fill(style) => self.fill(content, style),
            NodeKind::Circle(style) => {
                let brush = style.resolve(self.environment, self.textures);
                let rect = content.scale(self.scale());
                self.scene.push_shape(ShapeKind::Ellipse(rect), brush);
            }
            NodeKind::Text(text) => {
                let rect = content.scale(self.scale());
                let color = self.environment.primary();
                self.scene
                    .push_text(rect, text.clone(), color, self.scale());
            }
            NodeKind::Canvas(draw) => {
                let proxy = self.index.proxy(content);
                let mut scope = DrawScopeDefault::new(content.size());
                draw(&proxy, self.environment, &mut scope);
                for primitive in scope.into_primitives() {
                    let primitive = primitive
                        .translate(content.x, content.y)
                        .scale(self.scale());
                    self.scene.push_primitive(primitive);
                }
            }
            NodeKind::Row(_) | NodeKind::Column(_) | NodeKind::Box(_) => {}
        }

        for child in &layout.children {
            self.paint(child);
        }

        for (depth, element) in elements.iter().enumerate().rev() {
            if let ModifierElement::Border { style, width } = element {
                self.stroke(layout.layer_rect(depth), style, *width);
            }
        }
    }
}

/// Appends everything in `tree` to `scene`, in device pixels.
pub(crate) fn render_layout_tree(
    tree: &LayoutTree,
    environment: &Environment,
    textures: &mut dyn TextureSource,
    scene: &mut Scene,
) {
    let index = GeometryIndex::build(tree);
    scene.background = environment.background();
    let mut painter = Painter {
        environment,
        textures,
        index: &index,
        scene,
    };
    painter.paint(tree.root());
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
