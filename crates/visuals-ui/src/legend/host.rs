use log::warn;
use visuals_graphics::{Brush, Point, Rect, Size};
use visuals_layout::HorizontalAlignment;

use super::collector::{AnnotationCollector, AnnotationRecord};
use super::state::{LegendItems, LegendState};
use super::{CONNECTOR_WIDTH, LEGEND_INDENT, MARKER_SIZE};
use crate::composition::{RootView, View};
use crate::layout::LayoutTree;
use crate::modifier::Modifier;
use crate::node::Node;
use crate::style::ShapeStyle;
use crate::widgets::{Box, BoxSpec, Canvas, Circle, Column, ColumnSpec, Row, RowSpec, Text};

/// Key of the box wrapping the content inside the host's column. The
/// content keeps its own key.
pub const CONTENT_KEY: &str = "legend-content";
/// Key of the label column below the content.
pub const LABELS_KEY: &str = "legend-labels";

/// Signed distance from the middle of `row` up to the bottom of `anchor`.
///
/// Negative when the anchored region lies below the row.
pub fn connector_height(row: Rect, anchor: Rect) -> f32 {
    row.mid_y() - anchor.max_y()
}

/// Vertical segment from a row marker to the region it labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    pub origin: Point,
    pub height: f32,
}

impl Connector {
    /// `frame` and `anchor` must share a coordinate space. A missing
    /// anchor yields a zero-length connector.
    pub fn between(frame: Rect, anchor: Option<Rect>) -> Self {
        Self {
            origin: Point::new(frame.mid_x(), frame.mid_y()),
            height: anchor.map_or(0.0, |anchor| connector_height(frame, anchor)),
        }
    }

    pub fn end(&self) -> Point {
        Point::new(self.origin.x, self.origin.y - self.height)
    }
}

/// Shows `content` above a list of every legend tag found inside it.
pub struct LegendHost<V> {
    content: V,
    state: LegendState,
    modifier: Modifier,
}

impl<V: View> LegendHost<V> {
    pub fn new(content: V) -> Self {
        Self {
            content,
            state: LegendState::default(),
            modifier: Modifier::empty(),
        }
    }

    /// Modifier applied around both the content and the labels.
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn content(&self) -> &V {
        &self.content
    }

    pub fn items(&self) -> &LegendItems {
        self.state.items()
    }
}

impl<V: View> RootView for LegendHost<V> {
    fn body(&self) -> Node {
        Column(
            self.modifier.clone(),
            ColumnSpec::default(),
            vec![
                Box(Modifier::empty(), BoxSpec::default(), vec![self.content.body()])
                    .key(CONTENT_KEY),
                legend_labels(self.state.items()).key(LABELS_KEY),
            ],
        )
    }

    fn on_layout(&mut self, tree: &LayoutTree) -> bool {
        let content = tree
            .root()
            .children
            .iter()
            .find(|child| child.key.as_deref() == Some(CONTENT_KEY));
        let records = match content {
            Some(content) => AnnotationCollector::collect(content),
            None => {
                warn!("legend host laid out without its content node");
                Vec::new()
            }
        };
        self.state.replace(records)
    }
}

fn legend_labels(items: &LegendItems) -> Node {
    Column(
        Modifier::empty(),
        ColumnSpec::default().horizontal_alignment(HorizontalAlignment::Start),
        items.display_rows().map(legend_row).collect(),
    )
}

fn legend_row(record: &AnnotationRecord) -> Node {
    let indent = record.stack_index() as f32 * LEGEND_INDENT;
    let anchor = *record.anchor();
    let marker = Box(
        Modifier::empty().size(Size::new(MARKER_SIZE, MARKER_SIZE)),
        BoxSpec::default(),
        vec![
            Circle(Modifier::empty(), ShapeStyle::Primary),
            Canvas(
                Modifier::empty().size(Size::new(1.0, 1.0)),
                move |proxy, environment, scope| {
                    let connector =
                        Connector::between(proxy.frame_in_local(), proxy.resolve(&anchor));
                    if connector.height != 0.0 {
                        scope.draw_line(
                            connector.origin,
                            connector.end(),
                            CONNECTOR_WIDTH,
                            Brush::solid(environment.primary()),
                        );
                    }
                },
            ),
        ],
    );
    Row(
        Modifier::empty().padding_each(indent, 0.0, 0.0, 0.0),
        RowSpec::default(),
        vec![marker, Text(Modifier::empty(), record.label())],
    )
    .key(format!("legend-row-{}", record.stack_index()))
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
