use smallvec::{smallvec, SmallVec};
use visuals_graphics::{Point, Rect, Size};
use visuals_layout::{
    Alignment, Axis, Constraints, HorizontalAlignment, LinearArrangement, VerticalAlignment,
};

use super::LayoutBox;
use crate::modifier::ModifierElement;
use crate::node::{Node, NodeId, NodeKind};
use crate::text::measure_text;

pub(crate) struct Measured<'n> {
    node: &'n Node,
    id: NodeId,
    size: Size,
    layers: SmallVec<[Rect; 4]>,
    /// Offsets are relative to the content layer's origin.
    children: Vec<(Point, Measured<'n>)>,
}

impl<'n> Measured<'n> {
    fn wrap(mut self, size: Size, offset: Point) -> Self {
        for layer in self.layers.iter_mut() {
            *layer = layer.offset_by(offset);
        }
        self.layers.insert(0, Rect::from_size(size));
        self.size = size;
        self
    }

    pub(crate) fn place(self, origin: Point) -> LayoutBox {
        let content_origin = origin
            + self
                .layers
                .last()
                .map(|layer| layer.origin())
                .unwrap_or(Point::ZERO);
        let children = self
            .children
            .into_iter()
            .map(|(offset, child)| child.place(content_origin + offset))
            .collect();
        LayoutBox {
            node_id: self.id,
            key: self.node.key.clone(),
            rect: Rect::from_origin_size(origin, self.size),
            layers: self.layers,
            kind: self.node.kind.clone(),
            modifier: self.node.modifier.clone(),
            children,
        }
    }
}

pub(crate) fn measure_node(node: &Node, id: NodeId, constraints: Constraints) -> Measured<'_> {
    measure_chain(node, id, 0, constraints)
}

fn measure_chain(node: &Node, id: NodeId, depth: usize, constraints: Constraints) -> Measured<'_> {
    let Some(element) = node.modifier.elements().get(depth) else {
        let (size, children) = measure_content(node, id, constraints);
        return Measured {
            node,
            id,
            size,
            layers: smallvec![Rect::from_size(size)],
            children,
        };
    };

    match element {
        ModifierElement::Padding(insets) => {
            let horizontal = insets.horizontal_sum();
            let vertical = insets.vertical_sum();
            let inner = measure_chain(
                node,
                id,
                depth + 1,
                constraints.deflate(horizontal, vertical),
            );
            let size = constraints.constrain(Size::new(
                inner.size.width + horizontal,
                inner.size.height + vertical,
            ));
            inner.wrap(size, Point::new(insets.left, insets.top))
        }
        ModifierElement::Size { width, height } => {
            let mut framed = constraints;
            if let Some(width) = width {
                framed = framed.tighten_along(Axis::Horizontal, *width);
            }
            if let Some(height) = height {
                framed = framed.tighten_along(Axis::Vertical, *height);
            }
            let inner = measure_chain(node, id, depth + 1, framed);
            let size = framed.constrain(inner.size);
            let offset = Point::new(
                HorizontalAlignment::CenterHorizontally.align(size.width, inner.size.width),
                VerticalAlignment::CenterVertically.align(size.height, inner.size.height),
            );
            inner.wrap(size, offset)
        }
        ModifierElement::Offset(offset) => {
            let inner = measure_chain(node, id, depth + 1, constraints);
            let size = inner.size;
            inner.wrap(size, *offset)
        }
        other => {
            debug_assert!(!other.affects_layout());
            let inner = measure_chain(node, id, depth + 1, constraints);
            let size = inner.size;
            inner.wrap(size, Point::ZERO)
        }
    }
}

type Placed<'n> = (Size, Vec<(Point, Measured<'n>)>);

fn measure_content(node: &Node, id: NodeId, constraints: Constraints) -> Placed<'_> {
    match &node.kind {
        NodeKind::Text(text) => {
            let metrics = measure_text(text);
            (
                constraints.constrain(Size::new(metrics.width, metrics.height)),
                Vec::new(),
            )
        }
        NodeKind::Fill(_) | NodeKind::Circle(_) | NodeKind::Canvas(_) => {
            (constraints.largest(), Vec::new())
        }
        NodeKind::Box(spec) => measure_box(node, id, spec.alignment, constraints),
        NodeKind::Row(spec) => measure_linear(
            node,
            id,
            Axis::Horizontal,
            spec.horizontal_arrangement,
            |available, child| spec.vertical_alignment.align(available, child),
            constraints,
        ),
        NodeKind::Column(spec) => measure_linear(
            node,
            id,
            Axis::Vertical,
            spec.vertical_arrangement,
            |available, child| spec.horizontal_alignment.align(available, child),
            constraints,
        ),
    }
}

fn child_ids(node: &Node, id: NodeId) -> Vec<NodeId> {
    node.children
        .iter()
        .enumerate()
        .map(|(index, child)| id.child(child.key.as_deref(), index))
        .collect()
}

fn measure_box(
    node: &Node,
    id: NodeId,
    alignment: Alignment,
    constraints: Constraints,
) -> Placed<'_> {
    let loose = constraints.loosen();
    let measured: Vec<Measured<'_>> = node
        .children
        .iter()
        .zip(child_ids(node, id))
        .map(|(child, child_id)| measure_node(child, child_id, loose))
        .collect();

    let content = measured.iter().fold(Size::ZERO, |acc, child| {
        Size::new(acc.width.max(child.size.width), acc.height.max(child.size.height))
    });
    let size = constraints.constrain(content);
    let placed = measured
        .into_iter()
        .map(|child| {
            let offset = Point::new(
                alignment.horizontal.align(size.width, child.size.width),
                alignment.vertical.align(size.height, child.size.height),
            );
            (offset, child)
        })
        .collect();
    (size, placed)
}

/// Inflexible children are measured first, in order, each offered what
/// is left on the main axis; flexible ones then split the remainder evenly.
fn measure_linear(
    node: &Node,
    id: NodeId,
    axis: Axis,
    arrangement: LinearArrangement,
    cross_align: impl Fn(f32, f32) -> f32,
    constraints: Constraints,
) -> Placed<'_> {
    let ids = child_ids(node, id);
    let loose = constraints.loosen();
    let max_main = constraints.max_along(axis);
    let mut used = arrangement.spacing() * node.children.len().saturating_sub(1) as f32;

    let mut slots: Vec<Option<Measured<'_>>> = node.children.iter().map(|_| None).collect();
    for (index, child) in node.children.iter().enumerate() {
        if child.is_flexible(axis) {
            continue;
        }
        let available = (max_main - used).max(0.0);
        let measured = measure_node(child, ids[index], loose.loosen_along(axis, available));
        used += axis.main(measured.size);
        slots[index] = Some(measured);
    }

    let flexible = slots.iter().filter(|slot| slot.is_none()).count();
    if flexible > 0 {
        let share = if max_main.is_finite() {
            (max_main - used).max(0.0) / flexible as f32
        } else {
            0.0
        };
        for (index, child) in node.children.iter().enumerate() {
            if slots[index].is_none() {
                slots[index] = Some(measure_node(
                    child,
                    ids[index],
                    loose.tighten_along(axis, share),
                ));
            }
        }
    }

    let measured: Vec<Measured<'_>> = slots.into_iter().flatten().collect();
    let mains: Vec<f32> = measured.iter().map(|child| axis.main(child.size)).collect();
    let cross = measured
        .iter()
        .map(|child| axis.cross(child.size))
        .fold(0.0_f32, f32::max);
    let size = constraints.constrain(axis.size(arrangement.occupied(&mains), cross));

    let mut positions = vec![0.0; mains.len()];
    arrangement.arrange(axis.main(size), &mains, &mut positions);
    let placed = measured
        .into_iter()
        .zip(positions)
        .map(|(child, main)| {
            let cross_offset = cross_align(axis.cross(size), axis.cross(child.size));
            (axis.point(main, cross_offset), child)
        })
        .collect();
    (size, placed)
}
