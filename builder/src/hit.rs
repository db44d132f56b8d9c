#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::drag::{DragPayload, DragSource, Point, TargetBox};
use crate::tree::{Node, NodeId, Tree};

/// What a qualifying hover over a drop target means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropIntent {
    /// Move the payload to the end of this container's children.
    Reparent {
        /// The container to adopt the payload.
        parent: NodeId,
    },
}

/// Decide what hovering `target` with `payload` means, if anything.
///
/// The geometry rule: the pointer must sit in the lower half of a target
/// whose kind may contain children. Guards keep the gesture sane: hovering
/// the dragged node itself, any of its descendants, or its current parent is
/// a no-op. Malformed geometry (non-finite pointer, degenerate target box)
/// skips this hover tick without failing the gesture.
#[must_use]
pub fn hover_intent(
    pointer: Point,
    target: &Node,
    target_box: TargetBox,
    payload: &DragPayload,
    tree: &Tree,
) -> Option<DropIntent> {
    if !pointer.y.is_finite() || !target_box.top.is_finite() || !target_box.height.is_finite() {
        return None;
    }
    if target_box.height <= 0.0 {
        return None;
    }
    if pointer.y <= target_box.midpoint() {
        return None;
    }
    if !target.kind.can_have_children() {
        return None;
    }
    if target.id == payload.node.id {
        return None;
    }
    if let DragSource::Node { parent } = &payload.source {
        if *parent == Some(target.id) {
            return None;
        }
        if tree.is_descendant(payload.node.id, target.id) {
            return None;
        }
    }
    Some(DropIntent::Reparent { parent: target.id })
}
