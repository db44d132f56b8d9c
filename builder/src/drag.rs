//! Drag model: pointer geometry, drag payloads, and the gesture state machine.
//!
//! A gesture starts over a palette chip or an existing tree node, carries a
//! `DragPayload` while the pointer moves, and ends on a drop or a cancel.
//! `DragState` is the active gesture tracked between those events, holding
//! all context the engine needs to interpret hovers and the terminal drop.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::registry::ComponentKind;
use crate::tree::{Node, NodeId};

/// Pointer position in canvas-local CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal offset from the canvas left edge.
    pub x: f64,
    /// Vertical offset from the canvas top edge.
    pub y: f64,
}

impl Point {
    /// Build a point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Vertical extent of a rendered drop target, in the same space as [`Point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetBox {
    /// Top edge of the target's bounding box.
    pub top: f64,
    /// Height of the target's bounding box.
    pub height: f64,
}

impl TargetBox {
    /// Build a target box.
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Vertical midpoint; the reparent rule compares the pointer against it.
    #[must_use]
    pub fn midpoint(self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Where a drag payload came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    /// Fresh template from the palette; its node id is provisional until the
    /// payload lands in the tree.
    Palette,
    /// An existing tree node, remembered with its parent at drag start so
    /// redundant moves can be skipped.
    Node {
        /// Parent id at the time of capture; `None` for a root node.
        parent: Option<NodeId>,
    },
}

/// The node data captured at drag start and carried until drop or cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct DragPayload {
    /// The dragged node. For palette payloads this is a template (fresh id,
    /// empty props, no children); for node payloads a clone of the live node.
    pub node: Node,
    /// Origin of the payload.
    pub source: DragSource,
}

impl DragPayload {
    /// Template payload for a palette chip of the given kind.
    #[must_use]
    pub fn from_palette(kind: ComponentKind) -> Self {
        Self { node: Node::new(kind), source: DragSource::Palette }
    }

    /// Payload for an existing tree node and its current parent.
    #[must_use]
    pub fn from_node(node: Node, parent: Option<NodeId>) -> Self {
        Self { node, source: DragSource::Node { parent } }
    }

    /// Whether the payload is still a palette template (not yet in the tree).
    #[must_use]
    pub fn is_from_palette(&self) -> bool {
        self.source == DragSource::Palette
    }
}

/// Internal state of the drag gesture state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress; waiting for the next drag start.
    #[default]
    Idle,
    /// A payload is in flight between drag start and drop/cancel.
    Dragging {
        /// The captured payload.
        payload: DragPayload,
    },
}

impl DragState {
    /// The in-flight payload, if a gesture is active.
    #[must_use]
    pub fn payload(&self) -> Option<&DragPayload> {
        match self {
            Self::Idle => None,
            Self::Dragging { payload } => Some(payload),
        }
    }

    /// Whether a gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
