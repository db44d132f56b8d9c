//! Top-level editor engine: the state the host drives and the actions it
//! gets back.
//!
//! `EditorCore` owns the current tree, the selection, and the active drag
//! gesture, and exposes every operation the frontend needs. It is browser
//! free so the whole gesture surface can be tested natively; the `studio`
//! crate maps DOM events onto these methods and re-renders when an `Action`
//! says the document or selection changed.
//!
//! All operations are synchronous total functions. Lookup misses degrade to
//! no-ops (never errors), and after every tree mutation the selection is
//! re-resolved against the new tree so a vanished node can never stay
//! selected.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::drag::{DragPayload, DragSource, DragState, Point, TargetBox};
use crate::hit::{self, DropIntent};
use crate::markup::{self, OutlineRow};
use crate::registry::ComponentKind;
use crate::render;
use crate::tree::{Node, NodeId, PropValue, Tree};

/// What an operation did, for the host to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed; no re-render needed.
    None,
    /// The tree was replaced with a new value; all views must re-derive.
    TreeReplaced,
    /// The selection changed to the carried id.
    SelectionChanged(Option<NodeId>),
}

/// Core editor state: the current document, selection, and drag gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorCore {
    /// The composed document.
    pub tree: Tree,
    /// At most one selected node id.
    pub selection: Option<NodeId>,
    /// The active drag gesture, if any.
    pub drag: DragState,
}

impl EditorCore {
    /// Empty editor: no tree, no selection, no gesture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor seeded with the fixed startup composition: a Row containing a
    /// Button and a Text block.
    #[must_use]
    pub fn with_seed() -> Self {
        let mut row = Node::new(ComponentKind::Row);
        row.children.push(Node::new(ComponentKind::Button));
        row.children.push(Node::new(ComponentKind::Text));
        Self { tree: Tree::from_roots(vec![row]), ..Self::default() }
    }

    // --- Drag gesture ---

    /// Start a gesture from a palette chip: captures a template payload with
    /// a provisional id, empty props, and no children.
    pub fn begin_palette_drag(&mut self, kind: ComponentKind) -> Action {
        self.drag = DragState::Dragging { payload: DragPayload::from_palette(kind) };
        Action::None
    }

    /// Start a gesture from an existing tree node: captures the live node
    /// (children intact) plus its current parent. Unknown ids are ignored.
    pub fn begin_node_drag(&mut self, id: NodeId) -> Action {
        let Some(node) = self.tree.find(id) else {
            return Action::None;
        };
        let node = node.clone();
        let parent = self.tree.parent_of(id).flatten();
        self.drag = DragState::Dragging { payload: DragPayload::from_node(node, parent) };
        Action::None
    }

    /// Interpret a hover over the node `target_id` while dragging.
    ///
    /// A qualifying hover (lower half of a container, guards passing; see
    /// [`hit::hover_intent`]) mutates the tree immediately: every qualifying
    /// tick fires a move, not just the terminal drop. A palette payload's
    /// first qualifying hover inserts the carried template (its provisional
    /// id becomes real) and converts the payload to a node-source payload,
    /// so the current-parent guard quiets the following ticks.
    pub fn hover(&mut self, target_id: NodeId, pointer: Point, target_box: TargetBox) -> Action {
        let Some(payload) = self.drag.payload().cloned() else {
            return Action::None;
        };
        let Some(target) = self.tree.find(target_id) else {
            return Action::None;
        };
        let intent = hit::hover_intent(pointer, target, target_box, &payload, &self.tree);
        let Some(DropIntent::Reparent { parent }) = intent else {
            return Action::None;
        };

        self.tree = match payload.source {
            DragSource::Palette => self.tree.insert_under(payload.node.clone(), Some(parent)),
            DragSource::Node { .. } => self.tree.move_node(payload.node.id, Some(parent)),
        };
        self.drag = DragState::Dragging {
            payload: DragPayload::from_node(payload.node, Some(parent)),
        };
        self.resolve_selection();
        Action::TreeReplaced
    }

    /// Drop over the canvas background: insert the payload as a new root.
    ///
    /// A palette payload gets a fresh id here (the palette chip stays
    /// reusable); a node payload keeps its id and is moved with its subtree.
    pub fn drop_on_canvas(&mut self) -> Action {
        let DragState::Dragging { payload } = std::mem::take(&mut self.drag) else {
            return Action::None;
        };
        self.tree = match payload.source {
            DragSource::Palette => {
                let node = Node { id: NodeId::new_v4(), ..payload.node };
                self.tree.insert_under(node, None)
            }
            DragSource::Node { .. } => self.tree.move_node(payload.node.id, None),
        };
        self.resolve_selection();
        Action::TreeReplaced
    }

    /// Drop over the trash target: remove the payload's node unconditionally.
    /// A palette payload's provisional id is not in the tree, so this
    /// degenerates to the documented soft no-op.
    pub fn drop_on_trash(&mut self) -> Action {
        let DragState::Dragging { payload } = std::mem::take(&mut self.drag) else {
            return Action::None;
        };
        self.tree = self.tree.remove(payload.node.id);
        self.resolve_selection();
        Action::TreeReplaced
    }

    /// Release outside any valid target: the gesture ends with no mutation.
    pub fn cancel_drag(&mut self) -> Action {
        self.drag = DragState::Idle;
        Action::None
    }

    /// Remove a node by id outside any gesture (the inspector's delete
    /// button). Missing ids are a no-op.
    pub fn delete(&mut self, id: NodeId) -> Action {
        if self.tree.find(id).is_none() {
            return Action::None;
        }
        self.tree = self.tree.remove(id);
        self.resolve_selection();
        Action::TreeReplaced
    }

    // --- Selection & property editing ---

    /// Toggle selection: selecting the selected id clears it; selecting any
    /// other id replaces it, provided the id exists in the current tree.
    pub fn select(&mut self, id: NodeId) -> Action {
        if self.selection == Some(id) {
            self.selection = None;
            return Action::SelectionChanged(None);
        }
        if self.tree.find(id).is_none() {
            return Action::None;
        }
        self.selection = Some(id);
        Action::SelectionChanged(Some(id))
    }

    /// Write one prop of the selected node. No selection means no-op; unknown
    /// keys are stored without schema enforcement.
    pub fn set_property(&mut self, key: &str, value: &str) -> Action {
        let Some(id) = self.selection else {
            return Action::None;
        };
        self.tree = self.tree.set_prop(id, key, PropValue::text(value));
        Action::TreeReplaced
    }

    // --- Queries ---

    /// The currently selected node id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    /// The currently selected node, resolved against the live tree.
    #[must_use]
    pub fn selected_node(&self) -> Option<&Node> {
        self.selection.and_then(|id| self.tree.find(id))
    }

    /// Live-preview markup for the current tree and selection.
    #[must_use]
    pub fn preview(&self) -> String {
        render::preview_html(&self.tree, self.selection)
    }

    /// The exported HTML string for the current tree.
    #[must_use]
    pub fn markup(&self) -> String {
        markup::serialize(&self.tree)
    }

    /// Outline rows for the tree view.
    #[must_use]
    pub fn outline(&self) -> Vec<OutlineRow> {
        markup::outline(&self.tree, self.selection)
    }

    fn resolve_selection(&mut self) {
        if let Some(id) = self.selection {
            if self.tree.find(id).is_none() {
                self.selection = None;
            }
        }
    }
}
