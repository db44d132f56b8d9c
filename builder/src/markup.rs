//! Export serializer and outline view, both pure functions of the tree.
//!
//! `serialize` is the user-facing "Generate HTML" output: nested
//! `<Kind>…</Kind>` tags for every node, root results concatenated. It emits
//! structure only: no props, no escaping. That is the serializer's contract,
//! not an oversight; the preview renderer in [`crate::render`] is the one
//! that feeds real DOM and escapes accordingly.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use crate::registry::ComponentKind;
use crate::tree::{Node, NodeId, Tree};

/// Serialize the tree to its exported HTML string.
#[must_use]
pub fn serialize(tree: &Tree) -> String {
    tree.roots().iter().map(serialize_node).collect()
}

fn serialize_node(node: &Node) -> String {
    let children: String = node.children.iter().map(serialize_node).collect();
    let tag = node.kind.tag();
    format!("<{tag}>{children}</{tag}>")
}

/// One row of the tree view, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineRow {
    /// The node this row represents.
    pub id: NodeId,
    /// Kind shown as the row label.
    pub kind: ComponentKind,
    /// Nesting depth; roots are at 0.
    pub depth: usize,
    /// Whether this node is the current selection.
    pub selected: bool,
}

/// Flatten the tree into outline rows preserving nesting depth.
#[must_use]
pub fn outline(tree: &Tree, selection: Option<NodeId>) -> Vec<OutlineRow> {
    fn walk(node: &Node, depth: usize, selection: Option<NodeId>, rows: &mut Vec<OutlineRow>) {
        rows.push(OutlineRow {
            id: node.id,
            kind: node.kind,
            depth,
            selected: selection == Some(node.id),
        });
        for child in &node.children {
            walk(child, depth + 1, selection, rows);
        }
    }
    let mut rows = Vec::with_capacity(tree.len());
    for root in tree.roots() {
        walk(root, 0, selection, &mut rows);
    }
    rows
}

/// Plain-text outline: one tag per line, two spaces of indent per level.
#[must_use]
pub fn outline_text(tree: &Tree) -> String {
    let mut out = String::new();
    for row in outline(tree, None) {
        for _ in 0..row.depth {
            out.push_str("  ");
        }
        out.push_str(row.kind.tag());
        out.push('\n');
    }
    out
}
