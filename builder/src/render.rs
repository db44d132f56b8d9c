//! Live-preview renderer: derives the canvas markup from the current tree.
//!
//! This is the registry-driven renderer: each node dispatches on its
//! `ComponentKind` to a per-kind fragment builder, and container kinds splice
//! their recursively rendered children. The output feeds real DOM (the host
//! mounts it into the canvas panel), so text content and attribute values are
//! escaped here, unlike the export serializer in [`crate::markup`], whose
//! structure-only contract is deliberate.
//!
//! Every element carries `data-node-id` and `draggable` so the host can map
//! DOM events back onto engine operations, plus a kind CSS class and a
//! selected-state class the stylesheet picks up.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::registry::ComponentKind;
use crate::tree::{Node, NodeId, Props, Tree};

/// Render the whole tree to preview markup, root results concatenated.
#[must_use]
pub fn preview_html(tree: &Tree, selection: Option<NodeId>) -> String {
    tree.roots().iter().map(|root| render_node(root, selection)).collect()
}

fn render_node(node: &Node, selection: Option<NodeId>) -> String {
    let props = Props::new(&node.props);
    match node.kind {
        ComponentKind::Button => {
            format!("<button {}>{}</button>", attrs(node, selection), escape(props.label()))
        }
        ComponentKind::Input => format!(
            "<input {} placeholder=\"{}\" value=\"{}\">",
            attrs(node, selection),
            escape(props.placeholder()),
            escape(props.value()),
        ),
        ComponentKind::Text => {
            format!("<span {}>{}</span>", attrs(node, selection), escape(props.content()))
        }
        ComponentKind::Div | ComponentKind::Row | ComponentKind::Column => {
            let children: String =
                node.children.iter().map(|child| render_node(child, selection)).collect();
            format!("<div {}>{children}</div>", attrs(node, selection))
        }
    }
}

fn attrs(node: &Node, selection: Option<NodeId>) -> String {
    let selected = if selection == Some(node.id) { " pf-node--selected" } else { "" };
    format!(
        "class=\"pf-node {}{selected}\" data-node-id=\"{}\" draggable=\"true\"",
        node.kind.css_class(),
        node.id,
    )
}

/// Minimal HTML escaping for text content and double-quoted attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
