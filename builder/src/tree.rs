//! Document model: composed nodes, their prop bags, and the tree they form.
//!
//! This module defines the data types that describe what is on the canvas
//! (`Node`, `PropValue`, `PropBag`), a typed accessor with display defaults
//! for the open-ended prop bag (`Props`), and the ordered rooted tree that
//! owns the whole composition (`Tree`).
//!
//! Every mutation is a pure full rewrite: the operation walks the tree and
//! returns a fresh `Tree` value, leaving the input untouched. That keeps
//! gesture handlers total and lets the host swap the whole document in one
//! assignment. Costs are O(total nodes) per call, which is fine at UI scale.
//!
//! Lookup misses are soft no-ops throughout: removing an absent id, inserting
//! under a missing or leaf parent, or writing a prop on a vanished node all
//! return a tree structurally equal to the input, never an error.

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::registry::ComponentKind;

/// Unique identifier for a composed node.
pub type NodeId = Uuid;

/// Value of one prop. A closed variant set; only strings exist today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Free-form string value.
    Text(String),
}

impl PropValue {
    /// Build a string prop value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(value) => value,
        }
    }
}

/// Ordered prop key/value mapping attached to a node.
pub type PropBag = BTreeMap<String, PropValue>;

/// Typed access to common props with the renderer's display defaults.
pub struct Props<'a> {
    bag: &'a PropBag,
}

impl<'a> Props<'a> {
    /// Wrap a reference to a node's prop bag.
    #[must_use]
    pub fn new(bag: &'a PropBag) -> Self {
        Self { bag }
    }

    /// Raw lookup without defaults.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.bag.get(key).map(PropValue::as_str)
    }

    /// Button label. Defaults to `"Button"` when absent.
    #[must_use]
    pub fn label(&self) -> &'a str {
        self.get("label").unwrap_or("Button")
    }

    /// Input placeholder. Defaults to `"Type here…"` when absent.
    #[must_use]
    pub fn placeholder(&self) -> &'a str {
        self.get("placeholder").unwrap_or("Type here…")
    }

    /// Input value. Empty string when absent.
    #[must_use]
    pub fn value(&self) -> &'a str {
        self.get("value").unwrap_or("")
    }

    /// Text-block content. Defaults to `"Text block"` when absent.
    #[must_use]
    pub fn content(&self) -> &'a str {
        self.get("content").unwrap_or("Text block")
    }
}

/// One component instance in the composed tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier, stable for the node's whole lifetime.
    pub id: NodeId,
    /// Component kind; must be a registry entry.
    pub kind: ComponentKind,
    /// Prop key/value bag. Only schema keys are meaningful, but unknown keys
    /// are stored without complaint.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: PropBag,
    /// Ordered children. Always empty for leaf kinds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Fresh node of the given kind: new v4 id, empty props, no children.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self { id: Uuid::new_v4(), kind, props: PropBag::new(), children: Vec::new() }
    }

    /// One prop as a string, if present.
    #[must_use]
    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(PropValue::as_str)
    }

    fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

/// The composed document: an ordered sequence of root nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    roots: Vec<Node>,
}

impl Tree {
    /// Empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tree with the given root sequence.
    #[must_use]
    pub fn from_roots(roots: Vec<Node>) -> Self {
        Self { roots }
    }

    /// The root nodes in visual order.
    #[must_use]
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Total node count across all roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.iter().map(Node::count).sum()
    }

    /// Returns `true` if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Depth-first search for a node by id; first match wins.
    #[must_use]
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    /// The parent id of `id`: `Some(None)` for a root, `Some(Some(p))` for a
    /// nested node, `None` when `id` is not in the tree.
    #[must_use]
    pub fn parent_of(&self, id: NodeId) -> Option<Option<NodeId>> {
        fn search(nodes: &[Node], id: NodeId, parent: Option<NodeId>) -> Option<Option<NodeId>> {
            for node in nodes {
                if node.id == id {
                    return Some(parent);
                }
                if let Some(found) = search(&node.children, id, Some(node.id)) {
                    return Some(found);
                }
            }
            None
        }
        search(&self.roots, id, None)
    }

    /// Whether `id` lies inside the subtree rooted at `ancestor` (a node
    /// counts as its own descendant). False when `ancestor` is absent.
    #[must_use]
    pub fn is_descendant(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.find(ancestor).is_some_and(|node| node.find(id).is_some())
    }

    /// New tree with the node matching `id` removed from wherever it occurs.
    /// The removed node's subtree goes with it; an absent id is a no-op.
    #[must_use]
    pub fn remove(&self, id: NodeId) -> Tree {
        fn rebuild(nodes: &[Node], id: NodeId) -> Vec<Node> {
            nodes
                .iter()
                .filter(|node| node.id != id)
                .map(|node| Node { children: rebuild(&node.children, id), ..node.clone() })
                .collect()
        }
        Tree { roots: rebuild(&self.roots, id) }
    }

    /// New tree with `node` appended: to the root sequence when `parent` is
    /// `None`, otherwise to the children of the matching parent at any depth.
    /// A missing parent, or a leaf-kind parent, returns the tree unchanged.
    #[must_use]
    pub fn insert_under(&self, node: Node, parent: Option<NodeId>) -> Tree {
        let Some(parent_id) = parent else {
            let mut roots = self.roots.clone();
            roots.push(node);
            return Tree { roots };
        };

        fn rebuild(nodes: &[Node], node: &Node, parent_id: NodeId) -> Vec<Node> {
            nodes
                .iter()
                .map(|candidate| {
                    if candidate.id == parent_id && candidate.kind.can_have_children() {
                        let mut children = candidate.children.clone();
                        children.push(node.clone());
                        Node { children, ..candidate.clone() }
                    } else {
                        Node {
                            children: rebuild(&candidate.children, node, parent_id),
                            ..candidate.clone()
                        }
                    }
                })
                .collect()
        }
        Tree { roots: rebuild(&self.roots, &node, parent_id) }
    }

    /// New tree with the node matching `id` moved (subtree intact) to the end
    /// of `new_parent`'s children, or of the root sequence for `None`.
    ///
    /// The destination is validated before the node is detached: a missing or
    /// leaf-kind parent, or a parent inside the moved node's own subtree,
    /// leaves the tree unchanged. Composing remove-then-insert without that
    /// check would drop the subtree on a failed insert.
    #[must_use]
    pub fn move_node(&self, id: NodeId, new_parent: Option<NodeId>) -> Tree {
        let Some(node) = self.find(id) else {
            return self.clone();
        };
        if let Some(parent_id) = new_parent {
            if node.find(parent_id).is_some() {
                return self.clone();
            }
            let Some(parent) = self.find(parent_id) else {
                return self.clone();
            };
            if !parent.kind.can_have_children() {
                return self.clone();
            }
        }
        let node = node.clone();
        self.remove(id).insert_under(node, new_parent)
    }

    /// New tree with `props[key]` of the node matching `id` set to `value`.
    /// Unknown keys are stored as-is; an absent id is a no-op.
    #[must_use]
    pub fn set_prop(&self, id: NodeId, key: &str, value: PropValue) -> Tree {
        fn rebuild(nodes: &[Node], id: NodeId, key: &str, value: &PropValue) -> Vec<Node> {
            nodes
                .iter()
                .map(|node| {
                    if node.id == id {
                        let mut props = node.props.clone();
                        props.insert(key.to_owned(), value.clone());
                        Node { props, ..node.clone() }
                    } else {
                        Node { children: rebuild(&node.children, id, key, value), ..node.clone() }
                    }
                })
                .collect()
        }
        Tree { roots: rebuild(&self.roots, id, key, &value) }
    }
}
