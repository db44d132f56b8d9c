//! Component registry: the fixed catalog of component types.
//!
//! `ComponentKind` is the closed set of component types the palette offers.
//! All per-type metadata (containment, the editable-prop schema, the
//! serialized tag, the preview CSS class) hangs off this enum, so adding a
//! component type means adding one variant and extending the match arms
//! here, never subclassing anything.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use serde::{Deserialize, Serialize};

/// The kind of a composed component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Clickable button with an editable label.
    Button,
    /// Single-line text input with editable placeholder and value.
    Input,
    /// Static text block with editable content.
    Text,
    /// Generic block container.
    Div,
    /// Horizontal layout container.
    Row,
    /// Vertical layout container.
    Column,
}

/// Value kind of an editable prop. Only strings exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    /// Free-form string edited through a text input.
    Text,
}

/// Schema entry for one editable prop of a component kind.
#[derive(Debug, Clone, Copy)]
pub struct PropSpec {
    /// Prop key as stored in the node's prop bag.
    pub name: &'static str,
    /// Value kind the editor should offer.
    pub kind: PropKind,
}

const BUTTON_PROPS: [PropSpec; 1] = [PropSpec { name: "label", kind: PropKind::Text }];
const INPUT_PROPS: [PropSpec; 2] = [
    PropSpec { name: "placeholder", kind: PropKind::Text },
    PropSpec { name: "value", kind: PropKind::Text },
];
const TEXT_PROPS: [PropSpec; 1] = [PropSpec { name: "content", kind: PropKind::Text }];

impl ComponentKind {
    /// All component kinds in palette order.
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::Button,
        ComponentKind::Input,
        ComponentKind::Text,
        ComponentKind::Div,
        ComponentKind::Row,
        ComponentKind::Column,
    ];

    /// Whether instances of this kind may contain children.
    #[must_use]
    pub fn can_have_children(self) -> bool {
        matches!(self, Self::Div | Self::Row | Self::Column)
    }

    /// Tag emitted by the HTML serializer and shown in the outline.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Input => "Input",
            Self::Text => "Text",
            Self::Div => "Div",
            Self::Row => "Row",
            Self::Column => "Column",
        }
    }

    /// CSS class the preview renderer puts on instances of this kind.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Button => "pf-button",
            Self::Input => "pf-input",
            Self::Text => "pf-text",
            Self::Div => "pf-div",
            Self::Row => "pf-row",
            Self::Column => "pf-column",
        }
    }

    /// Editable-prop schema for this kind. Layout containers expose none.
    #[must_use]
    pub fn editable_props(self) -> &'static [PropSpec] {
        match self {
            Self::Button => &BUTTON_PROPS,
            Self::Input => &INPUT_PROPS,
            Self::Text => &TEXT_PROPS,
            Self::Div | Self::Row | Self::Column => &[],
        }
    }
}
