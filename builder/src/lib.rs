//! Core engine for the PageForge visual page builder.
//!
//! This crate owns everything about the composed page except the browser:
//! the catalog of component types, the document tree the user assembles by
//! dragging components around, the gesture state machine that turns hover
//! and drop events into tree mutations, and the renderers that derive the
//! live preview, the exported HTML string, and the outline view from the
//! current tree. The host frontend (the `studio` crate) is responsible only
//! for wiring DOM events into [`engine::EditorCore`] and mounting the
//! rendered preview.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::EditorCore`] and host [`engine::Action`]s |
//! | [`registry`] | The fixed catalog of component kinds and their metadata |
//! | [`tree`] | The document tree: nodes, prop bags, and pure mutations |
//! | [`drag`] | Drag payloads and the gesture state machine |
//! | [`hit`] | Hover geometry: deciding reparent intent over a drop target |
//! | [`render`] | Live-preview markup derived from the tree |
//! | [`markup`] | HTML-string serializer and the outline (tree view) |

pub mod drag;
pub mod engine;
pub mod hit;
pub mod markup;
pub mod registry;
pub mod render;
pub mod tree;
