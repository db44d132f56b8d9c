#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use builder::engine::EditorCore;

/// Document-level state: the editor core holding tree, selection, and the
/// active drag gesture.
///
/// Every event handler mutates this state exclusively through `EditorCore`
/// operations; components re-derive their views from the new value.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    /// The engine state driving every panel.
    pub core: EditorCore,
}

impl Default for EditorState {
    fn default() -> Self {
        Self { core: EditorCore::with_seed() }
    }
}
