//! UI components for the builder page.

pub mod canvas_panel;
pub mod inspector_panel;
pub mod palette;
pub mod status_bar;
pub mod toolbar;
pub mod tree_panel;
