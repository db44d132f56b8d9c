//! The builder page: palette on the left, canvas in the middle, outline and
//! inspector on the right, toolbar above and status bar below.

use leptos::prelude::*;

use crate::components::canvas_panel::CanvasPanel;
use crate::components::inspector_panel::InspectorPanel;
use crate::components::palette::Palette;
use crate::components::status_bar::StatusBar;
use crate::components::toolbar::Toolbar;
use crate::components::tree_panel::TreePanel;
use crate::state::ui::UiState;

/// The single page of the application.
#[component]
pub fn BuilderPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="builder-page">
            <Toolbar/>
            <div class="builder-page__body">
                <Show when=move || ui.get().left_panel_expanded>
                    <Palette/>
                </Show>
                <CanvasPanel/>
                <Show when=move || ui.get().right_panel_expanded>
                    <div class="builder-page__side">
                        <TreePanel/>
                        <InspectorPanel/>
                    </div>
                </Show>
            </div>
            <StatusBar/>
        </div>
    }
}
