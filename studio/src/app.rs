//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::builder::BuilderPage;
use crate::state::{editor::EditorState, ui::UiState};

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Reactive state contexts for all child components.
    let editor = RwSignal::new(EditorState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(editor);
    provide_context(ui);

    view! {
        <Title text="PageForge"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BuilderPage/>
            </Routes>
        </Router>
    }
}
