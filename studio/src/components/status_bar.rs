//! Status bar: node count, selection readout, and the transient notice.

use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::state::ui::UiState;

#[component]
pub fn StatusBar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let count = move || editor.with(|state| state.core.tree.len());
    let selection = move || {
        editor.with(|state| {
            state
                .core
                .selected_node()
                .map_or_else(|| "nothing selected".to_owned(), |node| {
                    format!("selected: {}", node.kind.tag())
                })
        })
    };

    view! {
        <footer class="status-bar">
            <span class="status-bar__count">{move || format!("{} nodes", count())}</span>
            <span class="status-bar__selection">{selection}</span>
            {move || {
                ui.with(|u| u.notice.clone())
                    .map(|notice| view! { <code class="status-bar__notice">{notice}</code> })
            }}
        </footer>
    }
}
