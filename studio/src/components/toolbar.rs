//! Toolbar: panel toggles and the "Generate HTML" action.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::state::ui::UiState;

/// How long the generated-markup notice stays up, in milliseconds.
const NOTICE_DISMISS_MS: u32 = 4_000;

#[component]
pub fn Toolbar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_generate = move |_ev: leptos::ev::MouseEvent| {
        let markup = editor.with_untracked(|state| state.core.markup());
        let shown = if markup.is_empty() {
            "Canvas is empty".to_owned()
        } else {
            log::info!("generated markup: {markup}");
            markup
        };
        let mut seq = 0;
        ui.update(|u| {
            seq = u.show_notice(shown);
        });
        Timeout::new(NOTICE_DISMISS_MS, move || {
            ui.update(|u| u.clear_notice(seq));
        })
        .forget();
    };

    let toggle_left = move |_ev: leptos::ev::MouseEvent| {
        ui.update(|u| u.left_panel_expanded = !u.left_panel_expanded);
    };
    let toggle_right = move |_ev: leptos::ev::MouseEvent| {
        ui.update(|u| u.right_panel_expanded = !u.right_panel_expanded);
    };

    view! {
        <header class="toolbar">
            <button class="btn" on:click=toggle_left>
                "Palette"
            </button>
            <h1 class="toolbar__brand">"PageForge"</h1>
            <button class="btn btn--primary" on:click=on_generate>
                "Generate HTML"
            </button>
            <button class="btn" on:click=toggle_right>
                "Panels"
            </button>
        </header>
    }
}
