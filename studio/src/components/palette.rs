//! Palette of draggable component chips.

use leptos::prelude::*;

use builder::registry::ComponentKind;

use crate::state::editor::EditorState;

/// One chip per registry entry, in palette order. Dragging a chip starts a
/// palette gesture in the engine; the chip itself stays put and reusable.
#[component]
pub fn Palette() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    view! {
        <aside class="palette">
            <h2 class="palette__title">"Components"</h2>
            <ul class="palette__list">
                {ComponentKind::ALL
                    .into_iter()
                    .map(|kind| {
                        let on_drag_start = move |ev: leptos::ev::DragEvent| {
                            if let Some(dt) = ev.data_transfer() {
                                let _ = dt.set_data("text/plain", kind.tag());
                            }
                            editor.update(|state| {
                                state.core.begin_palette_drag(kind);
                            });
                        };
                        let on_drag_end = move |_ev: leptos::ev::DragEvent| {
                            editor.update(|state| {
                                state.core.cancel_drag();
                            });
                        };
                        view! {
                            <li
                                class="palette__chip"
                                draggable="true"
                                on:dragstart=on_drag_start
                                on:dragend=on_drag_end
                            >
                                {kind.tag()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
