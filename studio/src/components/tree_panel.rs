//! Outline panel: the tree view of the composed document.

use leptos::prelude::*;

use crate::state::editor::EditorState;

/// Indented rows in document order; clicking a row toggles its selection.
#[component]
pub fn TreePanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    view! {
        <section class="tree-panel">
            <h2 class="tree-panel__title">"Outline"</h2>
            {move || {
                let rows = editor.with(|state| state.core.outline());
                if rows.is_empty() {
                    view! { <p class="tree-panel__empty">"Canvas is empty"</p> }.into_any()
                } else {
                    rows.into_iter()
                        .map(|row| {
                            let on_click = move |_ev: leptos::ev::MouseEvent| {
                                editor.update(|state| {
                                    state.core.select(row.id);
                                });
                            };
                            let class = if row.selected {
                                "tree-panel__row tree-panel__row--selected"
                            } else {
                                "tree-panel__row"
                            };
                            view! {
                                <div
                                    class=class
                                    style:padding-left=format!("{}rem", row.depth)
                                    on:click=on_click
                                >
                                    {row.kind.tag()}
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </section>
    }
}
