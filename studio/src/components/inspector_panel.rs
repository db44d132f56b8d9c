//! Property inspector for the currently selected node.

use leptos::prelude::*;

use builder::tree::Node;

use crate::state::editor::EditorState;

/// Inspector panel showing the selected node's identity and editable props.
///
/// Reads the selection from `EditorState`; editable fields write back through
/// `EditorCore::set_property` on change. The delete button removes the node
/// and lets the engine clear the now-dangling selection.
#[component]
pub fn InspectorPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let selected = move || editor.with(|state| state.core.selected_node().cloned());

    view! {
        <div class="inspector-panel">
            {move || {
                if let Some(node) = selected() {
                    render_inspector(node, editor).into_any()
                } else {
                    view! { <p class="inspector-panel__empty">"No component selected"</p> }
                        .into_any()
                }
            }}
        </div>
    }
}

fn render_inspector(node: Node, editor: RwSignal<EditorState>) -> impl IntoView {
    let node_id = node.id;

    let on_delete = move |_ev: leptos::ev::MouseEvent| {
        editor.update(|state| {
            state.core.delete(node_id);
        });
    };

    let fields = node
        .kind
        .editable_props()
        .iter()
        .map(|spec| {
            let key = spec.name;
            let current = node.prop(key).unwrap_or("").to_owned();
            let on_change = move |ev: leptos::ev::Event| {
                let value = event_target_value(&ev);
                editor.update(|state| {
                    state.core.set_property(key, &value);
                });
            };
            view! {
                <label class="inspector-panel__field">
                    <span class="inspector-panel__field-name">{key}</span>
                    <input type="text" prop:value=current on:change=on_change/>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="inspector-panel__card">
            <h3 class="inspector-panel__title">{node.kind.tag()}</h3>

            <dl class="inspector-panel__meta">
                <dt>"ID"</dt>
                <dd class="inspector-panel__mono">{node.id.to_string()}</dd>
                <dt>"Children"</dt>
                <dd>{node.children.len().to_string()}</dd>
            </dl>

            {fields}

            <div class="inspector-panel__actions">
                <button class="btn btn--danger" on:click=on_delete>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
