//! Bridge component between DOM drag/click events and the editor engine.
//!
//! The canvas surface mounts the preview markup produced by the `builder`
//! crate and listens for delegated events on the whole surface. Every
//! rendered node carries a `data-node-id` attribute, so hit resolution walks
//! from the event target to the closest addressable element and maps the
//! event onto the matching `EditorCore` operation. The engine owns all
//! gesture interpretation; this component only extracts ids and geometry.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use builder::drag::{Point, TargetBox};
use builder::tree::NodeId;

use crate::state::editor::EditorState;

/// The composed node under a DOM event target, if any.
fn event_node_id(ev: &web_sys::Event) -> Option<NodeId> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let hit = target.closest("[data-node-id]").ok().flatten()?;
    let raw = hit.get_attribute("data-node-id")?;
    NodeId::parse_str(&raw).ok()
}

/// Vertical extent of the addressable element under the event target.
fn event_target_box(ev: &web_sys::Event) -> Option<TargetBox> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let hit = target.closest("[data-node-id]").ok().flatten()?;
    let rect = hit.get_bounding_client_rect();
    Some(TargetBox::new(rect.top(), rect.height()))
}

/// The drop canvas: live preview, delegated drag wiring, and the trash.
#[component]
pub fn CanvasPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let on_drag_start = move |ev: leptos::ev::DragEvent| {
        let Some(id) = event_node_id(&ev) else {
            return;
        };
        // Firefox refuses to start a drag without payload data.
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", &id.to_string());
        }
        editor.update(|state| {
            state.core.begin_node_drag(id);
        });
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        // prevent_default keeps the surface a valid drop target.
        ev.prevent_default();
        let Some(id) = event_node_id(&ev) else {
            return;
        };
        let Some(target_box) = event_target_box(&ev) else {
            return;
        };
        let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        editor.update(|state| {
            state.core.hover(id, pointer, target_box);
        });
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if event_node_id(&ev).is_some() {
            // Released over a node: any qualifying reparent already happened
            // on hover, so the drop itself must not mutate.
            editor.update(|state| {
                state.core.cancel_drag();
            });
        } else {
            editor.update(|state| {
                state.core.drop_on_canvas();
            });
        }
    };

    let on_drag_end = move |_ev: leptos::ev::DragEvent| {
        // Fires after any drop handler; a consumed gesture is already Idle.
        editor.update(|state| {
            state.core.cancel_drag();
        });
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(id) = event_node_id(&ev) else {
            return;
        };
        editor.update(|state| {
            state.core.select(id);
        });
    };

    let on_trash_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        editor.update(|state| {
            state.core.drop_on_trash();
        });
    };

    view! {
        <section class="canvas-panel">
            <div
                class="canvas-panel__surface"
                on:dragstart=on_drag_start
                on:dragover=on_drag_over
                on:drop=on_drop
                on:dragend=on_drag_end
                on:click=on_click
                inner_html=move || editor.with(|state| state.core.preview())
            ></div>
            <div
                class="canvas-panel__trash"
                on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
                on:drop=on_trash_drop
            >
                "🗑 Drop here to delete"
            </div>
        </section>
    }
}
