use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Keys that dismiss an open dialog.
fn dismisses(key: &str) -> bool {
    key == "Escape"
}

/// Overlay + surface used by every edit dialog. Escape and overlay clicks
/// close it; clicks inside the surface do not propagate out.
#[component]
pub fn Modal(
    /// Title shown in the modal header
    #[prop(into)]
    title: String,
    /// Callback when the modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape closes. The closure stays owned until unmount, where the
    // listener is removed again; otherwise every open would stack another
    // window-level handler for the page's lifetime.
    let closure = leptos::__reexports::send_wrapper::SendWrapper::new(Closure::wrap(Box::new(
        move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if dismisses(&keyboard_event.key()) {
                    on_close.run(());
                }
            }
        },
    )
        as Box<dyn FnMut(_)>));
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }
    });

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_escape_dismisses() {
        assert!(dismisses("Escape"));
        assert!(!dismisses("Enter"));
        assert!(!dismisses("Esc"));
    }
}
