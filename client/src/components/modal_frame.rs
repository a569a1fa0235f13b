//! Shared modal chrome: backdrop, content box and close button.
//!
//! The frame is always mounted; visibility comes from [`ModalState`] as the
//! `modal active` class plus an inline `display`. A click closes only when
//! its target is the backdrop element itself; clicks that bubble up from the
//! content do not.

use leptos::prelude::*;

use crate::state::modal::{ModalClick, ModalKind, ModalState};

/// Modal wrapper for `kind`.
///
/// `on_close` runs after this frame closed the modal through one of its own
/// controls.
#[component]
pub fn ModalFrame(
    kind: ModalKind,
    #[prop(into)] title: TextProp,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    let closed = move |did_close: bool| {
        if did_close {
            if let Some(cb) = on_close {
                cb.run(());
            }
        }
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let click = if ev.target() == ev.current_target() { ModalClick::Backdrop } else { ModalClick::Content };
        closed(modal.try_update(|m| m.handle_click(kind, click)).unwrap_or(false));
    };
    let on_close_click = move |_| closed(modal.try_update(|m| m.close(kind)).unwrap_or(false));
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        if modal.try_update(|m| m.handle_key(kind, &key)).unwrap_or(false) {
            ev.prevent_default();
            closed(true);
        }
    };

    view! {
        <div
            id=kind.dom_id()
            class=move || modal.get().class(kind)
            style:display=move || modal.get().display(kind)
            on:click=on_click
            on:keydown=on_keydown
            tabindex="-1"
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{move || title.get()}</h2>
                    <button class="modal-close" on:click=on_close_click title="Close">
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
