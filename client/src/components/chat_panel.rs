//! AI coach chat panel: transcript, typing indicator and input row.

use leptos::prelude::*;

use crate::consts::{CHAT_INPUT_ID, TYPING_TEXT};
use crate::net::api;
use crate::state::chat::ChatState;
use crate::util::clock::{now_ms, time_label};
use crate::util::effects::PageSignals;

/// Chat panel showing the transcript and an input for new questions.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let page = PageSignals::from_context();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let Some(Some(request)) = chat.try_update(|c| c.begin_send(&text, now_ms())) else {
            return;
        };
        input.set(String::new());

        leptos::task::spawn_local(async move {
            let result = api::send_chat(&request).await;
            if let Some(effects) = chat.try_update(|c| c.finish_send(result, now_ms())) {
                page.apply(effects);
            }
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().in_flight;

    view! {
        <div class="chat-container">
            <div class="chat-messages" id="chatMessages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|msg| {
                            let time = time_label(msg.timestamp);
                            view! {
                                <div class=msg.sender.css_class()>
                                    <div class="message-content">
                                        <p>{msg.text}</p>
                                    </div>
                                    <div class="message-time">{time}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || chat.get().typing>
                    <div class="message ai-message typing-indicator">
                        <div class="message-content">
                            <p>{TYPING_TEXT}</p>
                        </div>
                    </div>
                </Show>
            </div>

            <div class="chat-input-container">
                <input
                    id=CHAT_INPUT_ID
                    class="chat-input"
                    type="text"
                    placeholder="Ask your AI coach anything..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn-primary chat-send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
