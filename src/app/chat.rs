use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatMessage {
    id: usize,
    text: String,
    from_user: bool,
    time: String,
}

fn timestamp() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

/// Floating assistant widget backed by the n8n webhook. Without a configured
/// webhook it stays usable but answers every message with the offline
/// notice.
#[component]
pub fn ChatWidget(settings: Settings) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let (typing, set_typing) = signal(false);
    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let next_id = StoredValue::new(0usize);

    let push = move |text: String, from_user: bool| {
        let id = next_id.get_value();
        next_id.set_value(id + 1);
        messages.update(|m| {
            m.push(ChatMessage {
                id,
                text,
                from_user,
                time: timestamp(),
            })
        });
    };

    let list_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move |_| {
        // Track the list so new messages scroll into view.
        messages.track();
        if let Some(el) = list_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let toggle = move |_| {
        set_open.update(|o| *o = !*o);
        if open.get_untracked() && messages.with_untracked(|m| m.is_empty()) {
            push(settings.strings().chat_greeting.to_string(), false);
        }
    };

    let send = move || {
        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() || typing.get_untracked() {
            return;
        }
        set_draft(String::new());
        push(text.clone(), true);

        if !api::is_chat_configured() {
            push(settings.strings().chat_offline.to_string(), false);
            return;
        }

        let error_text = settings.strings().chat_error;
        set_typing(true);
        spawn_local(async move {
            match api::send_chat_message(&text).await {
                Ok(reply) => push(reply, false),
                Err(err) => {
                    log::error!("chat request failed: {err}");
                    push(error_text.to_string(), false);
                }
            }
            set_typing(false);
        });
    };

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end gap-4">
            {move || {
                open()
                    .then(|| {
                        view! {
                            <div class="w-80 sm:w-96 bg-gray-800 border border-white/10 rounded-xl shadow-2xl overflow-hidden flex flex-col">
                                <div class="bg-blue-600 p-4">
                                    <h3 class="text-white font-bold">
                                        {move || settings.strings().chat_title}
                                    </h3>
                                    <p class="text-blue-200 text-xs">
                                        {move || settings.strings().chat_subtitle}
                                    </p>
                                </div>
                                <div
                                    node_ref=list_ref
                                    class="h-72 overflow-y-auto p-4 space-y-3 bg-gray-900"
                                >
                                    <For
                                        each=move || messages.get()
                                        key=|msg| msg.id
                                        let:msg
                                    >
                                        <MessageBubble msg />
                                    </For>
                                    {move || {
                                        typing()
                                            .then(|| {
                                                view! {
                                                    <div class="text-gray-400 text-sm animate-pulse">
                                                        "..."
                                                    </div>
                                                }
                                            })
                                    }}
                                </div>
                                <div class="p-3 border-t border-white/10 flex gap-2">
                                    <input
                                        type="text"
                                        class="flex-grow bg-gray-900 border border-gray-700 rounded-md px-3 py-2 text-sm text-gray-100 focus:outline-none focus:border-blue-500"
                                        placeholder=move || settings.strings().chat_placeholder
                                        prop:value=draft
                                        on:input=move |ev| set_draft(event_target_value(&ev))
                                        on:keydown=move |ev| {
                                            if ev.key() == "Enter" {
                                                send();
                                            }
                                        }
                                    />
                                    <button
                                        class="px-3 py-2 rounded-md bg-blue-600 hover:bg-blue-700 text-white text-sm disabled:opacity-50 transition-colors"
                                        disabled=typing
                                        on:click=move |_| send()
                                    >
                                        "➤"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
            <button
                class="w-14 h-14 rounded-full bg-blue-600 hover:bg-blue-700 text-white text-2xl shadow-lg transition-colors"
                aria-label="Toggle chat"
                on:click=toggle
            >
                {move || if open() { "✕" } else { "💬" }}
            </button>
        </div>
    }
}

#[component]
fn MessageBubble(msg: ChatMessage) -> impl IntoView {
    let (wrapper, bubble) = if msg.from_user {
        (
            "flex justify-end",
            "bg-blue-600 text-white rounded-lg rounded-br-none px-3 py-2 max-w-[80%]",
        )
    } else {
        (
            "flex justify-start",
            "bg-gray-700 text-gray-100 rounded-lg rounded-bl-none px-3 py-2 max-w-[80%]",
        )
    };
    view! {
        <div class=wrapper>
            <div class=bubble>
                <p class="text-sm whitespace-pre-wrap">{msg.text}</p>
                <span class="block text-[10px] opacity-60 mt-1 text-right">{msg.time}</span>
            </div>
        </div>
    }
}
