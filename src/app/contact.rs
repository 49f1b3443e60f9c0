use std::sync::LazyLock;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use regex::Regex;

use crate::api::{self, ContactMessage};
use crate::content;
use crate::i18n::Strings;
use crate::settings::Settings;

type PendingTimeout = StoredValue<Option<TimeoutHandle>, LocalStorage>;

/// How long the success message is shown before the form closes itself.
const CLOSE_DELAY: Duration = Duration::from_millis(2000);

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormStatus {
    NameRequired,
    EmailInvalid,
    MessageRequired,
    Success,
    Failure,
}

impl FormStatus {
    fn text(self, strings: &'static Strings) -> &'static str {
        match self {
            Self::NameRequired => strings.form_name_required,
            Self::EmailInvalid => strings.form_email_invalid,
            Self::MessageRequired => strings.form_message_required,
            Self::Success => strings.form_success,
            Self::Failure => strings.form_failure,
        }
    }

    fn is_success(self) -> bool {
        self == Self::Success
    }
}

#[component]
pub fn ContactSection(settings: Settings) -> impl IntoView {
    let (form_open, set_form_open) = signal(false);

    view! {
        <section id="contact" class="py-20 sm:py-24">
            <div class="container mx-auto px-6 lg:px-8 text-center max-w-3xl">
                <h2 class="text-3xl sm:text-4xl font-bold text-blue-400 mb-4">
                    {move || settings.strings().contact_title}
                </h2>
                <p class="text-lg text-gray-300 mb-8">
                    {move || settings.strings().contact_description}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-10">
                    <button
                        class="px-6 py-3 rounded-md bg-blue-600 hover:bg-blue-700 text-white font-bold transition-colors"
                        on:click=move |_| set_form_open(true)
                    >
                        {move || settings.strings().contact_email}
                    </button>
                    <a
                        href=content::whatsapp_link()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-6 py-3 rounded-md bg-green-600 hover:bg-green-700 text-white font-bold transition-colors"
                    >
                        {move || settings.strings().contact_whatsapp}
                    </a>
                </div>
                <p class="text-gray-400 mb-4">{move || settings.strings().contact_connect_with}</p>
                <div class="flex justify-center gap-6 mb-8">
                    <a
                        href=content::LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-400 hover:text-blue-400 transition-colors"
                    >
                        "LinkedIn"
                    </a>
                    <a
                        href=content::GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-400 hover:text-blue-400 transition-colors"
                    >
                        "GitHub"
                    </a>
                </div>
                <p class="text-sm text-gray-500">
                    {move || settings.strings().contact_additional_info}
                </p>
            </div>
            {move || {
                form_open()
                    .then(|| {
                        view! { <ContactForm settings on_close=move || set_form_open(false) /> }
                    })
            }}
        </section>
    }
}

#[component]
fn ContactForm(settings: Settings, on_close: impl Fn() + Copy + 'static) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (status, set_status) = signal(None::<FormStatus>);
    let (sending, set_sending) = signal(false);

    let close_timer: PendingTimeout = StoredValue::new_local(None);

    on_cleanup(move || {
        if let Some(handle) = close_timer.get_value() {
            handle.clear();
        }
    });

    let submit = move || {
        if sending.get_untracked() {
            return;
        }
        let name = name.get_untracked();
        let email = email.get_untracked();
        if name.trim().is_empty() {
            set_status(Some(FormStatus::NameRequired));
            return;
        }
        if !EMAIL_RE.is_match(email.trim()) {
            set_status(Some(FormStatus::EmailInvalid));
            return;
        }
        let text = body.get_untracked();
        if text.trim().is_empty() {
            set_status(Some(FormStatus::MessageRequired));
            return;
        }

        let message = ContactMessage {
            from_name: name.trim().to_string(),
            from_email: email.trim().to_string(),
            phone: phone.get_untracked().trim().to_string(),
            message: text.trim().to_string(),
            to_email: content::EMAIL,
        };

        set_sending(true);
        set_status(None);
        spawn_local(async move {
            match api::send_contact_email(&message).await {
                Ok(()) => {
                    set_status(Some(FormStatus::Success));
                    if let Some(handle) = close_timer.get_value() {
                        handle.clear();
                    }
                    let scheduled = set_timeout_with_handle(move || on_close(), CLOSE_DELAY);
                    close_timer.set_value(scheduled.ok());
                }
                Err(err) => {
                    log::error!("contact form send failed: {err}");
                    set_status(Some(FormStatus::Failure));
                }
            }
            set_sending(false);
        });
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 p-4">
            <div class="bg-gray-800 border border-white/10 rounded-xl shadow-2xl w-full max-w-md p-6 text-left">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-xl font-bold text-blue-400">
                        {move || settings.strings().form_title}
                    </h3>
                    <button
                        class="text-gray-400 hover:text-white"
                        aria-label="Close"
                        on:click=move |_| on_close()
                    >
                        "✕"
                    </button>
                </div>
                {move || {
                    status()
                        .map(|s| {
                            let class = if s.is_success() {
                                "mb-4 text-sm text-green-400"
                            } else {
                                "mb-4 text-sm text-red-400"
                            };
                            view! { <p class=class>{s.text(settings.strings())}</p> }
                        })
                }}
                <div class="space-y-4">
                    <input
                        type="text"
                        class="w-full bg-gray-900 border border-gray-700 rounded-md px-4 py-2 text-gray-100 focus:outline-none focus:border-blue-500"
                        placeholder=move || settings.strings().form_name
                        prop:value=name
                        on:input=move |ev| set_name(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        class="w-full bg-gray-900 border border-gray-700 rounded-md px-4 py-2 text-gray-100 focus:outline-none focus:border-blue-500"
                        placeholder=move || settings.strings().form_email
                        prop:value=email
                        on:input=move |ev| set_email(event_target_value(&ev))
                    />
                    <input
                        type="tel"
                        class="w-full bg-gray-900 border border-gray-700 rounded-md px-4 py-2 text-gray-100 focus:outline-none focus:border-blue-500"
                        placeholder=move || settings.strings().form_phone
                        prop:value=phone
                        on:input=move |ev| set_phone(event_target_value(&ev))
                    />
                    <textarea
                        class="w-full bg-gray-900 border border-gray-700 rounded-md px-4 py-2 text-gray-100 focus:outline-none focus:border-blue-500 h-28 resize-none"
                        placeholder=move || settings.strings().form_message
                        prop:value=body
                        on:input=move |ev| set_body(event_target_value(&ev))
                    ></textarea>
                    <button
                        class="w-full px-4 py-2 rounded-md bg-blue-600 hover:bg-blue-700 text-white font-bold disabled:opacity-50 transition-colors"
                        disabled=sending
                        on:click=move |_| submit()
                    >
                        {move || {
                            if sending() {
                                settings.strings().form_sending
                            } else {
                                settings.strings().form_send
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
