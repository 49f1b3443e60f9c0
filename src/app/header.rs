use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{NavKey, NAV_ITEMS};
use crate::i18n::Strings;
use crate::settings::Settings;

fn nav_label(strings: &'static Strings, key: NavKey) -> &'static str {
    match key {
        NavKey::About => strings.nav_about,
        NavKey::Skills => strings.nav_skills,
        NavKey::Projects => strings.nav_projects,
        NavKey::Demos => strings.nav_demos,
        NavKey::Apps => strings.nav_apps,
        NavKey::Contact => strings.nav_contact,
    }
}

#[component]
pub fn Header(settings: Settings) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();

    let header_class = move || {
        if scroll_y() > 10.0 {
            "sticky top-0 z-40 bg-slate-900/90 backdrop-blur-xl shadow-lg transition-all duration-300"
        } else {
            "sticky top-0 z-40 bg-transparent transition-all duration-300"
        }
    };

    view! {
        <header class=header_class>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between py-4">
                    <a
                        href="#about"
                        class="text-lg sm:text-xl lg:text-2xl font-bold hover:text-blue-400 transition-colors"
                    >
                        <span class="hidden sm:inline">
                            {move || settings.strings().header_welcome}
                        </span>
                        <span class="sm:hidden">{move || settings.strings().header_portfolio}</span>
                    </a>
                    <nav class="hidden lg:flex items-center gap-1">
                        {NAV_ITEMS
                            .iter()
                            .map(|(href, key)| {
                                let key = *key;
                                view! {
                                    <a
                                        href=*href
                                        class="px-3 py-2 text-sm xl:text-base font-medium text-gray-400 hover:text-white hover:bg-white/5 rounded-md transition-colors"
                                    >
                                        {move || nav_label(settings.strings(), key)}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex items-center gap-2">
                        <ThemeToggle settings />
                        <LanguageToggle settings />
                        <button
                            class="lg:hidden px-3 py-2 rounded-md hover:bg-white/10 transition-colors"
                            aria-label="Toggle navigation"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                {move || {
                    menu_open()
                        .then(|| {
                            view! {
                                <nav class="lg:hidden flex flex-col pb-4">
                                    {NAV_ITEMS
                                        .iter()
                                        .map(|(href, key)| {
                                            let key = *key;
                                            view! {
                                                <a
                                                    href=*href
                                                    class="px-3 py-3 text-base font-medium text-gray-300 hover:text-white hover:bg-white/5 rounded-md transition-colors"
                                                    on:click=move |_| set_menu_open(false)
                                                >
                                                    {move || nav_label(settings.strings(), key)}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </nav>
                            }
                        })
                }}
            </div>
        </header>
    }
}

#[component]
fn ThemeToggle(settings: Settings) -> impl IntoView {
    view! {
        <button
            class="px-3 py-2 rounded-md hover:bg-white/10 transition-colors"
            title=move || {
                if settings.theme().is_dark() {
                    settings.strings().theme_light
                } else {
                    settings.strings().theme_dark
                }
            }
            on:click=move |_| settings.toggle_theme()
        >
            {move || if settings.theme().is_dark() { "🌙" } else { "☀️" }}
        </button>
    }
}

#[component]
fn LanguageToggle(settings: Settings) -> impl IntoView {
    view! {
        <button
            class="px-3 py-2 rounded-md text-sm font-bold uppercase hover:bg-white/10 transition-colors"
            aria-label="Switch language"
            on:click=move |_| settings.toggle_language()
        >
            {move || settings.language().toggled().code()}
        </button>
    }
}
