use leptos::{either::Either, prelude::*};

use crate::content::{MobileApp, MOBILE_APPS};
use crate::settings::Settings;

#[component]
pub fn MobileAppsSection(settings: Settings) -> impl IntoView {
    view! {
        <section id="mobile-apps" class="py-20 sm:py-24">
            <div class="container mx-auto px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold text-blue-400">
                        {move || settings.strings().apps_title}
                    </h2>
                    <p class="mt-2 text-xl text-gray-200">
                        {move || settings.strings().apps_subtitle}
                    </p>
                    <p class="mt-4 text-lg text-gray-400 max-w-2xl mx-auto">
                        {move || settings.strings().apps_description}
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {MOBILE_APPS
                        .iter()
                        .map(|app| view! { <AppCard settings app /> })
                        .collect_view()}
                </div>
                <div class="mt-16 text-center bg-gray-800/50 backdrop-blur-sm border border-white/10 rounded-xl p-8 max-w-3xl mx-auto">
                    <h3 class="text-2xl font-bold text-blue-400 mb-4">
                        {move || settings.strings().apps_need_custom}
                    </h3>
                    <p class="text-gray-300 mb-6">
                        {move || settings.strings().apps_custom_description}
                    </p>
                    <a
                        href="#contact"
                        class="inline-block px-6 py-3 rounded-md bg-blue-600 hover:bg-blue-700 text-white font-bold transition-colors"
                    >
                        {move || settings.strings().apps_discuss_project}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AppCard(settings: Settings, app: &'static MobileApp) -> impl IntoView {
    view! {
        <div class="bg-gray-800/50 backdrop-blur-sm border border-white/10 rounded-xl shadow-xl p-6 flex flex-col hover:border-blue-500/30 transition-all duration-300">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-xl font-bold text-blue-400">{app.name}</h3>
                <span class="bg-gray-700 text-gray-300 px-2 py-1 rounded text-xs">
                    {move || app.category(settings.language())}
                </span>
            </div>
            <p class="text-gray-300 text-sm mb-4 flex-grow">
                {move || app.description(settings.language())}
            </p>
            <h4 class="text-sm font-semibold text-gray-200 mb-2">
                {move || settings.strings().apps_key_features}
            </h4>
            <ul class="text-sm text-gray-400 space-y-1 mb-6">
                {move || {
                    app.features(settings.language())
                        .iter()
                        .map(|feature| view! { <li>"• " {*feature}</li> })
                        .collect_view()
                }}
            </ul>
            <div class="mt-auto">
                {match app.download_url {
                    Some(url) => {
                        Either::Left(
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="block text-center px-4 py-2 rounded-md bg-blue-600 hover:bg-blue-700 text-white font-medium transition-colors"
                                >
                                    {move || settings.strings().apps_download_here}
                                </a>
                            },
                        )
                    }
                    None => {
                        Either::Right(
                            view! {
                                <span class="block text-center px-4 py-2 rounded-md bg-gray-700 text-gray-400 font-medium cursor-not-allowed">
                                    {move || settings.strings().apps_coming_soon}
                                </span>
                            },
                        )
                    }
                }}
            </div>
        </div>
    }
}
