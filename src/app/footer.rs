use chrono::Datelike;
use leptos::prelude::*;

use crate::content;
use crate::settings::Settings;

#[component]
pub fn Footer(settings: Settings) -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="border-t border-white/10 py-8 mt-12">
            <div class="container mx-auto px-6 lg:px-8 flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-gray-400">
                <p>
                    "© " {year} " " {content::NAME} ". "
                    {move || settings.strings().footer_rights}
                </p>
                <div class="flex items-center gap-4">
                    <a
                        href=content::GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-white transition-colors"
                    >
                        "GitHub"
                    </a>
                    <a
                        href=content::LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-white transition-colors"
                    >
                        "LinkedIn"
                    </a>
                    <span title=env!("BUILD_TIME")>
                        {move || settings.strings().footer_built_with} " · v"
                        {env!("CARGO_PKG_VERSION")}
                    </span>
                </div>
            </div>
        </footer>
    }
}
