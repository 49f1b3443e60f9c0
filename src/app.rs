mod chat;
mod contact;
mod demos;
mod footer;
mod header;
mod hero;
mod mobile_apps;
mod projects;
mod skills;
mod store;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::settings::Settings;
#[cfg(feature = "hydrate")]
use crate::settings::Theme;

use chat::ChatWidget;
use contact::ContactSection;
use demos::DemosSection;
use footer::Footer;
use header::Header;
use hero::HeroSection;
use mobile_apps::MobileAppsSection;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // One settings store for the whole session - every themed or translated
    // component takes it as an explicit parameter.
    let settings = Settings::new();

    // Theme is the only persisted setting. Stored value (default Dark) is
    // loaded once at startup, then written back on every change.
    #[cfg(feature = "hydrate")]
    {
        let (stored_theme, set_stored_theme, _) =
            use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
        Effect::watch(
            || (),
            move |_, _, _| {
                settings.set_theme(stored_theme.get_untracked());
            },
            true,
        );
        Effect::new(move |_| {
            set_stored_theme.set(settings.theme());
        });
    }

    view! {
        // sets the document title
        <Title formatter=|title| format!("Mario Moreno - {title}") />

        <Router>
            <div class=move || {
                if settings.theme().is_dark() {
                    "min-h-screen bg-gray-900 text-gray-100"
                } else {
                    "min-h-screen bg-gray-50 text-gray-900"
                }
            }>
                <Header settings />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=move || view! { <HomePage settings /> } />
                    </Routes>
                </main>
                <ChatWidget settings />
                <Footer settings />
            </div>
        </Router>
    }
}

#[component]
fn HomePage(settings: Settings) -> impl IntoView {
    view! {
        <Title text="AI Developer & Innovation Engineer" />
        <HeroSection settings />
        <SkillsSection settings />
        <ProjectsSection settings />
        <DemosSection settings />
        <MobileAppsSection settings />
        <ContactSection settings />
    }
}
