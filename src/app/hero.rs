use leptos::{either::Either, prelude::*};

use crate::content;
use crate::cycler::{Phase, TextCycler, Timing};
use crate::settings::Settings;

#[component]
pub fn HeroSection(settings: Settings) -> impl IntoView {
    view! {
        <section
            id="about"
            class="min-h-screen flex items-center justify-center text-center px-4 sm:px-6 lg:px-8 relative overflow-hidden"
        >
            <div class="container mx-auto max-w-4xl relative z-10 space-y-6 sm:space-y-8">
                <h1 class="text-3xl sm:text-5xl md:text-6xl lg:text-7xl font-extrabold leading-tight">
                    // Keyed on the language: toggling tears the typewriter
                    // down (clearing its pending timer) and starts a fresh
                    // cycle with the new greeting.
                    {move || {
                        let greeting = settings.strings().hero_greeting;
                        view! {
                            <Typewriter
                                phrases=vec![format!("{} {}", greeting, content::NAME)]
                                highlight_from=greeting.chars().count() + 1
                            />
                        }
                    }}
                </h1>
                <p class="text-lg sm:text-2xl md:text-3xl lg:text-4xl text-gray-300 font-light leading-relaxed">
                    {move || settings.strings().hero_title}
                </p>
                <p class="text-sm sm:text-lg md:text-xl text-gray-400 max-w-3xl mx-auto leading-relaxed px-4">
                    {move || settings.strings().hero_subtitle}
                </p>
                <div class="flex flex-col sm:flex-row gap-3 sm:gap-4 justify-center items-center pt-4 sm:pt-8">
                    <a
                        href="#projects"
                        class="w-full sm:w-auto px-6 py-3 rounded-md bg-blue-600 hover:bg-blue-700 text-white font-bold text-lg transition-colors shadow-lg"
                    >
                        {move || settings.strings().hero_view_work}
                    </a>
                    <a
                        href="#contact"
                        class="w-full sm:w-auto px-6 py-3 rounded-md border border-gray-500 hover:border-blue-500 text-gray-300 hover:text-white font-bold text-lg transition-colors"
                    >
                        {move || settings.strings().hero_cta}
                    </a>
                </div>
            </div>
        </section>
    }
}

type PendingTimeout = StoredValue<Option<TimeoutHandle>, LocalStorage>;

/// Renders a [`TextCycler`] by scheduling one timeout at a time: each tick
/// schedules exactly the next one, and the pending handle is cleared on
/// unmount. The transition logic itself lives in the cycler and never
/// touches a timer.
#[component]
fn Typewriter(phrases: Vec<String>, #[prop(default = 0)] highlight_from: usize) -> impl IntoView {
    // Empty phrase list: render nothing, schedule nothing.
    let Some(cycler) = TextCycler::new(phrases, Timing::default()) else {
        return None;
    };

    let (display, set_display) = signal(cycler.visible().to_string());
    let (phase, set_phase) = signal(cycler.phase());
    let state = StoredValue::new(cycler);
    let pending: PendingTimeout = StoredValue::new_local(None);

    Effect::new(move |_| {
        schedule_tick(state, set_display, set_phase, pending);
    });

    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    Some(view! {
        <span class="block">
            {move || {
                let text = display();
                let split = text
                    .char_indices()
                    .nth(highlight_from)
                    .map(|(i, _)| i)
                    .unwrap_or(text.len());
                if split == text.len() {
                    Either::Left(view! { <span>{text}</span> })
                } else {
                    let head = text[..split].to_string();
                    let name = text[split..].to_string();
                    Either::Right(view! {
                        <span>{head}</span>
                        <span class="text-blue-400">{name}</span>
                    })
                }
            }}
            <span class=move || {
                if phase() == Phase::Holding {
                    "border-r-2 border-white animate-pulse"
                } else {
                    "border-r-2 border-white"
                }
            }>" "</span>
        </span>
    })
}

fn schedule_tick(
    state: StoredValue<TextCycler>,
    set_display: WriteSignal<String>,
    set_phase: WriteSignal<Phase>,
    pending: PendingTimeout,
) {
    let delay = state.with_value(|c| c.delay());
    let scheduled = set_timeout_with_handle(
        move || {
            state.update_value(|c| c.tick());
            state.with_value(|c| {
                set_display(c.visible().to_string());
                set_phase(c.phase());
            });
            schedule_tick(state, set_display, set_phase, pending);
        },
        delay,
    );
    pending.set_value(scheduled.ok());
}
