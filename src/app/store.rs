use std::collections::HashSet;
use std::time::Duration;

use leptos::{either::Either, prelude::*};

use crate::content;
use crate::interpreter;
use crate::settings::Settings;

type PendingTimeout = StoredValue<Option<TimeoutHandle>, LocalStorage>;

/// Artificial "AI thinking" pause before a command is applied.
const PROCESSING_DELAY: Duration = Duration::from_millis(1500);
/// How long the price-updated banner stays up.
const RESULT_DELAY: Duration = Duration::from_millis(3000);

/// Futuristic product carousel whose prices react to free-text commands.
/// The parsing and math live in [`interpreter`]; this component only owns
/// the session state and the two timers around it.
#[component]
pub fn VirtualStoreDemo(settings: Settings) -> impl IntoView {
    let products = RwSignal::new(content::demo_products());
    let (slide, set_slide) = signal(0usize);
    let (message, set_message) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (result, set_result) = signal(None::<u64>);
    let favorites = RwSignal::new(HashSet::<u32>::new());

    let processing: PendingTimeout = StoredValue::new_local(None);
    let result_timer: PendingTimeout = StoredValue::new_local(None);

    on_cleanup(move || {
        if let Some(handle) = processing.get_value() {
            handle.clear();
        }
        if let Some(handle) = result_timer.get_value() {
            handle.clear();
        }
    });

    let submit = move || {
        let text = message.get_untracked();
        if text.trim().is_empty() || loading.get_untracked() {
            return;
        }
        set_loading(true);
        if let Some(handle) = processing.get_value() {
            handle.clear();
        }
        let scheduled = set_timeout_with_handle(
            move || {
                let index = slide.get_untracked();
                let (price, original) =
                    products.with_untracked(|p| (p[index].price, p[index].original_price));
                let outcome = interpreter::interpret(&text, price, original);
                if outcome.changed {
                    products.update(|p| p[index].price = outcome.new_price);
                    set_result(Some(outcome.new_price));
                    if let Some(handle) = result_timer.get_value() {
                        handle.clear();
                    }
                    let hide = set_timeout_with_handle(move || set_result(None), RESULT_DELAY);
                    result_timer.set_value(hide.ok());
                }
                set_loading(false);
                set_message(String::new());
            },
            PROCESSING_DELAY,
        );
        processing.set_value(scheduled.ok());
    };

    let current = move || products.with(|p| p[slide()].clone());
    let count = move || products.with(|p| p.len());

    view! {
        <div class="max-w-5xl mx-auto bg-black/80 border border-blue-500/30 rounded-2xl overflow-hidden shadow-2xl">
            <div
                class="relative bg-cover bg-center"
                style=move || format!("background-image: url('{}')", current().background)
            >
                <div class="bg-black/60 backdrop-blur-sm p-6 sm:p-10">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 items-center">
                        <div class="relative">
                            <img
                                src=move || current().image
                                alt=move || current().name(settings.language())
                                class="w-full max-w-sm mx-auto drop-shadow-2xl"
                            />
                            <button
                                class="absolute top-2 right-2 text-2xl"
                                aria-label="Toggle favorite"
                                on:click=move |_| {
                                    let id = products
                                        .with_untracked(|p| p[slide.get_untracked()].id);
                                    favorites
                                        .update(|f| {
                                            if !f.insert(id) {
                                                f.remove(&id);
                                            }
                                        });
                                }
                            >
                                {move || {
                                    let id = current().id;
                                    if favorites.with(|f| f.contains(&id)) { "❤️" } else { "🤍" }
                                }}
                            </button>
                        </div>
                        <div class="space-y-4 text-left">
                            <h3 class="text-2xl sm:text-3xl font-bold text-cyan-300 tracking-widest">
                                {move || current().name(settings.language())}
                            </h3>
                            <div>
                                <h4 class="text-xs text-blue-400 tracking-widest mb-2">
                                    {move || settings.strings().store_specifications}
                                </h4>
                                <ul class="text-sm text-gray-300 space-y-1">
                                    {move || {
                                        current()
                                            .specs(settings.language())
                                            .iter()
                                            .map(|spec| view! { <li>"▸ " {*spec}</li> })
                                            .collect_view()
                                    }}
                                </ul>
                            </div>
                            <div class="flex items-center gap-4">
                                <DurabilityRing durability=Signal::derive(move || {
                                    current().durability
                                }) />
                                <div>
                                    <div class="text-xs text-blue-400 tracking-widest">
                                        {move || settings.strings().store_quality}
                                    </div>
                                    <div class="text-xs text-gray-400">
                                        {move || settings.strings().store_durability_index}
                                    </div>
                                </div>
                            </div>
                            <div>
                                {move || {
                                    let p = current();
                                    if p.price != p.original_price {
                                        Either::Left(
                                            view! {
                                                <span class="text-3xl font-bold text-green-400">
                                                    "$" {format_price(p.price)}
                                                </span>
                                                <span class="ml-3 text-lg text-gray-500 line-through">
                                                    "$" {format_price(p.original_price)}
                                                </span>
                                            },
                                        )
                                    } else {
                                        Either::Right(
                                            view! {
                                                <span class="text-3xl font-bold text-white">
                                                    "$" {format_price(p.price)}
                                                </span>
                                            },
                                        )
                                    }
                                }}
                            </div>
                            <button class="px-6 py-3 rounded-md bg-cyan-600 hover:bg-cyan-500 text-white font-bold tracking-widest transition-colors">
                                {move || settings.strings().store_add_to_cart}
                            </button>
                        </div>
                    </div>
                    <div class="flex items-center justify-center gap-4 mt-8">
                        <button
                            class="px-4 py-2 rounded-md bg-gray-800/80 hover:bg-gray-700 text-cyan-300 disabled:opacity-30 disabled:cursor-not-allowed transition-colors"
                            disabled=move || slide() == 0
                            on:click=move |_| set_slide.update(|s| *s = s.saturating_sub(1))
                        >
                            "‹"
                        </button>
                        <div class="flex gap-2">
                            {move || {
                                (0..count())
                                    .map(|i| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if slide() == i {
                                                        "w-3 h-3 rounded-full bg-cyan-400"
                                                    } else {
                                                        "w-3 h-3 rounded-full bg-gray-600 hover:bg-gray-500"
                                                    }
                                                }
                                                aria-label=format!("Show product {}", i + 1)
                                                on:click=move |_| set_slide(i)
                                            ></button>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                        <button
                            class="px-4 py-2 rounded-md bg-gray-800/80 hover:bg-gray-700 text-cyan-300 disabled:opacity-30 disabled:cursor-not-allowed transition-colors"
                            disabled=move || slide() + 1 >= count()
                            on:click=move |_| {
                                let len = products.with_untracked(|p| p.len());
                                set_slide
                                    .update(|s| {
                                        if *s + 1 < len {
                                            *s += 1;
                                        }
                                    });
                            }
                        >
                            "›"
                        </button>
                    </div>
                </div>
            </div>
            <div class="border-t border-blue-500/30 bg-gray-950 p-6 space-y-4">
                {move || {
                    result()
                        .map(|price| {
                            view! {
                                <div class="text-center text-green-400 font-medium">
                                    {settings.strings().store_price_updated} " $"
                                    {format_price(price)}
                                </div>
                            }
                        })
                }}
                {move || {
                    loading()
                        .then(|| {
                            view! {
                                <div class="text-center text-cyan-300 animate-pulse">
                                    {settings.strings().store_processing}
                                </div>
                            }
                        })
                }}
                <div class="flex gap-2">
                    <input
                        type="text"
                        class="flex-grow bg-gray-900 border border-gray-700 rounded-md px-4 py-2 text-gray-100 focus:outline-none focus:border-cyan-500"
                        placeholder=move || settings.strings().store_placeholder
                        prop:value=message
                        on:input=move |ev| set_message(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                    <button
                        class="px-4 py-2 rounded-md bg-cyan-600 hover:bg-cyan-500 text-white font-medium disabled:opacity-50 transition-colors"
                        disabled=loading
                        on:click=move |_| submit()
                    >
                        "➤"
                    </button>
                </div>
                <div class="flex flex-wrap gap-2 justify-center">
                    <QuickCommand
                        label=Signal::derive(move || settings.strings().store_quick_discount)
                        set_message
                    />
                    <QuickCommand
                        label=Signal::derive(move || settings.strings().store_quick_price)
                        set_message
                    />
                    <QuickCommand
                        label=Signal::derive(move || settings.strings().store_quick_increase)
                        set_message
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn QuickCommand(label: Signal<&'static str>, set_message: WriteSignal<String>) -> impl IntoView {
    view! {
        <button
            class="px-3 py-1 rounded-full border border-cyan-700 text-cyan-300 text-xs hover:bg-cyan-900/50 transition-colors"
            on:click=move |_| set_message(label.get_untracked().to_string())
        >
            {label}
        </button>
    }
}

/// Circular gauge for the 0-100 durability score. The circle has radius 40,
/// so a full ring is ~251 units of dash.
#[component]
fn DurabilityRing(durability: Signal<u8>) -> impl IntoView {
    view! {
        <div class="relative w-20 h-20">
            <svg viewBox="0 0 100 100" class="w-20 h-20 -rotate-90">
                <circle cx="50" cy="50" r="40" fill="none" stroke="#1f2937" stroke-width="8" />
                <circle
                    cx="50"
                    cy="50"
                    r="40"
                    fill="none"
                    stroke="#22d3ee"
                    stroke-width="8"
                    stroke-linecap="round"
                    stroke-dasharray=move || {
                        format!("{:.0} 251", f64::from(durability()) * 2.51)
                    }
                />
            </svg>
            <span class="absolute inset-0 flex items-center justify-center text-sm font-bold text-cyan-300">
                {move || format!("{}%", durability())}
            </span>
        </div>
    }
}

/// Thousands separators for display prices, e.g. `1299` -> `"1,299"`.
fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_price_groups_thousands() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1299), "1,299");
        assert_eq!(format_price(4599), "4,599");
        assert_eq!(format_price(1_234_567), "1,234,567");
    }
}
