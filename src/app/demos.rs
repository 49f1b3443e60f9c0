use leptos::prelude::*;

use crate::content;
use crate::settings::Settings;

use super::store::VirtualStoreDemo;

#[component]
pub fn DemosSection(settings: Settings) -> impl IntoView {
    view! {
        <section id="demos" class="py-20 sm:py-24 bg-gray-900/70">
            <div class="container mx-auto px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold text-blue-400">
                        {move || settings.strings().demos_title}
                    </h2>
                    <p class="mt-2 text-xl text-gray-200">
                        {move || settings.strings().demos_subtitle}
                    </p>
                    <p class="mt-4 text-lg text-gray-400 max-w-2xl mx-auto">
                        {move || settings.strings().demos_description}
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mb-12 max-w-4xl mx-auto">
                    <div class="bg-gray-800/50 backdrop-blur-sm border border-white/10 rounded-xl p-6 text-center hover:border-blue-500/30 transition-all duration-300">
                        <div class="text-4xl mb-4">"🎙️"</div>
                        <h3 class="text-xl font-bold text-blue-400 mb-2">
                            {move || settings.strings().demos_voice_title}
                        </h3>
                        <p class="text-gray-300 text-sm">
                            {move || settings.strings().demos_voice_description}
                        </p>
                    </div>
                    <div class="bg-gray-800/50 backdrop-blur-sm border border-white/10 rounded-xl p-6 text-center hover:border-blue-500/30 transition-all duration-300">
                        <div class="text-4xl mb-4">"💬"</div>
                        <h3 class="text-xl font-bold text-blue-400 mb-2">
                            {move || settings.strings().demos_chatbot_title}
                        </h3>
                        <p class="text-gray-300 text-sm mb-4">
                            {move || settings.strings().demos_chatbot_description}
                        </p>
                        <a
                            href=content::whatsapp_link()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-block px-4 py-2 rounded-md bg-green-600 hover:bg-green-700 text-white text-sm font-medium transition-colors"
                        >
                            "WhatsApp"
                        </a>
                    </div>
                </div>
                <VirtualStoreDemo settings />
            </div>
        </section>
    }
}
