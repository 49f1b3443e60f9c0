use leptos::prelude::*;

use crate::content::{SkillCategory, LANGUAGE_SKILLS, SKILL_CATEGORIES};
use crate::settings::Settings;

#[component]
pub fn SkillsSection(settings: Settings) -> impl IntoView {
    view! {
        <section id="skills" class="py-12 sm:py-16 lg:py-24">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-8 sm:mb-12 lg:mb-16">
                    <h2 class="text-2xl sm:text-3xl lg:text-4xl font-bold text-blue-400 mb-4 sm:mb-6">
                        {move || settings.strings().skills_title}
                    </h2>
                    <p class="text-base sm:text-lg lg:text-xl text-gray-300 max-w-3xl mx-auto leading-relaxed px-4">
                        {move || settings.strings().skills_description}
                    </p>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6 lg:gap-8 mb-8 sm:mb-12">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| view! { <CategoryCard category /> })
                        .collect_view()}
                </div>
                <div class="max-w-4xl mx-auto">
                    <CategoryCard category=&LANGUAGE_SKILLS />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="bg-gray-800/50 backdrop-blur-sm border border-white/10 p-4 sm:p-6 lg:p-8 rounded-xl shadow-xl hover:shadow-2xl transition-all duration-300 hover:border-blue-500/30 h-full">
            <h3 class="text-lg sm:text-xl lg:text-2xl font-semibold text-blue-400 mb-3 sm:mb-4">
                {category.title}
            </h3>
            <div class="flex flex-wrap gap-2 sm:gap-3">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <span class="bg-blue-500 text-white px-3 py-2 rounded-full text-xs sm:text-sm font-medium shadow-md hover:bg-blue-600 transition-all duration-200 cursor-default">
                                {*skill}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
