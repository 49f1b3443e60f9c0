use leptos::prelude::*;

use crate::content::{Project, PROJECTS};
use crate::settings::Settings;

#[component]
pub fn ProjectsSection(settings: Settings) -> impl IntoView {
    view! {
        <section id="projects" class="py-20 sm:py-24 bg-gray-900/70">
            <div class="container mx-auto px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold text-blue-400">
                        {move || settings.strings().projects_title}
                    </h2>
                    <p class="mt-4 text-lg text-gray-300 max-w-2xl mx-auto">
                        {move || settings.strings().projects_description}
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 lg:gap-12">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard settings project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(settings: Settings, project: &'static Project) -> impl IntoView {
    view! {
        <div class="bg-gray-800/50 backdrop-blur-sm border border-white/10 rounded-xl shadow-xl overflow-hidden hover:border-blue-500/30 transition-all duration-300 flex flex-col">
            <img
                src=project.image_url
                alt=project.title
                class="w-full h-48 object-contain bg-gray-900/50 p-4"
            />
            <div class="p-6 flex flex-col flex-grow">
                <h3 class="text-xl font-bold text-blue-400 mb-2">{project.title}</h3>
                <p class="text-gray-300 text-sm mb-4 flex-grow">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="bg-gray-700 text-gray-300 px-2 py-1 rounded text-xs">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4 mt-auto">
                    {project
                        .live_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-blue-400 hover:text-blue-300 text-sm font-medium"
                                >
                                    {move || settings.strings().projects_live_demo}
                                </a>
                            }
                        })}
                    {project
                        .repo_url
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-blue-400 hover:text-blue-300 text-sm font-medium"
                                >
                                    {move || settings.strings().projects_view_code}
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
