use leptos::{either::Either, prelude::*};

use crate::content::{section, Project, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="container mx-auto" id=section::PROJECTS>
            <h2 class="mb-12 mt-20 text-center text-4xl">"Projects"</h2>
            <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                {PROJECTS.iter().map(|p| view! { <ProjectCard project=*p /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let title = if let Some(href) = project.href {
        Either::Left(
            view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="hover:text-yellow-400"
                >
                    {project.title}
                </a>
            },
        )
    } else {
        Either::Right(project.title)
    };
    view! {
        <article class="flex flex-col rounded-xl border border-zinc-800 bg-zinc-950 p-6 transition-colors duration-200 hover:border-yellow-400/50">
            <h3 class="mb-3 text-2xl font-semibold">{title}</h3>
            <p class="mb-6 flex-grow text-gray-400">{project.description}</p>
            <ul class="flex flex-wrap gap-2">
                {project
                    .technologies
                    .iter()
                    .map(|t| {
                        view! {
                            <li class="rounded bg-zinc-800 px-2 py-1 text-xs text-yellow-400">
                                {*t}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}
