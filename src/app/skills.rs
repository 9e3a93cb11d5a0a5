use leptos::prelude::*;

use crate::content::{section, SKILLS};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section class="container mx-auto" id=section::SKILLS>
            <h2 class="mb-12 mt-20 text-center text-4xl">"Skills"</h2>
            <div class="mx-2 flex flex-col flex-wrap items-center justify-center gap-x-12 rounded-xl bg-gradient-to-b from-zinc-900 to-zinc-950 px-4 py-10 sm:flex-row lg:px-20">
                {SKILLS
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="mb-8 flex items-center">
                                <i class=format!("{} text-4xl lg:text-5xl", skill.icon)></i>
                                <h3 class="px-6 text-xl lg:text-3xl">{skill.name}</h3>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
