use leptos::prelude::*;

use crate::content::{section, ACHIEVEMENTS};

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <section class="container mx-auto" id=section::ACHIEVEMENTS>
            <h2 class="mb-12 mt-20 text-center text-4xl">"Achievements"</h2>
            <ul class="mx-auto max-w-3xl space-y-4">
                {ACHIEVEMENTS
                    .iter()
                    .map(|a| {
                        view! {
                            <li class="flex items-baseline justify-between gap-4 border-b border-zinc-800 pb-4">
                                <div>
                                    <h3 class="text-xl">{a.title}</h3>
                                    <p class="text-sm text-gray-400">{a.issuer}</p>
                                </div>
                                <span class="text-sm font-semibold text-yellow-400">{a.year}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
