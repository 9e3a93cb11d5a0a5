use leptos::prelude::*;

use crate::content::{section, TESTIMONIALS};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="container mx-auto" id=section::TESTIMONIALS>
            <h2 class="mb-12 mt-20 text-center text-4xl">"Testimonials"</h2>
            <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="rounded-xl bg-gradient-to-b from-zinc-900 to-zinc-950 p-8">
                                <blockquote class="text-lg italic leading-relaxed">
                                    "\u{201C}" {t.quote} "\u{201D}"
                                </blockquote>
                                <figcaption class="mt-6">
                                    <div class="font-semibold">{t.author}</div>
                                    <div class="text-sm text-gray-400">{t.role}</div>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
