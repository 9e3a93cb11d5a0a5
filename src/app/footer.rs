use leptos::prelude::*;

use crate::content::{OWNER, SOCIAL_MEDIA_LINKS};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mb-8 mt-20">
            <div class="flex flex-col items-center justify-center">
                <span class="mb-2 text-3xl font-bold">{OWNER}</span>
                <div class="mb-10 h-3 w-12 bg-yellow-400"></div>
            </div>
            <div class="flex items-center justify-center gap-8">
                {SOCIAL_MEDIA_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.label
                                class="text-2xl hover:text-yellow-400"
                            >
                                <i class=link.icon></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="mt-8 text-center text-sm tracking-wide text-gray-400">
                {format!("\u{a9}{BUILD_YEAR} {OWNER}. All rights reserved")}
            </p>
        </footer>
    }
}
