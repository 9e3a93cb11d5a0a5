use leptos::{ev::MouseEvent, prelude::*};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::{
    content::{NAVIGATION_LINKS, OWNER},
    nav::scroll_target,
};

/// Smooth-scrolls to the anchor in `href`, leaving room for the fixed navbar.
fn scroll_to_anchor(href: &str) {
    let target = match document().query_selector(href) {
        Ok(Some(el)) => el,
        _ => {
            log::warn!("no section found for {href}");
            return;
        }
    };
    let top = target.get_bounding_client_rect().top();
    let scroll_y = window().scroll_y().unwrap_or_default();

    let opts = ScrollToOptions::new();
    opts.set_top(scroll_target(top, scroll_y));
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let handle_link_click = move |ev: MouseEvent, href: &'static str| {
        ev.prevent_default();
        scroll_to_anchor(href);
        set_menu_open.set(false);
    };

    let links = move || {
        NAVIGATION_LINKS
            .iter()
            .map(|link| {
                let href = link.href;
                view! {
                    <li>
                        <a
                            href=href
                            class="text-sm hover:text-yellow-400"
                            on:click=move |ev| handle_link_click(ev, href)
                        >
                            {link.label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    let logo = || {
        view! {
            <a href="#" class="m-2 text-xl font-bold">
                {OWNER}
                <span class="text-yellow-400">"."</span>
            </a>
        }
    };

    view! {
        <nav class="fixed left-0 right-0 top-4 z-50">
            // desktop
            <div class="mx-auto hidden max-w-2xl items-center justify-center gap-6 rounded-lg bg-black/20 py-3 backdrop-blur-lg lg:flex">
                {logo()}
                <ul class="flex items-center gap-4">{links()}</ul>
            </div>
            // mobile
            <div class="rounded-lg backdrop-blur-md lg:hidden">
                <div class="flex items-center justify-between">
                    {logo()}
                    <button
                        class="m-2 h-6 w-5 focus:outline-none"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
                {move || {
                    menu_open
                        .get()
                        .then(|| {
                            view! {
                                <ul class="ml-4 mt-4 flex flex-col gap-4 pb-4 backdrop-blur-md">
                                    {links()}
                                </ul>
                            }
                        })
                }}
            </div>
        </nav>
    }
}
