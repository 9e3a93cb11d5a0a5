use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    achievements::Achievements, contact::ContactForm, projects::Projects, skills::Skills,
    testimonials::Testimonials,
};
use crate::content::{section, ABOUT_TEXT, HERO_NAME, HERO_ROLE, HERO_TAGLINE};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Projects />
        <Skills />
        <Achievements />
        <Testimonials />
        <ContactForm />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="flex min-h-screen flex-col items-center justify-center text-center">
            <h1 class="text-5xl font-bold lg:text-7xl">{HERO_NAME}</h1>
            <div class="mt-4 h-2 w-16 bg-yellow-400"></div>
            <h2 class="mt-6 text-2xl text-yellow-400 lg:text-3xl">{HERO_ROLE}</h2>
            <p class="mt-6 max-w-xl text-lg text-gray-400">{HERO_TAGLINE}</p>
            <a
                href="#contact"
                class="mt-10 rounded bg-yellow-400 px-6 py-3 text-sm font-semibold text-slate-950 hover:bg-yellow-500"
            >
                "Get in touch"
            </a>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section class="container mx-auto" id=section::ABOUT>
            <h2 class="mb-12 mt-20 text-center text-4xl">"About"</h2>
            <div class="mx-auto max-w-3xl space-y-6 rounded-xl bg-gradient-to-b from-zinc-900 to-zinc-950 p-8 text-lg leading-relaxed">
                {ABOUT_TEXT.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
            </div>
        </section>
    }
}
