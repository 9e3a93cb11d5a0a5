use std::sync::Arc;

use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

use crate::{
    config::EmailJsConfig,
    contact::{ContactFormController, Field},
    content::section,
    emailjs::EmailJsClient,
    toast::ToastQueue,
};

const INPUT_CLASS: &str = "mb-8 w-full appearance-none rounded-lg border border-gray-900 bg-transparent px-3 py-2 text-sm focus:border-gray-400 focus:outline-none";

#[component]
pub fn ContactForm() -> impl IntoView {
    let toasts = expect_context::<ToastQueue>();
    let controller = ContactFormController::new(
        Arc::new(EmailJsClient::new(EmailJsConfig::from_build_env())),
        Arc::new(toasts),
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            controller.submit().await;
        });
    };

    // Input events bubble to the form and are routed by the element's `name`.
    let on_input = move |ev: Event| {
        let name = event_target::<web_sys::Element>(&ev)
            .get_attribute("name")
            .unwrap_or_default();
        if let Err(err) = controller.update_named(&name, event_target_value(&ev)) {
            log::warn!("{err}");
        }
    };

    view! {
        <div class="mx-auto max-w-3xl p-4" id=section::CONTACT>
            <h2 class="my-8 text-center text-4xl font-semibold tracking-tighter">
                "Let's Connect"
            </h2>
            <form on:submit=on_submit on:input=on_input novalidate=true>
                <FormField controller field=Field::Name placeholder="Name" input_type="text" />
                <FormField controller field=Field::Email placeholder="Email" input_type="email" />
                <FormField controller field=Field::Message placeholder="Message" input_type="textarea" />
                <button
                    type="submit"
                    disabled=move || controller.is_sending()
                    class=move || {
                        let base = "mb-8 w-full rounded bg-yellow-400 px-4 py-2 text-sm font-semibold text-slate-950 hover:bg-yellow-500";
                        if controller.is_sending() {
                            format!("{base} cursor-not-allowed opacity-50")
                        } else {
                            base.to_string()
                        }
                    }
                >
                    {move || if controller.is_sending() { "sending..." } else { "Send" }}
                </button>
            </form>
        </div>
    }
}

/// A controlled input bound to one form field, with its error underneath.
#[component]
fn FormField(
    controller: ContactFormController,
    field: Field,
    placeholder: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    let id = field.as_str();
    let value = move || controller.field(field);

    let input = if input_type == "textarea" {
        view! {
            <textarea
                id=id
                name=id
                rows="4"
                placeholder=placeholder
                prop:value=value
                class=INPUT_CLASS
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type
                id=id
                name=id
                placeholder=placeholder
                prop:value=value
                class=INPUT_CLASS
            />
        }
        .into_any()
    };

    view! {
        <div class="mb-4">
            {input}
            {move || {
                controller
                    .error_for(field)
                    .map(|msg| {
                        view! {
                            <p aria-live="polite" class="text-sm text-pink-700">
                                {msg}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
