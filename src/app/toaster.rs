use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    contact::NoticeKind,
    toast::{Toast, ToastQueue, TOAST_TIMEOUT_MS},
};

#[component]
pub fn Toaster() -> impl IntoView {
    let queue = expect_context::<ToastQueue>();

    view! {
        <div class="pointer-events-none fixed inset-x-0 top-4 z-[60] flex flex-col items-center gap-2">
            <For each=move || queue.toasts() key=|toast| toast.id let:toast>
                <ToastItem toast queue />
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, queue: ToastQueue) -> impl IntoView {
    let id = toast.id;
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| queue.dismiss(id), TOAST_TIMEOUT_MS);
    start(());

    let (icon, accent) = match toast.kind {
        NoticeKind::Success => ("\u{2714}", "text-green-500"),
        NoticeKind::Error => ("\u{2716}", "text-red-500"),
    };

    view! {
        <div
            role="status"
            class="pointer-events-auto flex items-center gap-3 rounded-lg bg-white px-4 py-3 text-sm text-slate-900 shadow-lg"
            on:click=move |_| queue.dismiss(id)
        >
            <span class=accent>{icon}</span>
            <span>{toast.message}</span>
        </div>
    }
}
