use super::ToastItem;
use crate::contexts::toast::ToastContext;
use yew::prelude::*;

/// Stack of live toasts, oldest on top.
#[function_component]
pub fn ToastContainer() -> Html {
    let toasts = use_context::<ToastContext>()
        .map(|context| context.ordered())
        .unwrap_or_default();

    if toasts.is_empty() {
        return html! {};
    }

    html! {
        <div
            class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full"
            role="status"
            aria-live="polite"
        >
            {for toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
            })}
        </div>
    }
}
