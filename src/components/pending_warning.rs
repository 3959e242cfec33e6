//! Pending Warning Component

use leptos::prelude::*;

/// Flag under a field the parsed document left empty
#[component]
pub fn PendingWarning(#[prop(into)] when: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || when.get()>
            <span class="pending-warning">"⚠ Pending TPO action"</span>
        </Show>
    }
}
