//! Chip Selector Component
//!
//! Multi-select toggle chips.

use leptos::prelude::*;

/// Toggle chips for a fixed set of options
#[component]
pub fn ChipSelector(
    options: &'static [&'static str],
    #[prop(into)] selected: Signal<Vec<String>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="chip-grid">
            {options.iter().map(|option| {
                let value = option.to_string();
                let is_selected = move || selected.with(|s| s.iter().any(|v| v == option));
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "chip selected" } else { "chip" }
                        on:click=move |_| on_toggle.run(value.clone())
                    >
                        {*option}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
