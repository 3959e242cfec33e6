//! Stat Card Component

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] color: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value" style=format!("color: {};", color)>{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
