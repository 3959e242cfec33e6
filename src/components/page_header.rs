//! Page Header Component

use leptos::prelude::*;

/// Title, subtitle and an optional toolbar on the right
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div>
                <h1>{title}</h1>
                <p>{subtitle}</p>
            </div>
            {children.map(|c| view! { <div class="toolbar">{c()}</div> })}
        </div>
    }
}
