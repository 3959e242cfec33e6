//! Sidebar Component
//!
//! Brand, page navigation and the TPO card with logout.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    let initials = move || ctx.session.get().map(|s| s.initials()).unwrap_or_default();
    let name = move || {
        ctx.session
            .get()
            .map(|s| s.display_name().to_string())
            .unwrap_or_default()
    };
    let college = move || ctx.session.get().map(|s| s.college_id).unwrap_or_default();

    view! {
        <aside class="sidebar">
            <div class="brand">
                <span class="brand-icon">"🧠"</span>
                <span class="brand-text">"PlacementPro AI"</span>
            </div>

            <nav class="nav">
                {Page::NAV.iter().map(|page| {
                    let page = *page;
                    let is_active = move || ctx.page.get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "nav-item active" } else { "nav-item" }
                            on:click=move |_| ctx.navigate(page)
                        >
                            <span class="nav-icon">{page.icon()}</span>
                            {page.label()}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="tpo-card">
                <div class="tpo-avatar">{initials}</div>
                <div class="tpo-info">
                    <div class="tpo-name">{name}</div>
                    <div class="tpo-role">"TPO · " {college}</div>
                </div>
                <button class="logout-btn" title="Log out" on:click=move |_| ctx.logout()>
                    "⎋"
                </button>
            </div>
        </aside>
    }
}
