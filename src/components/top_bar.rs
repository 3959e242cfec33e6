//! Top Bar Component
//!
//! Current page title, the signed-in TPO's name, and a peek at the
//! buffered log lines.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();
    let (show_logs, set_show_logs) = signal(false);

    let name = move || {
        ctx.session
            .get()
            .map(|s| s.display_name().to_string())
            .unwrap_or_default()
    };

    view! {
        <header class="topbar">
            <span class="topbar-title">{move || ctx.page.get().title()}</span>
            <div class="topbar-right">
                <button
                    class="logs-btn"
                    title="Recent log lines"
                    on:click=move |_| set_show_logs.update(|v| *v = !*v)
                >
                    "🧾"
                </button>
                <span class="topbar-user">{name}</span>
            </div>
            <Show when=move || show_logs.get()>
                <pre class="log-panel">{console_logger::recent_lines().join("\n")}</pre>
            </Show>
        </header>
    }
}
