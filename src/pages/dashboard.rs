//! Dashboard Page
//!
//! Greeting, headline numbers and the TPO's profile line.

use chrono::Timelike;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::StatCard;
use crate::context::use_app_context;
use crate::format::greeting;
use crate::models::{DashboardStats, TpoProfile};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let (stats, set_stats) = signal(DashboardStats::default());
    let (loading, set_loading) = signal(true);
    let (profile, set_profile) = signal::<Option<TpoProfile>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.api();
            match api.dashboard_stats().await {
                Ok(loaded) => {
                    set_stats.try_set(loaded);
                }
                // zeros are shown instead
                Err(e) => log::warn!("[Dashboard] stats failed: {}", e),
            }
            set_loading.try_set(false);
            match api.profile().await {
                Ok(loaded) => {
                    set_profile.try_set(Some(loaded));
                }
                Err(e) => log::debug!("[Dashboard] profile unavailable: {}", e),
            }
        });
    });

    let hour = chrono::Local::now().hour();
    let first_name = move || {
        ctx.session
            .get()
            .map(|s| s.first_name().to_string())
            .unwrap_or_else(|| "TPO".to_string())
    };

    let stat = move |pick: fn(&DashboardStats) -> u32| {
        Signal::derive(move || {
            if loading.get() { "—".to_string() } else { stats.with(pick).to_string() }
        })
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>{greeting(hour)} ", " {first_name} " 👋"</h1>
                <p>"Here's your placement overview for today."</p>
            </div>

            {move || profile.get().map(|p| view! {
                <p class="profile-line">{p.name} " · " {p.email} " · " {p.college_id}</p>
            })}

            <div class="stats-grid">
                <StatCard label="Total Eligible" value=stat(|s| s.total_eligible) color="#8b5cf6" />
                <StatCard label="Active Drives" value=stat(|s| s.active_drives) color="#3b82f6" />
                <StatCard label="Students Placed" value=stat(|s| s.placed_students) color="#14b8a6" />
                <StatCard label="Total Students" value=stat(|s| s.total_students) color="#f59e0b" />
            </div>

            <h2 class="section-title">"Quick Actions"</h2>
            <div class="empty">
                "🚀 Head to " <strong>"Create Drive"</strong> " to upload a JD and let AI auto-fill the form."
                <br />
                "Then use " <strong>"Check Eligibility"</strong> " to instantly see how many students qualify."
            </div>
        </div>
    }
}
