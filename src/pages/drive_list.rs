//! Drive List Page
//!
//! One card per drive with applicant progress, per-row notification and
//! delete, and the applicants modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::applicant_modal::ApplicantModal;
use crate::components::{ConfirmButton, PageHeader};
use crate::context::{use_app_context, Page};
use crate::dialog;
use crate::inflight::Tracker;
use crate::format::{
    drive_branches, drive_role, initial, notify_success, progress_pct, ratio_text, truncate_description,
    NOTIFY_FAILED,
};
use crate::models::Drive;
use crate::store::{use_console_store, ConsoleStateStoreFields};

const DELETE_FAILED: &str = "Failed to delete drive";

#[component]
pub fn DriveListPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_console_store();
    let (loading, set_loading) = signal(true);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    // keyed by drive id
    let notifying = RwSignal::new(Tracker::<String>::default());
    let open_drive = RwSignal::new(None::<Drive>);

    // Load drives on mount and after a delete
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match ctx.api().list_drives().await {
                Ok(loaded) => {
                    log::debug!("[DriveList] loaded {} drives, trigger={}", loaded.len(), trigger);
                    store.drives().try_set(loaded);
                }
                Err(e) => {
                    log::warn!("[DriveList] load failed: {}", e);
                    store.drives().try_set(Vec::new());
                }
            }
            set_loading.try_set(false);
        });
    });

    let on_delete = Callback::new(move |drive_id: String| {
        spawn_local(async move {
            match ctx.api().delete_drive(&drive_id).await {
                Ok(_) => {
                    log::info!("[DriveList] deleted {}", drive_id);
                    set_reload_trigger.try_update(|v| *v += 1);
                }
                Err(e) => {
                    if let Some(msg) = e.user_message(DELETE_FAILED) {
                        log::warn!("[DriveList] delete {} failed: {}", drive_id, msg);
                        dialog::alert(DELETE_FAILED);
                    }
                }
            }
        });
    });

    let on_notify = Callback::new(move |drive_id: String| {
        let started = notifying.try_update(|t| t.start(drive_id.clone())).unwrap_or(false);
        if !started {
            return;
        }
        spawn_local(async move {
            let message = match ctx.api().notify_students(&drive_id).await {
                Ok(outcome) => notify_success(&outcome),
                Err(e) => {
                    log::warn!("[DriveList] notify {} failed: {}", drive_id, e);
                    NOTIFY_FAILED.to_string()
                }
            };
            notifying.try_update(|t| t.record(drive_id, message));
        });
    });

    let on_applicants = Callback::new(move |drive: Drive| open_drive.set(Some(drive)));

    view! {
        <div class="page">
            <PageHeader title="Active Drives" subtitle="All placement drives created for your institution.">
                <button class="create-btn" on:click=move |_| ctx.navigate(Page::CreateDrive)>"＋ New Drive"</button>
            </PageHeader>

            {move || {
                if loading.get() {
                    view! { <div class="loading"><span class="spinner" />" Loading drives…"</div> }.into_any()
                } else if store.drives().with(|d| d.is_empty()) {
                    view! {
                        <div class="empty">
                            "No drives found. "
                            <button class="link-btn" on:click=move |_| ctx.navigate(Page::CreateDrive)>"Create one →"</button>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="grid">
                            <For
                                each=move || store.drives().get()
                                key=|drive| drive.id.clone()
                                children=move |drive| {
                                    let id = drive.id.clone();
                                    let busy_id = id.clone();
                                    let is_notifying = Signal::derive(move || notifying.with(|t| t.is_running(&busy_id)));
                                    let notify_message = Signal::derive(move || {
                                        notifying.with(|t| t.outcome(&id).map(str::to_string))
                                    });
                                    view! {
                                        <DriveCard
                                            drive=drive
                                            is_notifying=is_notifying
                                            notify_message=notify_message
                                            on_notify=on_notify
                                            on_delete=on_delete
                                            on_applicants=on_applicants
                                        />
                                    }
                                }
                            />
                        </div>
                    }.into_any()
                }
            }}

            {move || open_drive.get().map(|drive| view! {
                <ApplicantModal drive=drive on_close=Callback::new(move |_| open_drive.set(None)) />
            })}
        </div>
    }
}

#[component]
fn DriveCard(
    drive: Drive,
    #[prop(into)] is_notifying: Signal<bool>,
    #[prop(into)] notify_message: Signal<Option<String>>,
    on_notify: Callback<String>,
    on_delete: Callback<String>,
    on_applicants: Callback<Drive>,
) -> impl IntoView {
    let id = drive.id.clone();
    let notify_id = id.clone();
    let role = drive_role(&drive).to_string();
    let branches = drive_branches(&drive).to_vec();
    let ratio = ratio_text(drive.applied_count, drive.eligible_count);
    let progress = progress_pct(drive.applied_count, drive.eligible_count);
    let description = drive.description.as_deref().filter(|d| !d.is_empty()).map(truncate_description);

    let meta = |key: &'static str, value: Option<String>| {
        value.filter(|v| !v.is_empty()).map(|v| view! {
            <div class="meta">
                <span class="meta-key">{key}</span>
                <span class="meta-val">{v}</span>
            </div>
        })
    };

    let logo = match drive.logo_path.clone().filter(|p| !p.is_empty()) {
        Some(src) => view! { <img src=src alt="logo" class="drive-logo" /> }.into_any(),
        None => {
            let letter = initial(&drive.company_name);
            let letter = if letter.is_empty() { "C".to_string() } else { letter };
            view! { <div class="logo-placeholder">{letter}</div> }.into_any()
        }
    };

    let modal_drive = drive.clone();

    view! {
        <div class="drive-card">
            <div class="drive-header">
                <div class="drive-title">
                    {logo}
                    <div>
                        <div class="company-name">{drive.company_name.clone()}</div>
                        <div class="role">{role}</div>
                    </div>
                </div>
                <div class="drive-badges">
                    {drive.active.then(|| view! { <span class="active-badge">"● Active"</span> })}
                    {drive.industry_category.clone().filter(|c| !c.is_empty()).map(|c| view! {
                        <span class="industry-badge">{c}</span>
                    })}
                </div>
            </div>

            <div class="meta-grid">
                {meta("Package", drive.package_ctc.clone())}
                {meta("Location", drive.work_location.clone())}
                {meta("Min CGPA", Some(drive.min_cgpa.to_string()))}
                {meta("Max Backlogs", Some(drive.max_backlogs.to_string()))}
                {meta("Deadline", drive.application_deadline.clone())}
            </div>

            {(!branches.is_empty()).then(|| view! {
                <div class="branches">
                    {branches.into_iter().map(|b| view! { <span class="branch-tag">{b}</span> }).collect_view()}
                </div>
            })}
            {(!drive.target_batches.is_empty()).then(|| view! {
                <div class="branches">
                    {drive.target_batches.iter().map(|b| view! {
                        <span class="batch-tag">{format!("{} Batch", b)}</span>
                    }).collect_view()}
                </div>
            })}

            {description.map(|d| view! { <p class="description">{d}</p> })}

            <div class="progress-row">
                <div class="ratio">{ratio}</div>
                <div class="progress-track">
                    <div class="progress-fill" style=format!("width: {}%;", progress) />
                </div>
            </div>

            <div class="actions">
                <button
                    class="notify-btn"
                    disabled=move || is_notifying.get()
                    on:click=move |_| on_notify.run(notify_id.clone())
                >
                    {move || if is_notifying.get() { "Notifying…" } else { "🔔 Notify Eligible Students" }}
                </button>
                <button class="applicants-btn" on:click=move |_| on_applicants.run(modal_drive.clone())>
                    "👥 Applicants"
                </button>
                <ConfirmButton
                    class="delete-btn"
                    verb="Delete"
                    subject="drive"
                    icon="🗑 Delete"
                    disabled=is_notifying
                    on_confirm=Callback::new(move |_| on_delete.run(id.clone()))
                />
            </div>

            {move || notify_message.get().map(|msg| view! { <div class="notify-result">{msg}</div> })}
        </div>
    }
}
