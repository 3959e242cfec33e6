//! Scheduler Page
//!
//! Generates interview slots for a drive, shows them by day and panel,
//! and sends the invitations.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Banner, BannerKind, PageHeader};
use crate::context::use_app_context;
use crate::dialog;
use crate::format::drive_role;
use crate::models::{InterviewSlot, SlotUpdate};
use crate::schedule::{
    format_slot_time, group_slots, panel_names, ScheduleBoard, ScheduleConfig, MIN_PANELS, MIN_SLOT_MINS,
    NOTIFY_CONFIRM,
};
use crate::store::{use_console_store, ConsoleStateStoreFields};

const NOTIFY_FAILED: &str = "Notification failed.";
const REASSIGN_FAILED: &str = "Could not move slot";

#[component]
pub fn SchedulerPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_console_store();
    let config = RwSignal::new(ScheduleConfig::new(Local::now().date_naive()));
    let board = RwSignal::new(ScheduleBoard::default());
    let (generating, set_generating) = signal(false);
    let (notifying, set_notifying) = signal(false);
    let (generated_msg, set_generated_msg) = signal(None::<String>);
    let (notified_msg, set_notified_msg) = signal(None::<String>);

    spawn_local(async move {
        match ctx.api().list_drives().await {
            Ok(drives) => {
                store.drives().try_set(drives);
            }
            Err(e) => log::warn!("[Scheduler] drives failed: {}", e),
        }
    });

    let on_generate = move |_| {
        let request = match config.with_untracked(|c| c.to_request()) {
            Ok(request) => request,
            Err(e) => {
                dialog::alert(&e.to_string());
                return;
            }
        };
        set_generating.set(true);
        set_generated_msg.set(None);
        set_notified_msg.set(None);
        board.update(|b| b.clear());
        spawn_local(async move {
            match ctx.api().generate_schedule(&request).await {
                Ok(generated) => {
                    log::info!("[Scheduler] {} slots for {}", generated.schedule.len(), request.drive_id);
                    set_generated_msg.try_set(Some(generated.message).filter(|m| !m.is_empty()));
                    board.try_update(|b| b.load(request.drive_id, generated.schedule));
                }
                Err(e) => {
                    if !e.is_unauthorized() {
                        log::warn!("[Scheduler] generate failed: {}", e);
                        dialog::alert(&format!("Scheduling failed: {}", e.reason()));
                    }
                }
            }
            set_generating.try_set(false);
        });
    };

    let on_notify = move |_| {
        let Some(drive_id) = board.with_untracked(|b| b.notify_target().map(str::to_string)) else {
            return;
        };
        if !dialog::confirm(NOTIFY_CONFIRM) {
            return;
        }
        set_notifying.set(true);
        set_notified_msg.set(None);
        spawn_local(async move {
            match ctx.api().notify_schedule(&drive_id).await {
                Ok(sent) => {
                    log::info!("[Scheduler] notified {} for {}", sent.sent_count, drive_id);
                    set_notified_msg.try_set(Some(format!("Success! Sent {} emails to students.", sent.sent_count)));
                }
                Err(e) => {
                    if !e.is_unauthorized() {
                        log::warn!("[Scheduler] notify failed: {}", e);
                        dialog::alert(NOTIFY_FAILED);
                    }
                }
            }
            set_notifying.try_set(false);
        });
    };

    let on_reassign = move |slot: InterviewSlot, panel: String| {
        if panel == slot.panel {
            return;
        }
        let update = SlotUpdate {
            drive_id: slot.drive_id.clone(),
            slot_id: slot.id.clone(),
            panel,
        };
        spawn_local(async move {
            match ctx.api().update_slot(&update).await {
                Ok(updated) => {
                    log::debug!("[Scheduler] slot {} moved to {}", updated.id, updated.panel);
                    board.try_update(|b| b.reassign(updated));
                }
                Err(e) => {
                    if let Some(msg) = e.user_message(REASSIGN_FAILED) {
                        dialog::alert(&msg);
                    }
                    // Re-render so the select shows the unchanged panel
                    board.try_update(|_| {});
                }
            }
        });
    };

    let text_input = move |label: &'static str, kind: &'static str, get: fn(&ScheduleConfig) -> String, set: fn(&mut ScheduleConfig, String)| {
        view! {
            <div class="field">
                <label>{label}</label>
                <input
                    type=kind
                    class="input"
                    prop:value=move || config.with(get)
                    on:change=move |ev| config.update(|c| set(c, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="page">
            <PageHeader
                title="Interview Scheduler"
                subtitle="Configure time slots and let AI perfectly organize the interview queue."
            />

            <div class="config-panel">
                <div class="config-grid">
                    <div class="field wide">
                        <label>"Target Placement Drive"</label>
                        <select
                            class="select"
                            on:change=move |ev| {
                                let id = event_target_value(&ev);
                                config.update(|c| c.drive_id = id);
                            }
                        >
                            <option value="">"-- Select Drive --"</option>
                            {move || store.drives().get().into_iter().map(|d| {
                                let label = format!("{} - {}", d.company_name, drive_role(&d));
                                let selected = config.with(|c| c.drive_id == d.id);
                                view! { <option value=d.id.clone() selected=selected>{label}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                    {text_input("📆 Start Date", "date", |c| c.start_date.clone(), |c, v| c.start_date = v)}
                    {text_input("📆 End Date", "date", |c| c.end_date.clone(), |c, v| c.end_date = v)}
                    {text_input("🕘 Daily Start", "time", |c| c.daily_start_time.clone(), |c, v| c.daily_start_time = v)}
                    {text_input("🕔 Daily End", "time", |c| c.daily_end_time.clone(), |c, v| c.daily_end_time = v)}
                    <div class="field">
                        <label>"🕘 Mins/Slot"</label>
                        <input
                            type="number"
                            class="input"
                            min=MIN_SLOT_MINS.to_string()
                            prop:value=move || config.with(|c| c.slot_duration_mins().to_string())
                            on:change=move |ev| config.update(|c| c.set_slot_duration(&event_target_value(&ev)))
                        />
                    </div>
                    <div class="field">
                        <label>"👥 Panels"</label>
                        <input
                            type="number"
                            class="input"
                            min=MIN_PANELS.to_string()
                            prop:value=move || config.with(|c| c.panels().to_string())
                            on:change=move |ev| config.update(|c| c.set_panels(&event_target_value(&ev)))
                        />
                    </div>
                </div>

                <div class="config-actions">
                    <button
                        class="generate-btn"
                        disabled=move || generating.get() || config.with(|c| c.drive_id.is_empty())
                        on:click=on_generate
                    >
                        {move || if generating.get() {
                            view! { <span class="spinner" />" AI is Sorting & Scheduling..." }.into_any()
                        } else {
                            view! { "🪄 Generate Smart Schedule" }.into_any()
                        }}
                    </button>
                    <Show when=move || board.with(|b| b.notify_target().is_some())>
                        <button
                            class="notify-btn"
                            disabled=move || notifying.get() || generating.get()
                            on:click=on_notify
                        >
                            {move || if notifying.get() { "Sending…" } else { "📨 Send Invitations" }}
                        </button>
                    </Show>
                </div>

                <Banner kind=BannerKind::Success message=generated_msg />
                <Banner kind=BannerKind::Success message=notified_msg />
            </div>

            {move || {
                let all = board.with(|b| b.slots().to_vec());
                let panels = panel_names(&all);
                group_slots(&all).into_iter().map(|day| {
                    let panels = panels.clone();
                    view! {
                        <div class="schedule-day">
                            <h2>"📅 "{day.date.clone()}</h2>
                            <div class="panel-grid">
                                {day.panels.into_iter().map(|group| {
                                    let panels = panels.clone();
                                    view! {
                                        <div class="panel-card">
                                            <div class="panel-name">{group.panel.clone()}</div>
                                            <div class="slot-list">
                                                {group.slots.into_iter().map(|slot| {
                                                    let times = format!(
                                                        "{} - {}",
                                                        format_slot_time(&slot.start_time),
                                                        format_slot_time(&slot.end_time)
                                                    );
                                                    let current = slot.panel.clone();
                                                    let options = panels.clone();
                                                    let moving = slot.clone();
                                                    view! {
                                                        <div class="slot">
                                                            <div class="slot-time">{times}</div>
                                                            <div class="slot-name">{slot.name.clone()}</div>
                                                            <div class="slot-usn">{slot.usn.clone()}</div>
                                                            <select
                                                                class="slot-panel"
                                                                on:change=move |ev| on_reassign(moving.clone(), event_target_value(&ev))
                                                            >
                                                                {options.into_iter().map(|name| {
                                                                    let selected = name == current;
                                                                    view! { <option value=name.clone() selected=selected>{name.clone()}</option> }
                                                                }).collect_view()}
                                                            </select>
                                                        </div>
                                                    }
                                                }).collect_view()}
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
