//! Applicant Modal
//!
//! Applicants of one drive with inline pipeline status changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlSelectElement;

use crate::context::use_app_context;
use crate::dialog;
use crate::filters::filter_applicants;
use crate::format::drive_role;
use crate::models::{Applicant, ApplicantStatus, Drive};
use crate::store::{store_update_applicant_status, use_console_store, ConsoleStateStoreFields};

const STATUS_FAILED: &str = "Status update failed";

#[component]
pub fn ApplicantModal(drive: Drive, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_console_store();
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());

    let drive_id = drive.id.clone();
    let heading = format!("{} · {}", drive.company_name, drive_role(&drive));

    // Fetch once per open; rows for any other drive are refused
    store.applicants().update(|view| view.open(&drive_id));
    on_cleanup(move || {
        store.applicants().try_update(|view| view.close());
    });
    spawn_local(async move {
        match ctx.api().drive_applicants(&drive_id).await {
            Ok(list) => {
                let count = list.applicants.len();
                let accepted = store
                    .applicants()
                    .try_update(|view| view.load(&drive_id, list.applicants))
                    .unwrap_or(false);
                if accepted {
                    log::debug!("[Applicants] {} rows for {}", count, drive_id);
                } else {
                    log::debug!("[Applicants] dropped late rows for {}", drive_id);
                }
            }
            Err(e) => log::warn!("[Applicants] load failed for {}: {}", drive_id, e),
        }
        set_loading.try_set(false);
    });

    let on_status = move |ev: leptos::ev::Event, applicant: Applicant| {
        let Some(next) = ApplicantStatus::from_label(&event_target_value(&ev)) else {
            return;
        };
        if next == applicant.status {
            return;
        }
        let select = event_target::<HtmlSelectElement>(&ev);
        let previous = applicant.status;
        spawn_local(async move {
            match ctx.api().update_applicant_status(&applicant.application_id, next).await {
                Ok(_) => {
                    log::info!("[Applicants] {} -> {}", applicant.application_id, next.label());
                    store_update_applicant_status(&store, &applicant.application_id, next);
                }
                Err(e) => {
                    select.set_value(previous.label());
                    if let Some(msg) = e.user_message(STATUS_FAILED) {
                        log::warn!("[Applicants] status change failed: {}", msg);
                        dialog::alert(STATUS_FAILED);
                    }
                }
            }
        });
    };

    let visible = move || store.applicants().with(|view| filter_applicants(view.rows(), &search.get()));

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <div>
                        <h2>"Applicants"</h2>
                        <p class="modal-sub">{heading}</p>
                    </div>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"✕"</button>
                </div>

                <input
                    class="search-input"
                    placeholder="Search by name or USN..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />

                {move || {
                    if loading.get() {
                        view! { <div class="loading"><span class="spinner" />" Loading applicants…"</div> }.into_any()
                    } else if store.applicants().with(|view| view.rows().is_empty()) {
                        view! { <div class="empty">"No applications yet."</div> }.into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"USN"</th>
                                        <th>"Name"</th>
                                        <th>"Branch"</th>
                                        <th>"ATS"</th>
                                        <th>"Resume"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=visible
                                        key=|a| (a.application_id.clone(), a.status)
                                        children=move |applicant| {
                                            let current = applicant.status;
                                            let row = applicant.clone();
                                            view! {
                                                <tr>
                                                    <td class="mono">{applicant.usn.clone()}</td>
                                                    <td>{applicant.name.clone()}</td>
                                                    <td>{applicant.branch.clone()}</td>
                                                    <td>{applicant.ats_score}</td>
                                                    <td>
                                                        {(!applicant.resume_url.is_empty()).then(|| view! {
                                                            <a href=applicant.resume_url.clone() target="_blank" rel="noreferrer">"View"</a>
                                                        })}
                                                    </td>
                                                    <td>
                                                        <select
                                                            class="status-select"
                                                            on:change=move |ev| on_status(ev, row.clone())
                                                        >
                                                            {ApplicantStatus::ALL.into_iter().map(|status| view! {
                                                                <option value=status.label() selected=status == current>
                                                                    {status.label()}
                                                                </option>
                                                            }).collect_view()}
                                                        </select>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
