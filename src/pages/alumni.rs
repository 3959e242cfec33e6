//! Alumni Management Page
//!
//! Verification queue, alumni directory, and per-alumnus activity detail.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ConfirmButton, StatCard, TabBar};
use crate::context::use_app_context;
use crate::dialog;
use crate::filters::filter_alumni;
use crate::format::{or_dash, stars};
use crate::models::{Alumni, AlumniDetail, AlumniStats, VerificationStatus, VerifyAction};
use crate::sequence::RequestSeq;
use crate::store::{store_update_alumni_status, use_console_store, ConsoleStateStoreFields};

const TABS: &[&str] = &["Verification Queue", "Alumni Directory"];
const ACTION_FAILED: &str = "Action failed";

/// Detail panel of the expanded row
#[derive(Debug, Clone, Default, PartialEq)]
enum DetailState {
    #[default]
    Loading,
    Loaded(AlumniDetail),
    Failed,
}

/// At most one directory row is expanded at a time
#[derive(Debug, Clone, Default, PartialEq)]
struct ExpandedDetail {
    open: Option<String>,
    state: DetailState,
}

impl ExpandedDetail {
    fn is_open(&self, alumni_id: &str) -> bool {
        self.open.as_deref() == Some(alumni_id)
    }

    /// Collapse the row if it is open, otherwise open it in the loading state.
    /// Returns true when the detail needs fetching.
    fn toggle(&mut self, alumni_id: &str) -> bool {
        self.state = DetailState::Loading;
        if self.is_open(alumni_id) {
            self.open = None;
            return false;
        }
        self.open = Some(alumni_id.to_string());
        true
    }

    /// Fill the panel if `alumni_id` is still the expanded row
    fn resolve(&mut self, alumni_id: &str, state: DetailState) -> bool {
        if !self.is_open(alumni_id) {
            return false;
        }
        self.state = state;
        true
    }
}

fn stat_text(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())
}

fn company_line(a: &Alumni) -> String {
    format!("{} · {}", a.current_company, a.job_title)
}

fn year_text(a: &Alumni) -> String {
    a.graduation_year.map(|y| y.to_string()).unwrap_or_default()
}

#[component]
pub fn AlumniPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_console_store();
    let tab = RwSignal::new(0usize);
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let stats = RwSignal::new(AlumniStats::default());
    let panel = RwSignal::new(ExpandedDetail::default());
    let detail_seq = StoredValue::new(RequestSeq::new());

    let load_stats = move || {
        spawn_local(async move {
            match ctx.api().alumni_stats().await {
                Ok(s) => {
                    stats.try_set(s);
                }
                Err(e) => log::warn!("[Alumni] stats failed: {}", e),
            }
        });
    };

    // Initial load of both lists and the stats
    spawn_local(async move {
        let api = ctx.api();
        let (pending, all, s) = futures::join!(api.pending_alumni(), api.all_alumni(), api.alumni_stats());
        match pending {
            Ok(list) => {
                store.alumni_pending().try_set(list);
            }
            Err(e) => log::warn!("[Alumni] pending queue failed: {}", e),
        }
        match all {
            Ok(list) => {
                store.alumni_all().try_set(list);
            }
            Err(e) => log::warn!("[Alumni] directory failed: {}", e),
        }
        match s {
            Ok(s) => {
                stats.try_set(s);
            }
            Err(e) => log::warn!("[Alumni] stats failed: {}", e),
        }
        set_loading.try_set(false);
    });

    let apply_status = move |alumni_id: String, status: VerificationStatus| {
        store_update_alumni_status(&store, &alumni_id, status);
        load_stats();
    };

    let on_verify = move |alumni_id: String, action: VerifyAction| {
        spawn_local(async move {
            match ctx.api().verify_alumni(&alumni_id, action).await {
                Ok(_) => {
                    log::info!("[Alumni] {} {}", action.as_query(), alumni_id);
                    apply_status(alumni_id, action.resulting_status());
                }
                Err(e) => {
                    if let Some(msg) = e.user_message(ACTION_FAILED) {
                        dialog::alert(&msg);
                    }
                }
            }
        });
    };

    let on_revoke = move |alumni_id: String| {
        spawn_local(async move {
            match ctx.api().revoke_alumni(&alumni_id).await {
                Ok(_) => {
                    log::info!("[Alumni] revoked {}", alumni_id);
                    apply_status(alumni_id, VerificationStatus::Rejected);
                }
                Err(e) => {
                    if let Some(msg) = e.user_message(ACTION_FAILED) {
                        dialog::alert(&msg);
                    }
                }
            }
        });
    };

    let toggle_detail = move |alumni_id: String| {
        let seq = detail_seq.get_value();
        if !panel.try_update(|p| p.toggle(&alumni_id)).unwrap_or(false) {
            seq.invalidate();
            return;
        }
        let ticket = seq.issue();
        spawn_local(async move {
            let state = match ctx.api().alumni_detail(&alumni_id).await {
                Ok(d) => DetailState::Loaded(d),
                Err(e) => {
                    log::warn!("[Alumni] detail failed for {}: {}", alumni_id, e);
                    DetailState::Failed
                }
            };
            let applied = seq.is_latest(ticket)
                && panel.try_update(|p| p.resolve(&alumni_id, state)).unwrap_or(false);
            if !applied {
                log::debug!("[Alumni] dropping detail for {}", alumni_id);
            }
        });
    };

    let pending_rows = Memo::new(move |_| store.alumni_pending().with(|list| filter_alumni(list, &search.get())));
    let all_rows = Memo::new(move |_| store.alumni_all().with(|list| filter_alumni(list, &search.get())));

    let pending_view = move || {
        if pending_rows.with(|r| r.is_empty()) {
            return view! { <div class="empty">"✅ No pending applications"</div> }.into_any();
        }
        view! {
            <div class="table-wrap">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th><th>"Email"</th><th>"Branch"</th><th>"Year"</th>
                            <th>"Company"</th><th>"LinkedIn"</th><th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {pending_rows.get().into_iter().map(|a| {
                            let approve_id = a.id.clone();
                            let reject_id = a.id.clone();
                            view! {
                                <tr>
                                    <td class="strong">{a.name.clone()}</td>
                                    <td>{a.email.clone()}</td>
                                    <td>{a.branch.clone()}</td>
                                    <td>{year_text(&a)}</td>
                                    <td>{company_line(&a)}</td>
                                    <td>
                                        {if a.linkedin_url.is_empty() {
                                            view! { <span class="muted">"—"</span> }.into_any()
                                        } else {
                                            view! { <a href=a.linkedin_url.clone() target="_blank" rel="noreferrer" class="link">"View ↗"</a> }.into_any()
                                        }}
                                    </td>
                                    <td>
                                        <div class="action-row">
                                            <button class="btn-approve" on:click=move |_| on_verify(approve_id.clone(), VerifyAction::Approve)>
                                                "Approve"
                                            </button>
                                            <button class="btn-reject" on:click=move |_| on_verify(reject_id.clone(), VerifyAction::Reject)>
                                                "Reject"
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        }.into_any()
    };

    let detail_view = move || match panel.with(|p| p.state.clone()) {
        DetailState::Loading => view! { <div class="detail-loading">"Loading…"</div> }.into_any(),
        DetailState::Failed => view! { <div class="muted">"Failed to load detail."</div> }.into_any(),
        DetailState::Loaded(d) => {
            let completed = d.completed_count();
            let total = d.applicants.len();
            view! {
                <div class="detail-panel">
                    <div class="detail-stats">
                        <div class="mini-stat"><span>{d.jobs_count}</span><label>"Jobs Posted"</label></div>
                        <div class="mini-stat"><span>{d.sessions_count}</span><label>"Sessions Created"</label></div>
                        <div class="mini-stat"><span>{total}</span><label>"Total Applicants"</label></div>
                        <div class="mini-stat"><span>{completed}</span><label>"Sessions Completed"</label></div>
                    </div>
                    {(total > 0).then(|| view! {
                        <p class="detail-subhead">"Student Applications"</p>
                        <table class="inner-table">
                            <thead>
                                <tr><th>"Student USN"</th><th>"Student Name"</th><th>"Status"</th><th>"Rating"</th><th>"Remarks"</th></tr>
                            </thead>
                            <tbody>
                                {d.applicants.into_iter().map(|app| view! {
                                    <tr>
                                        <td>{app.student_usn.clone()}</td>
                                        <td>{or_dash(app.student_name.as_deref())}</td>
                                        <td><span class=format!("status-pill app-{}", app.status.to_lowercase())>{app.status.clone()}</span></td>
                                        <td>{stars(app.alumni_rating)}</td>
                                        <td class="muted">{or_dash(app.alumni_remarks.as_deref())}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    })}
                </div>
            }.into_any()
        }
    };

    let directory_view = move || {
        if all_rows.with(|r| r.is_empty()) {
            return view! { <div class="empty">"No alumni registered yet."</div> }.into_any();
        }
        view! {
            <div class="table-wrap">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th><th>"Email"</th><th>"Company"</th>
                            <th>"Branch / Year"</th><th>"Status"</th><th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {all_rows.get().into_iter().map(|a| {
                            let row_id = a.id.clone();
                            let is_open = {
                                let id = a.id.clone();
                                move || panel.with(|p| p.is_open(&id))
                            };
                            let toggle_id = a.id.clone();
                            let status = a.verification_status;
                            let pill_style = format!(
                                "background: {c}22; color: {c}; box-shadow: 0 0 0 1px {c}44;",
                                c = status.color()
                            );
                            let action = if status == VerificationStatus::Verified {
                                let id = row_id.clone();
                                view! {
                                    <ConfirmButton
                                        class="btn-revoke"
                                        verb="Revoke"
                                        subject="alumnus"
                                        on_confirm=Callback::new(move |_| on_revoke(id.clone()))
                                    />
                                }.into_any()
                            } else {
                                let id = row_id.clone();
                                view! {
                                    <button class="btn-approve" on:click=move |_| on_verify(id.clone(), VerifyAction::Approve)>
                                        "Approve"
                                    </button>
                                }.into_any()
                            };
                            let open_row = is_open.clone();
                            let open_arrow = is_open.clone();
                            view! {
                                <tr class=move || if open_row() { "expanded-row" } else { "" }>
                                    <td>
                                        <button class="expand-btn" on:click=move |_| toggle_detail(toggle_id.clone())>
                                            {move || if open_arrow() { "▾ " } else { "▸ " }}
                                            {a.name.clone()}
                                        </button>
                                    </td>
                                    <td>{a.email.clone()}</td>
                                    <td>{company_line(&a)}</td>
                                    <td>{format!("{} · {}", a.branch, year_text(&a))}</td>
                                    <td><span class="status-pill" style=pill_style>{status.label()}</span></td>
                                    <td>{action}</td>
                                </tr>
                                <Show when=is_open.clone()>
                                    <tr>
                                        <td colspan="6" class="detail-cell">{detail_view}</td>
                                    </tr>
                                </Show>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        }.into_any()
    };

    view! {
        <div class="page alumni">
            <div class="stats-grid">
                <StatCard label="Total Verified" value=Signal::derive(move || stat_text(stats.with(|s| s.total_verified))) color="#10b981" />
                <StatCard label="Pending Review" value=Signal::derive(move || stat_text(stats.with(|s| s.pending_verification))) color="#f59e0b" />
                <StatCard label="Jobs Posted" value=Signal::derive(move || stat_text(stats.with(|s| s.total_jobs_posted))) color="#6366f1" />
                <StatCard label="Sessions" value=Signal::derive(move || stat_text(stats.with(|s| s.total_sessions))) color="#06b6d4" />
                <StatCard label="Sessions Completed" value=Signal::derive(move || stat_text(stats.with(|s| s.sessions_completed))) color="#8b5cf6" />
            </div>

            <div class="alumni-toolbar">
                <TabBar
                    tabs=TABS
                    active=tab
                    marker=Callback::new(move |idx: usize| {
                        let count = store.alumni_pending().with(|p| p.len());
                        (idx == 0 && count > 0).then(|| count.to_string())
                    })
                />
                <input
                    class="search-input"
                    placeholder="Search name, email, company…"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            {move || {
                if loading.get() {
                    view! { <div class="empty">"Loading…"</div> }.into_any()
                } else if tab.get() == 0 {
                    pending_view().into_any()
                } else {
                    directory_view().into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alumnus(year: Option<i32>) -> Alumni {
        Alumni {
            id: "a1".into(),
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            branch: "CSE".into(),
            graduation_year: year,
            current_company: "Infosys".into(),
            job_title: "Senior Engineer".into(),
            linkedin_url: String::new(),
            verification_status: VerificationStatus::Verified,
        }
    }

    #[test]
    fn test_row_text() {
        assert_eq!(company_line(&alumnus(Some(2019))), "Infosys · Senior Engineer");
        assert_eq!(year_text(&alumnus(Some(2019))), "2019");
        assert_eq!(year_text(&alumnus(None)), "");
    }

    #[test]
    fn test_toggle_opens_then_collapses() {
        let mut panel = ExpandedDetail::default();
        assert!(panel.toggle("a1"));
        assert!(panel.is_open("a1"));
        assert!(!panel.toggle("a1"));
        assert!(!panel.is_open("a1"));
        assert_eq!(panel.state, DetailState::Loading);
    }

    #[test]
    fn test_detail_for_collapsed_row_dropped() {
        let mut panel = ExpandedDetail::default();
        panel.toggle("a1");
        // switching rows leaves the first request outstanding
        assert!(panel.toggle("a2"));
        assert!(!panel.resolve("a1", DetailState::Failed));
        assert_eq!(panel.state, DetailState::Loading);

        assert!(panel.resolve("a2", DetailState::Failed));
        assert_eq!(panel.state, DetailState::Failed);

        panel.toggle("a2");
        assert!(!panel.resolve("a2", DetailState::Failed));
        assert_eq!(panel.state, DetailState::Loading);
    }

    #[test]
    fn test_missing_stats_render_as_dash() {
        assert_eq!(stat_text(None), "—");
        assert_eq!(stat_text(Some(0)), "0");
        assert_eq!(stat_text(Some(12)), "12");
    }
}
