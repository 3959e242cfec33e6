//! Student List Page
//!
//! Server-side structured filters plus a client-side text search.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::PageHeader;
use crate::context::use_app_context;
use crate::dialog;
use crate::filters::{
    batch_label, cgpa_class, filter_students, student_batch, PlacedFilter, StudentQuery, BRANCH_FILTERS,
};
use crate::format::or_dash;
use crate::models::{BranchStats, Student};
use crate::sequence::RequestSeq;

const MARK_PLACED_FAILED: &str = "Could not mark student as placed";

/// Count one more placement for `branch` until the refetched stats land
fn count_placement(stats: &mut [BranchStats], branch: &str) -> bool {
    match stats.iter_mut().find(|s| s.branch == branch) {
        Some(row) if row.placed < row.count => {
            row.placed += 1;
            true
        }
        _ => false,
    }
}

#[component]
pub fn StudentListPage() -> impl IntoView {
    let ctx = use_app_context();
    let (students, set_students) = signal(Vec::<Student>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (batches, set_batches) = signal(Vec::<i32>::new());
    let (branch_stats, set_branch_stats) = signal(Vec::<BranchStats>::new());
    let query = RwSignal::new(StudentQuery::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (stats_trigger, set_stats_trigger) = signal(0u32);
    let seq = StoredValue::new(RequestSeq::new());

    spawn_local(async move {
        match ctx.api().student_batches().await {
            Ok(years) => {
                set_batches.try_set(years);
            }
            Err(e) => log::warn!("[Students] batches failed: {}", e),
        }
    });

    // Branch breakdown, refetched after a placement
    Effect::new(move |_| {
        stats_trigger.track();
        spawn_local(async move {
            match ctx.api().student_stats().await {
                Ok(stats) => {
                    set_branch_stats.try_set(stats);
                }
                Err(e) => log::warn!("[Students] stats failed: {}", e),
            }
        });
    });

    // Refetch whenever a structured filter changes; only the newest response lands
    Effect::new(move |_| {
        let current = query.get();
        reload_trigger.track();
        let seq = seq.get_value();
        let ticket = seq.issue();
        set_loading.set(true);
        spawn_local(async move {
            let result = ctx.api().list_students(&current).await;
            if !seq.is_latest(ticket) {
                log::debug!("[Students] dropping stale response");
                return;
            }
            match result {
                Ok(list) => {
                    log::debug!("[Students] {} rows for {:?}", list.len(), current);
                    set_students.try_set(list);
                }
                Err(e) => {
                    log::warn!("[Students] list failed: {}", e);
                    set_students.try_set(Vec::new());
                }
            }
            set_loading.try_set(false);
        });
    });

    let on_mark_placed = move |usn: String, branch: String| {
        spawn_local(async move {
            match ctx.api().mark_placed(&usn).await {
                Ok(_) => {
                    log::info!("[Students] marked {} placed", usn);
                    set_branch_stats.try_update(|stats| count_placement(stats, &branch));
                    set_reload_trigger.try_update(|v| *v += 1);
                    set_stats_trigger.try_update(|v| *v += 1);
                }
                Err(e) => {
                    if let Some(msg) = e.user_message(MARK_PLACED_FAILED) {
                        dialog::alert(&msg);
                    }
                }
            }
        });
    };

    let filtered = Memo::new(move |_| students.with(|list| filter_students(list, &search.get())));

    view! {
        <div class="page">
            <PageHeader title="Student List" subtitle="Browse and filter students in your institution.">
                <div class="search-wrap">
                    <span class="search-icon">"🔍"</span>
                    <input
                        class="search-input"
                        placeholder="Search name, USN, email…"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>
                <select
                    class="select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.graduation_year = value.parse().ok());
                    }
                >
                    <option value="all">"All Batches"</option>
                    {move || batches.get().into_iter().map(|year| view! {
                        <option value=year.to_string()>{batch_label(year)}</option>
                    }).collect_view()}
                </select>
                <select
                    class="select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.branch = value);
                    }
                >
                    {BRANCH_FILTERS.iter().map(|b| view! { <option value=*b>{*b}</option> }).collect_view()}
                </select>
                <select
                    class="select"
                    on:change=move |ev| {
                        let value = PlacedFilter::from_value(&event_target_value(&ev));
                        query.update(|q| q.placed = value);
                    }
                >
                    {PlacedFilter::ALL.into_iter().map(|f| view! {
                        <option value=f.value()>{f.label()}</option>
                    }).collect_view()}
                </select>
            </PageHeader>

            <Show when=move || branch_stats.with(|s| !s.is_empty())>
                <div class="branch-stats">
                    {move || branch_stats.get().into_iter().map(|s| view! {
                        <div class="branch-stat">
                            <span class="branch-badge">{s.branch}</span>
                            <span>{format!("{} students", s.count)}</span>
                            <span>{format!("{} placed", s.placed)}</span>
                            <span>{format!("avg {:.2}", s.avg_cgpa)}</span>
                        </div>
                    }).collect_view()}
                </div>
            </Show>

            <div class="table-wrap">
                {move || {
                    if loading.get() {
                        view! { <div class="loading"><span class="spinner" />" Loading students…"</div> }.into_any()
                    } else if filtered.with(|f| f.is_empty()) {
                        view! { <div class="empty">"No students match your filters."</div> }.into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"#"</th>
                                        <th>"Name"</th>
                                        <th>"USN"</th>
                                        <th>"Branch"</th>
                                        <th>"Batch"</th>
                                        <th>"CGPA"</th>
                                        <th>"Backlogs"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {filtered.get().into_iter().enumerate().map(|(idx, s)| {
                                        let batch = student_batch(&s);
                                        let usn = s.usn.clone().filter(|u| !u.is_empty());
                                        let branch = s.branch.clone();
                                        view! {
                                            <tr>
                                                <td class="muted">{idx + 1}</td>
                                                <td>
                                                    <div class="strong">{s.name.clone()}</div>
                                                    <div class="muted small">{s.email.clone()}</div>
                                                </td>
                                                <td class="mono">{or_dash(usn.as_deref())}</td>
                                                <td><span class="branch-badge">{s.branch.clone()}</span></td>
                                                <td><span class="batch">"🎓 "{batch}</span></td>
                                                <td><span class=format!("cgpa {}", cgpa_class(s.cgpa))>{format!("{:.2}", s.cgpa)}</span></td>
                                                <td class="center">{s.backlogs}</td>
                                                <td>
                                                    {if s.placed {
                                                        view! { <span class="badge placed">"✓ Placed"</span> }.into_any()
                                                    } else {
                                                        view! {
                                                            <span class="badge not-placed">"Not Placed"</span>
                                                            {usn.map(|usn| view! {
                                                                <button class="link-btn" on:click=move |_| on_mark_placed(usn.clone(), branch.clone())>
                                                                    "Mark placed"
                                                                </button>
                                                            })}
                                                        }.into_any()
                                                    }}
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }}
            </div>

            <Show when=move || !loading.get()>
                <p class="count">
                    {move || format!(
                        "Showing {} of {} students",
                        filtered.with(|f| f.len()),
                        students.with(|s| s.len())
                    )}
                </p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(branch: &str, count: u32, placed: u32) -> BranchStats {
        BranchStats {
            branch: branch.into(),
            count,
            placed,
            avg_cgpa: 7.8,
        }
    }

    #[test]
    fn test_placement_counted_for_its_branch() {
        let mut rows = vec![stats("CSE", 120, 40), stats("ISE", 60, 10)];
        assert!(count_placement(&mut rows, "ISE"));
        assert_eq!(rows[0].placed, 40);
        assert_eq!(rows[1].placed, 11);
    }

    #[test]
    fn test_placement_never_exceeds_headcount() {
        let mut rows = vec![stats("ECE", 2, 2)];
        assert!(!count_placement(&mut rows, "ECE"));
        assert_eq!(rows[0].placed, 2);
        assert!(!count_placement(&mut rows, "MECH"));
    }
}
