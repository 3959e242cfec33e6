//! Drive Creator Page
//!
//! Four-tab drive form fed by AI parsing of a JD PDF, with a logo upload,
//! an eligibility preview and creation.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::api::{is_pdf_name, read_file};
use crate::components::{Banner, BannerKind, ChipSelector, FileDropZone, PageHeader, PendingWarning, TabBar};
use crate::config::{REDIRECT_DELAY_MS, TYPING_INTERVAL_MS};
use crate::context::{use_app_context, Page};
use crate::dialog;
use crate::drive_form::{DriveField, DriveForm, Eligibility, ListField, GENDER_PREFS, STEPS, WORK_LOCATIONS};
use crate::error::FormError;
use crate::typewriter::{play, Typewriter, TypingSequence};

const PARSE_FAILED: &str = "AI parsing failed. Fill form manually.";
const LOGO_FAILED: &str = "Logo upload failed.";
const ELIGIBILITY_FAILED: &str = "Eligibility check failed.";
const CREATE_FAILED: &str = "Create drive failed.";
const CREATED: &str = "Drive created! Redirecting…";

#[component]
pub fn DriveCreatorPage() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(DriveForm::new());
    let active_step = RwSignal::new(0usize);

    let jd_name = RwSignal::new(None::<String>);
    let parsing = RwSignal::new(false);
    let parsed = RwSignal::new(false);

    let logo_preview = RwSignal::new(None::<String>);
    let uploading_logo = RwSignal::new(false);

    let submitting = RwSignal::new(false);
    let success = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    let typewriter = StoredValue::new(Typewriter::new());
    on_cleanup(move || {
        typewriter.try_with_value(|t| t.cancel());
        if let Some(url) = logo_preview.try_get_untracked().flatten() {
            dialog::revoke_object_url(&url);
        }
    });

    // ========================
    // JD parsing
    // ========================

    let reveal = move |targets: Vec<(DriveField, String)>| {
        let run = typewriter.with_value(|t| t.start());
        let sequence = TypingSequence::new(targets);
        spawn_local(async move {
            let completed = play(run, sequence, TYPING_INTERVAL_MS, move |frame| {
                form.update(|f| {
                    for (field, text) in frame.updates {
                        f.animate_frame(field, text);
                    }
                    for field in frame.finished {
                        f.finish_animation(field);
                    }
                });
            })
            .await;
            if !completed {
                log::debug!("[DriveCreator] typing superseded");
            }
        });
    };

    let on_jd = Callback::new(move |file: web_sys::File| {
        let name = file.name();
        if !is_pdf_name(&name) {
            error.set(Some(FormError::NotPdf.to_string()));
            return;
        }
        jd_name.set(Some(name.clone()));
        parsing.set(true);
        parsed.set(false);
        error.set(None);

        spawn_local(async move {
            let result = match read_file(&file).await {
                Ok(upload) => ctx.api().parse_jd(upload).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(data) => {
                    log::info!("[DriveCreator] parsed {} ({} keys)", name, data.len());
                    let targets = form.try_update(|f| f.apply_parse(&data)).unwrap_or_default();
                    parsed.try_set(true);
                    reveal(targets);
                }
                Err(e) => {
                    log::warn!("[DriveCreator] parse failed: {}", e);
                    if !e.is_unauthorized() {
                        error.try_set(Some(PARSE_FAILED.to_string()));
                    }
                }
            }
            parsing.try_set(false);
        });
    });

    let jd_title = Signal::derive(move || {
        if parsing.get() {
            "AI is reading the JD…".to_string()
        } else {
            jd_name.get().unwrap_or_else(|| "Drag & drop Job Description PDF".to_string())
        }
    });

    // ========================
    // Logo
    // ========================

    let on_logo = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if let Some(old) = logo_preview.get_untracked() {
            dialog::revoke_object_url(&old);
        }
        logo_preview.set(dialog::object_url(&file));
        uploading_logo.set(true);

        spawn_local(async move {
            let result = match read_file(&file).await {
                Ok(upload) => ctx.api().upload_logo(upload).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(logo) => {
                    log::info!("[DriveCreator] logo stored at {}", logo.logo_url);
                    form.update(|f| f.logo_url = Some(logo.logo_url));
                }
                Err(e) => {
                    if let Some(msg) = e.user_message(LOGO_FAILED) {
                        error.try_set(Some(msg));
                    }
                }
            }
            uploading_logo.try_set(false);
        });
    };

    // ========================
    // Eligibility + submit
    // ========================

    let checking = move || form.with(|f| matches!(f.eligibility(), Eligibility::Checking(_)));

    let check_eligibility = move |_| {
        let college_id = ctx.api().college_id();
        let Some((revision, query)) = form.try_update(|f| {
            let revision = f.begin_eligibility_check();
            (revision, f.to_eligibility_query(&college_id))
        }) else {
            return;
        };
        error.set(None);

        spawn_local(async move {
            let result = ctx.api().check_eligibility(&query).await;
            let count = result.as_ref().ok().map(|c| c.eligible_count);
            let fresh = form.try_update(|f| f.finish_eligibility_check(revision, count)).unwrap_or(false);
            if !fresh {
                log::debug!("[DriveCreator] stale eligibility response dropped");
                return;
            }
            if let Err(e) = result {
                if let Some(msg) = e.user_message(ELIGIBILITY_FAILED) {
                    error.try_set(Some(msg));
                }
            }
        });
    };

    let submit = move |_| {
        let college_id = ctx.api().college_id();
        let draft = match form.with(|f| f.to_draft(&college_id)) {
            Ok(draft) => draft,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        submitting.set(true);
        error.set(None);

        spawn_local(async move {
            match ctx.api().create_drive(&draft).await {
                Ok(created) => {
                    log::info!("[DriveCreator] created drive {}", created.drive_id);
                    success.try_set(Some(CREATED.to_string()));
                    submitting.try_set(false);
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    if ctx.page.get_untracked() == Page::CreateDrive {
                        ctx.navigate(Page::Drives);
                    }
                }
                Err(e) => {
                    if let Some(msg) = e.user_message(CREATE_FAILED) {
                        error.try_set(Some(msg));
                    }
                    submitting.try_set(false);
                }
            }
        });
    };

    // ========================
    // Field helpers
    // ========================

    let input_class = move |field: DriveField| form.with(|f| f.state(field).input_class());
    let value_of = move |field: DriveField| form.with(|f| f.value(field).to_string());
    let pending = move |field: DriveField| Signal::derive(move || form.with(|f| f.is_pending(field)));

    let text_input = move |field: DriveField, label: &'static str, placeholder: &'static str, kind: &'static str| {
        view! {
            <div class="form-group">
                <label class="label">{label}</label>
                <input
                    class=move || input_class(field)
                    type=kind
                    placeholder=placeholder
                    prop:value=move || value_of(field)
                    on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                />
                <PendingWarning when=pending(field) />
            </div>
        }
    };

    let number_input = move |field: DriveField, label: &'static str, step: &'static str, max: &'static str| {
        view! {
            <div class="form-group">
                <label class="label">{label}</label>
                <input
                    class=move || input_class(field)
                    type="number"
                    min="0"
                    max=max
                    step=step
                    prop:value=move || value_of(field)
                    on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                />
                <PendingWarning when=pending(field) />
            </div>
        }
    };

    let select_input = move |field: DriveField, label: &'static str, options: &'static [&'static str], blank: bool| {
        view! {
            <div class="form-group">
                <label class="label">{label}</label>
                <select
                    class=move || input_class(field).replace("input", "select")
                    on:change=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                >
                    {blank.then(|| view! { <option value="">"-- Select --"</option> })}
                    {options.iter().map(|opt| view! {
                        <option value=*opt prop:selected=move || value_of(field) == *opt>{*opt}</option>
                    }).collect_view()}
                </select>
                <PendingWarning when=pending(field) />
            </div>
        }
    };

    let chips = move |field: ListField, label: &'static str| {
        view! {
            <div class="form-group">
                <label class="label">{label}</label>
                <ChipSelector
                    options=field.options()
                    selected=Signal::derive(move || form.with(|f| f.list(field).to_vec()))
                    on_toggle=Callback::new(move |item: String| form.update(|f| f.toggle(field, &item)))
                />
            </div>
        }
    };

    let step_content = move || match active_step.get() {
        0 => view! {
            <div class="animate-fade-in">
                <div class="form-row">
                    {text_input(DriveField::CompanyName, "Company Name *", "e.g. Google", "text")}
                    {text_input(DriveField::IndustryCategory, "Industry Category", "e.g. Fintech, FAANG", "text")}
                </div>
                <div class="form-row">
                    {text_input(DriveField::JobRole, "Job Role / Designation *", "e.g. SDE Intern", "text")}
                    {select_input(DriveField::WorkLocation, "Work Location", WORK_LOCATIONS, true)}
                </div>
                <div class="form-group">
                    <label class="label">"Job Description (AI Summary)"</label>
                    <textarea
                        class=move || input_class(DriveField::Description).replace("input", "textarea")
                        placeholder="AI will fill this from the PDF…"
                        prop:value=move || value_of(DriveField::Description)
                        on:input=move |ev| form.update(|f| f.set_field(DriveField::Description, event_target_value(&ev)))
                    />
                </div>
            </div>
        }
        .into_any(),
        1 => view! {
            <div class="animate-fade-in">
                <div class="form-row">
                    {text_input(DriveField::PackageCtc, "Package (CTC)", "e.g. 12 LPA", "text")}
                    {text_input(DriveField::BondDetails, "Bond / Service Agreement", "e.g. No Bond", "text")}
                </div>
                <div class="form-row">
                    {text_input(DriveField::DriveDateTime, "Drive Date & Time", "e.g. 2025-03-10, 10:00 AM", "text")}
                    {text_input(DriveField::ApplicationDeadline, "Application Deadline", "", "date")}
                </div>
                {text_input(DriveField::Venue, "Venue (Room / Meeting Link)", "e.g. Seminar Hall A or https://meet.google.com/...", "text")}
            </div>
        }
        .into_any(),
        2 => view! {
            <div class="animate-fade-in">
                <div class="form-row">
                    {number_input(DriveField::MinCgpa, "Min CGPA", "0.1", "10")}
                    {number_input(DriveField::MaxBacklogs, "Max Backlogs Allowed", "1", "")}
                </div>
                <div class="form-row">
                    {select_input(DriveField::GenderPref, "Gender Preference", GENDER_PREFS, false)}
                </div>
                {chips(ListField::EligibleBranches, "Eligible Branches")}
                {chips(ListField::TargetBatches, "Target Batches (Graduation Year)")}
                {chips(ListField::RequiredSkills, "Required Skills / Keywords")}
            </div>
        }
        .into_any(),
        _ => view! {
            <div class="animate-fade-in">
                <div class="form-row">
                    {number_input(DriveField::MinAttendancePct, "Min Attendance %", "1", "100")}
                    {number_input(DriveField::MinMockScore, "Min Mock Interview Score", "1", "100")}
                </div>
                {chips(ListField::RequiredCerts, "Required Certifications")}
            </div>
        }
        .into_any(),
    };

    let step_marker = Callback::new(move |idx: usize| {
        form.with(|f| f.step_has_pending(idx)).then(|| "•".to_string())
    });

    view! {
        <div class="page">
            <PageHeader
                title="Create Placement Drive"
                subtitle="Upload a PDF and AI auto-fills all 4 categories. Red fields need your input."
            />

            <div class="upload-bar">
                <FileDropZone
                    accept=".pdf"
                    title=jd_title
                    hint="Click to browse · PDF only"
                    busy=parsing
                    on_file=on_jd
                >
                    <Show when=move || parsed.get() && !parsing.get()>
                        <span class="parsed-badge">"✨ AI Parsed"</span>
                    </Show>
                </FileDropZone>

                <label class="logo-zone">
                    <input type="file" accept="image/*" style="display: none;" on:change=on_logo />
                    {move || match logo_preview.get() {
                        Some(url) => view! { <img src=url alt="Logo" class="logo-preview" /> }.into_any(),
                        None => view! { <span class="logo-icon">"🖼"</span> }.into_any(),
                    }}
                    <span class="logo-text">
                        {move || if uploading_logo.get() { "Uploading…" } else { "Company Logo" }}
                    </span>
                </label>
            </div>

            <TabBar tabs=&STEPS active=active_step marker=step_marker class="stepper" />

            <div class="form-panel">
                <Banner kind=BannerKind::Success message=success />
                <Banner kind=BannerKind::Error message=error />

                {step_content}

                <div class="nav-row">
                    <button
                        class="btn-secondary"
                        disabled=move || active_step.get() == 0
                        on:click=move |_| active_step.update(|s| *s = s.saturating_sub(1))
                    >
                        "‹ Back"
                    </button>
                    <Show when=move || { active_step.get() < STEPS.len() - 1 }>
                        <button class="btn-secondary" on:click=move |_| active_step.update(|s| *s += 1)>
                            "Next ›"
                        </button>
                    </Show>
                </div>
            </div>

            <div class="bottom-bar">
                {move || match form.with(|f| f.eligibility()) {
                    Eligibility::Known(count) => Some(view! {
                        <div class="elig-banner">
                            <span class="elig-icon">"👥"</span>
                            <div>
                                <div class="elig-count">{count} " Students Eligible"</div>
                                <div class="elig-label">"match current criteria"</div>
                            </div>
                        </div>
                    }),
                    _ => None,
                }}
                <button class="btn-secondary" disabled=checking on:click=check_eligibility>
                    {move || if checking() { "Checking…" } else { "Check Eligibility" }}
                </button>
                <button class="btn-primary" disabled=move || submitting.get() on:click=submit>
                    {move || if submitting.get() { "Creating…" } else { "Create Drive" }}
                </button>
            </div>
        </div>
    }
}
