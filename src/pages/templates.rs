//! Template Manager Page
//!
//! Upload DOCX or AI-converted PDF resume templates and manage the gallery.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{read_file, TemplateUpload};
use crate::components::{Banner, BannerKind, ConfirmButton, FileDropZone, PageHeader};
use crate::context::use_app_context;
use crate::dialog;
use crate::filters::filter_templates;
use crate::inflight::Tracker;
use crate::models::{ResumeTemplate, TemplateKind};

const UPLOAD_FAILED: &str = "Upload failed";
const DELETE_FAILED: &str = "Failed to delete template.";

#[component]
pub fn TemplatesPage() -> impl IntoView {
    let ctx = use_app_context();
    let (templates, set_templates) = signal(Vec::<ResumeTemplate>::new());
    let (search, set_search) = signal(String::new());
    let (success, set_success) = signal(None::<String>);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let uploading = RwSignal::new(Tracker::<TemplateUpload>::default());

    Effect::new(move |_| {
        reload_trigger.track();
        spawn_local(async move {
            match ctx.api().list_templates().await {
                Ok(list) => {
                    set_templates.try_set(list);
                }
                Err(e) => log::warn!("[Templates] load failed: {}", e),
            }
        });
    });

    let on_upload = move |kind: TemplateUpload, file: web_sys::File| {
        let started = uploading.try_update(|t| t.start(kind)).unwrap_or(false);
        if !started {
            return;
        }
        set_success.set(None);
        spawn_local(async move {
            let result = match read_file(&file).await {
                Ok(upload) => ctx.api().upload_template(kind, upload).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(created) => {
                    log::info!("[Templates] {} template {} created", kind.label(), created.template_id);
                    set_success.try_set(Some(format!(
                        "Success! {} template successfully processed and activated.",
                        kind.label()
                    )));
                    set_reload_trigger.try_update(|v| *v += 1);
                }
                Err(e) => {
                    if !e.is_unauthorized() {
                        log::warn!("[Templates] {} upload failed: {}", kind.label(), e);
                        dialog::alert(&format!("{}: {}", UPLOAD_FAILED, e.reason()));
                    }
                }
            }
            uploading.try_update(|t| t.finish(&kind));
        });
    };

    let on_delete = move |template_id: String| {
        spawn_local(async move {
            match ctx.api().delete_template(&template_id).await {
                Ok(_) => {
                    set_reload_trigger.try_update(|v| *v += 1);
                }
                Err(e) => {
                    if let Some(msg) = e.user_message(DELETE_FAILED) {
                        log::warn!("[Templates] delete failed: {}", msg);
                        dialog::alert(DELETE_FAILED);
                    }
                }
            }
        });
    };

    let uploader = move |kind: TemplateUpload, heading: &'static str, blurb: &'static str, action: &'static str| {
        let busy = Signal::derive(move || uploading.with(|t| t.is_running(&kind)));
        view! {
            <div class=format!("uploader uploader-{}", kind.accept().trim_start_matches('.'))>
                <h2>{heading}</h2>
                <p class="uploader-blurb">{blurb}</p>
                <FileDropZone
                    accept=kind.accept()
                    title=Signal::derive(move || action.to_string())
                    hint=format!("{} files only", kind.accept())
                    busy=busy
                    on_file=Callback::new(move |file| on_upload(kind, file))
                />
            </div>
        }
    };

    let visible = Memo::new(move |_| templates.with(|list| filter_templates(list, &search.get())));

    view! {
        <div class="page">
            <PageHeader title="Resume Templates" subtitle="Upload dynamic templates for your students to use in their app." />

            <Banner kind=BannerKind::Success message=success />

            <div class="uploader-grid">
                {uploader(
                    TemplateUpload::Docx,
                    "📄 Standard Word (.docx)",
                    "Upload a designed Word document containing tags like {{ name }}, {{ cgpa }}, or {% for p in projects %}.",
                    "Upload DOCX",
                )}
                {uploader(
                    TemplateUpload::AiPdf,
                    "🪄 AI Auto-Template (.pdf)",
                    "Upload a static PDF resume. The AI strips the personal data and converts it into a dynamic HTML template.",
                    "Generate via AI",
                )}
            </div>

            <div class="gallery-header">
                <h2>
                    "Template Gallery "
                    <span class="count-pill">{move || format!("{} Active", templates.with(|t| t.len()))}</span>
                </h2>
                <input
                    class="search-input"
                    placeholder="Search templates…"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            {move || {
                if templates.with(|t| t.is_empty()) {
                    view! { <div class="empty">"No templates activated yet. Upload one above!"</div> }.into_any()
                } else {
                    view! {
                        <div class="gallery">
                            <For
                                each=move || visible.get()
                                key=|t| t.id.clone()
                                children=move |template| {
                                    let id = template.id.clone();
                                    let thumb = template.thumb_url.clone();
                                    let badge_class = match template.kind {
                                        TemplateKind::Docx => "kind-badge docx",
                                        _ => "kind-badge html",
                                    };
                                    view! {
                                        <div class="template-card">
                                            <div class="thumb">
                                                {if thumb.is_empty() {
                                                    view! { <div class="no-preview">"No Preview"</div> }.into_any()
                                                } else {
                                                    view! { <img src=thumb.clone() alt="Template Preview" /> }.into_any()
                                                }}
                                                <div class=badge_class>{template.kind.badge()}</div>
                                            </div>
                                            <div class="template-meta">
                                                <div class="template-name" title=template.name.clone()>{template.name.clone()}</div>
                                                <div class="template-actions">
                                                    {(!thumb.is_empty()).then(|| view! {
                                                        <a class="preview-btn" href=thumb.clone() target="_blank" rel="noreferrer">"👁 Preview"</a>
                                                    })}
                                                    <ConfirmButton
                                                        class="delete-btn"
                                                        verb="Delete"
                                                        subject="template"
                                                        icon="🗑"
                                                        on_confirm=Callback::new(move |_| on_delete(id.clone()))
                                                    />
                                                </div>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
