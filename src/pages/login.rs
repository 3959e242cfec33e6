//! Login Page
//!
//! Three-step OTP sign-in: pick a college, request a code, verify it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Banner, BannerKind};
use crate::context::use_app_context;
use crate::filters::filter_colleges;
use crate::login::{LoginStep, LoginWizard, OTP_LEN, SEND_OTP_FAILED, VERIFY_OTP_FAILED};
use crate::models::College;
use crate::session::Session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let wizard = RwSignal::new(LoginWizard::new());
    let colleges = RwSignal::new(Vec::<College>::new());
    let (show_dropdown, set_show_dropdown) = signal(false);
    let step = Memo::new(move |_| wizard.with(|w| w.step));

    // Load colleges on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().list_colleges().await {
                Ok(list) => {
                    log::debug!("[Login] {} colleges", list.len());
                    colleges.try_set(list);
                }
                Err(e) => log::warn!("[Login] colleges unavailable: {}", e),
            }
        });
    });

    let send_otp = move || {
        let Some((email, college_id)) = wizard.try_update(|w| w.begin_send()).flatten() else {
            return;
        };
        spawn_local(async move {
            match ctx.api().send_otp(&email, &college_id).await {
                Ok(_) => {
                    wizard.try_update(|w| w.send_succeeded());
                }
                Err(e) => {
                    log::warn!("[Login] send-otp failed: {}", e);
                    wizard.try_update(|w| w.fail(e.message_or(SEND_OTP_FAILED)));
                }
            }
        });
    };

    let verify = move || {
        let Some((email, otp)) = wizard.try_update(|w| w.begin_verify()).flatten() else {
            return;
        };
        spawn_local(async move {
            match ctx.api().verify_otp(&email, &otp).await {
                Ok(login) => ctx.sign_in(Session {
                    token: login.access_token,
                    college_id: login.college_id,
                    name: login.name,
                }),
                Err(e) => {
                    log::warn!("[Login] verify-otp failed: {}", e);
                    wizard.try_update(|w| w.fail(e.message_or(VERIFY_OTP_FAILED)));
                }
            }
        });
    };

    let matching = move || {
        let search = wizard.with(|w| w.search.clone());
        colleges.with(|list| filter_colleges(list, &search).into_iter().cloned().collect::<Vec<_>>())
    };

    let loading = move || wizard.with(|w| w.loading);

    let college_step = move || {
        view! {
            <div class="form-group">
                <label class="label">"Select your institution"</label>
                <div class="college-select">
                    <input
                        class="input"
                        placeholder="Search your college…"
                        prop:value=move || wizard.with(|w| w.search.clone())
                        on:input=move |ev| {
                            wizard.update(|w| w.search = event_target_value(&ev));
                            set_show_dropdown.set(true);
                        }
                        on:focus=move |_| set_show_dropdown.set(true)
                    />
                    <Show when=move || show_dropdown.get()>
                        <div class="dropdown">
                            {move || matching().into_iter().map(|college| {
                                let name = college.name.clone();
                                let location = college.location.clone().unwrap_or_default();
                                view! {
                                    <div
                                        class="dropdown-item"
                                        on:click=move |_| {
                                            wizard.update(|w| w.select_college(college.clone()));
                                            set_show_dropdown.set(false);
                                        }
                                    >
                                        <div class="college-name">{name}</div>
                                        <div class="college-loc">{location}</div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </Show>
                </div>
                {move || wizard.with(|w| w.selected.clone()).map(|c| view! {
                    <div class="selected-college">"✓ " {c.name}</div>
                })}
            </div>
            <button
                class="btn"
                disabled=move || !wizard.with(|w| w.can_continue())
                on:click=move |_| wizard.update(|w| w.continue_to_email())
            >
                "Continue →"
            </button>
        }
    };

    let email_step = move || {
        view! {
            <div class="form-group">
                <label class="label">"TPO email address"</label>
                <input
                    class="input"
                    type="email"
                    placeholder="tpo@college.edu"
                    prop:value=move || wizard.with(|w| w.email.clone())
                    on:input=move |ev| wizard.update(|w| w.set_email(event_target_value(&ev)))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" { send_otp(); }
                    }
                />
            </div>
            <button class="btn" disabled=move || !wizard.with(|w| w.can_send()) on:click=move |_| send_otp()>
                {move || if loading() { "Sending…" } else { "Send OTP" }}
            </button>
        }
    };

    let otp_step = move || {
        view! {
            <div class="form-group">
                <label class="label">
                    "Enter the 6-digit code sent to " {move || wizard.with(|w| w.email.clone())}
                </label>
                <input
                    class="input otp-input"
                    inputmode="numeric"
                    maxlength=OTP_LEN.to_string()
                    placeholder="••••••"
                    prop:value=move || wizard.with(|w| w.otp.clone())
                    on:input=move |ev| wizard.update(|w| w.set_otp(&event_target_value(&ev)))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" { verify(); }
                    }
                />
            </div>
            <button class="btn" disabled=move || !wizard.with(|w| w.can_verify()) on:click=move |_| verify()>
                {move || if loading() { "Verifying…" } else { "Verify & Sign in" }}
            </button>
            <button class="link-btn" on:click=move |_| wizard.update(|w| w.back_to_email())>
                "← Change email"
            </button>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="logo">
                    <span class="logo-icon">"🧠"</span>
                    <span class="logo-text gradient-text">"PlacementPro AI"</span>
                </div>
                <p class="tagline">"AI-Powered Placement Management System"</p>

                <div class="steps">
                    {(0..3usize).map(|i| {
                        let class = move || {
                            let current = step.get().index();
                            if i < current { "step done" } else if i == current { "step active" } else { "step" }
                        };
                        view! { <div class=class /> }
                    }).collect_view()}
                </div>

                <Banner kind=BannerKind::Error message=Signal::derive(move || wizard.with(|w| w.error.clone())) />

                {move || match step.get() {
                    LoginStep::College => college_step().into_any(),
                    LoginStep::Email => email_step().into_any(),
                    LoginStep::Otp => otp_step().into_any(),
                }}
            </div>
        </div>
    }
}
