//! Status Banner Component
//!
//! Inline success / error message shown above a form or list.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    fn class(&self) -> &'static str {
        match self {
            BannerKind::Success => "banner success",
            BannerKind::Error => "banner error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            BannerKind::Success => "✓",
            BannerKind::Error => "⚠",
        }
    }
}

/// Renders nothing while `message` is None
#[component]
pub fn Banner(kind: BannerKind, #[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class=kind.class()>
                    <span class="banner-icon">{kind.icon()}</span>
                    {text}
                </div>
            }
        })
    }
}
