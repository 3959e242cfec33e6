//! Tab Bar Component
//!
//! Row of tabs over a fixed label list; used by the drive stepper and the
//! alumni views.

use leptos::prelude::*;

/// Tab bar bound to an index signal
#[component]
pub fn TabBar(
    tabs: &'static [&'static str],
    active: RwSignal<usize>,
    /// Optional badge text per tab index
    #[prop(optional)]
    marker: Option<Callback<usize, Option<String>>>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let bar_class = class.unwrap_or_else(|| "tab-bar".to_string());

    view! {
        <div class=bar_class>
            {tabs.iter().enumerate().map(|(idx, label)| {
                let badge = move || marker.and_then(|m| m.run(idx));
                let tab_class = move || {
                    let mut c = "tab".to_string();
                    if active.get() == idx { c.push_str(" active"); }
                    if badge().is_some() { c.push_str(" has-marker"); }
                    c
                };

                view! {
                    <button type="button" class=tab_class on:click=move |_| active.set(idx)>
                        {*label}
                        {move || badge().map(|text| view! { <span class="tab-badge">{text}</span> })}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
