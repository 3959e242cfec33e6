//! File Drop Zone Component
//!
//! Drag-and-drop target with a click-to-browse fallback.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};

/// Drop zone that hands the first dropped or picked file to `on_file`
#[component]
pub fn FileDropZone(
    /// `accept` attribute of the hidden file input
    #[prop(into)]
    accept: String,
    /// Main line of text
    #[prop(into)]
    title: Signal<String>,
    /// Secondary hint line
    #[prop(into)]
    hint: String,
    /// Shows a spinner while true
    #[prop(optional, into)]
    busy: Signal<bool>,
    on_file: Callback<web_sys::File>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_file.run(file);
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file.run(file);
        }
        // allow re-picking the same file
        input.set_value("");
    };

    view! {
        <label
            class=move || if is_over.get() { "drop-zone dragging" } else { "drop-zone" }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <input class="file-input" type="file" accept=accept on:change=on_change />
            <span class="drop-icon">"📄"</span>
            <div>
                <div class="drop-text">{move || title.get()}</div>
                <div class="drop-sub">{hint}</div>
            </div>
            <Show when=move || busy.get()>
                <span class="spinner" />
            </Show>
            {children.map(|c| c())}
        </label>
    }
}
