//! Confirm Button Component
//!
//! Destructive row actions (delete a drive or template, revoke an alumnus)
//! ask once inline before anything is sent.

use leptos::prelude::*;

/// Where an inline confirmation stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmStep {
    #[default]
    Idle,
    Asking,
}

impl ConfirmStep {
    pub fn ask(&mut self) {
        *self = ConfirmStep::Asking;
    }

    /// Back to idle. True only when an open question was accepted.
    pub fn settle(&mut self, accepted: bool) -> bool {
        let was_asking = *self == ConfirmStep::Asking;
        *self = ConfirmStep::Idle;
        was_asking && accepted
    }
}

pub fn confirm_prompt(verb: &str, subject: &str) -> String {
    format!("{} this {}?", verb, subject)
}

/// `icon` is the trigger text; the verb is used when it is omitted
#[component]
pub fn ConfirmButton(
    #[prop(into)] class: String,
    #[prop(into)] verb: String,
    #[prop(into)] subject: String,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let step = RwSignal::new(ConfirmStep::default());
    let trigger = icon.unwrap_or_else(|| verb.clone());
    let prompt = confirm_prompt(&verb, &subject);

    let settle = move |ev: leptos::ev::MouseEvent, accepted: bool| {
        ev.stop_propagation();
        if step.try_update(|s| s.settle(accepted)).unwrap_or(false) {
            on_confirm.run(());
        }
    };

    move || match step.get() {
        ConfirmStep::Idle => view! {
            <button
                class=class.clone()
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    step.update(|s| s.ask());
                }
            >
                {trigger.clone()}
            </button>
        }
        .into_any(),
        ConfirmStep::Asking => view! {
            <span class="confirm-inline">
                <span class="confirm-text">{prompt.clone()}</span>
                <button class="confirm-btn" disabled=move || disabled.get() on:click=move |ev| settle(ev, true)>
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |ev| settle(ev, false)>"✗"</button>
            </span>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decline_sends_nothing() {
        let mut step = ConfirmStep::default();
        step.ask();
        assert!(!step.settle(false));
        assert_eq!(step, ConfirmStep::Idle);
    }

    #[test]
    fn test_accept_fires_once() {
        let mut step = ConfirmStep::default();
        step.ask();
        assert!(step.settle(true));
        // a stray second click after settling does nothing
        assert!(!step.settle(true));
    }

    #[test]
    fn test_accept_without_asking_is_ignored() {
        let mut step = ConfirmStep::default();
        assert!(!step.settle(true));
    }

    #[test]
    fn test_prompt_names_the_row() {
        assert_eq!(confirm_prompt("Delete", "drive"), "Delete this drive?");
        assert_eq!(confirm_prompt("Revoke", "alumnus"), "Revoke this alumnus?");
    }
}
