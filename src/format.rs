//! Display Formatting
//!
//! Small text helpers shared by the pages.

use crate::models::{Drive, NotifyOutcome};

const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// "{applied} applied of {eligible} eligible"
pub fn ratio_text(applied: u32, eligible: u32) -> String {
    format!("{} applied of {} eligible", applied, eligible)
}

/// Progress bar width in percent, 0 when nobody is eligible
pub fn progress_pct(applied: u32, eligible: u32) -> f64 {
    if eligible == 0 {
        return 0.0;
    }
    f64::from(applied) / f64::from(eligible) * 100.0
}

pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// First 120 characters, with an ellipsis when cut
pub fn truncate_description(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(DESCRIPTION_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head)
    } else {
        head
    }
}

pub fn notify_success(outcome: &NotifyOutcome) -> String {
    format!(
        "✓ {} notified ({} emails sent, {} logged)",
        outcome.total_eligible, outcome.real_emails_sent, outcome.logged_count
    )
}

pub const NOTIFY_FAILED: &str = "⚠ Notification failed";

pub fn stars(rating: Option<u8>) -> String {
    match rating {
        Some(n) if n > 0 => "⭐".repeat(usize::from(n)),
        _ => "—".to_string(),
    }
}

/// Role, falling back to the pre-category `role` field
pub fn drive_role(drive: &Drive) -> &str {
    drive
        .job_role
        .as_deref()
        .filter(|r| !r.is_empty())
        .or(drive.role.as_deref())
        .unwrap_or("")
}

/// Eligible branches, falling back to the pre-category `branches` field
pub fn drive_branches(drive: &Drive) -> &[String] {
    if drive.eligible_branches.is_empty() {
        &drive.branches
    } else {
        &drive.eligible_branches
    }
}

/// Uppercased first letter, for logo placeholders
pub fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_and_progress() {
        assert_eq!(ratio_text(10, 50), "10 applied of 50 eligible");
        assert_eq!(progress_pct(10, 50), 20.0);
        assert_eq!(progress_pct(3, 0), 0.0);
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(16), "Good afternoon");
        assert_eq!(greeting(17), "Good evening");
    }

    #[test]
    fn test_truncate_description() {
        assert_eq!(truncate_description("short"), "short");
        let exact = "a".repeat(120);
        assert_eq!(truncate_description(&exact), exact);
        let long = "é".repeat(121);
        let cut = truncate_description(&long);
        assert_eq!(cut.chars().count(), 121);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_notify_message() {
        let outcome = NotifyOutcome {
            message: String::new(),
            total_eligible: 42,
            real_emails_sent: 40,
            logged_count: 2,
        };
        assert_eq!(notify_success(&outcome), "✓ 42 notified (40 emails sent, 2 logged)");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(Some(3)), "⭐⭐⭐");
        assert_eq!(stars(None), "—");
        assert_eq!(stars(Some(0)), "—");
    }

    #[test]
    fn test_legacy_drive_fallbacks() {
        let drive = Drive {
            role: Some("Analyst".into()),
            branches: vec!["ME".into()],
            ..Default::default()
        };
        assert_eq!(drive_role(&drive), "Analyst");
        assert_eq!(drive_branches(&drive), ["ME".to_string()]);

        let drive = Drive {
            job_role: Some("SDE".into()),
            role: Some("Analyst".into()),
            eligible_branches: vec!["CSE".into()],
            ..Default::default()
        };
        assert_eq!(drive_role(&drive), "SDE");
        assert_eq!(drive_branches(&drive), ["CSE".to_string()]);
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("google"), "G");
        assert_eq!(initial(""), "");
    }
}
