//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Alumni, Applicant, ApplicantStatus, Drive, VerificationStatus};

/// Lists shared across pages, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ConsoleState {
    /// Drives of the signed-in college
    pub drives: Vec<Drive>,
    /// Applicants of the drive open in the modal
    pub applicants: ApplicantView,
    /// Alumni awaiting verification
    pub alumni_pending: Vec<Alumni>,
    /// Every registered alumnus
    pub alumni_all: Vec<Alumni>,
}

/// Applicant rows bound to the drive whose modal is open
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicantView {
    drive_id: Option<String>,
    rows: Vec<Applicant>,
}

impl ApplicantView {
    /// Bind to a drive; rows of the previous drive are dropped
    pub fn open(&mut self, drive_id: &str) {
        self.drive_id = Some(drive_id.to_string());
        self.rows.clear();
    }

    pub fn close(&mut self) {
        self.drive_id = None;
        self.rows.clear();
    }

    /// Accept rows only for the bound drive
    pub fn load(&mut self, drive_id: &str, rows: Vec<Applicant>) -> bool {
        if self.drive_id.as_deref() != Some(drive_id) {
            return false;
        }
        self.rows = rows;
        true
    }

    pub fn rows(&self) -> &[Applicant] {
        &self.rows
    }

    pub fn set_status(&mut self, application_id: &str, status: ApplicantStatus) -> bool {
        set_applicant_status(&mut self.rows, application_id, status)
    }
}

/// Type alias for the store
pub type ConsoleStore = Store<ConsoleState>;

/// Get the console store from context
pub fn use_console_store() -> ConsoleStore {
    expect_context::<ConsoleStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Patch one applicant's status after the server accepted it
pub fn store_update_applicant_status(store: &ConsoleStore, application_id: &str, status: ApplicantStatus) {
    store.applicants().try_update(|view| view.set_status(application_id, status));
}

/// Reflect a verify or revoke without refetching the lists
pub fn store_update_alumni_status(store: &ConsoleStore, alumni_id: &str, status: VerificationStatus) {
    store.alumni_pending().try_update(|list| list.retain(|a| a.id != alumni_id));
    store.alumni_all().try_update(|list| set_alumni_status(list, alumni_id, status));
}

pub fn set_applicant_status(applicants: &mut [Applicant], application_id: &str, status: ApplicantStatus) -> bool {
    match applicants.iter_mut().find(|a| a.application_id == application_id) {
        Some(applicant) => {
            applicant.status = status;
            true
        }
        None => false,
    }
}

pub fn set_alumni_status(alumni: &mut [Alumni], alumni_id: &str, status: VerificationStatus) -> bool {
    match alumni.iter_mut().find(|a| a.id == alumni_id) {
        Some(alumnus) => {
            alumnus.verification_status = status;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant(id: &str) -> Applicant {
        Applicant {
            application_id: id.into(),
            usn: format!("USN-{}", id),
            name: format!("Student {}", id),
            branch: "CSE".into(),
            resume_url: String::new(),
            ats_score: 72,
            status: ApplicantStatus::Applied,
        }
    }

    fn alumnus(id: &str) -> Alumni {
        Alumni {
            id: id.into(),
            name: format!("Alum {}", id),
            email: String::new(),
            branch: "ISE".into(),
            graduation_year: Some(2019),
            current_company: "Infosys".into(),
            job_title: "SE".into(),
            linkedin_url: String::new(),
            verification_status: VerificationStatus::Pending,
        }
    }

    #[test]
    fn test_applicant_patched_in_place() {
        let mut list = vec![applicant("a"), applicant("b")];
        assert!(set_applicant_status(&mut list, "b", ApplicantStatus::Panel1));
        assert_eq!(list[0].status, ApplicantStatus::Applied);
        assert_eq!(list[1].status, ApplicantStatus::Panel1);
        assert!(!set_applicant_status(&mut list, "zz", ApplicantStatus::Selected));
    }

    #[test]
    fn test_late_rows_for_previous_drive_ignored() {
        let mut view = ApplicantView::default();
        view.open("drive-a");
        view.open("drive-b");
        assert!(!view.load("drive-a", vec![applicant("a1")]));
        assert!(view.rows().is_empty());

        assert!(view.load("drive-b", vec![applicant("b1")]));
        assert!(view.set_status("b1", ApplicantStatus::Selected));
        assert_eq!(view.rows()[0].status, ApplicantStatus::Selected);

        view.close();
        assert!(!view.load("drive-b", vec![applicant("b2")]));
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_store_helpers_patch_live_store() {
        let owner = Owner::new();
        owner.set();
        let store: ConsoleStore = Store::new(ConsoleState::default());
        store.applicants().update(|view| view.open("drive-a"));
        store.applicants().update(|view| {
            view.load("drive-a", vec![applicant("a")]);
        });
        store.alumni_pending().set(vec![alumnus("1")]);
        store.alumni_all().set(vec![alumnus("1")]);

        store_update_applicant_status(&store, "a", ApplicantStatus::Selected);
        store_update_alumni_status(&store, "1", VerificationStatus::Verified);

        assert_eq!(store.applicants().with(|v| v.rows()[0].status), ApplicantStatus::Selected);
        assert!(store.alumni_pending().with(|p| p.is_empty()));
        assert_eq!(
            store.alumni_all().with(|a| a[0].verification_status),
            VerificationStatus::Verified
        );
    }

    #[test]
    fn test_alumni_status_patch() {
        let mut all = vec![alumnus("1"), alumnus("2")];
        assert!(set_alumni_status(&mut all, "2", VerificationStatus::Verified));
        assert_eq!(all[1].verification_status, VerificationStatus::Verified);
        assert_eq!(all[0].verification_status, VerificationStatus::Pending);
    }
}
