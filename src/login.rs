//! Login Wizard
//!
//! College → Email → OTP, forward only, with one manual step back from OTP.

use crate::models::College;

pub const OTP_LEN: usize = 6;
pub const SEND_OTP_FAILED: &str = "Failed to send OTP. Check your email.";
pub const VERIFY_OTP_FAILED: &str = "Invalid OTP. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginStep {
    #[default]
    College,
    Email,
    Otp,
}

impl LoginStep {
    pub fn index(&self) -> usize {
        match self {
            LoginStep::College => 0,
            LoginStep::Email => 1,
            LoginStep::Otp => 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginWizard {
    pub step: LoginStep,
    pub search: String,
    pub selected: Option<College>,
    pub email: String,
    pub otp: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl LoginWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_college(&mut self, college: College) {
        self.selected = Some(college);
        self.search.clear();
        self.error = None;
    }

    pub fn can_continue(&self) -> bool {
        self.step == LoginStep::College && self.selected.is_some() && !self.loading
    }

    pub fn continue_to_email(&mut self) {
        if self.can_continue() {
            self.step = LoginStep::Email;
        }
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.error = None;
    }

    pub fn can_send(&self) -> bool {
        self.step == LoginStep::Email && !self.email.trim().is_empty() && !self.loading
    }

    /// Mark the send in flight; returns `(email, college_id)` to post
    pub fn begin_send(&mut self) -> Option<(String, String)> {
        if !self.can_send() {
            return None;
        }
        let college_id = self.selected.as_ref()?.college_id.clone();
        self.loading = true;
        self.error = None;
        Some((self.email.trim().to_string(), college_id))
    }

    pub fn send_succeeded(&mut self) {
        self.loading = false;
        if self.step == LoginStep::Email {
            self.step = LoginStep::Otp;
        }
    }

    /// Keep only digits, at most six
    pub fn set_otp(&mut self, raw: &str) {
        self.otp = raw.chars().filter(char::is_ascii_digit).take(OTP_LEN).collect();
        self.error = None;
    }

    pub fn can_verify(&self) -> bool {
        self.step == LoginStep::Otp && self.otp.len() == OTP_LEN && !self.loading
    }

    /// Mark the verification in flight; returns `(email, otp)` to post
    pub fn begin_verify(&mut self) -> Option<(String, String)> {
        if !self.can_verify() {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some((self.email.trim().to_string(), self.otp.clone()))
    }

    /// Stay on the current step with everything entered so far
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn back_to_email(&mut self) {
        if self.step == LoginStep::Otp && !self.loading {
            self.step = LoginStep::Email;
            self.otp.clear();
            self.error = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college() -> College {
        College {
            college_id: "NMAMIT".into(),
            name: "NMAM Institute of Technology".into(),
            location: Some("Nitte".into()),
            established: Some(1986),
        }
    }

    fn at_otp_step() -> LoginWizard {
        let mut wizard = LoginWizard::new();
        wizard.select_college(college());
        wizard.continue_to_email();
        wizard.set_email("tpo@nmamit.in".into());
        wizard.begin_send();
        wizard.send_succeeded();
        wizard
    }

    #[test]
    fn test_cannot_continue_without_college() {
        let mut wizard = LoginWizard::new();
        wizard.continue_to_email();
        assert_eq!(wizard.step, LoginStep::College);

        wizard.search = "nmam".into();
        wizard.select_college(college());
        assert!(wizard.search.is_empty());
        wizard.continue_to_email();
        assert_eq!(wizard.step, LoginStep::Email);
    }

    #[test]
    fn test_send_otp_flow() {
        let mut wizard = LoginWizard::new();
        wizard.select_college(college());
        wizard.continue_to_email();
        assert!(!wizard.can_send());
        wizard.set_email(" tpo@nmamit.in ".into());
        assert_eq!(
            wizard.begin_send(),
            Some(("tpo@nmamit.in".to_string(), "NMAMIT".to_string()))
        );
        // no double submit while in flight
        assert_eq!(wizard.begin_send(), None);
        wizard.send_succeeded();
        assert_eq!(wizard.step, LoginStep::Otp);
    }

    #[test]
    fn test_send_failure_keeps_step_and_email() {
        let mut wizard = LoginWizard::new();
        wizard.select_college(college());
        wizard.continue_to_email();
        wizard.set_email("tpo@nmamit.in".into());
        wizard.begin_send();
        wizard.fail(SEND_OTP_FAILED.into());
        assert_eq!(wizard.step, LoginStep::Email);
        assert_eq!(wizard.email, "tpo@nmamit.in");
        assert!(!wizard.loading);
        assert_eq!(wizard.error.as_deref(), Some(SEND_OTP_FAILED));

        wizard.set_email("tpo@nmamit.ac.in".into());
        assert_eq!(wizard.error, None);
    }

    #[test]
    fn test_otp_requires_six_digits() {
        let mut wizard = at_otp_step();
        wizard.set_otp("12345");
        assert!(!wizard.can_verify());
        wizard.set_otp("123456");
        assert!(wizard.can_verify());
    }

    #[test]
    fn test_otp_sanitized() {
        let mut wizard = at_otp_step();
        wizard.set_otp("12a-34 5678");
        assert_eq!(wizard.otp, "123456");
    }

    #[test]
    fn test_verify_failure_keeps_otp() {
        let mut wizard = at_otp_step();
        wizard.set_otp("654321");
        assert_eq!(
            wizard.begin_verify(),
            Some(("tpo@nmamit.in".to_string(), "654321".to_string()))
        );
        assert!(!wizard.can_verify());
        wizard.fail(VERIFY_OTP_FAILED.into());
        assert_eq!(wizard.step, LoginStep::Otp);
        assert_eq!(wizard.otp, "654321");
        assert!(wizard.can_verify());
    }

    #[test]
    fn test_back_clears_otp() {
        let mut wizard = at_otp_step();
        wizard.set_otp("123");
        wizard.fail("boom".into());
        wizard.back_to_email();
        assert_eq!(wizard.step, LoginStep::Email);
        assert!(wizard.otp.is_empty());
        assert_eq!(wizard.error, None);
        assert_eq!(wizard.email, "tpo@nmamit.in");
    }
}
