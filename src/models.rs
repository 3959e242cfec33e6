//! Frontend Models
//!
//! Data structures matching the placement backend's JSON.

use serde::{Deserialize, Serialize};

// ========================
// TPO
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct College {
    pub college_id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub established: Option<i32>,
}

/// Result of a successful OTP verification
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VerifiedLogin {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub college_id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_students: u32,
    #[serde(default)]
    pub placed_students: u32,
    #[serde(default)]
    pub active_drives: u32,
    #[serde(default)]
    pub total_eligible: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TpoProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub college_id: String,
}

/// Plain `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

// ========================
// Drives
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub college_id: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub logo_path: Option<String>,

    // Category 1: Who & Where
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry_category: Option<String>,
    #[serde(default)]
    pub work_location: Option<String>,
    #[serde(default)]
    pub job_role: Option<String>,

    // Category 2: Logistics
    #[serde(default)]
    pub package_ctc: Option<String>,
    #[serde(default)]
    pub bond_details: Option<String>,
    #[serde(default)]
    pub drive_date_time: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub application_deadline: Option<String>,

    // Category 3: Filters
    #[serde(default)]
    pub min_cgpa: f64,
    #[serde(default)]
    pub max_backlogs: i64,
    #[serde(default)]
    pub eligible_branches: Vec<String>,
    #[serde(default)]
    pub target_batches: Vec<String>,
    #[serde(default)]
    pub gender_pref: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,

    // Category 4: Add-ons
    #[serde(default)]
    pub required_certs: Vec<String>,
    #[serde(default)]
    pub min_attendance_pct: f64,
    #[serde(default)]
    pub min_mock_score: f64,

    #[serde(default)]
    pub description: Option<String>,

    // Drives created by older clients
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub branches: Vec<String>,

    // Computed by the server on list
    #[serde(default)]
    pub eligible_count: u32,
    #[serde(default)]
    pub applied_count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogoUpload {
    pub logo_url: String,
    #[serde(default)]
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DriveCreated {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub drive_id: String,
}

/// Body posted to `/drive/create`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriveDraft {
    pub college_id: String,
    pub active: bool,
    pub logo_path: Option<String>,
    pub company_name: String,
    pub industry_category: String,
    pub work_location: String,
    pub job_role: String,
    pub package_ctc: String,
    pub bond_details: String,
    pub drive_date_time: String,
    pub venue: String,
    pub application_deadline: String,
    pub min_cgpa: f64,
    pub max_backlogs: i64,
    pub eligible_branches: Vec<String>,
    pub target_batches: Vec<String>,
    pub gender_pref: String,
    pub required_skills: Vec<String>,
    pub required_certs: Vec<String>,
    pub min_attendance_pct: f64,
    pub min_mock_score: f64,
    pub description: String,
}

/// Filter subset posted to `/drive/check-eligibility`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityQuery {
    pub college_id: String,
    pub min_cgpa: f64,
    pub max_backlogs: i64,
    pub eligible_branches: Vec<String>,
    pub target_batches: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_pref: Option<String>,
    pub min_attendance_pct: f64,
    pub min_mock_score: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EligibilityCount {
    pub eligible_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotifyRequest {
    pub drive_id: String,
    pub college_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NotifyOutcome {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub total_eligible: u32,
    #[serde(default)]
    pub real_emails_sent: u32,
    #[serde(default)]
    pub logged_count: u32,
}

// ========================
// Applicants
// ========================

/// Pipeline status of an application, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicantStatus {
    Applied,
    Shortlisted,
    #[serde(rename = "Panel 1")]
    Panel1,
    Selected,
    Rejected,
}

impl ApplicantStatus {
    pub const ALL: [ApplicantStatus; 5] = [
        ApplicantStatus::Applied,
        ApplicantStatus::Shortlisted,
        ApplicantStatus::Panel1,
        ApplicantStatus::Selected,
        ApplicantStatus::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ApplicantStatus::Applied => "Applied",
            ApplicantStatus::Shortlisted => "Shortlisted",
            ApplicantStatus::Panel1 => "Panel 1",
            ApplicantStatus::Selected => "Selected",
            ApplicantStatus::Rejected => "Rejected",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl Default for ApplicantStatus {
    fn default() -> Self {
        ApplicantStatus::Applied
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub application_id: String,
    #[serde(default)]
    pub usn: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub ats_score: u32,
    #[serde(default)]
    pub status: ApplicantStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApplicantList {
    #[serde(default)]
    pub applicants: Vec<Applicant>,
}

// ========================
// Students
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub usn: Option<String>,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub cgpa: f64,
    #[serde(default)]
    pub backlogs: u32,
    #[serde(default)]
    pub placed: bool,
    #[serde(default)]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub batch_label: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Per-branch aggregate from `/student/stats`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BranchStats {
    #[serde(rename = "_id", default)]
    pub branch: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub placed: u32,
    #[serde(default)]
    pub avg_cgpa: f64,
}

// ========================
// Scheduler
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSlot {
    pub id: String,
    #[serde(default)]
    pub drive_id: String,
    #[serde(default)]
    pub usn: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub panel: String,
    pub start_time: String,
    pub end_time: String,
    pub date_str: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRequest {
    pub drive_id: String,
    pub start_date: String,
    pub end_date: String,
    pub daily_start_time: String,
    pub daily_end_time: String,
    pub slot_duration_mins: u32,
    pub break_duration_mins: u32,
    pub panels: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedSchedule {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub schedule: Vec<InterviewSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotUpdate {
    pub drive_id: String,
    pub slot_id: String,
    pub panel: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleNotified {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub sent_count: u32,
}

// ========================
// Resume templates
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Docx,
    /// AI-converted PDF, stored by the backend as HTML
    Html,
    #[serde(other)]
    Other,
}

impl TemplateKind {
    pub fn badge(&self) -> &'static str {
        match self {
            TemplateKind::Docx => "docx",
            TemplateKind::Html => "html",
            TemplateKind::Other => "template",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeTemplate {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TemplateKind,
    #[serde(default)]
    pub thumb_url: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemplateCreated {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub template_id: String,
}

// ========================
// Alumni
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "Pending",
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Rejected => "Rejected",
        }
    }

    /// Accent colour used for the status pill
    pub fn color(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "#10b981",
            VerificationStatus::Pending => "#f59e0b",
            VerificationStatus::Rejected => "#ef4444",
        }
    }
}

impl Default for VerificationStatus {
    fn default() -> Self {
        VerificationStatus::Pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyAction {
    Approve,
    Reject,
}

impl VerifyAction {
    pub fn as_query(&self) -> &'static str {
        match self {
            VerifyAction::Approve => "approve",
            VerifyAction::Reject => "reject",
        }
    }

    /// Status the backend assigns for this action
    pub fn resulting_status(&self) -> VerificationStatus {
        match self {
            VerifyAction::Approve => VerificationStatus::Verified,
            VerifyAction::Reject => VerificationStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alumni {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub current_company: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub verification_status: VerificationStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AlumniStats {
    #[serde(default)]
    pub total_verified: Option<u32>,
    #[serde(default)]
    pub pending_verification: Option<u32>,
    #[serde(default)]
    pub total_jobs_posted: Option<u32>,
    #[serde(default)]
    pub total_sessions: Option<u32>,
    #[serde(default)]
    pub sessions_completed: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlumniApplication {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub student_usn: String,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub alumni_rating: Option<u8>,
    #[serde(default)]
    pub alumni_remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlumniDetail {
    #[serde(default)]
    pub jobs_count: u32,
    #[serde(default)]
    pub sessions_count: u32,
    #[serde(default)]
    pub applicants: Vec<AlumniApplication>,
}

impl AlumniDetail {
    pub fn completed_count(&self) -> usize {
        self.applicants.iter().filter(|a| a.status == "Completed").count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_from_list_json() {
        let json = r#"{
            "_id": "65f0c0ffee",
            "college_id": "C001",
            "active": true,
            "company_name": "Google",
            "job_role": "SDE Intern",
            "min_cgpa": 7.5,
            "max_backlogs": 0,
            "eligible_branches": ["CSE", "ISE"],
            "target_batches": ["2026"],
            "gender_pref": null,
            "eligible_count": 50,
            "applied_count": 10
        }"#;
        let drive: Drive = serde_json::from_str(json).unwrap();
        assert_eq!(drive.id, "65f0c0ffee");
        assert_eq!(drive.job_role.as_deref(), Some("SDE Intern"));
        assert_eq!(drive.eligible_branches, vec!["CSE", "ISE"]);
        assert_eq!(drive.gender_pref, None);
        assert_eq!(drive.eligible_count, 50);
        assert!(drive.required_certs.is_empty());
    }

    #[test]
    fn test_legacy_drive_fields() {
        let json = r#"{"_id": "x", "company_name": "Infosys", "role": "Analyst", "branches": ["ME"]}"#;
        let drive: Drive = serde_json::from_str(json).unwrap();
        assert_eq!(drive.role.as_deref(), Some("Analyst"));
        assert_eq!(drive.branches, vec!["ME"]);
        assert_eq!(drive.applied_count, 0);
    }

    #[test]
    fn test_applicant_status_wire_names() {
        let status: ApplicantStatus = serde_json::from_str(r#""Panel 1""#).unwrap();
        assert_eq!(status, ApplicantStatus::Panel1);
        assert_eq!(serde_json::to_string(&ApplicantStatus::Shortlisted).unwrap(), r#""Shortlisted""#);
        assert_eq!(ApplicantStatus::from_label("Selected"), Some(ApplicantStatus::Selected));
        assert_eq!(ApplicantStatus::from_label("Hired"), None);
    }

    #[test]
    fn test_template_kind_unknown_is_other() {
        let json = r#"[{"_id": "t1", "name": "Classic", "type": "docx", "thumb_url": ""},
                       {"_id": "t2", "name": "Modern (AI Generated)", "type": "html"},
                       {"_id": "t3", "name": "Odd", "type": "latex"}]"#;
        let templates: Vec<ResumeTemplate> = serde_json::from_str(json).unwrap();
        assert_eq!(templates[0].kind, TemplateKind::Docx);
        assert_eq!(templates[1].kind, TemplateKind::Html);
        assert_eq!(templates[2].kind, TemplateKind::Other);
    }

    #[test]
    fn test_alumni_detail_completed_count() {
        let json = r#"{"jobs_count": 2, "sessions_count": 1, "applicants": [
            {"_id": "a", "student_usn": "4NM21CS001", "status": "Completed", "alumni_rating": 4},
            {"_id": "b", "student_usn": "4NM21CS002", "status": "Scheduled"}
        ]}"#;
        let detail: AlumniDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.completed_count(), 1);
        assert_eq!(detail.applicants[0].alumni_rating, Some(4));
    }

    #[test]
    fn test_eligibility_query_omits_any_gender() {
        let query = EligibilityQuery {
            college_id: "C001".into(),
            min_cgpa: 7.0,
            max_backlogs: 0,
            eligible_branches: vec![],
            target_batches: vec![],
            gender_pref: None,
            min_attendance_pct: 0.0,
            min_mock_score: 0.0,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert!(json.get("gender_pref").is_none());
        assert_eq!(json["min_cgpa"], 7.0);
    }
}
