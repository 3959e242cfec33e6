//! Drive Creator Form
//!
//! Flat form record for all four drive categories, with per-field fill state
//! and a cached eligibility count that goes stale when a filter changes.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::FormError;
use crate::models::{DriveDraft, EligibilityQuery};

pub const STEPS: [&str; 4] = ["Who & Where", "Logistics", "Filters", "Add-ons"];
pub const BRANCHES: &[&str] = &["CSE", "ISE", "ECE", "ME", "CE"];
pub const BATCHES: &[&str] = &["2025", "2026", "2027"];
pub const SKILLS: &[&str] = &["Python", "Java", "React", "SQL", "AWS", "Docker", "Machine Learning"];
pub const CERTIFICATIONS: &[&str] = &[
    "AWS Cloud Practitioner",
    "Google Cloud Associate",
    "Azure Fundamentals",
    "Oracle Java SE",
    "Python for Data Science",
];
pub const WORK_LOCATIONS: &[&str] = &["In-office", "Remote", "Hybrid"];
pub const GENDER_PREFS: &[&str] = &["Any", "Female Only", "Male Only"];

const ANY_GENDER: &str = "Any";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveField {
    CompanyName,
    IndustryCategory,
    WorkLocation,
    JobRole,
    Description,
    PackageCtc,
    BondDetails,
    DriveDateTime,
    Venue,
    ApplicationDeadline,
    MinCgpa,
    MaxBacklogs,
    GenderPref,
    MinAttendancePct,
    MinMockScore,
}

/// How a parsed value reaches the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Revealed by the typewriter
    Text,
    Select,
    Number,
}

impl DriveField {
    pub const ALL: [DriveField; 15] = [
        DriveField::CompanyName,
        DriveField::IndustryCategory,
        DriveField::WorkLocation,
        DriveField::JobRole,
        DriveField::Description,
        DriveField::PackageCtc,
        DriveField::BondDetails,
        DriveField::DriveDateTime,
        DriveField::Venue,
        DriveField::ApplicationDeadline,
        DriveField::MinCgpa,
        DriveField::MaxBacklogs,
        DriveField::GenderPref,
        DriveField::MinAttendancePct,
        DriveField::MinMockScore,
    ];

    /// JSON key on the wire
    pub fn key(&self) -> &'static str {
        match self {
            DriveField::CompanyName => "company_name",
            DriveField::IndustryCategory => "industry_category",
            DriveField::WorkLocation => "work_location",
            DriveField::JobRole => "job_role",
            DriveField::Description => "description",
            DriveField::PackageCtc => "package_ctc",
            DriveField::BondDetails => "bond_details",
            DriveField::DriveDateTime => "drive_date_time",
            DriveField::Venue => "venue",
            DriveField::ApplicationDeadline => "application_deadline",
            DriveField::MinCgpa => "min_cgpa",
            DriveField::MaxBacklogs => "max_backlogs",
            DriveField::GenderPref => "gender_pref",
            DriveField::MinAttendancePct => "min_attendance_pct",
            DriveField::MinMockScore => "min_mock_score",
        }
    }

    /// Stepper tab the field lives on
    pub fn step(&self) -> usize {
        match self {
            DriveField::CompanyName
            | DriveField::IndustryCategory
            | DriveField::WorkLocation
            | DriveField::JobRole
            | DriveField::Description => 0,
            DriveField::PackageCtc
            | DriveField::BondDetails
            | DriveField::DriveDateTime
            | DriveField::Venue
            | DriveField::ApplicationDeadline => 1,
            DriveField::MinCgpa | DriveField::MaxBacklogs | DriveField::GenderPref => 2,
            DriveField::MinAttendancePct | DriveField::MinMockScore => 3,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            DriveField::WorkLocation | DriveField::GenderPref => FieldKind::Select,
            DriveField::MinCgpa
            | DriveField::MaxBacklogs
            | DriveField::MinAttendancePct
            | DriveField::MinMockScore => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }

    /// Part of the eligibility filter subset
    pub fn is_filter(&self) -> bool {
        matches!(
            self,
            DriveField::MinCgpa
                | DriveField::MaxBacklogs
                | DriveField::GenderPref
                | DriveField::MinAttendancePct
                | DriveField::MinMockScore
        )
    }

    fn default_value(&self) -> &'static str {
        match self {
            DriveField::MinCgpa => "7.0",
            DriveField::MaxBacklogs => "0",
            DriveField::GenderPref => ANY_GENDER,
            DriveField::MinAttendancePct => "0",
            DriveField::MinMockScore => "0",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    EligibleBranches,
    TargetBatches,
    RequiredSkills,
    RequiredCerts,
}

impl ListField {
    pub const ALL: [ListField; 4] = [
        ListField::EligibleBranches,
        ListField::TargetBatches,
        ListField::RequiredSkills,
        ListField::RequiredCerts,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ListField::EligibleBranches => "eligible_branches",
            ListField::TargetBatches => "target_batches",
            ListField::RequiredSkills => "required_skills",
            ListField::RequiredCerts => "required_certs",
        }
    }

    /// Chips offered for this list
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            ListField::EligibleBranches => BRANCHES,
            ListField::TargetBatches => BATCHES,
            ListField::RequiredSkills => SKILLS,
            ListField::RequiredCerts => CERTIFICATIONS,
        }
    }

    pub fn is_filter(&self) -> bool {
        matches!(self, ListField::EligibleBranches | ListField::TargetBatches)
    }
}

/// Where a field's current value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Unset,
    /// Missing from the parsed document, waiting for the TPO
    Pending,
    /// Being revealed by the typewriter
    Animating,
    Filled,
}

impl FieldState {
    /// CSS classes for the field's input
    pub fn input_class(&self) -> &'static str {
        match self {
            FieldState::Pending => "input pending",
            FieldState::Animating => "input typing",
            FieldState::Unset | FieldState::Filled => "input",
        }
    }
}

/// Cached eligibility preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Eligibility {
    #[default]
    Unknown,
    /// Request in flight for the given form revision
    Checking(u64),
    Known(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriveForm {
    values: HashMap<DriveField, String>,
    lists: HashMap<ListField, Vec<String>>,
    states: HashMap<DriveField, FieldState>,
    pub logo_url: Option<String>,
    eligibility: Eligibility,
    /// Bumped on every filter change
    revision: u64,
}

impl Default for DriveForm {
    fn default() -> Self {
        Self {
            values: DriveField::ALL
                .into_iter()
                .map(|f| (f, f.default_value().to_string()))
                .collect(),
            lists: HashMap::new(),
            states: HashMap::new(),
            logo_url: None,
            eligibility: Eligibility::Unknown,
            revision: 0,
        }
    }
}

impl DriveForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: DriveField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn list(&self, field: ListField) -> &[String] {
        self.lists.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: ListField, item: &str) -> bool {
        self.list(field).iter().any(|v| v == item)
    }

    pub fn state(&self, field: DriveField) -> FieldState {
        self.states.get(&field).copied().unwrap_or_default()
    }

    pub fn is_pending(&self, field: DriveField) -> bool {
        self.state(field) == FieldState::Pending
    }

    pub fn is_animating(&self, field: DriveField) -> bool {
        self.state(field) == FieldState::Animating
    }

    pub fn eligibility(&self) -> Eligibility {
        self.eligibility
    }

    /// Direct edit by the user
    pub fn set_field(&mut self, field: DriveField, value: String) {
        let state = if value.trim().is_empty() { FieldState::Unset } else { FieldState::Filled };
        self.values.insert(field, value);
        self.states.insert(field, state);
        if field.is_filter() {
            self.invalidate_eligibility();
        }
    }

    pub fn toggle(&mut self, field: ListField, item: &str) {
        let list = self.lists.entry(field).or_default();
        if let Some(pos) = list.iter().position(|v| v == item) {
            list.remove(pos);
        } else {
            list.push(item.to_string());
        }
        if field.is_filter() {
            self.invalidate_eligibility();
        }
    }

    /// Apply a `/drive/parse-jd` response.
    ///
    /// Select and numeric values are set outright. Text values are cleared and
    /// returned so the caller can reveal them; their state is `Animating` until
    /// `finish_animation`. Keys that are absent or null become `Pending`.
    pub fn apply_parse(&mut self, data: &Map<String, Value>) -> Vec<(DriveField, String)> {
        let mut reveal = Vec::new();
        for field in DriveField::ALL {
            match data.get(field.key()).and_then(scalar_text) {
                None => {
                    self.states.insert(field, FieldState::Pending);
                }
                Some(text) if text.is_empty() => {
                    self.states.insert(field, FieldState::Filled);
                }
                Some(text) if field.kind() == FieldKind::Text => {
                    self.values.insert(field, String::new());
                    self.states.insert(field, FieldState::Animating);
                    reveal.push((field, text));
                }
                Some(text) => {
                    self.values.insert(field, text);
                    self.states.insert(field, FieldState::Filled);
                }
            }
        }
        for field in ListField::ALL {
            if let Some(Value::Array(items)) = data.get(field.key()) {
                let items: Vec<String> = items.iter().filter_map(scalar_text).collect();
                if !items.is_empty() {
                    self.lists.insert(field, items);
                }
            }
        }
        self.invalidate_eligibility();
        reveal
    }

    /// Typewriter frame; ignored once the user has taken the field over
    pub fn animate_frame(&mut self, field: DriveField, text: String) -> bool {
        if self.is_animating(field) {
            self.values.insert(field, text);
            true
        } else {
            false
        }
    }

    pub fn finish_animation(&mut self, field: DriveField) {
        if self.is_animating(field) {
            self.states.insert(field, FieldState::Filled);
        }
    }

    /// Stepper marker; the description and gender preference never raise it
    pub fn step_has_pending(&self, step: usize) -> bool {
        DriveField::ALL
            .iter()
            .filter(|f| !matches!(f, DriveField::Description | DriveField::GenderPref))
            .any(|f| f.step() == step && self.is_pending(*f))
    }

    pub fn invalidate_eligibility(&mut self) {
        self.revision += 1;
        self.eligibility = Eligibility::Unknown;
    }

    /// Mark a check in flight, returning the revision it was issued for
    pub fn begin_eligibility_check(&mut self) -> u64 {
        self.eligibility = Eligibility::Checking(self.revision);
        self.revision
    }

    /// Store a check result. Returns false when the filters changed since
    /// the check was issued; the result is then dropped.
    pub fn finish_eligibility_check(&mut self, revision: u64, count: Option<u32>) -> bool {
        if revision != self.revision || self.eligibility != Eligibility::Checking(revision) {
            return false;
        }
        self.eligibility = match count {
            Some(n) => Eligibility::Known(n),
            None => Eligibility::Unknown,
        };
        true
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.value(DriveField::CompanyName).trim().is_empty()
            || self.value(DriveField::JobRole).trim().is_empty()
        {
            return Err(FormError::MissingCompanyOrRole);
        }
        Ok(())
    }

    pub fn to_eligibility_query(&self, college_id: &str) -> EligibilityQuery {
        let gender = self.value(DriveField::GenderPref);
        EligibilityQuery {
            college_id: college_id.to_string(),
            min_cgpa: coerce_f64(self.value(DriveField::MinCgpa)),
            max_backlogs: coerce_i64(self.value(DriveField::MaxBacklogs)),
            eligible_branches: self.list(ListField::EligibleBranches).to_vec(),
            target_batches: self.list(ListField::TargetBatches).to_vec(),
            gender_pref: (!gender.is_empty() && gender != ANY_GENDER).then(|| gender.to_string()),
            min_attendance_pct: coerce_f64(self.value(DriveField::MinAttendancePct)),
            min_mock_score: coerce_f64(self.value(DriveField::MinMockScore)),
        }
    }

    /// Validated creation body; no request may be built otherwise
    pub fn to_draft(&self, college_id: &str) -> Result<DriveDraft, FormError> {
        self.validate()?;
        let text = |field: DriveField| self.value(field).to_string();
        Ok(DriveDraft {
            college_id: college_id.to_string(),
            active: true,
            logo_path: self.logo_url.clone().filter(|url| !url.is_empty()),
            company_name: text(DriveField::CompanyName),
            industry_category: text(DriveField::IndustryCategory),
            work_location: text(DriveField::WorkLocation),
            job_role: text(DriveField::JobRole),
            package_ctc: text(DriveField::PackageCtc),
            bond_details: text(DriveField::BondDetails),
            drive_date_time: text(DriveField::DriveDateTime),
            venue: text(DriveField::Venue),
            application_deadline: text(DriveField::ApplicationDeadline),
            min_cgpa: coerce_f64(self.value(DriveField::MinCgpa)),
            max_backlogs: coerce_i64(self.value(DriveField::MaxBacklogs)),
            eligible_branches: self.list(ListField::EligibleBranches).to_vec(),
            target_batches: self.list(ListField::TargetBatches).to_vec(),
            gender_pref: text(DriveField::GenderPref),
            required_skills: self.list(ListField::RequiredSkills).to_vec(),
            required_certs: self.list(ListField::RequiredCerts).to_vec(),
            min_attendance_pct: coerce_f64(self.value(DriveField::MinAttendancePct)),
            min_mock_score: coerce_f64(self.value(DriveField::MinMockScore)),
            description: text(DriveField::Description),
        })
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Decimal input, 0 when unparseable
pub fn coerce_f64(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Whole-number input, fractional part dropped, 0 when unparseable
pub fn coerce_i64(raw: &str) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.trunc() as i64))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parsed(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_defaults() {
        let form = DriveForm::new();
        assert_eq!(form.value(DriveField::MinCgpa), "7.0");
        assert_eq!(form.value(DriveField::MaxBacklogs), "0");
        assert_eq!(form.value(DriveField::GenderPref), "Any");
        assert_eq!(form.value(DriveField::CompanyName), "");
        assert!(form.list(ListField::EligibleBranches).is_empty());
        assert_eq!(form.eligibility(), Eligibility::Unknown);
    }

    #[test]
    fn test_submit_requires_company_and_role() {
        let mut form = DriveForm::new();
        assert_eq!(form.to_draft("C001"), Err(FormError::MissingCompanyOrRole));
        form.set_field(DriveField::CompanyName, "Google".into());
        assert_eq!(form.to_draft("C001"), Err(FormError::MissingCompanyOrRole));
        form.set_field(DriveField::JobRole, "   ".into());
        assert_eq!(form.to_draft("C001"), Err(FormError::MissingCompanyOrRole));
        form.set_field(DriveField::JobRole, "SDE Intern".into());
        assert!(form.to_draft("C001").is_ok());
    }

    #[test]
    fn test_draft_coerces_numbers_with_zero_fallback() {
        let mut form = DriveForm::new();
        form.set_field(DriveField::CompanyName, "Google".into());
        form.set_field(DriveField::JobRole, "SDE".into());
        form.set_field(DriveField::MinCgpa, "abc".into());
        form.set_field(DriveField::MaxBacklogs, "2.7".into());
        form.set_field(DriveField::MinAttendancePct, "".into());
        form.set_field(DriveField::MinMockScore, " 65 ".into());
        form.logo_url = Some("/static/logos/g.png".into());

        let draft = form.to_draft("C001").unwrap();
        assert_eq!(draft.min_cgpa, 0.0);
        assert_eq!(draft.max_backlogs, 2);
        assert_eq!(draft.min_attendance_pct, 0.0);
        assert_eq!(draft.min_mock_score, 65.0);
        assert_eq!(draft.logo_path.as_deref(), Some("/static/logos/g.png"));
        assert!(draft.active);
        assert_eq!(draft.college_id, "C001");
    }

    #[test]
    fn test_parse_marks_absent_fields_pending() {
        let mut form = DriveForm::new();
        let reveal = form.apply_parse(&parsed(json!({
            "company_name": "Google",
            "job_role": "SDE Intern",
            "work_location": "Hybrid",
            "min_cgpa": 7.5,
            "venue": null,
            "eligible_branches": ["CSE", "ISE"],
            "required_skills": []
        })));

        assert_eq!(
            reveal,
            vec![
                (DriveField::CompanyName, "Google".to_string()),
                (DriveField::JobRole, "SDE Intern".to_string()),
            ]
        );
        assert!(form.is_animating(DriveField::CompanyName));
        assert_eq!(form.value(DriveField::CompanyName), "");

        assert_eq!(form.state(DriveField::CompanyName).input_class(), "input typing");
        assert_eq!(form.state(DriveField::Venue).input_class(), "input pending");
        assert_eq!(form.state(DriveField::WorkLocation), FieldState::Filled);
        assert_eq!(form.value(DriveField::WorkLocation), "Hybrid");
        assert_eq!(form.value(DriveField::MinCgpa), "7.5");

        for field in [DriveField::Venue, DriveField::PackageCtc, DriveField::MaxBacklogs] {
            assert!(form.is_pending(field), "{:?} should be pending", field);
        }
        for field in [DriveField::CompanyName, DriveField::WorkLocation, DriveField::MinCgpa] {
            assert!(!form.is_pending(field));
        }

        assert_eq!(form.list(ListField::EligibleBranches), ["CSE", "ISE"]);
        assert!(form.list(ListField::RequiredSkills).is_empty());
    }

    #[test]
    fn test_pending_cleared_only_by_user_edit() {
        let mut form = DriveForm::new();
        form.apply_parse(&parsed(json!({"company_name": "Google"})));
        assert!(form.is_pending(DriveField::Venue));

        // animation never touches a pending field
        assert!(!form.animate_frame(DriveField::Venue, "Hall".into()));
        form.finish_animation(DriveField::Venue);
        assert!(form.is_pending(DriveField::Venue));
        assert!(form.step_has_pending(1));

        form.set_field(DriveField::Venue, "Seminar Hall A".into());
        assert_eq!(form.state(DriveField::Venue), FieldState::Filled);
    }

    #[test]
    fn test_edit_during_animation_stops_frames() {
        let mut form = DriveForm::new();
        form.apply_parse(&parsed(json!({"company_name": "Google"})));
        assert!(form.animate_frame(DriveField::CompanyName, "Goo".into()));

        form.set_field(DriveField::CompanyName, "Alphabet".into());
        assert!(!form.animate_frame(DriveField::CompanyName, "Goog".into()));
        assert_eq!(form.value(DriveField::CompanyName), "Alphabet");

        form.finish_animation(DriveField::CompanyName);
        assert_eq!(form.state(DriveField::CompanyName), FieldState::Filled);
    }

    #[test]
    fn test_empty_parsed_text_keeps_existing_value() {
        let mut form = DriveForm::new();
        form.set_field(DriveField::Venue, "Main Auditorium".into());
        let reveal = form.apply_parse(&parsed(json!({"venue": "", "min_cgpa": ""})));

        assert!(reveal.is_empty());
        assert_eq!(form.value(DriveField::Venue), "Main Auditorium");
        assert_eq!(form.state(DriveField::Venue), FieldState::Filled);
        assert_eq!(form.value(DriveField::MinCgpa), "7.0");
        assert!(!form.is_pending(DriveField::MinCgpa));
    }

    #[test]
    fn test_description_and_gender_never_mark_their_step() {
        let mut form = DriveForm::new();
        form.apply_parse(&parsed(json!({
            "company_name": "Google",
            "industry_category": "IT",
            "work_location": "Bengaluru",
            "job_role": "SDE",
            "min_cgpa": 7.0,
            "max_backlogs": 0
        })));
        assert!(form.is_pending(DriveField::Description));
        assert!(form.is_pending(DriveField::GenderPref));
        assert!(!form.step_has_pending(0));
        assert!(!form.step_has_pending(2));
        assert!(form.step_has_pending(1));
        assert!(form.step_has_pending(3));
    }

    #[test]
    fn test_animation_finishes_to_filled() {
        let mut form = DriveForm::new();
        form.apply_parse(&parsed(json!({"venue": "Hall"})));
        form.animate_frame(DriveField::Venue, "Hall".into());
        form.finish_animation(DriveField::Venue);
        assert_eq!(form.state(DriveField::Venue), FieldState::Filled);
        assert_eq!(form.value(DriveField::Venue), "Hall");
    }

    #[test]
    fn test_filter_change_resets_eligibility() {
        let mut form = DriveForm::new();
        let rev = form.begin_eligibility_check();
        assert!(form.finish_eligibility_check(rev, Some(42)));
        assert_eq!(form.eligibility(), Eligibility::Known(42));

        form.set_field(DriveField::MinCgpa, "8.0".into());
        assert_eq!(form.eligibility(), Eligibility::Unknown);

        let rev = form.begin_eligibility_check();
        assert!(form.finish_eligibility_check(rev, Some(30)));
        form.toggle(ListField::EligibleBranches, "CSE");
        assert_eq!(form.eligibility(), Eligibility::Unknown);
    }

    #[test]
    fn test_non_filter_change_keeps_eligibility() {
        let mut form = DriveForm::new();
        let rev = form.begin_eligibility_check();
        form.finish_eligibility_check(rev, Some(12));
        form.set_field(DriveField::Venue, "Hall".into());
        form.toggle(ListField::RequiredSkills, "SQL");
        assert_eq!(form.eligibility(), Eligibility::Known(12));
    }

    #[test]
    fn test_stale_eligibility_response_dropped() {
        let mut form = DriveForm::new();
        let rev = form.begin_eligibility_check();
        form.set_field(DriveField::GenderPref, "Female Only".into());
        assert!(!form.finish_eligibility_check(rev, Some(99)));
        assert_eq!(form.eligibility(), Eligibility::Unknown);
    }

    #[test]
    fn test_eligibility_query_subset() {
        let mut form = DriveForm::new();
        form.toggle(ListField::EligibleBranches, "CSE");
        form.toggle(ListField::TargetBatches, "2026");
        form.set_field(DriveField::MaxBacklogs, "1".into());
        let query = form.to_eligibility_query("C001");
        assert_eq!(query.min_cgpa, 7.0);
        assert_eq!(query.max_backlogs, 1);
        assert_eq!(query.gender_pref, None);
        assert_eq!(query.eligible_branches, vec!["CSE"]);

        form.set_field(DriveField::GenderPref, "Female Only".into());
        assert_eq!(form.to_eligibility_query("C001").gender_pref.as_deref(), Some("Female Only"));
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut form = DriveForm::new();
        form.toggle(ListField::RequiredCerts, "Oracle Java SE");
        assert!(form.contains(ListField::RequiredCerts, "Oracle Java SE"));
        form.toggle(ListField::RequiredCerts, "Oracle Java SE");
        assert!(!form.contains(ListField::RequiredCerts, "Oracle Java SE"));
    }

    #[test]
    fn test_coercion() {
        assert_eq!(coerce_f64("7.25"), 7.25);
        assert_eq!(coerce_f64("NaN"), 0.0);
        assert_eq!(coerce_i64("3"), 3);
        assert_eq!(coerce_i64("x"), 0);
    }
}
