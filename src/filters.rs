//! List Filters
//!
//! Client-side substring search and the structured student query.

use crate::models::{Alumni, Applicant, College, ResumeTemplate, Student};

pub const BRANCH_FILTERS: &[&str] = &["All", "CSE", "ISE", "ECE", "ME", "CE"];

/// Case-insensitive substring match; an empty needle matches everything
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn filter_colleges<'a>(colleges: &'a [College], search: &str) -> Vec<&'a College> {
    colleges.iter().filter(|c| contains_ci(&c.name, search)).collect()
}

pub fn filter_students(students: &[Student], search: &str) -> Vec<Student> {
    students
        .iter()
        .filter(|s| {
            contains_ci(&s.name, search)
                || contains_ci(&s.email, search)
                || s.usn.as_deref().is_some_and(|usn| contains_ci(usn, search))
        })
        .cloned()
        .collect()
}

pub fn filter_applicants(applicants: &[Applicant], search: &str) -> Vec<Applicant> {
    applicants
        .iter()
        .filter(|a| contains_ci(&a.name, search) || contains_ci(&a.usn, search))
        .cloned()
        .collect()
}

pub fn filter_templates(templates: &[ResumeTemplate], search: &str) -> Vec<ResumeTemplate> {
    templates.iter().filter(|t| contains_ci(&t.name, search)).cloned().collect()
}

pub fn filter_alumni(alumni: &[Alumni], search: &str) -> Vec<Alumni> {
    alumni
        .iter()
        .filter(|a| {
            contains_ci(&a.name, search)
                || contains_ci(&a.email, search)
                || contains_ci(&a.current_company, search)
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacedFilter {
    #[default]
    All,
    Placed,
    NotPlaced,
}

impl PlacedFilter {
    pub const ALL: [PlacedFilter; 3] = [PlacedFilter::All, PlacedFilter::Placed, PlacedFilter::NotPlaced];

    pub fn value(&self) -> &'static str {
        match self {
            PlacedFilter::All => "all",
            PlacedFilter::Placed => "placed",
            PlacedFilter::NotPlaced => "not-placed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlacedFilter::All => "All Status",
            PlacedFilter::Placed => "Placed",
            PlacedFilter::NotPlaced => "Not Placed",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.value() == value).unwrap_or_default()
    }
}

/// Server-side filters for `/student/list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentQuery {
    pub branch: String,
    pub placed: PlacedFilter,
    pub graduation_year: Option<i32>,
}

impl Default for StudentQuery {
    fn default() -> Self {
        Self {
            branch: "All".to_string(),
            placed: PlacedFilter::All,
            graduation_year: None,
        }
    }
}

impl StudentQuery {
    /// Query pairs; "All" filters are left out
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.branch != "All" && !self.branch.is_empty() {
            params.push(("branch", self.branch.clone()));
        }
        match self.placed {
            PlacedFilter::All => {}
            PlacedFilter::Placed => params.push(("placed", "true".to_string())),
            PlacedFilter::NotPlaced => params.push(("placed", "false".to_string())),
        }
        if let Some(year) = self.graduation_year {
            params.push(("graduation_year", year.to_string()));
        }
        params
    }
}

pub fn cgpa_class(cgpa: f64) -> &'static str {
    if cgpa >= 8.0 {
        "high"
    } else if cgpa >= 7.0 {
        "mid"
    } else {
        "low"
    }
}

/// 2026 → "2025–26 Batch"
pub fn batch_label(year: i32) -> String {
    format!("{}–{:02} Batch", year - 1, year.rem_euclid(100))
}

/// Label shown in the roster's batch column
pub fn student_batch(student: &Student) -> String {
    match (&student.batch_label, student.graduation_year) {
        (Some(label), _) if !label.is_empty() => label.clone(),
        (_, Some(year)) => year.to_string(),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, email: &str, usn: Option<&str>) -> Student {
        Student {
            name: name.into(),
            email: email.into(),
            usn: usn.map(String::from),
            branch: "CSE".into(),
            cgpa: 8.1,
            backlogs: 0,
            placed: false,
            graduation_year: Some(2026),
            batch_label: None,
            gender: None,
        }
    }

    #[test]
    fn test_student_search_fields() {
        let students = vec![
            student("Asha Rao", "asha@nmamit.in", Some("4NM21CS001")),
            student("Vikram", "vik@nmamit.in", None),
        ];
        assert_eq!(filter_students(&students, "asha").len(), 1);
        assert_eq!(filter_students(&students, "4nm21").len(), 1);
        assert_eq!(filter_students(&students, "NMAMIT.IN").len(), 2);
        assert_eq!(filter_students(&students, "").len(), 2);
        assert!(filter_students(&students, "zzz").is_empty());
    }

    #[test]
    fn test_query_params_skip_all() {
        assert!(StudentQuery::default().params().is_empty());

        let query = StudentQuery {
            branch: "ISE".into(),
            placed: PlacedFilter::NotPlaced,
            graduation_year: Some(2026),
        };
        assert_eq!(
            query.params(),
            vec![
                ("branch", "ISE".to_string()),
                ("placed", "false".to_string()),
                ("graduation_year", "2026".to_string()),
            ]
        );
    }

    #[test]
    fn test_placed_filter_values() {
        assert_eq!(PlacedFilter::from_value("placed"), PlacedFilter::Placed);
        assert_eq!(PlacedFilter::from_value("bogus"), PlacedFilter::All);
    }

    #[test]
    fn test_cgpa_class_thresholds() {
        assert_eq!(cgpa_class(8.0), "high");
        assert_eq!(cgpa_class(7.99), "mid");
        assert_eq!(cgpa_class(7.0), "mid");
        assert_eq!(cgpa_class(6.5), "low");
    }

    #[test]
    fn test_batch_labels() {
        assert_eq!(batch_label(2026), "2025–26 Batch");
        assert_eq!(batch_label(2009), "2008–09 Batch");

        let mut s = student("A", "", None);
        assert_eq!(student_batch(&s), "2026");
        s.batch_label = Some("2022-26".into());
        assert_eq!(student_batch(&s), "2022-26");
        s.batch_label = None;
        s.graduation_year = None;
        assert_eq!(student_batch(&s), "—");
    }

    #[test]
    fn test_college_filter() {
        let colleges = vec![
            College { college_id: "C1".into(), name: "NMAM Institute".into(), location: None, established: None },
            College { college_id: "C2".into(), name: "RV College".into(), location: None, established: None },
        ];
        let hits = filter_colleges(&colleges, "college");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].college_id, "C2");
    }
}
