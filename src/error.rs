//! Error Types
//!
//! Two families: `ApiError` for anything that went over the wire, and
//! `FormError` for input rejected before a request is built.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 from the backend. The session is already cleared when this is returned.
    #[error("Session expired")]
    Unauthorized,

    #[error("Request timed out")]
    Timeout,

    #[error("Server returned {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Server { status: u16, detail: Option<String> },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Could not read file: {0}")]
    File(String),
}

impl ApiError {
    /// Server-provided detail if there is one, otherwise the caller's fallback
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { detail: Some(detail), .. } if !detail.is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Detail for messages shaped like "Scheduling failed: <reason>"
    pub fn reason(&self) -> String {
        match self {
            ApiError::Server { detail: Some(detail), .. } if !detail.is_empty() => detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// What a page should show, if anything. A 401 has already sent the app
    /// back to login, so there is nothing left to report.
    pub fn user_message(&self, fallback: &str) -> Option<String> {
        if self.is_unauthorized() {
            None
        } else {
            Some(self.message_or(fallback))
        }
    }
}

/// Pull the FastAPI `detail` out of an error body.
///
/// `detail` is usually a string; validation errors carry a list of objects
/// with a `msg` field, which are joined.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() { None } else { Some(msgs.join("; ")) }
        }
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Company Name and Job Role are required (Category 1).")]
    MissingCompanyOrRole,

    #[error("Only PDF files accepted.")]
    NotPdf,

    #[error("Please select a drive first.")]
    NoDriveSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_string_detail() {
        assert_eq!(
            extract_detail(r#"{"detail":"Invalid or expired OTP"}"#).as_deref(),
            Some("Invalid or expired OTP")
        );
    }

    #[test]
    fn test_extract_validation_detail() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"}]}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("value is not a valid email address"));
    }

    #[test]
    fn test_extract_detail_from_non_json() {
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"message":"ok"}"#), None);
    }

    #[test]
    fn test_message_or_prefers_detail() {
        let err = ApiError::Server { status: 404, detail: Some("Drive not found".into()) };
        assert_eq!(err.message_or("Create drive failed."), "Drive not found");

        let err = ApiError::Server { status: 500, detail: None };
        assert_eq!(err.message_or("Create drive failed."), "Create drive failed.");
        assert_eq!(ApiError::Timeout.message_or("Create drive failed."), "Create drive failed.");
    }

    #[test]
    fn test_reason_falls_back_to_display() {
        assert_eq!(ApiError::Timeout.reason(), "Request timed out");
        let err = ApiError::Server { status: 400, detail: Some("End date cannot be empty".into()) };
        assert_eq!(err.reason(), "End date cannot be empty");
    }

    #[test]
    fn test_user_message_silent_on_unauthorized() {
        assert_eq!(ApiError::Unauthorized.user_message("Status update failed"), None);
        assert_eq!(
            ApiError::Timeout.user_message("Status update failed").as_deref(),
            Some("Status update failed")
        );
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(
            FormError::MissingCompanyOrRole.to_string(),
            "Company Name and Job Role are required (Category 1)."
        );
    }
}
