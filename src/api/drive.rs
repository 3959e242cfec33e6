//! Drive Endpoints
//!
//! JD parsing, drive CRUD, eligibility preview, notifications and the
//! per-drive applicant pipeline.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{segment, ApiClient, FileUpload};
use crate::error::ApiError;
use crate::models::{
    Ack, ApplicantList, ApplicantStatus, Drive, DriveCreated, DriveDraft, EligibilityCount, EligibilityQuery,
    LogoUpload, NotifyOutcome, NotifyRequest,
};

#[derive(Serialize)]
struct StatusArgs {
    status: ApplicantStatus,
}

impl ApiClient {
    /// Raw parse result; unknown fields come back as `null`
    pub async fn parse_jd(&self, file: FileUpload) -> Result<Map<String, Value>, ApiError> {
        self.post_file("/drive/parse-jd", file).await
    }

    pub async fn upload_logo(&self, file: FileUpload) -> Result<LogoUpload, ApiError> {
        self.post_file("/drive/upload-logo", file).await
    }

    pub async fn create_drive(&self, drive: &DriveDraft) -> Result<DriveCreated, ApiError> {
        self.post("/drive/create", drive).await
    }

    pub async fn list_drives(&self) -> Result<Vec<Drive>, ApiError> {
        self.get("/drive/list").await
    }

    pub async fn check_eligibility(&self, query: &EligibilityQuery) -> Result<EligibilityCount, ApiError> {
        self.post("/drive/check-eligibility", query).await
    }

    pub async fn notify_students(&self, drive_id: &str) -> Result<NotifyOutcome, ApiError> {
        let args = NotifyRequest {
            drive_id: drive_id.to_string(),
            college_id: self.college_id(),
        };
        self.post("/drive/notify", &args).await
    }

    pub async fn delete_drive(&self, drive_id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("/drive/{}", segment(drive_id))).await
    }

    pub async fn drive_applicants(&self, drive_id: &str) -> Result<ApplicantList, ApiError> {
        self.get(&format!("/admin/drives/{}/applicants", segment(drive_id))).await
    }

    pub async fn update_applicant_status(
        &self,
        application_id: &str,
        status: ApplicantStatus,
    ) -> Result<Ack, ApiError> {
        let path = format!("/admin/applications/{}/status", segment(application_id));
        self.put(&path, &StatusArgs { status }).await
    }
}
