//! Alumni Verification Endpoints

use super::{segment, ApiClient};
use crate::error::ApiError;
use crate::models::{Ack, Alumni, AlumniDetail, AlumniStats, VerifyAction};

impl ApiClient {
    pub async fn pending_alumni(&self) -> Result<Vec<Alumni>, ApiError> {
        self.get("/admin/alumni/pending").await
    }

    pub async fn all_alumni(&self) -> Result<Vec<Alumni>, ApiError> {
        self.get("/admin/alumni/all").await
    }

    pub async fn alumni_stats(&self) -> Result<AlumniStats, ApiError> {
        self.get("/admin/alumni/stats").await
    }

    pub async fn alumni_detail(&self, alumni_id: &str) -> Result<AlumniDetail, ApiError> {
        self.get(&format!("/admin/alumni/{}/detail", segment(alumni_id))).await
    }

    pub async fn verify_alumni(&self, alumni_id: &str, action: VerifyAction) -> Result<Ack, ApiError> {
        let path = format!("/admin/alumni/{}/verify?action={}", segment(alumni_id), action.as_query());
        self.put_empty(&path).await
    }

    pub async fn revoke_alumni(&self, alumni_id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("/admin/alumni/{}", segment(alumni_id))).await
    }
}
