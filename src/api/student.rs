//! Student Endpoints

use super::{segment, ApiClient};
use crate::error::ApiError;
use crate::filters::StudentQuery;
use crate::models::{Ack, BranchStats, Student};

impl ApiClient {
    pub async fn list_students(&self, query: &StudentQuery) -> Result<Vec<Student>, ApiError> {
        self.get_query("/student/list", &query.params()).await
    }

    pub async fn student_stats(&self) -> Result<Vec<BranchStats>, ApiError> {
        self.get("/student/stats").await
    }

    pub async fn student_batches(&self) -> Result<Vec<i32>, ApiError> {
        self.get("/student/batches").await
    }

    pub async fn mark_placed(&self, usn: &str) -> Result<Ack, ApiError> {
        self.put_empty(&format!("/student/{}/mark-placed", segment(usn))).await
    }
}
