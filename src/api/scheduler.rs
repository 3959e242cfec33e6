//! Interview Scheduler Endpoints

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{GeneratedSchedule, InterviewSlot, ScheduleNotified, ScheduleRequest, SlotUpdate};

#[derive(Serialize)]
struct DriveIdArgs<'a> {
    drive_id: &'a str,
}

impl ApiClient {
    pub async fn generate_schedule(&self, request: &ScheduleRequest) -> Result<GeneratedSchedule, ApiError> {
        self.post("/scheduler/generate", request).await
    }

    pub async fn update_slot(&self, update: &SlotUpdate) -> Result<InterviewSlot, ApiError> {
        self.put("/scheduler/update-slot", update).await
    }

    pub async fn notify_schedule(&self, drive_id: &str) -> Result<ScheduleNotified, ApiError> {
        self.post("/scheduler/notify", &DriveIdArgs { drive_id }).await
    }
}
