//! TPO Endpoints
//!
//! College lookup, OTP login, dashboard numbers.

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Ack, College, DashboardStats, TpoProfile, VerifiedLogin};

#[derive(Serialize)]
struct SendOtpArgs<'a> {
    email: &'a str,
    college_id: &'a str,
}

#[derive(Serialize)]
struct VerifyOtpArgs<'a> {
    email: &'a str,
    otp: &'a str,
}

impl ApiClient {
    pub async fn list_colleges(&self) -> Result<Vec<College>, ApiError> {
        self.get("/tpo/colleges").await
    }

    pub async fn send_otp(&self, email: &str, college_id: &str) -> Result<Ack, ApiError> {
        self.post("/tpo/send-otp", &SendOtpArgs { email, college_id }).await
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<VerifiedLogin, ApiError> {
        self.post("/tpo/verify-otp", &VerifyOtpArgs { email, otp }).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("/tpo/stats").await
    }

    pub async fn profile(&self) -> Result<TpoProfile, ApiError> {
        self.get("/tpo/profile").await
    }
}
