use std::time::Instant;

use log::{info, warn};
use serde::Deserialize;

use crate::error::BackendError;
use crate::models::{AttendanceSnapshot, CourseRecord};

/// Default bind of the local scraper backend.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

const GENERIC_LOGIN_FAILED: &str = "Login failed";

/// Wire shape of a successful scrape. The backend also sends per-course and
/// overall percentage fields; those are derived locally instead of trusted
/// from the wire, so they are not deserialized here.
#[derive(Debug, Deserialize)]
struct AttendanceResponse {
    student_name: String,
    roll_number: String,
    courses: Vec<CourseStats>,
}

#[derive(Debug, Deserialize)]
struct CourseStats {
    name: String,
    attended: u32,
    conducted: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub browser_ready: bool,
}

/// HTTP client for the scraper backend that authenticates against the college
/// portal. One request per login attempt; no retries, no timeouts beyond
/// reqwest defaults.
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Submit credentials and await the scraped attendance payload.
    pub async fn scrape_attendance(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AttendanceSnapshot, BackendError> {
        let url = format!("{}/scrape-attendance", self.base_url);
        let started = Instant::now();

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(BackendError::Rejected(login_error_message(&body)));
        }

        let body: AttendanceResponse = response.json().await?;
        info!(
            "scrape for {} completed in {:.2}s",
            body.roll_number,
            started.elapsed().as_secs_f64()
        );

        let snapshot = snapshot_from_response(body);
        for name in snapshot.invariant_violations() {
            warn!("portal reported attended > conducted for course {name}");
        }
        Ok(snapshot)
    }

    pub async fn health(&self) -> Result<HealthStatus, BackendError> {
        let url = format!("{}/health", self.base_url);
        let status = self.http.get(&url).send().await?.json().await?;
        Ok(status)
    }
}

fn snapshot_from_response(body: AttendanceResponse) -> AttendanceSnapshot {
    AttendanceSnapshot {
        student_name: body.student_name,
        roll_number: body.roll_number,
        courses: body
            .courses
            .into_iter()
            .map(|course| CourseRecord {
                name: course.name,
                attended: course.attended,
                conducted: course.conducted,
            })
            .collect(),
    }
}

/// Extract the backend's `detail` message from an error payload, falling back
/// to a generic message when it is absent or unparseable.
fn login_error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| GENERIC_LOGIN_FAILED.to_string())
}
