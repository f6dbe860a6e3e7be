use serde::{Deserialize, Serialize};

/// Status value the backend reports once the job has finished.
pub const COMPLETED_STATUS: &str = "Completed";

/// Download counters reported by `GET /status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    #[serde(default, alias = "totalImages")]
    pub requested_media: u64,
    #[serde(default)]
    pub downloaded_images: u64,
    #[serde(default)]
    pub skipped_images: u64,
    #[serde(default)]
    pub terminated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_media: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_file_number: Option<u64>,
}

impl ProgressSnapshot {
    /// Downloaded share of the requested media, in percent. Zero when nothing
    /// was requested. Not clamped: a backend overshoot shows as >100.
    pub fn percentage(&self) -> f64 {
        if self.requested_media == 0 {
            return 0.0;
        }
        self.downloaded_images as f64 / self.requested_media as f64 * 100.0
    }
}

/// Body of `GET /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressSnapshot>,
}

impl StatusResponse {
    pub fn is_terminal(&self) -> bool {
        self.status == COMPLETED_STATUS
            || self.progress.as_ref().is_some_and(|p| p.terminated)
    }
}
