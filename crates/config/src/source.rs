use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.mangadex.org";

/// Where and how fast the source talks to the API.
///
/// The timeout and rate are advisory: they are handed to the transport with
/// every request, and enforcing them is the transport's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub requests_per_second: u32,
}
impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: 20_000,
            requests_per_second: 4,
        }
    }
}
impl SourceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// API base URL without any trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
