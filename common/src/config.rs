use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub base_url: String,
    pub poll_interval_ms: u64,
    pub feedback_dwell_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.4.1".to_string(),
            poll_interval_ms: 1_000,
            feedback_dwell_ms: 2_200,
            request_timeout_ms: 5_000,
        }
    }
}

impl PanelConfig {
    pub fn sanitize(&mut self) {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            Self::default().base_url
        } else {
            trimmed.to_string()
        };

        self.poll_interval_ms = self.poll_interval_ms.clamp(250, 60_000);
        self.feedback_dwell_ms = self.feedback_dwell_ms.clamp(500, 30_000);
        self.request_timeout_ms = self.request_timeout_ms.clamp(500, 60_000);
    }
}
