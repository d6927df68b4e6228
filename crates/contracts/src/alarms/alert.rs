use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Labels;

/// Label holding the alert name in alertmanager payloads.
pub const ALERT_NAME_LABEL: &str = "alertname";
pub const SEVERITY_LABEL: &str = "severity";

/// Alert currently firing, as returned by `GET /alerts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiringAlarm {
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub annotations: Labels,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fingerprint: String,
    #[serde(default, rename = "generatorURL")]
    pub generator_url: Option<String>,
    #[serde(default)]
    pub status: AlertStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStatus {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub silenced_by: Vec<String>,
    #[serde(default)]
    pub inhibited_by: Vec<String>,
}

impl FiringAlarm {
    pub fn name(&self) -> &str {
        self.labels
            .get(ALERT_NAME_LABEL)
            .map(String::as_str)
            .unwrap_or(&self.fingerprint)
    }

    pub fn severity(&self) -> Option<&str> {
        self.labels.get(SEVERITY_LABEL).map(String::as_str)
    }

    pub fn is_silenced(&self) -> bool {
        !self.status.silenced_by.is_empty()
    }
}
