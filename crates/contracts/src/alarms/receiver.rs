use serde::{Deserialize, Serialize};

/// Notification receiver ("team"), as returned by `GET /receivers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertReceiver {
    pub name: String,
    #[serde(default)]
    pub email_configs: Vec<EmailConfig>,
    #[serde(default)]
    pub slack_configs: Vec<SlackConfig>,
    #[serde(default)]
    pub webhook_configs: Vec<WebhookConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackConfig {
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
}

impl AlertReceiver {
    /// Notification channel kinds configured on this receiver, in fixed order.
    pub fn channel_kinds(&self) -> Vec<&'static str> {
        let mut kinds = Vec::new();
        if !self.email_configs.is_empty() {
            kinds.push("email");
        }
        if !self.slack_configs.is_empty() {
            kinds.push("slack");
        }
        if !self.webhook_configs.is_empty() {
            kinds.push("webhook");
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_configured_channels() {
        let json = r##"{
            "name": "ops",
            "slack_configs": [{"channel": "#alerts"}],
            "webhook_configs": [{"url": "https://hooks.example.com/ops"}]
        }"##;
        let receiver: AlertReceiver = serde_json::from_str(json).unwrap();
        assert_eq!(receiver.channel_kinds(), vec!["slack", "webhook"]);
        assert!(AlertReceiver::default().channel_kinds().is_empty());
    }
}
