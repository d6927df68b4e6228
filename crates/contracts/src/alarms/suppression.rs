use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alertmanager silence, as returned by `GET /silences`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSuppression {
    pub id: String,
    #[serde(default)]
    pub matchers: Vec<SuppressionMatcher>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub status: SuppressionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppressionMatcher {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub is_regex: bool,
    #[serde(default = "default_true")]
    pub is_equal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionStatus {
    #[serde(default)]
    pub state: String,
}

fn default_true() -> bool {
    true
}

impl SuppressionMatcher {
    /// Matcher in alertmanager's textual form, e.g. `severity=~"crit.*"`.
    pub fn expression(&self) -> String {
        let op = match (self.is_equal, self.is_regex) {
            (true, false) => "=",
            (false, false) => "!=",
            (true, true) => "=~",
            (false, true) => "!~",
        };
        format!("{}{}\"{}\"", self.name, op, self.value)
    }
}

impl AlertSuppression {
    pub fn matchers_expression(&self) -> String {
        self.matchers
            .iter()
            .map(SuppressionMatcher::expression)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_matcher_operators() {
        let matcher = |is_equal, is_regex| SuppressionMatcher {
            name: "severity".into(),
            value: "critical".into(),
            is_regex,
            is_equal,
        };
        assert_eq!(matcher(true, false).expression(), r#"severity="critical""#);
        assert_eq!(matcher(false, false).expression(), r#"severity!="critical""#);
        assert_eq!(matcher(true, true).expression(), r#"severity=~"critical""#);
        assert_eq!(matcher(false, true).expression(), r#"severity!~"critical""#);
    }

    #[test]
    fn is_equal_defaults_to_true() {
        let json = r#"{
            "id": "s-1",
            "matchers": [{"name": "alertname", "value": "TargetDown", "isRegex": false},
                         {"name": "job", "value": "node.*", "isRegex": true}],
            "startsAt": "2024-03-15T14:00:00Z",
            "endsAt": "2024-03-15T16:00:00Z",
            "createdBy": "ops",
            "comment": "maintenance",
            "status": {"state": "active"}
        }"#;
        let silence: AlertSuppression = serde_json::from_str(json).unwrap();
        assert_eq!(
            silence.matchers_expression(),
            r#"alertname="TargetDown", job=~"node.*""#
        );
        assert_eq!(silence.status.state, "active");
    }
}
