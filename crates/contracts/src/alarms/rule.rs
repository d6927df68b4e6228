use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Labels;

/// Prometheus alerting rule, as returned by `GET /alert_config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrometheusRule {
    pub alert: String,
    pub expr: String,
    #[serde(default, rename = "for", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub annotations: Labels,
}

/// Backend-agnostic view of one rule, used to list rules of any rule type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSummary {
    pub name: String,
    pub severity: Option<String>,
    pub description: Option<String>,
}

impl RuleSummary {
    /// Reads the common fields out of an arbitrary rule object.
    ///
    /// Prometheus rules are decoded as such. For other rule types the name is
    /// taken from `alert`, then `name`, then `ruleName`; objects carrying none
    /// of them are skipped.
    pub fn from_value(value: &Value) -> Option<Self> {
        if let Ok(rule) = PrometheusRule::deserialize(value) {
            return Some(Self::from(&rule));
        }
        let name = ["alert", "name", "ruleName"]
            .into_iter()
            .find_map(|field| value.get(field).and_then(Value::as_str))?
            .to_string();
        let nested = |outer: &str, inner: &str| {
            value
                .get(outer)
                .and_then(|v| v.get(inner))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Some(Self {
            name,
            severity: nested("labels", "severity"),
            description: nested("annotations", "description")
                .or_else(|| nested("annotations", "summary")),
        })
    }
}

impl From<&PrometheusRule> for RuleSummary {
    fn from(rule: &PrometheusRule) -> Self {
        Self {
            name: rule.alert.clone(),
            severity: rule.labels.get("severity").cloned(),
            description: rule
                .annotations
                .get("description")
                .or_else(|| rule.annotations.get("summary"))
                .cloned(),
        }
    }
}
