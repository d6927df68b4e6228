use super::rule_map::{RuleInterface, RuleInterfaceMap};
use crate::alarms::api::ApiUtil;

pub const PROMETHEUS_RULE_TYPE: &str = "prometheus";

/// Built-in rule map: prometheus alerting rules served by the alarms API.
pub fn prometheus_rule_interface(api: &ApiUtil) -> RuleInterfaceMap {
    RuleInterfaceMap::from([(
        PROMETHEUS_RULE_TYPE.to_string(),
        RuleInterface {
            friendly_name: "Prometheus".to_string(),
            rules_url: api.url("/alert_config"),
        },
    )])
}
