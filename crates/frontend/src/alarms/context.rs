//! Shared configuration published by `<Alarms>` to every view below it.

use std::fmt;
use std::sync::Arc;

use contracts::alarms::{FiringAlarm, Labels};
use leptos::prelude::*;

use super::api::ApiUtil;
use super::rules::RuleInterfaceMap;

/// Host-supplied label rewrite applied before labels are displayed.
pub type LabelFilter = Arc<dyn Fn(&Labels) -> Labels + Send + Sync>;

/// Host-supplied classifier naming the kind of a firing alert.
pub type AlertClassifier = Arc<dyn Fn(&FiringAlarm) -> String + Send + Sync>;

/// Read-only configuration for alarm views.
///
/// One value per revision: `<Alarms>` builds a new `Arc<AlarmContext>` whenever
/// an input changes and never mutates a published one.
#[derive(Clone)]
pub struct AlarmContext {
    pub api_util: Arc<ApiUtil>,
    pub threshold_editor_enabled: bool,
    pub alert_manager_global_config_enabled: bool,
    pub filter_labels: Option<LabelFilter>,
    pub rule_map: Arc<RuleInterfaceMap>,
    pub get_alert_type: Option<AlertClassifier>,
}

/// Labels after the host filter, or a copy of `labels` without one.
pub fn apply_label_filter(filter: Option<&LabelFilter>, labels: &Labels) -> Labels {
    match filter {
        Some(filter) => filter(labels),
        None => labels.clone(),
    }
}

impl AlarmContext {
    pub fn alert_type(&self, alert: &FiringAlarm) -> Option<String> {
        self.get_alert_type.as_ref().map(|classify| classify(alert))
    }
}

/// Revision identity: same handles, same closures, same flags.
impl PartialEq for AlarmContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.api_util, &other.api_util)
            && Arc::ptr_eq(&self.rule_map, &other.rule_map)
            && self.threshold_editor_enabled == other.threshold_editor_enabled
            && self.alert_manager_global_config_enabled
                == other.alert_manager_global_config_enabled
            && same_callback(&self.filter_labels, &other.filter_labels)
            && same_callback(&self.get_alert_type, &other.get_alert_type)
    }
}

fn same_callback<F: ?Sized>(a: &Option<Arc<F>>, b: &Option<Arc<F>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl fmt::Debug for AlarmContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlarmContext")
            .field("api_util", &self.api_util)
            .field("threshold_editor_enabled", &self.threshold_editor_enabled)
            .field(
                "alert_manager_global_config_enabled",
                &self.alert_manager_global_config_enabled,
            )
            .field("filter_labels", &self.filter_labels.is_some())
            .field("rule_map", &self.rule_map.keys().collect::<Vec<_>>())
            .field("get_alert_type", &self.get_alert_type.is_some())
            .finish()
    }
}

pub fn provide_alarm_context(ctx: Signal<Arc<AlarmContext>>) {
    provide_context(ctx);
}

/// Current alarm configuration. Panics outside of `<Alarms>`.
pub fn use_alarm_context() -> Signal<Arc<AlarmContext>> {
    use_context::<Signal<Arc<AlarmContext>>>().expect("AlarmContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarms::rules::{RuleMapCache, PROMETHEUS_RULE_TYPE};

    fn alert(json: &str) -> FiringAlarm {
        serde_json::from_str(json).unwrap()
    }

    fn context(filter: Option<LabelFilter>, classify: Option<AlertClassifier>) -> AlarmContext {
        let api = Arc::new(ApiUtil::new("http://h"));
        AlarmContext {
            rule_map: RuleMapCache::default().resolve(&api, None),
            api_util: api,
            threshold_editor_enabled: true,
            alert_manager_global_config_enabled: false,
            filter_labels: filter,
            get_alert_type: classify,
        }
    }

    #[test]
    fn labels_pass_through_without_filter() {
        let labels = Labels::from([("networkID".to_string(), "lab".to_string())]);
        assert_eq!(apply_label_filter(None, &labels), labels);
    }

    #[test]
    fn filter_and_classifier_are_applied() {
        let filter: LabelFilter = Arc::new(|labels: &Labels| {
            labels
                .iter()
                .filter(|(k, _)| k.as_str() != "networkID")
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Labels>()
        });
        let classify: AlertClassifier =
            Arc::new(|alert: &FiringAlarm| alert.severity().unwrap_or("unknown").to_string());
        let ctx = context(Some(filter), Some(classify));

        let a = alert(
            r#"{"labels": {"alertname": "X", "networkID": "lab", "severity": "minor"},
                "startsAt": "2024-03-15T14:02:26Z"}"#,
        );
        let shown = apply_label_filter(ctx.filter_labels.as_ref(), &a.labels);
        assert!(!shown.contains_key("networkID"));
        assert_eq!(shown.get("alertname").map(String::as_str), Some("X"));
        assert_eq!(ctx.alert_type(&a).as_deref(), Some("minor"));
        assert_eq!(context(None, None).alert_type(&a), None);
    }

    #[test]
    fn readers_of_one_revision_see_identical_values() {
        let published = Arc::new(context(None, None));
        let first_reader = Arc::clone(&published);
        let second_reader = Arc::clone(&published);

        assert!(Arc::ptr_eq(&first_reader.api_util, &second_reader.api_util));
        assert!(Arc::ptr_eq(&first_reader.rule_map, &second_reader.rule_map));
        assert_eq!(
            first_reader.threshold_editor_enabled,
            second_reader.threshold_editor_enabled
        );
        assert_eq!(
            first_reader.alert_manager_global_config_enabled,
            second_reader.alert_manager_global_config_enabled
        );
        assert!(first_reader.rule_map.contains_key(PROMETHEUS_RULE_TYPE));
    }

    #[test]
    fn equality_is_by_identity() {
        let ctx = context(None, None);
        assert_eq!(ctx, ctx.clone());

        let flipped = AlarmContext {
            threshold_editor_enabled: false,
            ..ctx.clone()
        };
        assert_ne!(ctx, flipped);

        let rebuilt = AlarmContext {
            rule_map: Arc::new((*ctx.rule_map).clone()),
            ..ctx.clone()
        };
        assert_ne!(ctx, rebuilt);

        let classify: AlertClassifier = Arc::new(|_: &FiringAlarm| "x".to_string());
        let with_classifier = AlarmContext {
            get_alert_type: Some(Arc::clone(&classify)),
            ..ctx.clone()
        };
        assert_ne!(ctx, with_classifier);
        assert_eq!(with_classifier, with_classifier.clone());
    }

    #[test]
    fn debug_output_omits_closures() {
        let out = format!("{:?}", context(None, None));
        assert!(out.contains("threshold_editor_enabled: true"));
        assert!(out.contains("filter_labels: false"));
        assert!(out.contains("\"prometheus\""));
    }
}
