//! Wire types of the alerting backend (alertmanager / prometheus shaped JSON).

pub mod alert;
pub mod receiver;
pub mod route;
pub mod rule;
pub mod suppression;

use std::collections::BTreeMap;

/// Label set attached to alerts, rules and matchers. Ordered for stable rendering.
pub type Labels = BTreeMap<String, String>;

pub use alert::{AlertStatus, FiringAlarm};
pub use receiver::AlertReceiver;
pub use route::AlertRoutes;
pub use rule::{PrometheusRule, RuleSummary};
pub use suppression::{AlertSuppression, SuppressionMatcher};
