//! Alarms dashboard: tab strip, route dispatch and shared configuration.

pub mod api;
pub mod context;
pub mod rules;
pub mod tabs;
pub mod views;

mod shell;

pub use api::{ApiError, ApiUtil};
pub use context::{use_alarm_context, AlarmContext, AlertClassifier, LabelFilter};
pub use rules::{RuleInterface, RuleInterfaceMap};
pub use shell::Alarms;
pub use tabs::{AlarmTab, TabMatch};
