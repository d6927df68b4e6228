pub mod prometheus;
pub mod rule_map;

pub use prometheus::{prometheus_rule_interface, PROMETHEUS_RULE_TYPE};
pub use rule_map::{merge_rule_maps, RuleInterface, RuleInterfaceMap, RuleMapCache};
