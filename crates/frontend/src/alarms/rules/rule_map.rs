//! Rule-interface map and its merge with host overrides.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::prometheus::prometheus_rule_interface;
use crate::alarms::api::ApiUtil;

/// How rules of one rule type are listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInterface {
    pub friendly_name: String,
    /// Absolute URL returning a JSON array of rule objects.
    pub rules_url: String,
}

/// Rule type discriminator -> interface.
pub type RuleInterfaceMap = BTreeMap<String, RuleInterface>;

/// Shallow merge: every key of `builtin`, with entries from `overrides`
/// replacing builtin entries of the same key.
pub fn merge_rule_maps(
    builtin: &RuleInterfaceMap,
    overrides: Option<&RuleInterfaceMap>,
) -> RuleInterfaceMap {
    let mut merged = builtin.clone();
    if let Some(overrides) = overrides {
        merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}

/// Memo of the merged rule map, keyed by `Arc` identity of its inputs.
///
/// Equal-but-distinct inputs count as a change; hosts keep their
/// `Arc<RuleInterfaceMap>` stable to avoid rebuilds.
#[derive(Debug, Default)]
pub struct RuleMapCache {
    entry: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    api: Arc<ApiUtil>,
    overrides: Option<Arc<RuleInterfaceMap>>,
    merged: Arc<RuleInterfaceMap>,
}

impl CacheEntry {
    fn matches(&self, api: &Arc<ApiUtil>, overrides: Option<&Arc<RuleInterfaceMap>>) -> bool {
        let same_overrides = match (&self.overrides, overrides) {
            (Some(cached), Some(current)) => Arc::ptr_eq(cached, current),
            (None, None) => true,
            _ => false,
        };
        same_overrides && Arc::ptr_eq(&self.api, api)
    }
}

impl RuleMapCache {
    pub fn resolve(
        &mut self,
        api: &Arc<ApiUtil>,
        overrides: Option<&Arc<RuleInterfaceMap>>,
    ) -> Arc<RuleInterfaceMap> {
        if let Some(entry) = self.entry.as_ref().filter(|e| e.matches(api, overrides)) {
            return Arc::clone(&entry.merged);
        }

        log::debug!("rebuilding merged rule map");
        let merged = Arc::new(merge_rule_maps(
            &prometheus_rule_interface(api),
            overrides.map(Arc::as_ref),
        ));
        self.entry = Some(CacheEntry {
            api: Arc::clone(api),
            overrides: overrides.cloned(),
            merged: Arc::clone(&merged),
        });
        merged
    }
}
