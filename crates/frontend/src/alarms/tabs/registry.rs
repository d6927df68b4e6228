//! Tab registry - the only source of truth for alarm tab keys, labels and order.

use std::collections::HashSet;

/// One navigable section of the alarms dashboard.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlarmTab {
    Alerts,
    Rules,
    Suppressions,
    Routes,
    Teams,
}

impl AlarmTab {
    /// Every tab, left to right.
    pub const ALL: [AlarmTab; 5] = [
        AlarmTab::Alerts,
        AlarmTab::Rules,
        AlarmTab::Suppressions,
        AlarmTab::Routes,
        AlarmTab::Teams,
    ];

    /// Redirect target for unmatched paths. Not affected by `DisabledTabSet`.
    pub const DEFAULT: AlarmTab = AlarmTab::Alerts;

    pub fn key(self) -> &'static str {
        match self {
            AlarmTab::Alerts => "alerts",
            AlarmTab::Rules => "rules",
            AlarmTab::Suppressions => "suppressions",
            AlarmTab::Routes => "routes",
            AlarmTab::Teams => "teams",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AlarmTab::Alerts => "Alerts",
            AlarmTab::Rules => "Rules",
            AlarmTab::Suppressions => "Suppressions",
            AlarmTab::Routes => "Routes",
            AlarmTab::Teams => "Teams",
        }
    }

    /// Icon name for `shared::icons::icon`; `None` renders a text-only tab.
    pub fn icon(self) -> Option<&'static str> {
        match self {
            AlarmTab::Alerts => Some("notifications"),
            AlarmTab::Rules => Some("list"),
            AlarmTab::Suppressions | AlarmTab::Routes => None,
            AlarmTab::Teams => Some("group"),
        }
    }

    /// Looks a tab up by its URL key, ignoring ASCII case like the router does.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.key().eq_ignore_ascii_case(key))
    }
}

/// Tab keys the host asked to hide from the tab strip.
///
/// Membership is exact on the key string; unknown keys are kept but never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisabledTabSet(HashSet<String>);

impl DisabledTabSet {
    pub fn contains(&self, tab: AlarmTab) -> bool {
        self.0.contains(tab.key())
    }
}

impl<S: Into<String>> FromIterator<S> for DisabledTabSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Tabs to render as controls, in registry order.
pub fn visible_tabs(disabled: &DisabledTabSet) -> Vec<AlarmTab> {
    AlarmTab::ALL
        .into_iter()
        .filter(|tab| !disabled.contains(*tab))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_and_round_trip() {
        let keys: HashSet<&str> = AlarmTab::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys.len(), AlarmTab::ALL.len());
        for tab in AlarmTab::ALL {
            assert_eq!(AlarmTab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(AlarmTab::from_key("Teams"), Some(AlarmTab::Teams));
        assert_eq!(AlarmTab::from_key("team"), None);
        assert_eq!(AlarmTab::from_key(""), None);
    }

    #[test]
    fn empty_disabled_set_shows_every_tab() {
        assert_eq!(visible_tabs(&DisabledTabSet::default()), AlarmTab::ALL.to_vec());
    }

    #[test]
    fn every_subset_is_removed_in_order() {
        // All 2^5 subsets of the registry.
        for mask in 0u32..(1 << AlarmTab::ALL.len()) {
            let hidden: Vec<AlarmTab> = AlarmTab::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, t)| t)
                .collect();
            let disabled: DisabledTabSet = hidden.iter().map(|t| t.key()).collect();
            let expected: Vec<AlarmTab> = AlarmTab::ALL
                .into_iter()
                .filter(|t| !hidden.contains(t))
                .collect();
            assert_eq!(visible_tabs(&disabled), expected, "mask {:05b}", mask);
        }
    }

    #[test]
    fn unknown_and_miscased_keys_hide_nothing() {
        let disabled: DisabledTabSet = ["metrics", "Rules"].into_iter().collect();
        assert_ne!(disabled, DisabledTabSet::default());
        assert_eq!(visible_tabs(&disabled), AlarmTab::ALL.to_vec());
    }

    #[test]
    fn default_tab_and_text_only_tabs() {
        assert_eq!(AlarmTab::DEFAULT.key(), "alerts");
        assert!(AlarmTab::Suppressions.icon().is_none());
        assert!(AlarmTab::Routes.icon().is_none());
    }
}
