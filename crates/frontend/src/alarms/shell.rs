//! `<Alarms>` - the tabbed container.
//!
//! Derives the active tab from the location, renders the visible tab links,
//! mounts exactly one view for the active tab and publishes `AlarmContext`
//! to everything below it. Unmatched locations are replaced with the
//! default tab's path.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use super::api::ApiUtil;
use super::context::{provide_alarm_context, AlarmContext, AlertClassifier, LabelFilter};
use super::rules::{merge_rule_maps, prometheus_rule_interface, RuleInterfaceMap, RuleMapCache};
use super::tabs::{redirect_target, visible_tabs, AlarmTab, DisabledTabSet, TabMatch, TabRoute};
use super::views::{AlertRules, FiringAlerts, Receivers, Routes, Suppressions};
use crate::shared::icons;

#[component]
pub fn Alarms<F>(
    /// Client for the alerting backend, shared with every view.
    #[prop(into)]
    api_util: Signal<Arc<ApiUtil>>,
    /// Builds the href of a tab control from the current match.
    make_tab_link: F,
    /// Path the container is mounted at, e.g. "/nms/alarms".
    #[prop(optional, into)]
    mount_path: String,
    /// Tab keys to leave out of the tab strip. Their routes stay reachable.
    #[prop(optional, into)]
    disabled_tabs: MaybeProp<Vec<String>>,
    /// Rule interfaces added to, or replacing, the built-in prometheus one.
    #[prop(optional, into)]
    rule_map: MaybeProp<Arc<RuleInterfaceMap>>,
    #[prop(optional, into)]
    threshold_editor_enabled: MaybeProp<bool>,
    #[prop(optional, into)]
    alert_manager_global_config_enabled: MaybeProp<bool>,
    #[prop(optional)]
    filter_labels: Option<LabelFilter>,
    #[prop(optional)]
    get_alert_type: Option<AlertClassifier>,
) -> impl IntoView
where
    F: Fn(&TabMatch, AlarmTab) -> String + Send + Sync + 'static,
{
    let location = use_location();
    let navigate = use_navigate();

    let tab_match = {
        let mount_path = mount_path.clone();
        Memo::new(move |_| location.pathname.with(|path| TabMatch::new(&mount_path, path)))
    };
    let route = Memo::new(move |_| tab_match.with(TabMatch::route));
    let active_tab = Memo::new(move |_| match route.get() {
        TabRoute::Tab(tab) => tab,
        TabRoute::Unmatched => AlarmTab::DEFAULT,
    });

    Effect::new(move |_| {
        if let Some(target) = location.pathname.with(|path| redirect_target(&mount_path, path)) {
            log::debug!("no alarm tab matched, redirecting to {}", target);
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let disabled = Memo::new(move |_| {
        disabled_tabs
            .get()
            .unwrap_or_default()
            .into_iter()
            .collect::<DisabledTabSet>()
    });

    let threshold_editor_enabled =
        Signal::derive(move || threshold_editor_enabled.get().unwrap_or(false));
    let (merged_rule_map, shared_config) = shared_config_memos(
        api_util,
        Signal::derive(move || rule_map.get()),
        threshold_editor_enabled,
        Signal::derive(move || alert_manager_global_config_enabled.get().unwrap_or(false)),
        filter_labels.clone(),
        get_alert_type,
    );
    provide_alarm_context(shared_config.into());

    let make_tab_link = Arc::new(make_tab_link);
    let tab_controls = move || {
        let make_tab_link = Arc::clone(&make_tab_link);
        visible_tabs(&disabled.get())
            .into_iter()
            .map(move |tab| {
                let make_tab_link = Arc::clone(&make_tab_link);
                view! {
                    <a
                        class="alarms__tab"
                        class:alarms__tab--active=move || active_tab.get() == tab
                        href=move || tab_match.with(|m| make_tab_link(m, tab))
                        data-tab-key=tab.key()
                    >
                        {tab.icon().map(icons::icon)}
                        <span class="alarms__tab-label">{tab.label()}</span>
                    </a>
                }
            })
            .collect_view()
    };

    // Re-runs only on route changes, so switching tabs swaps the mounted view.
    let content = move || match route.get() {
        TabRoute::Tab(tab) => {
            log::debug!("mounting alarm view '{}'", tab.key());
            match tab {
                AlarmTab::Alerts => view! {
                    <FiringAlerts filter_labels=filter_labels.clone() />
                }
                .into_any(),
                AlarmTab::Rules => view! {
                    <AlertRules
                        rule_map=merged_rule_map
                        threshold_editor_enabled=threshold_editor_enabled
                    />
                }
                .into_any(),
                AlarmTab::Suppressions => view! { <Suppressions /> }.into_any(),
                AlarmTab::Routes => view! { <Routes /> }.into_any(),
                AlarmTab::Teams => view! { <Receivers /> }.into_any(),
            }
        }
        TabRoute::Unmatched => ().into_any(),
    };

    view! {
        <div class="alarms">
            <div class="alarms__header">
                <h2 class="alarms__title">{move || tab_match.with(TabMatch::heading)}</h2>
                <nav class="alarms__tabs">{tab_controls}</nav>
            </div>
            <div class="alarms__content">{content}</div>
        </div>
    }
}

/// Merged rule map and published context, built from the shell's inputs.
///
/// The rule map depends only on the API handle and the caller's overrides, so
/// flag changes rebuild the context around the same map. A recomputation that
/// yields an equal context keeps the previous `Arc`.
fn shared_config_memos(
    api_util: Signal<Arc<ApiUtil>>,
    rule_map: Signal<Option<Arc<RuleInterfaceMap>>>,
    threshold_editor_enabled: Signal<bool>,
    alert_manager_global_config_enabled: Signal<bool>,
    filter_labels: Option<LabelFilter>,
    get_alert_type: Option<AlertClassifier>,
) -> (Memo<Arc<RuleInterfaceMap>>, Memo<Arc<AlarmContext>>) {
    let rule_map_cache = StoredValue::new(RuleMapCache::default());
    let merged_rule_map = Memo::new(move |_| {
        let api = api_util.get();
        let overrides = rule_map.get();
        rule_map_cache
            .try_update_value(|cache| cache.resolve(&api, overrides.as_ref()))
            .unwrap_or_else(|| {
                Arc::new(merge_rule_maps(
                    &prometheus_rule_interface(&api),
                    overrides.as_deref(),
                ))
            })
    });

    let shared_config = Memo::new(move |prev: Option<&Arc<AlarmContext>>| {
        let next = AlarmContext {
            api_util: api_util.get(),
            threshold_editor_enabled: threshold_editor_enabled.get(),
            alert_manager_global_config_enabled: alert_manager_global_config_enabled.get(),
            filter_labels: filter_labels.clone(),
            rule_map: merged_rule_map.get(),
            get_alert_type: get_alert_type.clone(),
        };
        match prev {
            Some(prev) if **prev == next => Arc::clone(prev),
            _ => Arc::new(next),
        }
    });

    (merged_rule_map, shared_config)
}
