use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

use crate::alarms::tabs::tab_path;
use crate::alarms::{AlarmTab, Alarms, ApiUtil, TabMatch};
use crate::shared::api_utils::query_param;

/// Where the standalone app mounts the alarms dashboard.
pub const ALARMS_MOUNT_PATH: &str = "/alarms";

/// Query parameter selecting the network the dashboard is scoped to.
pub const NETWORK_QUERY_PARAM: &str = "network";

fn tab_link(tab_match: &TabMatch, tab: AlarmTab) -> String {
    tab_path(&tab_match.mount_path, tab)
}

#[component]
pub fn App() -> impl IntoView {
    let api_util = ApiUtil::from_location();
    let api_util = Arc::new(match query_param(NETWORK_QUERY_PARAM) {
        Some(network) => api_util.with_network(network),
        None => api_util,
    });
    log::info!("alarms api: {}", api_util.url(""));

    view! {
        <ConfigProvider>
            <Router>
                <Alarms
                    api_util=Signal::stored(api_util)
                    mount_path=ALARMS_MOUNT_PATH
                    make_tab_link=tab_link
                />
            </Router>
        </ConfigProvider>
    }
}
