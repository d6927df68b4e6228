//! Views mounted by the alarms shell, one per tab.
//!
//! Each view reads `AlarmContext`, fetches once per API handle and renders a table.

mod alert_rules;
mod firing_alerts;
mod receivers;
mod routes;
mod suppressions;

pub use alert_rules::AlertRules;
pub use firing_alerts::FiringAlerts;
pub use receivers::Receivers;
pub use routes::Routes;
pub use suppressions::Suppressions;

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::{ApiError, ApiUtil};
use super::context::use_alarm_context;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Loadable<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

/// Tags requests so that only the most recently started one may publish.
#[derive(Debug, Clone, Default)]
pub(crate) struct RequestGeneration(Arc<AtomicU64>);

impl RequestGeneration {
    /// Starts a new request, superseding every earlier one.
    pub(crate) fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::Relaxed) == generation
    }
}

/// Runs `fetch` against the context's API handle, again whenever the handle changes.
///
/// A response that arrives after a newer request was started is dropped.
pub(crate) fn use_api_resource<T, F, Fut>(fetch: F) -> ReadSignal<Loadable<T>>
where
    T: Send + Sync + 'static,
    F: Fn(Arc<ApiUtil>) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let ctx = use_alarm_context();
    let api = Memo::new(move |_| ctx.with(|c| Arc::clone(&c.api_util)));
    let (state, set_state) = signal(Loadable::Loading);
    let requests = RequestGeneration::default();

    Effect::new(move |_| {
        let request = fetch(api.get());
        let generation = requests.begin();
        let requests = requests.clone();
        set_state.set(Loadable::Loading);
        spawn_local(async move {
            let result = request.await;
            if !requests.is_current(generation) {
                log::debug!("dropping superseded alarms response #{}", generation);
                return;
            }
            match result {
                Ok(data) => set_state.set(Loadable::Loaded(data)),
                Err(e) => {
                    log::warn!("alarms request failed: {}", e);
                    set_state.set(Loadable::Failed(e.to_string()));
                }
            }
        });
    });

    state
}

pub(crate) fn render_loadable<T, V>(
    state: ReadSignal<Loadable<T>>,
    render: impl Fn(T) -> V + Send + Sync + 'static,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || match state.get() {
        Loadable::Loading => view! {
            <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-lg);">
                <Spinner />
                <span>"Loading..."</span>
            </Flex>
        }
        .into_any(),
        Loadable::Failed(err) => view! {
            <div class="alarms__error">
                <strong>"Error: "</strong>{err}
            </div>
        }
        .into_any(),
        Loadable::Loaded(data) => render(data).into_any(),
    }
}

pub(crate) fn empty_state(text: &'static str) -> AnyView {
    view! {
        <div class="empty-state" style="padding: 48px; text-align: center;">
            <p style="color: var(--thaw-color-neutral-foreground-2);">{text}</p>
        </div>
    }
    .into_any()
}

pub(crate) fn severity_color(severity: Option<&str>) -> BadgeColor {
    match severity.map(str::to_ascii_lowercase).as_deref() {
        Some("critical") => BadgeColor::Danger,
        Some("major") => BadgeColor::Severe,
        Some("minor") | Some("warning") => BadgeColor::Warning,
        _ => BadgeColor::Informative,
    }
}
