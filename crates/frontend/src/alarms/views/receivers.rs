use contracts::alarms::AlertReceiver;
use leptos::prelude::*;
use thaw::*;

use super::{empty_state, render_loadable, use_api_resource};
use crate::alarms::context::use_alarm_context;

/// Receivers ("teams") and the channels each one notifies.
#[component]
pub fn Receivers() -> impl IntoView {
    let ctx = use_alarm_context();
    let global_config_enabled = move || ctx.with(|c| c.alert_manager_global_config_enabled);
    let receivers = use_api_resource(|api| async move { api.get_receivers().await });

    let render = |receivers: Vec<AlertReceiver>| {
        if receivers.is_empty() {
            return empty_state("No teams configured");
        }
        let rows = receivers
            .into_iter()
            .map(|receiver| {
                let name = receiver.name.clone();
                let channels = receiver
                    .channel_kinds()
                    .into_iter()
                    .map(|kind| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{kind}</Badge>
                    })
                    .collect_view();
                view! {
                    <TableRow>
                        <TableCell><TableCellLayout><strong>{name}</strong></TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{channels}</TableCellLayout></TableCell>
                    </TableRow>
                }
            })
            .collect_view();
        view! {
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Team"</TableHeaderCell>
                        <TableHeaderCell>"Channels"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        }
        .into_any()
    };

    view! {
        <div class="alarms-view alarms-view--teams">
            <Show when=global_config_enabled>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"Global config"</Badge>
            </Show>
            {render_loadable(receivers, render)}
        </div>
    }
}
