use contracts::alarms::AlertSuppression;
use leptos::prelude::*;
use thaw::*;

use super::{empty_state, render_loadable, use_api_resource};
use crate::shared::date_utils::format_datetime;

#[component]
pub fn Suppressions() -> impl IntoView {
    let silences = use_api_resource(|api| async move { api.get_suppressions().await });

    let render = |silences: Vec<AlertSuppression>| {
        if silences.is_empty() {
            return empty_state("No suppressions");
        }
        let rows = silences
            .into_iter()
            .map(|silence| {
                let state_color = if silence.status.state == "active" {
                    BadgeColor::Success
                } else {
                    BadgeColor::Subtle
                };
                let matchers = silence.matchers_expression();
                let state = silence.status.state.clone();
                let starts = format_datetime(&silence.starts_at);
                let ends = format_datetime(&silence.ends_at);
                let created_by = silence.created_by.clone();
                let comment = silence.comment.clone();
                view! {
                    <TableRow>
                        <TableCell><TableCellLayout><code>{matchers}</code></TableCellLayout></TableCell>
                        <TableCell>
                            <TableCellLayout>
                                <Badge appearance=BadgeAppearance::Tint color=state_color>
                                    {state}
                                </Badge>
                            </TableCellLayout>
                        </TableCell>
                        <TableCell><TableCellLayout>{starts}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{ends}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{created_by}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{comment}</TableCellLayout></TableCell>
                    </TableRow>
                }
            })
            .collect_view();
        view! {
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Matchers"</TableHeaderCell>
                        <TableHeaderCell>"State"</TableHeaderCell>
                        <TableHeaderCell>"Starts"</TableHeaderCell>
                        <TableHeaderCell>"Ends"</TableHeaderCell>
                        <TableHeaderCell>"Created by"</TableHeaderCell>
                        <TableHeaderCell>"Comment"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        }
        .into_any()
    };

    view! {
        <div class="alarms-view alarms-view--suppressions">
            {render_loadable(silences, render)}
        </div>
    }
}
