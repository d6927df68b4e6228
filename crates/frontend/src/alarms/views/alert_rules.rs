use std::sync::Arc;

use contracts::alarms::RuleSummary;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use super::{empty_state, render_loadable, severity_color, use_api_resource};
use crate::alarms::rules::{RuleInterface, RuleInterfaceMap};

/// Rules of every registered rule type, one section per type.
#[component]
pub fn AlertRules(
    #[prop(into)] rule_map: Signal<Arc<RuleInterfaceMap>>,
    #[prop(into)] threshold_editor_enabled: Signal<bool>,
) -> impl IntoView {
    let sections = move || {
        rule_map.with(|map| {
            map.iter()
                .map(|(rule_type, iface)| (rule_type.clone(), iface.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="alarms-view alarms-view--rules" data-threshold-editor=move || threshold_editor_enabled.get().to_string()>
            <Show when=move || threshold_editor_enabled.get()>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>"Threshold editor"</Badge>
            </Show>
            <For
                each=sections
                key=|(rule_type, iface)| (rule_type.clone(), iface.rules_url.clone())
                children=move |(rule_type, iface)| {
                    view! { <RuleTypeSection rule_type=rule_type iface=iface /> }
                }
            />
        </div>
    }
}

#[component]
fn RuleTypeSection(rule_type: String, iface: RuleInterface) -> impl IntoView {
    let url = iface.rules_url.clone();
    let rules = use_api_resource(move |api| {
        let url = url.clone();
        async move { api.get_json::<Vec<Value>>(&url).await }
    });

    let render = |rules: Vec<Value>| {
        let summaries: Vec<RuleSummary> = rules.iter().filter_map(RuleSummary::from_value).collect();
        if summaries.is_empty() {
            return empty_state("No rules configured");
        }
        let rows = summaries
            .into_iter()
            .map(|rule| {
                let color = severity_color(rule.severity.as_deref());
                let RuleSummary {
                    name,
                    severity,
                    description,
                } = rule;
                let severity = severity.unwrap_or_else(|| "-".to_string());
                let description = description.unwrap_or_default();
                view! {
                    <TableRow>
                        <TableCell><TableCellLayout><strong>{name}</strong></TableCellLayout></TableCell>
                        <TableCell>
                            <TableCellLayout>
                                <Badge appearance=BadgeAppearance::Tint color=color>
                                    {severity}
                                </Badge>
                            </TableCellLayout>
                        </TableCell>
                        <TableCell><TableCellLayout>{description}</TableCellLayout></TableCell>
                    </TableRow>
                }
            })
            .collect_view();
        view! {
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Severity"</TableHeaderCell>
                        <TableHeaderCell>"Description"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        }
        .into_any()
    };

    view! {
        <section class="alarms-rules__section" data-rule-type=rule_type>
            <h3>{iface.friendly_name}</h3>
            {render_loadable(rules, render)}
        </section>
    }
}
