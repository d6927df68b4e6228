use chrono::{DateTime, Utc};
use contracts::alarms::FiringAlarm;
use leptos::prelude::*;
use thaw::*;

use super::{empty_state, render_loadable, severity_color, use_api_resource};
use crate::alarms::context::{apply_label_filter, use_alarm_context, LabelFilter};
use crate::shared::date_utils::{format_datetime, format_elapsed};

/// Display values of one alert row, owned so the row view can move them.
#[derive(Debug, Clone, PartialEq)]
struct AlertRow {
    name: String,
    silenced: bool,
    severity: Option<String>,
    alert_type: String,
    labels: String,
    started: String,
    active_for: String,
}

impl AlertRow {
    fn new(
        alert: &FiringAlarm,
        filter_labels: Option<&LabelFilter>,
        alert_type: Option<String>,
        now: &DateTime<Utc>,
    ) -> Self {
        let labels = apply_label_filter(filter_labels, &alert.labels)
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            name: alert.name().to_string(),
            silenced: alert.is_silenced(),
            severity: alert.severity().map(str::to_string),
            alert_type: alert_type.unwrap_or_default(),
            labels,
            started: format_datetime(&alert.starts_at),
            active_for: format_elapsed(&alert.starts_at, now),
        }
    }
}

/// Alerts currently firing.
#[component]
pub fn FiringAlerts(filter_labels: Option<LabelFilter>) -> impl IntoView {
    let ctx = use_alarm_context();
    let alerts = use_api_resource(|api| async move { api.view_firing_alerts().await });

    let render = move |alerts: Vec<FiringAlarm>| {
        if alerts.is_empty() {
            return empty_state("No alerts are firing");
        }
        let now = Utc::now();
        let shared = ctx.get();
        let rows = alerts
            .iter()
            .map(|alert| {
                AlertRow::new(alert, filter_labels.as_ref(), shared.alert_type(alert), &now)
            })
            .map(|row| {
                let color = severity_color(row.severity.as_deref());
                let AlertRow {
                    name,
                    silenced,
                    severity,
                    alert_type,
                    labels,
                    started,
                    active_for,
                } = row;
                view! {
                    <TableRow>
                        <TableCell>
                            <TableCellLayout>
                                <strong>{name}</strong>
                                {silenced.then(|| view! {
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"silenced"</Badge>
                                })}
                            </TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>
                                <Badge appearance=BadgeAppearance::Tint color=color>
                                    {severity.unwrap_or_else(|| "-".to_string())}
                                </Badge>
                            </TableCellLayout>
                        </TableCell>
                        <TableCell><TableCellLayout>{alert_type}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{labels}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{started}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{active_for}</TableCellLayout></TableCell>
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
                        <TableHeaderCell>"Type"</TableHeaderCell>
                        <TableHeaderCell>"Labels"</TableHeaderCell>
                        <TableHeaderCell>"Started"</TableHeaderCell>
                        <TableHeaderCell>"Active for"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        }
        .into_any()
    };

    view! {
        <div class="alarms-view alarms-view--alerts">
            {render_loadable(alerts, render)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::TimeZone;
    use contracts::alarms::Labels;

    use super::*;

    fn alert() -> FiringAlarm {
        serde_json::from_str(
            r#"{
                "labels": {"alertname": "TargetDown", "severity": "critical", "team": "db"},
                "startsAt": "2024-03-15T14:00:00Z",
                "fingerprint": "f-1",
                "status": {"state": "suppressed", "silencedBy": ["s-1"]}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn row_owns_every_displayed_value() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 15, 30, 0).unwrap();
        let row = AlertRow::new(&alert(), None, None, &now);
        assert_eq!(row.name, "TargetDown");
        assert!(row.silenced);
        assert_eq!(row.severity.as_deref(), Some("critical"));
        assert_eq!(row.alert_type, "");
        assert_eq!(row.labels, "alertname=TargetDown, severity=critical, team=db");
        assert_eq!(row.started, format_datetime(&alert().starts_at));
        assert_eq!(row.active_for, format_elapsed(&alert().starts_at, &now));
    }

    #[test]
    fn row_applies_filter_and_alert_type() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 15, 30, 0).unwrap();
        let filter: LabelFilter = Arc::new(|labels: &Labels| {
            labels
                .iter()
                .filter(|(k, _)| k.as_str() == "team")
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Labels>()
        });
        let row = AlertRow::new(&alert(), Some(&filter), Some("infra".to_string()), &now);
        assert_eq!(row.labels, "team=db");
        assert_eq!(row.alert_type, "infra");
    }
}
