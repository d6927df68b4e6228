use contracts::alarms::AlertRoutes;
use leptos::prelude::*;
use thaw::*;

use super::{render_loadable, use_api_resource};

#[derive(Debug, Clone, PartialEq)]
struct RouteRow {
    indent: String,
    receiver: String,
    matchers: String,
    group_by: String,
    continue_matching: bool,
}

/// One row per route, root first, copied out of the tree.
fn route_rows(tree: &AlertRoutes) -> Vec<RouteRow> {
    tree.flatten()
        .into_iter()
        .map(|(depth, route)| RouteRow {
            indent: format!("padding-left: {}px;", depth * 24),
            receiver: route.receiver.clone(),
            matchers: if depth == 0 {
                "(root)".to_string()
            } else {
                route.matcher_summary()
            },
            group_by: route.group_by.join(", "),
            continue_matching: route.continue_matching,
        })
        .collect()
}

/// Notification routing tree, one row per route, indented by depth.
#[component]
pub fn Routes() -> impl IntoView {
    let tree = use_api_resource(|api| async move { api.get_route_tree().await });

    let render = |tree: AlertRoutes| {
        let rows = route_rows(&tree)
            .into_iter()
            .map(|row| {
                let RouteRow {
                    indent,
                    receiver,
                    matchers,
                    group_by,
                    continue_matching,
                } = row;
                view! {
                    <TableRow>
                        <TableCell>
                            <TableCellLayout>
                                <span style=indent>{receiver}</span>
                            </TableCellLayout>
                        </TableCell>
                        <TableCell><TableCellLayout><code>{matchers}</code></TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{group_by}</TableCellLayout></TableCell>
                        <TableCell>
                            <TableCellLayout>
                                {continue_matching.then(|| view! {
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"continue"</Badge>
                                })}
                            </TableCellLayout>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view();
        view! {
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Receiver"</TableHeaderCell>
                        <TableHeaderCell>"Matchers"</TableHeaderCell>
                        <TableHeaderCell>"Group by"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        }
    };

    view! {
        <div class="alarms-view alarms-view--routes">
            {render_loadable(tree, render)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_owned_and_indented_by_depth() {
        let tree: AlertRoutes = serde_json::from_str(
            r#"{
                "receiver": "default",
                "group_by": ["alertname", "cluster"],
                "routes": [
                    {"receiver": "db-team", "match": {"team": "db"}, "continue": true}
                ]
            }"#,
        )
        .unwrap();
        let rows = route_rows(&tree);
        drop(tree);

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            RouteRow {
                indent: "padding-left: 0px;".to_string(),
                receiver: "default".to_string(),
                matchers: "(root)".to_string(),
                group_by: "alertname, cluster".to_string(),
                continue_matching: false,
            }
        );
        assert_eq!(rows[1].indent, "padding-left: 24px;");
        assert_eq!(rows[1].receiver, "db-team");
        assert_eq!(rows[1].matchers, r#"team="db""#);
        assert!(rows[1].continue_matching);
    }
}
