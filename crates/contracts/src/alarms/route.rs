use serde::{Deserialize, Serialize};

use super::Labels;

/// Alertmanager routing tree, as returned by `GET /route`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRoutes {
    #[serde(default)]
    pub receiver: String,
    #[serde(default)]
    pub group_by: Vec<String>,
    #[serde(default, rename = "match")]
    pub match_labels: Labels,
    #[serde(default)]
    pub match_re: Labels,
    #[serde(default, rename = "continue")]
    pub continue_matching: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_wait: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_interval: Option<String>,
    #[serde(default)]
    pub routes: Vec<AlertRoutes>,
}

impl AlertRoutes {
    /// Depth-first walk of the tree, root first, paired with nesting depth.
    pub fn flatten(&self) -> Vec<(usize, &AlertRoutes)> {
        let mut out = Vec::new();
        self.walk(0, &mut out);
        out
    }

    fn walk<'a>(&'a self, depth: usize, out: &mut Vec<(usize, &'a AlertRoutes)>) {
        out.push((depth, self));
        for child in &self.routes {
            child.walk(depth + 1, out);
        }
    }

    pub fn matcher_summary(&self) -> String {
        let exact = self
            .match_labels
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, v));
        let regex = self
            .match_re
            .iter()
            .map(|(k, v)| format!("{}=~\"{}\"", k, v));
        exact.chain(regex).collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_nested_routes_depth_first() {
        let json = r#"{
            "receiver": "default",
            "group_by": ["alertname"],
            "routes": [
                {"receiver": "db-team", "match": {"team": "db"},
                 "routes": [{"receiver": "db-pager", "match_re": {"severity": "crit.*"}}]},
                {"receiver": "net-team", "match": {"team": "net"}, "continue": true}
            ]
        }"#;
        let tree: AlertRoutes = serde_json::from_str(json).unwrap();
        let flat: Vec<(usize, &str)> = tree
            .flatten()
            .into_iter()
            .map(|(depth, r)| (depth, r.receiver.as_str()))
            .collect();
        assert_eq!(
            flat,
            vec![(0, "default"), (1, "db-team"), (2, "db-pager"), (1, "net-team")]
        );
        assert!(tree.routes[1].continue_matching);
        assert_eq!(tree.routes[0].routes[0].matcher_summary(), r#"severity=~"crit.*""#);
    }
}
