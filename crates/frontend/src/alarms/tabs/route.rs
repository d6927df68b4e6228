//! Maps the current location onto an alarm tab.
//!
//! Matching follows `{mount}/:tabName` as a prefix pattern: only the first
//! segment below the mount path is significant, deeper segments belong to
//! the collaborator view.

use super::registry::AlarmTab;

/// Outcome of matching a path against `{mount}/:tabName`.
///
/// Handed to the host's `make_tab_link` so it can build hrefs relative to
/// wherever the shell is mounted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabMatch {
    /// Mount path without trailing slash; empty when mounted at the root.
    pub mount_path: String,
    /// Decoded first segment below the mount path, if any.
    pub tab_name: Option<String>,
}

/// Active state of the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabRoute {
    Tab(AlarmTab),
    /// Bare mount path, unknown segment or a path outside the mount.
    Unmatched,
}

impl TabMatch {
    pub fn new(mount_path: &str, pathname: &str) -> Self {
        let mount_path = normalize_mount(mount_path).to_string();
        let tab_name = captured_segment(&mount_path, pathname).map(|segment| {
            urlencoding::decode(segment)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| segment.to_string())
        });
        Self {
            mount_path,
            tab_name,
        }
    }

    pub fn route(&self) -> TabRoute {
        self.tab_name
            .as_deref()
            .and_then(AlarmTab::from_key)
            .map_or(TabRoute::Unmatched, TabRoute::Tab)
    }

    /// Page heading, e.g. "CURRENT RULES". Shows the raw segment, falling back
    /// to the default tab key.
    pub fn heading(&self) -> String {
        let name = self
            .tab_name
            .as_deref()
            .unwrap_or(AlarmTab::DEFAULT.key());
        format!("Current {}", name).to_uppercase()
    }
}

pub fn resolve_tab_route(mount_path: &str, pathname: &str) -> TabRoute {
    TabMatch::new(mount_path, pathname).route()
}

/// Replace-navigation target for `pathname`, or `None` when a tab matched.
pub fn redirect_target(mount_path: &str, pathname: &str) -> Option<String> {
    match resolve_tab_route(mount_path, pathname) {
        TabRoute::Tab(_) => None,
        TabRoute::Unmatched => Some(default_tab_path(mount_path)),
    }
}

/// Canonical path of a tab under the mount path.
pub fn tab_path(mount_path: &str, tab: AlarmTab) -> String {
    format!("{}/{}", normalize_mount(mount_path), tab.key())
}

/// Where unmatched locations are redirected.
pub fn default_tab_path(mount_path: &str) -> String {
    tab_path(mount_path, AlarmTab::DEFAULT)
}

fn normalize_mount(mount_path: &str) -> &str {
    mount_path.trim_end_matches('/')
}

fn captured_segment<'a>(mount_path: &str, pathname: &'a str) -> Option<&'a str> {
    let head = pathname.get(..mount_path.len())?;
    if !head.eq_ignore_ascii_case(mount_path) {
        return None;
    }
    let rest = pathname[mount_path.len()..].strip_prefix('/')?;
    let segment = rest.split(['/', '?', '#']).next().unwrap_or_default();
    (!segment.is_empty()).then_some(segment)
}
