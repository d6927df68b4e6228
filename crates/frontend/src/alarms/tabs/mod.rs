//! Tab management for the alarms shell
//!
//! - `registry` - fixed, ordered set of alarm tabs and the hidden-tab filter
//! - `route` - path matching `{mount}/:tabName` onto a tab or the redirect case

pub mod registry;
pub mod route;

pub use registry::{visible_tabs, AlarmTab, DisabledTabSet};
pub use route::{
    default_tab_path, redirect_target, resolve_tab_route, tab_path, TabMatch, TabRoute,
};
