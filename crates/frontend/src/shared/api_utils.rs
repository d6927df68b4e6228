//! URL helpers for reaching the alerting backend from the page.
//!
//! `api_base` and `query_param` read the browser location; `join_url` and
//! `parse_query_param` are pure.

/// Backend base URL for the current page: same protocol and host, port 3000.
///
/// Returns an empty string outside a browser window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Value of `name` in the page's query string, if present and non-empty.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    parse_query_param(&search, name)
}

/// Finds `name` in a query string such as `?network=lab%201&tab=x` and
/// returns its decoded value. Empty values count as absent.
pub fn parse_query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            let decoded = urlencoding::decode(&value)
                .map(|decoded| decoded.into_owned())
                .ok();
            decoded.unwrap_or(value)
        })
        .filter(|value| !value.is_empty())
}

/// Joins a base URL and a path with exactly one `/` between them.
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("http://host:3000/", "/api/alarms"), "http://host:3000/api/alarms");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000", "api/alarms"), "http://h:3000/api/alarms");
        assert_eq!(join_url("http://h:3000/", "/api"), "http://h:3000/api");
        assert_eq!(join_url("", "/api"), "/api");
        assert_eq!(join_url("http://h:3000", ""), "http://h:3000");
    }

    #[test]
    fn test_parse_query_param() {
        assert_eq!(
            parse_query_param("?network=lab%20net&x=1", "network").as_deref(),
            Some("lab net")
        );
        assert_eq!(parse_query_param("x=1&network=a+b", "network").as_deref(), Some("a b"));
        assert_eq!(parse_query_param("?network=", "network"), None);
        assert_eq!(parse_query_param("?networks=a", "network"), None);
        assert_eq!(parse_query_param("", "network"), None);
    }
}
