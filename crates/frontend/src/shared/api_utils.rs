//! Helpers for building TheCatAPI request URLs.

use super::config::app_config;

/// Base URL of the cat API, without a trailing slash.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/images/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    app_config().api.base_url.clone()
}

/// API key sent as `x-api-key`, `None` when not configured.
pub fn api_key() -> Option<&'static str> {
    let key = app_config().api.api_key.as_str();
    (!key.is_empty()).then_some(key)
}

/// Build a full API URL from a path and an optional query string.
pub fn api_url(path: &str, query: Option<&str>) -> String {
    join_url(&api_base(), path, query)
}

fn join_url(base: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{}/{}?{}", base, path, q),
        None => format!("{}/{}", base, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://api.thecatapi.com/v1", "/breeds", None),
            "https://api.thecatapi.com/v1/breeds"
        );
        assert_eq!(
            join_url("https://api.thecatapi.com/v1", "images/search", Some("limit=10&page=0")),
            "https://api.thecatapi.com/v1/images/search?limit=10&page=0"
        );
        assert_eq!(
            join_url("http://localhost", "favourites", Some("")),
            "http://localhost/favourites"
        );
    }
}
