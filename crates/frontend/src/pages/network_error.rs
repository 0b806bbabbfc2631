use crate::shared::components::ui::ErrorFullPage;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

const DEFAULT_MESSAGE: &str =
    "We're having trouble connecting to our servers. Please check your internet connection and try again.";

/// Message shown on the page: the `message` query parameter when present.
fn resolve_message(from_query: Option<String>) -> String {
    from_query
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
}

/// Only same-origin paths are followed on retry.
fn retry_target(from: Option<String>) -> Option<String> {
    from.filter(|path| path.starts_with('/') && !path.starts_with("//"))
}

/// Reached via `/network-error?message=...&from=/path`. Retry returns to
/// `from`, or reloads the page when it is missing.
#[component]
pub fn NetworkErrorPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    let message = Signal::derive(move || resolve_message(query.read().get("message")));

    let on_retry = Callback::new(move |_| {
        match retry_target(query.read_untracked().get("from")) {
            Some(path) => navigate(&path, Default::default()),
            None => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            }
        }
    });

    view! {
        <ErrorFullPage
            title="Connection Error"
            message=message
            variant="error"
            on_retry=on_retry
            actions=|| view! {
                <a href="/" class="button button--primary">"Go to Home"</a>
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_message() {
        assert_eq!(resolve_message(None), DEFAULT_MESSAGE);
        assert_eq!(resolve_message(Some("  ".into())), DEFAULT_MESSAGE);
        assert_eq!(resolve_message(Some("API is down".into())), "API is down");
    }

    #[test]
    fn test_retry_target() {
        assert_eq!(retry_target(Some("/breeds".into())), Some("/breeds".to_string()));
        assert_eq!(retry_target(Some("//evil.example".into())), None);
        assert_eq!(retry_target(Some("https://evil.example".into())), None);
        assert_eq!(retry_target(None), None);
    }
}
