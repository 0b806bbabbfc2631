use crate::api::cat_service;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ApiReachability {
    Online,
    Offline,
    Checking,
}

impl ApiReachability {
    fn display_text(&self) -> &'static str {
        match self {
            ApiReachability::Online => "Cat API: Online",
            ApiReachability::Offline => "Cat API: Offline",
            ApiReachability::Checking => "Cat API: Checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ApiReachability::Online => "status-online",
            ApiReachability::Offline => "status-offline",
            ApiReachability::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ApiReachability::Checking);

    let check_api = move || {
        status.set(ApiReachability::Checking);

        spawn_local(async move {
            let result = cat_service::ping().await;
            if !result {
                log::warn!("Cat API is not reachable");
            }
            status.set(if result {
                ApiReachability::Online
            } else {
                ApiReachability::Offline
            });
        });
    };

    // Check once on mount
    Effect::new(move |_| {
        check_api();
    });

    view! {
        <footer class="status-bar">
            <span class="status-bar__brand">"Cat Lovers App · Powered by TheCatAPI"</span>
            <button
                type="button"
                class=move || format!("status-bar__status {}", status.get().css_class())
                title="Check again"
                on:click=move |_| check_api()
            >
                {move || status.get().display_text()}
            </button>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachability_labels() {
        assert_eq!(ApiReachability::Offline.display_text(), "Cat API: Offline");
        assert_eq!(ApiReachability::Checking.css_class(), "status-checking");
    }
}
