use leptos::prelude::*;

/// Spinner with optional caption
#[component]
pub fn Loading(
    #[prop(optional, into)] text: MaybeProp<String>,
    /// "sm", "md" (default) or "lg"
    #[prop(optional, into)]
    size: MaybeProp<String>,
) -> impl IntoView {
    let size_class = move || match size.get().as_deref() {
        Some("sm") => "loading__spinner--small",
        Some("lg") => "loading__spinner--large",
        _ => "",
    };

    view! {
        <div class="loading" role="status">
            <span class=move || format!("loading__spinner {}", size_class()) aria-hidden="true"></span>
            {move || text.get().map(|t| view! { <span class="loading__text">{t}</span> })}
        </div>
    }
}

/// Loading placeholder that fills a page section
#[component]
pub fn LoadingSection(#[prop(optional, into)] text: MaybeProp<String>) -> impl IntoView {
    view! {
        <div class="loading-section">
            <Loading text=text size="lg" />
        </div>
    }
}
