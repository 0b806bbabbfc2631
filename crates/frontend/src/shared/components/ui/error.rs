use super::button::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

fn variant_or_default(variant: Option<String>) -> &'static str {
    match variant.as_deref() {
        Some("warning") => "warning",
        Some("info") => "info",
        _ => "error",
    }
}

/// Inline error with an optional "Try again" button
#[component]
pub fn ErrorMessage(
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(into)] message: Signal<String>,
    /// Re-issues the failed request
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
    /// "error" (default), "warning" or "info"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)] actions: Option<ViewFn>,
) -> impl IntoView {
    let variant = move || variant_or_default(variant.get());
    let title = move || title.get().unwrap_or_else(|| "Error".to_string());
    let has_actions = on_retry.is_some() || actions.is_some();

    view! {
        <div class=move || format!("error-box error-box--{}", variant()) role="alert">
            <div class="error-box__icon">{move || icon(variant())}</div>
            <div class="error-box__body">
                <h3 class="error-box__title">{title}</h3>
                <p class="error-box__message">{move || message.get()}</p>
                {has_actions.then(|| view! {
                    <div class="error-box__actions">
                        {on_retry.map(|retry| view! {
                            <Button
                                variant="outline"
                                size="sm"
                                on_click=Callback::new(move |_| retry.run(()))
                            >
                                "Try again"
                            </Button>
                        })}
                        {actions.as_ref().map(|a| a.run())}
                    </div>
                })}
            </div>
        </div>
    }
}

/// Error that replaces the whole page content
#[component]
pub fn ErrorFullPage(
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional, into)] message: MaybeProp<String>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] actions: Option<ViewFn>,
) -> impl IntoView {
    let variant = move || variant_or_default(variant.get());
    let title = move || title.get().unwrap_or_else(|| "Something went wrong".to_string());
    let message = move || {
        message.get().unwrap_or_else(|| {
            "We encountered an error while loading the page. Please try again.".to_string()
        })
    };
    let retry_variant = move || match variant() {
        "error" => "danger",
        "warning" => "secondary",
        _ => "primary",
    };

    view! {
        <div class="error-fullpage">
            <div class=move || format!("error-fullpage__icon error-fullpage__icon--{}", variant())>
                {move || icon(variant())}
            </div>
            <h2 class="error-fullpage__title">{title}</h2>
            <p class="error-fullpage__message">{message}</p>
            <div class="error-fullpage__actions">
                {on_retry.map(|retry| view! {
                    <Button variant=retry_variant() on_click=Callback::new(move |_| retry.run(()))>
                        "Try again"
                    </Button>
                })}
                {actions.as_ref().map(|a| a.run())}
            </div>
        </div>
    }
}
