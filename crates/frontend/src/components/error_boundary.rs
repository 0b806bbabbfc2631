use crate::shared::components::ui::ErrorFullPage;
use leptos::error::Errors;
use leptos::prelude::*;

/// Catches errors rendered by the routed pages and shows a full-page
/// fallback. "Try again" clears the errors and re-renders the children.
#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback={|errors: ArcRwSignal<Errors>| {
            errors.with(|errors| {
                for (_, error) in errors.iter() {
                    log::error!("Error caught by ErrorBoundary: {}", error);
                }
            });
            let retry = Callback::new(move |_| errors.set(Errors::default()));

            view! {
                <ErrorFullPage
                    title="Something went wrong"
                    message="We encountered an unexpected error. Please try again or return to the home page."
                    on_retry=retry
                    actions=|| view! {
                        <a href="/" class="button button--primary">"Go to Home"</a>
                    }
                />
            }
        }}>
            {children()}
        </ErrorBoundary>
    }
}
