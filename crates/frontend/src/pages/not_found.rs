use crate::shared::components::ui::ErrorFullPage;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <ErrorFullPage
            title="Page not found"
            message="The page you're looking for doesn't exist or has been moved."
            variant="warning"
            actions=|| view! {
                <a href="/" class="button button--primary">
                    {icon("home")}
                    "Go to Home"
                </a>
            }
        />
    }
}
