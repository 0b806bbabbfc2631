use crate::favorites::FavoritesContext;
use crate::routes::routes::AppRoutes;
use crate::shared::modal::ModalStack;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Favorites are read from localStorage once and shared with every page.
    provide_context(FavoritesContext::new());
    provide_context(ModalStack::new());

    view! {
        <AppRoutes />
    }
}
