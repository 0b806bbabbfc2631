use crate::components::error_boundary::AppErrorBoundary;
use crate::layout::MainLayout;
use crate::pages::{BreedsPage, FavoritesPage, NetworkErrorPage, NotFoundPage, RandomCatsPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <MainLayout>
                <AppErrorBoundary>
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=RandomCatsPage />
                        <Route path=path!("/breeds") view=BreedsPage />
                        <Route path=path!("/favorites") view=FavoritesPage />
                        <Route path=path!("/network-error") view=NetworkErrorPage />
                    </Routes>
                </AppErrorBoundary>
            </MainLayout>
        </Router>
    }
}
