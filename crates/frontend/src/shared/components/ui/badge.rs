use leptos::prelude::*;

/// Small pill label, e.g. a breed's origin
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="badge badge--info">
            {children()}
        </span>
    }
}
