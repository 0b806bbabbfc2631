use leptos::prelude::*;

/// Card container; hoverable and clickable when `on_click` is set
#[component]
pub fn Card(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Click handler, also enables the hover style
    #[prop(default = None)]
    on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let hoverable = on_click.is_some();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div
            class=move || format!(
                "card {} {}",
                if hoverable { "card--hoverable" } else { "" },
                additional_class()
            )
            role=hoverable.then_some("button")
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
pub fn CardImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    /// "square" (default) or "auto"
    #[prop(optional, into)]
    aspect_ratio: MaybeProp<String>,
) -> impl IntoView {
    let ratio_class = move || match aspect_ratio.get().as_deref() {
        Some("auto") => "card__image--auto",
        _ => "card__image--square",
    };

    view! {
        <div class=move || format!("card__image {}", ratio_class())>
            <img src=src alt=alt loading="lazy" />
        </div>
    }
}

#[component]
pub fn CardContent(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("card__content {}", additional_class())>
            {children()}
        </div>
    }
}
