use leptos::prelude::*;

/// Button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", "outline", "ghost" or "danger"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "sm" or "lg"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Shows a spinner and disables the button
    #[prop(optional, into)]
    is_loading: MaybeProp<bool>,
    /// Stretch to the container width
    #[prop(optional)]
    full_width: bool,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        "danger" => "button--danger",
        _ => "button--primary",
    };

    let size_class = move || match size.get().as_deref() {
        Some("sm") => "button--small",
        Some("lg") => "button--large",
        _ => "",
    };

    let loading = move || is_loading.get().unwrap_or(false);
    let width_class = if full_width { "button--full" } else { "" };
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!(
                "button {} {} {} {}",
                variant_class(),
                size_class(),
                width_class,
                additional_class()
            )
            disabled=move || disabled.get().unwrap_or(false) || loading()
            aria-busy=move || loading().to_string()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            <Show when=loading>
                <span class="button__spinner" aria-hidden="true"></span>
            </Show>
            {children()}
        </button>
    }
}
