use crate::shared::components::ui::{Card, CardContent, CardImage};
use contracts::cat_api::CatImage;
use leptos::prelude::*;

/// Image card with the breed name underneath
#[component]
pub fn CatImageCard(
    image: CatImage,
    #[prop(optional)] on_click: Option<Callback<()>>,
    /// "square" (default) or "auto"
    #[prop(optional, into)]
    aspect_ratio: MaybeProp<String>,
    #[prop(default = true)] show_breed_name: bool,
) -> impl IntoView {
    let alt = image.alt_text();
    let breed_name = image
        .first_breed()
        .filter(|_| show_breed_name)
        .map(|b| b.name.clone());

    view! {
        <Card class="cat-card" on_click=on_click>
            <CardImage src=image.url.clone() alt=alt aspect_ratio=aspect_ratio />
            {breed_name.map(|name| view! {
                <CardContent>
                    <p class="cat-card__breed">{name}</p>
                </CardContent>
            })}
        </Card>
    }
}
