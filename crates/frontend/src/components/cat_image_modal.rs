use crate::favorites::{add_to_favorites, remove_from_favorites, use_favorites};
use crate::shared::components::ui::{Button, ErrorMessage};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::cat_api::{CatBreed, CatImage};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn BreedDetails(breed: CatBreed) -> impl IntoView {
    view! {
        <div class="breed-details">
            <h4 class="section-heading">{format!("About {}", breed.name)}</h4>
            <p class="section-description">{breed.description.clone()}</p>

            <div class="details-grid">
                <div><span class="details-grid__label">"Origin: "</span>{breed.origin.clone()}</div>
                <div><span class="details-grid__label">"Life Span: "</span>{format!("{} years", breed.life_span)}</div>
                <div><span class="details-grid__label">"Temperament: "</span>{breed.temperament.clone()}</div>
                <div><span class="details-grid__label">"Weight: "</span>{format!("{} kg", breed.weight.metric)}</div>
            </div>

            {breed.wikipedia_url.clone().map(|url| view! {
                <a href=url target="_blank" rel="noopener noreferrer" class="link-with-icon">
                    "Learn more on Wikipedia"
                    {icon("external-link")}
                </a>
            })}
        </div>
    }
}

/// Image details with the favourite toggle.
///
/// The image counts as a favourite when the caller passes a remote
/// `favorite_id` or the local list contains it.
#[component]
pub fn CatImageModal(
    image: CatImage,
    on_close: Callback<()>,
    /// Remote favourite id, known when opened from the favourites page
    #[prop(default = None)]
    favorite_id: Option<u64>,
    #[prop(optional)] on_favorite_removed: Option<Callback<()>>,
) -> impl IntoView {
    let favorites = use_favorites();
    let is_adding = RwSignal::new(false);
    let is_removing = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let title = image
        .first_breed()
        .map(|b| b.name.clone())
        .unwrap_or_else(|| "Cat Image".to_string());
    let breed = image.first_breed().cloned();
    let url = image.url.clone();
    let alt = image.alt_text();
    let image = StoredValue::new(image);

    let is_image_favorite = Signal::derive(move || {
        favorite_id.is_some() || image.with_value(|img| favorites.is_favorite(&img.id))
    });

    let handle_add = move |_: leptos::ev::MouseEvent| {
        is_adding.set(true);
        error.set(None);
        let image = image.get_value();
        spawn_local(async move {
            if add_to_favorites(favorites, &image).await.is_err() {
                error.set(Some("Failed to add to favorites. Please try again.".to_string()));
            }
            is_adding.set(false);
        });
    };

    let handle_remove = move |_: leptos::ev::MouseEvent| {
        is_removing.set(true);
        error.set(None);
        let image_id = image.with_value(|img| img.id.clone());
        spawn_local(async move {
            match remove_from_favorites(favorites, &image_id, favorite_id).await {
                Ok(()) => {
                    if let Some(callback) = on_favorite_removed {
                        callback.run(());
                    }
                }
                Err(_) => {
                    error.set(Some("Failed to remove from favorites. Please try again.".to_string()));
                }
            }
            is_removing.set(false);
        });
    };

    view! {
        <Modal title=title on_close=on_close max_width="2xl">
            <div class="modal-content-layout">
                <div class="modal-column">
                    <div class="image-container">
                        <img src=url alt=alt class="responsive-image" />
                    </div>
                </div>

                <div class="modal-column">
                    {match breed {
                        Some(breed) => view! { <BreedDetails breed=breed /> }.into_any(),
                        None => view! {
                            <p class="empty-state-text">"No breed information available for this cat."</p>
                        }.into_any(),
                    }}

                    <div class="favorite-actions">
                        {move || error.get().map(|message| view! {
                            <ErrorMessage message=message />
                        })}

                        {move || if is_image_favorite.get() {
                            view! {
                                <Button
                                    variant="outline"
                                    full_width=true
                                    is_loading=Signal::derive(move || is_removing.get())
                                    on_click=Callback::new(handle_remove)
                                >
                                    {icon("heart-filled")}
                                    "Remove from Favorites"
                                </Button>
                            }.into_any()
                        } else {
                            view! {
                                <Button
                                    variant="primary"
                                    full_width=true
                                    is_loading=Signal::derive(move || is_adding.get())
                                    on_click=Callback::new(handle_add)
                                >
                                    {icon("heart")}
                                    "Add to Favorites"
                                </Button>
                            }.into_any()
                        }}
                    </div>
                </div>
            </div>
        </Modal>
    }
}
