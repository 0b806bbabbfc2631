use crate::api;
use crate::components::{CatImageCard, CatImageModal};
use crate::favorites::use_favorites;
use crate::shared::components::ui::{Button, ErrorMessage, LoadingSection};
use crate::shared::icons::icon;
use contracts::cat_api::FavouriteEntry;
use contracts::shared::ApiStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Remote favourites, each opening the image modal with its favourite id.
#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites = use_favorites();
    let entries = RwSignal::new(Vec::<FavouriteEntry>::new());
    let status = RwSignal::new(ApiStatus::Idle);
    let selected = RwSignal::new(None::<FavouriteEntry>);

    let fetch = move || {
        status.set(ApiStatus::Loading);
        spawn_local(async move {
            match api::get_favourites().await {
                Ok(list) => {
                    entries.set(list);
                    status.set(ApiStatus::Success);
                }
                Err(e) => {
                    log::error!("Error fetching favorites: {}", e);
                    status.set(ApiStatus::Error);
                }
            }
        });
    };

    fetch();

    let on_favorite_removed = Callback::new(move |_| {
        selected.set(None);
        fetch();
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Your Favorite Cats"</h1>
                <p class="page__subtitle">
                    {move || format!("{} saved on this device", favorites.count())}
                </p>
                <Button variant="secondary" size="sm" on_click=Callback::new(move |_| fetch())>
                    {icon("refresh")}
                    "Refresh"
                </Button>
            </div>

            {move || {
                let is_empty = entries.with(|e| e.is_empty());
                match status.get() {
                    ApiStatus::Idle | ApiStatus::Loading if is_empty => {
                        view! { <LoadingSection text="Loading your favorites..." /> }.into_any()
                    }
                    ApiStatus::Error if is_empty => view! {
                        <ErrorMessage
                            title="Failed to load favorites"
                            message="We couldn't load your favorite cats. Please try again."
                            on_retry=Callback::new(move |_| fetch())
                        />
                    }.into_any(),
                    _ if is_empty => view! {
                        <div class="empty-state">
                            <p class="empty-message">"You haven't added any favorites yet."</p>
                            <a href="/" class="button button--primary">"Browse Random Cats"</a>
                        </div>
                    }.into_any(),
                    _ => view! {
                        <div class="cat-grid">
                            <For
                                each=move || entries.get()
                                key=|entry| entry.id
                                let:entry
                            >
                                {
                                    let image = entry.display_image();
                                    view! {
                                        <CatImageCard
                                            image=image
                                            on_click=Callback::new(move |_| selected.set(Some(entry.clone())))
                                        />
                                    }
                                }
                            </For>
                        </div>
                    }.into_any(),
                }
            }}

            {move || selected.get().map(|entry| view! {
                <CatImageModal
                    image=entry.display_image()
                    favorite_id=Some(entry.id)
                    on_close=Callback::new(move |_| selected.set(None))
                    on_favorite_removed=on_favorite_removed
                />
            })}
        </div>
    }
}
