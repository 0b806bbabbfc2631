use crate::api;
use crate::components::{CatImageCard, CatImageModal};
use crate::shared::components::ui::{Button, ErrorMessage, LoadingSection};
use crate::shared::modal::Modal;
use contracts::cat_api::{CatBreed, CatImage, BREED_PAGE_SIZE};
use contracts::shared::{FeedView, ImageFeed};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Paged images of one breed, opened from the breeds page.
#[component]
pub fn BreedModal(breed: CatBreed, on_close: Callback<()>) -> impl IntoView {
    let feed = RwSignal::new(ImageFeed::<CatImage>::new());
    let selected = RwSignal::new(None::<CatImage>);
    let breed_id = StoredValue::new(breed.id.clone());
    let breed_name = breed.name.clone();

    let fetch_page = move |page: u32| {
        let breed_id = breed_id.get_value();
        spawn_local(async move {
            match api::get_cats_by_breed(&breed_id, BREED_PAGE_SIZE, page).await {
                Ok(images) => feed.update(|f| f.finish(page, images, BREED_PAGE_SIZE)),
                Err(e) => {
                    log::error!("Error fetching breed images: {}", e);
                    feed.update(|f| f.fail(page));
                }
            }
        });
    };

    let load_first = move || {
        let mut page = 0;
        feed.update(|f| page = f.start_first_page());
        fetch_page(page);
    };

    let load_more = move |_: leptos::ev::MouseEvent| {
        let mut page = 0;
        feed.update(|f| page = f.start_next_page());
        fetch_page(page);
    };

    load_first();

    let view_state = Memo::new(move |_| feed.with(|f| f.view()));

    let loading_text = format!("Loading {} cats...", breed_name);
    let error_text = format!("We couldn't load images for {}. Please try again.", breed_name);

    view! {
        <Modal title=format!("{} Cats", breed.name) on_close=on_close max_width="4xl">
            <div>
                <p class="breed-description">{breed.description.clone()}</p>

                {move || match view_state.get() {
                    FeedView::Loading => view! {
                        <LoadingSection text=loading_text.clone() />
                    }.into_any(),
                    FeedView::Error => view! {
                        <ErrorMessage
                            title="Failed to load images"
                            message=error_text.clone()
                            on_retry=Callback::new(move |_| load_first())
                        />
                    }.into_any(),
                    FeedView::Empty => view! {
                        <p class="empty-message">"No images found for this breed."</p>
                    }.into_any(),
                    FeedView::Items => view! {
                        <div class="breed-grid">
                            <For
                                each=move || feed.with(|f| f.indexed_items())
                                key=|(index, image)| (*index, image.id.clone())
                                let:entry
                            >
                                {
                                    let (_, image) = entry;
                                    let clicked = image.clone();
                                    view! {
                                        <CatImageCard
                                            image=image
                                            show_breed_name=false
                                            on_click=Callback::new(move |_| selected.set(Some(clicked.clone())))
                                        />
                                    }
                                }
                            </For>
                        </div>
                    }.into_any(),
                }}

                <Show when=move || feed.with(|f| f.has_more && !f.items.is_empty())>
                    <div class="modal-button-container">
                        <Button
                            is_loading=Signal::derive(move || feed.with(|f| f.is_loading_more()))
                            disabled=Signal::derive(move || feed.with(|f| !f.can_load_more()))
                            on_click=Callback::new(load_more)
                        >
                            "Load More"
                        </Button>
                    </div>
                </Show>
            </div>
        </Modal>

        {move || selected.get().map(|image| view! {
            <CatImageModal
                image=image
                on_close=Callback::new(move |_| selected.set(None))
            />
        })}
    }
}
