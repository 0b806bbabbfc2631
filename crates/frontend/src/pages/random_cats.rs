use crate::api;
use crate::components::{CatImageCard, CatImageModal};
use crate::shared::components::ui::{Button, ErrorMessage, LoadingSection};
use contracts::cat_api::{CatImage, RANDOM_PAGE_SIZE};
use contracts::shared::{FeedView, ImageFeed};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Random cats with "Load More".
#[component]
pub fn RandomCatsPage() -> impl IntoView {
    let feed = RwSignal::new(ImageFeed::<CatImage>::new());
    let selected = RwSignal::new(None::<CatImage>);

    let fetch_page = move |page: u32| {
        spawn_local(async move {
            match api::get_random_cats(RANDOM_PAGE_SIZE, page).await {
                Ok(images) => feed.update(|f| f.finish(page, images, RANDOM_PAGE_SIZE)),
                Err(e) => {
                    log::error!("Error fetching random cats: {}", e);
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

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Random Cats"</h1>
                <p class="page__subtitle">"Click a cat to see its breed and add it to your favorites."</p>
            </div>

            {move || match view_state.get() {
                FeedView::Loading => view! { <LoadingSection text="Loading cats..." /> }.into_any(),
                FeedView::Error => view! {
                    <ErrorMessage
                        title="Failed to load cats"
                        message="We couldn't load cat images. Please try again."
                        on_retry=Callback::new(move |_| load_first())
                    />
                }.into_any(),
                FeedView::Empty => view! {
                    <p class="empty-message">"No cats found. Please try again later."</p>
                }.into_any(),
                FeedView::Items => view! {
                    <div class="cat-grid">
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
                                        on_click=Callback::new(move |_| selected.set(Some(clicked.clone())))
                                    />
                                }
                            }
                        </For>
                    </div>
                }.into_any(),
            }}

            {move || feed.with(|f| f.status.is_error() && !f.items.is_empty()).then(|| view! {
                <p class="inline-error">"Couldn't load more cats. Please try again."</p>
            })}

            <Show when=move || feed.with(|f| f.has_more && !f.items.is_empty())>
                <div class="page__footer">
                    <Button
                        is_loading=Signal::derive(move || feed.with(|f| f.is_loading_more()))
                        disabled=Signal::derive(move || feed.with(|f| !f.can_load_more()))
                        on_click=Callback::new(load_more)
                    >
                        "Load More"
                    </Button>
                </div>
            </Show>

            {move || selected.get().map(|image| view! {
                <CatImageModal
                    image=image
                    on_close=Callback::new(move |_| selected.set(None))
                />
            })}
        </div>
    }
}
