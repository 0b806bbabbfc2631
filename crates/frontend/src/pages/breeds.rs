use crate::api;
use crate::components::BreedModal;
use crate::shared::components::ui::{Badge, Card, CardContent, ErrorMessage, Input, LoadingSection};
use contracts::cat_api::CatBreed;
use contracts::shared::ApiStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Origin shown as a badge; blank origins get none.
fn origin_label(origin: &str) -> Option<String> {
    let origin = origin.trim();
    (!origin.is_empty()).then(|| origin.to_string())
}

#[component]
fn BreedCard(breed: CatBreed, on_click: Callback<()>) -> impl IntoView {
    view! {
        <Card class="breed-card" on_click=Some(on_click)>
            <CardContent>
                <h3 class="breed-card__name">{breed.name.clone()}</h3>
                {origin_label(&breed.origin).map(|origin| view! {
                    <Badge>{origin}</Badge>
                })}
                <p class="breed-card__temperament">{breed.temperament.clone()}</p>
            </CardContent>
        </Card>
    }
}

/// All breeds with a name/origin filter; a click opens the breed's images.
#[component]
pub fn BreedsPage() -> impl IntoView {
    let breeds = RwSignal::new(Vec::<CatBreed>::new());
    let status = RwSignal::new(ApiStatus::Idle);
    let filter = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<CatBreed>);

    let fetch = move || {
        status.set(ApiStatus::Loading);
        spawn_local(async move {
            match api::get_breeds().await {
                Ok(list) => {
                    breeds.set(list);
                    status.set(ApiStatus::Success);
                }
                Err(e) => {
                    log::error!("Error fetching breeds: {}", e);
                    status.set(ApiStatus::Error);
                }
            }
        });
    };

    fetch();

    let filtered = Memo::new(move |_| {
        let needle = filter.get();
        breeds.with(|list| {
            list.iter()
                .filter(|b| b.matches(&needle))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Cat Breeds"</h1>
                <Input
                    input_type="search"
                    placeholder="Filter by name or origin"
                    value=filter
                    on_input=Callback::new(move |v: String| filter.set(v))
                    class="breed-filter"
                />
            </div>

            {move || {
                let has_breeds = breeds.with(|b| !b.is_empty());
                match status.get() {
                    ApiStatus::Idle | ApiStatus::Loading if !has_breeds => {
                        view! { <LoadingSection text="Loading breeds..." /> }.into_any()
                    }
                    ApiStatus::Error if !has_breeds => view! {
                        <ErrorMessage
                            title="Failed to load breeds"
                            message="We couldn't load the list of breeds. Please try again."
                            on_retry=Callback::new(move |_| fetch())
                        />
                    }.into_any(),
                    _ => view! {
                        <Show
                            when=move || !filtered.with(|f| f.is_empty())
                            fallback=move || view! {
                                <p class="empty-message">
                                    {move || if breeds.with(|b| b.is_empty()) {
                                        "No breeds available."
                                    } else {
                                        "No breeds match your filter."
                                    }}
                                </p>
                            }
                        >
                            <div class="breed-list">
                                <For
                                    each=move || filtered.get()
                                    key=|breed| breed.id.clone()
                                    let:breed
                                >
                                    {
                                        let clicked = breed.clone();
                                        view! {
                                            <BreedCard
                                                breed=breed
                                                on_click=Callback::new(move |_| selected.set(Some(clicked.clone())))
                                            />
                                        }
                                    }
                                </For>
                            </div>
                        </Show>
                    }.into_any(),
                }
            }}

            {move || selected.get().map(|breed| view! {
                <BreedModal
                    breed=breed
                    on_close=Callback::new(move |_| selected.set(None))
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_label() {
        assert_eq!(origin_label("Egypt"), Some("Egypt".to_string()));
        assert_eq!(origin_label("  United States "), Some("United States".to_string()));
        assert_eq!(origin_label("   "), None);
        assert_eq!(origin_label(""), None);
    }
}
