//! TheCatAPI calls.
//!
//! Every call sends `x-api-key` when configured. Responses are decoded as-is;
//! failures are logged here and returned to the caller.

use contracts::cat_api::{
    AddFavouriteRequest, AddFavouriteResponse, CatBreed, CatImage, FavouriteEntry,
    ImageSearchQuery, RemoveFavouriteResponse,
};
use contracts::shared::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{api_key, api_url};

fn with_api_key(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Content-Type", "application/json");
    match api_key() {
        Some(key) => builder.header("x-api-key", key),
        None => builder,
    }
}

fn search_url(query: &ImageSearchQuery) -> Result<String, ApiError> {
    let qs = query
        .to_query_string()
        .map_err(|e| ApiError::Config(format!("Failed to encode query: {}", e)))?;
    Ok(api_url("/images/search", Some(&qs)))
}

fn network_error(method: &str, path: &str, err: gloo_net::Error) -> ApiError {
    log::error!("{} {} failed to send: {}", method, path, err);
    ApiError::Network(err.to_string())
}

async fn read_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    response: Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        let err = ApiError::from_status(response.status(), path);
        log::error!("{} {} returned {}", method, path, response.status());
        return Err(err);
    }

    response.json::<T>().await.map_err(|e| {
        log::error!("{} {} returned an unreadable body: {}", method, path, e);
        ApiError::Decode(e.to_string())
    })
}

async fn get_json<T: DeserializeOwned>(path: &str, url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = with_api_key(Request::get(url))
        .send()
        .await
        .map_err(|e| network_error("GET", path, e))?;
    read_json("GET", path, response).await
}

/// Fetch random cat images that carry breed information.
pub async fn get_random_cats(limit: u32, page: u32) -> Result<Vec<CatImage>, ApiError> {
    let url = search_url(&ImageSearchQuery::random(limit, page))?;
    get_json("/images/search", &url).await
}

/// Fetch a single image by id.
pub async fn get_cat_image(image_id: &str) -> Result<CatImage, ApiError> {
    let path = format!("/images/{}", urlencoding::encode(image_id));
    get_json(&path, &api_url(&path, None)).await
}

/// Fetch all breeds.
pub async fn get_breeds() -> Result<Vec<CatBreed>, ApiError> {
    get_json("/breeds", &api_url("/breeds", None)).await
}

/// Fetch images of one breed.
pub async fn get_cats_by_breed(
    breed_id: &str,
    limit: u32,
    page: u32,
) -> Result<Vec<CatImage>, ApiError> {
    let url = search_url(&ImageSearchQuery::by_breed(breed_id, limit, page))?;
    get_json("/images/search", &url).await
}

/// Add an image to the remote favourites collection.
pub async fn add_favourite(image_id: &str) -> Result<AddFavouriteResponse, ApiError> {
    let path = "/favourites";
    let body = AddFavouriteRequest {
        image_id: image_id.to_string(),
    };

    log::debug!("POST {} image_id={}", path, image_id);
    let response = with_api_key(Request::post(&api_url(path, None)))
        .json(&body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| network_error("POST", path, e))?;
    read_json("POST", path, response).await
}

/// Remove an entry from the remote favourites collection.
pub async fn remove_favourite(favourite_id: u64) -> Result<RemoveFavouriteResponse, ApiError> {
    let path = format!("/favourites/{}", favourite_id);

    log::debug!("DELETE {}", path);
    let response = with_api_key(Request::delete(&api_url(&path, None)))
        .send()
        .await
        .map_err(|e| network_error("DELETE", &path, e))?;
    read_json("DELETE", &path, response).await
}

/// List the remote favourites collection.
pub async fn get_favourites() -> Result<Vec<FavouriteEntry>, ApiError> {
    get_json("/favourites", &api_url("/favourites", None)).await
}

/// Cheap reachability probe used by the status bar.
pub async fn ping() -> bool {
    let url = api_url("/breeds", Some("limit=1"));
    match with_api_key(Request::get(&url)).send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}
