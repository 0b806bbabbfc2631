//! Add/remove flows that touch both the API and the local list.
//!
//! The API call goes first; the local list changes only when it succeeds.
//! Nothing reconciles the two afterwards.

use contracts::cat_api::{find_favourite_id, CatImage};
use contracts::favorites::FavoriteCat;
use contracts::shared::ApiError;

use super::context::FavoritesContext;
use crate::api;

/// Favourite an image remotely, then record it locally. Returns the remote
/// favourite id.
pub async fn add_to_favorites(ctx: FavoritesContext, image: &CatImage) -> Result<u64, ApiError> {
    let response = api::add_favourite(&image.id).await.map_err(|e| {
        log::error!("Error adding to favorites: {}", e);
        e
    })?;

    ctx.add(FavoriteCat::from_image(image));
    log::info!("Image {} added to favorites as {}", image.id, response.id);
    Ok(response.id)
}

/// Un-favourite an image. Without a known favourite id the remote list is
/// searched by image id; if no entry exists the image is only dropped locally.
pub async fn remove_from_favorites(
    ctx: FavoritesContext,
    image_id: &str,
    favourite_id: Option<u64>,
) -> Result<(), ApiError> {
    let favourite_id = match favourite_id {
        Some(id) => Some(id),
        None => {
            let entries = api::get_favourites().await?;
            find_favourite_id(&entries, image_id)
        }
    };

    match favourite_id {
        Some(id) => {
            api::remove_favourite(id).await.map_err(|e| {
                log::error!("Error removing from favorites: {}", e);
                e
            })?;
        }
        None => log::warn!("Could not find favorite ID for image: {}", image_id),
    }

    ctx.remove(image_id);
    Ok(())
}
