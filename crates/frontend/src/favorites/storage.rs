use contracts::favorites::{FavoritesList, FAVORITES_STORAGE_KEY};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Load favourites from localStorage; missing or unreadable data gives an
/// empty list.
pub fn load_favorites() -> FavoritesList {
    let Some(raw) = get_local_storage().and_then(|s| s.get_item(FAVORITES_STORAGE_KEY).ok().flatten())
    else {
        return FavoritesList::new();
    };

    match FavoritesList::from_storage_json(&raw) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Ignoring stored favorites: {}", e);
            FavoritesList::new()
        }
    }
}

/// Save favourites to localStorage
pub fn save_favorites(list: &FavoritesList) {
    let Some(storage) = get_local_storage() else {
        log::warn!("localStorage unavailable, favorites are not persisted");
        return;
    };

    match list.to_storage_json() {
        Ok(json) => {
            if storage.set_item(FAVORITES_STORAGE_KEY, &json).is_err() {
                log::error!("Failed to write favorites to localStorage");
            }
        }
        Err(e) => log::error!("Failed to serialize favorites: {}", e),
    }
}
