pub mod favorite_cat;
pub mod store;

pub use favorite_cat::FavoriteCat;
pub use store::{FavoritesList, StorageError, FAVORITES_STORAGE_KEY};
