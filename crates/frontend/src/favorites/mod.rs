//! Favourites kept in localStorage and mirrored to the remote API.

pub mod context;
pub mod service;
pub mod storage;

pub use context::{use_favorites, FavoritesContext};
pub use service::{add_to_favorites, remove_from_favorites};
