//! Wire types for TheCatAPI.
//!
//! Responses are decoded as-is: missing text fields fall back to empty
//! strings so a partial payload still renders.

pub mod favourite;
pub mod image;
pub mod query;

pub use favourite::{
    find_favourite_id, AddFavouriteRequest, AddFavouriteResponse, FavouriteEntry,
    RemoveFavouriteResponse,
};
pub use image::{BreedWeight, CatBreed, CatImage};
pub use query::{ImageSearchQuery, BREED_PAGE_SIZE, RANDOM_PAGE_SIZE};
