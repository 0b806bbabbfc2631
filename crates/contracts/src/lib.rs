pub mod cat_api;
pub mod favorites;
pub mod shared;
