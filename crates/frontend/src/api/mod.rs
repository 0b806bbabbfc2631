pub mod cat_service;

pub use cat_service::{
    add_favourite, get_breeds, get_cat_image, get_cats_by_breed, get_favourites, get_random_cats,
    remove_favourite,
};
