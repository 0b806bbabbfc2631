pub mod breeds;
pub mod favorites;
pub mod network_error;
pub mod not_found;
pub mod random_cats;

pub use breeds::BreedsPage;
pub use favorites::FavoritesPage;
pub use network_error::NetworkErrorPage;
pub use not_found::NotFoundPage;
pub use random_cats::RandomCatsPage;
