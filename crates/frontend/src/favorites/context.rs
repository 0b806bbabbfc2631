use contracts::favorites::{FavoriteCat, FavoritesList};
use leptos::prelude::*;

use super::storage;

/// Reactive favourites list shared through context. Every mutation is
/// written to localStorage immediately; last write wins.
#[derive(Clone, Copy)]
pub struct FavoritesContext {
    pub favorites: RwSignal<FavoritesList>,
}

impl FavoritesContext {
    pub fn new() -> Self {
        Self {
            favorites: RwSignal::new(storage::load_favorites()),
        }
    }

    pub fn add(&self, cat: FavoriteCat) {
        self.favorites.update(|list| list.add(cat));
        self.persist();
    }

    pub fn remove(&self, id: &str) {
        let mut removed = 0;
        self.favorites.update(|list| removed = list.remove(id));
        if removed > 0 {
            self.persist();
        }
    }

    /// Reactive membership test.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.with(|list| list.is_favorite(id))
    }

    pub fn count(&self) -> usize {
        self.favorites.with(|list| list.len())
    }

    fn persist(&self) {
        self.favorites.with_untracked(storage::save_favorites);
    }
}

impl Default for FavoritesContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the favourites context
pub fn use_favorites() -> FavoritesContext {
    use_context::<FavoritesContext>().expect("FavoritesContext not found in component tree")
}
