//! Ordered list of favourites and its persisted form.
//!
//! The list is append-only on add and filter-on-remove. Uniqueness by image
//! id is expected from callers but not enforced here, and nothing reconciles
//! the list with the remote favourites collection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::favorite_cat::FavoriteCat;

/// localStorage key for the persisted list.
pub const FAVORITES_STORAGE_KEY: &str = "cat-favorites-storage";

const STORAGE_VERSION: u32 = 0;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Malformed favorites JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unsupported favorites storage version: {0}")]
    UnsupportedVersion(u32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesList {
    favorites: Vec<FavoriteCat>,
}

// {"state":{"favorites":[...]},"version":0}
#[derive(Serialize, Deserialize)]
struct StorageEnvelope {
    state: FavoritesList,
    #[serde(default)]
    version: u32,
}

impl FavoritesList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(favorites: Vec<FavoriteCat>) -> Self {
        Self { favorites }
    }

    /// Appends exactly one record.
    pub fn add(&mut self, cat: FavoriteCat) {
        self.favorites.push(cat);
    }

    /// Removes every record with the given image id, returns how many went.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.favorites.len();
        self.favorites.retain(|cat| cat.id != id);
        before - self.favorites.len()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|cat| cat.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&FavoriteCat> {
        self.favorites.iter().find(|cat| cat.id == id)
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteCat> {
        self.favorites.iter()
    }

    pub fn as_slice(&self) -> &[FavoriteCat] {
        &self.favorites
    }

    pub fn to_storage_json(&self) -> Result<String, StorageError> {
        let envelope = StorageEnvelope {
            state: self.clone(),
            version: STORAGE_VERSION,
        };
        Ok(serde_json::to_string(&envelope)?)
    }

    pub fn from_storage_json(json: &str) -> Result<Self, StorageError> {
        let envelope: StorageEnvelope = serde_json::from_str(json)?;
        if envelope.version != STORAGE_VERSION {
            return Err(StorageError::UnsupportedVersion(envelope.version));
        }
        Ok(envelope.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: &str) -> FavoriteCat {
        FavoriteCat {
            id: id.to_string(),
            url: format!("https://cdn2.thecatapi.com/images/{id}.jpg"),
            breed_id: None,
            breed_name: None,
        }
    }

    #[test]
    fn test_add_appends_one_record() {
        let mut list = FavoritesList::new();
        list.add(cat("a"));
        list.add(cat("b"));

        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[1].id, "b");
        assert!(list.is_favorite("a"));
        assert!(list.is_favorite("b"));
        assert!(!list.is_favorite("c"));
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let mut list = FavoritesList::new();
        list.add(cat("a"));
        list.add(cat("a"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_drops_all_matching() {
        let mut list = FavoritesList::from_vec(vec![cat("a"), cat("b"), cat("a")]);

        assert_eq!(list.remove("a"), 2);
        assert_eq!(list.len(), 1);
        assert!(!list.is_favorite("a"));
        assert!(list.is_favorite("b"));

        assert_eq!(list.remove("missing"), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_storage_envelope() {
        let mut list = FavoritesList::new();
        list.add(FavoriteCat {
            breed_id: Some("abys".into()),
            breed_name: Some("Abyssinian".into()),
            ..cat("a")
        });

        let json = list.to_storage_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["favorites"][0]["breedName"], "Abyssinian");

        let restored = FavoritesList::from_storage_json(&json).unwrap();
        assert_eq!(restored, list);
    }

    #[test]
    fn test_reads_existing_storage() {
        let json = r#"{"state":{"favorites":[{"id":"x1","url":"https://cdn2.thecatapi.com/images/x1.jpg","breedId":"beng","breedName":"Bengal"}]},"version":0}"#;
        let list = FavoritesList::from_storage_json(json).unwrap();
        assert_eq!(list.get("x1").and_then(|c| c.breed_name.as_deref()), Some("Bengal"));
    }

    #[test]
    fn test_rejects_bad_storage() {
        assert!(matches!(
            FavoritesList::from_storage_json("not json"),
            Err(StorageError::Malformed(_))
        ));
        assert!(matches!(
            FavoritesList::from_storage_json(r#"{"state":{"favorites":[]},"version":3}"#),
            Err(StorageError::UnsupportedVersion(3))
        ));
    }
}
