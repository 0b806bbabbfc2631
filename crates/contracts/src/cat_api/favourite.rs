use serde::{Deserialize, Serialize};

use super::image::CatImage;

/// Запись из `GET /favourites`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavouriteEntry {
    pub id: u64,
    pub image_id: String,
    /// Missing or partial (`{}`) once the underlying image is deleted.
    #[serde(default)]
    pub image: CatImage,
}

impl FavouriteEntry {
    /// The image to display; falls back to the bare `image_id` when the
    /// embedded image lacks one.
    pub fn display_image(&self) -> CatImage {
        let mut image = self.image.clone();
        if image.id.is_empty() {
            image.id = self.image_id.clone();
        }
        image
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFavouriteRequest {
    pub image_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFavouriteResponse {
    pub id: u64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveFavouriteResponse {
    #[serde(default)]
    pub message: String,
}

/// Find the remote favourite id for an image.
pub fn find_favourite_id(entries: &[FavouriteEntry], image_id: &str) -> Option<u64> {
    entries
        .iter()
        .find(|entry| entry.image_id == image_id)
        .map(|entry| entry.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_favourites() {
        let json = r#"[
            {"id": 232413577, "image_id": "9ccXTANkb", "sub_id": null,
             "created_at": "2023-10-05T10:00:00.000Z",
             "image": {"id": "9ccXTANkb", "url": "https://cdn2.thecatapi.com/images/9ccXTANkb.jpg"}},
            {"id": 232413578, "image_id": "gone", "image": {}}
        ]"#;
        let entries: Vec<FavouriteEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].image.url, "https://cdn2.thecatapi.com/images/9ccXTANkb.jpg");
        assert_eq!(entries[1].display_image().id, "gone");
        assert_eq!(entries[1].image.url, "");
        assert_eq!(find_favourite_id(&entries, "gone"), Some(232413578));

        let json = r#"[{"id": 1, "image_id": "gone"}]"#;
        let entries: Vec<FavouriteEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].display_image().id, "gone");
        assert_eq!(entries[0].image.url, "");
    }

    #[test]
    fn test_find_favourite_id() {
        let json = r#"[
            {"id": 10, "image_id": "a", "image": {"id": "a", "url": "u"}},
            {"id": 11, "image_id": "b", "image": {"id": "b", "url": "u"}}
        ]"#;
        let entries: Vec<FavouriteEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(find_favourite_id(&entries, "b"), Some(11));
        assert_eq!(find_favourite_id(&entries, "c"), None);
    }

    #[test]
    fn test_add_response() {
        let resp: AddFavouriteResponse =
            serde_json::from_str(r#"{"message": "SUCCESS", "id": 100038507}"#).unwrap();
        assert_eq!(resp.id, 100038507);
        assert_eq!(resp.message, "SUCCESS");

        let body = serde_json::to_string(&AddFavouriteRequest {
            image_id: "asf2".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"image_id":"asf2"}"#);
    }
}
