use serde::{Deserialize, Serialize};

use crate::cat_api::CatImage;

/// Избранное изображение, хранимое локально
///
/// Keys are camelCase so previously persisted lists stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteCat {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed_name: Option<String>,
}

impl FavoriteCat {
    pub fn from_image(image: &CatImage) -> Self {
        let breed = image.first_breed();
        Self {
            id: image.id.clone(),
            url: image.url.clone(),
            breed_id: breed.map(|b| b.id.clone()),
            breed_name: breed.map(|b| b.name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cat_api::CatBreed;

    #[test]
    fn test_from_image_takes_first_breed() {
        let image = CatImage {
            id: "img1".into(),
            url: "https://cdn2.thecatapi.com/images/img1.jpg".into(),
            width: 10,
            height: 10,
            breeds: vec![
                CatBreed {
                    id: "beng".into(),
                    name: "Bengal".into(),
                    ..Default::default()
                },
                CatBreed {
                    id: "sibe".into(),
                    name: "Siberian".into(),
                    ..Default::default()
                },
            ],
        };
        let fav = FavoriteCat::from_image(&image);
        assert_eq!(fav.id, "img1");
        assert_eq!(fav.breed_id.as_deref(), Some("beng"));
        assert_eq!(fav.breed_name.as_deref(), Some("Bengal"));
    }

    #[test]
    fn test_camel_case_keys() {
        let fav = FavoriteCat {
            id: "a".into(),
            url: "u".into(),
            breed_id: Some("abys".into()),
            breed_name: None,
        };
        let json = serde_json::to_string(&fav).unwrap();
        assert_eq!(json, r#"{"id":"a","url":"u","breedId":"abys"}"#);
    }
}
