use serde::{Deserialize, Serialize};

/// Изображение кошки из `/images/search` или `/images/{id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatImage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub breeds: Vec<CatBreed>,
}

impl CatImage {
    /// The API attaches at most one breed in practice; only the first is shown.
    pub fn first_breed(&self) -> Option<&CatBreed> {
        self.breeds.first()
    }

    /// Alt text for the `<img>` tag.
    pub fn alt_text(&self) -> String {
        match self.first_breed() {
            Some(breed) => format!("Cat of breed {}", breed.name),
            None => "Cat image".to_string(),
        }
    }
}

/// Описание породы
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatBreed {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub temperament: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub life_span: String,
    #[serde(default)]
    pub weight: BreedWeight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikipedia_url: Option<String>,
}

impl CatBreed {
    /// Case-insensitive match on name or origin, used by the breed filter.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle) || self.origin.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BreedWeight {
    #[serde(default)]
    pub imperial: String,
    #[serde(default)]
    pub metric: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_search_result() {
        let json = r#"[{
            "id": "0XYvRd7oD",
            "url": "https://cdn2.thecatapi.com/images/0XYvRd7oD.jpg",
            "width": 1204,
            "height": 1445,
            "breeds": [{
                "id": "abys",
                "name": "Abyssinian",
                "temperament": "Active, Energetic",
                "origin": "Egypt",
                "life_span": "14 - 15",
                "weight": {"imperial": "7  -  10", "metric": "3 - 5"},
                "wikipedia_url": "https://en.wikipedia.org/wiki/Abyssinian_(cat)",
                "description": "The Abyssinian is easy to care for."
            }]
        }]"#;

        let images: Vec<CatImage> = serde_json::from_str(json).unwrap();
        assert_eq!(images.len(), 1);
        let breed = images[0].first_breed().unwrap();
        assert_eq!(breed.id, "abys");
        assert_eq!(breed.weight.metric, "3 - 5");
        assert_eq!(images[0].alt_text(), "Cat of breed Abyssinian");
    }

    #[test]
    fn test_decode_image_without_breeds() {
        let json = r#"{"id": "abc", "url": "https://cdn2.thecatapi.com/images/abc.jpg"}"#;
        let image: CatImage = serde_json::from_str(json).unwrap();
        assert!(image.breeds.is_empty());
        assert_eq!(image.width, 0);
        assert!(image.first_breed().is_none());
        assert_eq!(image.alt_text(), "Cat image");
    }

    #[test]
    fn test_decode_breed_with_missing_fields() {
        let json = r#"{"id": "beng", "name": "Bengal"}"#;
        let breed: CatBreed = serde_json::from_str(json).unwrap();
        assert_eq!(breed.origin, "");
        assert_eq!(breed.weight, BreedWeight::default());
        assert!(breed.wikipedia_url.is_none());
    }

    #[test]
    fn test_breed_filter() {
        let breed = CatBreed {
            id: "sibe".into(),
            name: "Siberian".into(),
            origin: "Russia".into(),
            ..Default::default()
        };
        assert!(breed.matches(""));
        assert!(breed.matches("sib"));
        assert!(breed.matches("  RUSS "));
        assert!(!breed.matches("egypt"));
    }
}
