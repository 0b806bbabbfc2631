use serde::{Deserialize, Serialize};

/// Page size on the random cats page.
pub const RANDOM_PAGE_SIZE: u32 = 10;
/// Page size inside the breed modal.
pub const BREED_PAGE_SIZE: u32 = 8;

/// Parameters of `GET /images/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSearchQuery {
    pub limit: u32,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_breeds: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed_ids: Option<String>,
}

impl ImageSearchQuery {
    /// Random images that carry breed information.
    pub fn random(limit: u32, page: u32) -> Self {
        Self {
            limit,
            page,
            has_breeds: Some(1),
            breed_ids: None,
        }
    }

    pub fn by_breed(breed_id: impl Into<String>, limit: u32, page: u32) -> Self {
        Self {
            limit,
            page,
            has_breeds: None,
            breed_ids: Some(breed_id.into()),
        }
    }

    pub fn to_query_string(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }
}

impl Default for ImageSearchQuery {
    fn default() -> Self {
        Self::random(RANDOM_PAGE_SIZE, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_query() {
        let qs = ImageSearchQuery::random(10, 2).to_query_string().unwrap();
        assert_eq!(qs, "limit=10&page=2&has_breeds=1");
    }

    #[test]
    fn test_breed_query() {
        let qs = ImageSearchQuery::by_breed("abys", BREED_PAGE_SIZE, 0)
            .to_query_string()
            .unwrap();
        assert_eq!(qs, "limit=8&page=0&breed_ids=abys");
    }

    #[test]
    fn test_default_is_first_random_page() {
        let q = ImageSearchQuery::default();
        assert_eq!(q.limit, RANDOM_PAGE_SIZE);
        assert_eq!(q.page, 0);
        assert_eq!(q.has_breeds, Some(1));
    }
}
