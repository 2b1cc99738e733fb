//! Wire types for the headless CMS serving blog content.
//!
//! Field renames follow the CMS content model (French attribute names,
//! camelCase metadata). Everything here is read-only from the site's point
//! of view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u64,
    #[serde(rename = "documentId")]
    pub document_id: String,
    #[serde(rename = "titre")]
    pub title: String,
    pub slug: String,
    #[serde(rename = "extrait")]
    pub excerpt: String,
    #[serde(rename = "contenu")]
    pub content: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(rename = "imagePrincipale", default)]
    pub cover: Option<Media>,
    #[serde(default)]
    pub category: Option<Category>,
}

impl BlogPost {
    /// Smallest cover rendition suitable for a card, falling back to the
    /// original upload.
    pub fn card_image_path(&self) -> Option<&str> {
        let media = self.cover.as_ref()?;
        let formats = media.formats.as_ref();
        formats
            .and_then(|f| f.medium.as_ref().or(f.small.as_ref()))
            .map(|f| f.url.as_str())
            .or(Some(media.url.as_str()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub id: u64,
    pub url: String,
    #[serde(rename = "alternativeText", default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub formats: Option<MediaFormats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFormats {
    #[serde(default)]
    pub thumbnail: Option<MediaFormat>,
    #[serde(default)]
    pub small: Option<MediaFormat>,
    #[serde(default)]
    pub medium: Option<MediaFormat>,
    #[serde(default)]
    pub large: Option<MediaFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFormat {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    #[serde(rename = "nom")]
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsResponse<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "pageCount")]
    pub page_count: u32,
    pub total: u32,
}

impl Pagination {
    /// Number of pages needed for `total` items at `page_size` per page.
    pub fn pages_for(total: u32, page_size: u32) -> u32 {
        if page_size == 0 {
            return 0;
        }
        total.div_ceil(page_size)
    }
}

/// Estimated reading time at 200 words per minute, never below one minute.
pub fn reading_time_minutes(content: &str) -> u32 {
    const WORDS_PER_MINUTE: usize = 200;
    let words = content.split_whitespace().count();
    (words.div_ceil(WORDS_PER_MINUTE)).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(Pagination::pages_for(20, 9), 3);
        assert_eq!(Pagination::pages_for(18, 9), 2);
        assert_eq!(Pagination::pages_for(1, 9), 1);
        assert_eq!(Pagination::pages_for(0, 9), 0);
        assert_eq!(Pagination::pages_for(5, 0), 0);
    }

    #[test]
    fn reading_time_is_at_least_one_minute() {
        assert_eq!(reading_time_minutes(""), 1);
        assert_eq!(reading_time_minutes("quelques mots seulement"), 1);
        let long = "mot ".repeat(401);
        assert_eq!(reading_time_minutes(&long), 3);
    }

    #[test]
    fn deserializes_cms_list_payload() {
        let body = r#"{
            "data": [{
                "id": 7,
                "documentId": "abc123",
                "titre": "Lancement à Dakar",
                "slug": "lancement-a-dakar",
                "extrait": "Le service démarre.",
                "contenu": "Le service démarre dans trois communes pilotes.",
                "publishedAt": "2025-06-01T08:00:00.000Z",
                "createdAt": "2025-05-28T10:00:00.000Z",
                "updatedAt": "2025-06-01T08:00:00.000Z",
                "imagePrincipale": {
                    "id": 12,
                    "url": "/uploads/lancement.jpg",
                    "alternativeText": null,
                    "formats": { "small": { "url": "/uploads/small_lancement.jpg" } }
                },
                "category": { "id": 2, "nom": "Actualités", "slug": "actualites" }
            }],
            "meta": { "pagination": { "page": 1, "pageSize": 9, "pageCount": 3, "total": 20 } }
        }"#;

        let parsed: CmsResponse<Vec<BlogPost>> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 1);
        let post = &parsed.data[0];
        assert_eq!(post.title, "Lancement à Dakar");
        assert_eq!(post.card_image_path(), Some("/uploads/small_lancement.jpg"));
        assert_eq!(post.category.as_ref().unwrap().name, "Actualités");
        let pagination = parsed.meta.pagination.unwrap();
        assert_eq!(pagination.page_count, 3);
        assert_eq!(pagination.total, 20);
    }

    #[test]
    fn missing_cover_and_category_are_accepted() {
        let body = r#"{
            "data": [{
                "id": 8,
                "documentId": "def456",
                "titre": "Sans image",
                "slug": "sans-image",
                "extrait": "x",
                "contenu": "x",
                "publishedAt": "2025-06-02T08:00:00.000Z",
                "createdAt": "2025-06-02T08:00:00.000Z",
                "updatedAt": "2025-06-02T08:00:00.000Z"
            }],
            "meta": {}
        }"#;

        let parsed: CmsResponse<Vec<BlogPost>> = serde_json::from_str(body).unwrap();
        assert!(parsed.data[0].cover.is_none());
        assert!(parsed.data[0].card_image_path().is_none());
        assert!(parsed.meta.pagination.is_none());
    }
}
