//! CMS client for the blog section.
//!
//! The CMS exposes a REST collection under /api/articles with the usual
//! bracketed query conventions (pagination[page], filters[slug][$eq], ...).
//! Queries are built from typed structs so the bracket nesting cannot drift.

use contracts::blog::{BlogPost, CmsResponse};
use gloo_net::http::Request;
use serde::Serialize;

use crate::shared::config::cms_base;

#[derive(Serialize)]
struct ListQuery {
    pagination: PageWindow,
    sort: Vec<String>,
    populate: Vec<String>,
    #[serde(rename = "publicationState")]
    publication_state: String,
}

#[derive(Serialize)]
struct PageWindow {
    page: u32,
    #[serde(rename = "pageSize")]
    page_size: u32,
}

#[derive(Serialize)]
struct SlugQuery {
    filters: SlugFilters,
    populate: Vec<String>,
}

#[derive(Serialize)]
struct SlugFilters {
    slug: EqFilter,
}

#[derive(Serialize)]
struct EqFilter {
    #[serde(rename = "$eq")]
    eq: String,
}

fn relations() -> Vec<String> {
    vec!["imagePrincipale".to_string(), "category".to_string()]
}

fn list_query(page: u32, page_size: u32) -> Result<String, String> {
    serde_qs::to_string(&ListQuery {
        pagination: PageWindow { page, page_size },
        sort: vec!["publishedAt:desc".to_string()],
        populate: relations(),
        publication_state: "live".to_string(),
    })
    .map_err(|e| format!("Failed to build query: {e}"))
}

fn slug_query(slug: &str) -> Result<String, String> {
    serde_qs::to_string(&SlugQuery {
        filters: SlugFilters {
            slug: EqFilter {
                eq: slug.to_string(),
            },
        },
        populate: relations(),
    })
    .map_err(|e| format!("Failed to build query: {e}"))
}

/// One page of published posts, newest first.
pub async fn fetch_posts(
    page: u32,
    page_size: u32,
) -> Result<CmsResponse<Vec<BlogPost>>, String> {
    let url = format!("{}/api/articles?{}", cms_base(), list_query(page, page_size)?);
    get_json(&url).await
}

/// A single post by slug. `Ok(None)` is "no such post", distinct from a
/// transport failure.
pub async fn fetch_post(slug: &str) -> Result<Option<BlogPost>, String> {
    let url = format!("{}/api/articles?{}", cms_base(), slug_query(slug)?);
    let response: CmsResponse<Vec<BlogPost>> = get_json(&url).await?;
    Ok(response.data.into_iter().next())
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

/// Absolute URL for a media path. The CMS returns relative upload paths in
/// most deployments but absolute ones when an external bucket is plugged in.
pub fn media_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", cms_base(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_paginates_sorts_and_populates() {
        let q = list_query(2, 9).unwrap();
        assert!(q.contains("pagination[page]=2"), "query was: {q}");
        assert!(q.contains("pagination[pageSize]=9"), "query was: {q}");
        assert!(q.contains("sort[0]=publishedAt:desc") || q.contains("sort[0]=publishedAt%3Adesc"));
        assert!(q.contains("populate[0]=imagePrincipale"));
        assert!(q.contains("populate[1]=category"));
        assert!(q.contains("publicationState=live"));
    }

    #[test]
    fn slug_query_filters_on_exact_slug() {
        let q = slug_query("lancement-a-dakar").unwrap();
        assert!(
            q.contains("filters[slug][$eq]=lancement-a-dakar")
                || q.contains("filters[slug][%24eq]=lancement-a-dakar"),
            "query was: {q}"
        );
    }

    #[test]
    fn media_url_resolves_relative_paths_against_the_cms() {
        assert_eq!(
            media_url("/uploads/photo.jpg"),
            format!("{}/uploads/photo.jpg", cms_base())
        );
        assert_eq!(
            media_url("https://cdn.example.com/photo.jpg"),
            "https://cdn.example.com/photo.jpg"
        );
    }
}
