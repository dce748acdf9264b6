//! News data structures and the upstream-to-display normalization
//!
//! The upstream news API owns its own schema; the site pages render a
//! narrower one. All upstream records funnel through
//! [`DisplayNewsItem::from_upstream`] so a schema change upstream has exactly
//! one place to land.

use std::cmp::Reverse;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::category::NewsCategory;

/// A news record as served by the upstream news API
///
/// Deserializing into this type is the schema validation step at the proxy
/// boundary: a body that does not fit is rejected before anything is relayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamNewsItem {
    /// Unique identifier assigned by upstream
    pub id: i64,
    pub title: String,
    /// Short summary shown on cards
    pub description: String,
    /// Full body, may contain embedded HTML intended for direct rendering
    pub full_description: String,
    /// Upstream classification tag; kept as text so unknown future values
    /// pass through the proxy unchanged
    #[serde(rename = "type")]
    pub news_type: String,
    pub is_new: bool,
    pub created_at: String,
    pub updated_at: String,
    pub header_image: Option<String>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    pub video_url: Option<String>,
}

/// A news record in the shape the site pages render
///
/// Derived from [`UpstreamNewsItem`] on every fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNewsItem {
    /// Decimal text form of the upstream integer id
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: NewsCategory,
    /// Upstream `createdAt`, carried through unchanged
    pub date: String,
    pub is_new: bool,
    pub header_image: Option<String>,
    pub gallery_images: Vec<String>,
    pub video_url: Option<String>,
}

impl DisplayNewsItem {
    /// Normalize an upstream record into the display schema
    pub fn from_upstream(item: &UpstreamNewsItem) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title.clone(),
            excerpt: item.description.clone(),
            content: item.full_description.clone(),
            category: NewsCategory::from_upstream_type(&item.news_type),
            date: item.created_at.clone(),
            is_new: item.is_new,
            header_image: item.header_image.clone(),
            gallery_images: item.gallery_images.clone(),
            video_url: item.video_url.clone(),
        }
    }
}

impl From<&UpstreamNewsItem> for DisplayNewsItem {
    fn from(item: &UpstreamNewsItem) -> Self {
        DisplayNewsItem::from_upstream(item)
    }
}

/// Sort display items newest first
///
/// Stable: items with equal dates keep their original relative order, and
/// items whose date does not parse sink to the end.
pub fn sort_newest_first(items: &mut [DisplayNewsItem]) {
    items.sort_by_cached_key(|item| Reverse(parse_date(&item.date)));
}

fn parse_date(date: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(date).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(id: i64, news_type: &str, created_at: &str) -> UpstreamNewsItem {
        UpstreamNewsItem {
            id,
            title: format!("News {id}"),
            description: "Court résumé".to_string(),
            full_description: "<p>Contenu complet</p>".to_string(),
            news_type: news_type.to_string(),
            is_new: false,
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
            header_image: None,
            gallery_images: vec![],
            video_url: None,
        }
    }

    #[test]
    fn test_normalize_field_mapping() {
        let mut item = upstream(42, "update", "2024-06-01T10:00:00Z");
        item.header_image = Some("/images/header.png".to_string());
        item.gallery_images = vec!["/images/a.png".to_string()];
        item.video_url = Some("https://youtu.be/dQw4w9WgXcQ".to_string());
        item.is_new = true;

        let display = DisplayNewsItem::from_upstream(&item);
        assert_eq!(display.id, "42");
        assert_eq!(display.title, item.title);
        assert_eq!(display.excerpt, item.description);
        assert_eq!(display.content, item.full_description);
        assert_eq!(display.category, NewsCategory::Update);
        assert_eq!(display.date, item.created_at);
        assert!(display.is_new);
        assert_eq!(display.header_image, item.header_image);
        assert_eq!(display.gallery_images, item.gallery_images);
        assert_eq!(display.video_url, item.video_url);
    }

    #[test]
    fn test_normalize_id_is_injective() {
        let a = DisplayNewsItem::from_upstream(&upstream(1, "info", "2024-01-01T00:00:00Z"));
        let b = DisplayNewsItem::from_upstream(&upstream(2, "info", "2024-01-01T00:00:00Z"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let item = upstream(7, "reset", "2024-03-15T18:30:00Z");
        let first = DisplayNewsItem::from_upstream(&item);
        let second = DisplayNewsItem::from_upstream(&item);
        assert_eq!(first, second);
        assert_eq!(first.category, NewsCategory::Maintenance);
    }

    #[test]
    fn test_upstream_deserializes_camel_case() {
        let json = r#"{
            "id": 3,
            "title": "Nouvelle saison",
            "description": "La saison 4 arrive",
            "fullDescription": "<p>Tout savoir</p>",
            "type": "event",
            "isNew": true,
            "createdAt": "2024-09-01T12:00:00Z",
            "updatedAt": "2024-09-02T12:00:00Z",
            "headerImage": null,
            "galleryImages": ["/img/1.png"],
            "videoUrl": null
        }"#;
        let item: UpstreamNewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.news_type, "event");
        assert!(item.header_image.is_none());
        assert_eq!(item.gallery_images.len(), 1);
    }

    #[test]
    fn test_upstream_missing_gallery_defaults_empty() {
        let json = r#"{
            "id": 4,
            "title": "Maintenance",
            "description": "Courte coupure",
            "fullDescription": "Retour à 14h",
            "type": "maintenance",
            "isNew": false,
            "createdAt": "2024-09-01T12:00:00Z",
            "updatedAt": "2024-09-01T12:00:00Z",
            "headerImage": null,
            "videoUrl": null
        }"#;
        let item: UpstreamNewsItem = serde_json::from_str(json).unwrap();
        assert!(item.gallery_images.is_empty());
    }

    #[test]
    fn test_sort_newest_first() {
        let mut items: Vec<DisplayNewsItem> = [
            (1, "2024-01-10T00:00:00Z"),
            (2, "2024-03-05T00:00:00Z"),
            (3, "2024-02-20T00:00:00Z"),
        ]
        .iter()
        .map(|(id, date)| DisplayNewsItem::from_upstream(&upstream(*id, "info", date)))
        .collect();

        sort_newest_first(&mut items);
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "1"]);
    }

    #[test]
    fn test_sort_preserves_order_on_equal_dates() {
        let mut items: Vec<DisplayNewsItem> = [
            (10, "2024-05-01T00:00:00Z"),
            (11, "2024-05-01T00:00:00Z"),
            (12, "2024-06-01T00:00:00Z"),
            (13, "2024-05-01T00:00:00Z"),
        ]
        .iter()
        .map(|(id, date)| DisplayNewsItem::from_upstream(&upstream(*id, "info", date)))
        .collect();

        sort_newest_first(&mut items);
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["12", "10", "11", "13"]);
    }

    #[test]
    fn test_sort_unparseable_dates_sink() {
        let mut items: Vec<DisplayNewsItem> = [
            (1, "pas une date"),
            (2, "2024-03-05T00:00:00Z"),
        ]
        .iter()
        .map(|(id, date)| DisplayNewsItem::from_upstream(&upstream(*id, "info", date)))
        .collect();

        sort_newest_first(&mut items);
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn test_display_serializes_camel_case() {
        let display = DisplayNewsItem::from_upstream(&upstream(5, "update", "2024-09-01T12:00:00Z"));
        let value = serde_json::to_value(&display).unwrap();
        assert_eq!(value["id"], "5");
        assert_eq!(value["category"], "update");
        assert!(value.get("isNew").is_some());
        assert!(value.get("headerImage").is_some());
    }
}
