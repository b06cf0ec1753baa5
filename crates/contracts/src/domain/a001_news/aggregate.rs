use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsId(pub i64);

impl NewsId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Next free id after `existing`: `max(0, ids...) + 1`.
    pub fn next_after<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = NewsId>,
    {
        let max = existing.into_iter().map(|id| id.0).fold(0, i64::max);
        Self(max + 1)
    }
}

impl AggregateId for NewsId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(NewsId)
    }
}

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Article category. Serialized with the Indonesian label used across the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Pendidikan")]
    Education,
    #[serde(rename = "Kegiatan")]
    Activity,
    #[serde(rename = "Pengumuman")]
    Announcement,
    #[serde(rename = "Artikel")]
    Article,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Education,
        Category::Activity,
        Category::Announcement,
        Category::Article,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Education => "Pendidikan",
            Category::Activity => "Kegiatan",
            Category::Announcement => "Pengumuman",
            Category::Article => "Artikel",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    #[default]
    Published,
    Draft,
}

impl PublishStatus {
    pub const ALL: [PublishStatus; 2] = [PublishStatus::Published, PublishStatus::Draft];

    /// Wire value, also used as the table filter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishStatus::Published => "published",
            PublishStatus::Draft => "draft",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PublishStatus::Published => "Published",
            PublishStatus::Draft => "Draft",
        }
    }
}

impl FromStr for PublishStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "published" => Ok(PublishStatus::Published),
            "draft" => Ok(PublishStatus::Draft),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A news article as stored by the hosting application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: NewsId,
    pub title: String,
    pub slug: String,
    pub category: Category,
    pub content: String,
    pub excerpt: String,
    pub thumbnail: Option<String>,
    pub tags: Vec<String>,
    /// Minutes.
    pub read_time: u32,
    pub status: PublishStatus,
    pub created_at: NaiveDate,
    /// `datetime-local` value, e.g. `2025-03-01T08:00`.
    pub publish_at: Option<String>,
    pub author: String,
    pub views: u64,
    pub featured: bool,
}

/// Payload handed to the `on_save` collaborator: everything but the id,
/// which the host assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNewsArticle {
    pub title: String,
    pub slug: String,
    pub category: Category,
    pub content: String,
    pub excerpt: String,
    pub thumbnail: Option<String>,
    pub tags: Vec<String>,
    pub read_time: u32,
    pub status: PublishStatus,
    pub created_at: NaiveDate,
    pub publish_at: Option<String>,
    pub author: String,
    pub views: u64,
    pub featured: bool,
}

impl NewNewsArticle {
    pub fn into_article(self, id: NewsId) -> NewsArticle {
        NewsArticle {
            id,
            title: self.title,
            slug: self.slug,
            category: self.category,
            content: self.content,
            excerpt: self.excerpt,
            thumbnail: self.thumbnail,
            tags: self.tags,
            read_time: self.read_time,
            status: self.status,
            created_at: self.created_at,
            publish_at: self.publish_at,
            author: self.author,
            views: self.views,
            featured: self.featured,
        }
    }
}

// ============================================================================
// List projection
// ============================================================================

/// Row shown in the news table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsListItem {
    pub id: NewsId,
    pub title: String,
    pub category: Category,
    pub created_at: NaiveDate,
    pub views: u64,
    pub read_time: u32,
    pub status: PublishStatus,
}

impl From<NewsArticle> for NewsListItem {
    fn from(a: NewsArticle) -> Self {
        Self {
            id: a.id,
            title: a.title,
            category: a.category,
            created_at: a.created_at,
            views: a.views,
            read_time: a.read_time,
            status: a.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_starts_at_one_and_follows_max() {
        assert_eq!(NewsId::next_after(Vec::new()), NewsId(1));
        assert_eq!(
            NewsId::next_after(vec![NewsId(3), NewsId(12), NewsId(7)]),
            NewsId(13)
        );
    }

    #[test]
    fn category_uses_indonesian_labels_on_the_wire() {
        let json = serde_json::to_string(&Category::Announcement).unwrap();
        assert_eq!(json, "\"Pengumuman\"");
        assert_eq!("Kegiatan".parse::<Category>(), Ok(Category::Activity));
        assert!("Sport".parse::<Category>().is_err());
    }

    #[test]
    fn status_is_lowercase_on_the_wire() {
        let json = serde_json::to_string(&PublishStatus::Draft).unwrap();
        assert_eq!(json, "\"draft\"");
        assert_eq!(PublishStatus::Published.label(), "Published");
    }

    #[test]
    fn id_round_trips_through_string() {
        let id = NewsId::from_string("42").unwrap();
        assert_eq!(id.as_string(), "42");
        assert!(NewsId::from_string("abc").is_err());
    }

    #[test]
    fn new_article_keeps_fields_when_id_is_assigned() {
        let draft = NewNewsArticle {
            title: "Kajian Rutin".into(),
            slug: "kajian-rutin".into(),
            category: Category::Activity,
            content: "isi".into(),
            excerpt: "ringkas".into(),
            thumbnail: None,
            tags: vec!["kajian".into()],
            read_time: 3,
            status: PublishStatus::Draft,
            created_at: NaiveDate::from_ymd_opt(2025, 2, 18).unwrap(),
            publish_at: None,
            author: "Ustadz Ahmad".into(),
            views: 0,
            featured: true,
        };
        let article = draft.clone().into_article(NewsId(9));
        assert_eq!(article.id, NewsId(9));
        assert_eq!(article.slug, draft.slug);

        let row = NewsListItem::from(article);
        assert_eq!(row.title, "Kajian Rutin");
        assert_eq!(row.status, PublishStatus::Draft);
    }
}
