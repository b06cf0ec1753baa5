use serde::{Deserialize, Serialize};

use super::aggregate::{NewsListItem, PublishStatus};

/// Summary figures shown in the stat cards above the news table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewsStats {
    pub total: usize,
    pub total_views: u64,
    pub published: usize,
    pub drafts: usize,
    /// Views per article, rounded half away from zero; 0 for an empty list.
    pub average_views: u64,
}

impl NewsStats {
    pub fn from_items(items: &[NewsListItem]) -> Self {
        let total = items.len();
        let total_views: u64 = items.iter().map(|i| i.views).sum();
        let published = items
            .iter()
            .filter(|i| i.status == PublishStatus::Published)
            .count();
        let average_views = if total == 0 {
            0
        } else {
            let total = total as u64;
            (total_views * 2 + total) / (total * 2)
        };

        Self {
            total,
            total_views,
            published,
            drafts: total - published,
            average_views,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_news::aggregate::{Category, NewsId};
    use chrono::NaiveDate;

    fn item(id: i64, views: u64, status: PublishStatus) -> NewsListItem {
        NewsListItem {
            id: NewsId(id),
            title: format!("Berita {}", id),
            category: Category::Education,
            created_at: NaiveDate::from_ymd_opt(2025, 2, 20).unwrap(),
            views,
            read_time: 2,
            status,
        }
    }

    #[test]
    fn empty_list_has_zero_average() {
        assert_eq!(NewsStats::from_items(&[]), NewsStats::default());
    }

    #[test]
    fn counts_views_and_statuses() {
        let items = vec![
            item(1, 11, PublishStatus::Published),
            item(2, 33, PublishStatus::Published),
            item(3, 5, PublishStatus::Draft),
        ];
        let stats = NewsStats::from_items(&items);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.total_views, 49);
        assert_eq!(stats.published, 2);
        assert_eq!(stats.drafts, 1);
        // 49 / 3 = 16.33
        assert_eq!(stats.average_views, 16);
    }

    #[test]
    fn average_rounds_half_up() {
        let items = vec![
            item(1, 1, PublishStatus::Published),
            item(2, 2, PublishStatus::Published),
        ];
        // 3 / 2 = 1.5
        assert_eq!(NewsStats::from_items(&items).average_views, 2);
    }
}
