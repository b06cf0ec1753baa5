use contracts::domain::a001_news::{NewNewsArticle, NewsId, NewsListItem, NewsStats};
use leptos::prelude::*;

use super::mock::seed_news;

/// Session-local list of articles, shared by the dashboard and the news page.
/// Changes are lost on reload.
#[derive(Clone, Copy)]
pub struct NewsStore {
    pub items: RwSignal<Vec<NewsListItem>>,
}

impl NewsStore {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(seed_news()),
        }
    }

    pub fn stats(&self) -> NewsStats {
        self.items.with(|items| NewsStats::from_items(items))
    }

    /// Assigns the next free id and puts the article first.
    pub fn prepend(&self, article: NewNewsArticle) -> NewsId {
        let mut assigned = NewsId(0);
        self.items.update(|items| {
            assigned = insert_new(items, article);
        });
        log::info!("news {} added", assigned);
        assigned
    }

    pub fn remove(&self, id: NewsId) {
        self.items.update(|items| items.retain(|i| i.id != id));
    }

    pub fn remove_many(&self, ids: &[NewsId]) {
        self.items.update(|items| items.retain(|i| !ids.contains(&i.id)));
    }
}

impl Default for NewsStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_news_store() -> NewsStore {
    use_context::<NewsStore>().expect("NewsStore not found in context")
}

fn insert_new(items: &mut Vec<NewsListItem>, article: NewNewsArticle) -> NewsId {
    let id = NewsId::next_after(items.iter().map(|i| i.id));
    items.insert(0, NewsListItem::from(article.into_article(id)));
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_news::{Category, PublishStatus};

    fn draft(title: &str) -> NewNewsArticle {
        NewNewsArticle {
            title: title.into(),
            slug: "slug".into(),
            category: Category::Article,
            content: "isi".into(),
            excerpt: String::new(),
            thumbnail: None,
            tags: Vec::new(),
            read_time: 2,
            status: PublishStatus::Published,
            created_at: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            publish_at: None,
            author: "Admin".into(),
            views: 0,
            featured: false,
        }
    }

    #[test]
    fn new_article_gets_next_id_and_goes_first() {
        let mut items = seed_news();
        let id = insert_new(&mut items, draft("Baru"));
        assert_eq!(id, NewsId(13));
        assert_eq!(items[0].title, "Baru");
        assert_eq!(items.len(), 13);
    }

    #[test]
    fn first_article_in_empty_list_gets_id_one() {
        let mut items = Vec::new();
        assert_eq!(insert_new(&mut items, draft("Pertama")), NewsId(1));
    }
}
