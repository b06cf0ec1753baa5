//! a001: news articles ("berita") published by the pesantren.

pub mod aggregate;
pub mod stats;
pub mod text;

pub use aggregate::{Category, NewNewsArticle, NewsArticle, NewsId, NewsListItem, PublishStatus};
pub use stats::NewsStats;
pub use text::{estimate_read_time, generate_slug, normalize_tag, WORDS_PER_MINUTE};
