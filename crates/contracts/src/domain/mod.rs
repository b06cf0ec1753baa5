pub mod a001_news;
pub mod common;
