pub mod a001_news;
