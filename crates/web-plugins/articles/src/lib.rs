pub mod error;
pub mod model;
pub mod plugin;
pub mod store;
mod web;

pub use model::Article;
pub use store::{ArticleStore, InMemoryArticleStore};
