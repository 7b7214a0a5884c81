use std::collections::HashMap;

use chrono::Utc;
use parking_lot::Mutex;

use crate::{error::ArticleError, model::Article};

/// Access contract for the article collection.
///
/// Implementations own both the records and the identifier counter, so
/// callers never touch the underlying map directly.
pub trait ArticleStore: Send + Sync {
    /// Snapshot of every stored article, in no particular order.
    fn list(&self) -> Vec<Article>;

    /// Looks up an article by its identifier.
    fn get(&self, id: &str) -> Option<Article>;

    /// Stores `article` under a freshly assigned identifier and creation
    /// timestamp, returning the stored record.
    ///
    /// Fails only once every identifier has been handed out.
    fn create(&self, article: Article) -> Result<Article, ArticleError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Inner {
    articles: HashMap<String, Article>,
    // `None` once `u64::MAX` has been assigned.
    next_id: Option<u64>,
}

/// Article collection held in process memory behind a single lock.
pub struct InMemoryArticleStore {
    inner: Mutex<Inner>,
}

impl Default for InMemoryArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                articles: HashMap::new(),
                next_id: Some(1),
            }),
        }
    }

    /// Store pre-populated with the five seed articles "1" through "5".
    pub fn seeded() -> Self {
        Self::with_articles(seed_articles())
    }

    /// Builds a store from existing records, keeping their identifiers.
    ///
    /// The counter resumes after the highest numeric identifier found. A
    /// record holding `u64::MAX` leaves no identifier to assign, so every
    /// later `create` fails.
    pub fn with_articles(articles: Vec<Article>) -> Self {
        let next_id = articles
            .iter()
            .filter_map(|article| article.id.parse::<u64>().ok())
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        let articles = articles
            .into_iter()
            .map(|article| (article.id.clone(), article))
            .collect();

        Self {
            inner: Mutex::new(Inner { articles, next_id }),
        }
    }
}

impl ArticleStore for InMemoryArticleStore {
    fn list(&self) -> Vec<Article> {
        let inner = self.inner.lock();
        inner.articles.values().cloned().collect()
    }

    fn get(&self, id: &str) -> Option<Article> {
        let inner = self.inner.lock();
        inner.articles.get(id).cloned()
    }

    fn create(&self, mut article: Article) -> Result<Article, ArticleError> {
        article.timestamp = creation_timestamp();

        let mut inner = self.inner.lock();

        let id = inner.next_id.ok_or(ArticleError::IdsExhausted)?;
        inner.next_id = id.checked_add(1);

        article.id = id.to_string();
        inner.articles.insert(article.id.clone(), article.clone());

        Ok(article)
    }

    fn len(&self) -> usize {
        self.inner.lock().articles.len()
    }
}

/// Nanoseconds since the Unix epoch, as decimal text.
fn creation_timestamp() -> String {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000))
        .to_string()
}

pub fn seed_articles() -> Vec<Article> {
    let daddy = |id: &str| Article {
        title: "Daddy".to_owned(),
        subtitle: "Big Daddy".to_owned(),
        id: id.to_owned(),
        content: "sfjkhasdjkhfgdsakjfvkjsdbkvh".to_owned(),
        timestamp: "Today".to_owned(),
    };

    vec![
        daddy("1"),
        daddy("2"),
        daddy("3"),
        daddy("4"),
        Article {
            title: "234234".to_owned(),
            subtitle: "234addy".to_owned(),
            id: "5".to_owned(),
            content: "sdfas".to_owned(),
            timestamp: "Today23423".to_owned(),
        },
    ]
}
