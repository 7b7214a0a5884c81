use super::{
    store::{ArticleStore, InMemoryArticleStore},
    web,
};
use axum::Router;
use plugin_api::{Plugin, PluginError};
use std::sync::Arc;

#[derive(Default)]
pub struct Articles {
    state: Option<ArticlesState>,
}

struct ArticlesEnv {
    seed_data: bool,
}

#[derive(Clone)]
pub(crate) struct ArticlesState {
    pub(crate) store: Arc<dyn ArticleStore>,
}

impl ArticlesState {
    pub(crate) fn new(store: impl ArticleStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

fn get_env() -> Result<ArticlesEnv, PluginError> {
    let seed_data = match std::env::var("ARTICLES_SEED_DATA") {
        Ok(value) => parse_flag(&value).ok_or_else(|| {
            PluginError::InitError(format!(
                "ARTICLES_SEED_DATA must be true or false, got {value:?}"
            ))
        })?,
        Err(_) => true,
    };

    Ok(ArticlesEnv { seed_data })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Plugin for Articles {
    fn name(&self) -> &'static str {
        "articles"
    }

    fn mount(&mut self) -> Result<(), PluginError> {
        let env = get_env()?;

        let store = if env.seed_data {
            InMemoryArticleStore::seeded()
        } else {
            InMemoryArticleStore::new()
        };

        tracing::info!(
            seeded = env.seed_data,
            count = store.len(),
            "article store initialized"
        );

        self.state = Some(ArticlesState::new(store));

        Ok(())
    }

    fn unmount(&self) -> Result<(), PluginError> {
        if let Some(state) = &self.state {
            tracing::debug!(count = state.store.len(), "dropping in-memory articles");
        }
        Ok(())
    }

    fn routes(&self) -> Result<Router, PluginError> {
        let state = self
            .state
            .as_ref()
            .ok_or_else(|| PluginError::Other("missing state, plugin not mounted".to_owned()))?;
        Ok(web::routes(Arc::new(state.clone())))
    }
}
