use crate::{error::ArticleError, model::Article, plugin::ArticlesState};
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

pub(crate) async fn list_articles(
    State(state): State<Arc<ArticlesState>>,
) -> Result<Response, ArticleError> {
    let articles = state.store.list();
    tracing::debug!(count = articles.len(), "listing articles");

    json_response(&articles)
}

pub(crate) async fn create_article(
    State(state): State<Arc<ArticlesState>>,
    body: Bytes,
) -> Result<Response, ArticleError> {
    let article = Article::from_json(&body).map_err(|err| {
        tracing::debug!("rejected article payload: {err}");
        err
    })?;

    let article = state.store.create(article).map_err(|err| {
        tracing::error!("failed to store article: {err}");
        err
    })?;
    tracing::info!(id = %article.id, "created article");

    json_response(&article)
}

pub(crate) async fn get_article(
    State(state): State<Arc<ArticlesState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Response, ArticleError> {
    // An undecodable id cannot name a stored article.
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!("unusable article id: {rejection}");
        ArticleError::NotFound
    })?;

    let article = state.store.get(&id).ok_or_else(|| {
        tracing::debug!(%id, "article not found");
        ArticleError::NotFound
    })?;

    json_response(&article)
}

pub(crate) async fn method_not_allowed() -> ArticleError {
    ArticleError::MethodNotAllowed
}

/// Serializes outside of any store lock.
fn json_response<T: Serialize + ?Sized>(value: &T) -> Result<Response, ArticleError> {
    let body = serde_json::to_vec(value).map_err(|err| {
        tracing::error!("failed to serialize response: {err}");
        ArticleError::Serialization(err.to_string())
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
