pub(crate) mod handler;

use crate::{
    plugin::ArticlesState,
    web::handler::{create_article, get_article, list_articles, method_not_allowed},
};
use axum::{routing::get, Router};
use std::sync::Arc;

pub(crate) fn routes(state: Arc<ArticlesState>) -> Router {
    Router::new() //
        .route(
            "/articles",
            get(list_articles)
                .post(create_article)
                .fallback(method_not_allowed),
        )
        .route(
            "/articles/:id",
            get(get_article).fallback(method_not_allowed),
        )
        .with_state(state)
}
