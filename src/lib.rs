pub mod config;
pub mod plugins;

use axum::Router;
use eyre::Result;
use plugins::handler::PluginContainer;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Mounts every registered plugin and merges their routes into one router.
pub fn app() -> Result<(PluginContainer<'static>, Router)> {
    let mut container = PluginContainer::new();
    container.load()?;

    let router = Router::new()
        .merge(container.routes()?)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new());

    Ok((container, router))
}
