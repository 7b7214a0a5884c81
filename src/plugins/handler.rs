use std::collections::{HashMap, HashSet};

use axum::Router;
use parking_lot::Mutex;
use plugin_api::{Plugin, PluginError};
use thiserror::Error;

use super::PLUGINS;

#[derive(Debug, Error, PartialEq)]
pub enum PluginContainerError {
    #[error("duplicate entry in plugin registry")]
    DuplicateEntry,
    #[error("plugin container is not loaded")]
    Unloaded,
    #[error("plugin errors: {}", describe(.0))]
    PluginErrorMap(HashMap<String, PluginError>),
}

fn describe(errors: &HashMap<String, PluginError>) -> String {
    let mut entries: Vec<_> = errors
        .iter()
        .map(|(name, err)| format!("{name}: {err}"))
        .collect();
    entries.sort();
    entries.join("; ")
}

pub struct PluginContainer<'a> {
    loaded: bool,
    collected_routes: Vec<Router>,
    plugins: &'a Mutex<Vec<Box<dyn Plugin>>>,
}

impl Default for PluginContainer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginContainer<'static> {
    /// Instantiate an object aware of all statically registered plugins
    pub fn new() -> Self {
        Self {
            loaded: false,
            collected_routes: vec![],
            plugins: &*PLUGINS,
        }
    }
}

impl<'a> PluginContainer<'a> {
    /// Search loaded plugin based on name string
    pub fn find_plugin(&self, name: &str) -> Option<usize> {
        let plugins = self.plugins.lock();
        plugins.iter().position(|plugin| name == plugin.name())
    }

    /// Load referenced plugins
    ///
    /// This entails mounting them and merging their routes internally (only
    /// upon successful initialization). An error is returned if plugins
    /// bearing the same name are found. Also, all plugins failing to be
    /// initialized are returned in a map with respectively raised errors.
    pub fn load(&mut self) -> Result<(), PluginContainerError> {
        tracing::debug!("loading plugin container");

        let mut plugins = self.plugins.lock();

        let mut seen_names = HashSet::new();
        for plugin in plugins.iter() {
            if !seen_names.insert(plugin.name()) {
                tracing::error!("found duplicate entry in plugin registry: {}", plugin.name());
                return Err(PluginContainerError::DuplicateEntry);
            }
        }

        self.collected_routes.clear();

        // Mount plugins and collect routes on successful status
        let errors: HashMap<_, _> = plugins
            .iter_mut()
            .filter_map(|plugin| {
                let outcome = plugin.mount().and_then(|_| plugin.routes());
                match outcome {
                    Ok(routes) => {
                        tracing::info!("mounted plugin {}", plugin.name());
                        self.collected_routes.push(routes);
                        None
                    }
                    Err(err) => {
                        tracing::error!("error mounting plugin {}: {err}", plugin.name());
                        Some((plugin.name().to_string(), err))
                    }
                }
            })
            .collect();

        self.loaded = true;

        if errors.is_empty() {
            tracing::debug!("plugin container loaded");
            Ok(())
        } else {
            Err(PluginContainerError::PluginErrorMap(errors))
        }
    }

    /// Unload referenced plugins
    ///
    /// Every plugin is asked to unmount, even after a failure; failures are
    /// reported together once all plugins have been visited.
    pub fn unload(&mut self) -> Result<(), PluginContainerError> {
        if !self.loaded {
            return Err(PluginContainerError::Unloaded);
        }

        let plugins = self.plugins.lock();

        let errors: HashMap<_, _> = plugins
            .iter()
            .filter_map(|plugin| match plugin.unmount() {
                Ok(_) => {
                    tracing::info!("unmounted plugin {}", plugin.name());
                    None
                }
                Err(err) => {
                    tracing::error!("error unmounting plugin {}: {err}", plugin.name());
                    Some((plugin.name().to_string(), err))
                }
            })
            .collect();

        self.collected_routes.clear();
        self.loaded = false;

        if errors.is_empty() {
            Ok(())
        } else {
            Err(PluginContainerError::PluginErrorMap(errors))
        }
    }

    /// Merge collected routes from all plugins successfully initialized.
    pub fn routes(&self) -> Result<Router, PluginContainerError> {
        if self.loaded {
            Ok(self
                .collected_routes
                .iter()
                .fold(Router::new(), |acc, e| acc.merge(e.clone())))
        } else {
            Err(PluginContainerError::Unloaded)
        }
    }
}
