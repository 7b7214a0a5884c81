pub mod handler;
#[cfg(feature = "plugin-index")]
pub(crate) mod index;

pub use handler::{PluginContainer, PluginContainerError};

use lazy_static::lazy_static;
use parking_lot::Mutex;
use plugin_api::Plugin;

lazy_static! {
    pub(crate) static ref PLUGINS: Mutex<Vec<Box<dyn Plugin>>> = Mutex::new(vec![
        #[cfg(feature = "plugin-index")]
        Box::<index::IndexPlugin>::default(),
        #[cfg(feature = "plugin-articles")]
        Box::<articles::plugin::Articles>::default(),
    ]);
}
