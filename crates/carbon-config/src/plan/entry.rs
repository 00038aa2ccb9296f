use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Client module that subscribes to the hot-reload channel
pub const HOT_CLIENT_MODULE: &str = "webpack-hot-middleware/client";

/// Path of the hot-reload channel, appended to the API base URL
pub const HOT_RELOAD_PATH: &str = "/__webpack_hmr";

/// A module that seeds the bundling graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EntryPoint {
    /// Hot-reload client pointed at `{base_url}{path}`
    HotReloadClient {
        base_url: String,
        path: String,
        /// Fall back to a full page reload when an update cannot be applied
        reload: bool,
    },
    /// Application module, relative to the plan context
    Module { path: PathBuf },
}

impl EntryPoint {
    pub fn hot_reload(base_url: impl Into<String>) -> Self {
        EntryPoint::HotReloadClient {
            base_url: base_url.into(),
            path: HOT_RELOAD_PATH.to_string(),
            reload: true,
        }
    }

    pub fn module(path: impl Into<PathBuf>) -> Self {
        EntryPoint::Module { path: path.into() }
    }

    /// Module identifier handed to the engine
    ///
    /// ```
    /// use carbon_config::EntryPoint;
    ///
    /// let entry = EntryPoint::hot_reload("http://localhost:3000");
    /// assert_eq!(
    ///     entry.specifier(),
    ///     "webpack-hot-middleware/client?path=http://localhost:3000/__webpack_hmr&reload=true"
    /// );
    /// ```
    pub fn specifier(&self) -> String {
        match self {
            EntryPoint::HotReloadClient {
                base_url,
                path,
                reload,
            } => format!("{HOT_CLIENT_MODULE}?path={base_url}{path}&reload={reload}"),
            EntryPoint::Module { path } => path.to_string_lossy().replace('\\', "/"),
        }
    }

    pub fn is_hot_reload(&self) -> bool {
        matches!(self, EntryPoint::HotReloadClient { .. })
    }

    pub fn hot_reload_base_url(&self) -> Option<&str> {
        match self {
            EntryPoint::HotReloadClient { base_url, .. } => Some(base_url),
            EntryPoint::Module { .. } => None,
        }
    }

    pub fn module_path(&self) -> Option<&Path> {
        match self {
            EntryPoint::Module { path } => Some(path),
            EntryPoint::HotReloadClient { .. } => None,
        }
    }
}
