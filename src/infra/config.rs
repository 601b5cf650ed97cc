use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::builtin::BuiltinCatalog;
use crate::catalog::source::{CatalogSource, DirectoryCatalog, JsonFileCatalog};
use crate::error::{GalleryError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub gallery: GalleryConfig,
    pub catalog: CatalogConfig,
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 820.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub title: String,
    pub load_delay_ms: u64,
    pub dark_mode: bool,
    pub tile_min_width: f32,
    pub tile_height: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "OS Logos Display".to_string(),
            load_delay_ms: 500,
            dark_mode: true,
            tile_min_width: 300.0,
            tile_height: 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    #[default]
    Builtin,
    Json,
    Directory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: CatalogKind,
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn build_source(&self) -> Result<Box<dyn CatalogSource>> {
        match (self.source, &self.path) {
            (CatalogKind::Builtin, _) => Ok(Box::new(BuiltinCatalog)),
            (CatalogKind::Json, Some(path)) => Ok(Box::new(JsonFileCatalog::new(path))),
            (CatalogKind::Directory, Some(path)) => Ok(Box::new(DirectoryCatalog::new(path))),
            (kind, None) => Err(GalleryError::Config(format!(
                "catalog source {kind:?} requires a path"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            user_agent: format!("os-logos-gallery/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AppConfig {
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|error| {
            GalleryError::Config(format!("failed to read {}: {error}", path.display()))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Explicit path must exist; the default path may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("os-logos-gallery").join("config.toml"))
    }
}
