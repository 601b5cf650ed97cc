use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("catalog contains duplicate image id {0}")]
    DuplicateImageId(i64),

    #[error("failed to read catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("catalog folder does not exist or is not a directory: {0}")]
    CatalogDirectory(PathBuf),

    #[error("config error: {0}")]
    Config(String),

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to start UI: {0}")]
    Ui(String),
}

impl From<toml::de::Error> for GalleryError {
    fn from(value: toml::de::Error) -> Self {
        Self::Config(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
