use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, Result};

/// Catalog key. Any integer works; uniqueness is checked per catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(i64);

impl ImageId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// One catalog entry. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: ImageId,
    pub url: String,
    pub title: String,
}

impl ImageRecord {
    pub fn new(id: i64, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ImageId::new(id),
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Rejects catalogs that reuse an id; tiles are keyed by id.
pub fn ensure_unique_ids(images: &[ImageRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(images.len());
    for image in images {
        if !seen.insert(image.id) {
            return Err(GalleryError::DuplicateImageId(image.id.get()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_ids_are_ordinary_keys() {
        let images = vec![
            ImageRecord::new(0, "a", "A"),
            ImageRecord::new(-4, "b", "B"),
            ImageRecord::new(i64::MAX, "c", "C"),
        ];
        assert!(ensure_unique_ids(&images).is_ok());
        assert_eq!(images[1].id.get(), -4);
    }

    #[test]
    fn deserialize_accepts_any_integer_id() {
        let parsed: Vec<ImageRecord> = serde_json::from_str(
            r#"[{"id": 0, "url": "https://example.com/a.png", "title": "A"},
                {"id": -7, "url": "https://example.com/b.png", "title": "B"}]"#,
        )
        .expect("parse");
        assert_eq!(parsed[0].id, ImageId::new(0));
        assert_eq!(parsed[1].id.get(), -7);

        assert!(serde_json::from_str::<ImageRecord>(
            r#"{"id": "one", "url": "https://example.com/a.png", "title": "A"}"#
        )
        .is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let images = vec![
            ImageRecord::new(0, "a", "A"),
            ImageRecord::new(2, "b", "B"),
            ImageRecord::new(0, "c", "C"),
        ];
        assert!(matches!(
            ensure_unique_ids(&images),
            Err(GalleryError::DuplicateImageId(0))
        ));
        assert!(ensure_unique_ids(&images[..2]).is_ok());
    }
}
