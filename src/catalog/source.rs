use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::catalog::models::{ensure_unique_ids, ImageRecord};
use crate::error::{GalleryError, Result};

/// Where the catalog comes from. The rest of the app only sees the records.
pub trait CatalogSource {
    fn describe(&self) -> String;

    fn load(&self) -> Result<Vec<ImageRecord>>;
}

/// A JSON array of `{ "id", "url", "title" }` objects.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }

    fn load(&self) -> Result<Vec<ImageRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|source| GalleryError::CatalogIo {
            path: self.path.clone(),
            source,
        })?;
        let images: Vec<ImageRecord> = serde_json::from_str(&content)?;
        ensure_unique_ids(&images)?;
        Ok(images)
    }
}

/// Every decodable image file under a folder, ordered by path.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CatalogSource for DirectoryCatalog {
    fn describe(&self) -> String {
        format!("directory:{}", self.root.display())
    }

    fn load(&self) -> Result<Vec<ImageRecord>> {
        if !self.root.is_dir() {
            return Err(GalleryError::CatalogDirectory(self.root.clone()));
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root).into_iter().filter_map(|entry| entry.ok()) {
            if entry.file_type().is_file() && is_supported_image(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        paths.sort();

        let mut images = Vec::with_capacity(paths.len());
        for (index, path) in paths.iter().enumerate() {
            let canonical = path.canonicalize().map_err(|source| GalleryError::CatalogIo {
                path: path.clone(),
                source,
            })?;
            let title = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_string();
            images.push(ImageRecord::new(
                index as i64 + 1,
                format!("file://{}", canonical.display()),
                title,
            ));
        }

        Ok(images)
    }
}

fn is_supported_image(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    matches!(
        ext.to_ascii_lowercase().as_str(),
        "jpg" | "jpeg" | "png" | "gif" | "webp" | "bmp"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    #[test]
    fn json_catalog_preserves_order() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[
                {"id": 7, "url": "https://example.com/b.png", "title": "B"},
                {"id": 3, "url": "https://example.com/a.png", "title": "A"}
            ]"#,
        )
        .expect("write catalog");

        let images = JsonFileCatalog::new(&path).load().expect("load");
        let titles: Vec<&str> = images.iter().map(|image| image.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn json_catalog_accepts_zero_and_negative_ids() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[
                {"id": 0, "url": "https://example.com/a.png", "title": "A"},
                {"id": -2, "url": "https://example.com/b.png", "title": "B"}
            ]"#,
        )
        .expect("write catalog");

        let images = JsonFileCatalog::new(&path).load().expect("load");
        let ids: Vec<i64> = images.iter().map(|image| image.id.get()).collect();
        assert_eq!(ids, vec![0, -2]);
    }

    #[test]
    fn json_catalog_rejects_duplicate_ids() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"id": 1, "url": "a", "title": "A"}, {"id": 1, "url": "b", "title": "B"}]"#,
        )
        .expect("write catalog");

        assert!(matches!(
            JsonFileCatalog::new(&path).load(),
            Err(GalleryError::DuplicateImageId(1))
        ));
    }

    #[test]
    fn missing_json_catalog_reports_path() {
        let error = JsonFileCatalog::new("/definitely/not/here.json")
            .load()
            .expect_err("missing file");
        assert!(error.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn directory_catalog_lists_images_sorted_by_path() {
        let dir = TempDir::new().expect("tempdir");
        let img = ImageBuffer::from_fn(4, 4, |_x, _y| Rgb([10_u8, 20_u8, 30_u8]));
        img.save(dir.path().join("b_tux.png")).expect("save");
        img.save(dir.path().join("a_beastie.jpg")).expect("save");
        fs::write(dir.path().join("notes.txt"), "not an image").expect("write");

        let images = DirectoryCatalog::new(dir.path()).load().expect("load");
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].title, "a_beastie");
        assert_eq!(images[0].id.get(), 1);
        assert!(images[0].url.starts_with("file://"));
        assert_eq!(images[1].title, "b_tux");
    }

    #[test]
    fn directory_catalog_requires_directory() {
        assert!(matches!(
            DirectoryCatalog::new("/definitely/not/a/dir").load(),
            Err(GalleryError::CatalogDirectory(_))
        ));
    }
}
