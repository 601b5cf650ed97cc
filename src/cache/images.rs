//! Lazy image pixels for tiles and the modal.
//!
//! A URL is fetched the first time something asks for it. Fetch and decode
//! run on a short-lived worker thread; results are turned into textures on
//! the UI thread in `poll`. Anything that fails to fetch or decode is kept as
//! `Broken` and drawn as a placeholder.

use std::collections::HashMap;
use std::fs;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use eframe::egui;
use tracing::{debug, warn};

use crate::error::{GalleryError, Result};
use crate::infra::config::FetchConfig;

const MAX_TEXTURE_SIDE: u32 = 2048;

pub trait ImageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|error| GalleryError::Config(format!("failed to build http client: {error}")))?;
        Ok(Self { client })
    }
}

impl ImageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let fetch_error = |error: reqwest::Error| GalleryError::Fetch {
            url: url.to_string(),
            reason: error.to_string(),
        };
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(fetch_error)?;
        let bytes = response.bytes().map_err(fetch_error)?;
        Ok(bytes.to_vec())
    }
}

/// `file://` URLs and bare paths.
#[derive(Debug, Default)]
pub struct LocalFetcher;

impl ImageFetcher for LocalFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let path = url.strip_prefix("file://").unwrap_or(url);
        fs::read(path).map_err(|error| GalleryError::Fetch {
            url: url.to_string(),
            reason: error.to_string(),
        })
    }
}

/// Routes by URL scheme.
pub struct UrlFetcher {
    http: HttpFetcher,
    local: LocalFetcher,
}

impl UrlFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Ok(Self {
            http: HttpFetcher::new(config)?,
            local: LocalFetcher,
        })
    }
}

impl ImageFetcher for UrlFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        match url.split_once("://").map(|(scheme, _)| scheme) {
            Some("http") | Some("https") => self.http.fetch(url),
            Some("file") | None => self.local.fetch(url),
            Some(scheme) => Err(GalleryError::Fetch {
                url: url.to_string(),
                reason: format!("unsupported scheme {scheme}"),
            }),
        }
    }
}

pub fn decode_image(bytes: &[u8]) -> Result<egui::ColorImage> {
    let mut image = image::load_from_memory(bytes)?;
    if image.width() > MAX_TEXTURE_SIDE || image.height() > MAX_TEXTURE_SIDE {
        image = image.thumbnail(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE);
    }
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[derive(Clone)]
pub enum ImageSlot {
    Pending,
    Ready(egui::TextureHandle),
    Broken(String),
}

struct FetchResult {
    url: String,
    outcome: Result<egui::ColorImage>,
}

pub struct ImageCache {
    fetcher: Arc<dyn ImageFetcher>,
    slots: HashMap<String, ImageSlot>,
    tx: Sender<FetchResult>,
    rx: Receiver<FetchResult>,
}

impl ImageCache {
    pub fn new(fetcher: Arc<dyn ImageFetcher>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            fetcher,
            slots: HashMap::new(),
            tx,
            rx,
        }
    }

    /// Current slot for `url`, starting the fetch on first use.
    pub fn get(&mut self, ctx: &egui::Context, url: &str) -> ImageSlot {
        if let Some(slot) = self.slots.get(url) {
            return slot.clone();
        }

        let slot = match self.spawn_fetch(ctx, url) {
            Ok(()) => ImageSlot::Pending,
            Err(error) => {
                warn!(url, error = %error, "failed to start image fetch");
                ImageSlot::Broken(error.to_string())
            }
        };
        self.slots.insert(url.to_string(), slot.clone());
        slot
    }

    /// Turns finished fetches into textures. Returns how many landed.
    pub fn poll(&mut self, ctx: &egui::Context) -> usize {
        let mut landed = 0;
        while let Ok(result) = self.rx.try_recv() {
            let slot = match result.outcome {
                Ok(image) => {
                    debug!(url = %result.url, width = image.size[0], height = image.size[1], "image ready");
                    ImageSlot::Ready(ctx.load_texture(
                        result.url.clone(),
                        image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(error) => {
                    warn!(url = %result.url, error = %error, "image unavailable");
                    ImageSlot::Broken(error.to_string())
                }
            };
            self.slots.insert(result.url, slot);
            landed += 1;
        }
        landed
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| matches!(slot, ImageSlot::Pending))
            .count()
    }

    fn spawn_fetch(&self, ctx: &egui::Context, url: &str) -> Result<()> {
        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        let url = url.to_string();
        thread::Builder::new()
            .name("image-fetch".to_string())
            .spawn(move || {
                let outcome = fetcher.fetch(&url).and_then(|bytes| decode_image(&bytes));
                // The cache may be gone by now; nothing to deliver to.
                let _ = tx.send(FetchResult { url, outcome });
                ctx.request_repaint();
            })
            .map(|_| ())
            .map_err(|error| GalleryError::Ui(format!("failed to spawn fetch worker: {error}")))
    }
}
