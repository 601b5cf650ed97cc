use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::app::state::{GalleryState, LoadPhase};
use crate::catalog::source::CatalogSource;

/// One-shot deadline for the simulated fetch. Dropping it cancels the load.
#[derive(Debug, Clone, Copy)]
struct LoadTimer {
    deadline: Instant,
}

impl LoadTimer {
    fn arm(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    fn elapsed(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

pub struct GalleryLoader {
    source: Box<dyn CatalogSource>,
    delay: Duration,
    state: GalleryState,
    timer: Option<LoadTimer>,
}

impl GalleryLoader {
    pub fn new(source: Box<dyn CatalogSource>, delay: Duration) -> Self {
        Self {
            source,
            delay,
            state: GalleryState::default(),
            timer: None,
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    /// Arms the timer. A load that already finished is left alone.
    pub fn start(&mut self, now: Instant) {
        if !self.state.loading() || self.timer.is_some() {
            return;
        }
        debug!(source = %self.source.describe(), delay_ms = self.delay.as_millis() as u64, "catalog load scheduled");
        self.timer = Some(LoadTimer::arm(now, self.delay));
    }

    /// Applies the completion once the deadline has passed. Returns whether the
    /// state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer else {
            return false;
        };
        if !timer.elapsed(now) {
            return false;
        }
        self.timer = None;

        match self.source.load() {
            Ok(images) => {
                info!(count = images.len(), source = %self.source.describe(), "catalog loaded");
                self.state = GalleryState {
                    images,
                    phase: LoadPhase::Loaded,
                };
            }
            Err(error) => {
                warn!(error = %error, source = %self.source.describe(), "catalog load failed");
                self.state = GalleryState {
                    images: Vec::new(),
                    phase: LoadPhase::Failed(error.to_string()),
                };
            }
        }
        true
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.timer
            .map(|timer| timer.deadline.saturating_duration_since(now))
    }

    pub fn cancel(&mut self) {
        if self.timer.take().is_some() {
            debug!("pending catalog load cancelled");
        }
    }

    /// Leaves `Failed` for a fresh `Loading` attempt.
    pub fn retry(&mut self, now: Instant) -> bool {
        if !matches!(self.state.phase, LoadPhase::Failed(_)) {
            return false;
        }
        self.state = GalleryState::default();
        self.start(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::catalog::builtin::BuiltinCatalog;
    use crate::catalog::models::ImageRecord;
    use crate::error::{GalleryError, Result};

    const DELAY: Duration = Duration::from_millis(500);

    struct FlakySource {
        failures_left: Rc<Cell<u32>>,
    }

    impl CatalogSource for FlakySource {
        fn describe(&self) -> String {
            "flaky".to_string()
        }

        fn load(&self) -> Result<Vec<ImageRecord>> {
            let left = self.failures_left.get();
            if left > 0 {
                self.failures_left.set(left - 1);
                return Err(GalleryError::CatalogDirectory("gone".into()));
            }
            Ok(vec![ImageRecord::new(1, "a", "A")])
        }
    }

    #[test]
    fn load_completes_only_after_delay() {
        let start = Instant::now();
        let mut loader = GalleryLoader::new(Box::new(BuiltinCatalog), DELAY);
        loader.start(start);

        assert!(!loader.poll(start + Duration::from_millis(499)));
        assert!(loader.state().loading());
        assert!(loader.state().images.is_empty());

        assert!(loader.poll(start + DELAY));
        assert!(!loader.state().loading());
        assert_eq!(loader.state().images.len(), 12);
        assert!(!loader.poll(start + DELAY * 2));
    }

    #[test]
    fn cancelled_load_never_applies() {
        let start = Instant::now();
        let mut loader = GalleryLoader::new(Box::new(BuiltinCatalog), DELAY);
        loader.start(start);
        loader.cancel();

        assert!(!loader.poll(start + DELAY * 10));
        assert!(loader.state().loading());
        assert!(loader.state().images.is_empty());
    }

    #[test]
    fn remaining_counts_down_to_deadline() {
        let start = Instant::now();
        let mut loader = GalleryLoader::new(Box::new(BuiltinCatalog), DELAY);
        assert_eq!(loader.remaining(start), None);
        loader.start(start);
        assert_eq!(
            loader.remaining(start + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
    }

    #[test]
    fn failed_load_can_be_retried() {
        let start = Instant::now();
        let failures = Rc::new(Cell::new(1));
        let mut loader = GalleryLoader::new(
            Box::new(FlakySource {
                failures_left: failures.clone(),
            }),
            DELAY,
        );
        loader.start(start);
        loader.poll(start + DELAY);
        assert!(matches!(loader.state().phase, LoadPhase::Failed(_)));

        let retry_at = start + DELAY * 2;
        assert!(loader.retry(retry_at));
        assert!(loader.state().loading());
        assert!(loader.poll(retry_at + DELAY));
        assert_eq!(loader.state().phase, LoadPhase::Loaded);
        assert_eq!(loader.state().images.len(), 1);
        assert!(!loader.retry(retry_at + DELAY * 2));
    }
}
