use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::app::document::Document;
use crate::app::events::{AppEvent, CloseReason, DispatchOutcome, Key};
use crate::app::modal::ModalViewer;
use crate::app::state::{GalleryState, ViewState};
use crate::app::theme::ThemeController;
use crate::catalog::loader::GalleryLoader;
use crate::catalog::source::CatalogSource;
use crate::infra::config::GalleryConfig;
use crate::ui::view::{self, ElementId, Page};

/// Top-level state machine: loader, modal viewer, and theme.
pub struct RootView {
    title: String,
    document: Document,
    loader: GalleryLoader,
    modal: ModalViewer,
    theme: ThemeController,
    mounted: bool,
    /// Time of the latest mount or tick; click-driven timers start from it.
    last_tick: Option<Instant>,
}

impl RootView {
    pub fn new(source: Box<dyn CatalogSource>, config: &GalleryConfig) -> Self {
        let document = Document::new();
        Self {
            title: config.title.clone(),
            loader: GalleryLoader::new(source, Duration::from_millis(config.load_delay_ms)),
            modal: ModalViewer::new(document.clone()),
            theme: ThemeController::new(config.dark_mode),
            document,
            mounted: false,
            last_tick: None,
        }
    }

    pub fn mount(&mut self, now: Instant) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.last_tick = Some(now);
        info!(title = %self.title, "gallery mounted");
        self.loader.start(now);
    }

    /// Cancels the pending load and releases everything the modal holds.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.loader.cancel();
        self.modal.close(CloseReason::Unmount);
        info!("gallery unmounted");
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn gallery(&self) -> &GalleryState {
        self.loader.state()
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            selected_image: self.modal.image().cloned(),
            modal_open: self.modal.is_open(),
            dark_mode: self.theme.is_dark(),
        }
    }

    pub fn render(&self) -> Page {
        view::render(self)
    }

    /// How long until the next timer-driven transition, if one is pending.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.loader.remaining(now)
    }

    pub fn activate_tile(&mut self, index: usize) -> bool {
        let Some(image) = self.loader.state().images.get(index).cloned() else {
            return false;
        };
        self.modal.open(image);
        true
    }

    pub fn close_modal(&mut self, reason: CloseReason) -> bool {
        self.modal.close(reason)
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    /// Starts a fresh load after a failure.
    pub fn retry_load(&mut self) -> bool {
        match self.last_tick {
            Some(now) => self.loader.retry(now),
            None => false,
        }
    }

    pub fn dispatch(&mut self, event: AppEvent) -> DispatchOutcome {
        if !self.mounted {
            return DispatchOutcome::default();
        }

        match event {
            AppEvent::Tick(now) => {
                self.last_tick = Some(now);
                DispatchOutcome {
                    changed: self.loader.poll(now),
                    default_prevented: false,
                }
            }
            AppEvent::Click { target } => self.handle_click(target),
            AppEvent::KeyDown { key, focused } => self.handle_key(key, focused),
        }
    }

    fn handle_click(&mut self, target: ElementId) -> DispatchOutcome {
        if !self.render().contains(target) {
            debug!(?target, "click on element that is not rendered");
            return DispatchOutcome::default();
        }

        let mut outcome = DispatchOutcome::default();
        for current in target.bubble_path() {
            let changed = match current {
                ElementId::Tile(index) => self.activate_tile(index),
                ElementId::RetryButton => self.retry_load(),
                ElementId::ThemeToggle => {
                    self.toggle_theme();
                    true
                }
                ElementId::CloseButton => self.close_modal(CloseReason::CloseButton),
                // Only a click that lands on the backdrop itself closes.
                ElementId::ModalBackdrop if current == target => {
                    self.close_modal(CloseReason::Backdrop)
                }
                _ => false,
            };
            if changed {
                outcome = outcome.merge(DispatchOutcome::changed());
            }
        }
        outcome
    }

    fn handle_key(&mut self, key: Key, focused: Option<ElementId>) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();

        if let Some(ElementId::Tile(index)) = focused {
            if key.activates() && self.render().contains(ElementId::Tile(index)) {
                outcome = DispatchOutcome {
                    changed: self.activate_tile(index),
                    default_prevented: true,
                };
            }
        }

        for listener in self.document.listeners_for(key) {
            if self.modal.escape_listener() == Some(listener) && self.close_modal(CloseReason::Escape) {
                outcome = outcome.merge(DispatchOutcome::changed());
            }
        }

        outcome
    }
}

impl Drop for RootView {
    fn drop(&mut self) {
        self.unmount();
    }
}
