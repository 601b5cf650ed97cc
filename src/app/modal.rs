use tracing::debug;

use crate::app::document::{Document, KeyListener, ListenerId, ScrollLock};
use crate::app::events::{CloseReason, Key};
use crate::catalog::models::ImageRecord;

/// Resources held only while the viewer is open.
#[derive(Debug)]
struct OpenSession {
    image: ImageRecord,
    escape: KeyListener,
    _scroll: ScrollLock,
}

#[derive(Debug, Default)]
enum ModalState {
    #[default]
    Closed,
    Open(OpenSession),
}

#[derive(Debug)]
pub struct ModalViewer {
    document: Document,
    state: ModalState,
}

impl ModalViewer {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            state: ModalState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn image(&self) -> Option<&ImageRecord> {
        match &self.state {
            ModalState::Open(session) => Some(&session.image),
            ModalState::Closed => None,
        }
    }

    pub fn escape_listener(&self) -> Option<ListenerId> {
        match &self.state {
            ModalState::Open(session) => Some(session.escape.id()),
            ModalState::Closed => None,
        }
    }

    pub fn open(&mut self, image: ImageRecord) {
        // Release the previous session before acquiring a new one.
        self.state = ModalState::Closed;
        debug!(id = image.id.get(), title = %image.title, "modal opened");
        self.state = ModalState::Open(OpenSession {
            image,
            escape: self.document.add_key_listener(Key::Escape),
            _scroll: self.document.lock_scroll(),
        });
    }

    /// Returns whether the viewer was open.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        match std::mem::take(&mut self.state) {
            ModalState::Open(session) => {
                debug!(id = session.image.id.get(), ?reason, "modal closed");
                true
            }
            ModalState::Closed => false,
        }
    }
}
