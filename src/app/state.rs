use crate::catalog::models::ImageRecord;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    pub images: Vec<ImageRecord>,
    pub phase: LoadPhase,
}

impl GalleryState {
    pub fn loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }
}

/// Snapshot of what the root view shows. `modal_open` and `selected_image`
/// come from the same modal state, so they never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub selected_image: Option<ImageRecord>,
    pub modal_open: bool,
    pub dark_mode: bool,
}
