//! Pure description of what the window shows for a given `RootView`.
//!
//! The shell paints a `Page` and routes input back as events naming an
//! `ElementId`. Elements that are not part of the current page do not exist,
//! so events aimed at them are dropped.

use crate::app::controller::RootView;
use crate::app::state::LoadPhase;
use crate::app::theme::ThemeVariant;
use crate::catalog::models::ImageRecord;

pub const LOADING_MESSAGE: &str = "Loading gallery...";
pub const HINT_LINES: [&str; 2] = [
    "Click on any image to view the logo",
    "Hover over the image to know the name",
];
pub const CLOSE_LABEL: &str = "Close modal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    LoadingIndicator,
    RetryButton,
    ThemeToggle,
    Tile(usize),
    ModalBackdrop,
    ModalContent,
    CloseButton,
    ModalImage,
    ModalTitle,
}

impl ElementId {
    /// The element a click on `self` bubbles to next.
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::CloseButton | Self::ModalImage | Self::ModalTitle => Some(Self::ModalContent),
            Self::ModalContent => Some(Self::ModalBackdrop),
            _ => None,
        }
    }

    /// `self` followed by its ancestors.
    pub fn bubble_path(self) -> Vec<Self> {
        let mut path = vec![self];
        let mut current = self;
        while let Some(parent) = current.parent() {
            path.push(parent);
            current = parent;
        }
        path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Button,
    Dialog,
    Heading,
    Img,
    Presentation,
    Status,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Loading,
    Failed { reason: String },
    Gallery(GalleryView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub theme: ThemeVariant,
    pub title: String,
    pub toggle: ThemeToggleView,
    pub tiles: Vec<TileView>,
    pub modal: Option<ModalView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeToggleView {
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub element: ElementId,
    pub role: Role,
    pub label: String,
    pub image: ImageRecord,
    pub lazy: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub role: Role,
    pub aria_modal: bool,
    pub labelled_by: ElementId,
    pub close_label: &'static str,
    pub image: ImageRecord,
}

impl Page {
    pub fn role_of(&self, element: ElementId) -> Option<Role> {
        match (self, element) {
            (Self::Loading, ElementId::LoadingIndicator) => Some(Role::Status),
            (Self::Failed { .. }, ElementId::RetryButton) => Some(Role::Button),
            (Self::Gallery(view), element) => view.role_of(element),
            _ => None,
        }
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.role_of(element).is_some()
    }

    pub fn tiles(&self) -> &[TileView] {
        match self {
            Self::Gallery(view) => &view.tiles,
            _ => &[],
        }
    }

    pub fn modal(&self) -> Option<&ModalView> {
        match self {
            Self::Gallery(view) => view.modal.as_ref(),
            _ => None,
        }
    }
}

impl ModalView {
    /// Text of the element the dialog is labelled by.
    pub fn accessible_name(&self) -> &str {
        match self.labelled_by {
            ElementId::ModalTitle => &self.image.title,
            ElementId::CloseButton => self.close_label,
            _ => "",
        }
    }
}

impl GalleryView {
    fn role_of(&self, element: ElementId) -> Option<Role> {
        match element {
            ElementId::ThemeToggle => Some(Role::Button),
            ElementId::Tile(index) => self.tiles.get(index).map(|tile| tile.role),
            ElementId::ModalBackdrop => self.modal.as_ref().map(|modal| modal.role),
            ElementId::ModalContent => self.modal.as_ref().map(|_| Role::Presentation),
            ElementId::ModalImage => self.modal.as_ref().map(|_| Role::Img),
            ElementId::ModalTitle => self.modal.as_ref().map(|_| Role::Heading),
            ElementId::CloseButton => self.modal.as_ref().map(|_| Role::Button),
            ElementId::LoadingIndicator | ElementId::RetryButton => None,
        }
    }
}

pub fn tile_label(image: &ImageRecord) -> String {
    format!("View {} in full size", image.title)
}

pub fn render_tiles(images: &[ImageRecord]) -> Vec<TileView> {
    images
        .iter()
        .enumerate()
        .map(|(index, image)| TileView {
            element: ElementId::Tile(index),
            role: Role::Button,
            label: tile_label(image),
            image: image.clone(),
            lazy: true,
        })
        .collect()
}

pub fn render(root: &RootView) -> Page {
    let gallery = root.gallery();
    match &gallery.phase {
        LoadPhase::Loading => Page::Loading,
        LoadPhase::Failed(reason) => Page::Failed {
            reason: reason.clone(),
        },
        LoadPhase::Loaded => {
            let state = root.view_state();
            let theme = ThemeVariant::from_dark(state.dark_mode);
            let modal = match state.selected_image {
                Some(image) if state.modal_open => Some(ModalView {
                    role: Role::Dialog,
                    aria_modal: true,
                    labelled_by: ElementId::ModalTitle,
                    close_label: CLOSE_LABEL,
                    image,
                }),
                _ => None,
            };
            Page::Gallery(GalleryView {
                theme,
                title: root.title().to_string(),
                toggle: ThemeToggleView {
                    label: theme.toggle_label(),
                    icon: theme.toggle_icon(),
                },
                tiles: render_tiles(&gallery.images),
                modal,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_inside_the_modal_bubble_to_the_backdrop() {
        assert_eq!(
            ElementId::ModalImage.bubble_path(),
            vec![
                ElementId::ModalImage,
                ElementId::ModalContent,
                ElementId::ModalBackdrop
            ]
        );
        assert_eq!(
            ElementId::ModalBackdrop.bubble_path(),
            vec![ElementId::ModalBackdrop]
        );
        assert_eq!(ElementId::Tile(3).bubble_path(), vec![ElementId::Tile(3)]);
    }

    #[test]
    fn tiles_carry_accessible_labels_in_catalog_order() {
        let images = vec![
            ImageRecord::new(5, "https://example.com/u.png", "Ubuntu Logo"),
            ImageRecord::new(2, "https://example.com/d.png", "Debian Logo"),
        ];
        let tiles = render_tiles(&images);
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].element, ElementId::Tile(0));
        assert_eq!(tiles[0].label, "View Ubuntu Logo in full size");
        assert_eq!(tiles[1].image.id.get(), 2);
        assert!(tiles.iter().all(|tile| tile.role == Role::Button && tile.lazy));
    }

    #[test]
    fn loading_page_holds_only_the_indicator() {
        let page = Page::Loading;
        assert!(page.contains(ElementId::LoadingIndicator));
        assert!(!page.contains(ElementId::Tile(0)));
        assert!(!page.contains(ElementId::ModalBackdrop));
        assert!(!page.contains(ElementId::ThemeToggle));
        assert!(page.tiles().is_empty());
    }

    #[test]
    fn dialog_is_named_by_its_title() {
        let modal = ModalView {
            role: Role::Dialog,
            aria_modal: true,
            labelled_by: ElementId::ModalTitle,
            close_label: CLOSE_LABEL,
            image: ImageRecord::new(3, "https://example.com/kali.png", "Kali Linux Logo"),
        };
        assert_eq!(modal.accessible_name(), "Kali Linux Logo");

        let by_close = ModalView {
            labelled_by: ElementId::CloseButton,
            ..modal
        };
        assert_eq!(by_close.accessible_name(), "Close modal");
    }

    #[test]
    fn failed_page_offers_only_retry() {
        let page = Page::Failed {
            reason: "catalog folder missing".to_string(),
        };
        assert_eq!(page.role_of(ElementId::RetryButton), Some(Role::Button));
        assert!(!page.contains(ElementId::ThemeToggle));
        assert!(!page.contains(ElementId::Tile(0)));
    }
}
