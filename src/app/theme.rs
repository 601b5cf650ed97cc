use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Names the mode the toggle would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "😴",
            Self::Light => "😎",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeController {
    dark: bool,
}

impl ThemeController {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
        debug!(dark = self.dark, "theme toggled");
    }

    pub fn variant(&self) -> ThemeVariant {
        ThemeVariant::from_dark(self.dark)
    }
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new(true)
    }
}
