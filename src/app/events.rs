use std::time::Instant;

use crate::ui::view::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Space,
    Escape,
}

impl Key {
    /// Keys that activate a focused tile.
    pub fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Tick(Instant),
    Click { target: ElementId },
    KeyDown { key: Key, focused: Option<ElementId> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Backdrop,
    CloseButton,
    Escape,
    Unmount,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub changed: bool,
    pub default_prevented: bool,
}

impl DispatchOutcome {
    pub fn changed() -> Self {
        Self {
            changed: true,
            default_prevented: false,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            changed: self.changed || other.changed,
            default_prevented: self.default_prevented || other.default_prevented,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_enter_and_space_activate() {
        assert!(Key::Enter.activates());
        assert!(Key::Space.activates());
        assert!(!Key::Escape.activates());
    }
}
