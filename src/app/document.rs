//! Window-wide side effects: key listeners and the page scroll lock.
//!
//! Both are handed out as guards. Dropping the guard releases the resource,
//! which is the only way to release it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::events::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct DocumentState {
    next_listener: u64,
    key_listeners: Vec<(ListenerId, Key)>,
    scroll_locked: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    inner: Rc<RefCell<DocumentState>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_key_listener(&self, key: Key) -> KeyListener {
        let mut state = self.inner.borrow_mut();
        state.next_listener += 1;
        let id = ListenerId(state.next_listener);
        state.key_listeners.push((id, key));
        KeyListener {
            id,
            document: self.clone(),
        }
    }

    pub fn lock_scroll(&self) -> ScrollLock {
        self.inner.borrow_mut().scroll_locked = true;
        ScrollLock {
            document: self.clone(),
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.inner.borrow().scroll_locked
    }

    #[cfg(test)]
    pub fn key_listener_count(&self) -> usize {
        self.inner.borrow().key_listeners.len()
    }

    /// Listeners registered for `key`, in registration order.
    pub fn listeners_for(&self, key: Key) -> Vec<ListenerId> {
        self.inner
            .borrow()
            .key_listeners
            .iter()
            .filter(|(_, registered)| *registered == key)
            .map(|(id, _)| *id)
            .collect()
    }

    fn remove_listener(&self, id: ListenerId) {
        self.inner
            .borrow_mut()
            .key_listeners
            .retain(|(registered, _)| *registered != id);
    }

    fn unlock_scroll(&self) {
        self.inner.borrow_mut().scroll_locked = false;
    }
}

#[derive(Debug)]
pub struct KeyListener {
    id: ListenerId,
    document: Document,
}

impl KeyListener {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.document.remove_listener(self.id);
    }
}

#[derive(Debug)]
pub struct ScrollLock {
    document: Document,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.document.unlock_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_listener_is_removed_on_drop() {
        let document = Document::new();
        let listener = document.add_key_listener(Key::Escape);
        assert_eq!(document.listeners_for(Key::Escape), vec![listener.id()]);
        assert!(document.listeners_for(Key::Enter).is_empty());

        drop(listener);
        assert_eq!(document.key_listener_count(), 0);
    }

    #[test]
    fn scroll_lock_is_released_on_drop() {
        let document = Document::new();
        assert!(!document.scroll_locked());
        let lock = document.lock_scroll();
        assert!(document.scroll_locked());
        drop(lock);
        assert!(!document.scroll_locked());
    }
}
