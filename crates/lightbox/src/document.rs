//! Page-wide state shared by every widget on the page.

use lightbox_types::{ElementId, KeyEvent};
use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

type KeyListener = Rc<dyn Fn(&mut KeyEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ListenerId(u64);

/// The document-level event target: key listeners, keyboard focus and the
/// scroll lock.
#[derive(Default)]
pub struct Document {
    key_listeners: RefCell<Vec<(ListenerId, KeyListener)>>,
    next_listener: Cell<u64>,
    scroll_locked: Cell<bool>,
    focused: RefCell<Option<ElementId>>,
}

impl Document {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Registers a listener for every key press on the page. The listener
    /// stays registered until the returned subscription is disposed or dropped.
    pub fn add_key_listener<F>(self: &Rc<Self>, listener: F) -> KeySubscription
    where
        F: Fn(&mut KeyEvent) + 'static,
    {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.key_listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        KeySubscription {
            document: Rc::downgrade(self),
            id: Some(id),
        }
    }

    fn remove_key_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.key_listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    fn has_listener(&self, id: ListenerId) -> bool {
        self.key_listeners
            .borrow()
            .iter()
            .any(|(listener_id, _)| *listener_id == id)
    }

    pub fn listener_count(&self) -> usize {
        self.key_listeners.borrow().len()
    }

    /// Delivers a key press to every listener in registration order.
    ///
    /// Listeners removed by an earlier listener during the same dispatch are
    /// skipped. Listeners added during dispatch see the next event.
    pub fn dispatch_key(&self, event: &mut KeyEvent) {
        let snapshot: Vec<(ListenerId, KeyListener)> = self
            .key_listeners
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        for (id, listener) in snapshot {
            if self.has_listener(id) {
                listener(event);
            }
        }
    }

    pub fn lock_scroll(&self) {
        self.scroll_locked.set(true);
    }

    pub fn unlock_scroll(&self) {
        self.scroll_locked.set(false);
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked.get()
    }

    pub fn focus(&self, id: ElementId) {
        *self.focused.borrow_mut() = Some(id);
    }

    pub fn blur(&self) {
        *self.focused.borrow_mut() = None;
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused.borrow().clone()
    }

    pub fn is_focused(&self, id: &ElementId) -> bool {
        self.focused.borrow().as_ref() == Some(id)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("key_listeners", &self.listener_count())
            .field("scroll_locked", &self.is_scroll_locked())
            .field("focused", &self.focused())
            .finish()
    }
}

/// Handle to a document key listener. Dropping it removes the listener.
#[derive(Debug)]
pub struct KeySubscription {
    document: Weak<Document>,
    id: Option<ListenerId>,
}

impl KeySubscription {
    pub fn is_active(&self) -> bool {
        match (self.document.upgrade(), self.id) {
            (Some(document), Some(id)) => document.has_listener(id),
            _ => false,
        }
    }

    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(id) = self.id.take()
            && let Some(document) = self.document.upgrade()
        {
            document.remove_key_listener(id);
        }
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lightbox_types::Key;

    #[test]
    fn test_dispatch_reaches_listener() {
        let document = Document::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let _sub = document.add_key_listener(move |_| counter.set(counter.get() + 1));

        document.dispatch_key(&mut KeyEvent::new(Key::Escape));
        document.dispatch_key(&mut KeyEvent::new(Key::Enter));

        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_drop_removes_listener() {
        let document = Document::new();
        let sub = document.add_key_listener(|_| {});
        assert_eq!(document.listener_count(), 1);
        assert!(sub.is_active());

        drop(sub);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_dispose_only_removes_own_listener() {
        let document = Document::new();
        let first = document.add_key_listener(|_| {});
        let second = document.add_key_listener(|_| {});

        first.dispose();
        assert_eq!(document.listener_count(), 1);
        assert!(second.is_active());
    }

    #[test]
    fn test_subscription_outlives_document() {
        let document = Document::new();
        let sub = document.add_key_listener(|_| {});
        drop(document);

        assert!(!sub.is_active());
        sub.dispose();
    }

    #[test]
    fn test_listener_removed_mid_dispatch_is_skipped() {
        let document = Document::new();
        let late_hits = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<KeySubscription>>> = Rc::new(RefCell::new(None));

        let remover = Rc::clone(&slot);
        let _first = document.add_key_listener(move |_| {
            remover.borrow_mut().take();
        });

        let counter = Rc::clone(&late_hits);
        *slot.borrow_mut() =
            Some(document.add_key_listener(move |_| counter.set(counter.get() + 1)));

        document.dispatch_key(&mut KeyEvent::new(Key::Escape));

        assert_eq!(late_hits.get(), 0);
        assert_eq!(document.listener_count(), 1);
    }

    #[test]
    fn test_listener_can_prevent_default() {
        let document = Document::new();
        let _sub = document.add_key_listener(|event| event.prevent_default());

        let mut event = KeyEvent::new(Key::Space);
        document.dispatch_key(&mut event);
        assert!(event.is_default_prevented());
    }

    #[test]
    fn test_focus_and_scroll_lock() {
        let document = Document::new();
        assert!(!document.is_scroll_locked());
        assert_eq!(document.focused(), None);

        document.lock_scroll();
        document.focus(ElementId::from("chartModalClose"));
        assert!(document.is_scroll_locked());
        assert!(document.is_focused(&ElementId::from("chartModalClose")));

        document.unlock_scroll();
        document.blur();
        assert!(!document.is_scroll_locked());
        assert_eq!(document.focused(), None);
    }
}
