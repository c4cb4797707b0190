use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a rendered element on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(String);

impl ElementId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Tab,
    Character(String),
    Other,
}

impl Key {
    /// Keys that activate a focused button.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// A key press travelling through the handlers. Handlers may suppress the
/// key's default action, the host honours the flag after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// Names the page uses for the lightbox markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayIds {
    pub overlay: String,
    pub image: String,
    pub close_button: String,
    pub thumbnail_class: String,
}

impl Default for OverlayIds {
    fn default() -> Self {
        Self {
            overlay: "chartModal".to_string(),
            image: "chartModalImg".to_string(),
            close_button: "chartModalClose".to_string(),
            thumbnail_class: "chart-frame".to_string(),
        }
    }
}

/// The overlay region and its two required children, resolved on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayElements {
    pub overlay: ElementId,
    pub image: ElementId,
    pub close_button: ElementId,
}

impl OverlayElements {
    pub fn new(
        overlay: impl Into<ElementId>,
        image: impl Into<ElementId>,
        close_button: impl Into<ElementId>,
    ) -> Self {
        Self {
            overlay: overlay.into(),
            image: image.into(),
            close_button: close_button.into(),
        }
    }
}

impl From<&OverlayIds> for OverlayElements {
    fn from(ids: &OverlayIds) -> Self {
        Self::new(
            ids.overlay.as_str(),
            ids.image.as_str(),
            ids.close_button.as_str(),
        )
    }
}

/// Which interactions dismiss the overlay, and whether it suspends page scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Behavior {
    pub close_on_backdrop: bool,
    pub close_on_escape: bool,
    pub lock_scroll: bool,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            close_on_backdrop: true,
            close_on_escape: true,
            lock_scroll: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(Key::Enter.is_activation());
        assert!(Key::Space.is_activation());
        assert!(!Key::Escape.is_activation());
        assert!(!Key::Character("x".into()).is_activation());
    }

    #[test]
    fn test_prevent_default() {
        let mut event = KeyEvent::new(Key::Space);
        assert!(!event.is_default_prevented());
        event.prevent_default();
        assert!(event.is_default_prevented());
    }

    #[test]
    fn test_default_ids() {
        let elements = OverlayElements::from(&OverlayIds::default());
        assert_eq!(elements.overlay.as_str(), "chartModal");
        assert_eq!(elements.image.as_str(), "chartModalImg");
        assert_eq!(elements.close_button.as_str(), "chartModalClose");
    }

    #[test]
    fn test_behavior_defaults_to_all_enabled() {
        let behavior = Behavior::default();
        assert!(behavior.close_on_backdrop);
        assert!(behavior.close_on_escape);
        assert!(behavior.lock_scroll);
    }
}
