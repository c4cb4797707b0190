//! Lightbox controller
//!
//! Binds a set of thumbnails to one overlay. Every entry point is a silent
//! no-op when the overlay is missing or the thumbnail cannot be shown.

use crate::{
    document::{Document, KeySubscription},
    overlay::OverlayState,
    surface::Surface,
};
use lightbox_types::{Behavior, ElementId, Key, KeyEvent, OverlayElements, OverlayIds};
use shared::{AccessibilityInfo, LightboxLabels, Thumbnail};
use std::{cell::RefCell, rc::Rc};

/// Position of a bound thumbnail, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThumbnailId(pub usize);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxOptions {
    pub behavior: Behavior,
    pub labels: LightboxLabels,
}

impl LightboxOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_labels(mut self, labels: LightboxLabels) -> Self {
        self.labels = labels;
        self
    }
}

#[derive(Debug, Clone)]
struct BoundThumbnail {
    id: ElementId,
    thumbnail: Thumbnail,
    accessibility: AccessibilityInfo,
}

#[derive(Debug)]
struct Attached {
    document: Rc<Document>,
    elements: OverlayElements,
    overlay: OverlayState,
    thumbnails: Vec<BoundThumbnail>,
    options: LightboxOptions,
    holds_scroll_lock: bool,
}

impl Attached {
    fn open(&mut self, thumbnail: &Thumbnail) {
        if !thumbnail.has_source() {
            tracing::debug!("ignoring open request for a thumbnail without a source");
            return;
        }

        let description = thumbnail
            .description_or(&self.options.labels.placeholder_description)
            .to_string();

        tracing::debug!("showing {} in {}", thumbnail.src, self.elements.overlay);
        self.overlay =
            std::mem::take(&mut self.overlay).transition_to_shown(thumbnail.src.clone(), description);

        // A lock taken by someone else stays theirs to release.
        if self.options.behavior.lock_scroll
            && !self.holds_scroll_lock
            && !self.document.is_scroll_locked()
        {
            self.document.lock_scroll();
            self.holds_scroll_lock = true;
        }

        self.document.focus(self.elements.close_button.clone());
    }

    fn open_at(&mut self, id: ThumbnailId) {
        match self.thumbnails.get(id.0).map(|bound| bound.thumbnail.clone()) {
            Some(thumbnail) => self.open(&thumbnail),
            None => tracing::debug!("no thumbnail bound at {}", id.0),
        }
    }

    fn close(&mut self) {
        if self.overlay.is_hidden() {
            return;
        }

        tracing::debug!("hiding {}", self.elements.overlay);
        self.overlay = std::mem::take(&mut self.overlay).transition_to_hidden();

        if self.holds_scroll_lock {
            self.document.unlock_scroll();
            self.holds_scroll_lock = false;
        }
    }
}

/// Keeps the overlay in sync with clicks and key presses on the thumbnails
/// and on the overlay itself.
#[derive(Debug, Default)]
pub struct Lightbox {
    state: Option<Rc<RefCell<Attached>>>,
    escape: Option<KeySubscription>,
}

impl Lightbox {
    /// A controller with nothing bound. Every operation does nothing.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Binds `thumbnails` to the overlay. Without overlay elements the
    /// controller is disabled: nothing is bound and no listener is registered.
    pub fn new(
        document: &Rc<Document>,
        elements: Option<OverlayElements>,
        thumbnails: Vec<(ElementId, Thumbnail)>,
        options: LightboxOptions,
    ) -> Self {
        let Some(elements) = elements else {
            tracing::debug!("no overlay on the page, lightbox disabled");
            return Self::disabled();
        };

        let thumbnails = thumbnails
            .into_iter()
            .map(|(id, thumbnail)| {
                let accessibility = AccessibilityInfo::button().with_label(&options.labels.enlarge);
                tracing::trace!("{id}: {}", accessibility.generate_aria_attributes());

                BoundThumbnail {
                    id,
                    thumbnail,
                    accessibility,
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "binding {} thumbnail(s) to {}",
            thumbnails.len(),
            elements.overlay
        );

        let close_on_escape = options.behavior.close_on_escape;
        let state = Rc::new(RefCell::new(Attached {
            document: Rc::clone(document),
            elements,
            overlay: OverlayState::Hidden,
            thumbnails,
            options,
            holds_scroll_lock: false,
        }));

        let escape = close_on_escape.then(|| {
            let weak = Rc::downgrade(&state);
            document.add_key_listener(move |event| {
                if event.key != Key::Escape {
                    return;
                }

                let Some(state) = weak.upgrade() else {
                    return;
                };

                // A handler already holding the state is mid-update, leave it be.
                if let Ok(mut state) = state.try_borrow_mut()
                    && state.overlay.is_shown()
                {
                    state.close();
                }
            })
        });

        Self {
            state: Some(state),
            escape,
        }
    }

    /// Locates the overlay and the thumbnails on `surface`, then binds them.
    pub fn bind(
        document: &Rc<Document>,
        surface: &Surface,
        ids: &OverlayIds,
        options: LightboxOptions,
    ) -> Self {
        match surface.locate_overlay(ids) {
            Some(elements) => Self::new(
                document,
                Some(elements),
                surface.thumbnails(&ids.thumbnail_class),
                options,
            ),
            None => Self::disabled(),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut Attached) -> R) -> Option<R> {
        self.state.as_ref().map(|state| f(&mut state.borrow_mut()))
    }

    fn read_state<R>(&self, f: impl FnOnce(&Attached) -> R) -> Option<R> {
        self.state.as_ref().map(|state| f(&state.borrow()))
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_some()
    }

    /// Whether the document-wide Escape listener is still registered.
    pub fn is_listening(&self) -> bool {
        self.escape
            .as_ref()
            .is_some_and(KeySubscription::is_active)
    }

    /// Shows `thumbnail` in the overlay. Last call wins.
    pub fn open(&self, thumbnail: &Thumbnail) {
        self.with_state(|state| state.open(thumbnail));
    }

    pub fn open_at(&self, id: ThumbnailId) {
        self.with_state(|state| state.open_at(id));
    }

    pub fn close(&self) {
        self.with_state(Attached::close);
    }

    pub fn thumbnail_clicked(&self, id: ThumbnailId) {
        self.open_at(id);
    }

    /// Enter and Space activate the thumbnail and suppress the key's default
    /// scroll or activation. Other keys pass through untouched.
    pub fn thumbnail_key_down(&self, id: ThumbnailId, event: &mut KeyEvent) {
        if !event.key.is_activation() {
            return;
        }

        self.with_state(|state| {
            if id.0 < state.thumbnails.len() {
                event.prevent_default();
                state.open_at(id);
            }
        });
    }

    pub fn close_clicked(&self) {
        self.close();
    }

    /// Click inside the overlay region. Only a click on the region itself,
    /// the backdrop, dismisses it.
    pub fn overlay_clicked(&self, target: &ElementId) {
        self.with_state(|state| {
            if state.options.behavior.close_on_backdrop && *target == state.elements.overlay {
                state.close();
            }
        });
    }

    /// Stops listening for document key presses.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.escape.take() {
            subscription.dispose();
        }
    }

    pub fn is_shown(&self) -> bool {
        self.read_state(|state| state.overlay.is_shown())
            .unwrap_or(false)
    }

    pub fn overlay(&self) -> OverlayState {
        self.read_state(|state| state.overlay.clone())
            .unwrap_or_default()
    }

    pub fn elements(&self) -> Option<OverlayElements> {
        self.read_state(|state| state.elements.clone())
    }

    pub fn thumbnail_count(&self) -> usize {
        self.read_state(|state| state.thumbnails.len())
            .unwrap_or(0)
    }

    pub fn thumbnail_id(&self, element: &ElementId) -> Option<ThumbnailId> {
        self.read_state(|state| {
            state
                .thumbnails
                .iter()
                .position(|bound| bound.id == *element)
                .map(ThumbnailId)
        })
        .flatten()
    }

    pub fn element_id(&self, id: ThumbnailId) -> Option<ElementId> {
        self.read_state(|state| state.thumbnails.get(id.0).map(|bound| bound.id.clone()))
            .flatten()
    }

    /// Accessibility attributes of a bound thumbnail.
    pub fn accessibility(&self, id: ThumbnailId) -> Option<AccessibilityInfo> {
        self.read_state(|state| {
            state
                .thumbnails
                .get(id.0)
                .map(|bound| bound.accessibility.clone())
        })
        .flatten()
    }

    /// Accessibility attributes of the overlay while it is shown.
    pub fn dialog_accessibility(&self) -> Option<AccessibilityInfo> {
        self.read_state(|state| {
            state.overlay.image().map(|image| {
                AccessibilityInfo::dialog()
                    .with_label(&state.options.labels.dialog)
                    .with_description(&image.description)
            })
        })
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightbox(document: &Rc<Document>) -> Lightbox {
        Lightbox::new(
            document,
            Some(OverlayElements::from(&OverlayIds::default())),
            vec![(ElementId::from("chart-frame-0"), Thumbnail::new("a.png"))],
            LightboxOptions::default(),
        )
    }

    #[test]
    fn test_open_sets_focus_and_scroll_lock() {
        let document = Document::new();
        let lightbox = lightbox(&document);

        lightbox.open_at(ThumbnailId(0));

        assert!(lightbox.is_shown());
        assert!(document.is_scroll_locked());
        assert!(document.is_focused(&ElementId::from("chartModalClose")));
    }

    #[test]
    fn test_scroll_lock_disabled() {
        let document = Document::new();
        let options = LightboxOptions::default().with_behavior(Behavior {
            lock_scroll: false,
            ..Behavior::default()
        });
        let lightbox = Lightbox::new(
            &document,
            Some(OverlayElements::from(&OverlayIds::default())),
            Vec::new(),
            options,
        );

        lightbox.open(&Thumbnail::new("a.png"));
        assert!(lightbox.is_shown());
        assert!(!document.is_scroll_locked());

        lightbox.close();
        assert!(!document.is_scroll_locked());
    }

    #[test]
    fn test_close_leaves_foreign_scroll_lock() {
        let document = Document::new();
        let lightbox = lightbox(&document);

        document.lock_scroll();
        lightbox.close();
        assert!(document.is_scroll_locked());
    }

    #[test]
    fn test_open_over_foreign_scroll_lock() {
        let document = Document::new();
        let lightbox = lightbox(&document);

        document.lock_scroll();
        lightbox.open_at(ThumbnailId(0));
        assert!(lightbox.is_shown());

        lightbox.close();
        assert!(document.is_scroll_locked());
    }

    #[test]
    fn test_out_of_range_thumbnail_is_ignored() {
        let document = Document::new();
        let lightbox = lightbox(&document);

        let mut event = KeyEvent::new(Key::Enter);
        lightbox.thumbnail_key_down(ThumbnailId(5), &mut event);
        lightbox.thumbnail_clicked(ThumbnailId(5));

        assert!(!event.is_default_prevented());
        assert!(!lightbox.is_shown());
    }

    #[test]
    fn test_thumbnail_lookup() {
        let document = Document::new();
        let lightbox = lightbox(&document);

        let id = lightbox.thumbnail_id(&ElementId::from("chart-frame-0"));
        assert_eq!(id, Some(ThumbnailId(0)));
        assert_eq!(
            lightbox.element_id(ThumbnailId(0)),
            Some(ElementId::from("chart-frame-0"))
        );
        assert_eq!(lightbox.thumbnail_id(&ElementId::from("nope")), None);
    }

    #[test]
    fn test_dialog_accessibility_tracks_overlay() {
        let document = Document::new();
        let lightbox = lightbox(&document);
        assert!(lightbox.dialog_accessibility().is_none());

        lightbox.open(&Thumbnail::new("a.png").with_description("Revenue"));
        let info = lightbox.dialog_accessibility();
        assert!(info.as_ref().is_some_and(|info| info.modal));
        assert_eq!(
            info.and_then(|info| info.description),
            Some("Revenue".to_string())
        );
    }
}
