//! The chart page as the lightbox sees it: rendered element ids, focus and
//! key routing between the thumbnails, the overlay and the document.

use chart_source::ChartEntry;
use lightbox::{
    Document, ElementId, Key, KeyEvent, Lightbox, LightboxOptions, OverlayIds, Surface,
    ThumbnailId,
};
use std::rc::Rc;

/// Element ids the gallery renders for `charts`, in document order.
pub fn render_surface(charts: &[ChartEntry], ids: &OverlayIds) -> Surface {
    let mut surface = Surface::new().with_overlay(ids);

    for chart in charts {
        surface.push_thumbnail(&ids.thumbnail_class, chart.thumbnail());
    }

    surface
}

#[derive(Debug)]
pub struct ChartPage {
    document: Rc<Document>,
    lightbox: Lightbox,
    last_opened: Option<ThumbnailId>,
}

impl Default for ChartPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartPage {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            lightbox: Lightbox::disabled(),
            last_opened: None,
        }
    }

    /// Replaces the bound controller after the gallery changed. The old one
    /// is closed first so it releases the scroll lock.
    pub fn rebind(&mut self, charts: &[ChartEntry], ids: &OverlayIds, options: LightboxOptions) {
        self.lightbox.close();
        self.lightbox.dispose();

        let surface = render_surface(charts, ids);
        self.lightbox = Lightbox::bind(&self.document, &surface, ids, options);
        self.last_opened = None;

        if let Some(focused) = self.document.focused()
            && !surface.contains(&focused)
        {
            self.document.blur();
        }
    }

    pub fn document(&self) -> &Rc<Document> {
        &self.document
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.document.is_scroll_locked()
    }

    pub fn focused_thumbnail(&self) -> Option<usize> {
        let focused = self.document.focused()?;
        self.lightbox.thumbnail_id(&focused).map(|id| id.0)
    }

    pub fn is_close_focused(&self) -> bool {
        self.lightbox
            .elements()
            .is_some_and(|elements| self.document.is_focused(&elements.close_button))
    }

    /// Accessible name the gallery renders for the thumbnail at `idx`.
    pub fn thumbnail_label(&self, idx: usize) -> Option<String> {
        self.lightbox
            .accessibility(ThumbnailId(idx))
            .map(|info| info.get_aria_label())
    }

    /// Accessible name of the dialog, present only while the overlay is shown.
    pub fn dialog_label(&self) -> Option<String> {
        self.lightbox
            .dialog_accessibility()
            .map(|info| info.get_aria_label())
    }

    pub fn focus_thumbnail(&self, idx: usize) {
        if let Some(id) = self.lightbox.element_id(ThumbnailId(idx)) {
            self.document.focus(id);
        }
    }

    /// Moves gallery focus by `delta`, clamped to the first and last thumbnail.
    /// The gallery is inert while the overlay is shown.
    pub fn focus_step(&self, delta: isize) {
        let count = self.lightbox.thumbnail_count();
        if count == 0 || self.lightbox.is_shown() {
            return;
        }

        let next = match self.focused_thumbnail() {
            Some(idx) => idx.saturating_add_signed(delta).min(count - 1),
            None if delta < 0 => count - 1,
            None => 0,
        };

        self.focus_thumbnail(next);
    }

    pub fn focus_first(&self) {
        if !self.lightbox.is_shown() {
            self.focus_thumbnail(0);
        }
    }

    pub fn focus_last(&self) {
        let count = self.lightbox.thumbnail_count();
        if count > 0 && !self.lightbox.is_shown() {
            self.focus_thumbnail(count - 1);
        }
    }

    pub fn thumbnail_pressed(&mut self, idx: usize) {
        if self.lightbox.is_shown() {
            return;
        }

        let id = ThumbnailId(idx);
        self.focus_thumbnail(idx);
        self.lightbox.thumbnail_clicked(id);

        if self.lightbox.is_shown() {
            self.last_opened = Some(id);
        }
    }

    pub fn close_pressed(&self) {
        self.track_close(|| self.lightbox.close_clicked());
    }

    pub fn overlay_pressed(&self, target: &ElementId) {
        self.track_close(|| self.lightbox.overlay_clicked(target));
    }

    /// Routes a key press to the focused element, then to the document.
    pub fn key_pressed(&mut self, key: Key) -> KeyEvent {
        let mut event = KeyEvent::new(key);
        let was_shown = self.lightbox.is_shown();

        if was_shown {
            if self.is_close_focused() && event.key.is_activation() {
                event.prevent_default();
                self.lightbox.close_clicked();
            } else if event.key == Key::Tab
                && let Some(elements) = self.lightbox.elements()
            {
                // The close button is the only focusable element in the overlay.
                event.prevent_default();
                self.document.focus(elements.close_button);
            }
        } else if let Some(idx) = self.focused_thumbnail() {
            if event.key == Key::Tab {
                event.prevent_default();
                self.focus_step(1);
            } else {
                let id = ThumbnailId(idx);
                self.lightbox.thumbnail_key_down(id, &mut event);

                if self.lightbox.is_shown() {
                    self.last_opened = Some(id);
                }
            }
        } else if event.key == Key::Tab && self.lightbox.thumbnail_count() > 0 {
            event.prevent_default();
            self.focus_thumbnail(0);
        }

        self.document.dispatch_key(&mut event);
        self.restore_focus(was_shown);

        event
    }

    fn track_close(&self, f: impl FnOnce()) {
        let was_shown = self.lightbox.is_shown();
        f();
        self.restore_focus(was_shown);
    }

    /// Returns focus to the thumbnail that opened the overlay once it hides.
    fn restore_focus(&self, was_shown: bool) {
        if was_shown
            && !self.lightbox.is_shown()
            && let Some(id) = self.last_opened
        {
            self.focus_thumbnail(id.0);
        }
    }
}
