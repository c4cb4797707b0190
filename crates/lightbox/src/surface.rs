use lightbox_types::{ElementId, OverlayElements, OverlayIds};
use shared::Thumbnail;
use std::collections::{BTreeMap, BTreeSet};

/// What the host rendered: addressable elements, and thumbnails grouped by
/// their container class in document order.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    elements: BTreeSet<ElementId>,
    groups: BTreeMap<String, Vec<(ElementId, Thumbnail)>>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<ElementId>) -> bool {
        self.elements.insert(id.into())
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains(id)
    }

    /// Adds the overlay region and both of its children.
    pub fn with_overlay(mut self, ids: &OverlayIds) -> Self {
        self.insert(ids.overlay.as_str());
        self.insert(ids.image.as_str());
        self.insert(ids.close_button.as_str());
        self
    }

    /// Renders a thumbnail inside a container of `class` and returns its id.
    pub fn push_thumbnail(&mut self, class: &str, thumbnail: Thumbnail) -> ElementId {
        let group = self.groups.entry(class.to_string()).or_default();
        let id = ElementId::new(format!("{class}-{}", group.len()));
        group.push((id.clone(), thumbnail));
        self.elements.insert(id.clone());
        id
    }

    pub fn thumbnails(&self, class: &str) -> Vec<(ElementId, Thumbnail)> {
        self.groups.get(class).cloned().unwrap_or_default()
    }

    pub fn thumbnail_count(&self, class: &str) -> usize {
        self.groups.get(class).map_or(0, Vec::len)
    }

    /// Resolves the overlay markup. The overlay counts as present only when
    /// the region, its image and its close button are all rendered.
    pub fn locate_overlay(&self, ids: &OverlayIds) -> Option<OverlayElements> {
        let elements = OverlayElements::from(ids);

        let present = self.contains(&elements.overlay)
            && self.contains(&elements.image)
            && self.contains(&elements.close_button);

        if present {
            Some(elements)
        } else {
            tracing::debug!("overlay '{}' not rendered on this surface", ids.overlay);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_complete_overlay() {
        let ids = OverlayIds::default();
        let surface = Surface::new().with_overlay(&ids);

        let elements = surface.locate_overlay(&ids);
        assert_eq!(elements, Some(OverlayElements::from(&ids)));
    }

    #[test]
    fn test_missing_overlay() {
        let ids = OverlayIds::default();
        assert_eq!(Surface::new().locate_overlay(&ids), None);
    }

    #[test]
    fn test_overlay_missing_close_button() {
        let ids = OverlayIds::default();
        let mut surface = Surface::new();
        surface.insert(ids.overlay.as_str());
        surface.insert(ids.image.as_str());

        assert_eq!(surface.locate_overlay(&ids), None);
    }

    #[test]
    fn test_thumbnails_keep_document_order() {
        let mut surface = Surface::new();
        let first = surface.push_thumbnail("chart-frame", Thumbnail::new("a.png"));
        let second = surface.push_thumbnail("chart-frame", Thumbnail::new("b.png"));
        surface.push_thumbnail("other", Thumbnail::new("c.png"));

        assert_eq!(first.as_str(), "chart-frame-0");
        assert_eq!(second.as_str(), "chart-frame-1");

        let thumbs = surface.thumbnails("chart-frame");
        assert_eq!(thumbs.len(), 2);
        assert_eq!(thumbs[0].1.src, "a.png");
        assert_eq!(thumbs[1].1.src, "b.png");
        assert!(surface.contains(&first));
        assert_eq!(surface.thumbnail_count("missing"), 0);
    }
}
