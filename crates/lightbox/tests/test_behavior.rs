#[cfg(test)]
mod tests {
    use lightbox::{
        Behavior, Document, ElementId, Key, KeyEvent, Lightbox, LightboxOptions, OverlayElements,
        OverlayIds, Thumbnail, ThumbnailId,
    };

    fn with_behavior(document: &std::rc::Rc<Document>, behavior: Behavior) -> Lightbox {
        Lightbox::new(
            document,
            Some(OverlayElements::from(&OverlayIds::default())),
            vec![(ElementId::from("chart-frame-0"), Thumbnail::new("a.png"))],
            LightboxOptions::default().with_behavior(behavior),
        )
    }

    #[test]
    fn test_escape_disabled_registers_no_listener() {
        let document = Document::new();
        let lightbox = with_behavior(
            &document,
            Behavior {
                close_on_escape: false,
                ..Behavior::default()
            },
        );

        assert_eq!(document.listener_count(), 0);
        assert!(!lightbox.is_listening());

        lightbox.open_at(ThumbnailId(0));
        document.dispatch_key(&mut KeyEvent::new(Key::Escape));
        assert!(lightbox.is_shown());
    }

    #[test]
    fn test_backdrop_disabled_keeps_overlay() {
        let document = Document::new();
        let lightbox = with_behavior(
            &document,
            Behavior {
                close_on_backdrop: false,
                ..Behavior::default()
            },
        );

        lightbox.open_at(ThumbnailId(0));
        lightbox.overlay_clicked(&ElementId::from("chartModal"));
        assert!(lightbox.is_shown());

        lightbox.close_clicked();
        assert!(!lightbox.is_shown());
    }

    #[test]
    fn test_custom_ids() {
        let ids = OverlayIds {
            overlay: "lightbox".into(),
            image: "lightbox-img".into(),
            close_button: "lightbox-close".into(),
            thumbnail_class: "thumb".into(),
        };
        let document = Document::new();
        let mut surface = lightbox::Surface::new().with_overlay(&ids);
        surface.push_thumbnail("thumb", Thumbnail::new("a.png"));
        surface.push_thumbnail("chart-frame", Thumbnail::new("ignored.png"));

        let lightbox = Lightbox::bind(&document, &surface, &ids, LightboxOptions::default());
        assert_eq!(lightbox.thumbnail_count(), 1);

        lightbox.open_at(ThumbnailId(0));
        assert!(document.is_focused(&ElementId::from("lightbox-close")));

        lightbox.overlay_clicked(&ElementId::from("lightbox"));
        assert!(!lightbox.is_shown());
    }
}
