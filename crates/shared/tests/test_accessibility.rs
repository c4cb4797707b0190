#[cfg(test)]
mod tests {
    use shared::accessibility::{AccessibilityInfo, AriaRole};
    use shared::labels::LightboxLabels;
    use shared::thumbnail::Thumbnail;

    #[test]
    fn test_thumbnail_button_from_labels() {
        let labels = LightboxLabels::default();
        let info = AccessibilityInfo::button().with_label(&labels.enlarge);

        assert_eq!(info.role, AriaRole::Button);
        assert_eq!(info.label.as_deref(), Some("Enlarge chart"));
        assert!(info.is_focusable());
    }

    #[test]
    fn test_localized_labels() {
        let labels = LightboxLabels::default()
            .with_placeholder("Wykres")
            .with_enlarge("Powiększ wykres");

        let info = AccessibilityInfo::button().with_label(&labels.enlarge);
        let attrs = info.generate_aria_attributes();

        assert!(attrs.contains("aria-label=\"Powiększ wykres\""));
        assert_eq!(labels.placeholder_description, "Wykres");
    }

    #[test]
    fn test_image_description_falls_back_to_placeholder() {
        let labels = LightboxLabels::default();
        let thumb = Thumbnail::new("/charts/ranking.png");

        let info = AccessibilityInfo::image()
            .with_label(thumb.description_or(&labels.placeholder_description));

        assert_eq!(info.get_aria_label(), "Chart");
    }

    #[test]
    fn test_image_keeps_own_description() {
        let labels = LightboxLabels::default();
        let thumb = Thumbnail::new("/charts/revenue.png").with_description("Revenue");

        let info = AccessibilityInfo::image()
            .with_label(thumb.description_or(&labels.placeholder_description));

        assert_eq!(info.get_aria_label(), "Revenue");
    }
}
