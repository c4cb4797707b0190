use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AriaRole {
    #[default]
    Image,
    Button,
    Dialog,
}

impl AriaRole {
    pub fn as_str(self) -> &'static str {
        match self {
            AriaRole::Image => "img",
            AriaRole::Button => "button",
            AriaRole::Dialog => "dialog",
        }
    }
}

/// Accessibility attributes attached to a rendered element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccessibilityInfo {
    pub role: AriaRole,
    pub label: Option<String>,
    pub description: Option<String>,
    /// `Some(0)` puts the element in the natural tab order, negative values
    /// make it focusable only programmatically.
    pub tab_index: Option<i32>,
    pub modal: bool,
    pub hidden: bool,
    pub properties: BTreeMap<String, String>,
}

impl AccessibilityInfo {
    pub fn new(role: AriaRole) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    pub fn image() -> Self {
        Self::new(AriaRole::Image)
    }

    /// An element that activates on click, Enter or Space and sits in the tab order.
    pub fn button() -> Self {
        Self::new(AriaRole::Button).focusable()
    }

    pub fn dialog() -> Self {
        Self::new(AriaRole::Dialog).make_modal()
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    pub fn focusable(self) -> Self {
        self.with_tab_index(0)
    }

    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }

    pub fn make_modal(mut self) -> Self {
        self.modal = true;
        self
    }

    pub fn make_hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn is_focusable(&self) -> bool {
        !self.hidden && self.tab_index.is_some_and(|idx| idx >= 0)
    }

    /// Renders the attributes in markup order: role, tabindex, then `aria-*`.
    pub fn generate_aria_attributes(&self) -> String {
        let mut attrs = vec![format!("role=\"{}\"", self.role.as_str())];

        if let Some(tab_index) = self.tab_index {
            attrs.push(format!("tabindex=\"{tab_index}\""));
        }

        if let Some(ref label) = self.label {
            attrs.push(format!("aria-label=\"{}\"", escape_attr(label)));
        }

        if let Some(ref description) = self.description {
            attrs.push(format!("aria-description=\"{}\"", escape_attr(description)));
        }

        if self.modal {
            attrs.push("aria-modal=\"true\"".to_string());
        }

        if self.hidden {
            attrs.push("aria-hidden=\"true\"".to_string());
        }

        for (key, value) in &self.properties {
            attrs.push(format!("aria-{}=\"{}\"", key, escape_attr(value)));
        }

        attrs.join(" ")
    }

    pub fn get_aria_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.get_default_label().to_string())
    }

    fn get_default_label(&self) -> &'static str {
        match self.role {
            AriaRole::Image => "Image",
            AriaRole::Button => "Button",
            AriaRole::Dialog => "Dialog",
        }
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_is_focusable() {
        let info = AccessibilityInfo::button().with_label("Enlarge chart");
        assert_eq!(info.role, AriaRole::Button);
        assert_eq!(info.tab_index, Some(0));
        assert!(info.is_focusable());
    }

    #[test]
    fn test_hidden_is_not_focusable() {
        let info = AccessibilityInfo::button().make_hidden();
        assert!(!info.is_focusable());

        let negative = AccessibilityInfo::new(AriaRole::Button).with_tab_index(-1);
        assert!(!negative.is_focusable());
    }

    #[test]
    fn test_attribute_order() {
        let attrs = AccessibilityInfo::button()
            .with_label("Enlarge chart")
            .generate_aria_attributes();
        assert_eq!(
            attrs,
            "role=\"button\" tabindex=\"0\" aria-label=\"Enlarge chart\""
        );
    }

    #[test]
    fn test_dialog_is_modal() {
        let attrs = AccessibilityInfo::dialog().generate_aria_attributes();
        assert!(attrs.contains("role=\"dialog\""));
        assert!(attrs.contains("aria-modal=\"true\""));
    }

    #[test]
    fn test_label_escaping() {
        let attrs = AccessibilityInfo::image()
            .with_label("Revenue \"Q3\"")
            .generate_aria_attributes();
        assert!(attrs.contains("aria-label=\"Revenue &quot;Q3&quot;\""));
    }

    #[test]
    fn test_default_label() {
        assert_eq!(AccessibilityInfo::dialog().get_aria_label(), "Dialog");
        assert_eq!(
            AccessibilityInfo::image().with_label("Map").get_aria_label(),
            "Map"
        );
    }
}
