use serde::{Deserialize, Serialize};

/// User-facing strings the lightbox needs. The host fills these from its
/// localization bundle, the defaults are English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightboxLabels {
    /// Overlay description used when a thumbnail has none.
    pub placeholder_description: String,
    /// Accessible name announced for every thumbnail.
    pub enlarge: String,
    pub close: String,
    pub dialog: String,
}

impl Default for LightboxLabels {
    fn default() -> Self {
        Self {
            placeholder_description: "Chart".to_string(),
            enlarge: "Enlarge chart".to_string(),
            close: "Close".to_string(),
            dialog: "Enlarged chart".to_string(),
        }
    }
}

impl LightboxLabels {
    pub fn with_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder_description = placeholder.into();
        self
    }

    pub fn with_enlarge<S: Into<String>>(mut self, enlarge: S) -> Self {
        self.enlarge = enlarge.into();
        self
    }

    pub fn with_close<S: Into<String>>(mut self, close: S) -> Self {
        self.close = close.into();
        self
    }

    pub fn with_dialog<S: Into<String>>(mut self, dialog: S) -> Self {
        self.dialog = dialog.into();
        self
    }
}
