use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedImage {
    pub src: String,
    pub description: String,
}

/// Visibility and content of the overlay. An image is displayed exactly when
/// the overlay is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Shown(DisplayedImage),
}

impl OverlayState {
    pub fn is_shown(&self) -> bool {
        matches!(self, OverlayState::Shown(_))
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, OverlayState::Hidden)
    }

    pub fn image(&self) -> Option<&DisplayedImage> {
        match self {
            OverlayState::Shown(image) => Some(image),
            OverlayState::Hidden => None,
        }
    }

    /// Source of the displayed image, empty while hidden.
    pub fn source(&self) -> &str {
        self.image().map_or("", |image| image.src.as_str())
    }

    pub fn description(&self) -> &str {
        self.image().map_or("", |image| image.description.as_str())
    }

    pub fn transition_to_shown<S, D>(self, src: S, description: D) -> Self
    where
        S: Into<String>,
        D: Into<String>,
    {
        Self::Shown(DisplayedImage {
            src: src.into(),
            description: description.into(),
        })
    }

    pub fn transition_to_hidden(self) -> Self {
        Self::Hidden
    }
}

impl fmt::Display for OverlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayState::Hidden => write!(f, "Hidden"),
            OverlayState::Shown(image) => write!(f, "Shown: {}", image.src),
        }
    }
}
