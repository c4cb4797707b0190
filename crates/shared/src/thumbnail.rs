use serde::{Deserialize, Serialize};

/// A chart preview the user can enlarge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Thumbnail {
    pub src: String,
    pub description: Option<String>,
}

impl Thumbnail {
    pub fn new<S: Into<String>>(src: S) -> Self {
        Self {
            src: src.into(),
            description: None,
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn has_source(&self) -> bool {
        !self.src.trim().is_empty()
    }

    /// Description text, treating blank strings as absent.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    pub fn description_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.description().unwrap_or(placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_presence() {
        assert!(Thumbnail::new("a.png").has_source());
        assert!(!Thumbnail::new("").has_source());
        assert!(!Thumbnail::new("   ").has_source());
    }

    #[test]
    fn test_blank_description_is_absent() {
        let thumb = Thumbnail::new("a.png").with_description("  ");
        assert_eq!(thumb.description(), None);
        assert_eq!(thumb.description_or("Chart"), "Chart");
    }

    #[test]
    fn test_description_is_trimmed() {
        let thumb = Thumbnail::new("a.png").with_description(" Revenue ");
        assert_eq!(thumb.description(), Some("Revenue"));
    }
}
