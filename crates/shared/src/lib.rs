pub mod accessibility;
pub mod labels;
pub mod thumbnail;

pub use accessibility::{AccessibilityInfo, AriaRole};
pub use labels::LightboxLabels;
pub use thumbnail::Thumbnail;
