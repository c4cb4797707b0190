pub mod types;

pub use types::{Behavior, ElementId, Key, KeyEvent, OverlayElements, OverlayIds};

pub use shared::{LightboxLabels, Thumbnail};
