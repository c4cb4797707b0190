//! Fullscreen lightbox for chart thumbnails.
//!
//! The controller is toolkit independent: the host renders a [`Surface`],
//! owns a [`Document`], and forwards pointer and key events to [`Lightbox`].

pub mod controller;
pub mod document;
pub mod overlay;
pub mod surface;

pub use controller::{Lightbox, LightboxOptions, ThumbnailId};
pub use document::{Document, KeySubscription};
pub use overlay::{DisplayedImage, OverlayState};
pub use surface::Surface;

pub use lightbox_types::{Behavior, ElementId, Key, KeyEvent, OverlayElements, OverlayIds};
pub use shared::{AccessibilityInfo, LightboxLabels, Thumbnail};
