pub mod gallery;
pub mod lightbox;

pub use gallery::{GalleryStatus, gallery_view};
pub use lightbox::lightbox_view;
