use chart_source::ChartEntry;
use lightbox_config::{AppTheme, ThumbnailSize};
use lightbox_types::{ElementId, Key};
use std::{path::PathBuf, sync::Arc};

pub use crate::key_binds::MenuAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextPage {
    About,
    Settings,
}

#[derive(Debug, Clone)]
pub enum Message {
    Lightbox(LightboxMessage),
    Gallery(GalleryMessage),
    Settings(SettingsMessage),
    KeyBind(MenuAction),
    ToggleContextPage(ContextPage),
    OpenFolderDialog,
    FolderSelected(PathBuf),
    Cancelled,
    Rescan,
    ChartsScanned {
        dir: PathBuf,
        result: Result<Vec<ChartEntry>, Arc<String>>,
    },
    WatcherEvent(crate::watcher::WatcherEvent),
    WindowResized {
        width: f32,
    },
    Quit,
    Surface(cosmic::surface::Action),
}

/// Pointer and key input aimed at the lightbox.
#[derive(Debug, Clone)]
pub enum LightboxMessage {
    ThumbnailPressed(usize),
    ClosePressed,
    /// Press inside the overlay. Carries the element that was hit: the
    /// overlay region itself for the backdrop, the image for the content.
    OverlayPressed(ElementId),
    KeyPressed(Key),
}

#[derive(Debug, Clone, Copy)]
pub enum GalleryMessage {
    FocusNext,
    FocusPrev,
    FocusUp,
    FocusDown,
    FocusFirst,
    FocusLast,
}

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    AppTheme(AppTheme),
    ThumbnailSize(ThumbnailSize),
    CloseOnBackdrop(bool),
    CloseOnEscape(bool),
    LockScroll(bool),
    ShowHiddenFiles(bool),
}
