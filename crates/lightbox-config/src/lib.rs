use cosmic::cosmic_config::{self, Config, ConfigGet, ConfigSet, CosmicConfigEntry};
use lightbox_types::{Behavior, OverlayIds};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;

pub const CONFIG_VERSION: u64 = 1;
pub const APP_ID: &str = "org.codeberg.bhh32.ChartLightbox";

/// Every key a [`LightboxConfig`] is stored under.
const ENTRY_KEYS: [&str; 11] = [
    "app_theme",
    "overlay_id",
    "image_id",
    "close_button_id",
    "thumbnail_class",
    "close_on_backdrop",
    "close_on_escape",
    "lock_scroll",
    "thumbnail_size",
    "charts_dir",
    "show_hidden_files",
];

/// Where stored entry values are read from.
trait EntrySource {
    fn read<T: DeserializeOwned + Clone + 'static>(
        &self,
        key: &str,
    ) -> Result<T, cosmic_config::Error>;
}

impl EntrySource for Config {
    fn read<T: DeserializeOwned + Clone + 'static>(
        &self,
        key: &str,
    ) -> Result<T, cosmic_config::Error> {
        self.get::<T>(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThumbnailSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl ThumbnailSize {
    pub const ALL: &'static [Self] = &[Self::Small, Self::Medium, Self::Large, Self::XLarge];

    pub fn pixels(self) -> u32 {
        match self {
            ThumbnailSize::Small => 96,
            ThumbnailSize::Medium => 160,
            ThumbnailSize::Large => 240,
            ThumbnailSize::XLarge => 320,
        }
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThumbnailSize::Small => write!(f, "Small"),
            ThumbnailSize::Medium => write!(f, "Medium"),
            ThumbnailSize::Large => write!(f, "Large"),
            ThumbnailSize::XLarge => write!(f, "Extra Large"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AppTheme {
    #[default]
    System,
    Dark,
    Light,
}

impl AppTheme {
    pub const ALL: &'static [Self] = &[Self::System, Self::Dark, Self::Light];

    pub fn to_cosmic_theme(self) -> cosmic::Theme {
        match self {
            AppTheme::System => cosmic::theme::system_preference(),
            AppTheme::Dark => cosmic::Theme::dark(),
            AppTheme::Light => cosmic::Theme::light(),
        }
    }
}

impl fmt::Display for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppTheme::System => write!(f, "System"),
            AppTheme::Dark => write!(f, "Dark"),
            AppTheme::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightboxConfig {
    pub app_theme: AppTheme,
    /// Id of the overlay region
    pub overlay_id: String,
    /// Id of the enlarged image inside the overlay
    pub image_id: String,
    /// Id of the overlay's close button
    pub close_button_id: String,
    /// Container class grouping the chart thumbnails
    pub thumbnail_class: String,
    pub close_on_backdrop: bool,
    pub close_on_escape: bool,
    pub lock_scroll: bool,
    pub thumbnail_size: ThumbnailSize,
    /// Directory the chart images are read from
    pub charts_dir: Option<String>,
    pub show_hidden_files: bool,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        let ids = OverlayIds::default();
        let behavior = Behavior::default();

        Self {
            app_theme: AppTheme::default(),
            overlay_id: ids.overlay,
            image_id: ids.image,
            close_button_id: ids.close_button,
            thumbnail_class: ids.thumbnail_class,
            close_on_backdrop: behavior.close_on_backdrop,
            close_on_escape: behavior.close_on_escape,
            lock_scroll: behavior.lock_scroll,
            thumbnail_size: ThumbnailSize::default(),
            charts_dir: None,
            show_hidden_files: false,
        }
    }
}

impl LightboxConfig {
    pub fn overlay_ids(&self) -> OverlayIds {
        OverlayIds {
            overlay: self.overlay_id.clone(),
            image: self.image_id.clone(),
            close_button: self.close_button_id.clone(),
            thumbnail_class: self.thumbnail_class.clone(),
        }
    }

    pub fn behavior(&self) -> Behavior {
        Behavior {
            close_on_backdrop: self.close_on_backdrop,
            close_on_escape: self.close_on_escape,
            lock_scroll: self.lock_scroll,
        }
    }

    /// Reloads the field stored under `key`, returning its name on success.
    /// Unknown keys yield `None`.
    fn load_key(
        &mut self,
        source: &impl EntrySource,
        key: &str,
    ) -> Option<Result<&'static str, cosmic_config::Error>> {
        macro_rules! load_field {
            ($name:literal, $field:ident, $type:ty) => {
                source.read::<$type>($name).map(|val| {
                    self.$field = val;
                    $name
                })
            };
        }

        let loaded = match key {
            "app_theme" => load_field!("app_theme", app_theme, AppTheme),
            "overlay_id" => load_field!("overlay_id", overlay_id, String),
            "image_id" => load_field!("image_id", image_id, String),
            "close_button_id" => load_field!("close_button_id", close_button_id, String),
            "thumbnail_class" => load_field!("thumbnail_class", thumbnail_class, String),
            "close_on_backdrop" => load_field!("close_on_backdrop", close_on_backdrop, bool),
            "close_on_escape" => load_field!("close_on_escape", close_on_escape, bool),
            "lock_scroll" => load_field!("lock_scroll", lock_scroll, bool),
            "thumbnail_size" => load_field!("thumbnail_size", thumbnail_size, ThumbnailSize),
            "charts_dir" => load_field!("charts_dir", charts_dir, Option<String>),
            "show_hidden_files" => load_field!("show_hidden_files", show_hidden_files, bool),
            _ => return None,
        };

        Some(loaded)
    }
}

impl CosmicConfigEntry for LightboxConfig {
    const VERSION: u64 = CONFIG_VERSION;

    fn write_entry(&self, config: &cosmic_config::Config) -> Result<(), cosmic_config::Error> {
        config.set("app_theme", self.app_theme)?;
        config.set("overlay_id", self.overlay_id.clone())?;
        config.set("image_id", self.image_id.clone())?;
        config.set("close_button_id", self.close_button_id.clone())?;
        config.set("thumbnail_class", self.thumbnail_class.clone())?;
        config.set("close_on_backdrop", self.close_on_backdrop)?;
        config.set("close_on_escape", self.close_on_escape)?;
        config.set("lock_scroll", self.lock_scroll)?;
        config.set("thumbnail_size", self.thumbnail_size)?;
        config.set("charts_dir", self.charts_dir.clone())?;
        config.set("show_hidden_files", self.show_hidden_files)?;
        Ok(())
    }

    fn get_entry(
        config: &cosmic_config::Config,
    ) -> Result<Self, (Vec<cosmic_config::Error>, Self)> {
        let mut errors = Vec::new();
        let mut cfg = LightboxConfig::default();

        for key in ENTRY_KEYS {
            if let Some(Err(e)) = cfg.load_key(config, key) {
                errors.push(e);
            }
        }

        if errors.is_empty() {
            Ok(cfg)
        } else {
            Err((errors, cfg))
        }
    }

    fn update_keys<T: AsRef<str>>(
        &mut self,
        config: &cosmic_config::Config,
        changed_keys: &[T],
    ) -> (Vec<cosmic_config::Error>, Vec<&'static str>) {
        let mut errors = Vec::new();
        let mut updated = Vec::new();

        for key in changed_keys {
            match self.load_key(config, key.as_ref()) {
                Some(Ok(name)) => updated.push(name),
                Some(Err(e)) => errors.push(e),
                None => {}
            }
        }

        (errors, updated)
    }
}

pub fn config() -> Result<Config, cosmic_config::Error> {
    Config::new(APP_ID, CONFIG_VERSION)
}
