use i18n_embed::{
    DesktopLanguageRequester,
    fluent::{FluentLanguageLoader, fluent_language_loader},
};
use lightbox::LightboxLabels;
use once_cell::sync::Lazy;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "../../i18n"]
struct Localizations;

pub static LANGUAGE_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let loader: FluentLanguageLoader = fluent_language_loader!();
    let requested_languages = DesktopLanguageRequester::requested_languages();
    if let Err(e) = i18n_embed::select(&loader, &Localizations, &requested_languages) {
        tracing::warn!("falling back to built-in strings: {e}");
    }
    loader
});

#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::localize::LANGUAGE_LOADER, $message_id)
    }};
    ($message_id:literal, $($arg:tt)*) => {{
        i18n_embed_fl::fl!($crate::localize::LANGUAGE_LOADER, $message_id, $($arg)*)
    }};
}

/// Lightbox strings in the user's language.
pub fn lightbox_labels() -> LightboxLabels {
    LightboxLabels::default()
        .with_placeholder(crate::fl!("chart-placeholder"))
        .with_enlarge(crate::fl!("chart-enlarge"))
        .with_close(crate::fl!("chart-close"))
        .with_dialog(crate::fl!("chart-dialog"))
}
