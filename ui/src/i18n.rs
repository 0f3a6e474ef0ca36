//! Internationalization (i18n) support for `hygiene-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/hygiene-ui.ftl   (fallback/reference)
//!   es-ES/hygiene-ui.ftl
//!   fr-FR/hygiene-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let heading = t!("section-corrections-title");
//! let card = t!("card-appends", name = "Email");
//! ```
//!
//! Category names (`Email`, `NCOA`, …) are data and are never translated;
//! only the surrounding UI copy lives in the FTL files.
use std::sync::Once;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("page-title")
///     t!("card-appends", name = "Email")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "hygiene-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
        disable_isolation();
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    disable_isolation();
    Ok(())
}

/// Interpolated category names go straight into SVG/HTML text, so no bidi
/// isolation marks. Applies to loaded bundles only; call after every select.
fn disable_isolation() {
    LOADER.set_use_isolating(false);
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Active language code from the root's shared `Signal<String>`, or the
/// fallback when no root provides one.
///
/// Reading the signal subscribes the calling component, so its `t!` lookups
/// re-run after a switch even when its props are unchanged.
pub fn use_language() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code.read().clone())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == FALLBACK_LANGUAGE));
        assert_eq!(langs, ["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn unparseable_tag_is_ignored() {
        assert!(set_language("not a language tag!").is_ok());
    }

    #[test]
    fn arguments_are_interpolated_without_isolation_marks() {
        let loader = FluentLanguageLoader::new(DOMAIN, FALLBACK_LANGUAGE.parse().unwrap());
        let en: LanguageIdentifier = FALLBACK_LANGUAGE.parse().unwrap();
        i18n_embed::select(&loader, &Localizations, &[en]).unwrap();
        loader.set_use_isolating(false);
        assert_eq!(fl!(loader, "card-appends", name = "Email"), "Email Appends");
        assert_eq!(fl!(loader, "nav-brand"), "Hygiene Summary");
    }
}
