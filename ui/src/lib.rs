//! Shared UI crate for the Hygiene Summary dashboard. The data model, the
//! projection and every view live here; platform crates only launch it.

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized brand header + locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

use dioxus::prelude::*;

/// Shared theme stylesheet (linked by the web launcher, inlined by desktop).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
