#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure the CSS selectors the dashboard components emit remain present in the
  shared theme (ui/assets/theme/main.css).
- Fail fast if a refactor drops or renames a class, since packaged desktop builds
  embed the theme and would silently lose styling.

If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Header + selector
    ".dashboard__header",
    ".dashboard__title",
    ".dashboard__description",
    ".range-selector",
    ".range-selector__label",
    ".range-selector__select",
    // Sections
    ".metric-section",
    ".metric-section__header",
    ".metric-section__goal",
    ".metric-section__total",
    // Summary cards
    ".summary-cards",
    ".summary-cards--quad",
    ".summary-cards--wide",
    ".summary-card__heading",
    ".summary-card__body",
    ".summary-card__value",
    ".summary-card__divider",
    // Charts
    ".chart-card",
    ".chart__title",
    ".chart__grid",
    ".chart__value",
    ".chart__legend-label",
    ".chart__slice-label",
    ".chart__empty",
    // Raw data panel
    ".raw-data",
    ".raw-data__body",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn summary_card_block_consistency() {
    // Cards render a value cell and a caption cell side by side.
    let has_cell = THEME_CSS.contains(".summary-card__cell");
    let has_caption = THEME_CSS.contains(".summary-card__caption");
    assert!(
        has_cell && has_caption,
        "Summary card sub‑selectors missing (cell: {has_cell}, caption: {has_caption})"
    );
}
