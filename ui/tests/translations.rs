//! Translation lint for `hygiene-ui`.
//!
//! Checks, per locale under `i18n/`:
//! - the file defines every message the fallback (en-US) defines, and no extras
//! - no message ID is defined twice
//! - each message uses the same `{ $variable }` placeables as the fallback
//!
//! and, across the crate sources, that every `t!("...")` key exists in the
//! fallback. `fl!` already rejects unknown keys at compile time for the
//! fallback; this test covers the other locales and stray keys.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "hygiene-ui.ftl";
const FALLBACK: &str = "en-US";

type Messages = BTreeMap<String, BTreeSet<String>>;

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn is_message_id(id: &str) -> bool {
    !id.is_empty()
        && id.starts_with(|c: char| c.is_ascii_lowercase())
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Variables referenced in a message value (`{ $name }` → `name`).
fn placeables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .filter_map(|rest| {
            let name: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

/// Parse message IDs and their placeables; duplicates are reported in `Err`.
fn parse_ftl(src: &str) -> Result<Messages, Vec<String>> {
    let mut messages = Messages::new();
    let mut duplicates = Vec::new();
    for line in src.lines() {
        if line.starts_with([' ', '\t', '#', '.', '-']) {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if !is_message_id(id) {
            continue;
        }
        if messages.insert(id.to_string(), placeables(value)).is_some() {
            duplicates.push(id.to_string());
        }
    }
    if duplicates.is_empty() {
        Ok(messages)
    } else {
        Err(duplicates)
    }
}

fn load_locale(locale: &str) -> Messages {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    let src = fs::read_to_string(&path).unwrap_or_else(|err| panic!("reading {path:?}: {err}"));
    parse_ftl(&src).unwrap_or_else(|dups| panic!("{locale}: duplicate message IDs {dups:?}"))
}

fn locales() -> Vec<String> {
    let mut out: Vec<String> = fs::read_dir(crate_root().join("i18n"))
        .expect("i18n directory")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    out.sort();
    out
}

/// Literal keys passed to `t!(...)` in every `.rs` file below `dir`.
fn referenced_keys(dir: &Path, found: &mut BTreeSet<String>) {
    for entry in fs::read_dir(dir).expect("readable source dir").flatten() {
        let path = entry.path();
        if path.is_dir() {
            referenced_keys(&path, found);
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        let src = fs::read_to_string(&path).unwrap_or_default();
        for (at, _) in src.match_indices("t!(") {
            // skip `format!(`, `assert!(` and friends
            let prev = src[..at].chars().next_back();
            if prev.is_some_and(|c| c.is_alphanumeric() || c == '_') {
                continue;
            }
            let rest = src[at + 3..].trim_start();
            let Some(rest) = rest.strip_prefix('"') else {
                continue;
            };
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if is_message_id(key) {
                    found.insert(key.to_string());
                }
            }
        }
    }
}

#[test]
fn fallback_and_translations_are_present() {
    let all = locales();
    assert!(all.iter().any(|l| l == FALLBACK), "missing {FALLBACK} locale");
    assert!(all.len() > 1, "expected at least one translation besides {FALLBACK}");
    assert!(!load_locale(FALLBACK).is_empty());
}

#[test]
fn every_locale_matches_the_fallback() {
    let fallback = load_locale(FALLBACK);
    let mut report = Vec::new();

    for locale in locales().into_iter().filter(|l| l != FALLBACK) {
        let messages = load_locale(&locale);
        for (id, vars) in &fallback {
            match messages.get(id) {
                None => report.push(format!("{locale}: missing `{id}`")),
                Some(theirs) if theirs != vars => report.push(format!(
                    "{locale}: `{id}` uses {theirs:?}, fallback uses {vars:?}"
                )),
                Some(_) => {}
            }
        }
        for id in messages.keys().filter(|id| !fallback.contains_key(*id)) {
            report.push(format!("{locale}: `{id}` not in fallback"));
        }
    }

    assert!(report.is_empty(), "translation drift:\n{}", report.join("\n"));
}

#[test]
fn source_keys_exist_in_fallback() {
    let fallback = load_locale(FALLBACK);
    let mut used = BTreeSet::new();
    referenced_keys(&crate_root().join("src"), &mut used);

    assert!(used.contains("page-title"), "key scan found nothing: {used:?}");
    assert!(used.contains("section-group-total"), "multi-line t! call not scanned");

    let missing: Vec<_> = used.iter().filter(|k| !fallback.contains_key(*k)).collect();
    assert!(missing.is_empty(), "keys used in src but not in {FALLBACK}: {missing:?}");
}

#[test]
fn parser_reports_duplicates_and_placeables() {
    let src = "# comment\na = One { $n }\n    continued\nb = Two\na = Again\n";
    assert_eq!(parse_ftl(src).unwrap_err(), vec!["a".to_string()]);

    let parsed = parse_ftl("x = { $name } and { $count }\n").unwrap();
    let vars: Vec<_> = parsed["x"].iter().cloned().collect();
    assert_eq!(vars, ["count", "name"]);
}
