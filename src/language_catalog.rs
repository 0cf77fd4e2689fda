use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::errors::SessionError;

/// Language catalog for NLLB display-name/code handling
///
/// This module owns the fixed mapping between human-readable language
/// names and the NLLB-200 language codes (`<lang>_<Script>`) the backend
/// expects, and enumerates the selectable languages in a stable order.
/// Default code substituted for an unrecognized source language
pub const DEFAULT_SOURCE_CODE: &str = "eng_Latn";

/// Default code substituted for an unrecognized target language
pub const DEFAULT_TARGET_CODE: &str = "spa_Latn";

/// Supported languages in display order
///
/// Declaration order is significant: `display_names` feeds selection
/// surfaces and must stay deterministic.
const LANGUAGES: &[(&str, &str)] = &[
    ("English", "eng_Latn"),
    ("Spanish", "spa_Latn"),
    ("French", "fra_Latn"),
    ("German", "deu_Latn"),
    ("Chinese (Simplified)", "zho_Hans"),
    ("Chinese (Traditional)", "zho_Hant"),
    ("Japanese", "jpn_Jpan"),
    ("Korean", "kor_Hang"),
    ("Arabic", "arb_Arab"),
    ("Hindi", "hin_Deva"),
    ("Portuguese", "por_Latn"),
    ("Russian", "rus_Cyrl"),
    ("Italian", "ita_Latn"),
    ("Dutch", "nld_Latn"),
    ("Turkish", "tur_Latn"),
    ("Vietnamese", "vie_Latn"),
    ("Thai", "tha_Thai"),
    ("Polish", "pol_Latn"),
    ("Swedish", "swe_Latn"),
    ("Norwegian", "nno_Latn"),
];

static CODE_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LANGUAGES.iter().copied().collect());

static DISPLAY_NAMES: Lazy<Vec<&'static str>> =
    Lazy::new(|| LANGUAGES.iter().map(|(name, _)| *name).collect());

/// Get the supported display names in their fixed declaration order
pub fn display_names() -> &'static [&'static str] {
    &DISPLAY_NAMES
}

/// Look up the NLLB code for a display name
pub fn lookup(name: &str) -> Option<&'static str> {
    CODE_INDEX.get(name).copied()
}

/// Resolve a display name to its NLLB code, substituting a fallback code
/// when the name is not in the catalog
///
/// This preserves the silent-fallback behavior of the original interface:
/// an unrecognized or mistyped language name quietly becomes the default
/// instead of failing. All fallback resolution goes through this one
/// function so callers can be switched to [`try_resolve`] without other
/// changes.
pub fn resolve_or(name: &str, fallback: &'static str) -> &'static str {
    lookup(name).unwrap_or(fallback)
}

/// Resolve a source-language display name, defaulting to English
pub fn resolve_source(name: &str) -> &'static str {
    resolve_or(name, DEFAULT_SOURCE_CODE)
}

/// Resolve a target-language display name, defaulting to Spanish
pub fn resolve_target(name: &str) -> &'static str {
    resolve_or(name, DEFAULT_TARGET_CODE)
}

/// Strict variant of name resolution
///
/// Fails with [`SessionError::UnsupportedLanguage`] instead of
/// substituting a default. Used wherever an unknown name should be
/// reported rather than papered over (configuration validation).
pub fn try_resolve(name: &str) -> Result<&'static str, SessionError> {
    lookup(name).ok_or_else(|| SessionError::UnsupportedLanguage(name.to_string()))
}
