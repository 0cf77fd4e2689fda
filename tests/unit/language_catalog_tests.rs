/*!
 * Tests for the language catalog
 */

use lingo_voice::errors::SessionError;
use lingo_voice::language_catalog::{
    DEFAULT_SOURCE_CODE, DEFAULT_TARGET_CODE, display_names, lookup, resolve_or, resolve_source,
    resolve_target, try_resolve,
};

/// Test that the supported name list is deterministic and complete
#[test]
fn test_displayNames_shouldBeDeterministicAcrossCalls() {
    let first: Vec<&str> = display_names().to_vec();
    let second: Vec<&str> = display_names().to_vec();

    assert_eq!(first, second);
    assert_eq!(first.len(), 20);
    // Selection defaults sit at the head of the list
    assert_eq!(first[0], "English");
    assert_eq!(first[1], "Spanish");
    assert_eq!(*first.last().unwrap(), "Norwegian");
}

/// Test that every supported name maps to a distinct, stable code
#[test]
fn test_lookup_withAllSupportedNames_shouldReturnDistinctCodes() {
    let mut codes = Vec::new();
    for name in display_names() {
        let code = lookup(name).expect("every listed name must resolve");
        // Same call, same result
        assert_eq!(lookup(name), Some(code));
        codes.push(code);
    }

    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), display_names().len());
}

/// Test specific well-known mappings
#[test]
fn test_lookup_withKnownNames_shouldReturnNllbCodes() {
    assert_eq!(lookup("English"), Some("eng_Latn"));
    assert_eq!(lookup("Spanish"), Some("spa_Latn"));
    assert_eq!(lookup("Chinese (Simplified)"), Some("zho_Hans"));
    assert_eq!(lookup("Chinese (Traditional)"), Some("zho_Hant"));
    assert_eq!(lookup("Arabic"), Some("arb_Arab"));
    assert_eq!(lookup("Russian"), Some("rus_Cyrl"));
}

/// Regression test for the silent-fallback behavior: unknown names resolve
/// to the configured defaults instead of failing
#[test]
fn test_resolve_withUnrecognizedName_shouldReturnConfiguredDefault() {
    assert_eq!(resolve_source("Esperanto"), DEFAULT_SOURCE_CODE);
    assert_eq!(resolve_target("Esperanto"), DEFAULT_TARGET_CODE);

    // Matching is exact: case and whitespace differences fall back too
    assert_eq!(resolve_source("english"), DEFAULT_SOURCE_CODE);
    assert_eq!(resolve_target(" Spanish "), DEFAULT_TARGET_CODE);

    // The generic resolver honors whatever fallback it is given
    assert_eq!(resolve_or("Esperanto", "fra_Latn"), "fra_Latn");
    assert_eq!(resolve_or("French", "eng_Latn"), "fra_Latn");
}

/// Test that known names resolve to their own code, not the default
#[test]
fn test_resolve_withKnownName_shouldNotFallBack() {
    assert_eq!(resolve_source("Japanese"), "jpn_Jpan");
    assert_eq!(resolve_target("Japanese"), "jpn_Jpan");
}

/// Test the strict-validation variant
#[test]
fn test_tryResolve_shouldFailOnUnknownAndSucceedOnKnown() {
    assert_eq!(try_resolve("Korean").unwrap(), "kor_Hang");

    let err = try_resolve("Esperanto").unwrap_err();
    assert!(matches!(err, SessionError::UnsupportedLanguage(ref name) if name == "Esperanto"));
    assert!(err.to_string().contains("Esperanto"));
}
