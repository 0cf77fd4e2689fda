/*!
 * Tests for backend implementations
 */

use lingo_voice::backends::mock::{MockBackend, MockBehavior, MockLoader};
use lingo_voice::backends::nllb::{DEFAULT_MODEL, NllbLoader};
use lingo_voice::backends::{BackendLoader, TranslationBackend};
use lingo_voice::errors::BackendError;

/// Test the default deterministic translation of the working mock
#[tokio::test]
async fn test_mockBackend_working_shouldEchoWithCodes() {
    let backend = MockBackend::working();

    let result = backend
        .generate("Bonjour", "fra_Latn", "eng_Latn")
        .await
        .unwrap();

    assert!(result.contains("Bonjour"));
    assert!(result.contains("fra_Latn"));
    assert!(result.contains("eng_Latn"));
    assert_eq!(backend.model_id(), "mock-model");
}

/// Test that the empty mock returns an empty translation, not an error
#[tokio::test]
async fn test_mockBackend_empty_shouldReturnEmptyString() {
    let backend = MockBackend::empty();

    let result = backend.generate("Hello", "eng_Latn", "spa_Latn").await.unwrap();
    assert!(result.is_empty());
}

/// Test that the slow mock still completes
#[tokio::test]
async fn test_mockBackend_slow_shouldEventuallyRespond() {
    let backend = MockBackend::slow(10);

    let result = backend.generate("Hello", "eng_Latn", "spa_Latn").await.unwrap();
    assert!(result.contains("Hello"));
}

/// Test that the mock counts its requests
#[tokio::test]
async fn test_mockBackend_shouldCountRequests() {
    let backend = MockBackend::working();

    backend.generate("a", "eng_Latn", "spa_Latn").await.unwrap();
    backend.generate("b", "eng_Latn", "spa_Latn").await.unwrap();

    assert_eq!(backend.request_count(), 2);
}

/// Test loader failure modes and attempt counting
#[tokio::test]
async fn test_mockLoader_failureModes_shouldMatchConfiguration() {
    let always = MockLoader::working();
    assert!(always.load().await.is_ok());
    assert!(always.load().await.is_ok());

    let never = MockLoader::failing();
    let err = never.load().await.unwrap_err();
    assert!(matches!(err, BackendError::ModelUnavailable(_)));

    let once = MockLoader::working_then_failing(1);
    assert!(once.load().await.is_ok());
    assert!(once.load().await.is_err());
    assert!(once.load().await.is_err());
    assert_eq!(once.load_count(), 3);
}

/// Test that loader-configured behavior reaches the handed-out backend
#[tokio::test]
async fn test_mockLoader_backendBehavior_shouldPropagate() {
    let loader = MockLoader::with_backend_behavior(MockBehavior::Failing);
    let backend = loader.load().await.unwrap();

    let result = backend.generate("Hello", "eng_Latn", "spa_Latn").await;
    assert!(matches!(
        result,
        Err(BackendError::ApiError { status_code: 500, .. })
    ));
}

/// Test endpoint validation of the NLLB loader
#[test]
fn test_nllbLoader_endpointValidation() {
    assert!(NllbLoader::new("http://localhost:6060", DEFAULT_MODEL, 30).is_ok());
    assert!(NllbLoader::new("https://nllb.example.com/", DEFAULT_MODEL, 30).is_ok());

    assert!(NllbLoader::new("localhost:6060", DEFAULT_MODEL, 30).is_err());
    assert!(NllbLoader::new("unix:///tmp/nllb.sock", DEFAULT_MODEL, 30).is_err());
    assert!(NllbLoader::new("", DEFAULT_MODEL, 30).is_err());
}

/// Test that loading against an unreachable server reports a connection error
#[tokio::test]
async fn test_nllbLoader_withUnreachableServer_shouldFailToLoad() {
    // Port 9 (discard) is a safe dead endpoint for tests
    let loader = NllbLoader::new("http://127.0.0.1:9", DEFAULT_MODEL, 1).unwrap();

    let result = loader.load().await;
    assert!(matches!(result, Err(BackendError::ConnectionError(_))));
}
