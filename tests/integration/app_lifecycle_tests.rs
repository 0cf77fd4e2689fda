/*!
 * Full app lifecycle tests
 *
 * These drive the chat controller through its command dispatcher, the
 * same path the interactive loop takes for each line of input.
 */

use lingo_voice::app_config::Config;
use lingo_voice::app_controller::Controller;
use lingo_voice::backends::mock::MockLoader;
use lingo_voice::session::{BackendState, TranslationSession};

use crate::common;

fn controller_with_loader(loader: MockLoader) -> Controller {
    let session = TranslationSession::new(Box::new(loader));
    Controller::new(Config::default(), session)
}

/// Test that a new controller picks up the configured language pair
#[test]
fn test_controller_new_shouldUseConfiguredLanguages() {
    let controller = controller_with_loader(MockLoader::working());

    assert!(controller.is_initialized());
    assert_eq!(controller.language_pair(), ("English", "Spanish"));
    assert_eq!(controller.session().state(), BackendState::Unloaded);
}

/// Test the load command transitions the session to loaded
#[tokio::test]
async fn test_dispatch_loadCommand_shouldLoadBackend() {
    let mut controller = controller_with_loader(MockLoader::working());

    let keep_going = controller.dispatch("/load").await.unwrap();

    assert!(keep_going);
    assert!(controller.session().is_loaded());
}

/// Test that a failed load surfaces without crashing the loop
#[tokio::test]
async fn test_dispatch_loadFailure_shouldKeepRunning() {
    let mut controller = controller_with_loader(MockLoader::failing());

    let keep_going = controller.dispatch("/load").await.unwrap();

    assert!(keep_going);
    assert!(!controller.session().is_loaded());
}

/// Test a full conversation: load, select languages, translate, clear
#[tokio::test]
async fn test_dispatch_fullConversation_shouldMaintainState() {
    let mut controller = controller_with_loader(
        MockLoader::working().with_custom_response(|text, _, target| {
            format!("{}:{}", target, text)
        }),
    );

    controller.dispatch("/load").await.unwrap();
    controller.dispatch("/source French").await.unwrap();
    controller.dispatch("/target German").await.unwrap();
    assert_eq!(controller.language_pair(), ("French", "German"));

    controller.dispatch("Bonjour").await.unwrap();
    assert_eq!(controller.session().history().len(), 1);
    let exchange = &controller.session().history()[0];
    assert_eq!(exchange.source_lang, "French");
    assert_eq!(exchange.target_lang, "German");
    assert_eq!(exchange.original_text, "Bonjour");
    assert_eq!(exchange.translated_text, "deu_Latn:Bonjour");

    controller.dispatch("/clear").await.unwrap();
    assert!(controller.session().history().is_empty());
    assert!(controller.session().is_loaded());
}

/// Test that language selection rejects unknown names
#[tokio::test]
async fn test_dispatch_unknownLanguageSelection_shouldKeepCurrentPair() {
    let mut controller = controller_with_loader(MockLoader::working());

    controller.dispatch("/source Klingon").await.unwrap();
    controller.dispatch("/target Klingon").await.unwrap();

    assert_eq!(controller.language_pair(), ("English", "Spanish"));
}

/// Test that translating before loading leaves the transcript empty
#[tokio::test]
async fn test_dispatch_translateBeforeLoad_shouldNotRecordExchange() {
    let mut controller = controller_with_loader(MockLoader::working());

    controller.dispatch("Hello there").await.unwrap();

    assert!(controller.session().history().is_empty());
    assert!(!controller.session().is_loaded());
}

/// Test quit and unknown commands
#[tokio::test]
async fn test_dispatch_controlCommands_shouldSignalLoop() {
    let mut controller = controller_with_loader(MockLoader::working());

    assert!(!controller.dispatch("/quit").await.unwrap());
    assert!(!controller.dispatch("/exit").await.unwrap());
    assert!(controller.dispatch("/no-such-command").await.unwrap());
    assert!(controller.dispatch("").await.unwrap());
    assert!(controller.dispatch("/help").await.unwrap());
    assert!(controller.dispatch("/languages").await.unwrap());
    assert!(controller.dispatch("/status").await.unwrap());
    assert!(controller.dispatch("/history").await.unwrap());
}

/// Test the chat wiring end to end from a config file on disk
#[tokio::test]
async fn test_configFromDisk_shouldDriveControllerLanguages() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_config(&temp_dir.path().to_path_buf(), "conf.json").unwrap();

    let config = Config::from_file(&path).unwrap();
    let session = TranslationSession::new(Box::new(MockLoader::working()));
    let mut controller = Controller::new(config, session);

    assert_eq!(controller.language_pair(), ("French", "German"));

    controller.dispatch("/load").await.unwrap();
    controller.dispatch("Bonjour").await.unwrap();
    let exchange = &controller.session().history()[0];
    assert_eq!(exchange.source_lang, "French");
    assert_eq!(exchange.target_lang, "German");
}
