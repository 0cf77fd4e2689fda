/*!
 * # Lingo-Voice - Translation Chat powered by NLLB
 *
 * A Rust library and interactive chat interface for text translation,
 * delegating translation to a pretrained NLLB-200 backend.
 *
 * ## Features
 *
 * - Session-scoped translation chat with an ordered transcript
 * - Explicit backend lifecycle (load once, reload at will)
 * - 20 supported languages mapped to NLLB language codes
 * - Pluggable translation backends behind a small async trait
 * - Mock backends for deterministic testing
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `language_catalog`: Display-name to NLLB language-code mapping
 * - `session`: Translation session lifecycle and transcript:
 *   - `session::manager`: The session state machine
 *   - `session::models`: Exchange and backend-state types
 * - `backends`: Translation backend implementations:
 *   - `backends::nllb`: HTTP client for an NLLB inference server
 *   - `backends::mock`: Mock backends for testing
 * - `app_controller`: Interactive chat loop
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod backends;
pub mod errors;
pub mod language_catalog;
pub mod session;

// Re-export main types for easier usage
pub use app_config::Config;
pub use backends::{BackendLoader, TranslationBackend};
pub use errors::{AppError, BackendError, SessionError};
pub use language_catalog::{display_names, resolve_source, resolve_target};
pub use session::{BackendState, Exchange, TranslationSession};
