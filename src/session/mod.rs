/*!
 * Session management module for translation chat sessions.
 *
 * This module provides:
 * - Backend lifecycle (load, reload) for one chat session
 * - The translate operation and its precondition checks
 * - The ordered, session-scoped transcript of exchanges
 */

pub mod manager;
pub mod models;

// Re-export main types
pub use manager::TranslationSession;
pub use models::{BackendState, Exchange};
