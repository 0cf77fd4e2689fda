/*!
 * Session-specific models.
 *
 * These structures describe the observable state of a translation session:
 * the backend lifecycle state and the recorded exchanges of the transcript.
 */

use serde::{Deserialize, Serialize};

/// Lifecycle state of the session's translation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendState {
    /// No backend has been loaded yet
    Unloaded,
    /// A backend is loaded and ready to translate
    Loaded,
}

impl BackendState {
    /// Check if the backend is ready for translation
    pub fn is_loaded(&self) -> bool {
        matches!(self, BackendState::Loaded)
    }

    /// Get a human-readable status string
    pub fn status_display(&self) -> &'static str {
        match self {
            BackendState::Unloaded => "Not loaded",
            BackendState::Loaded => "Ready",
        }
    }
}

/// One recorded translation exchange
///
/// Created on each successful translate call and never mutated afterwards;
/// the transcript keeps exchanges in insertion (chronological) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    /// Source language display name as selected by the user
    pub source_lang: String,
    /// Target language display name as selected by the user
    pub target_lang: String,
    /// Text as entered by the user
    pub original_text: String,
    /// Translated text returned by the backend
    pub translated_text: String,
    /// Creation time (RFC 3339, local timezone)
    pub created_at: String,
}

impl Exchange {
    /// Record a new exchange, stamped with the current local time
    pub fn new(
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        original_text: impl Into<String>,
        translated_text: impl Into<String>,
    ) -> Self {
        Self {
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            original_text: original_text.into(),
            translated_text: translated_text.into(),
            created_at: chrono::Local::now().to_rfc3339(),
        }
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} -> [{}] {}",
            self.source_lang, self.original_text, self.target_lang, self.translated_text
        )
    }
}
