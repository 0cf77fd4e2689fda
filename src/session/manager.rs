use log::{debug, info, warn};
use std::sync::Arc;

use crate::backends::{BackendLoader, TranslationBackend};
use crate::errors::SessionError;
use crate::language_catalog;
use crate::session::models::{BackendState, Exchange};

/// Translation session manager
///
/// Owns the mutable state of one chat conversation: the loaded backend
/// handle (if any) and the ordered transcript of exchanges. One session
/// per process run; operations run to completion in caller order.
pub struct TranslationSession {
    /// Loader used to acquire backend handles
    loader: Box<dyn BackendLoader>,
    /// Loaded backend, absent until the first successful load
    backend: Option<Arc<dyn TranslationBackend>>,
    /// Append-only transcript, insertion order = chronological order
    history: Vec<Exchange>,
}

impl TranslationSession {
    /// Create a new, unloaded session using the given loader
    pub fn new(loader: Box<dyn BackendLoader>) -> Self {
        Self {
            loader,
            backend: None,
            history: Vec::new(),
        }
    }

    /// Current backend lifecycle state
    pub fn state(&self) -> BackendState {
        if self.backend.is_some() {
            BackendState::Loaded
        } else {
            BackendState::Unloaded
        }
    }

    /// Check whether a backend is loaded and ready
    pub fn is_loaded(&self) -> bool {
        self.state().is_loaded()
    }

    /// Load (or reload) the translation backend
    ///
    /// On success the new handle replaces any existing one (last-load-wins).
    /// On failure an already-loaded handle is kept unchanged, so a failed
    /// reload never degrades a working session.
    pub async fn load_backend(&mut self) -> Result<(), SessionError> {
        match self.loader.load().await {
            Ok(handle) => {
                if self.backend.is_some() {
                    debug!("Replacing previously loaded backend");
                }
                info!("Translation backend loaded: {}", handle.model_id());
                self.backend = Some(handle);
                Ok(())
            }
            Err(e) => {
                if self.backend.is_some() {
                    warn!("Backend reload failed, keeping current backend: {}", e);
                }
                Err(SessionError::LoadFailed(e))
            }
        }
    }

    /// Translate `text` between two languages given by display name
    ///
    /// Fails with [`SessionError::NotReady`] before any successful load and
    /// with [`SessionError::EmptyInput`] for whitespace-only input. Unknown
    /// language names resolve to the catalog defaults rather than failing.
    /// Exactly one exchange is appended to the transcript per successful
    /// call; no failure path mutates it.
    pub async fn translate(
        &mut self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Exchange, SessionError> {
        let backend = self
            .backend
            .as_ref()
            .ok_or(SessionError::NotReady)?
            .clone();

        if text.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }

        let source_code = language_catalog::resolve_source(source_lang);
        let target_code = language_catalog::resolve_target(target_lang);

        let translated_text = backend
            .generate(text, source_code, target_code)
            .await
            .map_err(SessionError::Translation)?;

        let exchange = Exchange::new(source_lang, target_lang, text, translated_text);
        self.history.push(exchange.clone());
        Ok(exchange)
    }

    /// Read-only view of the transcript, oldest exchange first
    pub fn history(&self) -> &[Exchange] {
        &self.history
    }

    /// Empty the transcript; the backend state is unaffected
    pub fn clear_history(&mut self) {
        debug!("Clearing {} exchange(s) from history", self.history.len());
        self.history.clear();
    }
}
