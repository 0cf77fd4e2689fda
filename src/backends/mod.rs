/*!
 * Backend implementations for translation model access.
 *
 * This module contains the contracts the session core uses to talk to a
 * translation backend, plus the concrete implementations:
 * - Nllb: HTTP client for a local NLLB inference server
 * - Mock: deterministic backends for testing
 */

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::BackendError;

/// A loaded translation backend
///
/// The handle is opaque to the session beyond this trait: it produces one
/// best-candidate translation per call, with control tokens stripped.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Translate `text` from `source_code` to `target_code` (NLLB codes)
    ///
    /// # Returns
    /// * `Result<String, BackendError>` - The translated text or an error
    async fn generate(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, BackendError>;

    /// Identifier of the model served by this backend
    fn model_id(&self) -> &str;
}

/// Acquires a translation backend
///
/// A loader is configured once (model identifier, endpoint) and may be
/// invoked repeatedly; every successful call yields a usable handle.
#[async_trait]
pub trait BackendLoader: Send + Sync {
    /// Load the backend, verifying it is ready to serve the configured model
    async fn load(&self) -> Result<Arc<dyn TranslationBackend>, BackendError>;
}

pub mod mock;
pub mod nllb;
