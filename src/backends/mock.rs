/*!
 * Mock backend implementations for testing.
 *
 * This module provides mock backends and loaders that simulate different
 * behaviors:
 * - `MockBackend::working()` - Always succeeds with translated text
 * - `MockBackend::failing()` - Always fails with an error
 * - `MockLoader::working()` / `MockLoader::failing()` - Loaders that
 *   succeed or refuse to hand out a backend
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backends::{BackendLoader, TranslationBackend};
use crate::errors::BackendError;

/// Behavior mode for the mock backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a deterministic translation
    Working,
    /// Always fails with an error
    Failing,
    /// Returns an empty translation
    Empty,
    /// Simulates a slow model (for responsiveness testing)
    Slow {
        /// Delay before responding
        delay_ms: u64,
    },
}

/// Mock backend for testing session behavior
#[derive(Debug)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of generate calls served
    request_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str, &str, &str) -> String>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock backend that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock backend that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock backend that returns empty translations
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a mock backend with a fixed response delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Set a custom response generator
    ///
    /// The generator receives `(text, source_code, target_code)`.
    pub fn with_custom_response(mut self, generator: fn(&str, &str, &str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of generate calls this backend has served
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn generate(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, BackendError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => {
                let translated = if let Some(generator) = self.custom_response {
                    generator(text, source_code, target_code)
                } else {
                    format!("[{} -> {}] {}", source_code, target_code, text)
                };
                Ok(translated)
            }

            MockBehavior::Failing => Err(BackendError::ApiError {
                status_code: 500,
                message: "Simulated backend failure".to_string(),
            }),

            MockBehavior::Empty => Ok(String::new()),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(format!("[{} -> {}] {}", source_code, target_code, text))
            }
        }
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }
}

/// Mock loader for testing backend lifecycle behavior
pub struct MockLoader {
    /// Number of successful loads before attempts start failing
    /// (`None` = always succeed, `Some(0)` = always fail)
    succeed_limit: Option<usize>,
    /// Behavior of the backends handed out
    backend_behavior: MockBehavior,
    /// Custom response generator passed on to the backends
    custom_response: Option<fn(&str, &str, &str) -> String>,
    /// Whether handed-out backends are tagged with their load generation
    tag_generations: bool,
    /// Number of load attempts made
    load_count: Arc<AtomicUsize>,
}

impl MockLoader {
    fn with_limit(succeed_limit: Option<usize>) -> Self {
        Self {
            succeed_limit,
            backend_behavior: MockBehavior::Working,
            custom_response: None,
            tag_generations: false,
            load_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a loader that succeeds, handing out working backends
    pub fn working() -> Self {
        Self::with_limit(None)
    }

    /// Create a loader that always fails to load
    pub fn failing() -> Self {
        Self::with_limit(Some(0))
    }

    /// Create a loader that succeeds `successes` times, then fails
    pub fn working_then_failing(successes: usize) -> Self {
        Self::with_limit(Some(successes))
    }

    /// Create a loader that succeeds, handing out backends with the given behavior
    pub fn with_backend_behavior(behavior: MockBehavior) -> Self {
        let mut loader = Self::working();
        loader.backend_behavior = behavior;
        loader
    }

    /// Set a custom response generator for all handed-out backends
    pub fn with_custom_response(mut self, generator: fn(&str, &str, &str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Tag every handed-out backend with its load generation number
    ///
    /// Tagged backends append " (gen N)" to their translations, letting
    /// tests observe which load a handle came from.
    pub fn with_generation_tags(mut self) -> Self {
        self.tag_generations = true;
        self
    }

    /// Number of load attempts made against this loader
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }
}

/// A mock backend carrying the generation number of the load that produced it
#[derive(Debug)]
pub struct GenerationTaggedBackend {
    inner: MockBackend,
    /// 1-based load generation
    pub generation: usize,
}

#[async_trait]
impl TranslationBackend for GenerationTaggedBackend {
    async fn generate(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, BackendError> {
        let translated = self.inner.generate(text, source_code, target_code).await?;
        Ok(format!("{} (gen {})", translated, self.generation))
    }

    fn model_id(&self) -> &str {
        self.inner.model_id()
    }
}

#[async_trait]
impl BackendLoader for MockLoader {
    async fn load(&self) -> Result<Arc<dyn TranslationBackend>, BackendError> {
        let generation = self.load_count.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(limit) = self.succeed_limit {
            if generation > limit {
                return Err(BackendError::ModelUnavailable(
                    "Simulated load failure".to_string(),
                ));
            }
        }

        let mut backend = MockBackend::new(self.backend_behavior);
        if let Some(generator) = self.custom_response {
            backend = backend.with_custom_response(generator);
        }

        if self.tag_generations {
            Ok(Arc::new(GenerationTaggedBackend {
                inner: backend,
                generation,
            }))
        } else {
            Ok(Arc::new(backend))
        }
    }
}
