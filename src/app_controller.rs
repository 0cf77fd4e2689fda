use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::io::{BufRead, Write};
use std::time::Duration;

use crate::app_config::Config;
use crate::errors::SessionError;
use crate::language_catalog;
use crate::session::TranslationSession;

// @module: Interactive chat controller for translation sessions

/// Main application controller for the translation chat loop
///
/// Renders session state and forwards user intents (load, translate,
/// clear) to the session; every error is surfaced as a message and the
/// loop continues.
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: The one session of this process run
    session: TranslationSession,
    // @field: Currently selected source language display name
    source_lang: String,
    // @field: Currently selected target language display name
    target_lang: String,
}

impl Controller {
    /// Create a controller with the given configuration and session
    pub fn new(config: Config, session: TranslationSession) -> Self {
        let source_lang = config.source_language.clone();
        let target_lang = config.target_language.clone();
        Self {
            config,
            session,
            source_lang,
            target_lang,
        }
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.source_lang.is_empty() && !self.target_lang.is_empty()
    }

    /// Currently selected language pair (source, target)
    pub fn language_pair(&self) -> (&str, &str) {
        (&self.source_lang, &self.target_lang)
    }

    /// Borrow the underlying session
    pub fn session(&self) -> &TranslationSession {
        &self.session
    }

    /// Run the interactive chat loop until EOF or /quit
    pub async fn run(&mut self) -> Result<()> {
        self.print_banner();

        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("{} > ", self.source_lang);
            std::io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            if !self.dispatch(line.trim()).await? {
                break;
            }
        }

        info!("Session ended with {} exchange(s)", self.session.history().len());
        Ok(())
    }

    /// Handle one line of input; returns false when the loop should stop
    pub async fn dispatch(&mut self, line: &str) -> Result<bool> {
        match line {
            "" => {}
            "/quit" | "/exit" => return Ok(false),
            "/help" => self.print_help(),
            "/load" => self.load_backend().await,
            "/languages" => self.print_languages(),
            "/history" => self.print_history(),
            "/clear" => {
                self.session.clear_history();
                println!("Chat history cleared.");
            }
            "/status" => self.print_status(),
            _ if line.starts_with("/source ") => {
                self.set_language(line.trim_start_matches("/source ").trim(), true);
            }
            _ if line.starts_with("/target ") => {
                self.set_language(line.trim_start_matches("/target ").trim(), false);
            }
            _ if line.starts_with('/') => {
                println!("Unknown command: {}. Type /help for commands.", line);
            }
            text => self.translate(text).await,
        }
        Ok(true)
    }

    /// Load (or reload) the translation backend, with a spinner
    async fn load_backend(&mut self) {
        let spinner = Self::spinner("Loading NLLB model...");
        let result = self.session.load_backend().await;
        spinner.finish_and_clear();

        match result {
            Ok(()) => println!("Model loaded successfully. Ready for translation."),
            Err(e) => println!("Failed to load model: {}", e),
        }
    }

    /// Translate one line of chat input and print the result
    async fn translate(&mut self, text: &str) {
        let spinner = Self::spinner("Translating...");
        let result = self
            .session
            .translate(text, &self.source_lang, &self.target_lang)
            .await;
        spinner.finish_and_clear();

        match result {
            Ok(exchange) => {
                println!("{} > {}", self.target_lang, exchange.translated_text);
            }
            Err(SessionError::NotReady) => {
                println!("Please load the model first (/load).");
            }
            Err(SessionError::EmptyInput) => {
                println!("Please enter some text to translate.");
            }
            Err(e) => {
                println!("Translation error: {}", e);
            }
        }
    }

    /// Change the selected source or target language
    fn set_language(&mut self, name: &str, source: bool) {
        // Selection is strict; only the translate path falls back silently
        match language_catalog::try_resolve(name) {
            Ok(code) => {
                debug!("Selected language {} ({})", name, code);
                if source {
                    self.source_lang = name.to_string();
                    println!("Source language set to {}.", name);
                } else {
                    self.target_lang = name.to_string();
                    println!("Target language set to {}.", name);
                }
            }
            Err(e) => println!("{}. Type /languages for the supported list.", e),
        }
    }

    fn print_banner(&self) {
        println!("Lingo-Voice - Translation Chat ({})", self.config.backend.model);
        println!(
            "Translating {} -> {}. Type /help for commands.",
            self.source_lang, self.target_lang
        );
        self.print_status();
    }

    fn print_status(&self) {
        println!("Model status: {}", self.session.state().status_display());
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  /load             Load the translation model");
        println!("  /source <name>    Set the source language");
        println!("  /target <name>    Set the target language");
        println!("  /languages        List supported languages");
        println!("  /history          Show the chat history");
        println!("  /clear            Clear the chat history");
        println!("  /status           Show model status");
        println!("  /quit             Exit");
        println!("Any other input is translated.");
    }

    fn print_languages(&self) {
        println!("Supported languages:");
        for name in language_catalog::display_names() {
            println!("  {}", name);
        }
    }

    fn print_history(&self) {
        if self.session.history().is_empty() {
            println!("Chat history is empty.");
            return;
        }
        for (i, exchange) in self.session.history().iter().enumerate() {
            println!("{:>3}. {}", i + 1, exchange);
        }
    }

    fn spinner(message: &'static str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }
}
