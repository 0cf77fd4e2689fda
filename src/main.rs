// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use crate::app_config::{Config, LogLevel};
use crate::app_controller::Controller;
use crate::backends::nllb::NllbLoader;
use crate::session::TranslationSession;

mod app_config;
mod app_controller;
mod backends;
mod errors;
mod language_catalog;
mod session;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive translation chat session (default command)
    Chat(ChatArgs),

    /// List the supported languages
    Languages,

    /// Generate shell completions for lingo-voice
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ChatArgs {
    /// Source language display name (e.g. 'English')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language display name (e.g. 'Spanish')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Model identifier to request from the backend
    #[arg(short, long)]
    model: Option<String>,

    /// NLLB inference server endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Load the translation model before entering the chat loop
    #[arg(long)]
    load_on_start: bool,
}

/// Lingo-Voice - translation chat powered by NLLB
#[derive(Parser, Debug)]
#[command(name = "lingo-voice")]
#[command(version = "0.1.0")]
#[command(about = "Interactive translation chat powered by Meta's NLLB-200 model")]
#[command(long_about = "Lingo-Voice runs an interactive chat session that translates \
your input between two languages using a local NLLB-200 inference server.

EXAMPLES:
    lingo-voice                                   # Chat with the default config
    lingo-voice -s English -t French              # Pick a language pair
    lingo-voice --load-on-start                   # Load the model immediately
    lingo-voice -e http://localhost:6060          # Point at a specific server
    lingo-voice languages                         # List supported languages
    lingo-voice completions bash > lingo.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Source language display name (e.g. 'English')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language display name (e.g. 'Spanish')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Model identifier to request from the backend
    #[arg(short, long)]
    model: Option<String>,

    /// NLLB inference server endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Load the translation model before entering the chat loop
    #[arg(long)]
    load_on_start: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default.
    // We'll update the level after loading the config if needed.
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "lingo-voice", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Languages) => {
            for name in language_catalog::display_names() {
                println!("{}", name);
            }
            Ok(())
        }
        Some(Commands::Chat(args)) => run_chat(args).await,
        None => {
            // Default behavior - use top-level args
            run_chat(ChatArgs {
                source_language: cli.source_language,
                target_language: cli.target_language,
                model: cli.model,
                endpoint: cli.endpoint,
                config_path: cli.config_path,
                log_level: cli.log_level,
                load_on_start: cli.load_on_start,
            })
            .await
        }
    }
}

/// Load configuration, apply CLI overrides and run the chat loop
async fn run_chat(args: ChatArgs) -> Result<()> {
    let mut config = Config::from_file(&args.config_path)?;

    if let Some(source) = args.source_language {
        config.source_language = source;
    }
    if let Some(target) = args.target_language {
        config.target_language = target;
    }
    if let Some(model) = args.model {
        config.backend.model = model;
    }
    if let Some(endpoint) = args.endpoint {
        config.backend.endpoint = endpoint;
    }
    if let Some(level) = args.log_level {
        config.log_level = level.into();
    }

    config.validate()?;
    log::set_max_level(level_filter(&config.log_level));

    let loader = NllbLoader::new(
        config.backend.endpoint.clone(),
        config.backend.model.clone(),
        config.backend.timeout_secs,
    )?;
    let mut session = TranslationSession::new(Box::new(loader));

    if args.load_on_start {
        session.load_backend().await?;
    }

    let mut controller = Controller::new(config, session);
    controller.run().await
}
