use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use bowdler::config::Config;
use bowdler::language::Language;
use bowdler::output::terminal;
use bowdler::selector::LanguageSelector;
use bowdler::validation::{HostedModerationChecker, ValidationBridge};

/// Bowdler: multi-language profanity detection and censoring.
///
/// Scans free text against per-language word lists, reports
/// word-boundary-accurate offsets, and produces masked variants.
#[derive(Parser)]
#[command(name = "bowdler", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find profanity in a text and print each match with its offsets
    Check {
        /// The text to scan
        text: String,

        /// Language code (auto-detected when omitted)
        #[arg(long)]
        language: Option<String>,

        /// Emit match records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the text with every profane span masked
    Censor {
        /// The text to censor
        text: String,

        /// Language code (auto-detected when omitted)
        #[arg(long)]
        language: Option<String>,
    },

    /// Print the unique profane words found in a text
    BadWords {
        /// The text to scan
        text: String,

        /// Language code (auto-detected when omitted)
        #[arg(long)]
        language: Option<String>,
    },

    /// Detect the language of a text or a subtitle file
    Detect {
        /// The text to classify (omit when using --srt)
        text: Option<String>,

        /// Classify the first captions of this SRT file instead
        #[arg(long)]
        srt: Option<PathBuf>,

        /// Number of captions to sample from the SRT file
        #[arg(long, default_value = "10")]
        samples: usize,
    },

    /// List supported languages
    Languages,

    /// Compare local results against the hosted moderation service
    Validate {
        /// The text to cross-check
        text: String,

        /// Language code (auto-detected when omitted)
        #[arg(long)]
        language: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bowdler=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            text,
            language,
            json,
        } => {
            let mut selector = build_selector(&config, language.as_deref())?;
            let mut records = selector.check_profanity(&text)?;
            records.sort_by_key(|r| r.start);

            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                terminal::display_matches(&text, &records, selector.language());
            }
        }

        Commands::Censor { text, language } => {
            let mut selector = build_selector(&config, language.as_deref())?;
            println!("{}", selector.censor_profanity(&text)?);
        }

        Commands::BadWords { text, language } => {
            let mut selector = build_selector(&config, language.as_deref())?;
            let words = selector.bad_words(&text)?;
            terminal::display_bad_words(&words);
        }

        Commands::Detect { text, srt, samples } => {
            let mut selector = LanguageSelector::new().with_store(config.store());
            let detected = match (text, srt) {
                (_, Some(path)) => selector.set_language_from_srt(&path, samples)?,
                (Some(text), None) => selector.set_language_from_text(&text)?,
                (None, None) => anyhow::bail!("provide TEXT or --srt FILE"),
            };
            terminal::display_detected(detected);
        }

        Commands::Languages => {
            terminal::display_languages();
        }

        Commands::Validate { text, language } => {
            config.require_moderation()?;

            let checker = HostedModerationChecker::new(
                &config.moderation_api_url,
                &config.moderation_api_key,
            );
            let bridge = ValidationBridge::new(Arc::new(checker));

            let mut selector = build_selector(&config, language.as_deref())?;
            let words = selector.bad_words(&text)?;
            let discrepancies = bridge.compare(&text, &words).await?;
            terminal::display_discrepancies(&discrepancies);
        }
    }

    Ok(())
}

/// A selector over the configured store, pre-bound when a language code was
/// given on the command line and left to auto-detect otherwise.
fn build_selector(config: &Config, language: Option<&str>) -> Result<LanguageSelector> {
    let mut selector = LanguageSelector::new().with_store(config.store());
    if let Some(code) = language {
        let language: Language = code.parse()?;
        selector.set_language(language)?;
    }
    Ok(selector)
}
