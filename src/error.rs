// Error taxonomy for the library.
//
// Nothing here is retried internally; every variant propagates to the
// caller with the language code or underlying cause attached. The binary
// layer wraps these in anyhow for top-level context.

use thiserror::Error;

/// Errors produced by the profanity engine and its collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested or detected language has no word list.
    #[error("unsupported language: no word list for '{0}'")]
    UnsupportedLanguage(String),

    /// The detector could not confidently classify the input.
    #[error("language detection failed: {0}")]
    LanguageDetection(String),

    /// The external moderation collaborator failed (network, auth, or HTTP).
    /// Core matching remains usable independently of this.
    #[error("moderation service error: {0}")]
    ExternalService(String),

    /// Binary or otherwise non-text input where text is required.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A word list exists but could not be read.
    #[error("failed to read word list for '{language}'")]
    WordListIo {
        language: String,
        #[source]
        source: std::io::Error,
    },

    /// A list entry that cannot be compiled into a boundary pattern.
    #[error("invalid word list token '{token}'")]
    InvalidToken {
        token: String,
        #[source]
        source: regex::Error,
    },

    /// A file the caller pointed at could not be read.
    #[error("failed to read '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
