// Reference checker trait — the capability seam for validation.
//
// Anything that can answer "which words in this text are profane" over the
// wire plugs in here; the bridge and the selector only ever see the trait.

use async_trait::async_trait;

use crate::error::Result;

/// What the external moderation service said about a text.
#[derive(Debug, Clone)]
pub struct ModerationVerdict {
    /// Profane words the service found, as reported by it.
    pub bad_words: Vec<String>,
    /// The service's own censored rendition of the text.
    pub cleaned_text: String,
}

/// Trait for external moderation services. Async because production
/// checkers sit behind HTTP APIs.
#[async_trait]
pub trait ReferenceChecker: Send + Sync {
    /// Screen a text for profanity.
    async fn screen(&self, text: &str) -> Result<ModerationVerdict>;
}
