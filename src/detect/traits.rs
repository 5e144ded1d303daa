// Language detector trait — the swap-ready abstraction.
//
// The selector only ever sees this trait, so the identification backend can
// change without touching the orchestration or the engine.

use crate::error::Result;
use crate::language::Language;

/// Resolves a text's language from the closed supported set.
pub trait LanguageDetector: Send + Sync {
    /// Classify the text. A "no confident match" answer is an error
    /// (`LanguageDetection`), distinct from an unsupported code.
    fn detect(&self, text: &str) -> Result<Language>;
}
