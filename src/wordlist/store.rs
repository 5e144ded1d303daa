// Loading word lists — embedded defaults plus an optional override directory.
//
// One UTF-8 resource per language, one token per line, no header. Lines are
// not trimmed beyond the newline: a line holding a single space is a valid
// (if degenerate) phrase token, and callers who add blank lines get empty
// tokens. Default lists are compiled into the binary; BOWDLER_WORDLIST_DIR
// lets deployments ship their own lists without rebuilding.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};
use crate::language::Language;
use crate::wordlist::token::Token;

/// Lists compiled into the binary, one per supported language.
fn embedded(language: Language) -> &'static str {
    match language {
        Language::En => include_str!("data/en.txt"),
        Language::Tr => include_str!("data/tr.txt"),
        Language::De => include_str!("data/de.txt"),
        Language::Es => include_str!("data/es.txt"),
        Language::Pt => include_str!("data/pt.txt"),
    }
}

/// Loads the profanity token list for a language.
///
/// A store with an override directory reads `<dir>/<code>.txt` instead of
/// the embedded list. A missing override file is an error, not a silent
/// fallback to the embedded list.
#[derive(Debug, Clone, Default)]
pub struct WordListStore {
    override_dir: Option<PathBuf>,
}

impl WordListStore {
    /// A store serving the embedded default lists.
    pub fn new() -> Self {
        Self { override_dir: None }
    }

    /// A store reading `<code>.txt` files from the given directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
        }
    }

    /// Load the token list for a language. Called once per binding; the
    /// returned tokens are immutable thereafter.
    pub fn load(&self, language: Language) -> Result<Vec<Token>> {
        let raw = match &self.override_dir {
            Some(dir) => {
                let path = dir.join(format!("{}.txt", language.code()));
                fs::read_to_string(&path).map_err(|source| {
                    if source.kind() == std::io::ErrorKind::NotFound {
                        Error::UnsupportedLanguage(language.code().to_string())
                    } else {
                        Error::WordListIo {
                            language: language.code().to_string(),
                            source,
                        }
                    }
                })?
            }
            None => embedded(language).to_string(),
        };

        let tokens: Vec<Token> = raw.lines().map(Token::from_line).collect();

        debug!(
            language = language.code(),
            tokens = tokens.len(),
            "Loaded word list"
        );

        Ok(tokens)
    }
}
