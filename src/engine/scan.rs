// Word-boundary profanity scanning.
//
// Word matching is two-phase: an alphanumeric-run tokenizer over the folded
// text decides *whether* a token occurs as a whole word, and a
// case-insensitive boundary regex over the original text recovers *where*,
// with source casing intact. The two phases together keep "class" from ever
// matching a word-level "ass". Phrases are matched as literal substrings of
// the folded text, non-overlapping, left to right.

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::wordlist::{Token, TokenKind};

/// One detected occurrence of a profane token.
///
/// `start` and `end` are 0-based half-open *character* offsets into the
/// original text — character rather than byte, so masking stays
/// length-preserving on non-ASCII input. `word_index` is the 1-based
/// ordinal of the matching whitespace-delimited word, or of a phrase's
/// first word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub word: String,
    pub word_index: usize,
    pub start: usize,
    pub end: usize,
}

/// A token plus whatever its scan pass needs precomputed.
enum CompiledToken {
    /// Whole-word token with its case-insensitive boundary pattern.
    Word { literal: String, pattern: Regex },
    /// Multi-word literal matched against the folded text.
    Phrase { literal: String },
}

/// Scans texts for a fixed token list.
///
/// Construction compiles the word-boundary patterns once, so a language
/// binding can scan repeatedly without paying regex compilation per call.
pub struct MatchEngine {
    tokens: Vec<CompiledToken>,
}

impl MatchEngine {
    /// Compile a token list into an engine.
    pub fn new(tokens: &[Token]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(tokens.len());
        for token in tokens {
            compiled.push(match token.kind {
                TokenKind::Word => {
                    let source = format!(r"(?i)\b{}\b", regex::escape(&token.literal));
                    let pattern = Regex::new(&source).map_err(|source| Error::InvalidToken {
                        token: token.literal.clone(),
                        source,
                    })?;
                    CompiledToken::Word {
                        literal: token.literal.clone(),
                        pattern,
                    }
                }
                TokenKind::Phrase => CompiledToken::Phrase {
                    literal: token.literal.clone(),
                },
            });
        }
        Ok(Self { tokens: compiled })
    }

    /// Number of tokens this engine scans for.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Scan a text for every occurrence of every token.
    ///
    /// Records are emitted token by token and are NOT position-sorted;
    /// callers that need positional order must sort explicitly.
    pub fn scan(&self, text: &str) -> Vec<MatchRecord> {
        if text.is_empty() || self.tokens.is_empty() {
            return Vec::new();
        }

        let folded = fold(text);
        let units = word_units(&folded);
        let mut records = Vec::new();

        for token in &self.tokens {
            match token {
                CompiledToken::Word { literal, pattern } => {
                    // Membership gate: the tokenizer only yields whole-word
                    // units, so a token absent here cannot match at all.
                    if !units.iter().any(|u| u.text == *literal) {
                        continue;
                    }
                    for m in pattern.find_iter(text) {
                        let start = char_offset(text, m.start());
                        let end = start + m.as_str().chars().count();
                        records.push(MatchRecord {
                            word: m.as_str().to_string(),
                            word_index: 1 + units.partition_point(|u| u.start < start),
                            start,
                            end,
                        });
                    }
                }
                CompiledToken::Phrase { literal } => {
                    let mut from = 0;
                    while let Some(found) = folded[from..].find(literal.as_str()) {
                        let at = from + found;
                        let start = char_offset(&folded, at);
                        records.push(MatchRecord {
                            word: literal.clone(),
                            word_index: 1 + units.partition_point(|u| u.start < start),
                            start,
                            end: start + literal.chars().count(),
                        });
                        // Continue past the match end, never less than one
                        // byte, so degenerate literals cannot loop forever.
                        from = at + literal.len().max(1);
                    }
                }
            }
        }

        debug!(
            chars = text.chars().count(),
            units = units.len(),
            matches = records.len(),
            "Scanned text"
        );

        records
    }
}

/// A maximal alphanumeric/underscore run in the folded text.
struct WordUnit {
    /// Character offset of the unit's first character.
    start: usize,
    text: String,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-fold a text one character at a time, taking each character's first
/// lowercase mapping. Folding per character keeps the folded text the same
/// character length as the original, so spans found in it map 1:1 back.
fn fold(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Character offset of a byte position within `text`.
fn char_offset(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}

/// Split the folded text into word units, in source order.
fn word_units(folded: &str) -> Vec<WordUnit> {
    let mut units: Vec<WordUnit> = Vec::new();
    let mut current: Option<WordUnit> = None;

    for (i, c) in folded.chars().enumerate() {
        if is_word_char(c) {
            match current.as_mut() {
                Some(unit) => unit.text.push(c),
                None => {
                    current = Some(WordUnit {
                        start: i,
                        text: c.to_string(),
                    })
                }
            }
        } else if let Some(unit) = current.take() {
            units.push(unit);
        }
    }
    if let Some(unit) = current {
        units.push(unit);
    }

    units
}
