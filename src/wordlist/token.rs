// A single entry from a language's profanity list.

/// Whether a token is a single word or a multi-word phrase.
///
/// The distinction drives the scan strategy: words go through the
/// word-boundary pass, phrases through the literal substring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Phrase,
}

/// One configured profane word or phrase, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased canonical form of the entry.
    pub literal: String,
    pub kind: TokenKind,
}

impl Token {
    /// Build a token from one list line. A space anywhere makes it a phrase.
    pub fn from_line(line: &str) -> Self {
        let literal = line.to_lowercase();
        let kind = if literal.contains(' ') {
            TokenKind::Phrase
        } else {
            TokenKind::Word
        };
        Token { literal, kind }
    }
}
