// Supported languages — a closed, enumerated set.
//
// Each language is pure configuration: a code and an embedded default word
// list. Adding a language means adding a variant and a list file, nothing
// more.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// A language the engine ships a profanity list for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Tr,
    De,
    Es,
    Pt,
}

impl Language {
    /// All supported languages, in list order.
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Tr,
        Language::De,
        Language::Es,
        Language::Pt,
    ];

    /// The ISO 639-1 code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
            Language::De => "de",
            Language::Es => "es",
            Language::Pt => "pt",
        }
    }

    /// Human-readable name, used by the `languages` subcommand.
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Turkish",
            Language::De => "German",
            Language::Es => "Spanish",
            Language::Pt => "Portuguese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Error> {
        Language::ALL
            .iter()
            .find(|l| l.code() == code)
            .copied()
            .ok_or_else(|| Error::UnsupportedLanguage(code.to_string()))
    }
}
