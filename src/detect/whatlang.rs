// whatlang-backed language identification.
//
// The detector runs with an allowlist built from the supported Language
// set, so it can only ever answer with a code the engine has a word list
// for. An unclassifiable or low-confidence input is reported as a detection
// failure — distinct from an unsupported code.

use tracing::debug;
use whatlang::{Detector, Lang};

use super::traits::LanguageDetector;
use crate::error::{Error, Result};
use crate::language::Language;

fn to_whatlang(language: Language) -> Lang {
    match language {
        Language::En => Lang::Eng,
        Language::Tr => Lang::Tur,
        Language::De => Lang::Deu,
        Language::Es => Lang::Spa,
        Language::Pt => Lang::Por,
    }
}

fn from_whatlang(lang: Lang) -> Option<Language> {
    match lang {
        Lang::Eng => Some(Language::En),
        Lang::Tur => Some(Language::Tr),
        Lang::Deu => Some(Language::De),
        Lang::Spa => Some(Language::Es),
        Lang::Por => Some(Language::Pt),
        _ => None,
    }
}

/// Local, synchronous language identification via the whatlang crate.
pub struct WhatlangDetector {
    detector: Detector,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        let allowlist = Language::ALL.iter().copied().map(to_whatlang).collect();
        Self {
            detector: Detector::with_allowlist(allowlist),
        }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<Language> {
        let info = self.detector.detect(text).ok_or_else(|| {
            Error::LanguageDetection("no confident match for the input text".to_string())
        })?;

        if !info.is_reliable() {
            return Err(Error::LanguageDetection(format!(
                "classification too uncertain (best guess {}, confidence {:.2})",
                info.lang().code(),
                info.confidence()
            )));
        }

        let language = from_whatlang(info.lang()).ok_or_else(|| {
            Error::LanguageDetection(format!(
                "detector answered outside the supported set: {}",
                info.lang().code()
            ))
        })?;

        debug!(
            language = language.code(),
            confidence = info.confidence(),
            "Detected language"
        );

        Ok(language)
    }
}
