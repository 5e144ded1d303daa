// Language selection and orchestration.
//
// A selector is an explicit two-state machine: Unbound until a language is
// chosen, Bound afterwards. The one implicit transition is the first
// check/censor call on an unbound selector, which consults the detector;
// every other way in is an explicit set_language* call. Bindings are
// replaced wholesale, never mutated in place.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::detect::{LanguageDetector, WhatlangDetector};
use crate::engine::{censor, MatchEngine, MatchRecord};
use crate::error::{Error, Result};
use crate::language::Language;
use crate::srt;
use crate::validation::ValidationBridge;
use crate::wordlist::WordListStore;

/// The active language with the engine built from its loaded token list.
pub struct LanguageBinding {
    language: Language,
    engine: MatchEngine,
}

enum BindingState {
    Unbound,
    Bound(LanguageBinding),
}

/// Routes check/censor calls to the engine bound to the active language.
pub struct LanguageSelector {
    store: WordListStore,
    detector: Arc<dyn LanguageDetector>,
    validation: Option<Arc<ValidationBridge>>,
    state: BindingState,
}

impl LanguageSelector {
    /// An unbound selector over the embedded word lists; the first check or
    /// censor call binds via auto-detection.
    pub fn new() -> Self {
        Self {
            store: WordListStore::new(),
            detector: Arc::new(WhatlangDetector::new()),
            validation: None,
            state: BindingState::Unbound,
        }
    }

    /// A selector pre-bound to a language.
    pub fn for_language(language: Language) -> Result<Self> {
        let mut selector = Self::new();
        selector.set_language(language)?;
        Ok(selector)
    }

    /// Use a different word list store (e.g. an override directory).
    pub fn with_store(mut self, store: WordListStore) -> Self {
        self.store = store;
        self
    }

    /// Use a different language detector.
    pub fn with_detector(mut self, detector: Arc<dyn LanguageDetector>) -> Self {
        self.detector = detector;
        self
    }

    /// Attach a validation bridge. Scan results are compared against the
    /// reference checker and logged; they are never altered.
    pub fn with_validation(mut self, bridge: ValidationBridge) -> Self {
        self.validation = Some(Arc::new(bridge));
        self
    }

    /// The currently bound language, if any.
    pub fn language(&self) -> Option<Language> {
        match &self.state {
            BindingState::Unbound => None,
            BindingState::Bound(binding) => Some(binding.language),
        }
    }

    /// Bind to a language, replacing any previous binding.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        let tokens = self.store.load(language)?;
        let engine = MatchEngine::new(&tokens)?;
        info!(
            language = language.code(),
            tokens = tokens.len(),
            "Bound language"
        );
        self.state = BindingState::Bound(LanguageBinding { language, engine });
        Ok(())
    }

    /// Detect the text's language and bind to it.
    pub fn set_language_from_text(&mut self, text: &str) -> Result<Language> {
        let language = self.detector.detect(text)?;
        self.set_language(language)?;
        Ok(language)
    }

    /// Detect the language of a subtitle file from its first
    /// `sample_count` captions and bind to it.
    pub fn set_language_from_srt(&mut self, path: &Path, sample_count: usize) -> Result<Language> {
        let payloads = srt::sample_payloads(path, sample_count)?;
        self.set_language_from_text(&payloads.join(" "))
    }

    /// Scan for profanity, auto-binding on first use.
    ///
    /// Records are not position-sorted; callers that need positional order
    /// must sort explicitly.
    pub fn check_profanity(&mut self, text: &str) -> Result<Vec<MatchRecord>> {
        let binding = self.ensure_bound(text)?;
        let records = binding.engine.scan(text);
        self.spawn_validation(text, &records);
        Ok(records)
    }

    /// Return the text with every matched span masked.
    pub fn censor_profanity(&mut self, text: &str) -> Result<String> {
        let binding = self.ensure_bound(text)?;
        let records = binding.engine.scan(text);
        Ok(censor(text, &records))
    }

    /// Unique matched surface forms, in order of first occurrence.
    pub fn bad_words(&mut self, text: &str) -> Result<Vec<String>> {
        let binding = self.ensure_bound(text)?;
        let mut records = binding.engine.scan(text);
        records.sort_by_key(|r| r.start);

        let mut seen = HashSet::new();
        Ok(records
            .into_iter()
            .filter(|r| seen.insert(r.word.clone()))
            .map(|r| r.word)
            .collect())
    }

    /// The single implicit transition: Unbound + first call → detect + bind.
    fn ensure_bound(&mut self, text: &str) -> Result<&LanguageBinding> {
        if let BindingState::Unbound = self.state {
            let language = self.detector.detect(text)?;
            info!(
                language = language.code(),
                "Auto-detected language on first use"
            );
            self.set_language(language)?;
        }
        match &self.state {
            BindingState::Bound(binding) => Ok(binding),
            // set_language either bound or already errored above
            BindingState::Unbound => Err(Error::LanguageDetection(
                "selector left unbound after binding".to_string(),
            )),
        }
    }

    /// Fire-and-forget comparison against the reference checker. The bridge
    /// logs its own verdict; failures are warnings, never call errors.
    fn spawn_validation(&self, text: &str, records: &[MatchRecord]) {
        let Some(bridge) = self.validation.clone() else {
            return;
        };

        let text = text.to_string();
        let local: Vec<String> = records.iter().map(|r| r.word.clone()).collect();

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(err) = bridge.compare(&text, &local).await {
                        warn!(error = %err, "Reference validation failed");
                    }
                });
            }
            Err(_) => {
                warn!("Validation bridge configured but no async runtime; skipping comparison");
            }
        }
    }
}

impl Default for LanguageSelector {
    fn default() -> Self {
        Self::new()
    }
}
