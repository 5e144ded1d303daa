// Comparing local scan output against the external reference.
//
// Discrepancies are advisory: logged and returned for display, never folded
// back into scan results and never treated as errors. Only a failing
// collaborator propagates.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::info;

use super::traits::ReferenceChecker;
use crate::error::Result;

/// Words each side found that the other did not.
///
/// Ordered sets, so log output and the CLI report are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discrepancies {
    /// Found by the reference checker, missed locally.
    pub missing: BTreeSet<String>,
    /// Flagged locally, not by the reference checker.
    pub false_positives: BTreeSet<String>,
}

impl Discrepancies {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.false_positives.is_empty()
    }
}

/// Compares local bad-word output with an external reference checker.
pub struct ValidationBridge {
    checker: Arc<dyn ReferenceChecker>,
}

impl ValidationBridge {
    pub fn new(checker: Arc<dyn ReferenceChecker>) -> Self {
        Self { checker }
    }

    /// Screen `text` with the reference checker and diff the two bad-word
    /// sets. Words are compared case-folded.
    pub async fn compare(&self, text: &str, local_bad_words: &[String]) -> Result<Discrepancies> {
        let verdict = self.checker.screen(text).await?;

        let local: BTreeSet<String> = local_bad_words.iter().map(|w| w.to_lowercase()).collect();
        let external: BTreeSet<String> = verdict.bad_words.iter().map(|w| w.to_lowercase()).collect();

        let discrepancies = Discrepancies {
            missing: external.difference(&local).cloned().collect(),
            false_positives: local.difference(&external).cloned().collect(),
        };

        if discrepancies.is_empty() {
            info!("Validation: local results agree with the reference checker");
        } else {
            if !discrepancies.missing.is_empty() {
                info!(
                    words = ?discrepancies.missing,
                    "Validation: reference checker found words the local scan missed"
                );
            }
            if !discrepancies.false_positives.is_empty() {
                info!(
                    words = ?discrepancies.false_positives,
                    "Validation: local scan flagged words the reference checker did not"
                );
            }
        }

        Ok(discrepancies)
    }
}
