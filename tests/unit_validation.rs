// Unit tests for the validation bridge set arithmetic.
//
// Uses an in-test fake checker — the hosted HTTP client is a thin wrapper
// and is not exercised over the network here.

use std::sync::Arc;

use async_trait::async_trait;
use bowdler::error::{Error, Result};
use bowdler::validation::{ModerationVerdict, ReferenceChecker, ValidationBridge};

struct FakeChecker {
    bad_words: Vec<&'static str>,
}

#[async_trait]
impl ReferenceChecker for FakeChecker {
    async fn screen(&self, _text: &str) -> Result<ModerationVerdict> {
        Ok(ModerationVerdict {
            bad_words: self.bad_words.iter().map(|w| w.to_string()).collect(),
            cleaned_text: String::new(),
        })
    }
}

struct BrokenChecker;

#[async_trait]
impl ReferenceChecker for BrokenChecker {
    async fn screen(&self, _text: &str) -> Result<ModerationVerdict> {
        Err(Error::ExternalService("connection refused".to_string()))
    }
}

fn bridge(bad_words: Vec<&'static str>) -> ValidationBridge {
    ValidationBridge::new(Arc::new(FakeChecker { bad_words }))
}

fn local(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ============================================================
// Set arithmetic
// ============================================================

#[tokio::test]
async fn agreement_yields_empty_discrepancies() {
    let result = bridge(vec!["damn", "shit"])
        .compare("damn this shit", &local(&["damn", "shit"]))
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn words_only_the_reference_found_are_missing() {
    let result = bridge(vec!["damn", "heck"])
        .compare("damn heck", &local(&["damn"]))
        .await
        .unwrap();

    assert_eq!(result.missing.len(), 1);
    assert!(result.missing.contains("heck"));
    assert!(result.false_positives.is_empty());
}

#[tokio::test]
async fn words_only_the_local_scan_found_are_false_positives() {
    let result = bridge(vec!["damn"])
        .compare("damn bloody thing", &local(&["damn", "bloody"]))
        .await
        .unwrap();

    assert!(result.missing.is_empty());
    assert_eq!(result.false_positives.len(), 1);
    assert!(result.false_positives.contains("bloody"));
}

#[tokio::test]
async fn both_sets_can_be_nonempty_at_once() {
    let result = bridge(vec!["damn", "heck"])
        .compare("text", &local(&["damn", "bloody"]))
        .await
        .unwrap();

    assert!(result.missing.contains("heck"));
    assert!(result.false_positives.contains("bloody"));
}

#[tokio::test]
async fn comparison_is_case_folded() {
    let result = bridge(vec!["Damn"])
        .compare("DAMN", &local(&["dAmN"]))
        .await
        .unwrap();

    assert!(result.is_empty(), "got: {result:?}");
}

#[tokio::test]
async fn duplicate_local_words_collapse_into_the_set() {
    let result = bridge(vec!["damn"])
        .compare("damn damn", &local(&["damn", "damn"]))
        .await
        .unwrap();

    assert!(result.is_empty());
}

// ============================================================
// Collaborator failure
// ============================================================

#[tokio::test]
async fn checker_failure_propagates_as_external_service_error() {
    let bridge = ValidationBridge::new(Arc::new(BrokenChecker));
    let err = bridge.compare("text", &local(&["damn"])).await.unwrap_err();

    assert!(matches!(err, Error::ExternalService(_)), "got: {err:?}");
}
