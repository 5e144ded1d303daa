// Composition tests — verifying that the pieces chain together correctly.
//
// These tests exercise the data flow between modules:
//   WordListStore -> MatchEngine -> censor -> LanguageSelector
// over the embedded lists, without any network calls. The subtitle pipeline
// test writes a temp file; everything else stays in memory.

use std::io::Write;

use bowdler::engine::{censor, MatchEngine};
use bowdler::language::Language;
use bowdler::selector::LanguageSelector;
use bowdler::wordlist::WordListStore;

// ============================================================
// Chain: store -> engine -> censor
// ============================================================

#[test]
fn censoring_scan_output_removes_every_matched_span() {
    let tokens = WordListStore::new().load(Language::En).unwrap();
    let engine = MatchEngine::new(&tokens).unwrap();

    let text = "What a piece of shit day. Damn this fucking thing to hell.";
    let records = engine.scan(text);
    assert!(!records.is_empty());

    let censored = censor(text, &records);

    // masked text keeps its exact character length
    assert_eq!(censored.chars().count(), text.chars().count());

    // no word token survives in the masked text
    assert!(
        engine.scan(&censored).is_empty(),
        "censored text still matches: {censored}"
    );
}

#[test]
fn clean_text_round_trips_unchanged() {
    let tokens = WordListStore::new().load(Language::En).unwrap();
    let engine = MatchEngine::new(&tokens).unwrap();

    let text = "abc def";
    let records = engine.scan(text);
    assert!(records.is_empty());
    assert_eq!(censor(text, &records), text);
}

#[test]
fn every_embedded_list_compiles_into_an_engine() {
    let store = WordListStore::new();
    for language in Language::ALL {
        let tokens = store.load(language).unwrap();
        MatchEngine::new(&tokens).unwrap();
    }
}

// ============================================================
// Chain: selector check -> censor
// ============================================================

#[test]
fn check_and_censor_agree_on_spans() {
    let mut selector = LanguageSelector::for_language(Language::En).unwrap();
    let text = "Shit happens. So does more shit.";

    let mut records = selector.check_profanity(text).unwrap();
    records.sort_by_key(|r| r.start);
    let censored = selector.censor_profanity(text).unwrap();

    assert_eq!(censored, "**** happens. So does more ****.");
    for record in &records {
        let masked: String = censored
            .chars()
            .skip(record.start)
            .take(record.end - record.start)
            .collect();
        assert!(
            masked.chars().all(|c| c == '*'),
            "span {record:?} not fully masked in: {censored}"
        );
    }
}

#[test]
fn bad_words_round_trip_is_unique_and_ordered() {
    let mut selector = LanguageSelector::for_language(Language::En).unwrap();

    // "shit" matches twice; dedup keeps the first and its position
    let words = selector
        .bad_words("shit and damn and MORE shit")
        .unwrap();
    assert_eq!(words, vec!["shit".to_string(), "damn".to_string()]);
}

#[test]
fn case_insensitive_matching_reports_source_casing() {
    let mut selector = LanguageSelector::for_language(Language::En).unwrap();

    let records = selector.check_profanity("this is DAMN rude").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].word, "DAMN");
    assert_eq!(records[0].start, 8);
    assert_eq!(records[0].end, 12);
}

#[test]
fn turkish_phrase_and_word_overlap_end_to_end() {
    let mut selector = LanguageSelector::for_language(Language::Tr).unwrap();
    let text = "siktir git buradan";

    let records = selector.check_profanity(text).unwrap();
    // the word "siktir" and the phrase "siktir git" both match
    assert!(records.iter().any(|r| r.word == "siktir"));
    assert!(records.iter().any(|r| r.word == "siktir git"));

    let censored = selector.censor_profanity(text).unwrap();
    assert_eq!(censored, "********** buradan");
}

// ============================================================
// Chain: subtitle file -> detection -> censor
// ============================================================

#[test]
fn srt_detection_feeds_the_full_pipeline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        "1\n\
         00:00:01,000 --> 00:00:04,000\n\
         The weather has been remarkably pleasant all week long.\n\
         \n\
         2\n\
         00:00:05,000 --> 00:00:08,000\n\
         Everyone decided to take their lunch outside in the park today.\n"
            .as_bytes(),
    )
    .unwrap();

    let mut selector = LanguageSelector::new();
    let detected = selector.set_language_from_srt(file.path(), 10).unwrap();

    assert_eq!(detected, Language::En);
    assert_eq!(
        selector.censor_profanity("damn weather").unwrap(),
        "**** weather"
    );
}
