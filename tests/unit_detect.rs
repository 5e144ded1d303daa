// Unit tests for language identification and subtitle sampling.

use std::io::Write;

use bowdler::detect::{LanguageDetector, WhatlangDetector};
use bowdler::error::Error;
use bowdler::language::Language;
use bowdler::srt;

// ============================================================
// whatlang detection
// ============================================================

#[test]
fn detects_unambiguous_english() {
    let detector = WhatlangDetector::new();
    let text = "The weather has been remarkably pleasant this week, and everyone \
                in the office decided to take their lunch outside in the park.";

    assert_eq!(detector.detect(text).unwrap(), Language::En);
}

#[test]
fn detects_unambiguous_turkish() {
    let detector = WhatlangDetector::new();
    let text = "Bugün hava çok güzel olduğu için herkes öğle yemeğini dışarıda \
                parkta yemeye karar verdi ve uzun bir yürüyüş yaptı.";

    assert_eq!(detector.detect(text).unwrap(), Language::Tr);
}

#[test]
fn empty_input_is_a_detection_failure() {
    let err = WhatlangDetector::new().detect("").unwrap_err();
    assert!(matches!(err, Error::LanguageDetection(_)), "got: {err:?}");
}

// ============================================================
// SRT sampling
// ============================================================

fn write_srt(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const SAMPLE: &str = "1\n\
00:00:01,000 --> 00:00:03,000\n\
Hello there, <i>old friend</i>.\n\
\n\
2\n\
00:00:04,000 --> 00:00:06,000\n\
{\\an8}It has been\na very long time.\n\
\n\
3\n\
00:00:07,000 --> 00:00:09,000\n\
Far too long, honestly.\n";

#[test]
fn samples_the_first_n_payloads() {
    let file = write_srt(SAMPLE);
    let payloads = srt::sample_payloads(file.path(), 2).unwrap();

    assert_eq!(payloads.len(), 2);
    assert_eq!(payloads[0], "Hello there, old friend.");
}

#[test]
fn markup_is_stripped_and_line_breaks_flattened() {
    let file = write_srt(SAMPLE);
    let payloads = srt::sample_payloads(file.path(), 3).unwrap();

    assert_eq!(payloads[1], "It has been a very long time.");
}

#[test]
fn sample_count_truncates_to_available_captions() {
    let file = write_srt(SAMPLE);
    let payloads = srt::sample_payloads(file.path(), 50).unwrap();

    assert_eq!(payloads.len(), 3);
    assert_eq!(payloads[2], "Far too long, honestly.");
}

#[test]
fn zero_sample_count_is_rejected() {
    let file = write_srt(SAMPLE);
    let err = srt::sample_payloads(file.path(), 0).unwrap_err();

    assert!(matches!(err, Error::MalformedInput(_)), "got: {err:?}");
}

#[test]
fn crlf_files_parse_the_same() {
    let crlf = SAMPLE.replace('\n', "\r\n");
    let file = write_srt(&crlf);
    let payloads = srt::sample_payloads(file.path(), 3).unwrap();

    assert_eq!(payloads.len(), 3);
    assert_eq!(payloads[0], "Hello there, old friend.");
}

#[test]
fn non_utf8_input_is_malformed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();

    let err = srt::sample_payloads(file.path(), 5).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)), "got: {err:?}");
}

#[test]
fn missing_file_surfaces_the_io_cause() {
    let dir = tempfile::tempdir().unwrap();
    let err = srt::sample_payloads(&dir.path().join("nope.srt"), 5).unwrap_err();

    assert!(matches!(err, Error::Io { .. }), "got: {err:?}");
}

#[test]
fn blocks_without_a_timing_line_are_skipped() {
    let file = write_srt("garbage header\n\n1\n00:00:01,000 --> 00:00:02,000\nActual caption.\n");
    let payloads = srt::sample_payloads(file.path(), 5).unwrap();

    assert_eq!(payloads, vec!["Actual caption.".to_string()]);
}
