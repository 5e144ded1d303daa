// SubRip sampling for language detection.
//
// Minimal reader: blocks are separated by blank lines; each block is an
// index line, a `-->` timing line, then payload lines. Only the payloads
// matter here — styling tags and override blocks are stripped and line
// breaks flattened to spaces so the detector sees plain prose.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// `<i>`-style tags and `{\an8}`-style overrides embedded in payloads.
fn markup_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[^>]*>|\{\\[^}]*\}").expect("literal pattern"))
}

/// Extract the first `sample_count` caption payloads from an SRT file.
///
/// `sample_count` must be positive; when the file holds fewer captions the
/// result is truncated to what exists. Non-UTF-8 content is rejected as
/// malformed input rather than decoded lossily.
pub fn sample_payloads(path: &Path, sample_count: usize) -> Result<Vec<String>> {
    if sample_count == 0 {
        return Err(Error::MalformedInput(
            "subtitle sample count must be a positive integer".to_string(),
        ));
    }

    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| {
        Error::MalformedInput(format!(
            "subtitle file '{}' is not valid UTF-8",
            path.display()
        ))
    })?;

    let content = content.replace('\r', "");
    let mut payloads = Vec::new();

    for block in content.split("\n\n") {
        if payloads.len() == sample_count {
            break;
        }

        // Everything after the timing line is payload; blocks without a
        // timing line (stray numbering, BOM junk) are skipped.
        let Some(timing_at) = block.lines().position(|line| line.contains("-->")) else {
            continue;
        };

        let flattened = block
            .lines()
            .skip(timing_at + 1)
            .collect::<Vec<_>>()
            .join(" ");
        let cleaned = markup_pattern().replace_all(&flattened, "");
        let cleaned = cleaned.trim();

        if !cleaned.is_empty() {
            payloads.push(cleaned.to_string());
        }
    }

    Ok(payloads)
}
