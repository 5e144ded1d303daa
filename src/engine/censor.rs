// Masking matched spans.

use crate::engine::scan::MatchRecord;

/// The mask character for censored spans.
pub const MASK: char = '*';

/// Replace every matched span with a same-length run of mask characters.
///
/// Matches are applied in descending start order — with a length-preserving
/// mask the order does not matter, but it keeps earlier offsets valid if
/// the mask scheme ever stops preserving length. The sort is stable, so
/// output stays deterministic when a phrase and one of its constituent
/// words share a start offset. Spans are clamped to the text length; the
/// input is never mutated.
pub fn censor(text: &str, matches: &[MatchRecord]) -> String {
    let mut chars: Vec<char> = text.chars().collect();

    let mut ordered: Vec<&MatchRecord> = matches.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start));

    for record in ordered {
        let end = record.end.min(chars.len());
        for slot in chars.iter_mut().take(end).skip(record.start) {
            *slot = MASK;
        }
    }

    chars.into_iter().collect()
}
