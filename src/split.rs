//! Segmentation of a normalized argument into premises and a conclusion.

use regex::Regex;

use crate::List;

/// Stand-in for the conclusion marker while sentences are being cut up.
/// Normalization never inserts this character, so it cannot collide with a
/// partially processed sentence.
const SEPARATOR: char = '\u{27F9}'; // ⟹

/// Splits normalized text into premise sentences and one conclusion.
///
/// The marker word `logo` divides a sentence into a final premise (its left
/// side, when non-empty) and the conclusion. Without a marker, the last
/// sentence is promoted to conclusion. Degenerate inputs never fail: repeated
/// markers let the last split win, and a bare marker yields an empty
/// conclusion.
pub fn split_argument(text: &str) -> (List<String>, String) {
    let marker = Regex::new(r"\blogo\b[:,]?\s*").unwrap();
    let marked = marker.replace_all(text, format!(" {SEPARATOR} "));

    let mut premises = List::new();
    let mut conclusion = None;

    for segment in marked.split('.') {
        let sentence = segment.trim_end_matches(|c| c == '.' || c == ' ').trim();
        if sentence.is_empty() {
            continue;
        }

        match sentence.split_once(SEPARATOR) {
            Some((left, right)) => {
                let left = left.trim();
                if !left.is_empty() {
                    premises.push(left.to_owned());
                }

                conclusion = Some(right.trim().to_owned());
            }
            None => premises.push(sentence.to_owned()),
        }
    }

    let conclusion = match conclusion {
        Some(c) => c,
        None => premises.pop().unwrap_or_default(),
    };

    (premises, conclusion)
}
