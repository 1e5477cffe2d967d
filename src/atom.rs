//! Discovery of atomic propositions inside translated sentences.

use itertools::Itertools;
use regex::Regex;

use crate::List;

/// The operator tokens a translated sentence may contain.
const OPERATORS: &[&str] = &["~", "&", "|", "->", "<->", "(", ")"];

/// Connective keywords that escaped rule matching must not be mistaken for
/// atomic propositions.
const RESIDUAL_KEYWORDS: &[&str] = &["se", "então", "entao", "e", "ou"];

/// Collects the distinct atomic propositions of the given translated
/// sentences, in first-seen order across all of them.
pub fn extract_atoms(sentences: &[&str]) -> List<String> {
    // `<->` first so its arrow is not cut in two.
    let operator = Regex::new(r"<->|->|[~&|()]").unwrap();

    sentences
        .iter()
        .flat_map(|sentence| operator.split(sentence))
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .filter(|piece| !OPERATORS.contains(piece))
        .filter(|piece| !RESIDUAL_KEYWORDS.contains(piece))
        .unique()
        .map(str::to_owned)
        .collect()
}
