//! Rewriting of Portuguese connective phrases into symbolic operators.

use itertools::Itertools;
use regex::{Captures, Regex};

/// Rewrites the connectives of one sentence into `~ & | -> <->`.
///
/// Applied per sentence, never across sentence boundaries. A sentence with no
/// recognized connective comes back unchanged apart from whitespace
/// squeezing.
pub fn symbolize_connectives(sentence: &str) -> String {
    // NOTE: Order matters. The biconditional must go first so its `se` cannot
    // feed the conditional rule, and the conditional runs last so partially
    // rewritten operators are never re-matched.
    let s = Regex::new(r"\bse e somente se\b")
        .unwrap()
        .replace_all(sentence, "<->");
    let s = Regex::new(r"\bnão\b").unwrap().replace_all(&s, "~");
    let s = Regex::new(r"\s+\be\b\s+").unwrap().replace_all(&s, " & ");
    let s = Regex::new(r"\s+\bou\b\s+").unwrap().replace_all(&s, " | ");
    let s = rewrite_conditional(&s);

    squeeze(&s)
}

/// Rewrites the first `se <A> então <B>` region to `(<A>) -> (<B>)`.
///
/// Only the first conditional per sentence is rewritten; nested or repeated
/// conditionals do not cascade. Text before the matched `se` is preserved.
fn rewrite_conditional(sentence: &str) -> String {
    let conditional = Regex::new(r"(?i)\bse\s+(.*?)\s+ent(?:ão|ao)\s+(.*)$").unwrap();

    conditional
        .replace(sentence, |caps: &Captures| {
            format!("({}) -> ({})", caps[1].trim(), caps[2].trim())
        })
        .into_owned()
}

fn squeeze(s: &str) -> String {
    s.split_whitespace().join(" ")
}
