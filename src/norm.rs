//! Canonicalization of raw argument text.

use contracts::*;

/// Punctuation that survives normalization. Everything else in the ASCII
/// punctuation range is stripped; en and em dashes fold into the hyphen.
const KEPT: &[char] = &['(', ')', '.', '-'];

/// Lowercases, folds dashes, strips punctuation, and collapses whitespace.
///
/// Total over any input and idempotent: normalizing already-normalized text
/// returns it unchanged.
#[debug_ensures(!ret.contains("  "))]
#[debug_ensures(ret.trim() == ret)]
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.to_lowercase().chars() {
        let ch = match ch {
            '\u{2013}' | '\u{2014}' => '-', // en dash, em dash
            c => c,
        };

        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }

        if ch.is_ascii_punctuation() && !KEPT.contains(&ch) {
            continue;
        }

        if pending_space && !out.is_empty() {
            out.push(' ');
        }

        pending_space = false;
        out.push(ch);
    }

    out
}
