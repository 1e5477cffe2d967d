//! Symbol assignment and phrase substitution.

use std::cmp::Reverse;
use std::fmt;

use contracts::*;
use itertools::Itertools;
use thiserror::Error;

use crate::List;

/// The symbols handed out to atomic propositions, in assignment order.
pub const DEFAULT_SYMBOLS: [char; 12] = ['M', 'N', 'O', 'P', 'Q', 'R', 'S', 'U', 'V', 'X', 'Y', 'Z'];

/// An argument mentioned more distinct propositions than the symbol
/// repertoire can name. Fatal: no partial map is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("argument has {atoms} distinct propositions, but the symbol repertoire holds only {capacity}")]
pub struct CapacityExceeded {
    pub atoms: usize,
    pub capacity: usize,
}

/// A one-to-one pairing of atomic propositions with single-letter symbols.
///
/// Pairs are stored as an ordered sequence, not a hash map, so iteration
/// always follows assignment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolMap {
    entries: List<(String, char)>,
}

impl SymbolMap {
    /// Pairs the i-th atom with the i-th repertoire symbol.
    #[debug_ensures(ret.is_err() || ret.as_ref().unwrap().len() == atoms.len())]
    pub fn assign(atoms: &[String], symbols: &[char]) -> Result<Self, CapacityExceeded> {
        if atoms.len() > symbols.len() {
            return Err(CapacityExceeded {
                atoms: atoms.len(),
                capacity: symbols.len(),
            });
        }

        let entries = atoms
            .iter()
            .cloned()
            .zip(symbols.iter().copied())
            .collect();

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The symbol assigned to the exact phrase, if any.
    pub fn symbol(&self, phrase: &str) -> Option<char> {
        self.entries
            .iter()
            .find(|(p, _)| p == phrase)
            .map(|&(_, symbol)| symbol)
    }

    /// Pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, char)> {
        self.entries
            .iter()
            .map(|&(ref phrase, symbol)| (phrase.as_str(), symbol))
    }

    /// Rewrites a translated sentence, replacing every occurrence of every
    /// mapped phrase with its symbol.
    ///
    /// Longer phrases are substituted first, so a phrase nested inside a
    /// longer one cannot clobber the longer match. Phrases are matched
    /// literally, never as patterns.
    pub fn apply(&self, sentence: &str) -> String {
        let longest_first = self
            .entries
            .iter()
            .sorted_by_key(|(phrase, _)| Reverse(phrase.len()));

        let mut out = sentence.to_owned();
        for (phrase, symbol) in longest_first {
            out = out.replace(phrase.as_str(), &symbol.to_string());
        }

        out
    }
}

impl fmt::Display for SymbolMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (phrase, symbol) in self.iter() {
            if !first {
                writeln!(f)?;
            }

            first = false;
            write!(f, "{} = {}", symbol, phrase)?;
        }

        Ok(())
    }
}
