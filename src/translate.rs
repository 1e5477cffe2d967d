//! The five-stage translation pipeline.

use tracing::debug;

use crate::sym::{CapacityExceeded, SymbolMap, DEFAULT_SYMBOLS};
use crate::{atom, conn, norm, split, List};

/// A fully symbolized argument: premise formulas in order, one conclusion
/// formula, and the phrase-to-symbol map behind them.
///
/// An argument with no detectable sentences translates to no premises and an
/// empty conclusion rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub premises: List<String>,
    pub conclusion: String,
    pub map: SymbolMap,
}

/// Translates a Portuguese argument using the default symbol repertoire.
pub fn translate(argument: &str) -> Result<Translation, CapacityExceeded> {
    translate_with(argument, &DEFAULT_SYMBOLS)
}

/// Translates a Portuguese argument, drawing proposition symbols from the
/// given repertoire.
///
/// Every stage is a pure function; only symbol assignment can fail, and it
/// fails atomically when the argument holds more distinct propositions than
/// the repertoire has symbols.
pub fn translate_with(argument: &str, symbols: &[char]) -> Result<Translation, CapacityExceeded> {
    let text = norm::normalize(argument);
    let (premises, conclusion) = split::split_argument(&text);
    debug!(premises = premises.len(), "segmented argument");

    let premises: List<String> = premises
        .iter()
        .map(|p| conn::symbolize_connectives(p))
        .collect();
    let conclusion = if conclusion.is_empty() {
        conclusion
    } else {
        conn::symbolize_connectives(&conclusion)
    };

    let mut sentences: List<&str> = premises.iter().map(String::as_str).collect();
    if !conclusion.is_empty() {
        sentences.push(&conclusion);
    }

    let atoms = atom::extract_atoms(&sentences);
    debug!(atoms = atoms.len(), "discovered atomic propositions");

    let map = SymbolMap::assign(&atoms, symbols)?;

    let premises = premises.iter().map(|p| map.apply(p)).collect();
    let conclusion = if conclusion.is_empty() {
        conclusion
    } else {
        map.apply(&conclusion)
    };

    Ok(Translation {
        premises,
        conclusion,
        map,
    })
}
