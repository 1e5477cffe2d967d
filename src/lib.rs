//! Translation of informal Portuguese arguments into symbolic propositional
//! logic.
//!
//! An argument like "socrates é um homem. todo homem é mortal. logo, socrates
//! é mortal." becomes an ordered list of premise formulas, one conclusion
//! formula, and a map from each atomic proposition to its single-letter
//! symbol. The output vocabulary is `~ & | -> <->` plus parentheses, directly
//! consumable by a propositional-satisfiability evaluator.
//!
//! The pipeline is five ordered pure stages: normalization, premise/conclusion
//! segmentation, connective rewriting, atomic-proposition discovery, and
//! symbol assignment with longest-first substitution. Only the last stage can
//! fail, when an argument mentions more distinct propositions than the symbol
//! repertoire can name.

mod atom;
mod conn;
mod norm;
mod split;
mod sym;
mod translate;

pub use sym::{CapacityExceeded, SymbolMap, DEFAULT_SYMBOLS};
pub use translate::{translate, translate_with, Translation};

type List<T> = Vec<T>;
