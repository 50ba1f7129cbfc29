//! The shortcut pattern language: key tables, parser and event matcher.

mod error;
mod event;
mod matcher;
mod parser;
mod pattern;
pub mod tables;

pub use error::PatternError;
pub use event::KeyEventLike;
pub use matcher::{combinations, match_patterns, match_single_pattern};
pub use parser::{parse_key, parse_patterns, parse_single_pattern};
pub use pattern::{ParsedKey, ParsedPattern, Patterns, Trigger};
pub use tables::ModifierProp;
