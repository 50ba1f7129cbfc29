//! Keyboard shortcut patterns.
//!
//! A pattern string such as `"Ctrl+Shift+ArrowUp, Any+J"` describes one or
//! more key combinations. [`parse_patterns`] validates it into
//! [`ParsedPattern`]s and [`match_patterns`] decides whether a key event
//! triggers any of them.
//!
//! ```
//! use skeys::{KeyEventLike, match_patterns, parse_patterns};
//!
//! let patterns = parse_patterns("Ctrl+A").unwrap();
//! let event = KeyEventLike::new("KeyA", "a").with_meta();
//! assert!(match_patterns(&patterns, &event));
//! ```

pub mod config;
pub mod events;
pub mod keys;
pub mod logger;
pub mod shortcuts;

pub use config::Config;
pub use keys::{
    KeyEventLike, ModifierProp, ParsedKey, ParsedPattern, PatternError, Patterns, Trigger,
    match_patterns, match_single_pattern, parse_patterns,
};
pub use shortcuts::{Dispatch, ShortcutItem, ShortcutMap};
