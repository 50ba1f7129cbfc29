//! Parsing of shortcut pattern strings.
//!
//! ```text
//! patterns       = single-pattern ("," single-pattern)*
//! single-pattern = token ("+" token)*
//! token          = raw-code | transformed-code | modifier | "Any" | prefix ":" value
//! ```
//!
//! Whitespace is removed before tokenizing, including inside prefixed values.

use std::collections::HashSet;

use crate::keys::error::PatternError;
use crate::keys::pattern::{ParsedKey, ParsedPattern, Trigger};
use crate::keys::tables::{
    ANY_MODIFIER_KEY, ModifierProp, find_modifier_key, find_prefix, find_raw_code,
    find_transformed_code, reserved,
};

/// Classifies a single token.
pub fn parse_key(key: &str) -> Result<ParsedKey, PatternError> {
    if key.is_empty() {
        return Err(PatternError::EmptyKey {
            pattern: String::new(),
        });
    }

    if key == ANY_MODIFIER_KEY {
        return Ok(ParsedKey::AnyModifiers);
    }

    if let Some(code) = find_raw_code(key) {
        return Ok(ParsedKey::Trigger(Trigger::new(vec![code.to_string()], vec![])));
    }

    if let Some(transformed) = find_transformed_code(key) {
        return Ok(ParsedKey::Trigger(Trigger::new(
            transformed.codes.clone(),
            vec![],
        )));
    }

    if let Some(modifier) = find_modifier_key(key) {
        return Ok(ParsedKey::Modifier(modifier.event_props));
    }

    if let Some((prefix_name, unprefixed)) = key.split_once(reserved::PREFIX_END) {
        let Some(prefix) = find_prefix(prefix_name) else {
            return Err(PatternError::InvalidPrefix(prefix_name.to_string()));
        };
        if unprefixed.is_empty() {
            return Err(PatternError::EmptyPrefixedValue {
                prefix: prefix.name().to_string(),
            });
        }
        return Ok(ParsedKey::Trigger(prefix.transform(unprefixed)));
    }

    Err(PatternError::InvalidKey(key.to_string()))
}

/// Parses one alternative, e.g. `Ctrl+Shift+A`. Expects whitespace to be removed already.
pub fn parse_single_pattern(pattern: &str) -> Result<ParsedPattern, PatternError> {
    let mut trigger: Option<Trigger> = None;
    let mut modifier_groups: Vec<Vec<ModifierProp>> = Vec::new();
    let mut allow_any_modifiers = false;

    for key in pattern.split(reserved::JOIN) {
        if key.is_empty() {
            return Err(PatternError::EmptyKey {
                pattern: pattern.to_string(),
            });
        }

        match parse_key(key)? {
            ParsedKey::Trigger(parsed) => {
                if trigger.is_some() {
                    return Err(PatternError::MultipleTriggers {
                        pattern: pattern.to_string(),
                    });
                }
                trigger = Some(parsed);
            }
            ParsedKey::Modifier(event_props) => {
                modifier_groups.push(event_props.to_vec());
            }
            ParsedKey::AnyModifiers => {
                if allow_any_modifiers {
                    return Err(PatternError::MultipleAnyModifiers {
                        pattern: pattern.to_string(),
                    });
                }
                allow_any_modifiers = true;
            }
        }
    }

    let Some(trigger) = trigger else {
        return Err(PatternError::MissingTrigger {
            pattern: pattern.to_string(),
        });
    };

    let mut claimed = HashSet::new();
    if !modifier_groups.iter().flatten().all(|prop| claimed.insert(*prop)) {
        return Err(PatternError::DuplicateModifiers {
            pattern: pattern.to_string(),
        });
    }

    Ok(ParsedPattern {
        trigger,
        modifier_groups,
        allow_any_modifiers,
    })
}

/// Parses a full pattern string into its alternatives, in input order.
///
/// An empty (or all-whitespace) string yields no patterns, which disables the
/// shortcut. A single malformed alternative fails the whole string.
pub fn parse_patterns(patterns: &str) -> Result<Vec<ParsedPattern>, PatternError> {
    let normalized: String = patterns.chars().filter(|c| !c.is_whitespace()).collect();

    if normalized.is_empty() {
        return Ok(Vec::new());
    }

    let parsed = normalized
        .split(reserved::DIVISION)
        .map(parse_single_pattern)
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("parsed {} pattern(s) from {:?}", parsed.len(), patterns);
    Ok(parsed)
}
