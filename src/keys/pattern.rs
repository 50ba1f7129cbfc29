use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::keys::error::PatternError;
use crate::keys::event::KeyEventLike;
use crate::keys::matcher::match_patterns;
use crate::keys::parser::parse_patterns;
use crate::keys::tables::{
    ANY_MODIFIER_KEY, MODIFIER_KEYS, ModifierProp, Prefix, SUPPORTED_TRANSFORMED_CODES,
    find_raw_code, reserved,
};

/// The non-modifier key of a pattern.
///
/// An event satisfies the trigger when its `code` is one of `codes` or its
/// `key` is one of `keys`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trigger {
    pub codes: Vec<String>,
    pub keys: Vec<String>,
}

impl Trigger {
    pub fn new(codes: Vec<String>, keys: Vec<String>) -> Self {
        Self { codes, keys }
    }

    pub fn matches(&self, event: &KeyEventLike) -> bool {
        self.codes.iter().any(|code| *code == event.code)
            || self.keys.iter().any(|key| *key == event.key)
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.keys.is_empty() {
            if let [code] = self.codes.as_slice() {
                if let Some(raw) = find_raw_code(code) {
                    return f.write_str(raw);
                }
            }

            if let Some(transformed) = SUPPORTED_TRANSFORMED_CODES
                .iter()
                .find(|transformed| transformed.codes == self.codes)
            {
                return f.write_str(&transformed.definition);
            }
        }

        let prefixed = self
            .codes
            .iter()
            .map(|code| (Prefix::Code, code))
            .chain(self.keys.iter().map(|key| (Prefix::Key, key)))
            .map(|(prefix, value)| format!("{}{}{}", prefix.name(), reserved::PREFIX_END, value))
            .collect::<Vec<_>>();

        f.write_str(&prefixed.join("|"))
    }
}

/// One classified token of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedKey {
    Trigger(Trigger),
    Modifier(&'static [ModifierProp]),
    AnyModifiers,
}

/// A single validated key combination.
///
/// `modifier_groups` holds one entry per modifier token, in the order they were
/// written. A group is satisfied by any one of its properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPattern {
    pub trigger: Trigger,
    pub modifier_groups: Vec<Vec<ModifierProp>>,
    pub allow_any_modifiers: bool,
}

impl fmt::Display for ParsedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.allow_any_modifiers {
            parts.push(ANY_MODIFIER_KEY.to_string());
        }

        for group in &self.modifier_groups {
            match MODIFIER_KEYS
                .iter()
                .find(|modifier| modifier.event_props == group.as_slice())
            {
                Some(modifier) => parts.push(modifier.definition.to_string()),
                None => parts.push(
                    group
                        .iter()
                        .map(ModifierProp::event_prop)
                        .collect::<Vec<_>>()
                        .join("|"),
                ),
            }
        }

        parts.push(self.trigger.to_string());

        write!(f, "{}", parts.join(reserved::JOIN.to_string().as_str()))
    }
}

/// A parsed pattern string that keeps its source text.
///
/// Deserializes from the pattern string itself, so configuration files are
/// validated as they are read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patterns {
    source: String,
    patterns: Vec<ParsedPattern>,
}

impl Patterns {
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let patterns = parse_patterns(source)?;
        Ok(Self {
            source: source.to_string(),
            patterns,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParsedPattern> {
        self.patterns.iter()
    }

    pub fn as_slice(&self) -> &[ParsedPattern] {
        &self.patterns
    }

    pub fn matches(&self, event: &KeyEventLike) -> bool {
        match_patterns(&self.patterns, event)
    }
}

impl FromStr for Patterns {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Patterns::parse(s)
    }
}

impl<'a> IntoIterator for &'a Patterns {
    type Item = &'a ParsedPattern;
    type IntoIter = std::slice::Iter<'a, ParsedPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Patterns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alternatives = self
            .patterns
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        write!(f, "{}", alternatives.join(reserved::DIVISION.to_string().as_str()))
    }
}

impl Serialize for Patterns {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for Patterns {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Patterns::parse(&s).map_err(serde::de::Error::custom)
    }
}
