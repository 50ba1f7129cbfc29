use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::keys::pattern::Trigger;

/// Physical key codes accepted verbatim as trigger tokens.
pub const SUPPORTED_RAW_CODES: &[&str] = &[
    // Symbols
    "Backquote",
    "Backslash",
    "BracketLeft",
    "BracketRight",
    "Comma",
    "Equal",
    "IntlBackslash",
    "IntlRo",
    "IntlYen",
    "Minus",
    "Period",
    "Quote",
    "Semicolon",
    "Slash",
    // Whitespace
    "Enter",
    "Space",
    "Tab",
    // Navigation
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowUp",
    "End",
    "Home",
    "PageDown",
    "PageUp",
    // UI
    "Escape",
    // Functions
    "F1",
    "F2",
    "F3",
    "F4",
    "F5",
    "F6",
    "F7",
    "F8",
    "F9",
    "F10",
    "F11",
    "F12",
    "F13",
    "F14",
    "F15",
    "F16",
    "F17",
    "F18",
    "F19",
    "F20",
    "F21",
    "F22",
    "F23",
    "F24",
];

/// A bare token that stands for one or more physical codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedCode {
    pub definition: String,
    pub codes: Vec<String>,
}

/// Latin letters map to their `Key*` code, digits to both the number row and the numpad.
pub static SUPPORTED_TRANSFORMED_CODES: Lazy<Vec<TransformedCode>> = Lazy::new(|| {
    let alphabet = ('A'..='Z').map(|alpha| TransformedCode {
        definition: alpha.to_string(),
        codes: vec![format!("Key{alpha}")],
    });

    let digits = (0..10).map(|digit| TransformedCode {
        definition: digit.to_string(),
        codes: vec![format!("Digit{digit}"), format!("Numpad{digit}")],
    });

    alphabet.chain(digits).collect()
});

/// The modifier properties carried by a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModifierProp {
    #[serde(rename = "shiftKey")]
    Shift,
    #[serde(rename = "altKey")]
    Alt,
    #[serde(rename = "ctrlKey")]
    Ctrl,
    #[serde(rename = "metaKey")]
    Meta,
}

impl ModifierProp {
    pub const ALL: [ModifierProp; 4] = [
        ModifierProp::Shift,
        ModifierProp::Alt,
        ModifierProp::Ctrl,
        ModifierProp::Meta,
    ];

    pub fn event_prop(&self) -> &'static str {
        match self {
            ModifierProp::Shift => "shiftKey",
            ModifierProp::Alt => "altKey",
            ModifierProp::Ctrl => "ctrlKey",
            ModifierProp::Meta => "metaKey",
        }
    }
}

impl fmt::Display for ModifierProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_prop())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierKey {
    pub definition: &'static str,
    pub event_props: &'static [ModifierProp],
}

/// `Ctrl` covers both Control and Command so one pattern works on every platform.
pub const MODIFIER_KEYS: [ModifierKey; 5] = [
    ModifierKey {
        definition: "Shift",
        event_props: &[ModifierProp::Shift],
    },
    ModifierKey {
        definition: "Alt",
        event_props: &[ModifierProp::Alt],
    },
    ModifierKey {
        definition: "Ctrl",
        event_props: &[ModifierProp::Ctrl, ModifierProp::Meta],
    },
    ModifierKey {
        definition: "MacCtrl",
        event_props: &[ModifierProp::Ctrl],
    },
    ModifierKey {
        definition: "MacCommand",
        event_props: &[ModifierProp::Meta],
    },
];

/// Escapes a token to a raw code or a raw key value, e.g. `code:Delete` or `key:Escape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Code,
    Key,
}

impl Prefix {
    pub fn name(&self) -> &'static str {
        match self {
            Prefix::Code => "code",
            Prefix::Key => "key",
        }
    }

    pub fn transform(&self, unprefixed: &str) -> Trigger {
        match self {
            Prefix::Code => Trigger::new(vec![unprefixed.to_string()], vec![]),
            Prefix::Key => Trigger::new(vec![], vec![unprefixed.to_string()]),
        }
    }
}

pub const PREFIXES: [Prefix; 2] = [Prefix::Code, Prefix::Key];

pub const ANY_MODIFIER_KEY: &str = "Any";

pub mod reserved {
    pub const JOIN: char = '+';
    pub const DIVISION: char = ',';
    pub const PREFIX_END: char = ':';
}

pub fn find_raw_code(token: &str) -> Option<&'static str> {
    SUPPORTED_RAW_CODES.iter().copied().find(|code| *code == token)
}

pub fn find_transformed_code(token: &str) -> Option<&'static TransformedCode> {
    SUPPORTED_TRANSFORMED_CODES
        .iter()
        .find(|transformed| transformed.definition == token)
}

pub fn find_modifier_key(token: &str) -> Option<&'static ModifierKey> {
    MODIFIER_KEYS.iter().find(|modifier| modifier.definition == token)
}

pub fn find_prefix(name: &str) -> Option<Prefix> {
    PREFIXES.iter().copied().find(|prefix| prefix.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_function_keys_are_listed() {
        for n in 1..=24 {
            assert!(find_raw_code(&format!("F{n}")).is_some(), "F{n} missing");
        }
        assert!(find_raw_code("F25").is_none());
    }

    #[test]
    fn test_transformed_codes() {
        assert_eq!(SUPPORTED_TRANSFORMED_CODES.len(), 36);
        assert_eq!(find_transformed_code("Q").unwrap().codes, vec!["KeyQ"]);
        assert_eq!(
            find_transformed_code("7").unwrap().codes,
            vec!["Digit7", "Numpad7"]
        );
        assert!(find_transformed_code("q").is_none());
    }

    #[test]
    fn test_bare_tokens_are_disjoint() {
        let mut seen = HashSet::new();
        let tokens = SUPPORTED_RAW_CODES
            .iter()
            .map(|code| code.to_string())
            .chain(
                SUPPORTED_TRANSFORMED_CODES
                    .iter()
                    .map(|transformed| transformed.definition.clone()),
            )
            .chain(MODIFIER_KEYS.iter().map(|modifier| modifier.definition.to_string()))
            .chain(std::iter::once(ANY_MODIFIER_KEY.to_string()));

        for token in tokens {
            assert!(seen.insert(token.clone()), "{token} appears twice");
            assert!(!token.contains(reserved::JOIN));
            assert!(!token.contains(reserved::DIVISION));
            assert!(!token.contains(reserved::PREFIX_END));
        }
    }

    #[test]
    fn test_ctrl_covers_control_and_command() {
        let ctrl = find_modifier_key("Ctrl").unwrap();
        assert_eq!(ctrl.event_props, &[ModifierProp::Ctrl, ModifierProp::Meta]);
        assert_eq!(find_modifier_key("MacCtrl").unwrap().event_props, &[ModifierProp::Ctrl]);
        assert_eq!(
            find_modifier_key("MacCommand").unwrap().event_props,
            &[ModifierProp::Meta]
        );
    }

    #[test]
    fn test_prefix_transform() {
        assert_eq!(
            find_prefix("code").unwrap().transform("Delete"),
            Trigger::new(vec!["Delete".into()], vec![])
        );
        assert_eq!(
            find_prefix("key").unwrap().transform("Escape"),
            Trigger::new(vec![], vec!["Escape".into()])
        );
        assert!(find_prefix("scan").is_none());
    }
}
