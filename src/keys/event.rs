use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::keys::tables::ModifierProp;

const UNIDENTIFIED_KEY: &str = "Unidentified";

/// The part of a keyboard event the matcher looks at.
///
/// Field names follow the DOM `KeyboardEvent` when serialized, so events
/// captured in a browser can be fed in as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEventLike {
    pub code: String,
    pub key: String,
    #[serde(default)]
    pub shift_key: bool,
    #[serde(default)]
    pub alt_key: bool,
    #[serde(default)]
    pub ctrl_key: bool,
    #[serde(default)]
    pub meta_key: bool,
}

impl KeyEventLike {
    pub fn new(code: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    pub fn is_held(&self, prop: ModifierProp) -> bool {
        match prop {
            ModifierProp::Shift => self.shift_key,
            ModifierProp::Alt => self.alt_key,
            ModifierProp::Ctrl => self.ctrl_key,
            ModifierProp::Meta => self.meta_key,
        }
    }
}

// US layout position of a printable character, and whether it needs Shift
fn char_code(c: char) -> Option<(String, bool)> {
    if c.is_ascii_alphabetic() {
        return Some((format!("Key{}", c.to_ascii_uppercase()), c.is_ascii_uppercase()));
    }

    if c.is_ascii_digit() {
        return Some((format!("Digit{c}"), false));
    }

    let (code, shifted) = match c {
        ' ' => ("Space", false),
        '`' => ("Backquote", false),
        '~' => ("Backquote", true),
        '\\' => ("Backslash", false),
        '|' => ("Backslash", true),
        '[' => ("BracketLeft", false),
        '{' => ("BracketLeft", true),
        ']' => ("BracketRight", false),
        '}' => ("BracketRight", true),
        ',' => ("Comma", false),
        '<' => ("Comma", true),
        '=' => ("Equal", false),
        '+' => ("Equal", true),
        '-' => ("Minus", false),
        '_' => ("Minus", true),
        '.' => ("Period", false),
        '>' => ("Period", true),
        '\'' => ("Quote", false),
        '"' => ("Quote", true),
        ';' => ("Semicolon", false),
        ':' => ("Semicolon", true),
        '/' => ("Slash", false),
        '?' => ("Slash", true),
        '!' => ("Digit1", true),
        '@' => ("Digit2", true),
        '#' => ("Digit3", true),
        '$' => ("Digit4", true),
        '%' => ("Digit5", true),
        '^' => ("Digit6", true),
        '&' => ("Digit7", true),
        '*' => ("Digit8", true),
        '(' => ("Digit9", true),
        ')' => ("Digit0", true),
        _ => return None,
    };
    Some((code.to_string(), shifted))
}

fn named(name: &str) -> (String, String) {
    (name.to_string(), name.to_string())
}

impl From<CrosstermKeyEvent> for KeyEventLike {
    fn from(event: CrosstermKeyEvent) -> Self {
        let mut shift_key = event.modifiers.contains(KeyModifiers::SHIFT);

        let (code, key) = match event.code {
            // Terminals often report shifted characters without the SHIFT flag
            KeyCode::Char(c) => match char_code(c) {
                Some((code, shifted)) => {
                    shift_key |= shifted;
                    (code, c.to_string())
                }
                None => (String::new(), c.to_string()),
            },
            KeyCode::Enter => named("Enter"),
            KeyCode::Tab => named("Tab"),
            KeyCode::BackTab => {
                shift_key = true;
                named("Tab")
            }
            KeyCode::Backspace => named("Backspace"),
            KeyCode::Delete => named("Delete"),
            KeyCode::Insert => named("Insert"),
            KeyCode::Esc => named("Escape"),
            KeyCode::Left => named("ArrowLeft"),
            KeyCode::Right => named("ArrowRight"),
            KeyCode::Up => named("ArrowUp"),
            KeyCode::Down => named("ArrowDown"),
            KeyCode::Home => named("Home"),
            KeyCode::End => named("End"),
            KeyCode::PageUp => named("PageUp"),
            KeyCode::PageDown => named("PageDown"),
            KeyCode::F(n) => named(&format!("F{n}")),
            _ => (String::new(), UNIDENTIFIED_KEY.to_string()),
        };

        Self {
            code,
            key,
            shift_key,
            alt_key: event.modifiers.contains(KeyModifiers::ALT),
            ctrl_key: event.modifiers.contains(KeyModifiers::CONTROL),
            meta_key: event.modifiers.contains(KeyModifiers::SUPER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(code: KeyCode, modifiers: KeyModifiers) -> KeyEventLike {
        CrosstermKeyEvent::new(code, modifiers).into()
    }

    #[test]
    fn test_letters_map_to_key_codes() {
        let event = convert(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(event, KeyEventLike::new("KeyK", "k").with_ctrl());

        let event = convert(KeyCode::Char('K'), KeyModifiers::SHIFT);
        assert_eq!(event, KeyEventLike::new("KeyK", "K").with_shift());
    }

    #[test]
    fn test_symbols_map_to_us_layout_codes() {
        assert_eq!(convert(KeyCode::Char('5'), KeyModifiers::NONE).code, "Digit5");
        assert_eq!(convert(KeyCode::Char('%'), KeyModifiers::SHIFT).code, "Digit5");
        assert_eq!(convert(KeyCode::Char('?'), KeyModifiers::SHIFT).code, "Slash");
        assert_eq!(convert(KeyCode::Char(' '), KeyModifiers::NONE).code, "Space");
        assert_eq!(convert(KeyCode::Char('é'), KeyModifiers::NONE).code, "");
    }

    #[test]
    fn test_shifted_characters_without_shift_flag() {
        let percent = convert(KeyCode::Char('%'), KeyModifiers::NONE);
        assert_eq!(percent, KeyEventLike::new("Digit5", "%").with_shift());
        assert!(crate::keys::Patterns::parse("Shift+5").unwrap().matches(&percent));
        assert!(!crate::keys::Patterns::parse("5").unwrap().matches(&percent));

        let upper = convert(KeyCode::Char('Q'), KeyModifiers::NONE);
        assert_eq!(upper, KeyEventLike::new("KeyQ", "Q").with_shift());

        let question = convert(KeyCode::Char('?'), KeyModifiers::CONTROL);
        assert_eq!(question, KeyEventLike::new("Slash", "?").with_shift().with_ctrl());

        assert!(!convert(KeyCode::Char('/'), KeyModifiers::NONE).shift_key);
        assert!(!convert(KeyCode::Char('q'), KeyModifiers::NONE).shift_key);
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            convert(KeyCode::Esc, KeyModifiers::NONE),
            KeyEventLike::new("Escape", "Escape")
        );
        assert_eq!(convert(KeyCode::Up, KeyModifiers::NONE).code, "ArrowUp");
        assert_eq!(convert(KeyCode::F(12), KeyModifiers::NONE).code, "F12");
        assert_eq!(
            convert(KeyCode::BackTab, KeyModifiers::NONE),
            KeyEventLike::new("Tab", "Tab").with_shift()
        );
        assert_eq!(
            convert(KeyCode::CapsLock, KeyModifiers::NONE),
            KeyEventLike::new("", "Unidentified")
        );
    }

    #[test]
    fn test_super_is_meta() {
        let event = convert(KeyCode::Char('a'), KeyModifiers::SUPER | KeyModifiers::ALT);
        assert!(event.meta_key);
        assert!(event.alt_key);
        assert!(!event.ctrl_key);
    }

    #[test]
    fn test_json_uses_dom_names() {
        let event: KeyEventLike =
            serde_json::from_str(r#"{"code":"KeyJ","key":"j","ctrlKey":true}"#).unwrap();
        assert_eq!(event, KeyEventLike::new("KeyJ", "j").with_ctrl());

        let json = serde_json::to_value(KeyEventLike::new("Space", " ").with_meta()).unwrap();
        assert_eq!(json["metaKey"], true);
        assert_eq!(json["shiftKey"], false);
    }
}
