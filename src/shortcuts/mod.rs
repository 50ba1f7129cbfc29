//! Named shortcuts and the patterns that trigger them.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::keys::{KeyEventLike, Patterns};

/// A single configurable shortcut.
///
/// Anything besides `patterns` is kept as action options, e.g. the number of
/// seconds a seek shortcut jumps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortcutItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Patterns>,
    #[serde(flatten)]
    pub options: toml::Table,
}

impl ShortcutItem {
    pub fn new(patterns: Patterns) -> Self {
        Self {
            patterns: Some(patterns),
            options: toml::Table::new(),
        }
    }

    /// Missing or empty patterns disable the shortcut.
    pub fn is_enabled(&self) -> bool {
        self.patterns.as_ref().is_some_and(|patterns| !patterns.is_empty())
    }

    pub fn matches(&self, event: &KeyEventLike) -> bool {
        self.patterns
            .as_ref()
            .is_some_and(|patterns| patterns.matches(event))
    }

    pub fn option<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        match self.options.get(name) {
            Some(value) => Ok(Some(value.clone().try_into()?)),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShortcutMap(BTreeMap<String, ShortcutItem>);

impl ShortcutMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, item: ShortcutItem) {
        self.0.insert(name.into(), item);
    }

    pub fn get(&self, name: &str) -> Option<&ShortcutItem> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn enabled(&self) -> impl Iterator<Item = (&str, &ShortcutItem)> {
        self.0
            .iter()
            .filter(|(_, item)| item.is_enabled())
            .map(|(name, item)| (name.as_str(), item))
    }

    /// Names of the shortcuts triggered by `event`, in name order.
    pub fn matching<'a>(&'a self, event: &'a KeyEventLike) -> impl Iterator<Item = &'a str> {
        self.enabled()
            .filter(move |(_, item)| item.matches(event))
            .map(|(name, _)| name)
    }
}

impl<'de> Deserialize<'de> for ShortcutMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, toml::Value>::deserialize(deserializer)?;
        let mut shortcuts = BTreeMap::new();

        for (name, value) in raw {
            let item: ShortcutItem = value.try_into().map_err(|err| {
                serde::de::Error::custom(format!("shortcut \"{name}\": {err}"))
            })?;
            shortcuts.insert(name, item);
        }

        Ok(Self(shortcuts))
    }
}

/// What should happen to a key event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispatch {
    /// Shortcuts to run.
    pub matched: Vec<String>,
    /// The event belongs to a shortcut and should not reach its default action.
    pub prevent_default: bool,
    /// The host page's own handlers for this key should be skipped.
    pub disable_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORTCUTS: &str = r#"
        [play_or_pause]
        patterns = "K, Space"

        [seek_backward]
        patterns = "J, ArrowLeft"
        seconds = 10

        [mute]
        patterns = ""

        [fullscreen]
    "#;

    #[test]
    fn test_deserialize_shortcuts() {
        let shortcuts: ShortcutMap = toml::from_str(SHORTCUTS).unwrap();
        assert_eq!(shortcuts.len(), 4);

        let enabled: Vec<_> = shortcuts.enabled().map(|(name, _)| name).collect();
        assert_eq!(enabled, vec!["play_or_pause", "seek_backward"]);

        let seek = shortcuts.get("seek_backward").unwrap();
        assert_eq!(seek.option::<u32>("seconds").unwrap(), Some(10));
        assert_eq!(seek.option::<u32>("missing").unwrap(), None);
        assert!(seek.option::<String>("seconds").is_err());
    }

    #[test]
    fn test_matching_by_name() {
        let shortcuts: ShortcutMap = toml::from_str(SHORTCUTS).unwrap();

        let space = KeyEventLike::new("Space", " ");
        assert_eq!(shortcuts.matching(&space).collect::<Vec<_>>(), vec!["play_or_pause"]);

        let left = KeyEventLike::new("ArrowLeft", "ArrowLeft");
        assert_eq!(shortcuts.matching(&left).collect::<Vec<_>>(), vec!["seek_backward"]);

        let shifted = KeyEventLike::new("KeyK", "K").with_shift();
        assert_eq!(shortcuts.matching(&shifted).count(), 0);
    }

    #[test]
    fn test_invalid_pattern_names_shortcut() {
        let err = toml::from_str::<ShortcutMap>(
            r#"
            [next_section]
            patterns = "Ctrl+Shift"
            "#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("next_section"), "{message}");
        assert!(message.contains("A trigger key is required"), "{message}");
    }

    #[test]
    fn test_serialize_keeps_options() {
        let mut shortcuts = ShortcutMap::new();
        let mut item = ShortcutItem::new(Patterns::parse("Any+F").unwrap());
        item.options.insert("seconds".into(), toml::Value::Integer(5));
        shortcuts.insert("seek_forward", item);

        let text = toml::to_string(&shortcuts).unwrap();
        let reloaded: ShortcutMap = toml::from_str(&text).unwrap();
        assert_eq!(reloaded, shortcuts);
    }
}
