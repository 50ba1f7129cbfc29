use crate::keys::KeyEventLike;
use crate::shortcuts::{Dispatch, ShortcutItem, ShortcutMap};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIRECTORY: &str = ".skeys";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shortcuts: ShortcutMap,
    /// Host shortcuts to switch off while the tool is active.
    #[serde(default)]
    pub disable_default: ShortcutItem,
}

impl Config {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let string = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&string)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::info!(
            "Loaded {} shortcut(s) from {}",
            config.shortcuts.len(),
            path.display()
        );
        Ok(config)
    }

    /// Loads `~/.skeys/config.toml`, or an empty config when it does not exist.
    pub fn load_default() -> Result<Self> {
        let path = get_config_dir().join(CONFIG_FILE);
        if !path.exists() {
            log::warn!("No config file at {}, no shortcuts enabled", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn dispatch(&self, event: &KeyEventLike) -> Dispatch {
        let matched: Vec<String> = self
            .shortcuts
            .matching(event)
            .map(str::to_string)
            .collect();

        Dispatch {
            prevent_default: !matched.is_empty(),
            disable_default: self.disable_default.matches(event),
            matched,
        }
    }
}

pub fn get_config_dir() -> PathBuf {
    let home_dir = dirs::home_dir().unwrap_or_default();
    home_dir.join(CONFIG_DIRECTORY)
}
