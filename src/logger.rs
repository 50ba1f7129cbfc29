use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::File;
use std::path::Path;

pub const DEFAULT_LOG_FILE: &str = "/tmp/skeys.log";

/// Logs go to a file so they never mix with terminal output.
/// `SKEYS_LOG` overrides the level, using `env_logger` filter syntax.
pub fn setup_log(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    Builder::new()
        .target(Target::Pipe(Box::new(file)))
        .filter(None, LevelFilter::Info)
        .parse_env(Env::new().filter("SKEYS_LOG"))
        .try_init()?;

    Ok(())
}
