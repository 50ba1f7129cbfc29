use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::event::{KeyCode, KeyModifiers};
use crossterm::terminal;
use skeys::events::{EventHandler, InputEvent};
use skeys::{Config, KeyEventLike, ModifierProp, Patterns, logger};
use std::io::{self, BufRead, Write};
use std::panic;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "skeys", version, about = "Validate and try keyboard shortcut patterns")]
struct Cli {
    /// Config file [default: ~/.skeys/config.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true, default_value = logger::DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a pattern string and print each alternative
    Check { patterns: String },
    /// Read JSON key events from stdin, one per line, and print what each one triggers
    Match,
    /// Show the shortcuts triggered by key presses in this terminal (Ctrl+C quits)
    Watch,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Enable better panic messages
    better_panic::install();

    let cli = Cli::parse();
    logger::setup_log(&cli.log_file)?;

    match cli.command {
        Command::Check { patterns } => Ok(check(&patterns)),
        Command::Match => {
            let config = load_config(cli.config.as_deref())?;
            match_lines(&config, io::stdin().lock(), io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Watch => {
            let config = load_config(cli.config.as_deref())?;
            watch(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Config::load_default(),
    }
}

fn check(patterns: &str) -> ExitCode {
    match Patterns::parse(patterns) {
        Ok(parsed) if parsed.is_empty() => {
            println!("No patterns, the shortcut is disabled.");
            ExitCode::SUCCESS
        }
        Ok(parsed) => {
            for pattern in &parsed {
                println!("{pattern}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::warn!("Rejected pattern {:?}: {}", patterns, err);
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn match_lines(config: &Config, input: impl BufRead, mut output: impl Write) -> Result<()> {
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event: KeyEventLike = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(err) => {
                log::warn!("Skipping invalid key event on line {}: {}", index + 1, err);
                eprintln!("line {}: invalid key event: {}", index + 1, err);
                continue;
            }
        };
        let dispatch = config.dispatch(&event);
        log::debug!("{:?} -> {:?}", event, dispatch);

        serde_json::to_writer(&mut output, &dispatch)?;
        writeln!(output)?;
    }

    Ok(())
}

async fn watch(config: &Config) -> Result<()> {
    panic::set_hook(Box::new(|info| {
        _ = terminal::disable_raw_mode();
        eprintln!("{}", info);
    }));

    terminal::enable_raw_mode()?;
    let result = watch_keys(config).await;

    // Always restore the terminal, even if the loop failed
    if let Err(e) = terminal::disable_raw_mode() {
        eprintln!("Error cleaning up terminal: {}", e);
    }

    result
}

async fn watch_keys(config: &Config) -> Result<()> {
    let mut stdout = io::stdout();
    let mut events = EventHandler::new();

    write!(stdout, "Press keys to try your shortcuts, Ctrl+C to quit.\r\n")?;
    stdout.flush()?;

    loop {
        match events.next().await? {
            InputEvent::Key(key) => {
                if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
                    break;
                }

                let event = KeyEventLike::from(key);
                let dispatch = config.dispatch(&event);
                log::info!("{} -> {:?}", describe(&event), dispatch.matched);

                let matched = if dispatch.matched.is_empty() {
                    "-".to_string()
                } else {
                    dispatch.matched.join(", ")
                };
                let note = if dispatch.disable_default {
                    " (page default disabled)"
                } else {
                    ""
                };
                write!(stdout, "{:<32} {}{}\r\n", describe(&event), matched, note)?;
                stdout.flush()?;
            }
            InputEvent::Closed => break,
            InputEvent::None => {}
        }
    }

    Ok(())
}

fn describe(event: &KeyEventLike) -> String {
    let mut parts: Vec<&str> = ModifierProp::ALL
        .iter()
        .filter(|prop| event.is_held(**prop))
        .map(|prop| match prop {
            ModifierProp::Shift => "Shift",
            ModifierProp::Alt => "Alt",
            ModifierProp::Ctrl => "Control",
            ModifierProp::Meta => "Meta",
        })
        .collect();
    parts.push(&event.code);
    format!("{} ({:?})", parts.join("+"), event.key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        [shortcuts.mute]
        patterns = "M"
    "#;

    #[test]
    fn test_match_lines_skips_invalid_events() {
        let config: Config = toml::from_str(CONFIG).unwrap();
        let input = "not json\n\n{\"code\":\"KeyM\",\"key\":\"m\"}\n{\"code\":1}\n";
        let mut output = Vec::new();

        match_lines(&config, input.as_bytes(), &mut output).unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["matched"], serde_json::json!(["mute"]));
    }
}
