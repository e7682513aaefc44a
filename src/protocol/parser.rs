//! Controller command parser.
//!
//! Parses the line commands that drive a headless viewer session into
//! structured `Command` variants for the main loop to dispatch on.

use std::path::PathBuf;

/// A parsed controller command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load a map file.
    Map { path: PathBuf },

    /// Load a moves file against the current map.
    Moves { path: PathBuf },

    Next,
    Prev,
    Reset,

    /// Jump to a step.
    Seek { step: usize },

    /// Toggle autoplay.
    Play,

    /// One autoplay timer tick.
    Tick,

    /// Report scores at the current step.
    Scores,

    /// Report attributed edges at the current step.
    Edges,

    /// Report which controls are enabled.
    Controls,

    /// Set a viewer option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Synchronization ping; replies `readyok`.
    IsReady,

    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "next" => Some(Command::Next),
        "prev" => Some(Command::Prev),
        "reset" => Some(Command::Reset),
        "play" => Some(Command::Play),
        "tick" => Some(Command::Tick),
        "scores" => Some(Command::Scores),
        "edges" => Some(Command::Edges),
        "controls" => Some(Command::Controls),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),

        "map" => parse_path(tokens[0], trimmed).map(|path| Command::Map { path }),
        "moves" => parse_path(tokens[0], trimmed).map(|path| Command::Moves { path }),
        "seek" => parse_seek(&tokens),
        "setoption" => parse_setoption(&tokens),

        other => {
            tracing::warn!("unknown command: {}", other);
            None
        }
    }
}

/// Everything after the keyword is the path, so paths may contain spaces.
fn parse_path(keyword: &str, line: &str) -> Option<PathBuf> {
    let rest = line[keyword.len()..].trim();
    if rest.is_empty() {
        tracing::warn!("malformed {}: expected '{} <path>'", keyword, keyword);
        return None;
    }
    Some(PathBuf::from(rest))
}

/// Parses `seek <n>`.
fn parse_seek(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        tracing::warn!("malformed seek: expected 'seek <step>'");
        return None;
    }
    match tokens[1].parse::<usize>() {
        Ok(step) => Some(Command::Seek { step }),
        Err(_) => {
            tracing::warn!("invalid seek step: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        tracing::warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                tracing::warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("next"), Some(Command::Next));
        assert_eq!(parse_command("  prev  "), Some(Command::Prev));
        assert_eq!(parse_command("reset"), Some(Command::Reset));
        assert_eq!(parse_command("play"), Some(Command::Play));
        assert_eq!(parse_command("tick"), Some(Command::Tick));
        assert_eq!(parse_command("scores"), Some(Command::Scores));
        assert_eq!(parse_command("edges"), Some(Command::Edges));
        assert_eq!(parse_command("controls"), Some(Command::Controls));
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_empty_and_unknown() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("dance"), None);
    }

    #[test]
    fn parse_paths_keep_spaces() {
        assert_eq!(
            parse_command("map maps/sample.json"),
            Some(Command::Map { path: PathBuf::from("maps/sample.json") })
        );
        assert_eq!(
            parse_command("moves my games/game 1.json"),
            Some(Command::Moves { path: PathBuf::from("my games/game 1.json") })
        );
        assert_eq!(parse_command("map"), None);
    }

    #[test]
    fn parse_seek_step() {
        assert_eq!(parse_command("seek 12"), Some(Command::Seek { step: 12 }));
        assert_eq!(parse_command("seek"), None);
        assert_eq!(parse_command("seek -1"), None);
        assert_eq!(parse_command("seek abc"), None);
    }

    #[test]
    fn parse_setoption_with_value() {
        assert_eq!(
            parse_command("setoption name ParallelOffset value 4"),
            Some(Command::SetOption {
                name: "ParallelOffset".to_string(),
                value: Some("4".to_string()),
            })
        );
    }

    #[test]
    fn parse_setoption_without_value() {
        assert_eq!(
            parse_command("setoption name ViewportWidth"),
            Some(Command::SetOption { name: "ViewportWidth".to_string(), value: None })
        );
        assert_eq!(parse_command("setoption ViewportWidth"), None);
        assert_eq!(parse_command("setoption name value 3"), None);
    }
}
