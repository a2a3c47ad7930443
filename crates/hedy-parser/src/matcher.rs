//! Command matching and argument extraction.

use hedy_levels::{CommandDef, CommandKind, LevelDef};
use hedy_types::{Command, Direction, HedyError, Line, Result};

use crate::suggest::closest_keyword;

/// Match one line against the level's active command set.
///
/// Blank lines match nothing and return `Ok(None)`. The leading word (up
/// to the first space) is looked up exactly and case-sensitively;
/// trailing punctuation is not stripped first, so `word.` is just an
/// unknown word.
pub fn match_line(line: &Line, level: &LevelDef) -> Result<Option<Command>> {
    if line.is_blank() {
        return Ok(None);
    }

    let (word, remainder) = match line.trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trimmed.as_str(), ""),
    };

    let Some(def) = level.command(word) else {
        return Err(HedyError::InvalidCommand {
            invalid_command: word.to_string(),
            guessed_command: closest_keyword(word, level.keywords()).map(str::to_string),
            level: level.level,
        });
    };

    let argument = extract_argument(def, remainder)?;
    Ok(Some(build_command(def.kind, argument)))
}

/// Separate the argument from the remainder of the line.
///
/// Only trailing whitespace is trimmed; spaces beyond the first separating
/// one belong to the argument verbatim, so `print  x` keeps the second
/// space.
fn extract_argument(def: &CommandDef, remainder: &str) -> Result<String> {
    let argument = remainder.trim_end();
    if def.needs_argument && argument.trim().is_empty() {
        return Err(HedyError::IncompleteCommand {
            incomplete_command: def.keyword.to_string(),
        });
    }
    Ok(argument.to_string())
}

fn build_command(kind: CommandKind, argument: String) -> Command {
    match kind {
        CommandKind::Print => Command::Print { text: argument },
        CommandKind::Ask => Command::Ask { prompt: argument },
        CommandKind::Echo => Command::Echo {
            prefix: (!argument.is_empty()).then_some(argument),
        },
        CommandKind::Forward => Command::Forward {
            distance: numeric_token(&argument),
        },
        CommandKind::Turn => Command::Turn {
            direction: if argument == "left" {
                Direction::Left
            } else {
                Direction::Right
            },
        },
    }
}

/// Accept the argument as a motion distance only when it parses as a
/// finite, non-negative number. The trimmed token is kept verbatim so the
/// emitted code reproduces the source spelling.
fn numeric_token(argument: &str) -> Option<String> {
    let token = argument.trim();
    let value: f64 = token.parse().ok()?;
    (value.is_finite() && value >= 0.0).then(|| token.to_string())
}
