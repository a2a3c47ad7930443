//! Classified compile errors.
//!
//! Every failed compile produces exactly one error out of a fixed
//! vocabulary of kinds. Each kind exposes a stable `error_code` string and
//! a structured argument map — the embedding front end localizes and
//! renders these; this crate never produces user-facing prose beyond a
//! terse `Display` for logs.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{json, Map, Value};
use thiserror::Error;

/// A classified transpiler error.
///
/// Raised in place of a [`CompileResult`](crate::CompileResult), never
/// alongside one. The same invalid input always yields the same kind and
/// the same arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HedyError {
    /// The entire input is blank, or only whitespace and newlines.
    #[error("empty program")]
    EmptyProgram,

    /// A line begins with a space. Carries the first offending line, top
    /// to bottom.
    #[error("line {line_number} starts with a space")]
    InvalidSpace { line_number: u32, line_text: String },

    /// The leading word of a line matches no keyword active at the
    /// requested level.
    #[error("unknown command `{invalid_command}` at level {level}")]
    InvalidCommand {
        invalid_command: String,
        /// Closest active keyword, when one is within guessing range.
        guessed_command: Option<String>,
        level: u32,
    },

    /// A recognized keyword that requires an argument has none.
    #[error("`{incomplete_command}` needs an argument")]
    IncompleteCommand { incomplete_command: String },

    /// `echo` with no input-capturing command on any earlier line.
    #[error("line {line_number}: echo without a preceding ask")]
    LonelyEcho { line_number: u32, line_text: String },

    /// The requested level has no registry entry.
    #[error("level {level} does not exist")]
    InvalidLevel { level: u32 },
}

impl HedyError {
    /// Stable, enumerable error code.
    ///
    /// These strings are the contract with embedding front ends: they act
    /// as localization keys, not as user-facing prose.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyProgram => "Empty Program",
            Self::InvalidSpace { .. } => "Invalid Space",
            Self::InvalidCommand { .. } => "Invalid",
            Self::IncompleteCommand { .. } => "Incomplete",
            Self::LonelyEcho { .. } => "Lonely Echo",
            Self::InvalidLevel { .. } => "Invalid Level",
        }
    }

    /// Structured arguments, keyed per kind.
    ///
    /// Keys are stable: `line_number` and `line_text` for the
    /// line-carrying kinds, `invalid_command` / `guessed_command` /
    /// `level` for unknown commands, `incomplete_command` for missing
    /// arguments. `guessed_command` is omitted when no keyword was close
    /// enough to guess.
    pub fn arguments(&self) -> Map<String, Value> {
        let mut args = Map::new();
        match self {
            Self::EmptyProgram => {}
            Self::InvalidSpace {
                line_number,
                line_text,
            }
            | Self::LonelyEcho {
                line_number,
                line_text,
            } => {
                args.insert("line_number".to_string(), Value::from(*line_number));
                args.insert("line_text".to_string(), Value::from(line_text.as_str()));
            }
            Self::InvalidCommand {
                invalid_command,
                guessed_command,
                level,
            } => {
                args.insert(
                    "invalid_command".to_string(),
                    Value::from(invalid_command.as_str()),
                );
                if let Some(guess) = guessed_command {
                    args.insert("guessed_command".to_string(), Value::from(guess.as_str()));
                }
                args.insert("level".to_string(), Value::from(*level));
            }
            Self::IncompleteCommand { incomplete_command } => {
                args.insert(
                    "incomplete_command".to_string(),
                    Value::from(incomplete_command.as_str()),
                );
            }
            Self::InvalidLevel { level } => {
                args.insert("level".to_string(), Value::from(*level));
            }
        }
        args
    }

    /// The full JSON shape consumed by embedders:
    /// `{ "error_code": ..., "arguments": { ... } }`.
    pub fn to_json(&self) -> Value {
        json!({
            "error_code": self.error_code(),
            "arguments": self.arguments(),
        })
    }
}

impl Serialize for HedyError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("HedyError", 2)?;
        state.serialize_field("error_code", self.error_code())?;
        state.serialize_field("arguments", &self.arguments())?;
        state.end()
    }
}
