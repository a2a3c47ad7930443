//! The command AST.
//!
//! A matched source line becomes one of a closed set of command kinds,
//! each carrying only the fields its rendering needs. The emitter matches
//! over this exhaustively, so adding a command kind is a
//! compile-time-checked change.

/// Rotation direction for `turn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// One matched source command, argument extracted and validated, ready
/// for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `print <text>` — the text is never empty.
    Print { text: String },
    /// `ask [prompt]` — the prompt may be empty.
    Ask { prompt: String },
    /// `echo [prefix]` — prints the captured answer, optionally prefixed
    /// by literal text.
    Echo { prefix: Option<String> },
    /// `forward [distance]` — `Some` holds a validated non-negative
    /// numeric token; `None` falls back to the level's default distance.
    Forward { distance: Option<String> },
    /// `turn [direction]`.
    Turn { direction: Direction },
}

impl Command {
    /// `true` for commands that capture console input.
    pub fn captures_input(&self) -> bool {
        matches!(self, Self::Ask { .. })
    }

    /// `true` for commands that are only valid after an input capture on
    /// an earlier line.
    pub fn needs_prior_input(&self) -> bool {
        matches!(self, Self::Echo { .. })
    }
}
