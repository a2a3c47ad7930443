//! Per-line front end of the Hedy transpiler.
//!
//! The facade applies these stages to each line, in order:
//! 1. line splitting, with the global empty-program check ([`split_lines`])
//! 2. lexical validation of leading whitespace ([`check_leading_space`])
//! 3. command matching and argument extraction into a
//!    [`hedy_types::Command`] ([`match_line`])

mod lines;
mod matcher;
mod suggest;

pub use lines::{check_leading_space, split_lines};
pub use matcher::match_line;
