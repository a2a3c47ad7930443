//! Shared types for the Hedy transpiler.
//!
//! This crate defines the source line model, the command AST, the compile
//! result bundle, and the classified error type used across all stages.

mod command;
mod error;
mod line;
mod result;

pub use command::{Command, Direction};
pub use error::HedyError;
pub use line::Line;
pub use result::CompileResult;

/// Result type used throughout the Hedy transpiler.
pub type Result<T> = std::result::Result<T, HedyError>;
