//! Python code emission for the Hedy transpiler.
//!
//! Turns matched commands into Python statement text, byte-stable for
//! identical input, and tracks the program-wide side-flags contributed
//! along the way.

mod emit;
mod escape;

pub use emit::Emitter;
pub use escape::escape_single_quoted;
