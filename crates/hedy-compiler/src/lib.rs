//! Hedy compiler: orchestrates the full transpile pipeline.
//!
//! ```text
//! Hedy source → lines → lexical check → command match → state check → Python
//! ```
//!
//! The compiler is pure and stateless across calls: each invocation takes
//! a program and a level and returns a [`CompileResult`] or a classified
//! [`HedyError`]. The level registry is process-wide and read-only, so
//! concurrent compiles need no coordination.

mod pipeline;

use serde::{Deserialize, Serialize};

pub use hedy_levels::MAX_LEVEL;
pub use hedy_types::{Command, CompileResult, Direction, HedyError};

/// Compile a Hedy program at the given level.
///
/// This is the primary entry point: the returned code honors the full
/// generated-code contract and may be handed to an execution environment
/// unmodified.
pub fn compile(source: &str, level: u32) -> Result<CompileResult, HedyError> {
    compile_inner(source, level)
}

/// Compile a Hedy program for result inspection.
///
/// Same computation and result shape as [`compile`], but intended for
/// callers that only inspect the bundle — typically a cheap
/// [`CompileResult::uses_graphics`] check — rather than for delivering
/// runnable code downstream.
pub fn compile_inner(source: &str, level: u32) -> Result<CompileResult, HedyError> {
    pipeline::transpile(source, level)
}

/// The structured output consumed by embedders (e.g. the WASM boundary).
///
/// Exactly one of `code`/`uses_graphics` (on success) or `error` (on
/// failure) is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_graphics: Option<bool>,
    /// `{ "error_code": ..., "arguments": { ... } }` when `success` is
    /// false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

/// Compile and fold either outcome into the embedder-facing shape.
pub fn compile_to_result(source: &str, level: u32) -> CompileOutput {
    match compile(source, level) {
        Ok(result) => CompileOutput {
            success: true,
            code: Some(result.code),
            uses_graphics: Some(result.uses_graphics),
            error: None,
        },
        Err(err) => CompileOutput {
            success: false,
            code: None,
            uses_graphics: None,
            error: Some(err.to_json()),
        },
    }
}
