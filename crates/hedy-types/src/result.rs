//! The compile result bundle.

use serde::{Deserialize, Serialize};

/// The successful outcome of one compile call.
///
/// Immutable once returned; the transpiler keeps no reference to it, and
/// no state survives between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileResult {
    /// Generated Python source, statements joined with `\n`.
    pub code: String,
    /// `true` if any emitted statement drives the turtle.
    pub uses_graphics: bool,
}

impl CompileResult {
    /// Bundle generated code with its side-flags.
    pub fn new(code: impl Into<String>, uses_graphics: bool) -> Self {
        Self {
            code: code.into(),
            uses_graphics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_json_round_trip() {
        let result = CompileResult::new("print('Hallo')", false);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"code\""));
        assert!(json.contains("\"uses_graphics\":false"));
        let back: CompileResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
