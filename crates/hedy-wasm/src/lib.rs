//! Hedy transpiler as a WASM module for browser environments.
//!
//! This crate exposes the compilation pipeline via `wasm-bindgen`,
//! suitable for running in a browser Web Worker.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { compile } from 'hedy-wasm';
//!
//! await init();
//!
//! const result = JSON.parse(compile("print Hallo", 1));
//! // { success: true, code: "print('Hallo')", uses_graphics: false }
//! ```

use wasm_bindgen::prelude::*;

/// Compile a Hedy program to Python.
///
/// Returns a JSON string containing a `CompileOutput`:
/// ```json
/// { "success": true, "code": "print('Hallo')", "uses_graphics": false }
/// ```
///
/// On failure, `success` is `false` and `error` carries the classified
/// error as `{ "error_code": ..., "arguments": { ... } }` for the host to
/// localize.
#[wasm_bindgen]
pub fn compile(source: &str, level: u32) -> String {
    let output = hedy_compiler::compile_to_result(source, level);
    serde_json::to_string(&output).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"error":{{"error_code":"Serialization","arguments":{{"message":"{}"}}}}}}"#,
            e
        )
    })
}

/// `true` if the program drives the turtle, without handing back code.
///
/// Cheaper for hosts that only need to decide whether to show a canvas;
/// rejected programs report `false`.
#[wasm_bindgen]
pub fn uses_graphics(source: &str, level: u32) -> bool {
    hedy_compiler::compile_inner(source, level)
        .map(|result| result.uses_graphics)
        .unwrap_or(false)
}

/// Return the transpiler version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_returns_success_json() {
        let json: serde_json::Value = serde_json::from_str(&compile("print Hallo", 1)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["code"], "print('Hallo')");
        assert_eq!(json["uses_graphics"], false);
    }

    #[test]
    fn test_compile_returns_error_json() {
        let json: serde_json::Value = serde_json::from_str(&compile("groen", 1)).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["error_code"], "Invalid");
    }

    #[test]
    fn test_uses_graphics_probe() {
        assert!(uses_graphics("forward 50", 1));
        assert!(!uses_graphics("print Hallo", 1));
        assert!(!uses_graphics("groen", 1));
    }
}
