//! Line splitting and lexical validation.

use hedy_types::{HedyError, Line, Result};

/// Split raw program text into ordered, 1-indexed lines.
///
/// Empty lines are preserved as empty [`Line`] entries. Fails with
/// `Empty Program` when every line is empty after trimming; this check
/// spans the whole program and runs before any per-line validation.
pub fn split_lines(source: &str) -> Result<Vec<Line>> {
    let lines: Vec<Line> = source
        .split('\n')
        .enumerate()
        .map(|(i, raw)| Line::new(i as u32 + 1, raw))
        .collect();

    if lines.iter().all(Line::is_blank) {
        return Err(HedyError::EmptyProgram);
    }
    Ok(lines)
}

/// Reject a line whose raw text begins with a space.
///
/// The facade calls this per line, top to bottom, so the first offending
/// line is the one reported; later violations are never reached.
pub fn check_leading_space(line: &Line) -> Result<()> {
    if line.starts_with_space() {
        return Err(HedyError::InvalidSpace {
            line_number: line.number,
            line_text: line.trimmed.clone(),
        });
    }
    Ok(())
}
