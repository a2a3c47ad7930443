//! The per-line transpile pipeline.

use hedy_codegen::Emitter;
use hedy_levels::registry;
use hedy_parser::{check_leading_space, match_line, split_lines};
use hedy_types::{Command, CompileResult, HedyError, Line, Result};

/// The one piece of cross-line state: whether an input-capturing command
/// has occurred on an earlier line. Set once, never reset; earlier lines
/// are never revisited.
#[derive(Debug, Default)]
struct InputTracker {
    captured: bool,
}

impl InputTracker {
    /// Validate an order-dependent command against the state so far, then
    /// fold this command's own contribution in.
    fn observe(&mut self, command: &Command, line: &Line) -> Result<()> {
        if command.needs_prior_input() && !self.captured {
            return Err(HedyError::LonelyEcho {
                line_number: line.number,
                line_text: line.trimmed.clone(),
            });
        }
        if command.captures_input() {
            self.captured = true;
        }
        Ok(())
    }
}

/// Run the full pipeline over one program.
///
/// Per line, in order: lexical validation → command matching → argument
/// extraction → cross-line state check → emission. The first violation in
/// top-to-bottom line order aborts the compile with exactly one
/// classified error; no partial result escapes.
pub(crate) fn transpile(source: &str, level: u32) -> Result<CompileResult> {
    let level_def = registry().level(level)?;
    let lines = split_lines(source)?;

    let mut tracker = InputTracker::default();
    let mut emitter = Emitter::new(&level_def.render);

    for line in &lines {
        check_leading_space(line)?;
        let Some(command) = match_line(line, level_def)? else {
            continue;
        };
        tracker.observe(&command, line)?;
        emitter.emit(&command);
    }

    Ok(emitter.finish())
}
