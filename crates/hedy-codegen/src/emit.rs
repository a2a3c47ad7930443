//! Statement emission: matched commands to Python statements.

use hedy_levels::RenderConfig;
use hedy_types::{Command, CompileResult, Direction};

use crate::escape::escape_single_quoted;

/// Accumulates emitted statements and program-wide side-flags for one
/// compile call.
///
/// Statement order equals source line order; a single command may
/// contribute more than one statement (motion commands append their own
/// pause).
#[derive(Debug)]
pub struct Emitter<'a> {
    render: &'a RenderConfig,
    statements: Vec<String>,
    uses_graphics: bool,
}

impl<'a> Emitter<'a> {
    /// Create an emitter using one level's rendering configuration.
    pub fn new(render: &'a RenderConfig) -> Self {
        Self {
            render,
            statements: Vec::new(),
            uses_graphics: false,
        }
    }

    /// Emit the statement(s) for one command.
    pub fn emit(&mut self, command: &Command) {
        match command {
            Command::Print { text } => {
                self.statements
                    .push(format!("print('{}')", escape_single_quoted(text)));
            }
            Command::Ask { prompt } => {
                self.statements.push(format!(
                    "{} = input('{}')",
                    self.render.input_variable,
                    escape_single_quoted(prompt)
                ));
            }
            Command::Echo { prefix } => {
                let statement = match prefix {
                    Some(prefix) => format!(
                        "print('{}'+{})",
                        escape_single_quoted(prefix),
                        self.render.input_variable
                    ),
                    None => format!("print({})", self.render.input_variable),
                };
                self.statements.push(statement);
            }
            Command::Forward { distance } => {
                let distance = distance
                    .clone()
                    .unwrap_or_else(|| self.render.default_forward_distance.to_string());
                self.statements.push(format!("t.forward({distance})"));
                self.statements
                    .push(format!("time.sleep({})", self.render.forward_pause_seconds));
                self.uses_graphics = true;
            }
            Command::Turn { direction } => {
                let call = match direction {
                    Direction::Left => "left",
                    Direction::Right => "right",
                };
                self.statements
                    .push(format!("t.{call}({})", self.render.turn_angle));
                self.uses_graphics = true;
            }
        }
    }

    /// Join everything emitted so far into the final result bundle.
    pub fn finish(self) -> CompileResult {
        CompileResult::new(self.statements.join("\n"), self.uses_graphics)
    }
}
