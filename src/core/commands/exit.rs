use tracing::warn;

use super::{Command, CommandContext, CommandError};
use crate::core::Flow;

pub const FAREWELL: &str = "Goodbye!";

/// Says goodbye and tells the executor to stop.
///
/// Nothing after `exit` on the same line runs. The session ends even when
/// the farewell cannot be written.
#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let written = writeln!(ctx.console.out(), "{}", FAREWELL).and_then(|_| ctx.console.flush());
        if let Err(e) = written {
            warn!(error = %e, "couldn't write farewell");
        }
        Ok(Flow::Exit)
    }
}
