use super::{Command, CommandContext, CommandError};
use crate::core::Flow;

#[derive(Clone, Default)]
pub struct PwdCommand;

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let dir = ctx
            .state
            .refresh_current_dir(ctx.platform)
            .map_err(CommandError::QueryDirectory)?;
        writeln!(ctx.console.out(), "{}", dir.display())?;
        Ok(Flow::Continue)
    }
}
