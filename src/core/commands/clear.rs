use super::{Command, CommandContext, CommandError};
use crate::core::Flow;

#[derive(Clone, Default)]
pub struct ClearCommand;

impl ClearCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ClearCommand {
    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        ctx.platform
            .clear_screen(ctx.console.out())
            .map_err(CommandError::ClearScreen)?;
        Ok(Flow::Continue)
    }
}
