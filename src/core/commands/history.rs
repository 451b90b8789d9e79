use super::{Command, CommandContext, CommandError};
use crate::core::Flow;

#[derive(Clone, Default)]
pub struct HistoryCommand;

impl HistoryCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HistoryCommand {
    fn execute(&self, _args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let out = ctx.console.out();
        writeln!(out, "Command History:")?;
        for (index, command) in ctx.state.history().numbered() {
            writeln!(out, "{}: {}", index, command)?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ShellState;
    use crate::test_support::{buffered_console, FakePlatform};

    #[test]
    fn test_history_listing() -> Result<(), CommandError> {
        let platform = FakePlatform::new();
        let mut state = ShellState::new(&platform, 10);
        state.history_mut().record("ls -la");
        state.history_mut().record("cd /tmp; pwd");
        let (mut console, out, _) = buffered_console();
        let mut ctx = CommandContext {
            platform: &platform,
            state: &mut state,
            console: &mut console,
        };

        HistoryCommand::new().execute(&[], &mut ctx)?;

        assert_eq!(
            out.contents(),
            "Command History:\n1: ls -la\n2: cd /tmp; pwd\n"
        );
        Ok(())
    }

    #[test]
    fn test_empty_history_prints_header_only() -> Result<(), CommandError> {
        let platform = FakePlatform::new();
        let mut state = ShellState::new(&platform, 10);
        let (mut console, out, _) = buffered_console();
        let mut ctx = CommandContext {
            platform: &platform,
            state: &mut state,
            console: &mut console,
        };

        HistoryCommand::new().execute(&[], &mut ctx)?;

        assert_eq!(out.contents(), "Command History:\n");
        Ok(())
    }
}
