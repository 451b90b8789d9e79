use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use tracing::debug;

mod cd;
mod clear;
mod exit;
mod history;
mod pwd;

pub use cd::CdCommand;
pub use clear::ClearCommand;
pub use exit::ExitCommand;
pub use history::HistoryCommand;
pub use pwd::PwdCommand;

use super::state::ShellState;
use super::Flow;
use crate::console::Console;
use crate::platform::Platform;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cd: {}: {}", .path.display(), .source)]
    ChangeDirectory { path: PathBuf, source: io::Error },
    #[error("getcwd: {0}")]
    RefreshDirectory(io::Error),
    #[error("pwd: {0}")]
    QueryDirectory(io::Error),
    #[error("clear: {0}")]
    ClearScreen(io::Error),
    #[error(transparent)]
    Output(#[from] io::Error),
}

/// Everything a built-in is allowed to touch.
pub struct CommandContext<'a> {
    pub platform: &'a dyn Platform,
    pub state: &'a mut ShellState,
    pub console: &'a mut Console,
}

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
pub enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Pwd(PwdCommand),
    History(HistoryCommand),
    Clear(ClearCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Exit(cmd) => cmd.execute(args, ctx),
            CommandType::Pwd(cmd) => cmd.execute(args, ctx),
            CommandType::History(cmd) => cmd.execute(args, ctx),
            CommandType::Clear(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// The closed set of commands the shell runs itself.
#[derive(Clone)]
pub struct Builtins {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for Builtins {
    fn default() -> Self {
        Self::new()
    }
}

impl Builtins {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("pwd", CommandType::Pwd(PwdCommand::new()));
        commands.insert("history", CommandType::History(HistoryCommand::new()));
        commands.insert("clear", CommandType::Clear(ClearCommand::new()));

        Builtins { commands }
    }

    /// Exact-name lookup; anything not found here is an external program.
    pub fn get(&self, name: &str) -> Option<&CommandType> {
        self.commands.get(name)
    }

    /// Run a built-in and report its failure, if any, on the console.
    ///
    /// Only a broken console surfaces as an error; everything else is
    /// printed and the shell carries on.
    pub fn run(
        &self,
        command: &CommandType,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> io::Result<Flow> {
        match command.execute(args, ctx) {
            Ok(flow) => Ok(flow),
            Err(CommandError::Output(e)) => Err(e),
            Err(e) => {
                debug!(error = %e, "built-in failed");
                writeln!(ctx.console.err(), "{}", e)?;
                Ok(Flow::Continue)
            }
        }
    }
}
