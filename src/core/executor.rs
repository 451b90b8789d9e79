use std::io;

use tracing::{debug, warn};

use super::commands::{Builtins, CommandContext};
use super::config::ShellConfig;
use super::parser::{self, ParsedCommand};
use super::state::{ShellState, WorkingDir};
use super::Flow;
use crate::console::Console;
use crate::error::ShellError;
use crate::history::History;
use crate::platform::{NativePlatform, Platform};
use crate::process::{LaunchMode, ProcessLauncher};

/// Entry point for every line of input.
///
/// Owns the session state and decides, per sub-command, whether a built-in
/// or an external program handles it.
pub struct ExecutionCore {
    platform: Box<dyn Platform>,
    console: Console,
    state: ShellState,
    builtins: Builtins,
    launcher: ProcessLauncher,
    max_args: usize,
}

impl ExecutionCore {
    pub fn new(config: &ShellConfig, platform: Box<dyn Platform>, console: Console) -> Self {
        let state = ShellState::new(platform.as_ref(), config.history_size);
        ExecutionCore {
            platform,
            console,
            state,
            builtins: Builtins::new(),
            launcher: ProcessLauncher::new(),
            max_args: config.max_args,
        }
    }

    /// Core wired to the real OS and stdio.
    pub fn native(config: &ShellConfig) -> Self {
        Self::new(config, Box::new(NativePlatform::new()), Console::stdio())
    }

    pub fn current_dir(&self) -> &WorkingDir {
        self.state.current_dir()
    }

    pub fn history(&self) -> &History {
        self.state.history()
    }

    /// Record and run one raw input line.
    ///
    /// Returns `Flow::Exit` once `exit` has run; later sub-commands on the
    /// same line are skipped.
    pub fn execute(&mut self, line: &str) -> Result<Flow, ShellError> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        self.state.history_mut().record(line);

        if parser::is_sequence(line) {
            return self.execute_sequence(line);
        }

        Ok(self.dispatch(line)?)
    }

    /// Input ran out: behave as if `exit` was typed, without recording it.
    pub fn end_of_input(&mut self) -> Result<Flow, ShellError> {
        if let Err(e) = writeln!(self.console.out()) {
            warn!(error = %e, "couldn't finish the prompt line");
        }
        Ok(self.dispatch("exit")?)
    }

    /// Run every sub-command even if the console breaks part way; the first
    /// console error is returned once the line is done.
    fn execute_sequence(&mut self, line: &str) -> Result<Flow, ShellError> {
        let mut first_error = None;
        for command in parser::split_sequence(line) {
            match self.dispatch(command) {
                Ok(Flow::Exit) => return Ok(Flow::Exit),
                Ok(Flow::Continue) => {}
                Err(e) => {
                    warn!(command, error = %e, "console failed during sequence");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(Flow::Continue),
        }
    }

    fn dispatch(&mut self, command: &str) -> io::Result<Flow> {
        let parsed = ParsedCommand::parse(command, self.max_args);
        let Some(program) = parsed.program() else {
            return Ok(Flow::Continue);
        };

        if let Some(builtin) = self.builtins.get(program) {
            debug!(command = program, "running built-in");
            let mut ctx = CommandContext {
                platform: self.platform.as_ref(),
                state: &mut self.state,
                console: &mut self.console,
            };
            return self.builtins.run(builtin, parsed.args(), &mut ctx);
        }

        let mode = LaunchMode::from_background(parsed.background);
        debug!(program, ?mode, "launching external program");
        self.launcher
            .launch(self.platform.as_ref(), &mut self.console, &parsed.argv, mode)?;
        Ok(Flow::Continue)
    }
}
