use std::io::{self, IsTerminal, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use crate::{
    core::{config::ShellConfig, ExecutionCore, Flow},
    error::ShellError,
    highlight::SyntaxHighlighter,
};

const BANNER: &str = "Welcome to Simple Shell!\nType 'exit' to quit.\n";

/// Interactive front end: reads lines and hands them to the execution core.
pub struct Shell {
    editor: DefaultEditor,
    core: ExecutionCore,
    highlighter: SyntaxHighlighter,
    config: ShellConfig,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let editor = DefaultEditor::new()?;
        let core = ExecutionCore::native(&config);
        // No colour codes when output is piped or redirected.
        let highlighter = if io::stdout().is_terminal() {
            SyntaxHighlighter::new()
        } else {
            SyntaxHighlighter::plain()
        };

        // The foreground child takes the interrupt; the shell stays up.
        ctrlc::set_handler(move || {
            println!();
        })?;

        Ok(Shell {
            editor,
            core,
            highlighter,
            config,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        debug!(config = ?self.config, "starting shell");
        if !self.config.quiet {
            if let Err(e) = writeln!(io::stdout(), "{}", BANNER) {
                warn!(error = %e, "couldn't print banner");
            }
        }

        loop {
            let prompt = format!(
                "{} ",
                self.highlighter
                    .highlight_prompt(&format!("shell:{}$", self.core.current_dir()))
            );

            let flow = match self.editor.readline(&prompt) {
                Ok(line) => {
                    if !line.is_empty() {
                        if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                            warn!(error = %e, "couldn't add line to editor history");
                        }
                    }
                    self.core.execute(&line)
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => self.core.end_of_input(),
                Err(e) => return Err(e.into()),
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) => eprintln!("{}", self.highlighter.highlight_error(&e.to_string())),
            }
        }
    }
}
