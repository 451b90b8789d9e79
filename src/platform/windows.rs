use std::io::{self, Write};
use std::process::{Command, Stdio};

use super::Platform;
use crate::process::{DetachedChild, LaunchMode, LaunchOutcome, ProcessError, Termination};

/// `std::process` backend; Windows has no fork.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsPlatform;

impl WindowsPlatform {
    pub fn new() -> Self {
        WindowsPlatform
    }
}

impl Platform for WindowsPlatform {
    fn home_var(&self) -> &'static str {
        "USERPROFILE"
    }

    fn clear_screen(&self, out: &mut dyn Write) -> io::Result<()> {
        out.flush()?;
        Command::new("cmd").args(["/C", "cls"]).status().map(|_| ())
    }

    fn spawn_process(
        &self,
        argv: &[String],
        mode: LaunchMode,
    ) -> Result<LaunchOutcome, ProcessError> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| ProcessError::InvalidArgument("empty argument list".to_string()))?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    ProcessError::CommandNotFound {
                        program: program.clone(),
                        source: e,
                    }
                } else {
                    ProcessError::Spawn(e)
                }
            })?;

        match mode {
            LaunchMode::Foreground => {
                let status = child.wait().map_err(ProcessError::Wait)?;
                Ok(LaunchOutcome::Completed(Termination::Exited(
                    status.code().unwrap_or(-1),
                )))
            }
            LaunchMode::Background => Ok(LaunchOutcome::Detached(DetachedChild::from_child(child))),
        }
    }
}
