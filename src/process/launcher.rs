use std::io;

use tracing::{debug, warn};

use super::{LaunchMode, LaunchOutcome, Termination};
use crate::console::Console;
use crate::platform::Platform;

/// Runs external programs on behalf of the executor and reports what
/// happened to the console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        ProcessLauncher
    }

    /// Launch `argv` in the given mode.
    ///
    /// Launch failures are reported here and swallowed. The only error that
    /// escapes is a failure to write to the console itself.
    pub fn launch(
        &self,
        platform: &dyn Platform,
        console: &mut Console,
        argv: &[String],
        mode: LaunchMode,
    ) -> io::Result<()> {
        // Anything still buffered would otherwise interleave with the child.
        if let Err(e) = console.flush() {
            warn!(error = %e, "couldn't flush console before launch");
        }

        let program = argv.first().map(String::as_str).unwrap_or_default();
        match platform.spawn_process(argv, mode) {
            Ok(LaunchOutcome::Completed(termination)) => {
                match termination {
                    Termination::Exited(code) => debug!(program, code, "process exited"),
                    Termination::Signaled(signal) => {
                        debug!(program, signal, "process killed by signal")
                    }
                }
                Ok(())
            }
            Ok(LaunchOutcome::Detached(child)) => {
                writeln!(console.out(), "[Background PID: {}]", child.pid())?;
                debug!(program, pid = child.pid(), "process detached");
                // Not reaped: the child is left to finish on its own.
                drop(child);
                Ok(())
            }
            Err(e) => {
                writeln!(console.err(), "{}", e)?;
                debug!(program, error = %e, "launch failed");
                Ok(())
            }
        }
    }
}
