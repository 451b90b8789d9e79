use std::ffi::CString;
use std::io::{self, Write};
use std::ptr;

use libc::{c_char, c_int, pid_t};

use super::Platform;
use crate::process::{signal, DetachedChild, LaunchMode, LaunchOutcome, ProcessError, Termination};

const CLEAR_SEQUENCE: &str = "\x1b[H\x1b[J";

/// fork/execvp/waitpid backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixPlatform;

impl UnixPlatform {
    pub fn new() -> Self {
        UnixPlatform
    }
}

impl Platform for UnixPlatform {
    fn home_var(&self) -> &'static str {
        "HOME"
    }

    fn clear_screen(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(CLEAR_SEQUENCE.as_bytes())?;
        out.flush()
    }

    fn spawn_process(
        &self,
        argv: &[String],
        mode: LaunchMode,
    ) -> Result<LaunchOutcome, ProcessError> {
        let program = argv
            .first()
            .ok_or_else(|| ProcessError::InvalidArgument("empty argument list".to_string()))?;

        // Everything the child touches is allocated before forking.
        let c_args = argv
            .iter()
            .map(|arg| CString::new(arg.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ProcessError::InvalidArgument(format!("{}: contains a NUL byte", program)))?;
        let mut c_argv: Vec<*const c_char> = c_args.iter().map(|arg| arg.as_ptr()).collect();
        c_argv.push(ptr::null());
        let failure_prefix = CString::new(format!("Command not found: {}", program))
            .map_err(|_| ProcessError::InvalidArgument(program.clone()))?;

        // SAFETY: the child only calls async-signal-tolerant libc functions
        // before it either execs or exits.
        match unsafe { libc::fork() } {
            -1 => Err(ProcessError::Spawn(io::Error::last_os_error())),
            0 => exec_child(&c_argv, &failure_prefix),
            pid => match mode {
                LaunchMode::Foreground => wait_foreground(pid).map(LaunchOutcome::Completed),
                LaunchMode::Background => {
                    Ok(LaunchOutcome::Detached(DetachedChild::new(pid as u32)))
                }
            },
        }
    }
}

/// Child side of the fork. Never returns into shell code.
fn exec_child(argv: &[*const c_char], failure_prefix: &CString) -> ! {
    signal::restore_default_handlers();
    // SAFETY: argv is a NULL-terminated array of pointers into CStrings that
    // outlive this call; on exec failure we report through stderr and _exit
    // without running any destructors or atexit handlers.
    unsafe {
        libc::execvp(argv[0], argv.as_ptr());
        libc::perror(failure_prefix.as_ptr());
        libc::_exit(libc::EXIT_FAILURE)
    }
}

/// Block until the child exits or is killed. Stops are waited through.
fn wait_foreground(pid: pid_t) -> Result<Termination, ProcessError> {
    let mut status: c_int = 0;
    loop {
        // SAFETY: waitpid only writes through the status pointer we own.
        if unsafe { libc::waitpid(pid, &mut status, libc::WUNTRACED) } == -1 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(ProcessError::Wait(err));
        }

        if libc::WIFEXITED(status) || libc::WIFSIGNALED(status) {
            return Ok(Termination::from_wait_status(status));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn completed(outcome: LaunchOutcome) -> Option<Termination> {
        match outcome {
            LaunchOutcome::Completed(termination) => Some(termination),
            LaunchOutcome::Detached(_) => None,
        }
    }

    #[test]
    fn test_foreground_exit_codes() -> Result<(), ProcessError> {
        let platform = UnixPlatform::new();

        let outcome = platform.spawn_process(&argv(&["true"]), LaunchMode::Foreground)?;
        assert_eq!(completed(outcome), Some(Termination::Exited(0)));

        let outcome = platform.spawn_process(&argv(&["false"]), LaunchMode::Foreground)?;
        assert_eq!(completed(outcome), Some(Termination::Exited(1)));
        Ok(())
    }

    #[test]
    fn test_foreground_passes_arguments() -> Result<(), ProcessError> {
        let platform = UnixPlatform::new();
        let outcome =
            platform.spawn_process(&argv(&["sh", "-c", "exit 7"]), LaunchMode::Foreground)?;
        assert_eq!(completed(outcome), Some(Termination::Exited(7)));
        Ok(())
    }

    #[test]
    fn test_foreground_reports_signal() -> Result<(), ProcessError> {
        let platform = UnixPlatform::new();
        let outcome =
            platform.spawn_process(&argv(&["sh", "-c", "kill -9 $$"]), LaunchMode::Foreground)?;
        assert_eq!(completed(outcome), Some(Termination::Signaled(libc::SIGKILL)));
        Ok(())
    }

    #[test]
    fn test_missing_program_child_exits_with_failure() -> Result<(), ProcessError> {
        let platform = UnixPlatform::new();
        let outcome =
            platform.spawn_process(&argv(&["nonexistent_cmd_xyz"]), LaunchMode::Foreground)?;
        assert_eq!(completed(outcome), Some(Termination::Exited(libc::EXIT_FAILURE)));
        Ok(())
    }

    #[test]
    fn test_background_returns_immediately() -> Result<(), ProcessError> {
        let platform = UnixPlatform::new();
        let started = Instant::now();
        let outcome = platform.spawn_process(&argv(&["sleep", "0.2"]), LaunchMode::Background)?;
        assert!(started.elapsed() < Duration::from_millis(200));

        let LaunchOutcome::Detached(mut child) = outcome else {
            panic!("background launch should detach");
        };
        assert!(child.pid() > 0);

        let deadline = Instant::now() + Duration::from_secs(5);
        let termination = loop {
            if let Some(termination) = child.try_reap()? {
                break termination;
            }
            assert!(Instant::now() < deadline, "background child never finished");
            thread::sleep(Duration::from_millis(20));
        };
        assert!(termination.success());
        Ok(())
    }

    #[test]
    fn test_nul_byte_is_rejected_before_fork() {
        let platform = UnixPlatform::new();
        let result = platform.spawn_process(&argv(&["echo", "a\0b"]), LaunchMode::Foreground);
        assert!(matches!(result, Err(ProcessError::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_argv_is_rejected() {
        let platform = UnixPlatform::new();
        let result = platform.spawn_process(&[], LaunchMode::Foreground);
        assert!(matches!(result, Err(ProcessError::InvalidArgument(_))));
    }

    #[test]
    fn test_clear_screen_writes_ansi_codes() -> io::Result<()> {
        let mut out = Vec::new();
        UnixPlatform::new().clear_screen(&mut out)?;
        assert_eq!(out, b"\x1b[H\x1b[J");
        Ok(())
    }

    #[test]
    fn test_home_var() {
        assert_eq!(UnixPlatform::new().home_var(), "HOME");
    }
}
