use std::io;

pub mod launcher;
#[cfg(unix)]
pub mod signal;

pub use launcher::ProcessLauncher;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Command not found: {program}: {source}")]
    CommandNotFound { program: String, source: io::Error },
    #[error("fork: {0}")]
    Spawn(io::Error),
    #[error("waitpid: {0}")]
    Wait(io::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Whether the shell blocks on a launched program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Foreground,
    Background,
}

impl LaunchMode {
    pub fn from_background(background: bool) -> Self {
        if background {
            LaunchMode::Background
        } else {
            LaunchMode::Foreground
        }
    }
}

/// How a waited-on child finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    Signaled(i32),
}

impl Termination {
    /// Decode a raw `waitpid` status.
    #[cfg(unix)]
    pub fn from_wait_status(status: libc::c_int) -> Self {
        if libc::WIFSIGNALED(status) {
            Termination::Signaled(libc::WTERMSIG(status))
        } else {
            Termination::Exited(libc::WEXITSTATUS(status))
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, Termination::Exited(0))
    }
}

#[derive(Debug)]
pub enum LaunchOutcome {
    Completed(Termination),
    Detached(DetachedChild),
}

/// A background child the shell chose not to wait for.
///
/// Dropping this does not reap the child. On Unix an exited background
/// child stays a zombie until the shell itself exits; `try_reap` is the
/// hook for a caller that wants to collect it.
#[derive(Debug)]
pub struct DetachedChild {
    pid: u32,
    #[cfg(windows)]
    child: Option<std::process::Child>,
}

impl DetachedChild {
    pub(crate) fn new(pid: u32) -> Self {
        DetachedChild {
            pid,
            #[cfg(windows)]
            child: None,
        }
    }

    #[cfg(windows)]
    pub(crate) fn from_child(child: std::process::Child) -> Self {
        DetachedChild {
            pid: child.id(),
            child: Some(child),
        }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Collect the child if it has already finished, without blocking.
    #[cfg(unix)]
    pub fn try_reap(&mut self) -> Result<Option<Termination>, ProcessError> {
        let mut status: libc::c_int = 0;
        // SAFETY: waitpid only writes through the status pointer we own.
        let reaped = unsafe { libc::waitpid(self.pid as libc::pid_t, &mut status, libc::WNOHANG) };
        match reaped {
            0 => Ok(None),
            -1 => Err(ProcessError::Wait(io::Error::last_os_error())),
            _ => Ok(Some(Termination::from_wait_status(status))),
        }
    }

    #[cfg(windows)]
    pub fn try_reap(&mut self) -> Result<Option<Termination>, ProcessError> {
        let Some(child) = self.child.as_mut() else {
            return Ok(None);
        };
        let status = child.try_wait().map_err(ProcessError::Wait)?;
        Ok(status.map(|status| Termination::Exited(status.code().unwrap_or(-1))))
    }
}
