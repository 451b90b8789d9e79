use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::history::History;
use crate::platform::Platform;

/// The shell's idea of where it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkingDir {
    Known(PathBuf),
    Unknown,
}

impl WorkingDir {
    pub fn path(&self) -> Option<&Path> {
        match self {
            WorkingDir::Known(path) => Some(path),
            WorkingDir::Unknown => None,
        }
    }
}

impl fmt::Display for WorkingDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkingDir::Known(path) => write!(f, "{}", path.display()),
            WorkingDir::Unknown => write!(f, "unknown"),
        }
    }
}

/// Per-session mutable state: history and the cached working directory.
#[derive(Debug, Clone)]
pub struct ShellState {
    current_dir: WorkingDir,
    history: History,
}

impl ShellState {
    pub fn new(platform: &dyn Platform, history_capacity: usize) -> Self {
        let current_dir = platform
            .query_directory()
            .map(WorkingDir::Known)
            .unwrap_or(WorkingDir::Unknown);

        ShellState {
            current_dir,
            history: History::new(history_capacity),
        }
    }

    pub fn current_dir(&self) -> &WorkingDir {
        &self.current_dir
    }

    /// Re-read the working directory from the OS.
    ///
    /// On failure the previous value is kept.
    pub fn refresh_current_dir(&mut self, platform: &dyn Platform) -> io::Result<PathBuf> {
        let dir = platform.query_directory()?;
        self.current_dir = WorkingDir::Known(dir.clone());
        Ok(dir)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }
}
