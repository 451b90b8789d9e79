//! Operating-system capabilities the shell needs, behind one trait.
//!
//! The executor and built-ins only ever talk to [`Platform`]; each target
//! supplies its own backend and [`NativePlatform`] names the one for the
//! current build.

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::process::{LaunchMode, LaunchOutcome, ProcessError};

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::UnixPlatform as NativePlatform;
#[cfg(windows)]
pub use windows::WindowsPlatform as NativePlatform;

pub trait Platform {
    /// Name of the environment variable holding the user's home directory.
    fn home_var(&self) -> &'static str;

    fn home_dir(&self) -> Option<PathBuf> {
        env::var_os(self.home_var()).map(PathBuf::from)
    }

    fn change_directory(&self, path: &Path) -> io::Result<()> {
        env::set_current_dir(path)
    }

    fn query_directory(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn clear_screen(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Start `argv[0]` with the remaining arguments, inheriting stdio,
    /// environment and working directory.
    fn spawn_process(&self, argv: &[String], mode: LaunchMode)
        -> Result<LaunchOutcome, ProcessError>;
}
