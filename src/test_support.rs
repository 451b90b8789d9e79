//! In-memory stand-ins for the OS, used by unit tests across the crate.

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::console::Console;
use crate::platform::Platform;
use crate::process::{DetachedChild, LaunchMode, LaunchOutcome, ProcessError, Termination};

#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A console whose two streams can be read back.
pub fn buffered_console() -> (Console, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::default();
    let err = SharedBuffer::default();
    (Console::new(out.clone(), err.clone()), out, err)
}

/// A sink whose reader has gone away.
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

/// A console whose regular output always fails; diagnostics can be read back.
pub fn broken_console() -> (Console, SharedBuffer) {
    let err = SharedBuffer::default();
    (Console::new(BrokenPipe, err.clone()), err)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ChangeDirectory(PathBuf),
    ClearScreen,
    Spawn(Vec<String>, LaunchMode),
}

#[derive(Default)]
struct FakeState {
    cwd: Option<PathBuf>,
    home: Option<PathBuf>,
    dirs: Vec<PathBuf>,
    missing: Vec<String>,
    next_pid: u32,
    fail_queries: bool,
    calls: Vec<Call>,
}

/// Records every call and simulates a tiny filesystem of known directories.
#[derive(Clone, Default)]
pub struct FakePlatform {
    state: Rc<RefCell<FakeState>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        let platform = Self::default();
        platform.state.borrow_mut().next_pid = 1000;
        platform
    }

    pub fn with_cwd(self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        {
            let mut state = self.state.borrow_mut();
            state.dirs.push(dir.clone());
            state.cwd = Some(dir);
        }
        self
    }

    pub fn with_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.state.borrow_mut().dirs.push(dir.into());
        self
    }

    pub fn with_home(self, dir: impl Into<PathBuf>) -> Self {
        self.state.borrow_mut().home = Some(dir.into());
        self
    }

    pub fn with_missing_program(self, program: &str) -> Self {
        self.state.borrow_mut().missing.push(program.to_string());
        self
    }

    pub fn with_next_pid(self, pid: u32) -> Self {
        self.state.borrow_mut().next_pid = pid;
        self
    }

    /// Move the "OS" directory without going through the shell.
    pub fn set_cwd(&self, dir: impl Into<PathBuf>) {
        self.state.borrow_mut().cwd = Some(dir.into());
    }

    pub fn cwd(&self) -> Option<PathBuf> {
        self.state.borrow().cwd.clone()
    }

    pub fn fail_directory_queries(&self) {
        self.state.borrow_mut().fail_queries = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }
}

impl Platform for FakePlatform {
    fn home_var(&self) -> &'static str {
        "HOME"
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.state.borrow().home.clone()
    }

    fn change_directory(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::ChangeDirectory(path.to_path_buf()));

        let target = match &state.cwd {
            Some(cwd) if path.is_relative() => cwd.join(path),
            _ => path.to_path_buf(),
        };
        if state.dirs.contains(&target) {
            state.cwd = Some(target);
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            ))
        }
    }

    fn query_directory(&self) -> io::Result<PathBuf> {
        let state = self.state.borrow();
        if state.fail_queries {
            return Err(io::Error::new(io::ErrorKind::NotFound, "directory vanished"));
        }
        state
            .cwd
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no working directory"))
    }

    fn clear_screen(&self, out: &mut dyn Write) -> io::Result<()> {
        self.state.borrow_mut().calls.push(Call::ClearScreen);
        out.write_all(b"<clear>")
    }

    fn spawn_process(
        &self,
        argv: &[String],
        mode: LaunchMode,
    ) -> Result<LaunchOutcome, ProcessError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Spawn(argv.to_vec(), mode));

        let program = argv
            .first()
            .ok_or_else(|| ProcessError::InvalidArgument("empty argument list".to_string()))?;
        if state.missing.contains(program) {
            return Err(ProcessError::CommandNotFound {
                program: program.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            });
        }

        match mode {
            LaunchMode::Foreground => Ok(LaunchOutcome::Completed(Termination::Exited(0))),
            LaunchMode::Background => {
                let pid = state.next_pid;
                state.next_pid += 1;
                Ok(LaunchOutcome::Detached(DetachedChild::new(pid)))
            }
        }
    }
}
