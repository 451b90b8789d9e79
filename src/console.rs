use std::io::{self, Write};

/// Where user-visible text goes.
///
/// Regular output (paths, listings, notices) and diagnostics are kept on
/// separate streams. Child processes never write through this; they
/// inherit the real stdio.
pub struct Console {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Console {
    pub fn new(out: impl Write + 'static, err: impl Write + 'static) -> Self {
        Console {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    /// Console bound to the process's stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    pub fn out(&mut self) -> &mut dyn Write {
        self.out.as_mut()
    }

    pub fn err(&mut self) -> &mut dyn Write {
        self.err.as_mut()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdio()
    }
}
