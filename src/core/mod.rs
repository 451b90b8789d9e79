pub mod commands;
pub mod config;
pub mod executor;
pub mod parser;
pub mod state;

pub use executor::ExecutionCore;

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}
