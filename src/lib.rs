pub mod console;
pub mod core;
pub mod error;
pub mod flags;
pub mod highlight;
pub mod history;
pub mod logging;
pub mod platform;
pub mod process;
pub mod shell;

#[cfg(test)]
pub(crate) mod test_support;
