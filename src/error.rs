use crate::core::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Flag error: {0}")]
    FlagError(String),
    #[error("Ctrl-C error: {0}")]
    CtrlC(#[from] ctrlc::Error),
}
