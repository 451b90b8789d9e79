use std::path::PathBuf;

use tracing::debug;

use super::{Command, CommandContext, CommandError};
use crate::core::Flow;

/// `cd [dir]`: with no argument, go to the home directory.
///
/// The cached working directory is re-read from the OS afterwards whether
/// or not the change went through.
#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<Flow, CommandError> {
        let target = match args.first() {
            Some(path) => Some(PathBuf::from(path)),
            None => ctx.platform.home_dir(),
        };

        let changed = match &target {
            Some(path) => ctx
                .platform
                .change_directory(path)
                .map_err(|source| CommandError::ChangeDirectory {
                    path: path.clone(),
                    source,
                }),
            None => {
                debug!(var = ctx.platform.home_var(), "home directory not set, staying put");
                Ok(())
            }
        };

        let refreshed = ctx.state.refresh_current_dir(ctx.platform);

        match (changed, refreshed) {
            (Ok(()), Ok(_)) => Ok(Flow::Continue),
            (Ok(()), Err(e)) => Err(CommandError::RefreshDirectory(e)),
            (Err(change), Ok(_)) => Err(change),
            (Err(change), Err(refresh)) => {
                debug!(error = %refresh, "could not re-read working directory");
                writeln!(ctx.console.err(), "{}", change)?;
                Err(CommandError::RefreshDirectory(refresh))
            }
        }
    }
}
