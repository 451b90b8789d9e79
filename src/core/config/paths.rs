use std::path::PathBuf;

const RC_FILE_NAME: &str = ".simpleshrc";

/// Where the rc file lives and whether it has to exist.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: Option<PathBuf>,
    pub required: bool,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPaths {
    /// `~/.simpleshrc`, optional. Without a home directory there is no rc file.
    pub fn new() -> Self {
        ConfigPaths {
            rc_path: dirs::home_dir().map(|home| home.join(RC_FILE_NAME)),
            required: false,
        }
    }

    /// A path given on the command line, which must exist.
    pub fn explicit(path: PathBuf) -> Self {
        ConfigPaths {
            rc_path: Some(path),
            required: true,
        }
    }
}
