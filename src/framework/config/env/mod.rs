use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use tracing::{debug, trace};

pub const CONFIG_VAR: &str = "HANGMAN_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "hangman.toml";

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
#[error("couldn't load .env file: {source}")]
#[event(level = ERROR)]
pub struct Error {
    #[from]
    #[field(print = Display)]
    source: dotenvy::Error,
}

/// Where configuration comes from, before any of it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    config_file: PathBuf,
    explicit: bool,
}

impl Environment {
    /// Loads `.env` if there is one, then works out the config file path.
    pub fn load(cli_path: Option<&Path>) -> Result<Self, Error> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(err) if err.not_found() => trace!("no .env file"),
            Err(err) => return Err(err.into()),
        }

        Ok(Self::resolve(cli_path, std::env::var_os(CONFIG_VAR)))
    }

    /// The command line beats the environment, which beats the default.
    fn resolve(cli_path: Option<&Path>, var: Option<OsString>) -> Self {
        if let Some(path) = cli_path {
            trace!(source = "cli", "using config path");
            Self::explicit(path)
        } else if let Some(var) = var {
            trace!(source = CONFIG_VAR, "using config path");
            Self::explicit(var)
        } else {
            Self {
                config_file: DEFAULT_CONFIG_FILE.into(),
                explicit: false,
            }
        }
    }

    pub(crate) fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file: path.into(),
            explicit: true,
        }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// A config file that was asked for by name has to exist.
    pub fn requires_file(&self) -> bool {
        self.explicit
    }
}
