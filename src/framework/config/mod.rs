mod app;
use std::{ops::Deref, path::Path};

pub use app::AppConfig as Config;

pub mod env;
pub use env::Environment;

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("problem loading environment: {0}")]
    Env(#[from] env::Error),

    #[error("problem loading config file: {0}")]
    App(#[from] app::Error),
}

#[derive(Debug, Clone)]
pub struct ConfigSetup {
    pub app: Config,
    pub env: Environment,
}

impl ConfigSetup {
    #[tracing::instrument(skip_all, name = "config")]
    pub fn load(cli_path: Option<&Path>) -> Result<Self, Error> {
        let env = Environment::load(cli_path)?;
        let app = Config::load(&env)?;

        Ok(Self { app, env })
    }

    pub fn config_file(&self) -> &Path {
        self.env.config_file()
    }

    pub fn finish(self) -> Config {
        self.app
    }
}

impl Deref for ConfigSetup {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.app
    }
}
