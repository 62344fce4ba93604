use std::path::PathBuf;

use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Environment;
use crate::games::hangman::{
    state::DEFAULT_MAX_GUESSES, terminal::Settings, view::DEFAULT_PLACEHOLDER, GameStyle,
    WordsList, WordsListError, DEFAULT_WORDS,
};

pub const ENV_PREFIX: &str = "HANGMAN";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub logs: LogsConfig,
}

impl AppConfig {
    /// The config file, then `HANGMAN__SECTION__KEY` variables on top.
    pub(super) fn load(env: &Environment) -> Result<Self, Error> {
        let config: Self = ::config::Config::builder()
            .add_source(
                ::config::File::from(env.config_file())
                    .format(::config::FileFormat::Toml)
                    .required(env.requires_file()),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.game.max_guesses == 0 {
            return Err(Error::Invalid("game.max_guesses must be at least 1"));
        }

        if self.display.placeholder.is_ascii_alphabetic() {
            return Err(Error::Invalid("display.placeholder must not be a letter"));
        }

        Ok(())
    }

    pub fn settings(&self, style: Option<GameStyle>) -> Settings {
        Settings {
            max_guesses: self.game.max_guesses,
            style: GameStyle::parse(style, self.display.style),
            placeholder: self.display.placeholder,
        }
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(Error::Serialize)
    }
}

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("file read error: {0}")]
    #[event(level = ERROR)]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    #[event(level = ERROR)]
    Parse(::config::ConfigError),

    #[error("invalid config: {0}")]
    #[event(level = ERROR)]
    Invalid(&'static str),

    #[error("couldn't write config as toml: {0}")]
    #[event(level = ERROR)]
    Serialize(toml::ser::Error),
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub max_guesses: u8,
    pub words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_file: Option<PathBuf>,
}

impl GameConfig {
    /// `words_file` replaces `words` when both are set.
    pub fn words_list(&self) -> Result<WordsList, WordsListError> {
        match self.words_file {
            Some(ref path) => WordsList::load(path),
            None => WordsList::parse(&self.words),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            words: DEFAULT_WORDS.map(str::to_owned).to_vec(),
            words_file: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub style: GameStyle,
    pub placeholder: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            style: GameStyle::default(),
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogsConfig {
    pub filter: String,
    pub flavor_texts: Vec<String>,
}

impl LogsConfig {
    pub fn flavor_text(&self) -> Option<&str> {
        let flavor_text = self
            .flavor_texts
            .iter()
            .choose(&mut rand::thread_rng())
            .map(String::as_str);

        if flavor_text.is_none() {
            warn!("no flavor texts provided in config :(");
        }

        flavor_text
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            filter: "hangman=info".to_owned(),
            flavor_texts: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::{Path, PathBuf},
        sync::Mutex,
    };

    use pretty_assertions::assert_eq;

    use super::{AppConfig, Error};
    use crate::{
        framework::config::Environment,
        games::hangman::{GameStyle, DEFAULT_WORDS},
    };

    // loading reads the process environment, which the override test changes
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn load(path: impl AsRef<Path>) -> Result<AppConfig, Error> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        AppConfig::load(&Environment::explicit(path.as_ref()))
    }

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "hangman-{name}-{}.toml",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_match_the_classic_game() {
        let config = AppConfig::default();

        assert_eq!(config.game.max_guesses, 5);
        assert_eq!(config.game.words, DEFAULT_WORDS.to_vec());
        assert_eq!(config.display.placeholder, '_');
        assert_eq!(config.game.words_list().unwrap().len(), 6);
    }

    #[test]
    fn loads_partial_file() {
        let path = write_config(
            "partial",
            r#"
            [game]
            max_guesses = 7
            words = ["plum", "fig"]

            [display]
            style = "keyboard"
            "#,
        );

        let config = load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.game.max_guesses, 7);
        assert_eq!(config.game.words_list().unwrap().len(), 2);
        assert_eq!(config.display.style, GameStyle::Keyboard);
        assert_eq!(config.display.placeholder, '_');
        assert_eq!(config.logs.filter, "hangman=info");
    }

    #[test]
    fn zero_guesses_is_invalid() {
        let path = write_config("zero", "[game]\nmax_guesses = 0\n");

        let result = load(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::Invalid(_))));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(matches!(
            load("/definitely/not/hangman.toml"),
            Err(Error::Read(_))
        ));
    }

    #[test]
    fn env_vars_override_the_file() {
        let path = write_config("env", "[game]\nmax_guesses = 3\n");

        let result = {
            let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            std::env::set_var("HANGMAN__GAME__MAX_GUESSES", "7");
            std::env::set_var("HANGMAN__LOGS__FILTER", "hangman=trace");

            let result = AppConfig::load(&Environment::explicit(&path));

            std::env::remove_var("HANGMAN__GAME__MAX_GUESSES");
            std::env::remove_var("HANGMAN__LOGS__FILTER");
            result
        };
        fs::remove_file(&path).unwrap();

        let config = result.unwrap();
        assert_eq!(config.game.max_guesses, 7);
        assert_eq!(config.logs.filter, "hangman=trace");
        assert_eq!(config.game.words, DEFAULT_WORDS.to_vec());
    }

    #[test]
    fn cli_style_beats_config() {
        let config = AppConfig::default();

        assert_eq!(config.settings(None).style, GameStyle::Spaced);
        assert_eq!(
            config.settings(Some(GameStyle::Compact)).style,
            GameStyle::Compact
        );
    }

    #[test]
    fn writes_toml() {
        let toml = AppConfig::default().to_toml().unwrap();

        assert!(toml.contains("max_guesses = 5"));
        assert!(toml.contains("style = \"spaced\""));
        assert!(!toml.contains("words_file"));
    }
}
