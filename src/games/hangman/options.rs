use serde::{Deserialize, Serialize};

/// How the masked word is laid out on screen.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStyle {
    /// `ki_i`
    Compact,
    /// `k i _ i`
    #[default]
    Spaced,
    /// spaced, with the letter keys underneath
    Keyboard,
}

impl GameStyle {
    /// A style given on the command line beats the one from config.
    pub fn parse(cli: Option<Self>, config: Self) -> Self {
        cli.unwrap_or(config)
    }
}
