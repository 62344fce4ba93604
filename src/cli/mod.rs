use std::path::PathBuf;

use crate::games::hangman::GameStyle;

#[derive(clap::Parser, Debug, Clone)]
#[command(version, about = "guess the word one letter at a time")]
pub struct Cli {
    /// Config file to read instead of `hangman.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub play: Play,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(clap::Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Print the configuration after files and environment are merged.
    Config,

    /// Play in the terminal (the default).
    #[default]
    Play,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct Play {
    /// Seed for picking words, for a repeatable game.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, global = true)]
    pub style: Option<GameStyle>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::{Cli, Command};
    use crate::games::hangman::GameStyle;

    #[test]
    fn plays_by_default() {
        let cli = Cli::try_parse_from(["hangman"]).unwrap();

        assert_eq!(cli.command(), Command::Play);
        assert!(cli.play.seed.is_none());
    }

    #[test]
    fn play_arguments_without_subcommand() {
        let cli = Cli::try_parse_from(["hangman", "--seed", "4", "--style", "compact"]).unwrap();

        assert_eq!(cli.command(), Command::Play);
        assert_eq!(cli.play.seed, Some(4));
        assert_eq!(cli.play.style, Some(GameStyle::Compact));
    }

    #[test]
    fn play_arguments_after_subcommand() {
        let cli =
            Cli::try_parse_from(["hangman", "play", "--seed", "9", "--style", "keyboard"]).unwrap();

        assert_eq!(cli.command(), Command::Play);
        assert_eq!(cli.play.seed, Some(9));
        assert_eq!(cli.play.style, Some(GameStyle::Keyboard));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["hangman", "config", "--config", "x.toml"]).unwrap();

        assert_eq!(cli.command(), Command::Config);
        assert_eq!(cli.config.unwrap().to_str(), Some("x.toml"));
    }
}
