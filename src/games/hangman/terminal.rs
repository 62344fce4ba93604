use std::{
    fmt,
    io::{self, BufRead, Write},
    str::FromStr,
};

use rand::Rng;
use thiserror::Error;
use thisslime::TracingError;
use tracing::{debug, info, instrument};

use super::{
    controller::{Controller, Renderer, SubmitError},
    core::{Letter, ParseLetterError},
    state::Status,
    view::{AsText, View},
    GameStyle, WordsList,
};

const HELP: &str = "\
type a letter to guess it
  :state <key>  show target_word, correct_guesses, incorrect_guesses, guesses_remaining or status
  :new          start a new game
  :quit         exit";

/// Writes every view to a terminal.
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    out: W,
    style: GameStyle,
    placeholder: char,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, style: GameStyle, placeholder: char) -> Self {
        Self {
            out,
            style,
            placeholder,
        }
    }

    pub fn say(&mut self, message: impl fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }

    fn prompt(&mut self, status: Status) -> io::Result<()> {
        if status.is_finished() {
            writeln!(self.out, "type :new to play again or :quit to exit")?;
        } else {
            write!(self.out, "guess a letter: ")?;
        }

        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, view: &View) -> Result<(), Self::Error> {
        let text = view.text_with_style(self.style, self.placeholder);
        writeln!(self.out, "\n{text}\n")?;
        self.out.flush()
    }
}

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(Letter),
    State(String),
    New,
    Quit,
    Help,
    Nothing,
}

#[derive(Debug, Error, TracingError, PartialEq, Eq)]
#[event(level = DEBUG)]
pub enum ParseCommandError {
    #[error(transparent)]
    Letter(#[from] ParseLetterError),

    #[error("unknown command `:{0}`, try :help")]
    Unknown(String),

    #[error("`:state` needs a key, try :help")]
    MissingKey,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let Some(command) = s.strip_prefix(':') else {
            return if s.is_empty() {
                Ok(Self::Nothing)
            } else {
                Ok(Self::Guess(s.parse()?))
            };
        };

        let mut words = command.split_whitespace();
        match words.next() {
            Some("state") => words
                .next()
                .map(|key| Self::State(key.to_owned()))
                .ok_or(ParseCommandError::MissingKey),
            Some("new") => Ok(Self::New),
            Some("quit" | "q" | "exit") => Ok(Self::Quit),
            Some("help" | "h" | "?") => Ok(Self::Help),
            other => Err(ParseCommandError::Unknown(other.unwrap_or_default().to_owned())),
        }
    }
}

/// Games finished during one run of the program.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub won: usize,
    pub lost: usize,
    pub abandoned: usize,
}

impl Tally {
    fn record(&mut self, status: Status) {
        match status {
            Status::Won => self.won += 1,
            Status::Lost => self.lost += 1,
            Status::Playing => self.abandoned += 1,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "won {}, lost {}", self.won, self.lost)?;

        if self.abandoned > 0 {
            write!(f, ", abandoned {}", self.abandoned)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub max_guesses: u8,
    pub style: GameStyle,
    pub placeholder: char,
}

/// Reads commands from `input` until `:quit` or end of input.
///
/// Lines that aren't valid UTF-8 are read lossily and rejected like any other
/// bad guess.
#[instrument(skip_all, fields(style = ?settings.style))]
pub fn play<I: BufRead, O: Write>(
    mut input: I,
    output: O,
    words: &WordsList,
    settings: Settings,
    rng: &mut impl Rng,
) -> io::Result<Tally> {
    let renderer = TerminalRenderer::new(output, settings.style, settings.placeholder);
    let mut game = Controller::random(words, settings.max_guesses, rng, renderer)?;
    let mut tally = Tally::default();
    let mut line = Vec::new();

    loop {
        let status = game.status();
        game.renderer_mut().prompt(status)?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            debug!("end of input");
            game.renderer_mut().say("")?;
            break;
        }

        match String::from_utf8_lossy(&line).parse::<Command>() {
            Ok(Command::Guess(letter)) => match game.submit_guess(letter) {
                Ok(outcome) if outcome.status().is_finished() => tally.record(outcome.status()),
                Ok(_) => (),
                Err(SubmitError::Guess(err)) => {
                    err.trace();
                    game.renderer_mut().say(&err)?;
                }
                Err(SubmitError::Render(err)) => return Err(err),
            },
            Ok(Command::State(key)) => {
                let message = match game.state().lookup(&key) {
                    Ok(value) => format!("{key} = {value}"),
                    Err(err) => {
                        err.trace();
                        err.to_string()
                    }
                };
                game.renderer_mut().say(message)?;
            }
            Ok(Command::New) => {
                if !status.is_finished() {
                    tally.record(status);
                }

                info!("starting a new game");
                let renderer = game.into_renderer();
                game = Controller::random(words, settings.max_guesses, rng, renderer)?;
            }
            Ok(Command::Quit) => break,
            Ok(Command::Help) => game.renderer_mut().say(HELP)?,
            Ok(Command::Nothing) => (),
            Err(err) => {
                err.trace();
                game.renderer_mut().say(&err)?;
            }
        }
    }

    let status = game.status();
    if !status.is_finished() {
        tally.record(status);
    }

    info!(%tally, "finished playing");
    game.renderer_mut().say(format!("thanks for playing! {tally}"))?;

    Ok(tally)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use tracing_test::traced_test;

    use super::{play, Command, ParseCommandError, Settings, Tally, TerminalRenderer};
    use crate::games::hangman::{
        controller::Controller, core::Letter, state::DEFAULT_MAX_GUESSES, GameStyle, WordsList,
    };

    fn settings() -> Settings {
        Settings {
            max_guesses: DEFAULT_MAX_GUESSES,
            style: GameStyle::Compact,
            placeholder: '_',
        }
    }

    fn run(words: &[&str], input: &str) -> (Tally, String) {
        run_bytes(words, input.as_bytes())
    }

    fn run_bytes(words: &[&str], input: &[u8]) -> (Tally, String) {
        let words = WordsList::parse(words).unwrap();
        let mut output = Vec::new();
        let tally = play(
            input,
            &mut output,
            &words,
            settings(),
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();

        (tally, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            "K".parse::<Command>(),
            Ok(Command::Guess(Letter::try_from('k').unwrap()))
        );
        assert_eq!(
            ":state status".parse::<Command>(),
            Ok(Command::State("status".to_owned()))
        );
        assert_eq!(":new".parse::<Command>(), Ok(Command::New));
        assert_eq!(" :q ".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("".parse::<Command>(), Ok(Command::Nothing));
        assert_eq!(":state".parse::<Command>(), Err(ParseCommandError::MissingKey));
        assert_eq!(
            ":dance".parse::<Command>(),
            Err(ParseCommandError::Unknown("dance".to_owned()))
        );
        assert!(matches!(
            "42".parse::<Command>(),
            Err(ParseCommandError::Letter(_))
        ));
    }

    #[test]
    fn renderer_writes_views() {
        let mut out = Vec::new();
        let renderer = TerminalRenderer::new(&mut out, GameStyle::Spaced, '*');
        let game = Controller::new("pear".parse().unwrap(), 5, renderer).unwrap();
        drop(game);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("* * * *\nguesses remaining: 5"));
    }

    #[test]
    #[traced_test]
    fn plays_a_winning_game() {
        let (tally, output) = run(&["kiwi"], "k\nz\ni\nw\n:quit\n");

        assert_eq!(tally, Tally { won: 1, lost: 0, abandoned: 0 });
        assert!(output.contains("k___\nguesses remaining: 5"));
        assert!(output.contains("ki_i\nguesses remaining: 4"));
        assert!(output.contains("you win! the word was: kiwi"));
        assert!(output.contains("thanks for playing! won 1, lost 0"));
    }

    #[test]
    fn plays_a_losing_game() {
        let (tally, output) = run(&["pear"], "x\ny\nz\nq\nj\n");

        assert_eq!(tally.lost, 1);
        assert!(output.contains("you lose! the word was: pear"));
    }

    #[test]
    fn mistakes_are_reported_not_fatal() {
        let (tally, output) = run(&["kiwi"], "x\nx\n7\n:state nope\n:state incorrect_guesses\n");

        assert!(output.contains("you already guessed `x`"));
        assert!(output.contains("`7` is not a letter from a to z"));
        assert!(output.contains("unknown state key `nope`"));
        assert!(output.contains("incorrect_guesses = [x]"));
        assert!(output.contains("guesses remaining: 4"));
        assert!(!output.contains("guesses remaining: 3"));
        assert_eq!(tally.abandoned, 1);
    }

    #[test]
    fn invalid_utf8_is_reported_not_fatal() {
        let (tally, output) = run_bytes(&["kiwi"], b"k\n\xff\nz\n:quit\n");

        assert!(output.contains("k___\nguesses remaining: 5"));
        assert!(output.contains("`\u{FFFD}` is not a letter from a to z"));
        assert!(output.contains("k___\nguesses remaining: 4"));
        assert!(output.contains("thanks for playing!"));
        assert_eq!(tally.abandoned, 1);
    }

    #[test]
    fn guessing_after_game_over_is_refused() {
        let (_, output) = run(&["kiwi"], "k\ni\nw\na\n");

        assert!(output.contains("the game is over, the word was `kiwi`"));
    }

    #[test]
    fn new_game_starts_fresh() {
        let (tally, output) = run(&["kiwi"], "z\n:new\n:state incorrect_guesses\n:quit\n");

        assert!(output.contains("incorrect_guesses = []"));
        assert_eq!(tally.abandoned, 2);
    }
}
