use std::{fmt, str::FromStr};

use thiserror::Error;

use super::core::{Letter, Word};

pub const DEFAULT_MAX_GUESSES: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Everything one session knows. Only the controller mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target_word: Word,
    correct_guesses: Vec<Letter>,
    incorrect_guesses: Vec<Letter>,
    max_guesses: u8,
}

impl GameState {
    pub fn new(target_word: Word, max_guesses: u8) -> Self {
        Self {
            target_word,
            correct_guesses: Vec::new(),
            incorrect_guesses: Vec::new(),
            max_guesses,
        }
    }

    pub fn target_word(&self) -> &Word {
        &self.target_word
    }

    pub fn correct_guesses(&self) -> &[Letter] {
        &self.correct_guesses
    }

    pub fn incorrect_guesses(&self) -> &[Letter] {
        &self.incorrect_guesses
    }

    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.correct_guesses.contains(&letter) || self.incorrect_guesses.contains(&letter)
    }

    pub fn guesses_remaining(&self) -> usize {
        usize::from(self.max_guesses).saturating_sub(self.incorrect_guesses.len())
    }

    /// Lost is checked before Won.
    pub fn status(&self) -> Status {
        if self.guesses_remaining() == 0 {
            Status::Lost
        } else if self.correct_guesses.len() == self.target_word.count_unique() {
            Status::Won
        } else {
            Status::Playing
        }
    }

    /// Files the letter under correct or incorrect and reports which.
    /// Does not check for repeats; the controller does that.
    pub(super) fn record(&mut self, letter: Letter) -> bool {
        if self.target_word.contains(letter) {
            self.correct_guesses.push(letter);
            true
        } else {
            self.incorrect_guesses.push(letter);
            false
        }
    }

    pub fn get(&self, key: StateKey) -> StateValue {
        match key {
            StateKey::TargetWord => StateValue::Word(self.target_word().clone()),
            StateKey::CorrectGuesses => StateValue::Letters(self.correct_guesses().to_vec()),
            StateKey::IncorrectGuesses => StateValue::Letters(self.incorrect_guesses().to_vec()),
            StateKey::GuessesRemaining => StateValue::Count(self.guesses_remaining()),
            StateKey::Status => StateValue::Status(self.status()),
        }
    }

    /// Looks a field up by name, for the `:state` command.
    pub fn lookup(&self, key: &str) -> Result<StateValue, UnknownStateKey> {
        key.parse().map(|key| self.get(key))
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        target_word: Word,
        correct_guesses: Vec<Letter>,
        incorrect_guesses: Vec<Letter>,
        max_guesses: u8,
    ) -> Self {
        Self {
            target_word,
            correct_guesses,
            incorrect_guesses,
            max_guesses,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKey {
    TargetWord,
    CorrectGuesses,
    IncorrectGuesses,
    GuessesRemaining,
    Status,
}

impl StateKey {
    pub const ALL: [Self; 5] = [
        Self::TargetWord,
        Self::CorrectGuesses,
        Self::IncorrectGuesses,
        Self::GuessesRemaining,
        Self::Status,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::TargetWord => "target_word",
            Self::CorrectGuesses => "correct_guesses",
            Self::IncorrectGuesses => "incorrect_guesses",
            Self::GuessesRemaining => "guesses_remaining",
            Self::Status => "status",
        }
    }
}

#[derive(Error, Debug, thisslime::TracingError, Clone, PartialEq, Eq)]
#[error("unknown state key `{key}`")]
#[event(level = WARN)]
pub struct UnknownStateKey {
    #[field(print = Display)]
    pub key: String,
}

impl FromStr for StateKey {
    type Err = UnknownStateKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s.trim())
            .ok_or_else(|| UnknownStateKey {
                key: s.trim().to_owned(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateValue {
    Word(Word),
    Letters(Vec<Letter>),
    Count(usize),
    Status(Status),
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(word) => write!(f, "{word}"),
            Self::Letters(letters) => {
                let letters = letters
                    .iter()
                    .map(Letter::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{letters}]")
            }
            Self::Count(count) => write!(f, "{count}"),
            Self::Status(status) => write!(f, "{status}"),
        }
    }
}
