use std::{fmt, str::FromStr};

use thiserror::Error;

/// A single lowercase letter of the 26-letter alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// Every letter from `a` to `z`, in order.
    pub fn alphabet() -> impl Iterator<Item = Self> {
        ('a'..='z').map(Self)
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseLetterError {
    #[error("`{0}` is not a letter from a to z")]
    NotALetter(char),

    #[error("expected a single letter but got `{0}`")]
    NotSingle(String),
}

impl TryFrom<char> for Letter {
    type Error = ParseLetterError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let lower = value.to_ascii_lowercase();

        if lower.is_ascii_lowercase() {
            Ok(Self(lower))
        } else {
            Err(ParseLetterError::NotALetter(value))
        }
    }
}

impl FromStr for Letter {
    type Err = ParseLetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();

        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::try_from(ch),
            _ => Err(ParseLetterError::NotSingle(s.trim().to_owned())),
        }
    }
}

impl From<Letter> for char {
    fn from(value: Letter) -> Self {
        value.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
