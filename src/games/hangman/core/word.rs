use std::{collections::BTreeSet, fmt, ops::Index, slice::Iter, str::FromStr};

use thiserror::Error;

use super::letter::{Letter, ParseLetterError};

/// A target word: its letters in order, plus the set of distinct letters in it.
///
/// Guesses match case-insensitively, but the word keeps the spelling it was
/// chosen with for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    letters: Vec<Letter>,
    unique: BTreeSet<Letter>,
    spelling: String,
}

impl Word {
    pub fn iter(&self) -> Iter<'_, Letter> {
        self.letters.iter()
    }

    /// Each letter next to the character it was spelled with.
    pub fn spelled(&self) -> impl Iterator<Item = (Letter, char)> + '_ {
        self.letters.iter().copied().zip(self.spelling.chars())
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.unique.contains(&letter)
    }

    pub fn count_unique(&self) -> usize {
        self.unique.len()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWordError {
    #[error("word must not be empty")]
    Empty,

    #[error("word `{word}` is invalid: {source}")]
    Letter {
        word: String,
        source: ParseLetterError,
    },
}

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(ParseWordError::Empty);
        }

        let letters = s
            .chars()
            .map(Letter::try_from)
            .collect::<Result<Vec<Letter>, _>>()
            .map_err(|source| ParseWordError::Letter {
                word: s.to_owned(),
                source,
            })?;

        let unique = letters.iter().copied().collect();

        Ok(Self {
            letters,
            unique,
            spelling: s.to_owned(),
        })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spelling)
    }
}

impl Index<usize> for Word {
    type Output = Letter;

    fn index(&self, index: usize) -> &Self::Output {
        self.letters.index(index)
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Letter;
    type IntoIter = Iter<'a, Letter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
