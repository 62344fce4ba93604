use std::{fs, path::Path};

use rand::{seq::SliceRandom, Rng};
use thiserror::Error;
use tracing::{debug, trace};
use tracing_unwrap::{OptionExt, ResultExt};

use super::core::{ParseWordError, Word};

pub const DEFAULT_WORDS: [&str; 6] = ["apple", "orange", "banana", "pear", "cucumber", "kiwi"];

#[derive(Debug, Error, thisslime::TracingError)]
#[event(level = ERROR)]
pub enum Error {
    #[error("couldn't read words file `{path}`: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("line {line} of the words list: {source}")]
    Parse { line: usize, source: ParseWordError },

    #[error("words list is empty")]
    Empty,
}

/// The candidate target words a session can draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordsList {
    answers: Vec<Word>,
}

impl WordsList {
    pub fn new(answers: Vec<Word>) -> Result<Self, Error> {
        if answers.is_empty() {
            return Err(Error::Empty);
        }

        Ok(Self { answers })
    }

    pub fn parse<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Result<Self, Error> {
        let answers = words
            .into_iter()
            .enumerate()
            .filter(|(_, word)| !word.as_ref().trim().is_empty())
            .map(|(index, word)| {
                word.as_ref().parse().map_err(|source| Error::Parse {
                    line: index + 1,
                    source,
                })
            })
            .collect::<Result<Vec<Word>, _>>()?;

        Self::new(answers)
    }

    /// One word per line; blank lines are skipped.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.display().to_string(),
            source,
        })?;

        let list = Self::parse(contents.lines())?;
        debug!(words = list.len(), "loaded words list");

        Ok(list)
    }

    pub fn random_answer(&self, rng: &mut impl Rng) -> Word {
        let word = self
            .answers
            .choose(rng)
            .expect_or_log("list is checked to be non-empty")
            .clone();

        trace!(%word, "chose answer");
        word
    }

    #[cfg(test)]
    pub fn contains(&self, word: &Word) -> bool {
        self.answers.contains(word)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }
}

impl Default for WordsList {
    fn default() -> Self {
        Self::parse(DEFAULT_WORDS).expect_or_log("default words are valid")
    }
}
