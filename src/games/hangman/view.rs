use std::borrow::Cow;

use super::{
    core::{Letter, Word},
    state::{GameState, Status},
    GameStyle,
};

pub const DEFAULT_PLACEHOLDER: char = '_';

/// Shown in place of a key that has already been used.
const USED_KEY: char = '-';

/// Text projections of what's on screen.
pub trait AsText {
    fn as_text(&self, placeholder: char) -> Cow<'_, str>;

    fn text_spaced(&self, placeholder: char) -> String {
        self.as_text(placeholder).into()
    }

    fn text_with_keyboard(&self, placeholder: char) -> String {
        self.text_spaced(placeholder)
    }

    fn text_with_style(&self, style: GameStyle, placeholder: char) -> Cow<'_, str> {
        match style {
            GameStyle::Compact => self.as_text(placeholder),
            GameStyle::Spaced => self.text_spaced(placeholder).into(),
            GameStyle::Keyboard => self.text_with_keyboard(placeholder).into(),
        }
    }
}

/// One cell per position of the target word; `None` until that letter is guessed.
/// Revealed cells keep the word's own spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    cells: Vec<Option<char>>,
}

impl Mask {
    pub fn new(word: &Word, correct: &[Letter]) -> Self {
        let cells = word
            .spelled()
            .map(|(letter, ch)| correct.contains(&letter).then_some(ch))
            .collect();

        Self { cells }
    }

    fn chars(&self, placeholder: char) -> impl Iterator<Item = char> + '_ {
        self.cells
            .iter()
            .map(move |cell| cell.unwrap_or(placeholder))
    }
}

impl AsText for Mask {
    fn as_text(&self, placeholder: char) -> Cow<'_, str> {
        self.chars(placeholder).collect::<String>().into()
    }

    fn text_spaced(&self, placeholder: char) -> String {
        self.chars(placeholder)
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub letter: Letter,
    pub available: bool,
}

/// The 26 guess controls. A key goes dead once its letter has been guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    keys: Vec<Key>,
}

impl Keyboard {
    pub fn new(state: &GameState) -> Self {
        let keys = Letter::alphabet()
            .map(|letter| Key {
                letter,
                available: !state.has_guessed(letter),
            })
            .collect();

        Self { keys }
    }
}

impl AsText for Keyboard {
    fn as_text(&self, _placeholder: char) -> Cow<'_, str> {
        self.keys
            .iter()
            .map(|key| {
                if key.available {
                    key.letter.as_char().to_string()
                } else {
                    USED_KEY.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
            .into()
    }
}

/// A read-only projection of a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Playing {
        mask: Mask,
        guesses_remaining: usize,
        keyboard: Keyboard,
    },
    Won {
        word: Word,
    },
    Lost {
        word: Word,
    },
}

impl View {
    pub fn project(state: &GameState) -> Self {
        match state.status() {
            Status::Lost => Self::Lost {
                word: state.target_word().clone(),
            },
            Status::Won => Self::Won {
                word: state.target_word().clone(),
            },
            Status::Playing => Self::Playing {
                mask: Mask::new(state.target_word(), state.correct_guesses()),
                guesses_remaining: state.guesses_remaining(),
                keyboard: Keyboard::new(state),
            },
        }
    }

    /// The revealed word, once the game is over.
    pub fn revealed(&self) -> Option<&Word> {
        match self {
            Self::Won { word } | Self::Lost { word } => Some(word),
            Self::Playing { .. } => None,
        }
    }

    fn panel(&self) -> Option<String> {
        let word = self.revealed()?;

        Some(if matches!(self, Self::Won { .. }) {
            format!("you win! the word was: {word}")
        } else {
            format!("you lose! the word was: {word}")
        })
    }

    fn with_counter(&self, mask: String) -> String {
        match self {
            Self::Playing {
                guesses_remaining, ..
            } => format!("{mask}\nguesses remaining: {guesses_remaining}"),
            _ => mask,
        }
    }
}

impl AsText for View {
    fn as_text(&self, placeholder: char) -> Cow<'_, str> {
        match self {
            Self::Playing { mask, .. } => self
                .with_counter(mask.as_text(placeholder).into_owned())
                .into(),
            _ => self.panel().unwrap_or_default().into(),
        }
    }

    fn text_spaced(&self, placeholder: char) -> String {
        match self {
            Self::Playing { mask, .. } => self.with_counter(mask.text_spaced(placeholder)),
            _ => self.panel().unwrap_or_default(),
        }
    }

    fn text_with_keyboard(&self, placeholder: char) -> String {
        match self {
            Self::Playing { keyboard, .. } => format!(
                "{}\n\n{}",
                self.text_spaced(placeholder),
                keyboard.as_text(placeholder)
            ),
            _ => self.panel().unwrap_or_default(),
        }
    }
}
