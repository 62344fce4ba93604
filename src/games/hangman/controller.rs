use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, instrument};

use super::{
    core::{Letter, Word},
    state::{GameState, Status},
    view::View,
    WordsList,
};

/// Anything that wants to see the game after every change.
pub trait Renderer {
    type Error;

    fn render(&mut self, view: &View) -> Result<(), Self::Error>;
}

/// Player mistakes: shown on screen, only interesting in the logs when debugging.
#[derive(Debug, Error, thisslime::TracingError, PartialEq, Eq)]
#[event(level = DEBUG)]
pub enum GuessError {
    #[error("you already guessed `{0}`")]
    AlreadyGuessed(Letter),

    #[error("the game is over, the word was `{0}`")]
    GameOver(Word),
}

#[derive(Debug, Error)]
pub enum SubmitError<E> {
    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error("couldn't render the game: {0}")]
    Render(E),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct(Status),
    Incorrect(Status),
}

impl GuessOutcome {
    pub fn status(self) -> Status {
        match self {
            Self::Correct(status) | Self::Incorrect(status) => status,
        }
    }
}

/// Owns one session's state and re-renders it after every guess.
#[derive(Debug)]
pub struct Controller<R> {
    state: GameState,
    renderer: R,
}

impl<R: Renderer> Controller<R> {
    /// Starts a session on `word` and renders it once.
    pub fn new(word: Word, max_guesses: u8, renderer: R) -> Result<Self, R::Error> {
        let mut controller = Self {
            state: GameState::new(word, max_guesses),
            renderer,
        };

        controller.render()?;
        Ok(controller)
    }

    #[instrument(skip_all)]
    pub fn random(
        words: &WordsList,
        max_guesses: u8,
        rng: &mut impl Rng,
        renderer: R,
    ) -> Result<Self, R::Error> {
        let word = words.random_answer(rng);
        debug!(%word, "starting session");

        Self::new(word, max_guesses, renderer)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Files `letter` as correct or incorrect, then renders.
    ///
    /// Repeats and guesses after the game has ended are rejected without
    /// touching the state or rendering.
    #[instrument(skip_all, fields(letter = %letter))]
    pub fn submit_guess(&mut self, letter: Letter) -> Result<GuessOutcome, SubmitError<R::Error>> {
        if self.status().is_finished() {
            return Err(GuessError::GameOver(self.state.target_word().clone()).into());
        }

        if self.state.has_guessed(letter) {
            debug!("repeated guess");
            return Err(GuessError::AlreadyGuessed(letter).into());
        }

        let correct = self.state.record(letter);
        let status = self.status();

        debug!(correct, remaining = self.state.guesses_remaining(), "guess recorded");

        match status {
            Status::Won => info!(word = %self.state.target_word(), "game won"),
            Status::Lost => info!(word = %self.state.target_word(), "game lost"),
            Status::Playing => (),
        }

        self.render().map_err(SubmitError::Render)?;

        Ok(if correct {
            GuessOutcome::Correct(status)
        } else {
            GuessOutcome::Incorrect(status)
        })
    }

    fn render(&mut self) -> Result<(), R::Error> {
        let view = View::project(&self.state);
        self.renderer.render(&view)
    }
}
