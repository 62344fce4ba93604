use thiserror::Error as ThisError;
use thisslime::TracingError;

use crate::{
    framework::{config, logging},
    games::hangman::WordsListError,
};

#[derive(Debug, ThisError, TracingError)]
#[span(level = ERROR)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::Error),

    #[error(transparent)]
    Logging(#[from] logging::Error),

    #[error(transparent)]
    Words(#[from] WordsListError),

    #[error("terminal error: {0}")]
    #[event(level = ERROR)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use thisslime::TracingError;
    use tracing_test::traced_test;

    use super::Error;
    use crate::games::hangman::{
        core::Letter, state::UnknownStateKey, terminal::ParseCommandError, GuessError,
        WordsListError,
    };

    #[test]
    #[traced_test]
    fn traces_at_chosen_level() {
        UnknownStateKey {
            key: "guessWord".to_owned(),
        }
        .trace();
        GuessError::AlreadyGuessed(Letter::try_from('q').unwrap()).trace();
        ParseCommandError::Unknown("dance".to_owned()).trace();

        assert!(logs_contain("WARN"));
        assert!(logs_contain("unknown state key `guessWord`"));
        assert!(logs_contain("DEBUG"));
        assert!(logs_contain("you already guessed `q`"));
        assert!(logs_contain("unknown command `:dance`"));
    }

    #[test]
    #[traced_test]
    fn wrapped_errors_trace_the_inner_error() {
        Error::from(WordsListError::Empty).trace();
        Error::from(std::io::Error::other("stdout closed")).trace();

        assert!(logs_contain("ERROR"));
        assert!(logs_contain("words list is empty"));
        assert!(logs_contain("stdout closed"));
    }
}
