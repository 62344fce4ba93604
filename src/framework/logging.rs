use tracing_subscriber::{
    filter::ParseError, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
    util::TryInitError, EnvFilter,
};

use tracing::{instrument, trace};

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
#[event(level = ERROR)]
pub enum Error {
    #[error("invalid log filter `{filter}`: {source}")]
    Filter { filter: String, source: ParseError },

    #[error("couldn't install the log subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// `RUST_LOG` wins over the configured filter.
fn env_filter(fallback: &str) -> Result<EnvFilter, Error> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(fallback).map_err(|source| Error::Filter {
            filter: fallback.to_owned(),
            source,
        })
    })
}

/// Logs go to stderr; stdout belongs to the game.
#[instrument]
pub fn init_tracing(filter: &str) -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(filter)?)
        .try_init()?;

    trace!("finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{env_filter, Error};

    #[test]
    fn bad_filter_is_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        assert!(matches!(
            env_filter("hangman=loud"),
            Err(Error::Filter { .. })
        ));
    }

    #[test]
    fn default_filter_parses() {
        assert!(env_filter("hangman=info").is_ok());
    }
}
