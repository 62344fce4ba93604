#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod cli;
use cli::{Cli, Command};

mod errors;
use errors::Error;

mod framework;
use framework::ConfigSetup;

mod games;
use games::hangman::terminal;

use clap::Parser;
use thisslime::TracingError;
use rand::{rngs::StdRng, SeedableRng};

use tracing::{debug, info, trace};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    run(cli).map_err(|err| {
        err.trace();
        err.into()
    })
}

fn run(cli: Cli) -> Result<(), Error> {
    let setup = ConfigSetup::load(cli.config.as_deref())?;

    if cli.command() == Command::Config {
        println!("# {}", setup.config_file().display());
        print!("{}", setup.to_toml().map_err(framework::config::Error::from)?);
        return Ok(());
    }

    let play = cli.play;

    framework::logging::init_tracing(&setup.logs.filter)?;
    info!("hangman {}", env!("CARGO_PKG_VERSION"));

    if let Some(flavor_text) = setup.logs.flavor_text() {
        info!("{flavor_text}")
    }

    let config = setup.finish();
    let words = config.game.words_list()?;
    debug!(words = words.len(), "words list ready");

    let mut rng = match play.seed {
        Some(seed) => {
            debug!(seed, "seeded game");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let tally = terminal::play(
        stdin.lock(),
        stdout.lock(),
        &words,
        config.settings(play.style),
        &mut rng,
    )?;

    trace!(?tally, "exiting");
    Ok(())
}
