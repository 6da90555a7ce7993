#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{io, process, time::Duration};

mod app;
mod commands;
mod interact;
mod render;

use app::SearchOptions;
use commands::Commands;

use booksearch::{DEFAULT_MAX_RESULTS, DEFAULT_TIMEOUT};

use clap::{Args, Parser};
use log::{trace, warn};

fn main() {
    if let Err(err) = try_main() {
        // printed directly as errors can happen before stderrlog is set up
        eprintln!("{err}");
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    // a missing .env file is fine, the key may come from the environment or --api-key
    let dotenv = dotenvy::dotenv();

    let Cli {
        command,
        global_opts:
            GlobalOpts {
                api_key,
                max_results,
                timeout,
                verbosity,
                quiet,
            },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    match dotenv {
        Ok(path) => trace!("Loaded environment from '{}'", path.display()),
        Err(e) => match dotenv_warning(&e) {
            Some(warning) => warn!("{warning}"),
            None => trace!("No .env file found"),
        },
    }

    let options = SearchOptions {
        api_key,
        max_results,
        timeout: Duration::from_secs(timeout),
    };

    match command {
        Some(command) => command.execute(&options, &mut io::stdout().lock()),
        None => {
            trace!("No subcommand used - starting interactive search");
            app::run_interactive(&options)
        }
    }
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

/// Anything but a missing `.env` file is worth telling the user about.
fn dotenv_warning(err: &dotenvy::Error) -> Option<String> {
    if err.not_found() {
        None
    } else {
        Some(format!("Ignoring .env file: {err}"))
    }
}

const MAX_TIMEOUT_SECS: u64 = 300;

fn parse_timeout(s: &str) -> Result<u64, String> {
    match s.parse::<u64>() {
        Ok(n) if (1..=MAX_TIMEOUT_SECS).contains(&n) => Ok(n),
        _ => Err(format!("must be a number of seconds from 1 to {MAX_TIMEOUT_SECS}")),
    }
}

fn parse_max_results(s: &str) -> Result<u8, String> {
    match s.parse::<u8>() {
        Ok(n) if (1..=DEFAULT_MAX_RESULTS).contains(&n) => Ok(n),
        _ => Err(format!("must be a number from 1 to {DEFAULT_MAX_RESULTS}")),
    }
}

#[derive(Parser)]
#[clap(name = "booksearch")]
#[clap(about = "Search the Google Books API by author, title, category or ISBN in the terminal")]
#[clap(version, author)]
struct Cli {
    // without a subcommand an interactive search is started
    #[clap(subcommand)]
    command: Option<Commands>,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// The Google Books API key
    #[clap(long, env = "BOOK_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// The most results to show for a search
    #[clap(
        long,
        default_value_t = DEFAULT_MAX_RESULTS,
        parse(try_from_str = parse_max_results),
        global = true
    )]
    max_results: u8,

    /// Seconds to wait for the Google Books API before giving up
    #[clap(
        long,
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        parse(try_from_str = parse_timeout),
        global = true
    )]
    timeout: u64,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbosity: u8,

    /// Only errors will be printed to stderr.
    #[clap(short, long, global = true)]
    quiet: bool,
}
