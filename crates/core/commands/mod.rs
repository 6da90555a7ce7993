use std::io::Write;

use booksearch::{SearchMode, Session};

use clap::{Args, Subcommand};
use log::trace;

use crate::{app::SearchOptions, render};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Search for books by author
    #[clap(arg_required_else_help = true)]
    Author(SearchArgs),
    /// Search for books by title
    #[clap(arg_required_else_help = true)]
    Title(SearchArgs),
    /// Search for books by category
    #[clap(arg_required_else_help = true)]
    Category(SearchArgs),
    /// Search for a book by ISBN
    #[clap(arg_required_else_help = true)]
    Isbn(SearchArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// The text to search for
    query: String,

    /// Show the publication details of every book found
    #[clap(short, long)]
    details: bool,

    /// Print the books found as JSON
    #[clap(long, conflicts_with = "details")]
    json: bool,
}

impl Commands {
    fn into_parts(self) -> (SearchMode, SearchArgs) {
        match self {
            Commands::Author(args) => (SearchMode::Author, args),
            Commands::Title(args) => (SearchMode::Title, args),
            Commands::Category(args) => (SearchMode::Category, args),
            Commands::Isbn(args) => (SearchMode::Identifier, args),
        }
    }

    pub fn execute<W: Write>(self, options: &SearchOptions, out: &mut W) -> eyre::Result<()> {
        let (mode, args) = self.into_parts();
        let SearchArgs {
            query,
            details,
            json,
        } = args;
        trace!("{mode:?} search called with the value of '{query}'");

        let mut session = options.submit(Session::new(), mode, &query);
        if let Some(notice) = session.take_notice() {
            return Err(notice.into());
        }

        if json {
            serde_json::to_writer_pretty(&mut *out, session.records())?;
            writeln!(out)?;
        } else {
            render::write_results(out, &session, details)?;
        }

        Ok(())
    }
}
