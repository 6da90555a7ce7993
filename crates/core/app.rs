use std::{io, time::Duration};

use booksearch::{SearchMode, Session};
use log::trace;

use crate::{interact, render};

/// Settings shared by every search made during a run.
pub struct SearchOptions {
    pub api_key: Option<String>,
    pub max_results: u8,
    pub timeout: Duration,
}

impl SearchOptions {
    pub fn submit(&self, session: Session, mode: SearchMode, input: &str) -> Session {
        session.submit(
            mode,
            input,
            self.api_key.as_deref(),
            self.max_results,
            |request| booksearch::search(request, self.timeout),
        )
    }
}

/// What the user picked from the results list.
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Details(usize),
    SearchAgain,
    Quit,
}

/// Maps a selection in the results list, where the records are followed by the "Search again"
/// and "Quit" items.
const fn choice(selection: Option<usize>, records: usize) -> Choice {
    match selection {
        Some(i) if i < records => Choice::Details(i),
        Some(i) if i == records => Choice::SearchAgain,
        _ => Choice::Quit,
    }
}

pub fn run_interactive(options: &SearchOptions) -> eyre::Result<()> {
    let mut session = Session::new();

    loop {
        if let Some(notice) = session.take_notice() {
            eprintln!("{notice}");
        }

        session = if session.is_awaiting_query() {
            let mode = match interact::user_select_mode()? {
                Some(mode) => mode,
                None => {
                    trace!("Search cancelled");
                    return Ok(());
                }
            };
            let input = interact::user_input(mode.prompt())?;
            options.submit(session, mode, &input)
        } else {
            match browse_results(&session)? {
                Choice::SearchAgain => session.reset(),
                Choice::Details(_) | Choice::Quit => return Ok(()),
            }
        };
    }
}

/// Shows the results and opens the details of any book picked until the user chooses to search
/// again or quit.
fn browse_results(session: &Session) -> eyre::Result<Choice> {
    render::write_results(&mut io::stdout().lock(), session, false)?;

    let records = session.records();
    let mut items = records
        .iter()
        .map(|record| format!("More details: {}", record.title))
        .collect::<Vec<_>>();
    items.push("Search again".to_owned());
    items.push("Quit".to_owned());

    loop {
        let selection = interact::user_select("Select a book for more details", &items)?;
        match choice(selection, records.len()) {
            Choice::Details(i) => render::write_details(&mut io::stdout().lock(), &records[i])?,
            other => return Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{choice, Choice};

    #[test]
    fn selection_maps_to_choice() {
        assert_eq!(Choice::Details(0), choice(Some(0), 2));
        assert_eq!(Choice::Details(1), choice(Some(1), 2));
        assert_eq!(Choice::SearchAgain, choice(Some(2), 2));
        assert_eq!(Choice::Quit, choice(Some(3), 2));
        assert_eq!(Choice::Quit, choice(None, 2));
    }

    #[test]
    fn empty_results_still_offer_search_again() {
        assert_eq!(Choice::SearchAgain, choice(Some(0), 0));
        assert_eq!(Choice::Quit, choice(Some(1), 0));
    }
}
