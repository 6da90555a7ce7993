//! The state of an interactive search session.
//!
//! A session is either waiting for a query or showing the results of the last search. Searching
//! itself is not a state that outlives [`Session::submit`] as the search is blocking.

use log::{debug, trace};

use crate::{
    query::{ApiKey, RequestSpec, SearchMode},
    record::BookRecord,
    Error,
};

/// Current state of a search session, moved through each transition.
#[derive(Debug)]
pub enum Session {
    /// Waiting for the user to choose a mode and enter a query.
    AwaitingQuery {
        /// Why the previous submit did not show results, if it did not.
        notice: Option<Error>,
    },
    /// Showing the records found by the last search, which may be none.
    ResultsShown {
        /// Mode the search was made in.
        mode: SearchMode,
        /// Input as typed by the user.
        query: String,
        /// Normalized records in the order the API returned them.
        records: Vec<BookRecord>,
    },
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Starts a session waiting for the first query.
    #[must_use]
    pub const fn new() -> Self {
        Session::AwaitingQuery { notice: None }
    }

    /// Runs a search for `input` along `mode` and moves to the resulting state.
    ///
    /// Any records currently shown are replaced. A missing or blank `api_key` leaves the session
    /// awaiting a query with a configuration notice and `search` is never called. A failed
    /// `search` also leaves the session awaiting a query, with the failure as the notice.
    #[must_use]
    pub fn submit<F>(
        self,
        mode: SearchMode,
        input: &str,
        api_key: Option<&str>,
        max_results: u8,
        search: F,
    ) -> Self
    where
        F: FnOnce(&RequestSpec) -> Result<Vec<BookRecord>, Error>,
    {
        let key = match ApiKey::new(api_key.unwrap_or_default()) {
            Ok(key) => key,
            Err(err) => {
                debug!("Search not attempted: {err}");
                return Session::AwaitingQuery { notice: Some(err) };
            }
        };

        let request = RequestSpec::build(mode, input, &key, max_results);
        trace!("Searching for '{}'", request.query());

        match search(&request) {
            Ok(records) => {
                trace!("Showing {} results", records.len());
                Session::ResultsShown {
                    mode,
                    query: input.to_owned(),
                    records,
                }
            }
            Err(err) => {
                debug!("Search failed: {err}");
                Session::AwaitingQuery { notice: Some(err) }
            }
        }
    }

    /// Clears any results and waits for a new query.
    #[must_use]
    #[allow(clippy::unused_self)] // consumes the shown results
    pub fn reset(self) -> Self {
        trace!("Resetting search session");
        Session::new()
    }

    /// The records being shown, empty while awaiting a query.
    #[must_use]
    pub fn records(&self) -> &[BookRecord] {
        match self {
            Session::AwaitingQuery { .. } => &[],
            Session::ResultsShown { records, .. } => records,
        }
    }

    /// The mode and input of the search whose results are shown.
    #[must_use]
    pub fn searched(&self) -> Option<(SearchMode, &str)> {
        match self {
            Session::AwaitingQuery { .. } => None,
            Session::ResultsShown { mode, query, .. } => Some((*mode, query)),
        }
    }

    /// Takes the pending notice so it is only reported once.
    pub fn take_notice(&mut self) -> Option<Error> {
        match self {
            Session::AwaitingQuery { notice } => notice.take(),
            Session::ResultsShown { .. } => None,
        }
    }

    /// Returns `true` while waiting for a query.
    #[must_use]
    pub const fn is_awaiting_query(&self) -> bool {
        matches!(self, Session::AwaitingQuery { .. })
    }
}
