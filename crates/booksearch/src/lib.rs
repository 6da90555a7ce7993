#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # booksearch
//!
//! booksearch is a library for searching the Google Books volumes API by author, title, category
//! or ISBN. Responses are normalized into [`BookRecord`]s which always have every field present,
//! missing values being replaced by a readable default.
//!
//! ```no_run
//! use std::time::Duration;
//! use booksearch::{ApiKey, RequestSpec, SearchMode, DEFAULT_MAX_RESULTS};
//!
//! let key = ApiKey::new("my-api-key")?;
//! let request = RequestSpec::build(SearchMode::Author, "Orwell", &key, DEFAULT_MAX_RESULTS);
//! for book in booksearch::search(&request, Duration::from_secs(10))? {
//!     println!("{} by {}", book.title, book.authors.join(", "));
//! }
//! # Ok::<(), booksearch::Error>(())
//! ```

mod api;
mod error;
pub mod query;
pub mod record;
pub mod response;
pub mod session;

use std::time::Duration;

pub use api::Client;
pub use error::{Error, ErrorKind};
pub use query::{ApiKey, RequestSpec, SearchMode, DEFAULT_MAX_RESULTS};
pub use record::{normalize, BookRecord};
pub use session::Session;

use log::trace;

/// The time allowed for a search request when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Search the Google Books API using the default blocking client.
///
/// The request is abandoned once `timeout` has elapsed and is never retried.
///
/// # Errors
///
/// An `Err` of [`ErrorKind::Network`] is returned when the request fails, times out or the API
/// answers with a failure status.
/// An `Err` of [`ErrorKind::Decode`] is returned when the response body is not valid JSON.
pub fn search(request: &RequestSpec, timeout: Duration) -> Result<Vec<BookRecord>, Error> {
    trace!("Building HTTP client with a timeout of {timeout:?}");
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::wrap(ErrorKind::Network, e))?;

    search_with(&client, request)
}

/// Search the Google Books API using the given [`Client`].
///
/// # Errors
///
/// See [`search`].
#[inline]
pub fn search_with<C: Client>(
    client: &C,
    request: &RequestSpec,
) -> Result<Vec<BookRecord>, Error> {
    api::google_books::search_volumes(client, request)
}
