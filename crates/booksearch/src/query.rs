//! Building the outbound request for the Google Books volumes API.

use reqwest::Url;

use crate::{Error, ErrorKind};

/// Endpoint of the Google Books volumes search.
pub const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// The default number of results asked for, which is also the most the API will return.
pub const DEFAULT_MAX_RESULTS: u8 = 40;

/// The dimension along which the volumes API is queried.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Search by author name (`inauthor:`).
    Author,
    /// Search by book title (`intitle:`).
    Title,
    /// Search by subject or category (`subject:`).
    Category,
    /// Search by ISBN (`isbn:`).
    Identifier,
}

impl SearchMode {
    /// All modes in the order they are offered to the user.
    pub const ALL: [SearchMode; 4] = [
        SearchMode::Author,
        SearchMode::Title,
        SearchMode::Category,
        SearchMode::Identifier,
    ];

    /// The field-scoped query prefix understood by the API.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            SearchMode::Author => "inauthor:",
            SearchMode::Title => "intitle:",
            SearchMode::Category => "subject:",
            SearchMode::Identifier => "isbn:",
        }
    }

    /// Menu label of the mode.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SearchMode::Author => "1. Author",
            SearchMode::Title => "2. Title",
            SearchMode::Category => "3. Category",
            SearchMode::Identifier => "4. ISBN",
        }
    }

    /// Prompt shown when asking for the search input of this mode.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            SearchMode::Author => "Enter the name of the author",
            SearchMode::Title => "Enter the name of the book",
            SearchMode::Category => "Enter the category of the book",
            SearchMode::Identifier => "Enter the isbn of the book",
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A Google Books API key that is known not to be blank.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validates the key before any request is built.
    ///
    /// # Errors
    ///
    /// An [`ErrorKind::Configuration`] error is returned when the key is empty or only whitespace.
    pub fn new<S: Into<String>>(key: S) -> Result<Self, Error> {
        let key = key.into();
        if key.trim().is_empty() {
            Err(Error::new(ErrorKind::Configuration, "API key missing."))
        } else {
            Ok(Self(key))
        }
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

/// Description of a single volumes search request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSpec {
    query: String,
    max_results: u8,
    key: ApiKey,
}

impl RequestSpec {
    /// Builds the request for searching `input` along `mode`.
    ///
    /// `input` is scoped with the prefix of the mode and otherwise left as typed, it is only
    /// percent-encoded once rendered by [`RequestSpec::url`]. `max_results` is clamped to the
    /// `1..=40` range accepted by the API.
    #[must_use]
    pub fn build(mode: SearchMode, input: &str, key: &ApiKey, max_results: u8) -> Self {
        let mut query = mode.prefix().to_owned();
        query.push_str(input);

        Self {
            query,
            max_results: max_results.clamp(1, DEFAULT_MAX_RESULTS),
            key: key.clone(),
        }
    }

    /// The field-scoped query, e.g. `inauthor:Orwell`.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cap on the number of results asked for.
    #[must_use]
    pub const fn max_results(&self) -> u8 {
        self.max_results
    }

    /// The full request URL with every parameter percent-encoded.
    ///
    /// # Errors
    ///
    /// An [`ErrorKind::Configuration`] error is returned if the endpoint cannot be parsed as a URL.
    pub fn url(&self) -> Result<Url, Error> {
        let max_results = self.max_results.to_string();
        Url::parse_with_params(
            GOOGLE_BOOKS_URL,
            &[
                ("q", self.query.as_str()),
                ("maxResults", max_results.as_str()),
                ("key", self.key.as_str()),
            ],
        )
        .map_err(|e| Error::wrap(ErrorKind::Configuration, e))
    }
}
