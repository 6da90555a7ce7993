pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The Errors that may occur when building or running a book search.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required configuration, such as the API key, is missing or blank.
    Configuration,
    /// The request could not be sent, timed out or was answered with a failure status.
    Network,
    /// The response body could not be decoded into the expected shape.
    Decode,
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::Configuration => f.write_str("Configuration error")?,
            ErrorKind::Network => f.write_str("Network error")?,
            ErrorKind::Decode => f.write_str("Decode error")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn display_includes_kind_and_message() {
        let err = Error::new(ErrorKind::Configuration, "API key missing.");
        assert_eq!("Configuration error: API key missing.", err.to_string());
    }

    #[test]
    fn display_includes_wrapped_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::TimedOut, "operation timed out");
        let err = Error::wrap(ErrorKind::Network, cause);

        assert_eq!(ErrorKind::Network, err.kind());
        assert_eq!("Network error: caused by operation timed out", err.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }
}
