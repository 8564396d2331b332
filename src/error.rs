/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum RqliteError {
    /// The HTTP exchange did not complete within the configured timeout.
    #[error("transport timeout: {0}")]
    Timeout(#[source] reqwest::Error),
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Response body violates the envelope's shape invariants.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// Declared column type outside the supported set.
    #[error("unsupported column type '{0}'")]
    UnsupportedColumnType(String),
    /// SQL error reported by the server for one statement.
    #[error("statement error: {0}")]
    Statement(String),
    /// Typed mapping is defined for single-statement results only.
    #[error("response carries {0} results; typed mapping supports exactly one")]
    MultipleResults(usize),
    /// Parameter list violates the all-positional-or-all-named contract.
    #[error("parameter shape mismatch: {0}")]
    ParameterShape(String),
}

impl From<reqwest::Error> for RqliteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }
}
