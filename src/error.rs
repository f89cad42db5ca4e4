use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The ways a search or solve call can fail.
///
/// Exhaustion of the search space is *not* an error: searches that find no
/// goal return a result with `path: None`, and the CSP solver returns
/// `Ok(None)`. The variants here are contract violations that should fail
/// loudly before or during a call.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A transition was requested with an action that is not legal in the
    /// given state. Engines only apply actions drawn from `actions(state)`,
    /// so hitting this indicates a broken domain adapter.
    #[error("action {action} is not legal in state {state}")]
    InvalidAction { state: String, action: String },

    /// A problem instance was structurally unusable (wrong dimensions, a
    /// non-permutation tile board, a CSP variable without a domain). Raised
    /// at construction time, before any search begins.
    #[error("malformed problem input: {0}")]
    MalformedInput(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<SearchError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<SearchError> for Error {
    fn from(inner: SearchError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
