use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryErrorKind {
    /// A step found nothing to match.
    #[error("no match for {0}")]
    NotFound(String),
    /// JSON output was requested without the `serde` feature.
    #[error("output format {0} is not available in this build")]
    UnsupportedFormat(&'static str),
    #[error("io error: {0}")]
    Io(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct QueryError {
    pub kind: QueryErrorKind,
    pub position: usize,
}

impl QueryError {
    pub fn new(kind: QueryErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub fn not_found(what: impl std::fmt::Display, position: usize) -> Self {
        Self::new(QueryErrorKind::NotFound(what.to_string()), position)
    }
}

impl From<std::io::Error> for QueryError {
    fn from(e: std::io::Error) -> Self {
        Self::new(QueryErrorKind::Io(e.to_string()), 0)
    }
}
