mod classify;
pub mod cli;
mod emit;
pub mod error;
pub mod options;
mod query;
pub mod seeker;

pub use emit::{Emitter, StringEmitter, WriterEmitter, emit_matches};
pub use error::{QueryError, QueryErrorKind};
pub use options::{Options, OutputFormat};
pub use query::{Match, Query, QueryLogEntry, Step};
pub use seeker::{AnyOf, Len, MoveMode, Seeker};

/// Run `query` against `input` and return the matches, borrowed from `input`.
/// With `opts.all_matches` the query is repeated after each match; otherwise a
/// step that finds nothing is reported as `QueryErrorKind::NotFound`.
pub fn run_query<'a>(
    input: &'a str,
    query: &Query,
    opts: &Options,
) -> Result<Vec<Match<'a>>, QueryError> {
    query::run_query(input, query, opts)
}

/// Run `query` and render the matches into a String using `opts.output`.
pub fn query_to_string(input: &str, query: &Query, opts: &Options) -> Result<String, QueryError> {
    let matches = query::run_query(input, query, opts)?;
    let mut out = String::new();
    emit_matches(&mut StringEmitter::new(&mut out), &matches, opts.output)?;
    Ok(out)
}

use std::io::Write;

/// Run `query` and render the matches into an `io::Write`.
/// Returns the number of matches written.
pub fn query_to_writer<W: Write + ?Sized>(
    input: &str,
    query: &Query,
    opts: &Options,
    writer: &mut W,
) -> Result<usize, QueryError> {
    let matches = query::run_query(input, query, opts)?;
    let mut em = WriterEmitter::with_capacity(writer, 8 * 1024);
    emit_matches(&mut em, &matches, opts.output)?;
    em.flush_all()?;
    Ok(matches.len())
}

#[cfg(feature = "logging")]
/// Run `query` and return both the matches and the query log.
/// The log is only populated when `opts.logging` is set.
pub fn run_query_with_log<'a>(
    input: &'a str,
    query: &Query,
    opts: &Options,
) -> Result<(Vec<Match<'a>>, Vec<QueryLogEntry>), QueryError> {
    query::run_query_with_log(input, query, opts)
}

#[cfg(test)]
mod tests;
