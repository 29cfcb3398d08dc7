use thiserror::Error;

/// The only failures that cross the core boundary as request-level errors.
/// Degraded lookups, invalid numbers and unmatched text queries are all
/// normal results, not errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolveError {
    /// Empty or absent input; the boundary maps this to a 4xx-equivalent.
    #[error("Empty input")]
    EmptyInput,
    /// Unexpected fault during merge/scoring; the boundary logs it and maps
    /// it to a 5xx-equivalent. A half-merged result is never returned. The
    /// current merge path is infallible, so the engine never constructs this
    /// variant itself; it is part of the boundary contract for callers that
    /// wrap `resolve` with their own fallible plumbing.
    #[error("Internal fault: {0}")]
    Internal(String),
}
