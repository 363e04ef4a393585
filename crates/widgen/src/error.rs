use thiserror::Error;

/// A specialized result type for identifier operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `widgen` can emit.
///
/// Validators never produce errors; they answer true/false. Parsers fail
/// without detail: the input either matches the grammar or it does not, and
/// no partial state is exposed either way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A width, node name, count, interval, or clock value was outside its
    /// accepted range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The input string does not conform to the identifier grammar.
    #[error("input does not match the identifier grammar")]
    InvalidInput,

    /// The paced stream has already emitted its configured count.
    #[error("stream exhausted")]
    Exhausted,
}
