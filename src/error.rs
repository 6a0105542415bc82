/// Parsing errors.
///
/// Defines the error type surfaced when a source text fails to parse. The
/// parser itself accumulates plain messages and never aborts; this type wraps
/// the accumulated list for callers that want a `Result`-shaped API.
pub mod parse_error;
/// Runtime errors.
///
/// Defines the error type surfaced when evaluation produces an error value
/// and the caller asked for a `Result`-shaped API. Inside the evaluator,
/// errors travel as first-class values rather than as this type.
pub mod runtime_error;

pub use parse_error::ParseErrors;
pub use runtime_error::RuntimeError;
