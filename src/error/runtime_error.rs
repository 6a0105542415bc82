/// A runtime failure surfaced through a `Result`.
///
/// During evaluation errors are ordinary values that short-circuit the
/// surrounding expression; this type carries such a value's message across
/// the library boundary when a caller runs a whole program to completion.
#[derive(Debug)]
pub struct RuntimeError {
    /// The error message, exactly as the evaluator produced it.
    pub message: String,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RuntimeError {}
