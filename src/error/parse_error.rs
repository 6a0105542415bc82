/// The accumulated error messages of a failed parse.
///
/// The parser records every problem it finds and keeps going, so a single
/// source text can produce several messages. The messages are stored in the
/// order they were recorded.
#[derive(Debug)]
pub struct ParseErrors {
    errors: Vec<String>,
}

impl ParseErrors {
    /// Wraps a non-empty list of parser error messages.
    #[must_use]
    pub const fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// The recorded messages, in the order they were produced.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.errors
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parsing failed with {} error(s):", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
