//! # monkey
//!
//! monkey is a tree-walking interpreter for the Monkey programming
//! language: a small, dynamically-typed expression language with first-class
//! functions, closures, arrays, hash maps, and a `quote`/`unquote`
//! metaprogramming facility.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{ParseErrors, RuntimeError},
    interpreter::{
        environment::{Env, Environment},
        evaluator,
        lexer::Lexer,
        parser::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression enums that represent
/// the syntactic structure of source code as a tree. The AST is built by the
/// parser, walked by the evaluator, and reserialized to text for display and
/// for quoted values.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Reserializes nodes to fully-parenthesized source text.
/// - Provides the generic bottom-up rewrite used by `unquote`.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the errors surfaced through `Result`-shaped APIs:
/// accumulated parser messages and runtime failures. Inside the evaluator
/// itself, errors are ordinary values.
///
/// # Responsibilities
/// - Defines error types for the library's entry points.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and environments to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides the building blocks behind the crate-level entry points.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses a source string into a program plus any parser error messages.
///
/// Parsing never aborts: every problem is recorded and whatever could be
/// parsed is returned. Callers decide whether a non-empty error list rules
/// out evaluating the program.
///
/// # Examples
/// ```
/// let (program, errors) = monkey::parse("a + b * c");
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "(a + (b * c))");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.errors().to_vec();

    (program, errors)
}

/// Evaluates a parsed program against an environment.
///
/// Returns `None` when the program produced no value (an empty program, or
/// one whose last statement is a binding). Runtime errors come back as an
/// ordinary [`Value::Error`].
pub fn evaluate(program: &Program, env: &Env) -> Option<Value> {
    evaluator::core::eval_program(program, env)
}

/// Creates a fresh outermost environment.
#[must_use]
pub fn new_environment() -> Env {
    Environment::new()
}

/// Parses and runs a source string to completion.
///
/// A fresh environment is used for the run. Parser errors and runtime
/// errors are both reported through the returned `Result`; with
/// `auto_print` set, the value of the final statement (if any) is written
/// to stdout.
///
/// # Errors
/// Returns an error if the source fails to parse or if evaluation produces
/// a runtime error.
///
/// # Examples
/// ```
/// use monkey::get_result;
///
/// // The final value is computed and no error occurs.
/// let res = get_result("let result = 2 + 2; result", false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown binding).
/// let res = get_result("let y = x + 1", false); // 'x' is not defined
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        return Err(Box::new(ParseErrors::new(errors)));
    }

    let env = new_environment();

    match evaluate(&program, &env) {
        Some(Value::Error(message)) => return Err(Box::new(RuntimeError { message })),
        Some(value) => {
            if auto_print {
                println!("{value}");
            }
        },
        None => {},
    }

    Ok(())
}
