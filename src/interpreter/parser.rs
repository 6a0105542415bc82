/// Parser state, the precedence ladder, and the expression loop.
///
/// Holds the `Parser` type with its one-token lookahead, the operator
/// precedence ordering, and the central loop that folds infix operators
/// around prefix-parsed operands.
pub mod core;
/// Infix parse functions.
///
/// Parses binary operator applications and the two postfix-shaped forms,
/// calls and index expressions, which sit at the top of the precedence
/// ladder.
pub mod infix;
/// Prefix parse functions.
///
/// Parses everything an expression can start with: literals, identifiers,
/// prefix operators, grouped expressions, conditionals, function literals,
/// and collection literals.
pub mod prefix;
/// Statement parsing.
///
/// Parses `let`, `return`, expression statements, and brace-delimited
/// blocks.
pub mod statement;

pub use self::core::{Parser, Precedence};
