/// Infix operator evaluation.
///
/// Applies binary operators to evaluated operands: integer arithmetic and
/// comparison, string concatenation and repetition, and the identity-based
/// equality fallback for everything else.
pub mod binary;
/// The built-in function table.
///
/// Host-implemented functions available to every program by name: `len`,
/// `first`, `last`, `rest`, `push`, and `puts`.
pub mod builtin;
/// The recursive evaluation core.
///
/// Dispatches on AST node variants, runs programs and blocks, handles
/// bindings, conditionals and literals, and propagates `return` wrappers
/// and error values.
pub mod core;
/// Call evaluation and closure application.
///
/// Evaluates callees and arguments, binds parameters in a fresh environment
/// chained to the function's captured one, and unwraps returned values at
/// the function boundary.
pub mod function;
/// Index operations.
///
/// Array and hash indexing, plus hash literal construction with key
/// hashability checking.
pub mod index;
/// Quoting and unquoting.
///
/// Builds `Quote` values from unevaluated syntax trees, splicing in the
/// results of `unquote` calls found inside the quoted expression.
pub mod quote;
/// Prefix operator evaluation.
///
/// Applies `!` and `-` to evaluated operands.
pub mod unary;
