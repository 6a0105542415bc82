/// The environment module holds runtime bindings.
///
/// An environment maps names to values and links to the environment
/// enclosing it. Closures keep the environment they were created in alive,
/// so environments are shared, reference-counted values.
///
/// # Responsibilities
/// - Stores name-to-value bindings for one lexical scope.
/// - Resolves lookups through the chain of enclosing scopes.
/// - Confines writes to the innermost scope.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements,
/// applies functions and built-ins, and produces values. Runtime errors are
/// values too: they short-circuit whatever evaluation surrounds them and
/// surface as the program result unchanged.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, conditionals, and early returns.
/// - Implements the built-in functions and the quoting facility.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, an
/// identifier, an operator, or a delimiter. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into kind/literal token pairs.
/// - Handles numeric and string literals, identifiers, and keywords.
/// - Marks unrecognized bytes as illegal tokens without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the syntactic structure of statements and
/// expressions, using operator-precedence (Pratt) parsing for expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Resolves operator precedence and associativity.
/// - Accumulates error messages instead of stopping at the first problem.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares every value the interpreter can produce, including
/// integers, booleans, strings, arrays, hash maps, functions, and quoted
/// syntax trees, together with the hashing protocol for hash-map keys.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Exposes type tags and user-visible rendering.
/// - Implements hash keys for the hashable subset of values.
pub mod value;
