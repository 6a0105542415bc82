/// Defines the `Value` enum and its rendering.
///
/// Declares every value variant the evaluator can produce, the type tags
/// used in error messages, and the user-visible `inspect` formatting.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements equality with the sharing semantics the evaluator relies on.
/// - Renders values for the REPL and for `puts`.
pub mod core;
/// Hashing of values used as hash-map keys.
///
/// Only integers, booleans, and strings are hashable. This module defines
/// the key representation and the string hash used to build it.
///
/// # Responsibilities
/// - Defines the `HashKey` pair of type tag and 64-bit payload.
/// - Implements a deterministic 64-bit string hash (FNV-1a).
pub mod hash_key;
