use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{BlockStatement, Expression},
    interpreter::{environment::Env, value::hash_key::HashKey},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce: primitives, the
/// wrapper used to carry `return` out of nested blocks, in-band errors,
/// functions with their captured environment, collections, built-ins, and
/// quoted syntax trees.
///
/// Collections and functions are behind `Rc`, so cloning a value is cheap
/// and two clones of the same array or hash refer to the same storage. The
/// `==`/`!=` operators of the language compare such values by identity, not
/// by contents.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean: `true` or `false`.
    Boolean(bool),
    /// An immutable string.
    Str(Rc<str>),
    /// The absence of a value.
    Null,
    /// A value travelling out of a `return` statement. Never observable by
    /// user code: it is unwrapped at the function or program boundary.
    Return(Box<Value>),
    /// A runtime error. Short-circuits all enclosing evaluation.
    Error(String),
    /// A user-defined function with its captured environment.
    Function(Rc<FunctionValue>),
    /// An array of values.
    Array(Rc<Vec<Value>>),
    /// A hash map from hashable values to values.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A built-in function.
    Builtin(BuiltinFunction),
    /// A quoted, unevaluated syntax tree.
    Quote(Box<Expression>),
}

/// A user-defined function: parameters, body, and the environment the
/// function literal was evaluated in.
#[derive(Clone)]
pub struct FunctionValue {
    /// The parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The body evaluated on application.
    pub body:       BlockStatement,
    /// The captured defining environment.
    pub env:        Env,
}

// The captured environment can reach back to this function through a
// binding, so the derived implementation would recurse forever.
impl std::fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

/// One entry of a hash value.
///
/// The original key value is kept alongside the stored value so hashes can
/// be rendered with the keys they were built from.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written.
    pub key:   Value,
    /// The stored value.
    pub value: Value,
}

/// A built-in function exposed to programs by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFunction {
    /// The name the built-in is looked up by.
    pub name: &'static str,
    /// The host implementation.
    pub func: fn(&[Value]) -> Value,
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Boolean(l), Self::Boolean(r)) => l == r,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::Null, Self::Null) => true,
            (Self::Return(l), Self::Return(r)) => l == r,
            (Self::Error(l), Self::Error(r)) => l == r,
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Array(l), Self::Array(r)) => l == r,
            (Self::Hash(l), Self::Hash(r)) => l == r,
            (Self::Builtin(l), Self::Builtin(r)) => l == r,
            (Self::Quote(l), Self::Quote(r)) => l == r,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(Rc::new(elements))
    }
}

impl Value {
    /// The type tag of the value, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Return(_) => "RETURN_VALUE",
            Self::Error(_) => "ERROR",
            Self::Function(_) => "FUNCTION",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Builtin(_) => "BUILTIN",
            Self::Quote(_) => "QUOTE",
        }
    }

    /// Returns `true` if the value is an in-band error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Renders the value the way the REPL and `puts` show it.
    ///
    /// Strings render as their raw contents without quotes; errors are
    /// prefixed with `ERROR: `.
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Error(message) => write!(f, "ERROR: {message}"),
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{\n{}\n}}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                // Map iteration order is arbitrary; sort the rendered pairs
                // so output is stable within and across runs.
                let mut rendered: Vec<String> =
                    pairs.values()
                         .map(|pair| format!("{}: {}", pair.key, pair.value))
                         .collect();
                rendered.sort();
                write!(f, "{{{}}}", rendered.join(", "))
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Quote(node) => write!(f, "QUOTE({node})"),
        }
    }
}
