use std::rc::Rc;

use crate::interpreter::value::core::{BuiltinFunction, Value};

/// Looks up a built-in function by name.
///
/// Consulted after the environment, so a `let` binding shadows a built-in
/// of the same name.
#[must_use]
pub fn lookup(name: &str) -> Option<Value> {
    let builtin = match name {
        "len" => BuiltinFunction { name: "len",
                                   func: builtin_len },
        "first" => BuiltinFunction { name: "first",
                                     func: builtin_first },
        "last" => BuiltinFunction { name: "last",
                                    func: builtin_last },
        "rest" => BuiltinFunction { name: "rest",
                                    func: builtin_rest },
        "push" => BuiltinFunction { name: "push",
                                    func: builtin_push },
        "puts" => BuiltinFunction { name: "puts",
                                    func: builtin_puts },
        _ => return None,
    };

    Some(Value::Builtin(builtin))
}

/// `len(x)`: the length of a string in bytes, or the element count of an
/// array.
fn builtin_len(arguments: &[Value]) -> Value {
    if arguments.len() != 1 {
        return wrong_argument_count(arguments.len(), 1);
    }

    match &arguments[0] {
        Value::Str(value) => Value::Integer(value.len() as i64),
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        other => Value::Error(format!("argument to `len` not supported, got {}",
                                      other.type_name())),
    }
}

/// `first(array)`: the first element, or `null` for an empty array.
fn builtin_first(arguments: &[Value]) -> Value {
    if arguments.len() != 1 {
        return wrong_argument_count(arguments.len(), 1);
    }

    match &arguments[0] {
        Value::Array(elements) => elements.first().cloned().unwrap_or(Value::Null),
        other => Value::Error(format!("argument to `first` must be ARRAY, got {}",
                                      other.type_name())),
    }
}

/// `last(array)`: the last element, or `null` for an empty array.
fn builtin_last(arguments: &[Value]) -> Value {
    if arguments.len() != 1 {
        return wrong_argument_count(arguments.len(), 1);
    }

    match &arguments[0] {
        Value::Array(elements) => elements.last().cloned().unwrap_or(Value::Null),
        other => Value::Error(format!("argument to `last` must be ARRAY, got {}",
                                      other.type_name())),
    }
}

/// `rest(array)`: a new array of everything after the first element, or
/// `null` for an empty array.
fn builtin_rest(arguments: &[Value]) -> Value {
    if arguments.len() != 1 {
        return wrong_argument_count(arguments.len(), 1);
    }

    match &arguments[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Value::Null
            } else {
                Value::Array(Rc::new(elements[1..].to_vec()))
            }
        },
        other => Value::Error(format!("argument to `rest` must be ARRAY, got {}",
                                      other.type_name())),
    }
}

/// `push(array, value)`: a new array with `value` appended. The original
/// array is left untouched.
fn builtin_push(arguments: &[Value]) -> Value {
    if arguments.len() != 2 {
        return wrong_argument_count(arguments.len(), 2);
    }

    match &arguments[0] {
        Value::Array(elements) => {
            let mut elements = elements.as_ref().clone();
            elements.push(arguments[1].clone());
            Value::Array(Rc::new(elements))
        },
        other => Value::Error(format!("argument to `push` must be ARRAY, got {}",
                                      other.type_name())),
    }
}

/// `puts(...)`: prints each argument on its own line and produces `null`.
fn builtin_puts(arguments: &[Value]) -> Value {
    for argument in arguments {
        println!("{argument}");
    }

    Value::Null
}

fn wrong_argument_count(got: usize, want: usize) -> Value {
    Value::Error(format!("wrong number of arguments. got={got}, want={want}"))
}
