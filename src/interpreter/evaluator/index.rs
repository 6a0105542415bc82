use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expression,
    interpreter::{
        environment::Env,
        evaluator::core,
        value::{
            core::{HashPair, Value},
            hash_key::HashKey,
        },
    },
};

/// Evaluates an index expression over evaluated operands.
///
/// Arrays are indexed by integers, hashes by any hashable value. Anything
/// else does not support the index operator.
pub fn eval_index_expression(left: &Value, index: &Value) -> Value {
    match (left, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            eval_array_index_expression(elements, *position)
        },
        (Value::Hash(pairs), key) => eval_hash_index_expression(pairs, key),
        _ => Value::Error(format!("index operator not supported: {}", left.type_name())),
    }
}

/// Indexes an array. Out-of-bounds access produces `null`, not an error.
fn eval_array_index_expression(elements: &[Value], position: i64) -> Value {
    let Ok(position) = usize::try_from(position) else {
        return Value::Null;
    };

    match elements.get(position) {
        Some(element) => element.clone(),
        None => Value::Null,
    }
}

/// Indexes a hash. A missing key produces `null`; an unhashable key is a
/// runtime error.
fn eval_hash_index_expression(pairs: &HashMap<HashKey, HashPair>, key: &Value) -> Value {
    let Some(hash_key) = key.hash_key() else {
        return Value::Error(format!("unusable as hash key: {}", key.type_name()));
    };

    match pairs.get(&hash_key) {
        Some(pair) => pair.value.clone(),
        None => Value::Null,
    }
}

/// Evaluates a hash literal into a hash value.
///
/// Keys and values are evaluated in source order, key before value. A key's
/// hashability is checked as soon as the key is evaluated. A key written
/// twice keeps the value it was last given.
pub fn eval_hash_literal(entries: &[(Expression, Expression)], env: &Env) -> Value {
    let mut pairs = HashMap::new();

    for (key_expression, value_expression) in entries {
        let key = core::eval_expression(key_expression, env);
        if key.is_error() {
            return key;
        }

        let Some(hash_key) = key.hash_key() else {
            return Value::Error(format!("unusable as hash key: {}", key.type_name()));
        };

        let value = core::eval_expression(value_expression, env);
        if value.is_error() {
            return value;
        }

        pairs.insert(hash_key, HashPair { key, value });
    }

    Value::Hash(Rc::new(pairs))
}
