use std::rc::Rc;

use crate::{ast::InfixOperator, interpreter::value::core::Value};

/// Applies an infix operator to two evaluated operands.
///
/// Integer pairs and string pairs get their own operator sets. A string
/// repeated by an integer (in either order) is the one mixed-type
/// operation. After that, `==` and `!=` compare any two operands by
/// identity; remaining mixed-type operands are a type mismatch, and
/// same-type operands without a matching operator are an unknown operator.
///
/// # Parameters
/// - `operator`: The operator between the operands.
/// - `left`, `right`: The evaluated operands.
///
/// # Returns
/// The operation's value, or a `Value::Error` carrying one of the
/// `type mismatch`, `unknown operator`, or `negative argument error`
/// messages.
pub fn eval_infix_expression(operator: InfixOperator, left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix_expression(operator, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_infix_expression(operator, l, r),
        (Value::Str(s), Value::Integer(n)) | (Value::Integer(n), Value::Str(s))
            if operator == InfixOperator::Asterisk =>
        {
            repeat_string(s, *n)
        },
        _ => match operator {
            InfixOperator::Eq => Value::Boolean(values_identical(left, right)),
            InfixOperator::NotEq => Value::Boolean(!values_identical(left, right)),
            _ if left.type_name() != right.type_name() => {
                Value::Error(format!("type mismatch: {} {operator} {}",
                                     left.type_name(),
                                     right.type_name()))
            },
            _ => Value::Error(format!("unknown operator: {} {operator} {}",
                                      left.type_name(),
                                      right.type_name())),
        },
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic wraps on overflow; division truncates toward zero.
fn eval_integer_infix_expression(operator: InfixOperator, left: i64, right: i64) -> Value {
    match operator {
        InfixOperator::Plus => Value::Integer(left.wrapping_add(right)),
        InfixOperator::Minus => Value::Integer(left.wrapping_sub(right)),
        InfixOperator::Asterisk => Value::Integer(left.wrapping_mul(right)),
        InfixOperator::Slash => {
            if right == 0 {
                Value::Error("division by zero".to_string())
            } else {
                Value::Integer(left.wrapping_div(right))
            }
        },
        InfixOperator::Lt => Value::Boolean(left < right),
        InfixOperator::Gt => Value::Boolean(left > right),
        InfixOperator::Eq => Value::Boolean(left == right),
        InfixOperator::NotEq => Value::Boolean(left != right),
    }
}

/// String concatenation and comparison.
fn eval_string_infix_expression(operator: InfixOperator, left: &str, right: &str) -> Value {
    match operator {
        InfixOperator::Plus => Value::Str(Rc::from(format!("{left}{right}"))),
        InfixOperator::Eq => Value::Boolean(left == right),
        InfixOperator::NotEq => Value::Boolean(left != right),
        _ => Value::Error(format!("unknown operator: STRING {operator} STRING")),
    }
}

/// Repeats a string `count` times; `STRING * 0` is the empty string.
fn repeat_string(string: &str, count: i64) -> Value {
    if count < 0 {
        return Value::Error(format!("negative argument error: STRING * {count}"));
    }

    Value::Str(Rc::from(string.repeat(count as usize)))
}

/// The identity comparison backing the `==`/`!=` fallback.
///
/// Booleans and `null` compare by value. Arrays, hashes, and functions
/// compare by whether both operands are the same object, never by contents.
fn values_identical(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Boolean(l), Value::Boolean(r)) => l == r,
        (Value::Null, Value::Null) => true,
        (Value::Array(l), Value::Array(r)) => Rc::ptr_eq(l, r),
        (Value::Hash(l), Value::Hash(r)) => Rc::ptr_eq(l, r),
        (Value::Function(l), Value::Function(r)) => Rc::ptr_eq(l, r),
        (Value::Builtin(l), Value::Builtin(r)) => l == r,
        _ => false,
    }
}
