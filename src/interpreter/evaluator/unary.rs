use crate::{ast::PrefixOperator, interpreter::value::core::Value};

/// Applies a prefix operator to an evaluated operand.
pub fn eval_prefix_expression(operator: PrefixOperator, right: &Value) -> Value {
    match operator {
        PrefixOperator::Bang => eval_bang_expression(right),
        PrefixOperator::Minus => eval_minus_expression(right),
    }
}

/// Evaluates `!<operand>`.
///
/// `!` inverts booleans and maps `null` to `true`; any other operand,
/// being truthy, maps to `false`.
fn eval_bang_expression(right: &Value) -> Value {
    match right {
        Value::Boolean(value) => Value::Boolean(!value),
        Value::Null => Value::Boolean(true),
        _ => Value::Boolean(false),
    }
}

/// Evaluates `-<operand>`, which is only defined for integers.
fn eval_minus_expression(right: &Value) -> Value {
    match right {
        Value::Integer(value) => Value::Integer(value.wrapping_neg()),
        other => Value::Error(format!("unknown operator: -{}", other.type_name())),
    }
}
