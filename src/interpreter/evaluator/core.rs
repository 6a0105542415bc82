use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    interpreter::{
        environment::Env,
        evaluator::{binary, builtin, function, index, unary},
        value::core::{FunctionValue, Value},
    },
};

/// Evaluates a whole program against the given environment.
///
/// Statements run in order. A `return` wrapper ends the run and is unwrapped
/// into the program's result; an error value ends the run and becomes the
/// result unchanged. Otherwise the result is whatever the last statement
/// produced, which is `None` for statements such as `let` that yield no
/// value.
///
/// # Parameters
/// - `program`: The parsed program to run.
/// - `env`: The environment top-level bindings go into.
///
/// # Returns
/// `Some(Value)` for programs that produce a value, or `None` when the last
/// statement yields nothing.
pub fn eval_program(program: &Program, env: &Env) -> Option<Value> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Some(Value::Return(value)) => return Some(*value),
            Some(Value::Error(message)) => return Some(Value::Error(message)),
            other => result = other,
        }
    }

    result
}

/// Evaluates the statements of a block.
///
/// Like [`eval_program`], except that a `return` wrapper is passed along
/// still wrapped: it must keep unwinding until it reaches the enclosing
/// function or program boundary.
pub fn eval_block_statement(block: &BlockStatement, env: &Env) -> Option<Value> {
    let mut result = None;

    for statement in &block.statements {
        match eval_statement(statement, env) {
            Some(value @ (Value::Return(_) | Value::Error(_))) => return Some(value),
            other => result = other,
        }
    }

    result
}

/// Evaluates a single statement.
///
/// `let` binds its evaluated value and produces nothing; `return` wraps its
/// evaluated value for the enclosing boundary to unwrap; an expression
/// statement produces the expression's value.
pub fn eval_statement(statement: &Statement, env: &Env) -> Option<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return Some(value);
            }

            env.borrow_mut().set(name.clone(), value);
            None
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return Some(value);
            }

            Some(Value::Return(Box::new(value)))
        },
        Statement::Expression { expr } => Some(eval_expression(expr, env)),
    }
}

/// Evaluates an expression to a value.
///
/// This is the main dispatch of the interpreter. Errors are ordinary values
/// here: every arm checks its sub-results and passes the first error along
/// unchanged instead of doing any further work.
///
/// # Parameters
/// - `expression`: Expression to evaluate.
/// - `env`: Environment identifiers are resolved against.
///
/// # Returns
/// The computed [`Value`]; possibly a `Value::Error` or a `Value::Return`
/// wrapper travelling towards its boundary.
pub fn eval_expression(expression: &Expression, env: &Env) -> Value {
    match expression {
        Expression::Identifier(name) => eval_identifier(name, env),
        Expression::IntegerLiteral(value) => Value::Integer(*value),
        Expression::StringLiteral(value) => Value::Str(Rc::from(value.as_str())),
        Expression::Boolean(value) => Value::Boolean(*value),
        Expression::Prefix { operator, right } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }

            unary::eval_prefix_expression(*operator, &right)
        },
        Expression::Infix { left,
                            operator,
                            right, } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }

            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }

            binary::eval_infix_expression(*operator, &left, &right)
        },
        Expression::If { condition,
                         consequence,
                         alternative, } => {
            eval_if_expression(condition, consequence, alternative.as_ref(), env)
        },
        Expression::FunctionLiteral { parameters, body } => {
            Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                    body:       body.clone(),
                                                    env:        Rc::clone(env), }))
        },
        Expression::Call { function, arguments } => {
            function::eval_call_expression(function, arguments, env)
        },
        Expression::ArrayLiteral { elements } => match eval_expressions(elements, env) {
            Ok(elements) => Value::Array(Rc::new(elements)),
            Err(error) => error,
        },
        Expression::Index { left, index } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }

            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }

            index::eval_index_expression(&left, &index)
        },
        Expression::HashLiteral { pairs } => index::eval_hash_literal(pairs, env),
    }
}

/// Resolves an identifier against the environment, falling back to the
/// built-in table.
fn eval_identifier(name: &str, env: &Env) -> Value {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }

    match builtin::lookup(name) {
        Some(value) => value,
        None => Value::Error(format!("identifier not found: {name}")),
    }
}

/// Evaluates a conditional expression.
///
/// Only `false` and `null` fail the condition; every other value, including
/// `0` and `""`, selects the consequence. Without an `else`, a failed
/// condition produces `null`.
fn eval_if_expression(condition: &Expression,
                      consequence: &BlockStatement,
                      alternative: Option<&BlockStatement>,
                      env: &Env)
                      -> Value {
    let condition = eval_expression(condition, env);
    if condition.is_error() {
        return condition;
    }

    if is_truthy(&condition) {
        eval_block_statement(consequence, env).unwrap_or(Value::Null)
    } else if let Some(alternative) = alternative {
        eval_block_statement(alternative, env).unwrap_or(Value::Null)
    } else {
        Value::Null
    }
}

/// The truthiness rule used by conditionals.
#[must_use]
pub const fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Boolean(value) => *value,
        _ => true,
    }
}

/// Evaluates a list of expressions left to right.
///
/// The first error aborts the walk and is returned as the `Err` variant.
pub(in crate::interpreter::evaluator) fn eval_expressions(expressions: &[Expression],
                                                          env: &Env)
                                                          -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(expressions.len());

    for expression in expressions {
        let value = eval_expression(expression, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }

    Ok(values)
}
