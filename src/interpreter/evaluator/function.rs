use std::rc::Rc;

use crate::{
    ast::Expression,
    interpreter::{
        environment::{Env, Environment},
        evaluator::{core, quote},
        value::core::{FunctionValue, Value},
    },
};

/// Evaluates a call expression.
///
/// `quote` is a special form, recognized by name before anything is
/// evaluated: its single argument is reified into a syntax tree instead of
/// being run. Every other call evaluates the callee, then the arguments
/// left to right, and applies the result.
pub fn eval_call_expression(function: &Expression, arguments: &[Expression], env: &Env) -> Value {
    if let Expression::Identifier(name) = function
       && name == "quote"
    {
        if arguments.len() != 1 {
            return Value::Error(format!("wrong number of arguments. got={}, want=1",
                                        arguments.len()));
        }

        return quote::quote(&arguments[0], env);
    }

    let callee = core::eval_expression(function, env);
    if callee.is_error() {
        return callee;
    }

    let arguments = match core::eval_expressions(arguments, env) {
        Ok(arguments) => arguments,
        Err(error) => return error,
    };

    apply_function(&callee, arguments)
}

/// Applies an evaluated callee to evaluated arguments.
///
/// User functions run their body in a fresh environment chained to the one
/// they captured; a `return` wrapper coming out of the body is unwrapped
/// here, at the function boundary. Built-ins are handed the argument list
/// directly.
///
/// # Parameters
/// - `callee`: The value in call position.
/// - `arguments`: Already-evaluated arguments, left to right.
///
/// # Returns
/// The call's result: the body's value for user functions (with a body
/// that produces nothing yielding `null`), whatever the built-in returns,
/// or a `not a function` error for anything else.
pub fn apply_function(callee: &Value, arguments: Vec<Value>) -> Value {
    match callee {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Value::Error(format!("wrong number of arguments. got={}, want={}",
                                            arguments.len(),
                                            function.parameters.len()));
            }

            let env = extended_function_env(function, arguments);

            match core::eval_block_statement(&function.body, &env) {
                Some(Value::Return(value)) => *value,
                Some(value) => value,
                None => Value::Null,
            }
        },
        Value::Builtin(builtin) => (builtin.func)(&arguments),
        other => Value::Error(format!("not a function: {}", other.type_name())),
    }
}

/// Builds the call environment: a new frame enclosed by the function's
/// captured environment, with each parameter bound to its argument.
fn extended_function_env(function: &FunctionValue, arguments: Vec<Value>) -> Env {
    let env = Environment::new_enclosed(Rc::clone(&function.env));

    for (name, value) in function.parameters.iter().zip(arguments) {
        env.borrow_mut().set(name.clone(), value);
    }

    env
}
