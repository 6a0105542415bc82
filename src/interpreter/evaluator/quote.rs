use crate::{
    ast::{Expression, modify::modify_expression},
    interpreter::{environment::Env, evaluator::core, value::core::Value},
};

/// Evaluates the `quote` special form.
///
/// The argument is not evaluated; it becomes a `Quote` value wrapping its
/// own syntax tree. The one exception is `unquote(<expr>)` calls found
/// anywhere inside the quoted expression: each is evaluated in the current
/// environment and its result is spliced back into the tree as a literal.
///
/// # Parameters
/// - `node`: The unevaluated argument of the `quote` call.
/// - `env`: The environment `unquote` arguments are evaluated in.
///
/// # Returns
/// A `Value::Quote` holding the (possibly rewritten) tree. The tree is a
/// copy; splicing the same quoted value twice embeds two independent
/// subtrees.
pub fn quote(node: &Expression, env: &Env) -> Value {
    Value::Quote(Box::new(process_unquote_calls(node.clone(), env)))
}

/// Walks the quoted tree and replaces every `unquote` call with the AST
/// form of its evaluated argument.
fn process_unquote_calls(node: Expression, env: &Env) -> Expression {
    modify_expression(node, &|expression| {
        if !is_unquote_call(&expression) {
            return expression;
        }

        let Expression::Call { arguments, .. } = &expression else {
            return expression;
        };
        if arguments.len() != 1 {
            return expression;
        }

        let value = core::eval_expression(&arguments[0], env);
        match convert_value_to_expression(value) {
            Some(replacement) => replacement,
            None => expression,
        }
    })
}

/// Converts an evaluated value back into a syntax tree node.
///
/// Only integers, booleans, and quoted trees have an AST form; unquoting a
/// `Quote` splices its contained tree. Everything else has no
/// representation and leaves the original node in place.
fn convert_value_to_expression(value: Value) -> Option<Expression> {
    match value {
        Value::Integer(value) => Some(Expression::IntegerLiteral(value)),
        Value::Boolean(value) => Some(Expression::Boolean(value)),
        Value::Quote(node) => Some(*node),
        _ => None,
    }
}

/// Whether a node is a call of the literal identifier `unquote`.
///
/// Only such calls are rewritten; `unquote` outside a `quote` is a plain
/// identifier like any other.
fn is_unquote_call(expression: &Expression) -> bool {
    match expression {
        Expression::Call { function, .. } => {
            matches!(function.as_ref(), Expression::Identifier(name) if name == "unquote")
        },
        _ => false,
    }
}
