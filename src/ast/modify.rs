use crate::ast::{BlockStatement, Expression, Program, Statement};

/// Rewrites a whole program bottom-up with the given expression rewrite.
///
/// Every expression slot in the program is replaced by the result of
/// recursively rewriting it; statement and block structure is preserved.
/// Statement order and list element order never change.
pub fn modify_program<F>(program: Program, f: &F) -> Program
    where F: Fn(Expression) -> Expression
{
    let statements = program.statements
                            .into_iter()
                            .map(|statement| modify_statement(statement, f))
                            .collect();
    Program { statements }
}

/// Rewrites the expression slots of a single statement.
pub fn modify_statement<F>(statement: Statement, f: &F) -> Statement
    where F: Fn(Expression) -> Expression
{
    match statement {
        Statement::Let { name, value } => Statement::Let { name,
                                                           value: modify_expression(value, f) },
        Statement::Return { value } => Statement::Return { value: modify_expression(value, f) },
        Statement::Expression { expr } => {
            Statement::Expression { expr: modify_expression(expr, f) }
        },
    }
}

/// Rewrites every statement of a block.
pub fn modify_block<F>(block: BlockStatement, f: &F) -> BlockStatement
    where F: Fn(Expression) -> Expression
{
    let statements = block.statements
                          .into_iter()
                          .map(|statement| modify_statement(statement, f))
                          .collect();
    BlockStatement { statements }
}

/// Rewrites an expression bottom-up.
///
/// All children are rewritten first; `f` is then applied to the rebuilt node
/// itself. Replacing a child never disturbs its siblings or parent, so a
/// rewrite that returns its input unchanged reproduces the tree exactly.
///
/// # Parameters
/// - `expression`: The root of the subtree to rewrite.
/// - `f`: The rewrite applied to every expression node after its children.
///
/// # Returns
/// The rewritten expression.
///
/// # Example
/// ```
/// use monkey::ast::{Expression, modify::modify_expression};
///
/// let one_into_two = |expr| match expr {
///     Expression::IntegerLiteral(1) => Expression::IntegerLiteral(2),
///     other => other,
/// };
///
/// let rewritten = modify_expression(Expression::IntegerLiteral(1), &one_into_two);
/// assert_eq!(rewritten, Expression::IntegerLiteral(2));
/// ```
pub fn modify_expression<F>(expression: Expression, f: &F) -> Expression
    where F: Fn(Expression) -> Expression
{
    let expression = match expression {
        Expression::Prefix { operator, right } => {
            Expression::Prefix { operator,
                                 right: Box::new(modify_expression(*right, f)) }
        },
        Expression::Infix { left,
                            operator,
                            right, } => {
            Expression::Infix { left: Box::new(modify_expression(*left, f)),
                                operator,
                                right: Box::new(modify_expression(*right, f)) }
        },
        Expression::If { condition,
                         consequence,
                         alternative, } => {
            Expression::If { condition:   Box::new(modify_expression(*condition, f)),
                             consequence: modify_block(consequence, f),
                             alternative: alternative.map(|block| modify_block(block, f)), }
        },
        Expression::FunctionLiteral { parameters, body } => {
            let parameters =
                parameters.into_iter()
                          .map(|name| {
                              match modify_expression(Expression::Identifier(name.clone()), f) {
                                  Expression::Identifier(name) => name,
                                  _ => name,
                              }
                          })
                          .collect();
            Expression::FunctionLiteral { parameters,
                                          body: modify_block(body, f) }
        },
        Expression::Call { function, arguments } => {
            let arguments = arguments.into_iter()
                                     .map(|argument| modify_expression(argument, f))
                                     .collect();
            Expression::Call { function: Box::new(modify_expression(*function, f)),
                               arguments }
        },
        Expression::ArrayLiteral { elements } => {
            let elements = elements.into_iter()
                                   .map(|element| modify_expression(element, f))
                                   .collect();
            Expression::ArrayLiteral { elements }
        },
        Expression::Index { left, index } => {
            Expression::Index { left:  Box::new(modify_expression(*left, f)),
                                index: Box::new(modify_expression(*index, f)), }
        },
        Expression::HashLiteral { pairs } => {
            let pairs = pairs.into_iter()
                             .map(|(key, value)| {
                                 (modify_expression(key, f), modify_expression(value, f))
                             })
                             .collect();
            Expression::HashLiteral { pairs }
        },
        leaf @ (Expression::Identifier(_)
        | Expression::IntegerLiteral(_)
        | Expression::StringLiteral(_)
        | Expression::Boolean(_)) => leaf,
    };

    f(expression)
}
