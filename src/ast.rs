/// Rewrites syntax trees from the bottom up.
///
/// This module implements the generic structural walk used by the
/// metaprogramming support to replace subtrees while keeping the surrounding
/// tree intact.
///
/// # Responsibilities
/// - Visits every child slot of every node exactly once, in order.
/// - Applies a caller-supplied rewrite to each expression after its children.
pub mod modify;

/// A prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!`).
    Bang,
    /// Arithmetic negation (`-`).
    Minus,
}

/// An infix (binary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Asterisk,
    /// Division (`/`)
    Slash,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    NotEq,
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Bang => "!",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{operator}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expression` covers every value-producing construct of the language, from
/// literals and identifiers to operator applications, conditionals, function
/// literals, calls, and collection literals. Each parent exclusively owns its
/// children.
///
/// The `Display` implementation reserializes a node to source-like text with
/// operator applications fully parenthesized, which makes precedence directly
/// testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(String),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// A string literal. Holds the contents without the delimiting quotes.
    StringLiteral(String),
    /// A boolean literal: `true` or `false`.
    Boolean(bool),
    /// A prefix operator application (e.g. `!ok`, `-x`).
    Prefix {
        /// The operator to apply.
        operator: PrefixOperator,
        /// The operand expression.
        right:    Box<Expression>,
    },
    /// An infix operator application (e.g. `a + b`).
    Infix {
        /// Left operand.
        left:     Box<Expression>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Expression>,
    },
    /// Conditional expression with an optional `else` branch.
    If {
        /// The condition deciding which branch runs.
        condition:   Box<Expression>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
    },
    /// A function literal (e.g. `fn(x, y) { x + y }`).
    FunctionLiteral {
        /// The parameter names.
        parameters: Vec<String>,
        /// The body evaluated when the function is called.
        body:       BlockStatement,
    },
    /// A call expression (e.g. `add(1, 2)`).
    Call {
        /// The expression producing the callee.
        function:  Box<Expression>,
        /// Arguments to the call.
        arguments: Vec<Expression>,
    },
    /// Array literal expression.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Expression>,
    },
    /// Index expression (e.g. `arr[2]`, `map["key"]`).
    Index {
        /// The collection being indexed.
        left:  Box<Expression>,
        /// The index to access.
        index: Box<Expression>,
    },
    /// Hash literal expression. Pairs keep their source order.
    HashLiteral {
        /// The `key: value` pairs, in the order written.
        pairs: Vec<(Expression, Expression)>,
    },
}

/// A statement: the unit a program is a sequence of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound value.
        value: Expression,
    },
    /// A `return` statement.
    Return {
        /// The returned value.
        value: Expression,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expression,
    },
}

/// A brace-delimited sequence of statements, as found in `if` branches and
/// function bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStatement {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// The root of a parsed source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Statement>,
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            // The trailing " ; " is kept for compatibility with the historic
            // rendering of return statements.
            Self::Return { value } => write!(f, "return {value} ; "),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::StringLiteral(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { function, arguments } => {
                let arguments: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                write!(f, "{function}({})", arguments.join(", "))
            },
            Self::ArrayLiteral { elements } => {
                let elements: Vec<String> = elements.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", elements.join(", "))
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs } => {
                let pairs: Vec<String> = pairs.iter()
                                              .map(|(key, value)| format!("{key}:{value}"))
                                              .collect();
                write!(f, "{{{}}}", pairs.join(", "))
            },
        }
    }
}
