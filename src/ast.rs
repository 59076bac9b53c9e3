use std::fmt;
use std::rc::Rc;

/// A complete parsed source unit.
///
/// A program is an ordered sequence of statements. It is produced by the
/// parser and consumed by the evaluator; printing a program reproduces a
/// source form that parses back to the same tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A single statement.
///
/// Statements are the units a program and a block are made of. Only three
/// forms exist; everything else in the language is an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` binding: `let name = value;`.
    Let {
        /// The bound identifier.
        name:  String,
        /// The expression whose value is bound.
        value: Expression,
    },
    /// A `return` statement. A bare `return;` carries no expression and
    /// yields `nil`.
    Return(Option<Expression>),
    /// An expression evaluated for its value: `<expr>;`.
    Expression(Expression),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return(None) => write!(f, "return;"),
            Self::Return(Some(value)) => write!(f, "return {value};"),
            Self::Expression(expression) => write!(f, "{expression}"),
        }
    }
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as `if` branches and function bodies. A block is not an
/// expression on its own; it evaluates to the value of its last statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// The statements inside the braces, in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for statement in &self.statements {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{statement}")?;
            first = false;
        }
        Ok(())
    }
}

/// An expression node.
///
/// The variants form a closed family; ownership is tree-shaped, with a
/// parent exclusively owning its children. The one exception is a function
/// body, which is reference-counted so that closures can keep it alive
/// after the enclosing program has been dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A name to resolve against the environment (or the builtin table).
    Identifier(String),
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A boolean literal, `true` or `false`.
    Boolean(bool),
    /// A string literal. The lexeme is stored without its quotes.
    Str(String),
    /// An array literal: `[a, b, c]`.
    Array(Vec<Self>),
    /// A hash literal: `{k1: v1, k2: v2}`. Pairs keep their source order
    /// so evaluation is observably left-to-right.
    Hash(Vec<(Self, Self)>),
    /// A prefix operator application, `!x` or `-x`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Self>,
    },
    /// A binary operator application.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A conditional expression: `if (cond) { ... } else { ... }`.
    If {
        /// The condition; any truthy value selects the consequence.
        condition:   Box<Self>,
        /// The branch taken when the condition is truthy.
        consequence: Block,
        /// The optional `else` branch.
        alternative: Option<Block>,
    },
    /// A function literal: `fn(a, b) { ... }`. Evaluating it captures the
    /// current environment into a closure.
    Function {
        /// Parameter names in declaration order.
        parameters: Vec<String>,
        /// The shared function body.
        body:       Rc<Block>,
    },
    /// A call: `callee(a, b)`.
    Call {
        /// The expression evaluating to the function being called.
        callee:    Box<Self>,
        /// Argument expressions in source order.
        arguments: Vec<Self>,
    },
    /// An index access: `target[index]`.
    Index {
        /// The collection being indexed.
        target: Box<Self>,
        /// The index or key expression.
        index:  Box<Self>,
    },
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "\"{value}\""),
            Self::Array(elements) => {
                write!(f, "[")?;
                write_separated(f, elements)?;
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if ({condition}) {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::Function { parameters, body } => {
                write!(f, "fn(")?;
                for (index, parameter) in parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {{ {body} }}")
            },
            Self::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_separated(f, arguments)?;
                write!(f, ")")
            },
            Self::Index { target, index } => write!(f, "({target}[{index}])"),
        }
    }
}

fn write_separated(f: &mut fmt::Formatter<'_>, expressions: &[Expression]) -> fmt::Result {
    for (index, expression) in expressions.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{expression}")?;
    }
    Ok(())
}

/// A prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

/// A binary operator.
///
/// The `Display` form is the source lexeme; runtime error messages embed it
/// verbatim.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`), also string concatenation.
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Remainder (`%`).
    Mod,
    /// Less than (`<`).
    Less,
    /// Greater than (`>`).
    Greater,
    /// Equality (`==`).
    Equal,
    /// Inequality (`!=`).
    NotEqual,
    /// Short-circuiting logical and (`&&`).
    And,
    /// Short-circuiting logical or (`||`).
    Or,
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{operator}")
    }
}
