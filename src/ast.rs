use std::fmt;

use crate::interpreter::lexer::{Token, TokenKind};

/// An integer arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
}

/// An equality or ordering operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`, `-`, `*` or `/`.
    Arithmetic(ArithmeticOperator),
    /// `==`, `!=`, `<`, `<=`, `>` or `>=`.
    Comparison(ComparisonOperator),
}

impl BinaryOperator {
    /// Maps a token kind to its binary operator, if it denotes one.
    ///
    /// # Example
    /// ```
    /// use lineal::{
    ///     ast::{BinaryOperator, ComparisonOperator},
    ///     interpreter::lexer::TokenKind,
    /// };
    ///
    /// assert_eq!(BinaryOperator::from_token(TokenKind::LessEq),
    ///            Some(BinaryOperator::Comparison(ComparisonOperator::LessEqual)));
    /// assert_eq!(BinaryOperator::from_token(TokenKind::Assign), None);
    /// ```
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        use ArithmeticOperator::{Add, Div, Mul, Sub};
        use ComparisonOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let op = match kind {
            TokenKind::Plus => Self::Arithmetic(Add),
            TokenKind::Minus => Self::Arithmetic(Sub),
            TokenKind::Star => Self::Arithmetic(Mul),
            TokenKind::Slash => Self::Arithmetic(Div),
            TokenKind::Equals => Self::Comparison(Equal),
            TokenKind::NotEquals => Self::Comparison(NotEqual),
            TokenKind::Less => Self::Comparison(Less),
            TokenKind::LessEq => Self::Comparison(LessEqual),
            TokenKind::Greater => Self::Comparison(Greater),
            TokenKind::GreaterEq => Self::Comparison(GreaterEqual),
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arithmetic(op) => write!(f, "{op}"),
            Self::Comparison(op) => write!(f, "{op}"),
        }
    }
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `-`, integer negation.
    Negate,
    /// `!`, boolean negation.
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => f.write_str("-"),
            Self::Not => f.write_str("!"),
        }
    }
}

/// An expression node.
///
/// Each node owns its children. Operator nodes keep the position of the
/// operator token so runtime errors can point at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A binary operation (addition, comparison, etc.).
    Binary {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Line of the operator.
        line:   usize,
        /// Column of the operator.
        column: usize,
    },
    /// A prefix operation.
    Unary {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line of the operator.
        line:    usize,
        /// Column of the operator.
        column:  usize,
    },
    /// A number, a boolean, or a variable reference.
    Literal {
        /// The token the value comes from.
        token: Token,
    },
}

/// A statement; one per source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `var name = initializer;`
    VarDecl {
        /// The variable being declared.
        name:        String,
        /// The value to bind.
        initializer: Expr,
        /// Line of the `var` keyword.
        line:        usize,
    },
    /// `print expr;`
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line of the `print` keyword.
        line: usize,
    },
    /// `expr;`
    Expression {
        /// The evaluated expression.
        expr: Expr,
        /// Line of the first token.
        line: usize,
    },
}
