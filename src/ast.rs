use std::fmt;

use num_bigint::BigInt;

/// A numeric literal as written in the expression text.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// An integer literal such as `42`, kept exact.
    Integer(BigInt),
    /// A real literal such as `3.14`, `.5` or `2e-3`.
    Real(f64),
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<BigInt> for Literal {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// A keyword argument `name=value` in a call.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    /// The keyword.
    pub name:  String,
    /// The argument expression.
    pub value: Expr,
}

/// An abstract syntax tree node representing an expression.
///
/// Every node records the byte offset of the token that introduced it. The
/// tree is immutable once the parser has built it.
///
/// `Attribute` and `Str` exist so that hostile input such as `os.system('x')`
/// parses into a tree the evaluator can reject, instead of failing as a
/// syntax error.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value:    Literal,
        /// Byte offset in the source.
        position: usize,
    },
    /// A binary operation such as `a + b`.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A prefix sign applied to an operand.
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        expr:     Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A bare name such as `pi`.
    Identifier {
        /// The name.
        name:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A call `callee(args..., kw=value...)`.
    Call {
        /// The expression being called; only identifiers are evaluable.
        callee:    Box<Self>,
        /// Positional arguments in source order.
        arguments: Vec<Self>,
        /// Keyword arguments in source order.
        keywords:  Vec<Keyword>,
        /// Byte offset of the opening parenthesis.
        position:  usize,
    },
    /// Member access `value.name`.
    Attribute {
        /// The expression whose member is accessed.
        value:    Box<Self>,
        /// The member name.
        name:     String,
        /// Byte offset of the `.`.
        position: usize,
    },
    /// A string literal.
    Str {
        /// The literal contents without quotes.
        value:    String,
        /// Byte offset in the source.
        position: usize,
    },
}

impl Expr {
    /// Returns the byte offset recorded on this node.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::Identifier { position, .. }
            | Self::Call { position, .. }
            | Self::Attribute { position, .. }
            | Self::Str { position, .. } => *position,
        }
    }
}

/// Binary operators, in the order of the grammar's precedence levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `//`
    FloorDiv,
    /// `%`
    Mod,
    /// `**`
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
        };
        write!(f, "{symbol}")
    }
}

/// Prefix sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+x`
    Plus,
    /// `-x`
    Minus,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}
