use crate::error::{ParseError, RuntimeError};

/// Message shown to users for division by zero.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Division by zero.";
/// Message shown to users for every other failure.
pub const GENERIC_MESSAGE: &str = "Unable to parse expression.";

/// The closed set of failure categories reported by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or unparseable text, including empty input.
    SyntaxError,
    /// A name missing from the registry or bound to the wrong capability.
    UnknownName,
    /// An expression shape, operator or callee outside the whitelist.
    DisallowedOperation,
    /// Arguments outside a callable's or operator's valid domain.
    DomainError,
    /// Division, modulo or floor division by zero.
    DivisionByZero,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::SyntaxError => "SyntaxError",
            Self::UnknownName => "UnknownName",
            Self::DisallowedOperation => "DisallowedOperation",
            Self::DomainError => "DomainError",
            Self::DivisionByZero => "DivisionByZero",
        };
        f.write_str(name)
    }
}

/// Any failure of [`crate::evaluate_expression`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The text could not be lexed, rewritten or parsed.
    Parse(ParseError),
    /// The expression parsed but could not be evaluated.
    Runtime(RuntimeError),
}

impl EvalError {
    /// Classifies the error into its [`ErrorKind`].
    ///
    /// # Example
    /// ```
    /// use sandcalc::{error::ErrorKind, evaluate_expression};
    ///
    /// let err = evaluate_expression("1 // 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    ///
    /// let err = evaluate_expression("fact(-1)").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DomainError);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::SyntaxError,
            Self::Runtime(e) => match e {
                RuntimeError::UnknownName { .. } => ErrorKind::UnknownName,
                RuntimeError::DisallowedOperation { .. } => ErrorKind::DisallowedOperation,
                RuntimeError::DomainError { .. }
                | RuntimeError::ArgumentCountMismatch { .. }
                | RuntimeError::UnexpectedKeyword { .. } => ErrorKind::DomainError,
                RuntimeError::DivisionByZero => ErrorKind::DivisionByZero,
            },
        }
    }

    /// Returns `true` for division, modulo or floor division by zero.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self.kind(), ErrorKind::DivisionByZero)
    }

    /// The message that may be shown to an untrusted caller.
    ///
    /// Division by zero keeps its own message; every other kind collapses into
    /// one generic message so that no internal detail leaks.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        if self.is_division_by_zero() {
            DIVISION_BY_ZERO_MESSAGE
        } else {
            GENERIC_MESSAGE
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{}: {e}", self.kind()),
            Self::Runtime(e) => write!(f, "{}: {e}", self.kind()),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
