#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A name that is not bound in the registry, or bound to the wrong kind of
    /// capability (a function used as a value or a constant used as a
    /// function).
    UnknownName {
        /// The name that failed to resolve.
        name: String,
    },
    /// An expression shape or callee form outside the whitelist.
    DisallowedOperation {
        /// What was rejected.
        details: String,
    },
    /// An argument or operand outside the valid domain of an operation.
    DomainError {
        /// Details about why the value is invalid.
        details: String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The function that was called.
        name:     String,
        /// A human readable description of the accepted counts.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A keyword argument the function does not accept.
    UnexpectedKeyword {
        /// The function that was called.
        name:    String,
        /// The rejected keyword.
        keyword: String,
    },
    /// Division, floor division or modulo by zero.
    DivisionByZero,
}

impl RuntimeError {
    /// Shorthand for a [`RuntimeError::DomainError`].
    pub fn domain(details: impl Into<String>) -> Self {
        Self::DomainError { details: details.into() }
    }

    /// Shorthand for a [`RuntimeError::DisallowedOperation`].
    pub fn disallowed(details: impl Into<String>) -> Self {
        Self::DisallowedOperation { details: details.into() }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownName { name } => write!(f, "Unknown name '{name}'."),
            Self::DisallowedOperation { details } => {
                write!(f, "Operation not allowed: {details}.")
            },
            Self::DomainError { details } => write!(f, "Domain error: {details}."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Function '{name}' expects {expected} argument(s), but {found} were given."),
            Self::UnexpectedKeyword { name, keyword } => write!(f,
                                                                "Function '{name}' got an unexpected keyword argument '{keyword}'."),
            Self::DivisionByZero => write!(f, "Division by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}
