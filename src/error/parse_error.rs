#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the expression text.
pub enum ParseError {
    /// The expression was empty or contained only whitespace.
    EmptyExpression,
    /// A character sequence that is not part of the grammar.
    UnexpectedCharacter {
        /// The offending text.
        text:     String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of the token encountered.
        token:    String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the matching opening parenthesis.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token:    String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// A postfix `!` with nothing to apply it to.
    InvalidFactorialPosition {
        /// Byte offset of the `!`.
        position: usize,
    },
    /// A positional argument was given after a keyword argument.
    PositionalAfterKeyword {
        /// Byte offset of the positional argument.
        position: usize,
    },
    /// The same keyword argument was given twice in one call.
    RepeatedKeyword {
        /// The repeated keyword.
        name:     String,
        /// Byte offset of the second occurrence.
        position: usize,
    },
    /// The expression has more tokens than the parser accepts.
    TooManyTokens {
        /// The number of tokens found.
        count: usize,
        /// The maximum number of tokens.
        limit: usize,
    },
    /// Parentheses are nested deeper than the parser accepts.
    NestingTooDeep {
        /// Byte offset of the parenthesis that exceeded the limit.
        position: usize,
        /// The maximum nesting depth.
        limit:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Empty expression."),

            Self::UnexpectedCharacter { text, position } => {
                write!(f, "Error at offset {position}: Unexpected character(s) '{text}'.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at offset {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at offset {position}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at offset {position}: Extra tokens after expression: {token}"),

            Self::InvalidFactorialPosition { position } => {
                write!(f, "Error at offset {position}: Invalid factorial position.")
            },

            Self::PositionalAfterKeyword { position } => write!(f,
                                                                "Error at offset {position}: Positional argument follows keyword argument."),

            Self::RepeatedKeyword { name, position } => {
                write!(f, "Error at offset {position}: Keyword argument '{name}' repeated.")
            },

            Self::TooManyTokens { count, limit } => write!(f,
                                                           "Expression has {count} tokens, the limit is {limit}."),

            Self::NestingTooDeep { position, limit } => write!(f,
                                                               "Error at offset {position}: Parentheses nested more than {limit} levels deep."),
        }
    }
}

impl std::error::Error for ParseError {}
